#![no_main]
use libfuzzer_sys::fuzz_target;

// Erstes Byte: Anzahl Felder, dann die Feldbreiten, Rest ist der Puffer.
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = (count as usize % 32).min(rest.len());
    let (widths, bytes) = rest.split_at(count);
    if let Ok(values) = fwvarint::decode(widths, bytes) {
        assert_eq!(values.len(), widths.len());
        // Gültig decodierte Werte müssen sich wieder encodieren lassen.
        let again = fwvarint::encode(widths, &values).expect("re-encode decoded values");
        assert_eq!(fwvarint::decode(widths, &again).unwrap(), values);
    }
});
