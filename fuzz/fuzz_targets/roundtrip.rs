#![no_main]
use libfuzzer_sys::fuzz_target;

// Je 5 Bytes ein Feld: Breite, dann der Wert (little endian).
fuzz_target!(|data: &[u8]| {
    let mut fields = Vec::new();
    let mut values = Vec::new();
    for chunk in data.chunks_exact(5) {
        let width = chunk[0] % 32 + 1;
        let value = u32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        fields.push(width);
        values.push(value);
    }
    match fwvarint::encode(&fields, &values) {
        Ok(bytes) => {
            assert_eq!(fwvarint::decode(&fields, &bytes).unwrap(), values);
        }
        Err(fwvarint::Error::ValueTooLarge { index, .. }) => {
            assert!(!fwvarint::bit_width::fits(values[index], fields[index]));
        }
        Err(other) => panic!("unexpected error {other}"),
    }
});
