use super::*;
use crate::encoder::{encode, encode_with_options};

// ========================================================================
// Feste Vektoren
// ========================================================================

#[test]
fn single_zero() {
    assert_eq!(decode(&[1], &[0x00]).unwrap(), vec![0]);
}

#[test]
fn specifiers_then_payloads() {
    assert_eq!(decode(&[4, 5], &[0x17, 0x40, 0xE4]).unwrap(), vec![1, 12345]);
    assert_eq!(decode(&[4, 5], &[0x47, 0x08, 0x1C, 0x80]).unwrap(), vec![8, 12345]);
    assert_eq!(decode(&[3, 3], &[0x0D]).unwrap(), vec![0, 5]);
}

#[test]
fn full_width_value_misaligned() {
    assert_eq!(
        decode(&[6], &[0x81, 0xB1, 0xB4, 0x91, 0x10]).unwrap(),
        vec![0xB636_9222]
    );
    assert_eq!(
        decode(&[6, 1], &[0x83, 0xFF, 0xFF, 0xFF, 0xFC]).unwrap(),
        vec![u32::MAX, 1]
    );
}

#[test]
fn empty_descriptor_decodes_nothing() {
    assert_eq!(decode(&[], &[]).unwrap(), Vec::<u32>::new());
    assert_eq!(decode(&[], &[0xFF]).unwrap(), Vec::<u32>::new());
}

#[test]
fn trailing_bytes_are_ignored() {
    assert_eq!(decode(&[3, 3], &[0x0D, 0xFF, 0xFF]).unwrap(), vec![0, 5]);
}

#[test]
fn activity_record() {
    // Aktionstyp, Akteurtyp, Akteur-ID, Objekttyp, Objekt-ID
    let fields = [3, 3, 6, 3, 6];
    let values = [1, 5, 1_128_411, 2, 123_456_789];
    let bytes = encode(&fields, &values).unwrap();
    assert_eq!(decode(&fields, &bytes).unwrap(), values);
}

// ========================================================================
// Fehlerfälle
// ========================================================================

#[test]
fn truncated_empty_input() {
    assert_eq!(
        decode(&[6, 1], &[]).unwrap_err(),
        Error::OutOfData { needed: 6, available: 0 }
    );
}

#[test]
fn truncated_payload() {
    // Specifier verlangen 13 Payload-Bits, es sind nur 7 vorhanden.
    assert_eq!(
        decode(&[4, 5], &[0x17, 0x40]).unwrap_err(),
        Error::OutOfData { needed: 13, available: 7 }
    );
}

#[test]
fn descriptor_mismatch_runs_out_of_data() {
    // 10|100000: mit vier 2-Bit-Feldern gelesen fehlen die Payload-Bits.
    let bytes = encode(&[2], &[3]).unwrap();
    assert_eq!(
        decode(&[2, 2, 2, 2], &bytes).unwrap_err(),
        Error::OutOfData { needed: 1, available: 0 }
    );
}

#[test]
fn specifier_above_32_rejected() {
    // 6-Bit-Specifier 101000 = 40
    assert_eq!(
        decode(&[6], &[0xA0, 0, 0, 0, 0, 0]).unwrap_err(),
        Error::InvalidLengthSpecifier { index: 0, specifier: 40 }
    );
}

#[test]
fn zero_field_width_rejected() {
    assert_eq!(
        decode(&[2, 0], &[0x00]).unwrap_err(),
        Error::ZeroFieldWidth { index: 1 }
    );
}

#[test]
fn wide_field_rejected_by_default() {
    assert_eq!(
        decode(&[33], &[0; 8]).unwrap_err(),
        Error::FieldWidthTooLarge { index: 0, width: 33 }
    );
}

#[test]
fn wide_field_round_trip_when_permissive() {
    let opts = CodecOptions::permissive();
    let fields = [40, 3, 255];
    let values = [3, 0, 0xDEAD_BEEF];
    let bytes = encode_with_options(&fields, &values, &opts).unwrap();
    assert_eq!(decode_with_options(&fields, &bytes, &opts).unwrap(), values);
}

#[test]
fn wide_field_with_nonzero_high_bits_rejected() {
    let opts = CodecOptions::permissive();
    assert_eq!(
        decode_with_options(&[40], &[0x80, 0, 0, 0, 0], &opts).unwrap_err(),
        Error::InvalidLengthSpecifier {
            index: 0,
            specifier: u32::MAX
        }
    );
}
