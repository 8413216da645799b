//! Tests for the primitive EXI value codecs.
use super::*;

#[test]
fn test_boolean_round_trip() {
    let mut buffer = [0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_boolean(&mut writer, true).unwrap();
        write_boolean(&mut writer, false).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert!(read_boolean(&mut reader).unwrap());
    assert!(!read_boolean(&mut reader).unwrap());
}

#[test]
fn test_uint_n_round_trip() {
    let mut buffer = [0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_uint_n(&mut writer, 0b101, 3).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_uint_n(&mut reader, 3).unwrap(), 0b101);
}

#[test]
/// A single-byte var-int (continuation bit clear) round-trips.
fn test_uvarint32_single_byte() {
    let mut buffer = [0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_uvarint32(&mut writer, 42).unwrap();
    }
    assert_eq!(buffer[0], 42);
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_uvarint32(&mut reader).unwrap(), 42);
}

#[test]
/// A value needing two 7-bit groups sets the continuation bit on the first byte.
fn test_uvarint32_multi_byte() {
    let mut buffer = [0x00, 0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_uvarint32(&mut writer, 300).unwrap();
    }
    assert_eq!(buffer[0] & 0x80, 0x80);
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_uvarint32(&mut reader).unwrap(), 300);
}

#[test]
fn test_uvarint16_rejects_overflow() {
    // 3 groups of 7 bits = 21 bits of payload, comfortably over u16::MAX.
    let mut buffer = [0xFF, 0xFF, 0x0F];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_uvarint32(&mut writer, 0x1FFFF).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert!(matches!(
        read_uvarint16(&mut reader),
        Err(ErrorKind::VarIntOverflow { bits: 16 })
    ));
}

#[test]
fn test_uvarint64_round_trips_max() {
    let mut buffer = [0x00; 10];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_uvarint64(&mut writer, u64::MAX).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_uvarint64(&mut reader).unwrap(), u64::MAX);
}

#[test]
/// Signed var-ints round-trip both signs, including the most negative value
/// of each width (magnitude `2^(width-1)`, not representable in two's
/// complement-style signed-magnitude schemes that omit this case).
fn test_svarint32_round_trips_extremes() {
    let mut buffer = [0x00; 8];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_svarint32(&mut writer, i32::MIN).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_svarint32(&mut reader).unwrap(), i32::MIN);

    let mut buffer = [0x00; 8];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_svarint32(&mut writer, i32::MAX).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_svarint32(&mut reader).unwrap(), i32::MAX);
}

#[test]
fn test_svarint8_round_trips_negative() {
    let mut buffer = [0x00; 2];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_svarint8(&mut writer, -42).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_svarint8(&mut reader).unwrap(), -42);
}

#[test]
/// Known-answer vector pinning the wire bytes of a negative signed var-int:
/// a self-consistent round trip can't catch an off-by-one bias, only a
/// literal byte comparison can. `-1` is the smallest magnitude negative
/// value, so it's the sharpest check of the "magnitude = |value| - 1"
/// encoding (a bare-absolute-value encoding would also round-trip `-1`
/// against itself, but would land on a different wire byte here).
fn test_svarint8_negative_one_known_answer() {
    let mut buffer = [0x00; 2];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_svarint8(&mut writer, -1).unwrap();
    }
    assert_eq!(buffer, [0x80, 0x00]);
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_svarint8(&mut reader).unwrap(), -1);
}

#[test]
/// Known-answer vector for the most negative 8-bit value: magnitude
/// `127 = 2^7 - 1`, the largest magnitude an 8-bit signed var-int can carry.
fn test_svarint8_min_known_answer() {
    let mut buffer = [0x00; 2];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_svarint8(&mut writer, i8::MIN).unwrap();
    }
    assert_eq!(buffer, [0xBF, 0x80]);
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_svarint8(&mut reader).unwrap(), i8::MIN);
}

#[test]
/// Known-answer vector for a positive signed var-int: the sign bit is clear
/// and the magnitude is the bare value, unlike the negative case.
fn test_svarint8_positive_known_answer() {
    let mut buffer = [0x00; 2];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_svarint8(&mut writer, 1).unwrap();
    }
    assert_eq!(buffer, [0x00, 0x80]);
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_svarint8(&mut reader).unwrap(), 1);
}

#[test]
/// `unitMultiplierType`: 3 bits, bias -3 (range [-3, 4]).
fn test_ranged_unit_multiplier() {
    let mut buffer = [0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_ranged::<3, -3>(&mut writer, RangedInt::new(-1).unwrap()).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    let v: RangedInt<3, -3> = read_ranged(&mut reader).unwrap();
    assert_eq!(v.get(), -1);
}

#[test]
/// `SAScheduleTupleID`: 8 bits, bias +1. Wire `0x00` -> logical 1; wire `0xFE`
/// -> logical 255 (spec.md scenario S4).
fn test_ranged_sa_schedule_tuple_id() {
    let mut buffer = [0x00];
    let mut reader = BitReader::new(&buffer);
    let v: RangedInt<8, 1> = read_ranged(&mut reader).unwrap();
    assert_eq!(v.get(), 1);

    buffer = [0xFE];
    let mut reader = BitReader::new(&buffer);
    let v: RangedInt<8, 1> = read_ranged(&mut reader).unwrap();
    assert_eq!(v.get(), 255);
}

#[test]
fn test_enum_round_trip_and_rejects_out_of_range() {
    let mut buffer = [0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_enum(&mut writer, 3, 5, 6).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_enum(&mut reader, 3, 6).unwrap(), 5);

    let mut buffer = [0b111_00000];
    let mut reader = BitReader::new(&buffer);
    assert!(matches!(
        read_enum(&mut reader, 3, 6),
        Err(ErrorKind::UnknownEventCode {
            code: 7,
            transitions: 6
        })
    ));

    let mut writer = BitWriter::new(&mut buffer);
    assert!(matches!(
        write_enum(&mut writer, 3, 6, 6),
        Err(ErrorKind::UnknownEventCode {
            code: 6,
            transitions: 6
        })
    ));
}

#[test]
/// `SessionSetupReq { EVCCID = [0x01..0x06] }`'s EVCCID field round-trips
/// through the binary codec with a 6-byte varint length prefix (spec.md S2).
fn test_binary_round_trip() {
    let value = FixedBytes::<8>::from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]).unwrap();
    let mut buffer = [0x00; 8];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_binary::<8>(&mut writer, &value).unwrap();
    }
    assert_eq!(buffer[0], 6);
    assert_eq!(&buffer[1..7], &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);

    let mut reader = BitReader::new(&buffer);
    let decoded: FixedBytes<8> = read_binary(&mut reader).unwrap();
    assert_eq!(decoded.as_slice(), value.as_slice());
}

#[test]
fn test_binary_rejects_over_capacity_on_decode() {
    let mut buffer = [0x00; 4];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_uvarint32(&mut writer, 3).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert!(matches!(
        read_binary::<2>(&mut reader),
        Err(ErrorKind::CapacityExceeded { wanted: 3, max: 2 })
    ));
}

#[test]
fn test_string_round_trip() {
    let value = FixedString::<16>::from_bytes(b"EVCharging").unwrap();
    let mut buffer = [0x00; 16];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_string::<16>(&mut writer, &value).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    let decoded: FixedString<16> = read_string(&mut reader).unwrap();
    assert_eq!(decoded.as_bytes(), value.as_bytes());
}

#[test]
/// A wire length below 2 indicates a string-table reference, unsupported by
/// this profile.
fn test_string_rejects_table_reference() {
    let mut buffer = [0x00; 2];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_uvarint32(&mut writer, 1).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert!(matches!(
        read_string::<8>(&mut reader),
        Err(ErrorKind::StringValuesNotSupported)
    ));
}

#[test]
fn test_string_rejects_over_capacity_on_decode() {
    let mut buffer = [0x00; 4];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_uvarint32(&mut writer, 2 + 3).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert!(matches!(
        read_string::<2>(&mut reader),
        Err(ErrorKind::CapacityExceeded { wanted: 3, max: 2 })
    ));
}
