//! Tests for the shared grammar bookkeeping helpers.
use super::*;
use crate::infra::codec::bits::{BitReader, BitWriter};

#[test]
/// Every state reserves one code value for the second-level event space, so
/// a single production still costs 1 bit, two productions cost 2, and so on
/// up to the next power-of-two boundary. Mirrors the `CostType` DFA in
/// SPEC_FULL.md: S0/S1/S3 (1 production) read 1 bit, S2 (2 productions)
/// reads 2 bits.
fn test_event_code_bits_widths() {
    assert_eq!(event_code_bits(1), 1);
    assert_eq!(event_code_bits(2), 2);
    assert_eq!(event_code_bits(3), 2);
    assert_eq!(event_code_bits(4), 3);
    assert_eq!(event_code_bits(5), 3);
    assert_eq!(event_code_bits(7), 3);
    assert_eq!(event_code_bits(8), 4);
}

#[test]
/// A single-production state still consumes its reserved 1 bit.
fn test_read_event_code_single_production() {
    let data = [0x00];
    let mut reader = BitReader::new(&data);
    assert_eq!(read_event_code(&mut reader, 1).unwrap(), 0);
    assert_eq!(reader.bit_cursor(), 1);
}

#[test]
/// A two-production state (e.g. `CostType` S2) consumes exactly 2 bits.
fn test_read_write_event_code_round_trip() {
    let mut buffer = [0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_event_code(&mut writer, 1, 2).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert_eq!(read_event_code(&mut reader, 2).unwrap(), 1);
    assert_eq!(reader.bit_cursor(), 2);
}

#[test]
/// A code equal to or beyond the transition count is always `UnknownEventCode`,
/// never interpreted as a deviation.
fn test_event_code_rejects_unknown_code() {
    let mut buffer = [0b1100_0000];
    let mut reader = BitReader::new(&buffer);
    assert!(matches!(
        read_event_code(&mut reader, 3),
        Err(ErrorKind::UnknownEventCode {
            code: 3,
            transitions: 3
        })
    ));

    let mut writer = BitWriter::new(&mut buffer);
    assert!(matches!(
        write_event_code(&mut writer, 3, 3),
        Err(ErrorKind::UnknownEventCode {
            code: 3,
            transitions: 3
        })
    ));
}

#[test]
/// `read_ee_only`/`write_ee_only` round-trip the single valid code (0) and
/// consume exactly 1 bit, matching the shared `EE_ONLY` state.
fn test_ee_only_round_trip() {
    let mut buffer = [0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_ee_only(&mut writer).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert!(read_ee_only(&mut reader).is_ok());
    assert_eq!(reader.bit_cursor(), 1);
}

#[test]
/// A clear deviation bit is accepted and consumes exactly one bit.
fn test_scalar_end_round_trip_no_deviation() {
    let mut buffer = [0x00];
    {
        let mut writer = BitWriter::new(&mut buffer);
        write_scalar_end(&mut writer).unwrap();
    }
    let mut reader = BitReader::new(&buffer);
    assert!(read_scalar_end(&mut reader).is_ok());
    assert_eq!(reader.bit_cursor(), 1);
}

#[test]
/// A set deviation bit is rejected rather than interpreted.
fn test_scalar_end_rejects_deviation() {
    let data = [0b1000_0000];
    let mut reader = BitReader::new(&data);
    assert!(matches!(
        read_scalar_end(&mut reader),
        Err(ErrorKind::DeviantsNotSupported)
    ));
}
