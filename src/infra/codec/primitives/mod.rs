//! Primitive wire codecs: one `read_*`/`write_*` pair per EXI value encoding
//! used by this profile. Every function is a thin, allocation-free layer over
//! `infra::codec::bits`; the grammar-shaped `decode`/`encode` methods in
//! `protocol::messages` call these directly, never `BitReader`/`BitWriter`.
use crate::core::{FixedBytes, FixedString, RangedInt};
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};

//==================================================================================BOOLEAN

/// Read a single-bit boolean.
pub fn read_boolean(reader: &mut BitReader) -> Result<bool, ErrorKind> {
    Ok(reader.read_bit()?)
}

/// Write a single-bit boolean.
pub fn write_boolean(writer: &mut BitWriter, value: bool) -> Result<(), ErrorKind> {
    writer.write_bit(value)?;
    Ok(())
}

//==================================================================================N_BIT_UNSIGNED

/// Read an `n`-bit unsigned integer, `n` in `1..=32`.
pub fn read_uint_n(reader: &mut BitReader, bits: u8) -> Result<u32, ErrorKind> {
    Ok(reader.read_u32(bits)?)
}

/// Write an `n`-bit unsigned integer, `n` in `1..=32`.
pub fn write_uint_n(writer: &mut BitWriter, value: u32, bits: u8) -> Result<(), ErrorKind> {
    writer.write_u32(value, bits)?;
    Ok(())
}

//==================================================================================UNSIGNED_VARINT

/// Shared unsigned var-int reader: 7 data bits + 1 continuation bit per octet,
/// least significant septet first. `max_bits` is the logical width of the
/// target type and bounds the overflow check.
fn read_uvarint(reader: &mut BitReader, max_bits: u32) -> Result<u64, ErrorKind> {
    let mut result: u64 = 0u64;
    let mut shift: u32 = 0;
    loop {
        let byte = reader.read_u8(8)?;
        let data = (byte & 0x7F) as u64;
        if shift < 64 {
            result |= data << shift;
        } else if data != 0 {
            return Err(ErrorKind::VarIntOverflow { bits: max_bits as u8 });
        }
        let more = byte & 0x80 != 0;
        shift += 7;
        if !more {
            break;
        }
        if shift > 70 {
            return Err(ErrorKind::VarIntOverflow { bits: max_bits as u8 });
        }
    }
    if max_bits < 64 && (result >> max_bits) != 0 {
        return Err(ErrorKind::VarIntOverflow { bits: max_bits as u8 });
    }
    Ok(result)
}

/// Shared unsigned var-int writer.
fn write_uvarint(writer: &mut BitWriter, value: u64) -> Result<(), ErrorKind> {
    let mut remaining = value;
    loop {
        let mut byte = (remaining & 0x7F) as u8;
        remaining >>= 7;
        if remaining != 0 {
            byte |= 0x80;
        }
        writer.write_u8(byte, 8)?;
        if remaining == 0 {
            break;
        }
    }
    Ok(())
}

pub fn read_uvarint16(reader: &mut BitReader) -> Result<u16, ErrorKind> {
    Ok(read_uvarint(reader, 16)? as u16)
}
pub fn write_uvarint16(writer: &mut BitWriter, value: u16) -> Result<(), ErrorKind> {
    write_uvarint(writer, value as u64)
}

pub fn read_uvarint32(reader: &mut BitReader) -> Result<u32, ErrorKind> {
    Ok(read_uvarint(reader, 32)? as u32)
}
pub fn write_uvarint32(writer: &mut BitWriter, value: u32) -> Result<(), ErrorKind> {
    write_uvarint(writer, value as u64)
}

pub fn read_uvarint64(reader: &mut BitReader) -> Result<u64, ErrorKind> {
    read_uvarint(reader, 64)
}
pub fn write_uvarint64(writer: &mut BitWriter, value: u64) -> Result<(), ErrorKind> {
    write_uvarint(writer, value)
}

//==================================================================================SIGNED_VARINT

/// Shared signed var-int reader: 1 sign bit (1 = negative) followed by an
/// unsigned var-int magnitude. Not two's complement: per spec.md §4.2 the
/// wire magnitude for a negative value is `|value| - 1` (so `-1` is wire
/// magnitude `0`), not the bare absolute value; `width` bounds the logical
/// value to `[-2^(width-1), 2^(width-1) - 1]` so the most negative value of
/// that width round-trips (wire magnitude `2^(width-1) - 1` reconstructs
/// e.g. `i64::MIN`).
fn read_svarint(reader: &mut BitReader, width: u32) -> Result<i128, ErrorKind> {
    let negative = reader.read_bit()?;
    let magnitude = read_uvarint(reader, 64)? as i128;
    let value = if negative { -(magnitude + 1) } else { magnitude };
    let min = -(1i128 << (width - 1));
    let max = (1i128 << (width - 1)) - 1;
    if value < min || value > max {
        return Err(ErrorKind::VarIntOverflow { bits: width as u8 });
    }
    Ok(value)
}

/// Shared signed var-int writer.
fn write_svarint(writer: &mut BitWriter, value: i128) -> Result<(), ErrorKind> {
    let negative = value < 0;
    let magnitude = if negative {
        (-value - 1) as u64
    } else {
        value as u64
    };
    writer.write_bit(negative)?;
    write_uvarint(writer, magnitude)
}

pub fn read_svarint8(reader: &mut BitReader) -> Result<i8, ErrorKind> {
    Ok(read_svarint(reader, 8)? as i8)
}
pub fn write_svarint8(writer: &mut BitWriter, value: i8) -> Result<(), ErrorKind> {
    write_svarint(writer, value as i128)
}

pub fn read_svarint16(reader: &mut BitReader) -> Result<i16, ErrorKind> {
    Ok(read_svarint(reader, 16)? as i16)
}
pub fn write_svarint16(writer: &mut BitWriter, value: i16) -> Result<(), ErrorKind> {
    write_svarint(writer, value as i128)
}

pub fn read_svarint32(reader: &mut BitReader) -> Result<i32, ErrorKind> {
    Ok(read_svarint(reader, 32)? as i32)
}
pub fn write_svarint32(writer: &mut BitWriter, value: i32) -> Result<(), ErrorKind> {
    write_svarint(writer, value as i128)
}

pub fn read_svarint64(reader: &mut BitReader) -> Result<i64, ErrorKind> {
    Ok(read_svarint(reader, 64)? as i64)
}
pub fn write_svarint64(writer: &mut BitWriter, value: i64) -> Result<(), ErrorKind> {
    write_svarint(writer, value as i128)
}

//==================================================================================RANGED_INTEGER

/// Read a `BITS`-wide wire value biased by `BIAS` (never out of range: any
/// `BITS`-bit pattern maps to a valid logical value).
pub fn read_ranged<const BITS: u8, const BIAS: i32>(
    reader: &mut BitReader,
) -> Result<RangedInt<BITS, BIAS>, ErrorKind> {
    let raw = reader.read_u64(BITS)?;
    Ok(RangedInt::from_wire(raw))
}

/// Write a ranged integer's wire value.
pub fn write_ranged<const BITS: u8, const BIAS: i32>(
    writer: &mut BitWriter,
    value: RangedInt<BITS, BIAS>,
) -> Result<(), ErrorKind> {
    writer.write_u64(value.wire(), BITS)?;
    Ok(())
}

//==================================================================================ENUMERATION

/// Read an enumeration code, `bits`-wide, rejecting any value outside
/// `0..cardinality`.
pub fn read_enum(reader: &mut BitReader, bits: u8, cardinality: u32) -> Result<u32, ErrorKind> {
    let code = reader.read_u64(bits)? as u32;
    if code >= cardinality {
        return Err(ErrorKind::UnknownEventCode {
            code,
            transitions: cardinality,
        });
    }
    Ok(code)
}

/// Write an enumeration code, rejecting any value outside `0..cardinality`.
pub fn write_enum(
    writer: &mut BitWriter,
    bits: u8,
    code: u32,
    cardinality: u32,
) -> Result<(), ErrorKind> {
    if code >= cardinality {
        return Err(ErrorKind::UnknownEventCode {
            code,
            transitions: cardinality,
        });
    }
    writer.write_u64(code as u64, bits)?;
    Ok(())
}

//==================================================================================CHARACTER_STRING

/// Read a character string: a var-int length prefix biased by +2 (wire values
/// 0 and 1 are reserved for string-table hits, unsupported by this profile),
/// followed by that many single-byte characters.
pub fn read_string<const N: usize>(reader: &mut BitReader) -> Result<FixedString<N>, ErrorKind> {
    let raw_len = read_uvarint(reader, 32)?;
    if raw_len < 2 {
        return Err(ErrorKind::StringValuesNotSupported);
    }
    let actual_len = (raw_len - 2) as usize;
    if actual_len > N {
        return Err(ErrorKind::CapacityExceeded {
            wanted: actual_len,
            max: N,
        });
    }
    let mut buf = [0u8; N];
    for slot in buf.iter_mut().take(actual_len) {
        *slot = reader.read_u8(8)?;
    }
    FixedString::from_bytes(&buf[..actual_len]).map_err(|wanted| ErrorKind::CapacityExceeded {
        wanted,
        max: N,
    })
}

/// Write a character string with the same +2 length bias.
pub fn write_string<const N: usize>(
    writer: &mut BitWriter,
    value: &FixedString<N>,
) -> Result<(), ErrorKind> {
    write_uvarint(writer, value.len() as u64 + 2)?;
    for &byte in value.as_bytes() {
        writer.write_u8(byte, 8)?;
    }
    Ok(())
}

//==================================================================================BINARY

/// Read an opaque binary field: a plain var-int length prefix (no bias)
/// followed by that many octets.
pub fn read_binary<const N: usize>(reader: &mut BitReader) -> Result<FixedBytes<N>, ErrorKind> {
    let len = read_uvarint(reader, 32)? as usize;
    if len > N {
        return Err(ErrorKind::CapacityExceeded { wanted: len, max: N });
    }
    let mut buf = [0u8; N];
    for slot in buf.iter_mut().take(len) {
        *slot = reader.read_u8(8)?;
    }
    FixedBytes::from_slice(&buf[..len]).map_err(|wanted| ErrorKind::CapacityExceeded {
        wanted,
        max: N,
    })
}

/// Write an opaque binary field.
pub fn write_binary<const N: usize>(
    writer: &mut BitWriter,
    value: &FixedBytes<N>,
) -> Result<(), ErrorKind> {
    write_uvarint(writer, value.len() as u64)?;
    for &byte in value.as_slice() {
        writer.write_u8(byte, 8)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
