//! Shared, stateless grammar bookkeeping used by every hand-authored
//! `decode`/`encode` method in `protocol::messages`.
//!
//! The message tree is a closed, strongly-typed structure, not a dynamically
//! typed field map, so there is no single generic interpreter loop here
//! (contrast with a `FieldAccess`-style engine driving everything through
//! runtime descriptors). Instead this module factors out the bookkeeping every
//! grammar state transition needs, so it is implemented exactly once: event
//! code width arithmetic, the nested element-end deviation bit, and the two
//! sentinel state ids every DFA in this crate converges on.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};

/// Grammar state id shared by every type's DFA: the only remaining legal event
/// is END_ELEMENT (no more content productions apply).
pub const EE_ONLY: u8 = 3;
/// Grammar state id shared by every type's DFA: decoding/encoding of this
/// element is complete.
pub const DONE: u8 = 4;

/// Number of bits needed to encode an event code selecting among `transitions`
/// productions: `ceil(log2(transitions + 1))`. The `+1` reserves one code
/// value per state for the second-level (non-schema) event space that EXI
/// always leaves room for, even when a state has a single production — so a
/// state with exactly one production still costs 1 bit, not 0, matching the
/// reference `CostType` DFA in SPEC_FULL.md (every state reads at least 1
/// bit). A decoded code equal to or above `transitions` is rejected by the
/// caller as `UnknownEventCode`; this profile never interprets the reserved
/// slot as a deviation production.
pub fn event_code_bits(transitions: u32) -> u8 {
    if transitions == 0 {
        return 0;
    }
    32 - transitions.leading_zeros() as u8
}

/// Read the event code selecting among `transitions` productions of the
/// current grammar state. `transitions == 0` is an unreachable degenerate
/// case (every real state offers at least one production) and consumes no
/// bits.
pub fn read_event_code(reader: &mut BitReader, transitions: u32) -> Result<u32, ErrorKind> {
    let bits = event_code_bits(transitions);
    if bits == 0 {
        return Ok(0);
    }
    let code = reader.read_u32(bits)?;
    if code >= transitions {
        return Err(ErrorKind::UnknownEventCode { code, transitions });
    }
    Ok(code)
}

/// Write the event code selecting among `transitions` productions.
/// `transitions == 0` is an unreachable degenerate case and writes no bits.
pub fn write_event_code(
    writer: &mut BitWriter,
    code: u32,
    transitions: u32,
) -> Result<(), ErrorKind> {
    let bits = event_code_bits(transitions);
    if bits == 0 {
        return Ok(());
    }
    if code >= transitions {
        return Err(ErrorKind::UnknownEventCode { code, transitions });
    }
    writer.write_u32(code, bits)?;
    Ok(())
}

/// Consume the event code of a grammar state with exactly one production
/// (`EE_ONLY`): 1 bit, valid only as `0`. Kept as a named call site so a
/// grammar's `decode` method reads as a literal transcription of its DFA
/// rather than an inlined `read_event_code(reader, 1)`.
pub fn read_ee_only(reader: &mut BitReader) -> Result<(), ErrorKind> {
    read_event_code(reader, 1)?;
    Ok(())
}

/// Write the event code of a grammar state with exactly one production
/// (`EE_ONLY`): always `0`, 1 bit.
pub fn write_ee_only(writer: &mut BitWriter) -> Result<(), ErrorKind> {
    write_event_code(writer, 0, 1)
}

/// Read the nested 1-bit deviation flag that follows a scalar element's value.
/// This profile implements no second-level (deviation) productions: a set
/// flag is rejected rather than interpreted, leaving whatever fields were
/// already decoded untouched.
pub fn read_scalar_end(reader: &mut BitReader) -> Result<(), ErrorKind> {
    if reader.read_bit()? {
        return Err(ErrorKind::DeviantsNotSupported);
    }
    Ok(())
}

/// Write the nested 1-bit deviation flag, always clear: this encoder never
/// emits a deviation production.
pub fn write_scalar_end(writer: &mut BitWriter) -> Result<(), ErrorKind> {
    writer.write_bit(false)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
