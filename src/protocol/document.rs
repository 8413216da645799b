//! Document-level entry points: the fixed EXI header, the 7-bit root-element
//! event code (spec.md §4.3 "Root dispatch"), and the `V2GMessage`/
//! `ExiDocument` types that sit above every `protocol::messages` grammar.
//!
//! This is the only place in the crate that owns a whole buffer rather than
//! a mid-stream cursor: `decode_document`/`encode_document` are the two
//! public functions spec.md §6.2 asks for.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::messages::{Body, Header};

/// The fixed single-byte EXI document header this profile expects: EXI
/// distinguishing bits `10`, no cookie, no options document, version 1
/// (spec.md §6.1, SPEC_FULL.md §6.1).
pub const EXI_HEADER_BYTE: u8 = 0x80;

/// Bit width of the root-element event code read immediately after the
/// header (spec.md §4.3 "Root dispatch").
const ROOT_EVENT_CODE_BITS: u8 = 7;

/// Root event code selecting `V2G_Message` that this profile emits on
/// encode. Decode accepts both `0` and `ALT_ROOT_EVENT_CODE` (spec.md's
/// unresolved Open Question: two EXI qnames, one element); `0` is chosen as
/// canonical because it is the lower-numbered and more common of the pair in
/// captured traffic. See DESIGN.md.
pub const CANONICAL_ROOT_EVENT_CODE: u32 = 0;
/// The alternate root event code accepted on decode but never emitted.
pub const ALT_ROOT_EVENT_CODE: u32 = 76;

/// `V2G_Message`: `Header -> Body -> END`, the sole content of every
/// EXI-encoded message this profile exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct V2GMessage {
    pub header: Header,
    pub body: Body,
}

impl GrammarElement for V2GMessage {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let header = Header::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let body = Body::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self { header, body })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.header.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.body.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

/// The document root. A single-variant enum rather than a bare `V2GMessage`
/// struct (spec.md §6.2), so a future sibling document type has a slot
/// without an API break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExiDocument {
    V2GMessage(V2GMessage),
}

impl Default for ExiDocument {
    fn default() -> Self {
        Self::V2GMessage(V2GMessage::default())
    }
}

/// Decode a complete EXI stream into a typed `ExiDocument`.
///
/// Reads the fixed header byte, the 7-bit root event code, and hands control
/// to `V2GMessage::decode`. On any error the returned tree must be treated as
/// meaningless (spec.md §7): this function never returns a partially valid
/// document.
pub fn decode_document(bytes: &[u8]) -> Result<ExiDocument, ErrorKind> {
    let mut reader = BitReader::new(bytes);
    let header_byte = reader.read_u8(8)?;
    if header_byte != EXI_HEADER_BYTE {
        return Err(ErrorKind::HeaderMismatch {
            expected: EXI_HEADER_BYTE,
            got: header_byte,
        });
    }

    let root_code = reader.read_u32(ROOT_EVENT_CODE_BITS)?;
    if root_code != CANONICAL_ROOT_EVENT_CODE && root_code != ALT_ROOT_EVENT_CODE {
        return Err(ErrorKind::UnsupportedSubEvent { code: root_code });
    }

    let message = V2GMessage::decode(&mut reader)?;
    Ok(ExiDocument::V2GMessage(message))
}

/// Encode `doc` into `out`, returning the number of bytes written. Emits the
/// header byte followed by `CANONICAL_ROOT_EVENT_CODE` and the message body.
/// No partial output contract: a failing call may have written bytes into
/// `out`, but the caller must discard the buffer rather than trust its
/// length (spec.md §7).
pub fn encode_document(doc: &ExiDocument, out: &mut [u8]) -> Result<usize, ErrorKind> {
    let mut writer = BitWriter::new(out);
    writer.write_u8(EXI_HEADER_BYTE, 8)?;
    writer.write_u32(CANONICAL_ROOT_EVENT_CODE, ROOT_EVENT_CODE_BITS)?;

    let ExiDocument::V2GMessage(message) = doc;
    message.encode(&mut writer)?;

    Ok(writer.bit_cursor().div_ceil(8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedBytes;
    use crate::protocol::messages::session_setup::SessionSetupReq;

    fn sample_message() -> V2GMessage {
        V2GMessage {
            header: Header {
                session_id: FixedBytes::from_slice(&[0x01; 8]).unwrap(),
                notification: None,
                signature: None,
            },
            body: Body::SessionSetupReq(SessionSetupReq {
                evcc_id: FixedBytes::from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]).unwrap(),
            }),
        }
    }

    #[test]
    fn document_round_trips() {
        let doc = ExiDocument::V2GMessage(sample_message());
        let mut buffer = [0x00; 64];
        let written = encode_document(&doc, &mut buffer).unwrap();
        assert!(written > 0);
        let decoded = decode_document(&buffer[..written]).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn encode_emits_canonical_root_event_code() {
        let doc = ExiDocument::V2GMessage(sample_message());
        let mut buffer = [0x00; 64];
        encode_document(&doc, &mut buffer).unwrap();
        assert_eq!(buffer[0], EXI_HEADER_BYTE);
        // First 7 bits of byte 1 are the root event code; canonical value 0.
        assert_eq!(buffer[1] >> 1, CANONICAL_ROOT_EVENT_CODE as u8);
    }

    #[test]
    fn decode_accepts_alternate_root_event_code() {
        let doc = ExiDocument::V2GMessage(sample_message());
        let mut buffer = [0x00; 64];
        let written = encode_document(&doc, &mut buffer).unwrap();
        // Splice in the alternate root event code (76) in place of 0 and
        // confirm decode still accepts it (spec.md's unresolved Open
        // Question: both codes select V2G_Message).
        let mut reader = BitReader::new(&buffer[..written]);
        let _ = reader.read_u8(8).unwrap();
        drop(reader);
        let mut spliced = buffer;
        let mut writer = BitWriter::new(&mut spliced);
        writer.write_u8(EXI_HEADER_BYTE, 8).unwrap();
        writer.write_u32(ALT_ROOT_EVENT_CODE, ROOT_EVENT_CODE_BITS).unwrap();
        // Re-encode the message body right after the spliced root code.
        let message = sample_message();
        message.encode(&mut writer).unwrap();
        let written = writer.bit_cursor().div_ceil(8);
        let decoded = decode_document(&spliced[..written]).unwrap();
        assert_eq!(decoded, ExiDocument::V2GMessage(message));
    }

    #[test]
    fn decode_rejects_wrong_header_byte() {
        let buffer = [0x00u8; 8];
        let err = decode_document(&buffer).unwrap_err();
        assert!(matches!(err, ErrorKind::HeaderMismatch { .. }));
    }

    #[test]
    fn decode_rejects_unsupported_root_event_code() {
        let mut buffer = [0x00u8; 8];
        let mut writer = BitWriter::new(&mut buffer);
        writer.write_u8(EXI_HEADER_BYTE, 8).unwrap();
        writer.write_u32(5, ROOT_EVENT_CODE_BITS).unwrap();
        let err = decode_document(&buffer).unwrap_err();
        assert!(matches!(err, ErrorKind::UnsupportedSubEvent { code: 5 }));
    }
}
