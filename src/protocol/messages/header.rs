//! `V2G_Message.Header`: `SessionID -> Notification? -> Signature? -> END`.
use crate::core::{FixedBytes, FixedString};
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::FaultCode;

/// `NotificationType`: `FaultCode -> FaultMsg? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub fault_code: FaultCode,
    pub fault_msg: Option<FixedString<64>>,
}

impl GrammarElement for Notification {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let fault_code = FaultCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let fault_msg = if code == 0 {
            let msg = primitives::read_string(reader)?;
            engine::read_scalar_end(reader)?;
            engine::read_ee_only(reader)?;
            Some(msg)
        } else {
            None
        };
        Ok(Self {
            fault_code,
            fault_msg,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.fault_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        match &self.fault_msg {
            Some(msg) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_string(writer, msg)?;
                engine::write_scalar_end(writer)?;
                engine::write_ee_only(writer)?;
            }
            None => {
                engine::write_event_code(writer, 1, 2)?;
            }
        }
        Ok(())
    }
}

/// A minimal XML-DSig signature carrier: this profile does not validate or
/// produce signatures, it round-trips the digest/value octets the schema
/// carries. `SignedInfoDigest -> SignatureValue -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub signed_info_digest: FixedBytes<32>,
    pub signature_value: FixedBytes<64>,
}

impl GrammarElement for Signature {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let signed_info_digest = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let signature_value = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            signed_info_digest,
            signature_value,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.signed_info_digest)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.signature_value)?;
        engine::write_scalar_end(writer)?;

        engine::write_ee_only(writer)?;
        Ok(())
    }
}

/// `V2G_Message.Header`: `SessionID -> Notification? -> Signature? -> END`.
/// `SessionID` is mandatory binary content (profile default capacity: 8
/// bytes, matching the teacher's fixed-size identifier fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub session_id: FixedBytes<8>,
    pub notification: Option<Notification>,
    pub signature: Option<Signature>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            session_id: FixedBytes::default(),
            notification: None,
            signature: None,
        }
    }
}

impl GrammarElement for Header {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let session_id = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        // 3-way choice at each optional slot: START Notification, START
        // Signature (skipping Notification), or END.
        let code = engine::read_event_code(reader, 3)?;
        let notification = if code == 0 {
            let n = Notification::decode(reader)?;
            Some(n)
        } else {
            None
        };

        let signature = if code <= 1 {
            let sig_code = if code == 0 {
                engine::read_event_code(reader, 2)?
            } else {
                0
            };
            if sig_code == 0 {
                Some(Signature::decode(reader)?)
            } else {
                None
            }
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            session_id,
            notification,
            signature,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.session_id)?;
        engine::write_scalar_end(writer)?;

        match (&self.notification, &self.signature) {
            (Some(n), sig) => {
                engine::write_event_code(writer, 0, 3)?;
                n.encode(writer)?;
                match sig {
                    Some(s) => {
                        engine::write_event_code(writer, 0, 2)?;
                        s.encode(writer)?;
                    }
                    None => {
                        engine::write_event_code(writer, 1, 2)?;
                    }
                }
            }
            (None, Some(s)) => {
                engine::write_event_code(writer, 1, 3)?;
                s.encode(writer)?;
            }
            (None, None) => {
                engine::write_event_code(writer, 2, 3)?;
            }
        }
        engine::write_ee_only(writer)?;
        Ok(())
    }
}
