//! `AuthorizationReq`/`AuthorizationRes`.
use crate::core::FixedBytes;
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{EvseProcessing, ResponseCode};

/// `AuthorizationReq`: `GenChallenge? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthorizationReq {
    pub gen_challenge: Option<FixedBytes<16>>,
}

impl GrammarElement for AuthorizationReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, 2)?;
        let gen_challenge = if code == 0 {
            let v = primitives::read_binary(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };
        engine::read_ee_only(reader)?;
        Ok(Self { gen_challenge })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        match &self.gen_challenge {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_binary(writer, v)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }
        engine::write_ee_only(writer)
    }
}

/// `AuthorizationRes`: `ResponseCode -> EVSEProcessing -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationRes {
    pub response_code: ResponseCode,
    pub evse_processing: EvseProcessing,
}

impl Default for AuthorizationRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            evse_processing: EvseProcessing::Finished,
        }
    }
}

impl GrammarElement for AuthorizationRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_processing = EvseProcessing::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            evse_processing,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.evse_processing.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_ee_only(writer)
    }
}
