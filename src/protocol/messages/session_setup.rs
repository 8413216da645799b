//! `SessionSetupReq`/`SessionSetupRes`.
use crate::core::{FixedBytes, FixedString};
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::ResponseCode;

/// `SessionSetupReq`: `EVCCID -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSetupReq {
    pub evcc_id: FixedBytes<8>,
}

impl GrammarElement for SessionSetupReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let evcc_id = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_ee_only(reader)?;
        Ok(Self { evcc_id })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.evcc_id)?;
        engine::write_scalar_end(writer)?;
        engine::write_ee_only(writer)
    }
}

/// `SessionSetupRes`: `ResponseCode -> EVSEID -> DateTimeNow? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSetupRes {
    pub response_code: ResponseCode,
    pub evse_id: FixedString<32>,
    pub datetime_now: Option<u64>,
}

impl GrammarElement for SessionSetupRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_id = primitives::read_string(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let datetime_now = if code == 0 {
            let v = primitives::read_uvarint64(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            evse_id,
            datetime_now,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_string(writer, &self.evse_id)?;
        engine::write_scalar_end(writer)?;

        match self.datetime_now {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_uvarint64(writer, v)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_ee_only(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// spec.md scenario S2: `SessionSetupReq { EVCCID = [0x01 .. 0x06] }`.
    #[test]
    fn req_round_trips() {
        let value = SessionSetupReq {
            evcc_id: FixedBytes::from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]).unwrap(),
        };
        let mut buffer = [0x00; 16];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(SessionSetupReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips_with_datetime() {
        let value = SessionSetupRes {
            response_code: ResponseCode::NewSessionEstablished,
            evse_id: FixedString::from_bytes(b"DE*ABC*E*001").unwrap(),
            datetime_now: Some(1_700_000_000),
        };
        let mut buffer = [0x00; 32];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(SessionSetupRes::decode(&mut reader).unwrap(), value);
    }
}
