//! `SessionStopReq`/`SessionStopRes`.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{ChargingSession, ResponseCode};

/// `SessionStopReq`: `ChargingSession -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStopReq {
    pub charging_session: ChargingSession,
}

impl Default for SessionStopReq {
    fn default() -> Self {
        Self {
            charging_session: ChargingSession::Terminate,
        }
    }
}

impl GrammarElement for SessionStopReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let charging_session = ChargingSession::decode(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_ee_only(reader)?;
        Ok(Self { charging_session })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.charging_session.encode(writer)?;
        engine::write_scalar_end(writer)?;
        engine::write_ee_only(writer)
    }
}

/// `SessionStopRes`: `ResponseCode -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStopRes {
    pub response_code: ResponseCode,
}

impl Default for SessionStopRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
        }
    }
}

impl GrammarElement for SessionStopRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_ee_only(reader)?;
        Ok(Self { response_code })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;
        engine::write_ee_only(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_round_trips() {
        let value = SessionStopReq {
            charging_session: ChargingSession::Pause,
        };
        let mut buffer = [0x00; 2];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(SessionStopReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips() {
        let value = SessionStopRes::default();
        let mut buffer = [0x00; 2];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(SessionStopRes::decode(&mut reader).unwrap(), value);
    }
}
