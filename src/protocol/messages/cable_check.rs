//! `CableCheckReq`/`CableCheckRes`.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{DcEvStatus, EvseProcessing, ResponseCode};

/// `CableCheckReq`: `DC_EVStatus -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CableCheckReq {
    pub dc_ev_status: DcEvStatus,
}

impl GrammarElement for CableCheckReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let dc_ev_status = DcEvStatus::decode(reader)?;
        engine::read_ee_only(reader)?;
        Ok(Self { dc_ev_status })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.dc_ev_status.encode(writer)?;
        engine::write_ee_only(writer)
    }
}

/// `CableCheckRes`: `ResponseCode -> EVSEProcessing -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CableCheckRes {
    pub response_code: ResponseCode,
    pub evse_processing: EvseProcessing,
}

impl Default for CableCheckRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            evse_processing: EvseProcessing::Finished,
        }
    }
}

impl GrammarElement for CableCheckRes {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_round_trips() {
        let value = CableCheckReq {
            dc_ev_status: DcEvStatus {
                ev_ready: true,
                ..Default::default()
            },
        };
        let mut buffer = [0x00; 4];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(CableCheckReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips() {
        let value = CableCheckRes {
            response_code: ResponseCode::Ok,
            evse_processing: EvseProcessing::Ongoing,
        };
        let mut buffer = [0x00; 4];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(CableCheckRes::decode(&mut reader).unwrap(), value);
    }
}
