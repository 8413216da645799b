//! `PreChargeReq`/`PreChargeRes`.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{DcEvStatus, PhysicalValue, ResponseCode};

/// `PreChargeReq`: `DC_EVStatus -> EVTargetVoltage -> EVTargetCurrent -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreChargeReq {
    pub dc_ev_status: DcEvStatus,
    pub ev_target_voltage: PhysicalValue,
    pub ev_target_current: PhysicalValue,
}

impl GrammarElement for PreChargeReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let dc_ev_status = DcEvStatus::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let ev_target_voltage = PhysicalValue::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let ev_target_current = PhysicalValue::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            dc_ev_status,
            ev_target_voltage,
            ev_target_current,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.dc_ev_status.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.ev_target_voltage.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.ev_target_current.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

/// `PreChargeRes`: `ResponseCode -> DC_EVSEStatus -> EVSEPresentVoltage ->
/// END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreChargeRes {
    pub response_code: ResponseCode,
    pub dc_evse_status: crate::protocol::types::DcEvseStatus,
    pub evse_present_voltage: PhysicalValue,
}

impl Default for PreChargeRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            dc_evse_status: crate::protocol::types::DcEvseStatus::default(),
            evse_present_voltage: PhysicalValue::default(),
        }
    }
}

impl GrammarElement for PreChargeRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let dc_evse_status = crate::protocol::types::DcEvseStatus::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_present_voltage = PhysicalValue::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            dc_evse_status,
            evse_present_voltage,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.dc_evse_status.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.evse_present_voltage.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_round_trips() {
        let value = PreChargeReq::default();
        let mut buffer = [0x00; 8];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(PreChargeReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips() {
        let value = PreChargeRes::default();
        let mut buffer = [0x00; 8];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(PreChargeRes::decode(&mut reader).unwrap(), value);
    }
}
