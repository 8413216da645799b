//! `WeldingDetectionReq`/`WeldingDetectionRes`.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{DcEvStatus, DcEvseStatus, PhysicalValue, ResponseCode};

/// `WeldingDetectionReq`: `DC_EVStatus -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeldingDetectionReq {
    pub dc_ev_status: DcEvStatus,
}

impl GrammarElement for WeldingDetectionReq {
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

/// `WeldingDetectionRes`: `ResponseCode -> DC_EVSEStatus -> EVSEPresentVoltage
/// -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeldingDetectionRes {
    pub response_code: ResponseCode,
    pub dc_evse_status: DcEvseStatus,
    pub evse_present_voltage: PhysicalValue,
}

impl Default for WeldingDetectionRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            dc_evse_status: DcEvseStatus::default(),
            evse_present_voltage: PhysicalValue::default(),
        }
    }
}

impl GrammarElement for WeldingDetectionRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let dc_evse_status = DcEvseStatus::decode(reader)?;

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
