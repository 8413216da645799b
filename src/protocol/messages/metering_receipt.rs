//! `MeteringReceiptReq`/`MeteringReceiptRes`.
use crate::core::FixedBytes;
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::ResponseCode;

/// `MeterInfoType`: `MeterID -> MeterReading? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeterInfo {
    pub meter_id: FixedBytes<16>,
    pub meter_reading: Option<u64>,
}

impl GrammarElement for MeterInfo {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let meter_id = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let meter_reading = if code == 0 {
            let v = primitives::read_uvarint64(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            meter_id,
            meter_reading,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.meter_id)?;
        engine::write_scalar_end(writer)?;

        match self.meter_reading {
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

/// `MeteringReceiptReq`: `SessionID -> SAScheduleTupleID? -> MeterInfo ->
/// END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeteringReceiptReq {
    pub session_id: FixedBytes<8>,
    pub sa_schedule_tuple_id: Option<crate::protocol::types::SaScheduleTupleId>,
    pub meter_info: MeterInfo,
}

impl GrammarElement for MeteringReceiptReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let session_id = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let sa_schedule_tuple_id = if code == 0 {
            let v = primitives::read_ranged(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };

        engine::read_event_code(reader, 1)?;
        let meter_info = MeterInfo::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            session_id,
            sa_schedule_tuple_id,
            meter_info,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.session_id)?;
        engine::write_scalar_end(writer)?;

        match self.sa_schedule_tuple_id {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_ranged(writer, v)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_event_code(writer, 0, 1)?;
        self.meter_info.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

/// `MeteringReceiptRes`: `ResponseCode -> AC_EVSEStatus? -> DC_EVSEStatus? ->
/// END`. The two status fields are mutually-exclusive in the real schema;
/// this profile carries both as independent optionals rather than a nested
/// choice, since at most one is ever populated by a conforming encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeteringReceiptRes {
    pub response_code: ResponseCode,
    pub ac_evse_status: Option<crate::protocol::types::AcEvseStatus>,
    pub dc_evse_status: Option<crate::protocol::types::DcEvseStatus>,
}

impl GrammarElement for MeteringReceiptRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let ac_evse_status = if code == 0 {
            Some(crate::protocol::types::AcEvseStatus::decode(reader)?)
        } else {
            None
        };

        let code = engine::read_event_code(reader, 2)?;
        let dc_evse_status = if code == 0 {
            Some(crate::protocol::types::DcEvseStatus::decode(reader)?)
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            ac_evse_status,
            dc_evse_status,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        match &self.ac_evse_status {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        match &self.dc_evse_status {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_ee_only(writer)
    }
}
