//! `ChargingStatusReq`/`ChargingStatusRes`. `ChargingStatusReq` carries no
//! fields in the schema (an EVCC polls status with an empty body); it is kept
//! as a unit-like struct so `Body` stays symmetric across every request/
//! response pair.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{AcEvseStatus, ResponseCode, SaScheduleTupleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChargingStatusReq;

impl GrammarElement for ChargingStatusReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_ee_only(reader)?;
        Ok(Self)
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_ee_only(writer)
    }
}

/// `ChargingStatusRes`: `ResponseCode -> EVSEID -> SAScheduleTupleID ->
/// EVSEMaxCurrent? -> MeterInfoRequested -> AC_EVSEStatus -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargingStatusRes {
    pub response_code: ResponseCode,
    pub evse_id: crate::core::FixedString<32>,
    pub sa_schedule_tuple_id: SaScheduleTupleId,
    pub evse_max_current: Option<crate::protocol::types::PhysicalValue>,
    pub meter_info_requested: bool,
    pub ac_evse_status: AcEvseStatus,
}

impl Default for ChargingStatusRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            evse_id: crate::core::FixedString::default(),
            sa_schedule_tuple_id: SaScheduleTupleId::default(),
            evse_max_current: None,
            meter_info_requested: false,
            ac_evse_status: AcEvseStatus::default(),
        }
    }
}

impl GrammarElement for ChargingStatusRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_id = primitives::read_string(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let sa_schedule_tuple_id = primitives::read_ranged(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let evse_max_current = if code == 0 {
            Some(crate::protocol::types::PhysicalValue::decode(reader)?)
        } else {
            None
        };

        engine::read_event_code(reader, 1)?;
        let meter_info_requested = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let ac_evse_status = AcEvseStatus::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            evse_id,
            sa_schedule_tuple_id,
            evse_max_current,
            meter_info_requested,
            ac_evse_status,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_string(writer, &self.evse_id)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_ranged(writer, self.sa_schedule_tuple_id)?;
        engine::write_scalar_end(writer)?;

        match &self.evse_max_current {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.meter_info_requested)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.ac_evse_status.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_round_trips() {
        let value = ChargingStatusReq;
        let mut buffer = [0x00; 1];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(ChargingStatusReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips_without_max_current() {
        let value = ChargingStatusRes::default();
        let mut buffer = [0x00; 16];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(ChargingStatusRes::decode(&mut reader).unwrap(), value);
    }
}
