//! `PowerDeliveryReq`/`PowerDeliveryRes`.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{AcEvseStatus, ChargeProgress, DcEvStatus, DcEvseStatus, ResponseCode, SaScheduleTupleId};

/// `PowerDeliveryReq`: `ChargeProgress -> SAScheduleTupleID -> DCEVPowerDeliveryParameter? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerDeliveryReq {
    pub charge_progress: ChargeProgress,
    pub sa_schedule_tuple_id: SaScheduleTupleId,
    pub dc_ev_status: Option<DcEvStatus>,
}

impl Default for PowerDeliveryReq {
    fn default() -> Self {
        Self {
            charge_progress: ChargeProgress::Start,
            sa_schedule_tuple_id: SaScheduleTupleId::default(),
            dc_ev_status: None,
        }
    }
}

impl GrammarElement for PowerDeliveryReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let charge_progress = ChargeProgress::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let sa_schedule_tuple_id = crate::infra::codec::primitives::read_ranged(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let dc_ev_status = if code == 0 {
            Some(DcEvStatus::decode(reader)?)
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            charge_progress,
            sa_schedule_tuple_id,
            dc_ev_status,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.charge_progress.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        crate::infra::codec::primitives::write_ranged(writer, self.sa_schedule_tuple_id)?;
        engine::write_scalar_end(writer)?;

        match &self.dc_ev_status {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_ee_only(writer)
    }
}

/// `EVSEStatus` choice group on the response side: exactly one of the AC or
/// DC status records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvseStatus {
    Ac(AcEvseStatus),
    Dc(DcEvseStatus),
}

impl GrammarElement for EvseStatus {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, 2)?;
        match code {
            0 => Ok(Self::Ac(AcEvseStatus::decode(reader)?)),
            1 => Ok(Self::Dc(DcEvseStatus::decode(reader)?)),
            _ => unreachable!("read_event_code bounds `code` to `0..2`"),
        }
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        match self {
            Self::Ac(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)
            }
            Self::Dc(v) => {
                engine::write_event_code(writer, 1, 2)?;
                v.encode(writer)
            }
        }
    }
}

/// `PowerDeliveryRes`: `ResponseCode -> EVSEStatus? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerDeliveryRes {
    pub response_code: ResponseCode,
    pub evse_status: Option<EvseStatus>,
}

impl GrammarElement for PowerDeliveryRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let evse_status = if code == 0 {
            Some(EvseStatus::decode(reader)?)
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            evse_status,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        match &self.evse_status {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_ee_only(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_round_trips_without_dc_status() {
        let value = PowerDeliveryReq::default();
        let mut buffer = [0x00; 8];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(PowerDeliveryReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips_with_dc_evse_status() {
        let value = PowerDeliveryRes {
            response_code: ResponseCode::Ok,
            evse_status: Some(EvseStatus::Dc(DcEvseStatus::default())),
        };
        let mut buffer = [0x00; 8];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(PowerDeliveryRes::decode(&mut reader).unwrap(), value);
    }
}
