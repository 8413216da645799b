//! `ChargeParameterDiscoveryReq`/`ChargeParameterDiscoveryRes`.
use crate::core::FixedVec;
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{DcEvStatus, EnergyTransferMode, EvseProcessing, PhysicalValue, ResponseCode};

/// `AC_EVChargeParameterType`: `DepartureTime? -> EAmount -> EVMaxVoltage ->
/// EVMaxCurrent -> EVMinCurrent -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AcEvChargeParameter {
    pub departure_time: Option<u32>,
    pub e_amount: PhysicalValue,
    pub ev_max_voltage: PhysicalValue,
    pub ev_max_current: PhysicalValue,
    pub ev_min_current: PhysicalValue,
}

impl GrammarElement for AcEvChargeParameter {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, 2)?;
        let departure_time = if code == 0 {
            let v = primitives::read_uvarint32(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };

        engine::read_event_code(reader, 1)?;
        let e_amount = PhysicalValue::decode(reader)?;
        engine::read_event_code(reader, 1)?;
        let ev_max_voltage = PhysicalValue::decode(reader)?;
        engine::read_event_code(reader, 1)?;
        let ev_max_current = PhysicalValue::decode(reader)?;
        engine::read_event_code(reader, 1)?;
        let ev_min_current = PhysicalValue::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            departure_time,
            e_amount,
            ev_max_voltage,
            ev_max_current,
            ev_min_current,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        match self.departure_time {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_uvarint32(writer, v)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_event_code(writer, 0, 1)?;
        self.e_amount.encode(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        self.ev_max_voltage.encode(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        self.ev_max_current.encode(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        self.ev_min_current.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

/// `DC_EVChargeParameterType`: `DepartureTime? -> DCEVStatus ->
/// EVMaximumCurrentLimit -> EVMaximumPowerLimit? -> EVMaximumVoltageLimit ->
/// EVEnergyCapacity? -> EVEnergyRequest? -> FullSOC? -> BulkSOC? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DcEvChargeParameter {
    pub departure_time: Option<u32>,
    pub dc_ev_status: DcEvStatus,
    pub ev_maximum_current_limit: PhysicalValue,
    pub ev_maximum_power_limit: Option<PhysicalValue>,
    pub ev_maximum_voltage_limit: PhysicalValue,
    pub ev_energy_capacity: Option<PhysicalValue>,
    pub ev_energy_request: Option<PhysicalValue>,
    pub full_soc: Option<u8>,
    pub bulk_soc: Option<u8>,
}

impl GrammarElement for DcEvChargeParameter {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, 2)?;
        let departure_time = if code == 0 {
            let v = primitives::read_uvarint32(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };

        engine::read_event_code(reader, 1)?;
        let dc_ev_status = DcEvStatus::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let ev_maximum_current_limit = PhysicalValue::decode(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let ev_maximum_power_limit = if code == 0 {
            Some(PhysicalValue::decode(reader)?)
        } else {
            None
        };

        engine::read_event_code(reader, 1)?;
        let ev_maximum_voltage_limit = PhysicalValue::decode(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let ev_energy_capacity = if code == 0 {
            Some(PhysicalValue::decode(reader)?)
        } else {
            None
        };

        let code = engine::read_event_code(reader, 2)?;
        let ev_energy_request = if code == 0 {
            Some(PhysicalValue::decode(reader)?)
        } else {
            None
        };

        let code = engine::read_event_code(reader, 2)?;
        let full_soc = if code == 0 {
            let v: crate::protocol::types::PercentValue = primitives::read_ranged(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v.get() as u8)
        } else {
            None
        };

        let code = engine::read_event_code(reader, 2)?;
        let bulk_soc = if code == 0 {
            let v: crate::protocol::types::PercentValue = primitives::read_ranged(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v.get() as u8)
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            departure_time,
            dc_ev_status,
            ev_maximum_current_limit,
            ev_maximum_power_limit,
            ev_maximum_voltage_limit,
            ev_energy_capacity,
            ev_energy_request,
            full_soc,
            bulk_soc,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        match self.departure_time {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_uvarint32(writer, v)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_event_code(writer, 0, 1)?;
        self.dc_ev_status.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.ev_maximum_current_limit.encode(writer)?;

        match &self.ev_maximum_power_limit {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_event_code(writer, 0, 1)?;
        self.ev_maximum_voltage_limit.encode(writer)?;

        match &self.ev_energy_capacity {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        match &self.ev_energy_request {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        match self.full_soc {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                let ranged = crate::protocol::types::PercentValue::new(v as i32).map_err(|e| {
                    ErrorKind::CapacityExceeded {
                        wanted: e.value as usize,
                        max: e.max as usize,
                    }
                })?;
                primitives::write_ranged(writer, ranged)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        match self.bulk_soc {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                let ranged = crate::protocol::types::PercentValue::new(v as i32).map_err(|e| {
                    ErrorKind::CapacityExceeded {
                        wanted: e.value as usize,
                        max: e.max as usize,
                    }
                })?;
                primitives::write_ranged(writer, ranged)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_ee_only(writer)
    }
}

/// `EVChargeParameter` choice group: exactly one energy-transfer-mode family,
/// modeled as a Rust `enum` rather than the schema's parallel-optional-field
/// pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvChargeParameter {
    Ac(AcEvChargeParameter),
    Dc(DcEvChargeParameter),
}

impl Default for EvChargeParameter {
    fn default() -> Self {
        Self::Ac(AcEvChargeParameter::default())
    }
}

impl GrammarElement for EvChargeParameter {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, 2)?;
        match code {
            0 => Ok(Self::Ac(AcEvChargeParameter::decode(reader)?)),
            1 => Ok(Self::Dc(DcEvChargeParameter::decode(reader)?)),
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

/// Maximum number of `SAScheduleTuple` entries this profile carries.
pub const MAX_ENERGY_TRANSFER_MODES: usize = 6;

/// `ChargeParameterDiscoveryReq`: `MaxEntriesSASchedule? ->
/// RequestedEnergyTransferMode -> EVChargeParameter -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeParameterDiscoveryReq {
    pub max_entries_sa_schedule: Option<u16>,
    pub requested_energy_transfer_mode: EnergyTransferMode,
    pub ev_charge_parameter: EvChargeParameter,
}

impl Default for ChargeParameterDiscoveryReq {
    fn default() -> Self {
        Self {
            max_entries_sa_schedule: None,
            requested_energy_transfer_mode: EnergyTransferMode::default(),
            ev_charge_parameter: EvChargeParameter::default(),
        }
    }
}

impl GrammarElement for ChargeParameterDiscoveryReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, 2)?;
        let max_entries_sa_schedule = if code == 0 {
            let v = primitives::read_uint_n(reader, 16)? as u16;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };

        engine::read_event_code(reader, 1)?;
        let requested_energy_transfer_mode = EnergyTransferMode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let ev_charge_parameter = EvChargeParameter::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            max_entries_sa_schedule,
            requested_energy_transfer_mode,
            ev_charge_parameter,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        match self.max_entries_sa_schedule {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_uint_n(writer, v as u32, 16)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }

        engine::write_event_code(writer, 0, 1)?;
        self.requested_energy_transfer_mode.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.ev_charge_parameter.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

/// `ChargeParameterDiscoveryRes`: `ResponseCode -> EVSEProcessing ->
/// SAScheduleList[0..6] -> END` (AC/DC EVSE status is out of this profile's
/// condensed response; the schedule list models the repeating-field shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeParameterDiscoveryRes {
    pub response_code: ResponseCode,
    pub evse_processing: EvseProcessing,
    pub sa_schedule_ids: FixedVec<crate::protocol::types::SaScheduleTupleId, MAX_ENERGY_TRANSFER_MODES>,
}

impl Default for ChargeParameterDiscoveryRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            evse_processing: EvseProcessing::Finished,
            sa_schedule_ids: FixedVec::default(),
        }
    }
}

impl GrammarElement for ChargeParameterDiscoveryRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_processing = EvseProcessing::decode(reader)?;
        engine::read_scalar_end(reader)?;

        let mut sa_schedule_ids = FixedVec::default();
        loop {
            let has_room = sa_schedule_ids.len() < MAX_ENERGY_TRANSFER_MODES;
            let transitions = if has_room { 2 } else { 1 };
            let code = engine::read_event_code(reader, transitions)?;
            if !has_room || code == 1 {
                break;
            }
            let id = primitives::read_ranged(reader)?;
            engine::read_scalar_end(reader)?;
            sa_schedule_ids
                .push(id)
                .expect("capacity checked by `has_room` above");
        }

        Ok(Self {
            response_code,
            evse_processing,
            sa_schedule_ids,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.evse_processing.encode(writer)?;
        engine::write_scalar_end(writer)?;

        let mut emitted = 0usize;
        for id in self.sa_schedule_ids.as_slice() {
            engine::write_event_code(writer, 0, 2)?;
            primitives::write_ranged(writer, *id)?;
            engine::write_scalar_end(writer)?;
            emitted += 1;
        }
        if emitted < MAX_ENERGY_TRANSFER_MODES {
            engine::write_event_code(writer, 1, 2)?;
        } else {
            engine::write_event_code(writer, 0, 1)?;
        }
        Ok(())
    }
}
