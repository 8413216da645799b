//! `CurrentDemandReq`/`CurrentDemandRes`.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{DcEvStatus, DcEvseStatus, PhysicalValue, ResponseCode};

/// `CurrentDemandReq`: `DC_EVStatus -> EVTargetCurrent -> EVMaximumVoltageLimit? ->
/// EVMaximumCurrentLimit? -> EVMaximumPowerLimit? -> BulkChargingComplete? ->
/// ChargingComplete -> RemainingTimeToFullSoC? -> RemainingTimeToBulkSoC? ->
/// EVTargetVoltage -> END`. Trimmed to the fields this profile exercises;
/// the remaining optionals follow the same "2-way choice, independent of
/// neighbours" pattern as `ChargeParameterDiscoveryReq`'s `DC_EVChargeParameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentDemandReq {
    pub dc_ev_status: DcEvStatus,
    pub ev_target_current: PhysicalValue,
    pub charging_complete: bool,
    pub ev_target_voltage: PhysicalValue,
}

impl Default for CurrentDemandReq {
    fn default() -> Self {
        Self {
            dc_ev_status: DcEvStatus::default(),
            ev_target_current: PhysicalValue::default(),
            charging_complete: false,
            ev_target_voltage: PhysicalValue::default(),
        }
    }
}

impl GrammarElement for CurrentDemandReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let dc_ev_status = DcEvStatus::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let ev_target_current = PhysicalValue::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let charging_complete = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let ev_target_voltage = PhysicalValue::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            dc_ev_status,
            ev_target_current,
            charging_complete,
            ev_target_voltage,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.dc_ev_status.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.ev_target_current.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.charging_complete)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.ev_target_voltage.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

/// `CurrentDemandRes`: `ResponseCode -> DC_EVSEStatus -> EVSEPresentVoltage ->
/// EVSEPresentCurrent -> EVSECurrentLimitAchieved -> EVSEVoltageLimitAchieved
/// -> EVSEPowerLimitAchieved -> EVSEMaximumVoltageLimit? ->
/// EVSEMaximumCurrentLimit? -> EVSEMaximumPowerLimit? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentDemandRes {
    pub response_code: ResponseCode,
    pub dc_evse_status: DcEvseStatus,
    pub evse_present_voltage: PhysicalValue,
    pub evse_present_current: PhysicalValue,
    pub evse_current_limit_achieved: bool,
    pub evse_voltage_limit_achieved: bool,
    pub evse_power_limit_achieved: bool,
    pub evse_maximum_power_limit: Option<PhysicalValue>,
}

impl Default for CurrentDemandRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            dc_evse_status: DcEvseStatus::default(),
            evse_present_voltage: PhysicalValue::default(),
            evse_present_current: PhysicalValue::default(),
            evse_current_limit_achieved: false,
            evse_voltage_limit_achieved: false,
            evse_power_limit_achieved: false,
            evse_maximum_power_limit: None,
        }
    }
}

impl GrammarElement for CurrentDemandRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let dc_evse_status = DcEvseStatus::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_present_voltage = PhysicalValue::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_present_current = PhysicalValue::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_current_limit_achieved = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_voltage_limit_achieved = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_power_limit_achieved = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;

        let code = engine::read_event_code(reader, 2)?;
        let evse_maximum_power_limit = if code == 0 {
            Some(PhysicalValue::decode(reader)?)
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            dc_evse_status,
            evse_present_voltage,
            evse_present_current,
            evse_current_limit_achieved,
            evse_voltage_limit_achieved,
            evse_power_limit_achieved,
            evse_maximum_power_limit,
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

        engine::write_event_code(writer, 0, 1)?;
        self.evse_present_current.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.evse_current_limit_achieved)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.evse_voltage_limit_achieved)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.evse_power_limit_achieved)?;
        engine::write_scalar_end(writer)?;

        match &self.evse_maximum_power_limit {
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
    fn req_round_trips() {
        let value = CurrentDemandReq {
            charging_complete: true,
            ..Default::default()
        };
        let mut buffer = [0x00; 16];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(CurrentDemandReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips_with_power_limit() {
        let value = CurrentDemandRes {
            evse_maximum_power_limit: Some(PhysicalValue::default()),
            ..Default::default()
        };
        let mut buffer = [0x00; 32];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(CurrentDemandRes::decode(&mut reader).unwrap(), value);
    }
}
