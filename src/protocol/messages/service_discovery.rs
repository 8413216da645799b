//! `ServiceDiscoveryReq`/`ServiceDiscoveryRes`.
use crate::core::{FixedString, FixedVec};
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{EnergyTransferMode, ResponseCode, ServiceCategory};

/// `ServiceDiscoveryReq`: `ServiceScope? -> ServiceCategory? -> END`. The two
/// optional fields are independent: each is its own 2-way choice (present,
/// skip), unlike `Header`'s co-dependent skip-ahead choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDiscoveryReq {
    pub service_scope: Option<FixedString<64>>,
    pub service_category: Option<ServiceCategory>,
}

impl Default for ServiceDiscoveryReq {
    fn default() -> Self {
        Self {
            service_scope: None,
            service_category: None,
        }
    }
}

impl GrammarElement for ServiceDiscoveryReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, 2)?;
        let service_scope = if code == 0 {
            let v = primitives::read_string(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };

        let code = engine::read_event_code(reader, 2)?;
        let service_category = if code == 0 {
            let v = ServiceCategory::decode(reader)?;
            engine::read_scalar_end(reader)?;
            Some(v)
        } else {
            None
        };

        engine::read_ee_only(reader)?;
        Ok(Self {
            service_scope,
            service_category,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        match &self.service_scope {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_string(writer, v)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }
        match &self.service_category {
            Some(v) => {
                engine::write_event_code(writer, 0, 2)?;
                v.encode(writer)?;
                engine::write_scalar_end(writer)?;
            }
            None => engine::write_event_code(writer, 1, 2)?,
        }
        engine::write_ee_only(writer)
    }
}

/// `ServiceType` entry inside `ServiceList`: `ServiceID -> ServiceCategory ->
/// FreeService -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub service_id: u16,
    pub service_category: ServiceCategory,
    pub free_service: bool,
}

impl Default for ServiceEntry {
    fn default() -> Self {
        Self {
            service_id: 0,
            service_category: ServiceCategory::OtherCustom,
            free_service: false,
        }
    }
}

impl GrammarElement for ServiceEntry {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let service_id = primitives::read_uint_n(reader, 16)? as u16;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let service_category = ServiceCategory::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let free_service = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            service_id,
            service_category,
            free_service,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_uint_n(writer, self.service_id as u32, 16)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.service_category.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.free_service)?;
        engine::write_scalar_end(writer)?;

        engine::write_ee_only(writer)
    }
}

/// Maximum number of `SupportedEnergyTransferMode` entries carried by a
/// `ChargeService` (the full schema enumeration has 6 members).
pub const MAX_ENERGY_TRANSFER_MODES: usize = 6;
/// Maximum number of `Service` entries in a `ServiceList`.
pub const MAX_SERVICE_LIST_ENTRIES: usize = 8;

/// `ChargeServiceType`: `ServiceID -> ServiceCategory -> FreeService ->
/// SupportedEnergyTransferMode[1..6] -> END`, the energy-transfer modes as a
/// trailing array chain whose own END production closes the record (same
/// shape as `CertificateChain.sub_certificates`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeService {
    pub service_id: u16,
    pub service_category: ServiceCategory,
    pub free_service: bool,
    pub energy_transfer_modes: FixedVec<EnergyTransferMode, MAX_ENERGY_TRANSFER_MODES>,
}

impl Default for ChargeService {
    fn default() -> Self {
        Self {
            service_id: 0,
            service_category: ServiceCategory::OtherCustom,
            free_service: false,
            energy_transfer_modes: FixedVec::default(),
        }
    }
}

impl GrammarElement for ChargeService {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let service_id = primitives::read_uint_n(reader, 16)? as u16;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let service_category = ServiceCategory::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let free_service = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;

        let mut energy_transfer_modes = FixedVec::default();
        loop {
            let has_room = energy_transfer_modes.len() < MAX_ENERGY_TRANSFER_MODES;
            let transitions = if has_room { 2 } else { 1 };
            let code = engine::read_event_code(reader, transitions)?;
            if !has_room || code == 1 {
                break;
            }
            let mode = EnergyTransferMode::decode(reader)?;
            engine::read_scalar_end(reader)?;
            energy_transfer_modes
                .push(mode)
                .expect("capacity checked by `has_room` above");
        }

        Ok(Self {
            service_id,
            service_category,
            free_service,
            energy_transfer_modes,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_uint_n(writer, self.service_id as u32, 16)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.service_category.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.free_service)?;
        engine::write_scalar_end(writer)?;

        let mut emitted = 0usize;
        for mode in self.energy_transfer_modes.as_slice() {
            engine::write_event_code(writer, 0, 2)?;
            mode.encode(writer)?;
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

/// `ServiceDiscoveryRes`: `ResponseCode -> ChargeService -> ServiceList[0..8]
/// -> END` (service list as a trailing array chain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceDiscoveryRes {
    pub response_code: ResponseCode,
    pub charge_service: ChargeService,
    pub service_list: FixedVec<ServiceEntry, MAX_SERVICE_LIST_ENTRIES>,
}

impl GrammarElement for ServiceDiscoveryRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let charge_service = ChargeService::decode(reader)?;
        engine::read_scalar_end(reader)?;

        let mut service_list = FixedVec::default();
        loop {
            let has_room = service_list.len() < MAX_SERVICE_LIST_ENTRIES;
            let transitions = if has_room { 2 } else { 1 };
            let code = engine::read_event_code(reader, transitions)?;
            if !has_room || code == 1 {
                break;
            }
            let entry = ServiceEntry::decode(reader)?;
            engine::read_scalar_end(reader)?;
            service_list
                .push(entry)
                .expect("capacity checked by `has_room` above");
        }

        Ok(Self {
            response_code,
            charge_service,
            service_list,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.charge_service.encode(writer)?;
        engine::write_scalar_end(writer)?;

        let mut emitted = 0usize;
        for entry in self.service_list.as_slice() {
            engine::write_event_code(writer, 0, 2)?;
            entry.encode(writer)?;
            engine::write_scalar_end(writer)?;
            emitted += 1;
        }
        if emitted < MAX_SERVICE_LIST_ENTRIES {
            engine::write_event_code(writer, 1, 2)?;
        } else {
            engine::write_event_code(writer, 0, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_round_trips_with_both_optionals_absent() {
        let value = ServiceDiscoveryReq::default();
        let mut buffer = [0x00; 4];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(ServiceDiscoveryReq::decode(&mut reader).unwrap(), value);
    }

    /// spec.md scenario S5: `ServiceScope` and `ServiceCategory` both present.
    #[test]
    fn req_round_trips_with_both_optionals_present() {
        let value = ServiceDiscoveryReq {
            service_scope: Some(FixedString::from_bytes(b"ev-charging").unwrap()),
            service_category: Some(ServiceCategory::EvCharging),
        };
        let mut buffer = [0x00; 32];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(ServiceDiscoveryReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips_with_service_list() {
        let mut energy_transfer_modes = FixedVec::default();
        energy_transfer_modes.push(EnergyTransferMode::DcCombo).unwrap();
        let mut service_list = FixedVec::default();
        service_list
            .push(ServiceEntry {
                service_id: 2,
                service_category: ServiceCategory::Internet,
                free_service: true,
            })
            .unwrap();
        let value = ServiceDiscoveryRes {
            response_code: ResponseCode::Ok,
            charge_service: ChargeService {
                service_id: 1,
                service_category: ServiceCategory::EvCharging,
                free_service: false,
                energy_transfer_modes,
            },
            service_list,
        };
        let mut buffer = [0x00; 16];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(ServiceDiscoveryRes::decode(&mut reader).unwrap(), value);
    }
}
