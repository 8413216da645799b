//! `PaymentServiceSelectionReq`/`PaymentServiceSelectionRes`.
use crate::core::FixedVec;
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{PaymentOption, ResponseCode};

/// Maximum number of services an EVCC may select in one request.
pub const MAX_SELECTED_SERVICES: usize = 8;

/// `PaymentServiceSelectionReq`: `SelectedPaymentOption ->
/// SelectedServiceID[1..8] -> END` (the service id list as a trailing array
/// chain whose own END closes the record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentServiceSelectionReq {
    pub selected_payment_option: PaymentOption,
    pub selected_services: FixedVec<u16, MAX_SELECTED_SERVICES>,
}

impl Default for PaymentServiceSelectionReq {
    fn default() -> Self {
        Self {
            selected_payment_option: PaymentOption::Contract,
            selected_services: FixedVec::default(),
        }
    }
}

impl GrammarElement for PaymentServiceSelectionReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let selected_payment_option = PaymentOption::decode(reader)?;
        engine::read_scalar_end(reader)?;

        let mut selected_services = FixedVec::default();
        loop {
            let has_room = selected_services.len() < MAX_SELECTED_SERVICES;
            let transitions = if has_room { 2 } else { 1 };
            let code = engine::read_event_code(reader, transitions)?;
            if !has_room || code == 1 {
                break;
            }
            let id = primitives::read_uint_n(reader, 16)? as u16;
            engine::read_scalar_end(reader)?;
            selected_services
                .push(id)
                .expect("capacity checked by `has_room` above");
        }
        Ok(Self {
            selected_payment_option,
            selected_services,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.selected_payment_option.encode(writer)?;
        engine::write_scalar_end(writer)?;

        let mut emitted = 0usize;
        for id in self.selected_services.as_slice() {
            engine::write_event_code(writer, 0, 2)?;
            primitives::write_uint_n(writer, *id as u32, 16)?;
            engine::write_scalar_end(writer)?;
            emitted += 1;
        }
        if emitted < MAX_SELECTED_SERVICES {
            engine::write_event_code(writer, 1, 2)?;
        } else {
            engine::write_event_code(writer, 0, 1)?;
        }
        Ok(())
    }
}

/// `PaymentServiceSelectionRes`: `ResponseCode -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentServiceSelectionRes {
    pub response_code: ResponseCode,
}

impl Default for PaymentServiceSelectionRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
        }
    }
}

impl GrammarElement for PaymentServiceSelectionRes {
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
    fn req_round_trips_with_selected_services() {
        let mut selected_services = FixedVec::default();
        selected_services.push(1).unwrap();
        selected_services.push(2).unwrap();
        let value = PaymentServiceSelectionReq {
            selected_payment_option: PaymentOption::ExternalPayment,
            selected_services,
        };
        let mut buffer = [0x00; 8];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(
            PaymentServiceSelectionReq::decode(&mut reader).unwrap(),
            value
        );
    }

    #[test]
    fn res_round_trips() {
        let value = PaymentServiceSelectionRes {
            response_code: ResponseCode::FailedServiceSelectionInvalid,
        };
        let mut buffer = [0x00; 4];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(
            PaymentServiceSelectionRes::decode(&mut reader).unwrap(),
            value
        );
    }
}
