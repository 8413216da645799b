//! `PaymentDetailsReq`/`PaymentDetailsRes`.
use crate::core::FixedString;
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{CertificateChain, ResponseCode};

/// `PaymentDetailsReq`: `EMAID -> ContractSignatureCertChain -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentDetailsReq {
    pub emaid: FixedString<16>,
    pub contract_signature_cert_chain: CertificateChain,
}

impl GrammarElement for PaymentDetailsReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let emaid = primitives::read_string(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let contract_signature_cert_chain = CertificateChain::decode(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            emaid,
            contract_signature_cert_chain,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_string(writer, &self.emaid)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.contract_signature_cert_chain.encode(writer)?;

        engine::write_ee_only(writer)
    }
}

/// `PaymentDetailsRes`: `ResponseCode -> GenChallenge -> EVSETimeStamp ->
/// END`.
use crate::core::FixedBytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentDetailsRes {
    pub response_code: ResponseCode,
    pub gen_challenge: FixedBytes<16>,
    pub evse_timestamp: u64,
}

impl Default for PaymentDetailsRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            gen_challenge: FixedBytes::default(),
            evse_timestamp: 0,
        }
    }
}

impl GrammarElement for PaymentDetailsRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let gen_challenge = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_timestamp = primitives::read_uvarint64(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            gen_challenge,
            evse_timestamp,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.gen_challenge)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_uvarint64(writer, self.evse_timestamp)?;
        engine::write_scalar_end(writer)?;

        engine::write_ee_only(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_round_trips() {
        let value = PaymentDetailsReq {
            emaid: FixedString::from_bytes(b"DEABCDEF012345").unwrap(),
            contract_signature_cert_chain: CertificateChain {
                certificate: crate::core::FixedBytes::from_slice(&[0x10; 4]).unwrap(),
                ..Default::default()
            },
        };
        let mut buffer = [0x00; 32];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(PaymentDetailsReq::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn res_round_trips() {
        let value = PaymentDetailsRes {
            response_code: ResponseCode::Ok,
            gen_challenge: FixedBytes::from_slice(&[0x01; 16]).unwrap(),
            evse_timestamp: 1_700_000_000,
        };
        let mut buffer = [0x00; 32];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(PaymentDetailsRes::decode(&mut reader).unwrap(), value);
    }
}
