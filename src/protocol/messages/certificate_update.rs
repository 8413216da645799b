//! `CertificateUpdateReq`/`CertificateUpdateRes`.
use crate::core::{FixedBytes, FixedString};
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{CertificateChain, ResponseCode};

/// `CertificateUpdateReq`: `EMAID -> ContractSignatureCertChain -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificateUpdateReq {
    pub emaid: FixedString<16>,
    pub contract_signature_cert_chain: CertificateChain,
}

impl GrammarElement for CertificateUpdateReq {
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

/// `CertificateUpdateRes`: `ResponseCode -> ContractSignatureCertChain ->
/// ContractSignatureEncryptedPrivateKey -> DHpublickey -> ContractID ->
/// RetryCounter -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateUpdateRes {
    pub response_code: ResponseCode,
    pub contract_signature_cert_chain: CertificateChain,
    pub contract_signature_encrypted_private_key: FixedBytes<256>,
    pub dh_public_key: FixedBytes<256>,
    pub contract_id: FixedString<16>,
    pub retry_counter: i16,
}

impl Default for CertificateUpdateRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            contract_signature_cert_chain: CertificateChain::default(),
            contract_signature_encrypted_private_key: FixedBytes::default(),
            dh_public_key: FixedBytes::default(),
            contract_id: FixedString::default(),
            retry_counter: 0,
        }
    }
}

impl GrammarElement for CertificateUpdateRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let contract_signature_cert_chain = CertificateChain::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let contract_signature_encrypted_private_key = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let dh_public_key = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let contract_id = primitives::read_string(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let retry_counter = primitives::read_svarint16(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            contract_signature_cert_chain,
            contract_signature_encrypted_private_key,
            dh_public_key,
            contract_id,
            retry_counter,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.contract_signature_cert_chain.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.contract_signature_encrypted_private_key)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.dh_public_key)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_string(writer, &self.contract_id)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_svarint16(writer, self.retry_counter)?;
        engine::write_scalar_end(writer)?;

        engine::write_ee_only(writer)
    }
}
