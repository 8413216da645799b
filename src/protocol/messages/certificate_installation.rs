//! `CertificateInstallationReq`/`CertificateInstallationRes`.
use crate::core::FixedBytes;
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{CertificateChain, ResponseCode};

/// `CertificateInstallationReq`: `OEMProvisioningCert -> ListOfRootCertificateIDs ->
/// END`. `ListOfRootCertificateIDs` is modeled as raw DER-encoded issuer
/// identifiers (same `CertificateChain.certificate` shape, no sub-list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificateInstallationReq {
    pub oem_provisioning_cert: FixedBytes<800>,
    pub root_certificate_id: FixedBytes<64>,
}

impl GrammarElement for CertificateInstallationReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let oem_provisioning_cert = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let root_certificate_id = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            oem_provisioning_cert,
            root_certificate_id,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.oem_provisioning_cert)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.root_certificate_id)?;
        engine::write_scalar_end(writer)?;

        engine::write_ee_only(writer)
    }
}

/// `CertificateInstallationRes`: `ResponseCode -> SAProvisioningCertificateChain ->
/// ContractSignatureCertChain -> ContractSignatureEncryptedPrivateKey ->
/// DHpublickey -> eMAID -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateInstallationRes {
    pub response_code: ResponseCode,
    pub sa_provisioning_cert_chain: CertificateChain,
    pub contract_signature_cert_chain: CertificateChain,
    pub contract_signature_encrypted_private_key: FixedBytes<256>,
    pub dh_public_key: FixedBytes<256>,
    pub emaid: crate::core::FixedString<16>,
}

impl Default for CertificateInstallationRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            sa_provisioning_cert_chain: CertificateChain::default(),
            contract_signature_cert_chain: CertificateChain::default(),
            contract_signature_encrypted_private_key: FixedBytes::default(),
            dh_public_key: FixedBytes::default(),
            emaid: crate::core::FixedString::default(),
        }
    }
}

impl GrammarElement for CertificateInstallationRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let sa_provisioning_cert_chain = CertificateChain::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let contract_signature_cert_chain = CertificateChain::decode(reader)?;

        engine::read_event_code(reader, 1)?;
        let contract_signature_encrypted_private_key = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let dh_public_key = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let emaid = primitives::read_string(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_ee_only(reader)?;
        Ok(Self {
            response_code,
            sa_provisioning_cert_chain,
            contract_signature_cert_chain,
            contract_signature_encrypted_private_key,
            dh_public_key,
            emaid,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.sa_provisioning_cert_chain.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.contract_signature_cert_chain.encode(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.contract_signature_encrypted_private_key)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.dh_public_key)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_string(writer, &self.emaid)?;
        engine::write_scalar_end(writer)?;

        engine::write_ee_only(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_round_trips() {
        let value = CertificateInstallationReq {
            oem_provisioning_cert: FixedBytes::from_slice(&[0x01; 16]).unwrap(),
            root_certificate_id: FixedBytes::from_slice(&[0x02; 8]).unwrap(),
        };
        let mut buffer = [0x00; 64];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(
            CertificateInstallationReq::decode(&mut reader).unwrap(),
            value
        );
    }

    #[test]
    fn res_round_trips() {
        let value = CertificateInstallationRes::default();
        let mut buffer = [0x00; 32];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(
            CertificateInstallationRes::decode(&mut reader).unwrap(),
            value
        );
    }
}
