//! `V2G_Message.Body`: the top-level discriminated union carrying exactly one
//! of the 34 ISO 15118-2 request/response messages (17 request/response
//! pairs; `ChargingStatusReq` is an empty body kept for symmetry, per
//! `charging_status`'s doc comment). Per the Design Notes' "tagged unions for
//! choice groups" guidance this is a genuine Rust `enum`, not the schema's
//! parallel-optional-field pattern: at most one variant can ever be live.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::traits::GrammarElement;

use super::authorization::{AuthorizationReq, AuthorizationRes};
use super::cable_check::{CableCheckReq, CableCheckRes};
use super::certificate_installation::{CertificateInstallationReq, CertificateInstallationRes};
use super::certificate_update::{CertificateUpdateReq, CertificateUpdateRes};
use super::charge_parameter_discovery::{ChargeParameterDiscoveryReq, ChargeParameterDiscoveryRes};
use super::charging_status::{ChargingStatusReq, ChargingStatusRes};
use super::current_demand::{CurrentDemandReq, CurrentDemandRes};
use super::metering_receipt::{MeteringReceiptReq, MeteringReceiptRes};
use super::payment_details::{PaymentDetailsReq, PaymentDetailsRes};
use super::payment_service_selection::{PaymentServiceSelectionReq, PaymentServiceSelectionRes};
use super::power_delivery::{PowerDeliveryReq, PowerDeliveryRes};
use super::pre_charge::{PreChargeReq, PreChargeRes};
use super::service_detail::{ServiceDetailReq, ServiceDetailRes};
use super::service_discovery::{ServiceDiscoveryReq, ServiceDiscoveryRes};
use super::session_setup::{SessionSetupReq, SessionSetupRes};
use super::session_stop::{SessionStopReq, SessionStopRes};
use super::welding_detection::{WeldingDetectionReq, WeldingDetectionRes};

/// Number of live productions at the `Body` choice: one event code per
/// message variant, densely assigned in the order below (spec.md §4.3,
/// "Ordering and choice" — the interpreter never reorders transitions).
const TRANSITIONS: u32 = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    SessionSetupReq(SessionSetupReq),
    SessionSetupRes(SessionSetupRes),
    ServiceDiscoveryReq(ServiceDiscoveryReq),
    ServiceDiscoveryRes(ServiceDiscoveryRes),
    ServiceDetailReq(ServiceDetailReq),
    ServiceDetailRes(ServiceDetailRes),
    PaymentServiceSelectionReq(PaymentServiceSelectionReq),
    PaymentServiceSelectionRes(PaymentServiceSelectionRes),
    PaymentDetailsReq(PaymentDetailsReq),
    PaymentDetailsRes(PaymentDetailsRes),
    AuthorizationReq(AuthorizationReq),
    AuthorizationRes(AuthorizationRes),
    ChargeParameterDiscoveryReq(ChargeParameterDiscoveryReq),
    ChargeParameterDiscoveryRes(ChargeParameterDiscoveryRes),
    PowerDeliveryReq(PowerDeliveryReq),
    PowerDeliveryRes(PowerDeliveryRes),
    ChargingStatusReq(ChargingStatusReq),
    ChargingStatusRes(ChargingStatusRes),
    MeteringReceiptReq(MeteringReceiptReq),
    MeteringReceiptRes(MeteringReceiptRes),
    SessionStopReq(SessionStopReq),
    SessionStopRes(SessionStopRes),
    CertificateUpdateReq(CertificateUpdateReq),
    CertificateUpdateRes(CertificateUpdateRes),
    CertificateInstallationReq(CertificateInstallationReq),
    CertificateInstallationRes(CertificateInstallationRes),
    CableCheckReq(CableCheckReq),
    CableCheckRes(CableCheckRes),
    PreChargeReq(PreChargeReq),
    PreChargeRes(PreChargeRes),
    CurrentDemandReq(CurrentDemandReq),
    CurrentDemandRes(CurrentDemandRes),
    WeldingDetectionReq(WeldingDetectionReq),
    WeldingDetectionRes(WeldingDetectionRes),
}

impl Default for Body {
    /// `SessionSetupReq` is the only message legal as the first exchange of a
    /// session; used only to seed placeholders, never a meaningful decode.
    fn default() -> Self {
        Self::SessionSetupReq(SessionSetupReq::default())
    }
}

impl GrammarElement for Body {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, TRANSITIONS)?;
        Ok(match code {
            0 => Self::SessionSetupReq(SessionSetupReq::decode(reader)?),
            1 => Self::SessionSetupRes(SessionSetupRes::decode(reader)?),
            2 => Self::ServiceDiscoveryReq(ServiceDiscoveryReq::decode(reader)?),
            3 => Self::ServiceDiscoveryRes(ServiceDiscoveryRes::decode(reader)?),
            4 => Self::ServiceDetailReq(ServiceDetailReq::decode(reader)?),
            5 => Self::ServiceDetailRes(ServiceDetailRes::decode(reader)?),
            6 => Self::PaymentServiceSelectionReq(PaymentServiceSelectionReq::decode(reader)?),
            7 => Self::PaymentServiceSelectionRes(PaymentServiceSelectionRes::decode(reader)?),
            8 => Self::PaymentDetailsReq(PaymentDetailsReq::decode(reader)?),
            9 => Self::PaymentDetailsRes(PaymentDetailsRes::decode(reader)?),
            10 => Self::AuthorizationReq(AuthorizationReq::decode(reader)?),
            11 => Self::AuthorizationRes(AuthorizationRes::decode(reader)?),
            12 => Self::ChargeParameterDiscoveryReq(ChargeParameterDiscoveryReq::decode(reader)?),
            13 => Self::ChargeParameterDiscoveryRes(ChargeParameterDiscoveryRes::decode(reader)?),
            14 => Self::PowerDeliveryReq(PowerDeliveryReq::decode(reader)?),
            15 => Self::PowerDeliveryRes(PowerDeliveryRes::decode(reader)?),
            16 => Self::ChargingStatusReq(ChargingStatusReq::decode(reader)?),
            17 => Self::ChargingStatusRes(ChargingStatusRes::decode(reader)?),
            18 => Self::MeteringReceiptReq(MeteringReceiptReq::decode(reader)?),
            19 => Self::MeteringReceiptRes(MeteringReceiptRes::decode(reader)?),
            20 => Self::SessionStopReq(SessionStopReq::decode(reader)?),
            21 => Self::SessionStopRes(SessionStopRes::decode(reader)?),
            22 => Self::CertificateUpdateReq(CertificateUpdateReq::decode(reader)?),
            23 => Self::CertificateUpdateRes(CertificateUpdateRes::decode(reader)?),
            24 => {
                Self::CertificateInstallationReq(CertificateInstallationReq::decode(reader)?)
            }
            25 => {
                Self::CertificateInstallationRes(CertificateInstallationRes::decode(reader)?)
            }
            26 => Self::CableCheckReq(CableCheckReq::decode(reader)?),
            27 => Self::CableCheckRes(CableCheckRes::decode(reader)?),
            28 => Self::PreChargeReq(PreChargeReq::decode(reader)?),
            29 => Self::PreChargeRes(PreChargeRes::decode(reader)?),
            30 => Self::CurrentDemandReq(CurrentDemandReq::decode(reader)?),
            31 => Self::CurrentDemandRes(CurrentDemandRes::decode(reader)?),
            32 => Self::WeldingDetectionReq(WeldingDetectionReq::decode(reader)?),
            33 => Self::WeldingDetectionRes(WeldingDetectionRes::decode(reader)?),
            _ => unreachable!("read_event_code bounds `code` to `0..TRANSITIONS`"),
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        macro_rules! emit {
            ($code:expr, $inner:expr) => {{
                engine::write_event_code(writer, $code, TRANSITIONS)?;
                $inner.encode(writer)
            }};
        }
        match self {
            Self::SessionSetupReq(v) => emit!(0, v),
            Self::SessionSetupRes(v) => emit!(1, v),
            Self::ServiceDiscoveryReq(v) => emit!(2, v),
            Self::ServiceDiscoveryRes(v) => emit!(3, v),
            Self::ServiceDetailReq(v) => emit!(4, v),
            Self::ServiceDetailRes(v) => emit!(5, v),
            Self::PaymentServiceSelectionReq(v) => emit!(6, v),
            Self::PaymentServiceSelectionRes(v) => emit!(7, v),
            Self::PaymentDetailsReq(v) => emit!(8, v),
            Self::PaymentDetailsRes(v) => emit!(9, v),
            Self::AuthorizationReq(v) => emit!(10, v),
            Self::AuthorizationRes(v) => emit!(11, v),
            Self::ChargeParameterDiscoveryReq(v) => emit!(12, v),
            Self::ChargeParameterDiscoveryRes(v) => emit!(13, v),
            Self::PowerDeliveryReq(v) => emit!(14, v),
            Self::PowerDeliveryRes(v) => emit!(15, v),
            Self::ChargingStatusReq(v) => emit!(16, v),
            Self::ChargingStatusRes(v) => emit!(17, v),
            Self::MeteringReceiptReq(v) => emit!(18, v),
            Self::MeteringReceiptRes(v) => emit!(19, v),
            Self::SessionStopReq(v) => emit!(20, v),
            Self::SessionStopRes(v) => emit!(21, v),
            Self::CertificateUpdateReq(v) => emit!(22, v),
            Self::CertificateUpdateRes(v) => emit!(23, v),
            Self::CertificateInstallationReq(v) => emit!(24, v),
            Self::CertificateInstallationRes(v) => emit!(25, v),
            Self::CableCheckReq(v) => emit!(26, v),
            Self::CableCheckRes(v) => emit!(27, v),
            Self::PreChargeReq(v) => emit!(28, v),
            Self::PreChargeRes(v) => emit!(29, v),
            Self::CurrentDemandReq(v) => emit!(30, v),
            Self::CurrentDemandRes(v) => emit!(31, v),
            Self::WeldingDetectionReq(v) => emit!(32, v),
            Self::WeldingDetectionRes(v) => emit!(33, v),
        }
    }
}
