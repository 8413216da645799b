//! Simple types (enumerations, ranged newtypes) and the handful of complex
//! types shared by more than one message in `protocol::messages`.
//!
//! Enumerations are encoded as `ceil(log2(cardinality))`-bit unsigned values
//! per spec.md §3.1/§4.2 — note this is *not* the grammar event-code width
//! formula in `infra::codec::engine` (which reserves an extra code for the
//! second-level event space): an enum value is ordinary element content, not
//! a production selector.
use crate::core::RangedInt;
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives::{self, read_enum, write_enum};
use crate::infra::codec::traits::GrammarElement;

/// `ceil(log2(cardinality))`, the bit width of an enum's ordinal content
/// value. A single-member enum needs no bits at all (there is nothing to
/// distinguish), unlike a grammar event code.
const fn enum_bits(cardinality: u32) -> u8 {
    if cardinality <= 1 {
        0
    } else {
        32 - (cardinality - 1).leading_zeros() as u8
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            const VARIANTS: &'static [$name] = &[$($name::$variant),+];
            /// Number of declared members.
            pub const CARDINALITY: u32 = Self::VARIANTS.len() as u32;
            /// Bit width of the wire value, per spec.md §4.2.
            pub const BITS: u8 = enum_bits(Self::CARDINALITY);

            fn from_code(code: u32) -> Self {
                Self::VARIANTS[code as usize]
            }

            fn code(self) -> u32 {
                Self::VARIANTS
                    .iter()
                    .position(|v| *v == self)
                    .expect("every variant appears in VARIANTS") as u32
            }

            /// Read the enum's wire value; `code >= CARDINALITY` surfaces
            /// `UnknownEventCode` per spec.md §3.2 (never coerced).
            pub fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
                let code = read_enum(reader, Self::BITS, Self::CARDINALITY)?;
                Ok(Self::from_code(code))
            }

            /// Write the enum's wire value.
            pub fn encode(self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
                write_enum(writer, Self::BITS, self.code(), Self::CARDINALITY)
            }
        }

        impl Default for $name {
            /// The schema's first (alphabetical) member, used only to seed
            /// `FixedVec<Self, N>::default()` and similar placeholders; never
            /// a meaningful wire value on its own.
            fn default() -> Self {
                Self::VARIANTS[0]
            }
        }
    };
}

wire_enum! {
    /// `EnergyTransferModeType`, alphabetical by local name per spec.md §4.4.
    EnergyTransferMode {
        AcSinglePhaseCore,
        AcThreePhaseCore,
        DcCombo,
        DcCore,
        DcExtended,
        DcUnique,
    }
}

wire_enum! {
    /// `costKindType` (spec.md §4.5's `CostType` example field).
    CostKind {
        CarbonDioxideEmission,
        EnergyFee,
        RelativePricePercentage,
        RenewableGenerationPercentage,
    }
}

wire_enum! {
    /// `serviceCategoryType`.
    ServiceCategory {
        ContractCertificate,
        EvCharging,
        Internet,
        OtherCustom,
    }
}

wire_enum! {
    /// `EVSEProcessingType`.
    EvseProcessing {
        Finished,
        Ongoing,
    }
}

wire_enum! {
    /// `paymentOptionType`.
    PaymentOption {
        Contract,
        ExternalPayment,
    }
}

wire_enum! {
    /// `EVSENotificationType`.
    EvseNotification {
        None,
        ReNegotiation,
        StopCharging,
    }
}

wire_enum! {
    /// `isolationLevelType`.
    IsolationLevel {
        Fault,
        Invalid,
        NoImd,
        Valid,
        Warning,
    }
}

wire_enum! {
    /// `DC_EVErrorCodeType`.
    DcEvErrorCode {
        Failor,
        NoError,
        NotReady,
        Reserved8,
        Reserved9,
        UnknownError,
    }
}

wire_enum! {
    /// `DC_EVSEStatusCodeType`.
    DcEvseStatusCode {
        EvseIsolationMonitoringActive,
        EvseMalfunction,
        EvseNotReady,
        EvseReady,
        EvseShutdown,
        EvseUtilityInterruptEvent,
    }
}

wire_enum! {
    /// `unitSymbolType` (the unit a `PhysicalValue` is denominated in).
    PhysicalUnit {
        A,
        V,
        W,
        Wh,
    }
}

wire_enum! {
    /// `chargeProgressType`.
    ChargeProgress {
        Start,
        Stop,
    }
}

wire_enum! {
    /// `chargingSessionType`.
    ChargingSession {
        Pause,
        Terminate,
    }
}

wire_enum! {
    /// `faultCodeType` (`Header.Notification.FaultCode`).
    FaultCode {
        NoCertificateAvailable,
        NoChargeServiceSelected,
        ParsingError,
    }
}

wire_enum! {
    /// `responseCodeType`: the closed set of result codes every `*Res`
    /// message carries. Alphabetical by local name per spec.md §4.4.
    ResponseCode {
        Failed,
        FailedCertChainError,
        FailedCertificateExpired,
        FailedCertificateNotAllowedAtThisEvse,
        FailedChallengeInvalid,
        FailedChargingProfileInvalid,
        FailedContractCanceled,
        FailedEvseNotReady,
        FailedMeteringSignatureNotValid,
        FailedNoChargeServiceSelected,
        FailedNoCertificateAvailable,
        FailedPaymentSelectionInvalid,
        FailedPowerDeliveryNotApplied,
        FailedSequenceError,
        FailedServiceIdInvalid,
        FailedServiceSelectionInvalid,
        FailedSignatureError,
        FailedTariffSelectionInvalid,
        FailedUnknownSession,
        FailedWrongEnergyTransferMode,
        NewSessionEstablished,
        Ok,
        OkCertificateExpiresSoon,
    }
}

/// `unitMultiplierType`: 3 bits, bias -3 (range [-3, 4]).
pub type UnitMultiplier = RangedInt<3, -3>;
/// `percentValueType`: 7 bits, bias 0 (range [0, 127]; used for SoC percentages).
pub type PercentValue = RangedInt<7, 0>;
/// `SAIDType`/`SAScheduleTupleID`: 8 bits, bias +1 (range [1, 256]).
pub type SaScheduleTupleId = RangedInt<8, 1>;
/// `shortSAIDType` used by `ParameterSet.ParameterSetID`: 8 bits, bias 0.
pub type ParameterSetId = RangedInt<8, 0>;

//==================================================================================PHYSICAL_VALUE

/// `PhysicalValueType`: a signed mantissa plus a power-of-ten multiplier and
/// a unit, e.g. `{value: 400, multiplier: 1, unit: V}` means 4000 V.
/// Three fields, no optional content: `Multiplier -> Unit -> Value -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalValue {
    pub multiplier: UnitMultiplier,
    pub unit: PhysicalUnit,
    pub value: i16,
}

impl Default for PhysicalValue {
    fn default() -> Self {
        Self {
            multiplier: UnitMultiplier::from_wire(3),
            unit: PhysicalUnit::V,
            value: 0,
        }
    }
}

impl GrammarElement for PhysicalValue {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        // S0: Multiplier -> S1
        engine::read_event_code(reader, 1)?;
        let multiplier: UnitMultiplier = primitives::read_ranged(reader)?;
        engine::read_scalar_end(reader)?;
        // S1: Unit -> S2
        engine::read_event_code(reader, 1)?;
        let unit = PhysicalUnit::decode(reader)?;
        engine::read_scalar_end(reader)?;
        // S2: Value -> EE_ONLY
        engine::read_event_code(reader, 1)?;
        let value = primitives::read_svarint16(reader)?;
        engine::read_scalar_end(reader)?;
        // EE_ONLY -> DONE
        engine::read_ee_only(reader)?;
        Ok(Self {
            multiplier,
            unit,
            value,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_ranged(writer, self.multiplier)?;
        engine::write_scalar_end(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        self.unit.encode(writer)?;
        engine::write_scalar_end(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_svarint16(writer, self.value)?;
        engine::write_scalar_end(writer)?;
        engine::write_ee_only(writer)?;
        Ok(())
    }
}

//==================================================================================DC_EV_STATUS

/// `DC_EVStatusType`: `EVReady -> EVErrorCode -> EVRESSSOC -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcEvStatus {
    pub ev_ready: bool,
    pub ev_error_code: DcEvErrorCode,
    /// State of charge, 0..=100 (wire: 7-bit `percentValueType`).
    pub ev_ress_soc: u8,
}

impl Default for DcEvStatus {
    fn default() -> Self {
        Self {
            ev_ready: false,
            ev_error_code: DcEvErrorCode::NoError,
            ev_ress_soc: 0,
        }
    }
}

impl GrammarElement for DcEvStatus {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let ev_ready = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_event_code(reader, 1)?;
        let ev_error_code = DcEvErrorCode::decode(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_event_code(reader, 1)?;
        let soc: PercentValue = primitives::read_ranged(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_ee_only(reader)?;
        Ok(Self {
            ev_ready,
            ev_error_code,
            ev_ress_soc: soc.get() as u8,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.ev_ready)?;
        engine::write_scalar_end(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        self.ev_error_code.encode(writer)?;
        engine::write_scalar_end(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        let soc = PercentValue::new(self.ev_ress_soc as i32).map_err(|e| {
            ErrorKind::CapacityExceeded {
                wanted: e.value as usize,
                max: e.max as usize,
            }
        })?;
        primitives::write_ranged(writer, soc)?;
        engine::write_scalar_end(writer)?;
        engine::write_ee_only(writer)?;
        Ok(())
    }
}

//==================================================================================DC_EVSE_STATUS

/// `DC_EVSEStatusType`: `NotificationMaxDelay -> EVSENotification ->
/// EVSEIsolationStatus? -> EVSEStatusCode -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcEvseStatus {
    pub notification_max_delay: u16,
    pub evse_notification: EvseNotification,
    pub evse_isolation_status: Option<IsolationLevel>,
    pub evse_status_code: DcEvseStatusCode,
}

impl Default for DcEvseStatus {
    fn default() -> Self {
        Self {
            notification_max_delay: 0,
            evse_notification: EvseNotification::None,
            evse_isolation_status: None,
            evse_status_code: DcEvseStatusCode::EvseNotReady,
        }
    }
}

impl GrammarElement for DcEvseStatus {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let notification_max_delay = primitives::read_uint_n(reader, 16)? as u16;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let evse_notification = EvseNotification::decode(reader)?;
        engine::read_scalar_end(reader)?;

        // optional EVSEIsolationStatus: 2 real productions (present, END) + reserve.
        let code = engine::read_event_code(reader, 2)?;
        let evse_isolation_status = if code == 0 {
            let v = IsolationLevel::decode(reader)?;
            engine::read_scalar_end(reader)?;
            engine::read_event_code(reader, 1)?; // mandatory EVSEStatusCode follows
            Some(v)
        } else {
            None
        };
        let evse_status_code = DcEvseStatusCode::decode(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_ee_only(reader)?;

        Ok(Self {
            notification_max_delay,
            evse_notification,
            evse_isolation_status,
            evse_status_code,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_uint_n(writer, self.notification_max_delay as u32, 16)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        self.evse_notification.encode(writer)?;
        engine::write_scalar_end(writer)?;

        if let Some(level) = self.evse_isolation_status {
            engine::write_event_code(writer, 0, 2)?;
            level.encode(writer)?;
            engine::write_scalar_end(writer)?;
            engine::write_event_code(writer, 0, 1)?;
        } else {
            engine::write_event_code(writer, 1, 2)?;
        }
        self.evse_status_code.encode(writer)?;
        engine::write_scalar_end(writer)?;
        engine::write_ee_only(writer)?;
        Ok(())
    }
}

//==================================================================================AC_EVSE_STATUS

/// `AC_EVSEStatusType`: `NotificationMaxDelay -> EVSENotification -> RCD -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcEvseStatus {
    pub notification_max_delay: u16,
    pub evse_notification: EvseNotification,
    pub rcd: bool,
}

impl Default for AcEvseStatus {
    fn default() -> Self {
        Self {
            notification_max_delay: 0,
            evse_notification: EvseNotification::None,
            rcd: false,
        }
    }
}

impl GrammarElement for AcEvseStatus {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let notification_max_delay = primitives::read_uint_n(reader, 16)? as u16;
        engine::read_scalar_end(reader)?;
        engine::read_event_code(reader, 1)?;
        let evse_notification = EvseNotification::decode(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_event_code(reader, 1)?;
        let rcd = primitives::read_boolean(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_ee_only(reader)?;
        Ok(Self {
            notification_max_delay,
            evse_notification,
            rcd,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_uint_n(writer, self.notification_max_delay as u32, 16)?;
        engine::write_scalar_end(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        self.evse_notification.encode(writer)?;
        engine::write_scalar_end(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_boolean(writer, self.rcd)?;
        engine::write_scalar_end(writer)?;
        engine::write_ee_only(writer)?;
        Ok(())
    }
}

//==================================================================================CERTIFICATE_CHAIN

use crate::core::FixedBytes;
use crate::core::FixedVec;

/// Maximum DER-encoded certificate size this profile accepts (profile
/// default; matches the teacher's `PgnBytes`-style fixed capacity rather
/// than the schema's `base64Binary` unbounded text form).
pub const MAX_CERTIFICATE_BYTES: usize = 800;
/// Maximum number of intermediate certificates carried alongside a leaf.
pub const MAX_SUB_CERTIFICATES: usize = 3;

/// `certificateChainType`: `Certificate -> SubCertificates? -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificateChain {
    pub certificate: FixedBytes<MAX_CERTIFICATE_BYTES>,
    pub sub_certificates: FixedVec<FixedBytes<MAX_CERTIFICATE_BYTES>, MAX_SUB_CERTIFICATES>,
}

impl GrammarElement for CertificateChain {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let certificate = primitives::read_binary(reader)?;
        engine::read_scalar_end(reader)?;

        // Array chain: each state before the capacity limit offers "next
        // SubCertificate" (EC0) or END (EC1); once full, only END remains.
        let mut sub_certificates = FixedVec::default();
        loop {
            let has_room = sub_certificates.len() < MAX_SUB_CERTIFICATES;
            let transitions = if has_room { 2 } else { 1 };
            let code = engine::read_event_code(reader, transitions)?;
            if !has_room || code == 1 {
                break;
            }
            let cert = primitives::read_binary(reader)?;
            engine::read_scalar_end(reader)?;
            sub_certificates
                .push(cert)
                .expect("capacity checked by `has_room` above");
        }
        Ok(Self {
            certificate,
            sub_certificates,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_binary(writer, &self.certificate)?;
        engine::write_scalar_end(writer)?;

        let mut emitted = 0usize;
        for cert in self.sub_certificates.as_slice() {
            engine::write_event_code(writer, 0, 2)?;
            primitives::write_binary(writer, cert)?;
            engine::write_scalar_end(writer)?;
            emitted += 1;
        }
        if emitted < MAX_SUB_CERTIFICATES {
            engine::write_event_code(writer, 1, 2)?;
        } else {
            engine::write_event_code(writer, 0, 1)?;
        }
        Ok(())
    }
}
