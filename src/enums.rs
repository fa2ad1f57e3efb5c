//! Wire enumerations.
//!
//! Each enumeration is a closed set: every variant maps to exactly one
//! wire token, and decoding any token outside the set is a hard
//! `UnknownEnumValue` failure. OCPP 2.0.1 defines no graceful handling of
//! unrecognized enumeration values, so there is no lenient default variant
//! anywhere in this module.
//!
//! Tokens are matched exact-case (`"Accepted"`, not `"accepted"`); the
//! case-insensitivity of [`CiString`](crate::CiString) identifiers does not
//! extend to enumeration tokens.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::codec::{json_kind, OcppJson};
use crate::error::{DecodeError, DecodeErrorKind};

/// Defines one enumeration from its variant/token table: the plain enum,
/// `as_str`/`Display`/`FromStr`, and the wire codec.
macro_rules! ocpp_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// The exact wire token for this variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DecodeError;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                match token {
                    $( $token => Ok(Self::$variant), )+
                    _ => Err(DecodeErrorKind::UnknownEnumValue {
                        enumeration: stringify!($name),
                        token: token.to_string(),
                    }
                    .into()),
                }
            }
        }

        impl OcppJson for $name {
            fn encode(&self) -> Value {
                Value::String(self.as_str().to_owned())
            }

            fn decode(value: &Value) -> Result<Self, DecodeError> {
                match value.as_str() {
                    Some(token) => token.parse(),
                    None => Err(DecodeErrorKind::TypeMismatch {
                        expected: "string",
                        actual: json_kind(value),
                    }
                    .into()),
                }
            }
        }
    };
}

ocpp_enum! {
    /// Authentication scheme for an APN.
    ApnAuthentication {
        Chap => "CHAP",
        None => "NONE",
        Pap => "PAP",
        Auto => "AUTO",
    }
}

ocpp_enum! {
    /// Which attribute of a device-model variable is addressed.
    AttributeType {
        Actual => "Actual",
        Target => "Target",
        MinSet => "MinSet",
        MaxSet => "MaxSet",
    }
}

ocpp_enum! {
    /// Outcome of an authorization check.
    AuthorizationStatus {
        Accepted => "Accepted",
        Blocked => "Blocked",
        ConcurrentTx => "ConcurrentTx",
        Expired => "Expired",
        Invalid => "Invalid",
        NoCredit => "NoCredit",
        NotAllowedTypeEvse => "NotAllowedTypeEVSE",
        NotAtThisLocation => "NotAtThisLocation",
        NotAtThisTime => "NotAtThisTime",
        Unknown => "Unknown",
    }
}

ocpp_enum! {
    /// Actor that imposed a charging limit.
    ChargingLimitSource {
        Ems => "EMS",
        Other => "Other",
        So => "SO",
        Cso => "CSO",
    }
}

ocpp_enum! {
    /// How a charging profile's schedule is anchored in time.
    ChargingProfileKind {
        Absolute => "Absolute",
        Recurring => "Recurring",
        Relative => "Relative",
    }
}

ocpp_enum! {
    /// What a charging profile is for.
    ChargingProfilePurpose {
        ChargingStationExternalConstraints => "ChargingStationExternalConstraints",
        ChargingStationMaxProfile => "ChargingStationMaxProfile",
        TxDefaultProfile => "TxDefaultProfile",
        TxProfile => "TxProfile",
    }
}

ocpp_enum! {
    /// Unit in which schedule limits are expressed.
    ChargingRateUnit {
        W => "W",
        A => "A",
    }
}

ocpp_enum! {
    /// Charging state reported with a transaction.
    ChargingState {
        Charging => "Charging",
        EvConnected => "EVConnected",
        SuspendedEv => "SuspendedEV",
        SuspendedEvse => "SuspendedEVSE",
        Idle => "Idle",
    }
}

ocpp_enum! {
    ClearMonitoringStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        NotFound => "NotFound",
    }
}

ocpp_enum! {
    /// What a sales-tariff cost entry expresses.
    CostKind {
        CarbonDioxideEmission => "CarbonDioxideEmission",
        RelativePricePercentage => "RelativePricePercentage",
        RenewableGenerationPercentage => "RenewableGenerationPercentage",
    }
}

ocpp_enum! {
    /// Declared data type of a device-model variable. Tokens for the
    /// primitive kinds are lowercase on the wire.
    DataType {
        String => "string",
        Decimal => "decimal",
        Integer => "integer",
        DateTime => "dateTime",
        Boolean => "boolean",
        OptionList => "OptionList",
        SequenceList => "SequenceList",
        MemberList => "MemberList",
    }
}

ocpp_enum! {
    /// Energy transfer mode requested by the EV.
    EnergyTransferMode {
        Dc => "DC",
        AcSinglePhase => "AC_single_phase",
        AcTwoPhase => "AC_two_phase",
        AcThreePhase => "AC_three_phase",
    }
}

ocpp_enum! {
    /// Kind of monitor that produced an event notification.
    EventNotificationType {
        HardWiredNotification => "HardWiredNotification",
        HardWiredMonitor => "HardWiredMonitor",
        PreconfiguredMonitor => "PreconfiguredMonitor",
        CustomMonitor => "CustomMonitor",
    }
}

ocpp_enum! {
    /// What triggered a device-model event.
    EventTrigger {
        Alerting => "Alerting",
        Delta => "Delta",
        Periodic => "Periodic",
    }
}

ocpp_enum! {
    /// Certificate use addressed by a GetInstalledCertificateIds exchange.
    GetCertificateIdUse {
        V2gRootCertificate => "V2GRootCertificate",
        MoRootCertificate => "MORootCertificate",
        CsmsRootCertificate => "CSMSRootCertificate",
        V2gCertificateChain => "V2GCertificateChain",
        ManufacturerRootCertificate => "ManufacturerRootCertificate",
    }
}

ocpp_enum! {
    GetVariableStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        UnknownComponent => "UnknownComponent",
        UnknownVariable => "UnknownVariable",
        NotSupportedAttributeType => "NotSupportedAttributeType",
    }
}

ocpp_enum! {
    /// Hash algorithm used in certificate hash data.
    HashAlgorithm {
        Sha256 => "SHA256",
        Sha384 => "SHA384",
        Sha512 => "SHA512",
    }
}

ocpp_enum! {
    /// Kind of authorization token presented to the station.
    IdTokenType {
        Central => "Central",
        EMaid => "eMAID",
        Iso14443 => "ISO14443",
        Iso15693 => "ISO15693",
        KeyCode => "KeyCode",
        Local => "Local",
        MacAddress => "MacAddress",
        NoAuthorization => "NoAuthorization",
    }
}

ocpp_enum! {
    /// Where a sampled value was measured.
    Location {
        Body => "Body",
        Cable => "Cable",
        Ev => "EV",
        Inlet => "Inlet",
        Outlet => "Outlet",
    }
}

ocpp_enum! {
    /// Measured quantity of a sampled value. Dotted tokens are wire-exact.
    Measurand {
        CurrentExport => "Current.Export",
        CurrentImport => "Current.Import",
        CurrentOffered => "Current.Offered",
        EnergyActiveExportRegister => "Energy.Active.Export.Register",
        EnergyActiveImportRegister => "Energy.Active.Import.Register",
        EnergyReactiveExportRegister => "Energy.Reactive.Export.Register",
        EnergyReactiveImportRegister => "Energy.Reactive.Import.Register",
        EnergyActiveExportInterval => "Energy.Active.Export.Interval",
        EnergyActiveImportInterval => "Energy.Active.Import.Interval",
        EnergyActiveNet => "Energy.Active.Net",
        EnergyReactiveExportInterval => "Energy.Reactive.Export.Interval",
        EnergyReactiveImportInterval => "Energy.Reactive.Import.Interval",
        EnergyReactiveNet => "Energy.Reactive.Net",
        EnergyApparentNet => "Energy.Apparent.Net",
        EnergyApparentImport => "Energy.Apparent.Import",
        EnergyApparentExport => "Energy.Apparent.Export",
        Frequency => "Frequency",
        PowerActiveExport => "Power.Active.Export",
        PowerActiveImport => "Power.Active.Import",
        PowerFactor => "Power.Factor",
        PowerOffered => "Power.Offered",
        PowerReactiveExport => "Power.Reactive.Export",
        PowerReactiveImport => "Power.Reactive.Import",
        Soc => "SoC",
        Voltage => "Voltage",
    }
}

ocpp_enum! {
    /// Encoding of a display-message body.
    MessageFormat {
        Ascii => "ASCII",
        Html => "HTML",
        Uri => "URI",
        Utf8 => "UTF8",
    }
}

ocpp_enum! {
    MessagePriority {
        AlwaysFront => "AlwaysFront",
        InFront => "InFront",
        NormalCycle => "NormalCycle",
    }
}

ocpp_enum! {
    /// Station state during which a display message is shown.
    MessageState {
        Charging => "Charging",
        Faulted => "Faulted",
        Idle => "Idle",
        Unavailable => "Unavailable",
    }
}

ocpp_enum! {
    /// Kind of variable monitor.
    MonitorType {
        UpperThreshold => "UpperThreshold",
        LowerThreshold => "LowerThreshold",
        Delta => "Delta",
        Periodic => "Periodic",
        PeriodicClockAligned => "PeriodicClockAligned",
    }
}

ocpp_enum! {
    Mutability {
        ReadOnly => "ReadOnly",
        WriteOnly => "WriteOnly",
        ReadWrite => "ReadWrite",
    }
}

ocpp_enum! {
    /// Network interface slot of a connection profile.
    OcppInterface {
        Wired0 => "Wired0",
        Wired1 => "Wired1",
        Wired2 => "Wired2",
        Wired3 => "Wired3",
        Wireless0 => "Wireless0",
        Wireless1 => "Wireless1",
        Wireless2 => "Wireless2",
        Wireless3 => "Wireless3",
    }
}

ocpp_enum! {
    OcppTransport {
        Json => "JSON",
        Soap => "SOAP",
    }
}

ocpp_enum! {
    /// Protocol version of a connection profile.
    OcppVersion {
        Ocpp12 => "OCPP12",
        Ocpp15 => "OCPP15",
        Ocpp16 => "OCPP16",
        Ocpp20 => "OCPP20",
    }
}

ocpp_enum! {
    /// Electrical phase a sampled value refers to.
    Phase {
        L1 => "L1",
        L2 => "L2",
        L3 => "L3",
        N => "N",
        L1N => "L1-N",
        L2N => "L2-N",
        L3N => "L3-N",
        L1L2 => "L1-L2",
        L2L3 => "L2-L3",
        L3L1 => "L3-L1",
    }
}

ocpp_enum! {
    /// Circumstance under which a meter sample was taken.
    ReadingContext {
        InterruptionBegin => "Interruption.Begin",
        InterruptionEnd => "Interruption.End",
        Other => "Other",
        SampleClock => "Sample.Clock",
        SamplePeriodic => "Sample.Periodic",
        TransactionBegin => "Transaction.Begin",
        TransactionEnd => "Transaction.End",
        Trigger => "Trigger",
    }
}

ocpp_enum! {
    /// Why a transaction stopped.
    Reason {
        DeAuthorized => "DeAuthorized",
        EmergencyStop => "EmergencyStop",
        EnergyLimitReached => "EnergyLimitReached",
        EvDisconnected => "EVDisconnected",
        GroundFault => "GroundFault",
        ImmediateReset => "ImmediateReset",
        Local => "Local",
        LocalOutOfCredit => "LocalOutOfCredit",
        MasterPass => "MasterPass",
        Other => "Other",
        OvercurrentFault => "OvercurrentFault",
        PowerLoss => "PowerLoss",
        PowerQuality => "PowerQuality",
        Reboot => "Reboot",
        Remote => "Remote",
        SocLimitReached => "SOCLimitReached",
        StoppedByEv => "StoppedByEV",
        TimeLimitReached => "TimeLimitReached",
        Timeout => "Timeout",
    }
}

ocpp_enum! {
    RecurrencyKind {
        Daily => "Daily",
        Weekly => "Weekly",
    }
}

ocpp_enum! {
    SetMonitoringStatus {
        Accepted => "Accepted",
        UnknownComponent => "UnknownComponent",
        UnknownVariable => "UnknownVariable",
        UnsupportedMonitorType => "UnsupportedMonitorType",
        Rejected => "Rejected",
        Duplicate => "Duplicate",
    }
}

ocpp_enum! {
    SetVariableStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        UnknownComponent => "UnknownComponent",
        UnknownVariable => "UnknownVariable",
        NotSupportedAttributeType => "NotSupportedAttributeType",
        RebootRequired => "RebootRequired",
    }
}

ocpp_enum! {
    /// VPN tunnel type of a connection profile.
    VpnType {
        IkeV2 => "IKEv2",
        IpSec => "IPSec",
        L2tp => "L2TP",
        Pptp => "PPTP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exact_token_decodes_to_the_matching_variant() {
        assert_eq!(
            AuthorizationStatus::decode(&json!("Accepted")).unwrap(),
            AuthorizationStatus::Accepted
        );
        assert_eq!(
            IdTokenType::decode(&json!("ISO14443")).unwrap(),
            IdTokenType::Iso14443
        );
    }

    #[test]
    fn token_outside_the_closed_set_is_rejected() {
        let err = AuthorizationStatus::decode(&json!("Bananas")).unwrap_err();
        assert_eq!(
            *err.kind(),
            DecodeErrorKind::UnknownEnumValue {
                enumeration: "AuthorizationStatus",
                token: "Bananas".to_string(),
            }
        );
    }

    #[test]
    fn tokens_are_matched_exact_case() {
        // Unlike CiString identifiers, enumeration tokens are case-sensitive.
        assert!(AuthorizationStatus::decode(&json!("accepted")).is_err());
        assert!(IdTokenType::decode(&json!("emaid")).is_err());
    }

    #[test]
    fn mixed_case_and_dotted_tokens_round_trip() {
        for (variant, token) in [
            (Measurand::Soc, "SoC"),
            (Measurand::EnergyActiveImportRegister, "Energy.Active.Import.Register"),
        ] {
            assert_eq!(variant.encode(), json!(token));
            assert_eq!(Measurand::decode(&json!(token)).unwrap(), variant);
        }
        assert_eq!(IdTokenType::EMaid.encode(), json!("eMAID"));
        assert_eq!(EnergyTransferMode::AcSinglePhase.encode(), json!("AC_single_phase"));
        assert_eq!(Phase::L1N.encode(), json!("L1-N"));
    }

    #[test]
    fn non_string_value_is_a_type_mismatch_not_unknown_token() {
        let err = ChargingRateUnit::decode(&json!(7)).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn display_emits_the_wire_token() {
        assert_eq!(Reason::StoppedByEv.to_string(), "StoppedByEV");
        assert_eq!(DataType::DateTime.to_string(), "dateTime");
    }
}
