//! The composite payload type catalog.
//!
//! One plain struct per OCPP 2.0.1 datatype, declared leaves-first so every
//! type only references types above it. Field tables come straight from the
//! protocol: required fields first, then optionals, each with its exact
//! camelCase wire key and `CiString` bound.
//!
//! All of them share one codec through [`ocpp_record!`]: required keys are
//! always emitted and must be present (non-`null`) on decode; optional keys
//! are omitted when absent and tolerate an explicit `null` on decode;
//! unrecognized keys are ignored. `Display` renders a diagnostic listing of
//! the present fields only — it is for logs, not for the wire.
//!
//! Fields whose wire key is `type` are named `kind` here.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::codec::{Fields, OcppJson};
use crate::enums::*;
use crate::error::DecodeError;
use crate::string::CiString;

/// Defines one composite record from its field table: the struct, the
/// shared required/optional codec, and the diagnostic `Display`.
macro_rules! ocpp_record {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( required $rfield:ident : $rty:ty => $rkey:literal, )*
            $( optional $ofield:ident : $oty:ty => $okey:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( pub $rfield: $rty, )*
            $( pub $ofield: Option<$oty>, )*
        }

        impl OcppJson for $name {
            fn encode(&self) -> Value {
                let mut object = serde_json::Map::new();
                $( object.insert($rkey.to_owned(), self.$rfield.encode()); )*
                $(
                    if let Some(value) = &self.$ofield {
                        object.insert($okey.to_owned(), value.encode());
                    }
                )*
                Value::Object(object)
            }

            fn decode(value: &Value) -> Result<Self, DecodeError> {
                let fields = Fields::of(value)?;
                Ok(Self {
                    $( $rfield: fields.required($rkey)?, )*
                    $( $ofield: fields.optional($okey)?, )*
                })
            }
        }

        // Diagnostic rendering for logs: type name plus present fields.
        // Never parsed back; carries no wire-format obligation.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut out = f.debug_struct(stringify!($name));
                $( out.field(stringify!($rfield), &self.$rfield); )*
                $(
                    if let Some(value) = &self.$ofield {
                        out.field(stringify!($ofield), value);
                    }
                )*
                out.finish()
            }
        }
    };
}

ocpp_record! {
    /// Vendor-specific extension data attached to any payload type.
    CustomData {
        required vendor_id: CiString<255> => "vendorId",
    }
}

ocpp_record! {
    AdditionalInfo {
        required additional_id_token: CiString<36> => "additionalIdToken",
        required kind: CiString<50> => "type",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    /// Authorization token presented to the station (RFID UID, eMAID, ...).
    IdToken {
        required id_token: CiString<36> => "idToken",
        required kind: IdTokenType => "type",
        optional custom_data: CustomData => "customData",
        optional additional_info: Vec<AdditionalInfo> => "additionalInfo",
    }
}

ocpp_record! {
    OcspRequestData {
        required hash_algorithm: HashAlgorithm => "hashAlgorithm",
        required issuer_name_hash: CiString<128> => "issuerNameHash",
        required issuer_key_hash: CiString<128> => "issuerKeyHash",
        required serial_number: CiString<40> => "serialNumber",
        required responder_url: CiString<512> => "responderURL",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    MessageContent {
        required format: MessageFormat => "format",
        required content: CiString<512> => "content",
        optional custom_data: CustomData => "customData",
        optional language: CiString<8> => "language",
    }
}

ocpp_record! {
    /// Authorization verdict plus everything the station may cache about it.
    IdTokenInfo {
        required status: AuthorizationStatus => "status",
        optional custom_data: CustomData => "customData",
        optional cache_expiry_date_time: DateTime<Utc> => "cacheExpiryDateTime",
        optional charging_priority: i32 => "chargingPriority",
        optional language1: CiString<8> => "language1",
        optional evse_id: Vec<i32> => "evseId",
        optional group_id_token: IdToken => "groupIdToken",
        optional language2: CiString<8> => "language2",
        optional personal_message: MessageContent => "personalMessage",
    }
}

ocpp_record! {
    Modem {
        optional custom_data: CustomData => "customData",
        optional iccid: CiString<20> => "iccid",
        optional imsi: CiString<20> => "imsi",
    }
}

ocpp_record! {
    /// Physical station identity reported at boot.
    ChargingStation {
        required model: CiString<20> => "model",
        required vendor_name: CiString<50> => "vendorName",
        optional custom_data: CustomData => "customData",
        optional serial_number: CiString<25> => "serialNumber",
        optional modem: Modem => "modem",
        optional firmware_version: CiString<50> => "firmwareVersion",
    }
}

ocpp_record! {
    /// Machine-readable detail attached to a response status.
    StatusInfo {
        required reason_code: CiString<20> => "reasonCode",
        optional custom_data: CustomData => "customData",
        optional additional_info: CiString<512> => "additionalInfo",
    }
}

ocpp_record! {
    Evse {
        required id: i32 => "id",
        optional custom_data: CustomData => "customData",
        optional connector_id: i32 => "connectorId",
    }
}

ocpp_record! {
    /// Filter describing which charging profiles to clear.
    ClearChargingProfile {
        optional custom_data: CustomData => "customData",
        optional evse_id: i32 => "evseId",
        optional charging_profile_purpose: ChargingProfilePurpose => "chargingProfilePurpose",
        optional stack_level: i32 => "stackLevel",
    }
}

ocpp_record! {
    ClearMonitoringResult {
        required status: ClearMonitoringStatus => "status",
        required id: i32 => "id",
        optional custom_data: CustomData => "customData",
        optional status_info: StatusInfo => "statusInfo",
    }
}

ocpp_record! {
    CertificateHashData {
        required hash_algorithm: HashAlgorithm => "hashAlgorithm",
        required issuer_name_hash: CiString<128> => "issuerNameHash",
        required issuer_key_hash: CiString<128> => "issuerKeyHash",
        required serial_number: CiString<40> => "serialNumber",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    /// Filter describing which charging profiles to report.
    ChargingProfileCriterion {
        optional custom_data: CustomData => "customData",
        optional charging_profile_purpose: ChargingProfilePurpose => "chargingProfilePurpose",
        optional stack_level: i32 => "stackLevel",
        optional charging_profile_id: Vec<i32> => "chargingProfileId",
        optional charging_limit_source: Vec<ChargingLimitSource> => "chargingLimitSource",
    }
}

ocpp_record! {
    /// One step of a charging schedule: from `start_period` seconds on,
    /// charge at most `limit` (in the schedule's rate unit).
    ChargingSchedulePeriod {
        required start_period: i32 => "startPeriod",
        required limit: f64 => "limit",
        optional custom_data: CustomData => "customData",
        optional number_phases: i32 => "numberPhases",
        optional phase_to_use: i32 => "phaseToUse",
    }
}

ocpp_record! {
    CompositeSchedule {
        required charging_schedule_period: Vec<ChargingSchedulePeriod> => "chargingSchedulePeriod",
        required evse_id: i32 => "evseId",
        required duration: i32 => "duration",
        required schedule_start: DateTime<Utc> => "scheduleStart",
        required charging_rate_unit: ChargingRateUnit => "chargingRateUnit",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    CertificateHashDataChain {
        required certificate_hash_data: CertificateHashData => "certificateHashData",
        required certificate_type: GetCertificateIdUse => "certificateType",
        optional custom_data: CustomData => "customData",
        optional child_certificate_hash_data: Vec<CertificateHashData> => "childCertificateHashData",
    }
}

ocpp_record! {
    LogParameters {
        required remote_location: CiString<512> => "remoteLocation",
        optional custom_data: CustomData => "customData",
        optional oldest_timestamp: DateTime<Utc> => "oldestTimestamp",
        optional latest_timestamp: DateTime<Utc> => "latestTimestamp",
    }
}

ocpp_record! {
    /// A physical or logical component of the station's device model.
    Component {
        required name: CiString<50> => "name",
        optional custom_data: CustomData => "customData",
        optional evse: Evse => "evse",
        optional instance: CiString<50> => "instance",
    }
}

ocpp_record! {
    Variable {
        required name: CiString<50> => "name",
        optional custom_data: CustomData => "customData",
        optional instance: CiString<50> => "instance",
    }
}

ocpp_record! {
    ComponentVariable {
        required component: Component => "component",
        optional custom_data: CustomData => "customData",
        optional variable: Variable => "variable",
    }
}

ocpp_record! {
    GetVariableData {
        required component: Component => "component",
        required variable: Variable => "variable",
        optional custom_data: CustomData => "customData",
        optional attribute_type: AttributeType => "attributeType",
    }
}

ocpp_record! {
    GetVariableResult {
        required attribute_status: GetVariableStatus => "attributeStatus",
        required component: Component => "component",
        required variable: Variable => "variable",
        optional custom_data: CustomData => "customData",
        optional attribute_status_info: StatusInfo => "attributeStatusInfo",
        optional attribute_type: AttributeType => "attributeType",
        optional attribute_value: CiString<2500> => "attributeValue",
    }
}

ocpp_record! {
    /// Eichrecht-style signed meter reading.
    SignedMeterValue {
        required signed_meter_data: CiString<2500> => "signedMeterData",
        required signing_method: CiString<50> => "signingMethod",
        required encoding_method: CiString<50> => "encodingMethod",
        required public_key: CiString<2500> => "publicKey",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    UnitOfMeasure {
        optional custom_data: CustomData => "customData",
        optional unit: CiString<20> => "unit",
        optional multiplier: i32 => "multiplier",
    }
}

ocpp_record! {
    /// One measured value; without `measurand` it defaults to imported
    /// active energy per the protocol, which is why everything but `value`
    /// is optional.
    SampledValue {
        required value: f64 => "value",
        optional custom_data: CustomData => "customData",
        optional context: ReadingContext => "context",
        optional measurand: Measurand => "measurand",
        optional phase: Phase => "phase",
        optional location: Location => "location",
        optional signed_meter_value: SignedMeterValue => "signedMeterValue",
        optional unit_of_measure: UnitOfMeasure => "unitOfMeasure",
    }
}

ocpp_record! {
    /// A batch of samples taken at one instant.
    MeterValue {
        required sampled_value: Vec<SampledValue> => "sampledValue",
        required timestamp: DateTime<Utc> => "timestamp",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    RelativeTimeInterval {
        required start: i32 => "start",
        optional custom_data: CustomData => "customData",
        optional duration: i32 => "duration",
    }
}

ocpp_record! {
    Cost {
        required cost_kind: CostKind => "costKind",
        required amount: i32 => "amount",
        optional custom_data: CustomData => "customData",
        optional amount_multiplier: i32 => "amountMultiplier",
    }
}

ocpp_record! {
    ConsumptionCost {
        required start_value: f64 => "startValue",
        required cost: Vec<Cost> => "cost",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    SalesTariffEntry {
        required relative_time_interval: RelativeTimeInterval => "relativeTimeInterval",
        optional custom_data: CustomData => "customData",
        optional e_price_level: i32 => "ePriceLevel",
        optional consumption_cost: Vec<ConsumptionCost> => "consumptionCost",
    }
}

ocpp_record! {
    /// ISO 15118 sales tariff offered alongside a charging schedule.
    SalesTariff {
        required id: i32 => "id",
        required sales_tariff_entry: Vec<SalesTariffEntry> => "salesTariffEntry",
        optional custom_data: CustomData => "customData",
        optional sales_tariff_description: CiString<32> => "salesTariffDescription",
        optional num_e_price_levels: i32 => "numEPriceLevels",
    }
}

ocpp_record! {
    ChargingSchedule {
        required id: i32 => "id",
        required charging_rate_unit: ChargingRateUnit => "chargingRateUnit",
        required charging_schedule_period: Vec<ChargingSchedulePeriod> => "chargingSchedulePeriod",
        optional custom_data: CustomData => "customData",
        optional start_schedule: DateTime<Utc> => "startSchedule",
        optional duration: i32 => "duration",
        optional min_charging_rate: f64 => "minChargingRate",
        optional sales_tariff: SalesTariff => "salesTariff",
    }
}

ocpp_record! {
    ChargingLimit {
        required charging_limit_source: ChargingLimitSource => "chargingLimitSource",
        optional custom_data: CustomData => "customData",
        optional is_grid_critical: bool => "isGridCritical",
    }
}

ocpp_record! {
    /// A message to show on the station display.
    MessageInfo {
        required id: i32 => "id",
        required priority: MessagePriority => "priority",
        required message: MessageContent => "message",
        optional custom_data: CustomData => "customData",
        optional display: Component => "display",
        optional state: MessageState => "state",
        optional start_date_time: DateTime<Utc> => "startDateTime",
        optional end_date_time: DateTime<Utc> => "endDateTime",
        optional transaction_id: CiString<36> => "transactionId",
    }
}

ocpp_record! {
    AcChargingParameters {
        required energy_amount: i32 => "energyAmount",
        required ev_min_current: i32 => "evMinCurrent",
        required ev_max_current: i32 => "evMaxCurrent",
        required ev_max_voltage: i32 => "evMaxVoltage",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    DcChargingParameters {
        required ev_max_current: i32 => "evMaxCurrent",
        required ev_max_voltage: i32 => "evMaxVoltage",
        optional custom_data: CustomData => "customData",
        optional energy_amount: i32 => "energyAmount",
        optional ev_max_power: i32 => "evMaxPower",
        optional state_of_charge: i32 => "stateOfCharge",
        optional ev_energy_capacity: i32 => "evEnergyCapacity",
        optional full_soc: i32 => "fullSoC",
        optional bulk_soc: i32 => "bulkSoC",
    }
}

ocpp_record! {
    /// What the EV asked for when it plugged in.
    ChargingNeeds {
        required requested_energy_transfer: EnergyTransferMode => "requestedEnergyTransfer",
        optional custom_data: CustomData => "customData",
        optional ac_charging_parameters: AcChargingParameters => "acChargingParameters",
        optional dc_charging_parameters: DcChargingParameters => "dcChargingParameters",
        optional departure_time: DateTime<Utc> => "departureTime",
    }
}

ocpp_record! {
    /// One device-model event as reported by NotifyEvent.
    EventData {
        required event_id: i32 => "eventId",
        required timestamp: DateTime<Utc> => "timestamp",
        required trigger: EventTrigger => "trigger",
        required actual_value: CiString<2500> => "actualValue",
        required component: Component => "component",
        required event_notification_type: EventNotificationType => "eventNotificationType",
        required variable: Variable => "variable",
        optional custom_data: CustomData => "customData",
        optional cause: i32 => "cause",
        optional tech_code: CiString<50> => "techCode",
        optional tech_info: CiString<500> => "techInfo",
        optional cleared: bool => "cleared",
        optional transaction_id: CiString<36> => "transactionId",
        optional variable_monitoring_id: i32 => "variableMonitoringId",
    }
}

ocpp_record! {
    VariableMonitoring {
        required id: i32 => "id",
        required transaction: bool => "transaction",
        required value: f64 => "value",
        required kind: MonitorType => "type",
        required severity: i32 => "severity",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    MonitoringData {
        required component: Component => "component",
        required variable: Variable => "variable",
        required variable_monitoring: Vec<VariableMonitoring> => "variableMonitoring",
        optional custom_data: CustomData => "customData",
    }
}

ocpp_record! {
    /// One attribute of a reported variable. Everything is optional: an
    /// absent `kind` means `Actual`, an absent `value` means the station
    /// withheld it.
    VariableAttribute {
        optional custom_data: CustomData => "customData",
        optional kind: AttributeType => "type",
        optional value: CiString<2500> => "value",
        optional mutability: Mutability => "mutability",
        optional persistent: bool => "persistent",
        optional constant: bool => "constant",
    }
}

ocpp_record! {
    VariableCharacteristics {
        required data_type: DataType => "dataType",
        required supports_monitoring: bool => "supportsMonitoring",
        optional custom_data: CustomData => "customData",
        optional unit: CiString<16> => "unit",
        optional min_limit: f64 => "minLimit",
        optional max_limit: f64 => "maxLimit",
        optional values_list: CiString<1000> => "valuesList",
    }
}

ocpp_record! {
    ReportData {
        required component: Component => "component",
        required variable: Variable => "variable",
        required variable_attribute: Vec<VariableAttribute> => "variableAttribute",
        optional custom_data: CustomData => "customData",
        optional variable_characteristics: VariableCharacteristics => "variableCharacteristics",
    }
}

ocpp_record! {
    /// A stack of charging schedules with purpose, kind and validity window.
    ChargingProfile {
        required id: i32 => "id",
        required stack_level: i32 => "stackLevel",
        required charging_profile_purpose: ChargingProfilePurpose => "chargingProfilePurpose",
        required charging_profile_kind: ChargingProfileKind => "chargingProfileKind",
        required charging_schedule: Vec<ChargingSchedule> => "chargingSchedule",
        optional custom_data: CustomData => "customData",
        optional recurrency_kind: RecurrencyKind => "recurrencyKind",
        optional valid_from: DateTime<Utc> => "validFrom",
        optional valid_to: DateTime<Utc> => "validTo",
        optional transaction_id: CiString<36> => "transactionId",
    }
}

ocpp_record! {
    /// One local-authorization-list entry.
    AuthorizationData {
        required id_token: IdToken => "idToken",
        optional custom_data: CustomData => "customData",
        optional id_token_info: IdTokenInfo => "idTokenInfo",
    }
}

ocpp_record! {
    Apn {
        required apn: CiString<512> => "apn",
        required apn_authentication: ApnAuthentication => "apnAuthentication",
        optional custom_data: CustomData => "customData",
        optional apn_user_name: CiString<20> => "apnUserName",
        optional apn_password: CiString<20> => "apnPassword",
        optional sim_pin: i32 => "simPin",
        optional preferred_network: CiString<6> => "preferredNetwork",
        optional use_only_preferred_network: bool => "useOnlyPreferredNetwork",
    }
}

ocpp_record! {
    Vpn {
        required server: CiString<512> => "server",
        required user: CiString<20> => "user",
        required password: CiString<20> => "password",
        required key: CiString<255> => "key",
        required kind: VpnType => "type",
        optional custom_data: CustomData => "customData",
        optional group: CiString<20> => "group",
    }
}

ocpp_record! {
    /// How the station reaches one CSMS endpoint.
    NetworkConnectionProfile {
        required ocpp_version: OcppVersion => "ocppVersion",
        required ocpp_transport: OcppTransport => "ocppTransport",
        required ocpp_csms_url: CiString<512> => "ocppCsmsUrl",
        required message_timeout: i32 => "messageTimeout",
        required security_profile: i32 => "securityProfile",
        required ocpp_interface: OcppInterface => "ocppInterface",
        optional custom_data: CustomData => "customData",
        optional apn: Apn => "apn",
        optional vpn: Vpn => "vpn",
    }
}

ocpp_record! {
    SetMonitoringData {
        required value: f64 => "value",
        required kind: MonitorType => "type",
        required severity: i32 => "severity",
        required component: Component => "component",
        required variable: Variable => "variable",
        optional custom_data: CustomData => "customData",
        optional id: i32 => "id",
        optional transaction: bool => "transaction",
    }
}

ocpp_record! {
    SetMonitoringResult {
        required status: SetMonitoringStatus => "status",
        required kind: MonitorType => "type",
        required component: Component => "component",
        required variable: Variable => "variable",
        required severity: i32 => "severity",
        optional custom_data: CustomData => "customData",
        optional id: i32 => "id",
        optional status_info: StatusInfo => "statusInfo",
    }
}

ocpp_record! {
    SetVariableData {
        required attribute_value: CiString<1000> => "attributeValue",
        required component: Component => "component",
        required variable: Variable => "variable",
        optional custom_data: CustomData => "customData",
        optional attribute_type: AttributeType => "attributeType",
    }
}

ocpp_record! {
    SetVariableResult {
        required attribute_status: SetVariableStatus => "attributeStatus",
        required component: Component => "component",
        required variable: Variable => "variable",
        optional custom_data: CustomData => "customData",
        optional attribute_type: AttributeType => "attributeType",
        optional attribute_status_info: StatusInfo => "attributeStatusInfo",
    }
}

ocpp_record! {
    /// Transaction metadata carried by TransactionEvent.
    Transaction {
        required transaction_id: CiString<36> => "transactionId",
        optional custom_data: CustomData => "customData",
        optional charging_state: ChargingState => "chargingState",
        optional time_spent_charging: i32 => "timeSpentCharging",
        optional stopped_reason: Reason => "stoppedReason",
        optional remote_start_id: i32 => "remoteStartId",
    }
}

ocpp_record! {
    Firmware {
        required location: CiString<512> => "location",
        required retrieve_date_time: DateTime<Utc> => "retrieveDateTime",
        optional custom_data: CustomData => "customData",
        optional install_date_time: DateTime<Utc> => "installDateTime",
        optional signing_certificate: CiString<5500> => "signingCertificate",
        optional signature: CiString<800> => "signature",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;
    use serde_json::json;

    fn ci<const N: usize>(s: &str) -> CiString<N> {
        CiString::new(s).unwrap()
    }

    fn sample_id_token() -> IdToken {
        IdToken {
            id_token: ci("ABCDEF1234"),
            kind: IdTokenType::Iso14443,
            custom_data: None,
            additional_info: None,
        }
    }

    #[test]
    fn id_token_decodes_and_reencodes_to_the_same_two_key_object() {
        let wire = json!({ "idToken": "ABCDEF1234", "type": "ISO14443" });
        let token = IdToken::decode(&wire).unwrap();
        assert_eq!(token, sample_id_token());
        assert_eq!(token.encode(), wire);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let wire = json!({ "idToken": "X", "type": "ISO14443", "foo": 1 });
        let token = IdToken::decode(&wire).unwrap();
        assert_eq!(token.id_token.as_str(), "X");
        // ...and the extra key does not survive a re-encode.
        assert_eq!(
            token.encode(),
            json!({ "idToken": "X", "type": "ISO14443" })
        );
    }

    #[test]
    fn missing_required_key_fails_and_restoring_it_succeeds() {
        let without = json!({ "type": "ISO14443" });
        let err = IdToken::decode(&without).unwrap_err();
        assert_eq!(*err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(err.path(), "idToken");

        let mut with = without.clone();
        with["idToken"] = json!("ABCDEF1234");
        assert!(IdToken::decode(&with).is_ok());
    }

    #[test]
    fn meter_value_missing_sample_array_reports_the_path() {
        let err =
            MeterValue::decode(&json!({ "timestamp": "2024-01-01T00:00:00Z" })).unwrap_err();
        assert_eq!(*err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(err.path(), "sampledValue");
    }

    #[test]
    fn unset_optional_fields_are_omitted_from_the_wire() {
        let schedule = ChargingSchedule {
            id: 1,
            charging_rate_unit: ChargingRateUnit::W,
            charging_schedule_period: vec![ChargingSchedulePeriod {
                start_period: 0,
                limit: 11000.0,
                custom_data: None,
                number_phases: None,
                phase_to_use: None,
            }],
            custom_data: None,
            start_schedule: None,
            duration: None,
            min_charging_rate: None,
            sales_tariff: None,
        };
        let wire = schedule.encode();
        let object = wire.as_object().unwrap();
        assert!(!object.contains_key("minChargingRate"));
        assert!(!object.contains_key("startSchedule"));
        // No optional key ever appears as an explicit null.
        assert!(object.values().all(|v| !v.is_null()));
    }

    #[test]
    fn present_but_null_optional_reads_as_absent() {
        let wire = json!({
            "idToken": "ABCDEF1234",
            "type": "ISO14443",
            "additionalInfo": null,
        });
        let token = IdToken::decode(&wire).unwrap();
        assert_eq!(token.additional_info, None);
        // The asymmetry: decode tolerates the null, encode drops the key.
        assert_eq!(
            token.encode(),
            json!({ "idToken": "ABCDEF1234", "type": "ISO14443" })
        );
    }

    #[test]
    fn nested_list_failures_report_a_dotted_indexed_path() {
        let wire = json!({
            "id": 7,
            "chargingRateUnit": "A",
            "chargingSchedulePeriod": [
                { "startPeriod": 0, "limit": 16.0 },
                { "limit": 32.0 },
            ],
        });
        let err = ChargingSchedule::decode(&wire).unwrap_err();
        assert_eq!(err.path(), "chargingSchedulePeriod[1].startPeriod");
        assert_eq!(*err.kind(), DecodeErrorKind::MissingField);
    }

    #[test]
    fn fractional_number_into_whole_number_field_is_a_mismatch() {
        let wire = json!({ "id": 1.5 });
        let err = Evse::decode(&wire).unwrap_err();
        assert_eq!(err.path(), "id");
        assert!(matches!(err.kind(), DecodeErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn over_long_string_field_reports_a_length_violation() {
        let wire = json!({ "vendorId": "v".repeat(256) });
        let err = CustomData::decode(&wire).unwrap_err();
        assert_eq!(err.path(), "vendorId");
        assert!(matches!(
            err.kind(),
            DecodeErrorKind::LengthViolation(v) if v.max == 255 && v.len == 256
        ));
    }

    #[test]
    fn bad_enum_token_deep_in_a_record_keeps_its_path() {
        let wire = json!({
            "status": "Accepted",
            "groupIdToken": { "idToken": "G1", "type": "Bananas" },
        });
        let err = IdTokenInfo::decode(&wire).unwrap_err();
        assert_eq!(err.path(), "groupIdToken.type");
        assert!(matches!(err.kind(), DecodeErrorKind::UnknownEnumValue { .. }));
    }

    #[test]
    fn deep_composite_round_trips() {
        let profile = ChargingProfile {
            id: 42,
            stack_level: 2,
            charging_profile_purpose: ChargingProfilePurpose::TxProfile,
            charging_profile_kind: ChargingProfileKind::Absolute,
            charging_schedule: vec![ChargingSchedule {
                id: 1,
                charging_rate_unit: ChargingRateUnit::A,
                charging_schedule_period: vec![
                    ChargingSchedulePeriod {
                        start_period: 0,
                        limit: 16.0,
                        custom_data: None,
                        number_phases: Some(3),
                        phase_to_use: None,
                    },
                    ChargingSchedulePeriod {
                        start_period: 3600,
                        limit: 32.0,
                        custom_data: None,
                        number_phases: None,
                        phase_to_use: Some(1),
                    },
                ],
                custom_data: None,
                start_schedule: Some("2024-06-01T08:00:00Z".parse().unwrap()),
                duration: Some(7200),
                min_charging_rate: Some(6.0),
                sales_tariff: Some(SalesTariff {
                    id: 9,
                    sales_tariff_entry: vec![SalesTariffEntry {
                        relative_time_interval: RelativeTimeInterval {
                            start: 0,
                            custom_data: None,
                            duration: Some(1800),
                        },
                        custom_data: None,
                        e_price_level: Some(1),
                        consumption_cost: Some(vec![ConsumptionCost {
                            start_value: 0.0,
                            cost: vec![Cost {
                                cost_kind: CostKind::RelativePricePercentage,
                                amount: 100,
                                custom_data: None,
                                amount_multiplier: Some(-2),
                            }],
                            custom_data: None,
                        }]),
                    }],
                    custom_data: None,
                    sales_tariff_description: Some(ci("Day tariff")),
                    num_e_price_levels: Some(2),
                }),
            }],
            custom_data: Some(CustomData {
                vendor_id: ci("com.example"),
            }),
            recurrency_kind: None,
            valid_from: Some("2024-06-01T00:00:00Z".parse().unwrap()),
            valid_to: None,
            transaction_id: Some(ci("tx-0001")),
        };
        assert_eq!(ChargingProfile::decode(&profile.encode()).unwrap(), profile);
    }

    #[test]
    fn authorization_chain_round_trips_with_nested_id_token() {
        let data = AuthorizationData {
            id_token: IdToken {
                id_token: ci("04E1A2B3C4D5E6"),
                kind: IdTokenType::Iso14443,
                custom_data: None,
                additional_info: Some(vec![AdditionalInfo {
                    additional_id_token: ci("SECONDARY"),
                    kind: ci("licensePlate"),
                    custom_data: None,
                }]),
            },
            custom_data: None,
            id_token_info: Some(IdTokenInfo {
                status: AuthorizationStatus::Accepted,
                custom_data: None,
                cache_expiry_date_time: Some("2025-01-01T00:00:00Z".parse().unwrap()),
                charging_priority: Some(1),
                language1: Some(ci("en")),
                evse_id: Some(vec![1, 2]),
                group_id_token: Some(sample_id_token()),
                language2: None,
                personal_message: Some(MessageContent {
                    format: MessageFormat::Utf8,
                    content: ci("Welcome back"),
                    custom_data: None,
                    language: Some(ci("en")),
                }),
            }),
        };
        assert_eq!(AuthorizationData::decode(&data.encode()).unwrap(), data);
    }

    #[test]
    fn report_data_round_trips_with_all_optional_attributes_absent() {
        let report = ReportData {
            component: Component {
                name: ci("Connector"),
                custom_data: None,
                evse: Some(Evse {
                    id: 1,
                    custom_data: None,
                    connector_id: Some(2),
                }),
                instance: None,
            },
            variable: Variable {
                name: ci("AvailabilityState"),
                custom_data: None,
                instance: None,
            },
            variable_attribute: vec![VariableAttribute {
                custom_data: None,
                kind: None,
                value: None,
                mutability: None,
                persistent: None,
                constant: None,
            }],
            custom_data: None,
            variable_characteristics: None,
        };
        let wire = report.encode();
        assert_eq!(wire["variableAttribute"], json!([{}]));
        assert_eq!(ReportData::decode(&wire).unwrap(), report);
    }

    #[test]
    fn network_connection_profile_round_trips() {
        let profile = NetworkConnectionProfile {
            ocpp_version: OcppVersion::Ocpp20,
            ocpp_transport: OcppTransport::Json,
            ocpp_csms_url: ci("wss://csms.example.com/ocpp"),
            message_timeout: 30,
            security_profile: 2,
            ocpp_interface: OcppInterface::Wired0,
            custom_data: None,
            apn: Some(Apn {
                apn: ci("internet"),
                apn_authentication: ApnAuthentication::Chap,
                custom_data: None,
                apn_user_name: Some(ci("user")),
                apn_password: None,
                sim_pin: Some(1234),
                preferred_network: None,
                use_only_preferred_network: Some(false),
            }),
            vpn: None,
        };
        assert_eq!(
            NetworkConnectionProfile::decode(&profile.encode()).unwrap(),
            profile
        );
    }

    #[test]
    fn identifier_comparison_is_case_insensitive_after_decode() {
        let a = IdToken::decode(&json!({ "idToken": "abcdef", "type": "Local" })).unwrap();
        let b = IdToken::decode(&json!({ "idToken": "ABCDEF", "type": "Local" })).unwrap();
        assert_eq!(a, b);
        // Casing still goes out verbatim.
        assert_eq!(a.encode()["idToken"], json!("abcdef"));
        assert_eq!(b.encode()["idToken"], json!("ABCDEF"));
    }

    #[test]
    fn diagnostic_display_lists_present_fields_only() {
        let token = sample_id_token();
        let rendered = token.to_string();
        assert!(rendered.starts_with("IdToken"));
        assert!(rendered.contains("id_token"));
        assert!(rendered.contains("ABCDEF1234"));
        assert!(!rendered.contains("additional_info"));
        assert!(!rendered.contains("custom_data"));
    }

    #[test]
    fn payload_text_entry_points_round_trip() {
        let token = sample_id_token();
        let text = crate::codec::encode_payload(&token);
        let back: IdToken = crate::codec::decode_payload(&text).unwrap();
        assert_eq!(back, token);
    }
}
