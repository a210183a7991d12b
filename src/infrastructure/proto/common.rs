// Types from the `frequenz.api.common.v1` packages used by the Reporting API.
// Mirrors the output of prost-build for the upstream .proto files.

/// `frequenz.api.common.v1.metrics`
pub mod metrics {
    /// Measurable quantities a component can report.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Metric {
        Unspecified = 0,
        DcVoltage = 1,
        DcCurrent = 2,
        DcPower = 3,
        AcFrequency = 10,
        AcVoltage = 11,
        AcVoltagePhase1N = 12,
        AcVoltagePhase2N = 13,
        AcVoltagePhase3N = 14,
        AcVoltagePhase1Phase2 = 15,
        AcVoltagePhase2Phase3 = 16,
        AcVoltagePhase3Phase1 = 17,
        AcCurrent = 18,
        AcCurrentPhase1 = 19,
        AcCurrentPhase2 = 20,
        AcCurrentPhase3 = 21,
        AcApparentEnergy = 22,
        AcApparentEnergyPhase1 = 23,
        AcApparentEnergyPhase2 = 24,
        AcApparentEnergyPhase3 = 25,
        AcActiveEnergy = 26,
        AcActiveEnergyPhase1 = 27,
        AcActiveEnergyPhase2 = 28,
        AcActiveEnergyPhase3 = 29,
        AcActiveEnergyConsumed = 30,
        AcActiveEnergyConsumedPhase1 = 31,
        AcActiveEnergyConsumedPhase2 = 32,
        AcActiveEnergyConsumedPhase3 = 33,
        AcActiveEnergyDelivered = 34,
        AcActiveEnergyDeliveredPhase1 = 35,
        AcActiveEnergyDeliveredPhase2 = 36,
        AcActiveEnergyDeliveredPhase3 = 37,
        AcReactiveEnergy = 38,
        AcReactiveEnergyPhase1 = 39,
        AcReactiveEnergyPhase2 = 40,
        AcReactiveEnergyPhase3 = 41,
        AcApparentPower = 42,
        AcApparentPowerPhase1 = 43,
        AcApparentPowerPhase2 = 44,
        AcApparentPowerPhase3 = 45,
        AcActivePower = 46,
        AcActivePowerPhase1 = 47,
        AcActivePowerPhase2 = 48,
        AcActivePowerPhase3 = 49,
        AcReactivePower = 50,
        AcReactivePowerPhase1 = 51,
        AcReactivePowerPhase2 = 52,
        AcReactivePowerPhase3 = 53,
        AcPowerFactor = 54,
        AcPowerFactorPhase1 = 55,
        AcPowerFactorPhase2 = 56,
        AcPowerFactorPhase3 = 57,
        BatteryCapacity = 70,
        BatterySocPct = 71,
        BatteryTemperature = 72,
        InverterTemperature = 80,
        InverterTemperatureCabinet = 81,
        InverterTemperatureHeatsink = 82,
        InverterTemperatureTransformer = 83,
        EvExcessPower = 90,
        EvSocPct = 91,
        SensorWindSpeed = 100,
        SensorWindDirection = 101,
        SensorTemperature = 102,
        SensorRelativeHumidity = 103,
        SensorDewPoint = 104,
        SensorAirPressure = 105,
        SensorIrradiance = 106,
    }
    impl Metric {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "METRIC_UNSPECIFIED",
                Self::DcVoltage => "METRIC_DC_VOLTAGE",
                Self::DcCurrent => "METRIC_DC_CURRENT",
                Self::DcPower => "METRIC_DC_POWER",
                Self::AcFrequency => "METRIC_AC_FREQUENCY",
                Self::AcVoltage => "METRIC_AC_VOLTAGE",
                Self::AcVoltagePhase1N => "METRIC_AC_VOLTAGE_PHASE_1_N",
                Self::AcVoltagePhase2N => "METRIC_AC_VOLTAGE_PHASE_2_N",
                Self::AcVoltagePhase3N => "METRIC_AC_VOLTAGE_PHASE_3_N",
                Self::AcVoltagePhase1Phase2 => "METRIC_AC_VOLTAGE_PHASE_1_PHASE_2",
                Self::AcVoltagePhase2Phase3 => "METRIC_AC_VOLTAGE_PHASE_2_PHASE_3",
                Self::AcVoltagePhase3Phase1 => "METRIC_AC_VOLTAGE_PHASE_3_PHASE_1",
                Self::AcCurrent => "METRIC_AC_CURRENT",
                Self::AcCurrentPhase1 => "METRIC_AC_CURRENT_PHASE_1",
                Self::AcCurrentPhase2 => "METRIC_AC_CURRENT_PHASE_2",
                Self::AcCurrentPhase3 => "METRIC_AC_CURRENT_PHASE_3",
                Self::AcApparentEnergy => "METRIC_AC_APPARENT_ENERGY",
                Self::AcApparentEnergyPhase1 => "METRIC_AC_APPARENT_ENERGY_PHASE_1",
                Self::AcApparentEnergyPhase2 => "METRIC_AC_APPARENT_ENERGY_PHASE_2",
                Self::AcApparentEnergyPhase3 => "METRIC_AC_APPARENT_ENERGY_PHASE_3",
                Self::AcActiveEnergy => "METRIC_AC_ACTIVE_ENERGY",
                Self::AcActiveEnergyPhase1 => "METRIC_AC_ACTIVE_ENERGY_PHASE_1",
                Self::AcActiveEnergyPhase2 => "METRIC_AC_ACTIVE_ENERGY_PHASE_2",
                Self::AcActiveEnergyPhase3 => "METRIC_AC_ACTIVE_ENERGY_PHASE_3",
                Self::AcActiveEnergyConsumed => "METRIC_AC_ACTIVE_ENERGY_CONSUMED",
                Self::AcActiveEnergyConsumedPhase1 => "METRIC_AC_ACTIVE_ENERGY_CONSUMED_PHASE_1",
                Self::AcActiveEnergyConsumedPhase2 => "METRIC_AC_ACTIVE_ENERGY_CONSUMED_PHASE_2",
                Self::AcActiveEnergyConsumedPhase3 => "METRIC_AC_ACTIVE_ENERGY_CONSUMED_PHASE_3",
                Self::AcActiveEnergyDelivered => "METRIC_AC_ACTIVE_ENERGY_DELIVERED",
                Self::AcActiveEnergyDeliveredPhase1 => "METRIC_AC_ACTIVE_ENERGY_DELIVERED_PHASE_1",
                Self::AcActiveEnergyDeliveredPhase2 => "METRIC_AC_ACTIVE_ENERGY_DELIVERED_PHASE_2",
                Self::AcActiveEnergyDeliveredPhase3 => "METRIC_AC_ACTIVE_ENERGY_DELIVERED_PHASE_3",
                Self::AcReactiveEnergy => "METRIC_AC_REACTIVE_ENERGY",
                Self::AcReactiveEnergyPhase1 => "METRIC_AC_REACTIVE_ENERGY_PHASE_1",
                Self::AcReactiveEnergyPhase2 => "METRIC_AC_REACTIVE_ENERGY_PHASE_2",
                Self::AcReactiveEnergyPhase3 => "METRIC_AC_REACTIVE_ENERGY_PHASE_3",
                Self::AcApparentPower => "METRIC_AC_APPARENT_POWER",
                Self::AcApparentPowerPhase1 => "METRIC_AC_APPARENT_POWER_PHASE_1",
                Self::AcApparentPowerPhase2 => "METRIC_AC_APPARENT_POWER_PHASE_2",
                Self::AcApparentPowerPhase3 => "METRIC_AC_APPARENT_POWER_PHASE_3",
                Self::AcActivePower => "METRIC_AC_ACTIVE_POWER",
                Self::AcActivePowerPhase1 => "METRIC_AC_ACTIVE_POWER_PHASE_1",
                Self::AcActivePowerPhase2 => "METRIC_AC_ACTIVE_POWER_PHASE_2",
                Self::AcActivePowerPhase3 => "METRIC_AC_ACTIVE_POWER_PHASE_3",
                Self::AcReactivePower => "METRIC_AC_REACTIVE_POWER",
                Self::AcReactivePowerPhase1 => "METRIC_AC_REACTIVE_POWER_PHASE_1",
                Self::AcReactivePowerPhase2 => "METRIC_AC_REACTIVE_POWER_PHASE_2",
                Self::AcReactivePowerPhase3 => "METRIC_AC_REACTIVE_POWER_PHASE_3",
                Self::AcPowerFactor => "METRIC_AC_POWER_FACTOR",
                Self::AcPowerFactorPhase1 => "METRIC_AC_POWER_FACTOR_PHASE_1",
                Self::AcPowerFactorPhase2 => "METRIC_AC_POWER_FACTOR_PHASE_2",
                Self::AcPowerFactorPhase3 => "METRIC_AC_POWER_FACTOR_PHASE_3",
                Self::BatteryCapacity => "METRIC_BATTERY_CAPACITY",
                Self::BatterySocPct => "METRIC_BATTERY_SOC_PCT",
                Self::BatteryTemperature => "METRIC_BATTERY_TEMPERATURE",
                Self::InverterTemperature => "METRIC_INVERTER_TEMPERATURE",
                Self::InverterTemperatureCabinet => "METRIC_INVERTER_TEMPERATURE_CABINET",
                Self::InverterTemperatureHeatsink => "METRIC_INVERTER_TEMPERATURE_HEATSINK",
                Self::InverterTemperatureTransformer => "METRIC_INVERTER_TEMPERATURE_TRANSFORMER",
                Self::EvExcessPower => "METRIC_EV_EXCESS_POWER",
                Self::EvSocPct => "METRIC_EV_SOC_PCT",
                Self::SensorWindSpeed => "METRIC_SENSOR_WIND_SPEED",
                Self::SensorWindDirection => "METRIC_SENSOR_WIND_DIRECTION",
                Self::SensorTemperature => "METRIC_SENSOR_TEMPERATURE",
                Self::SensorRelativeHumidity => "METRIC_SENSOR_RELATIVE_HUMIDITY",
                Self::SensorDewPoint => "METRIC_SENSOR_DEW_POINT",
                Self::SensorAirPressure => "METRIC_SENSOR_AIR_PRESSURE",
                Self::SensorIrradiance => "METRIC_SENSOR_IRRADIANCE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "METRIC_UNSPECIFIED" => Some(Self::Unspecified),
                "METRIC_DC_VOLTAGE" => Some(Self::DcVoltage),
                "METRIC_DC_CURRENT" => Some(Self::DcCurrent),
                "METRIC_DC_POWER" => Some(Self::DcPower),
                "METRIC_AC_FREQUENCY" => Some(Self::AcFrequency),
                "METRIC_AC_VOLTAGE" => Some(Self::AcVoltage),
                "METRIC_AC_VOLTAGE_PHASE_1_N" => Some(Self::AcVoltagePhase1N),
                "METRIC_AC_VOLTAGE_PHASE_2_N" => Some(Self::AcVoltagePhase2N),
                "METRIC_AC_VOLTAGE_PHASE_3_N" => Some(Self::AcVoltagePhase3N),
                "METRIC_AC_VOLTAGE_PHASE_1_PHASE_2" => Some(Self::AcVoltagePhase1Phase2),
                "METRIC_AC_VOLTAGE_PHASE_2_PHASE_3" => Some(Self::AcVoltagePhase2Phase3),
                "METRIC_AC_VOLTAGE_PHASE_3_PHASE_1" => Some(Self::AcVoltagePhase3Phase1),
                "METRIC_AC_CURRENT" => Some(Self::AcCurrent),
                "METRIC_AC_CURRENT_PHASE_1" => Some(Self::AcCurrentPhase1),
                "METRIC_AC_CURRENT_PHASE_2" => Some(Self::AcCurrentPhase2),
                "METRIC_AC_CURRENT_PHASE_3" => Some(Self::AcCurrentPhase3),
                "METRIC_AC_APPARENT_ENERGY" => Some(Self::AcApparentEnergy),
                "METRIC_AC_APPARENT_ENERGY_PHASE_1" => Some(Self::AcApparentEnergyPhase1),
                "METRIC_AC_APPARENT_ENERGY_PHASE_2" => Some(Self::AcApparentEnergyPhase2),
                "METRIC_AC_APPARENT_ENERGY_PHASE_3" => Some(Self::AcApparentEnergyPhase3),
                "METRIC_AC_ACTIVE_ENERGY" => Some(Self::AcActiveEnergy),
                "METRIC_AC_ACTIVE_ENERGY_PHASE_1" => Some(Self::AcActiveEnergyPhase1),
                "METRIC_AC_ACTIVE_ENERGY_PHASE_2" => Some(Self::AcActiveEnergyPhase2),
                "METRIC_AC_ACTIVE_ENERGY_PHASE_3" => Some(Self::AcActiveEnergyPhase3),
                "METRIC_AC_ACTIVE_ENERGY_CONSUMED" => Some(Self::AcActiveEnergyConsumed),
                "METRIC_AC_ACTIVE_ENERGY_CONSUMED_PHASE_1" => {
                    Some(Self::AcActiveEnergyConsumedPhase1)
                }
                "METRIC_AC_ACTIVE_ENERGY_CONSUMED_PHASE_2" => {
                    Some(Self::AcActiveEnergyConsumedPhase2)
                }
                "METRIC_AC_ACTIVE_ENERGY_CONSUMED_PHASE_3" => {
                    Some(Self::AcActiveEnergyConsumedPhase3)
                }
                "METRIC_AC_ACTIVE_ENERGY_DELIVERED" => Some(Self::AcActiveEnergyDelivered),
                "METRIC_AC_ACTIVE_ENERGY_DELIVERED_PHASE_1" => {
                    Some(Self::AcActiveEnergyDeliveredPhase1)
                }
                "METRIC_AC_ACTIVE_ENERGY_DELIVERED_PHASE_2" => {
                    Some(Self::AcActiveEnergyDeliveredPhase2)
                }
                "METRIC_AC_ACTIVE_ENERGY_DELIVERED_PHASE_3" => {
                    Some(Self::AcActiveEnergyDeliveredPhase3)
                }
                "METRIC_AC_REACTIVE_ENERGY" => Some(Self::AcReactiveEnergy),
                "METRIC_AC_REACTIVE_ENERGY_PHASE_1" => Some(Self::AcReactiveEnergyPhase1),
                "METRIC_AC_REACTIVE_ENERGY_PHASE_2" => Some(Self::AcReactiveEnergyPhase2),
                "METRIC_AC_REACTIVE_ENERGY_PHASE_3" => Some(Self::AcReactiveEnergyPhase3),
                "METRIC_AC_APPARENT_POWER" => Some(Self::AcApparentPower),
                "METRIC_AC_APPARENT_POWER_PHASE_1" => Some(Self::AcApparentPowerPhase1),
                "METRIC_AC_APPARENT_POWER_PHASE_2" => Some(Self::AcApparentPowerPhase2),
                "METRIC_AC_APPARENT_POWER_PHASE_3" => Some(Self::AcApparentPowerPhase3),
                "METRIC_AC_ACTIVE_POWER" => Some(Self::AcActivePower),
                "METRIC_AC_ACTIVE_POWER_PHASE_1" => Some(Self::AcActivePowerPhase1),
                "METRIC_AC_ACTIVE_POWER_PHASE_2" => Some(Self::AcActivePowerPhase2),
                "METRIC_AC_ACTIVE_POWER_PHASE_3" => Some(Self::AcActivePowerPhase3),
                "METRIC_AC_REACTIVE_POWER" => Some(Self::AcReactivePower),
                "METRIC_AC_REACTIVE_POWER_PHASE_1" => Some(Self::AcReactivePowerPhase1),
                "METRIC_AC_REACTIVE_POWER_PHASE_2" => Some(Self::AcReactivePowerPhase2),
                "METRIC_AC_REACTIVE_POWER_PHASE_3" => Some(Self::AcReactivePowerPhase3),
                "METRIC_AC_POWER_FACTOR" => Some(Self::AcPowerFactor),
                "METRIC_AC_POWER_FACTOR_PHASE_1" => Some(Self::AcPowerFactorPhase1),
                "METRIC_AC_POWER_FACTOR_PHASE_2" => Some(Self::AcPowerFactorPhase2),
                "METRIC_AC_POWER_FACTOR_PHASE_3" => Some(Self::AcPowerFactorPhase3),
                "METRIC_BATTERY_CAPACITY" => Some(Self::BatteryCapacity),
                "METRIC_BATTERY_SOC_PCT" => Some(Self::BatterySocPct),
                "METRIC_BATTERY_TEMPERATURE" => Some(Self::BatteryTemperature),
                "METRIC_INVERTER_TEMPERATURE" => Some(Self::InverterTemperature),
                "METRIC_INVERTER_TEMPERATURE_CABINET" => Some(Self::InverterTemperatureCabinet),
                "METRIC_INVERTER_TEMPERATURE_HEATSINK" => Some(Self::InverterTemperatureHeatsink),
                "METRIC_INVERTER_TEMPERATURE_TRANSFORMER" => {
                    Some(Self::InverterTemperatureTransformer)
                }
                "METRIC_EV_EXCESS_POWER" => Some(Self::EvExcessPower),
                "METRIC_EV_SOC_PCT" => Some(Self::EvSocPct),
                "METRIC_SENSOR_WIND_SPEED" => Some(Self::SensorWindSpeed),
                "METRIC_SENSOR_WIND_DIRECTION" => Some(Self::SensorWindDirection),
                "METRIC_SENSOR_TEMPERATURE" => Some(Self::SensorTemperature),
                "METRIC_SENSOR_RELATIVE_HUMIDITY" => Some(Self::SensorRelativeHumidity),
                "METRIC_SENSOR_DEW_POINT" => Some(Self::SensorDewPoint),
                "METRIC_SENSOR_AIR_PRESSURE" => Some(Self::SensorAirPressure),
                "METRIC_SENSOR_IRRADIANCE" => Some(Self::SensorIrradiance),
                _ => None,
            }
        }
    }
    /// A metric value that is a single scalar.
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct SimpleMetricValue {
        #[prost(float, tag = "1")]
        pub value: f32,
    }
    /// A metric value aggregated over the resampling window.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AggregatedMetricValue {
        #[prost(float, tag = "1")]
        pub avg_value: f32,
        #[prost(float, optional, tag = "2")]
        pub min_value: ::core::option::Option<f32>,
        #[prost(float, optional, tag = "3")]
        pub max_value: ::core::option::Option<f32>,
        #[prost(float, repeated, tag = "4")]
        pub raw_values: ::prost::alloc::vec::Vec<f32>,
    }
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MetricValueVariant {
        #[prost(oneof = "metric_value_variant::MetricValueVariant", tags = "1, 2")]
        pub metric_value_variant: ::core::option::Option<metric_value_variant::MetricValueVariant>,
    }
    /// Nested message and enum types in `MetricValueVariant`.
    pub mod metric_value_variant {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum MetricValueVariant {
            #[prost(message, tag = "1")]
            SimpleMetric(super::SimpleMetricValue),
            #[prost(message, tag = "2")]
            AggregatedMetric(super::AggregatedMetricValue),
        }
    }
    /// Lower and upper limits of a metric. Either side may be unset.
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Bounds {
        #[prost(float, optional, tag = "1")]
        pub lower: ::core::option::Option<f32>,
        #[prost(float, optional, tag = "2")]
        pub upper: ::core::option::Option<f32>,
    }
    /// A sampled value of a metric, with the bounds in effect at that time.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MetricSample {
        #[prost(message, optional, tag = "1")]
        pub sampled_at: ::core::option::Option<::prost_types::Timestamp>,
        #[prost(enumeration = "Metric", tag = "2")]
        pub metric: i32,
        #[prost(message, optional, tag = "3")]
        pub value: ::core::option::Option<MetricValueVariant>,
        #[prost(message, repeated, tag = "4")]
        pub bounds: ::prost::alloc::vec::Vec<Bounds>,
    }
}

/// `frequenz.api.common.v1.microgrid`
pub mod microgrid {
    /// Component ids grouped under the microgrid they belong to.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MicrogridComponentIds {
        #[prost(uint64, tag = "1")]
        pub microgrid_id: u64,
        #[prost(uint64, repeated, tag = "2")]
        pub component_ids: ::prost::alloc::vec::Vec<u64>,
    }

    /// `frequenz.api.common.v1.microgrid.components`
    pub mod components {
        /// Operational state a component reports.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum ComponentStateCode {
            Unspecified = 0,
            Unknown = 1,
            Unavailable = 2,
            SwitchingOff = 3,
            Off = 4,
            SwitchingOn = 5,
            Standby = 6,
            Ready = 7,
            Charging = 8,
            Discharging = 9,
            Error = 10,
            EvChargingCableUnplugged = 20,
            EvChargingCablePluggedAtStation = 21,
            EvChargingCablePluggedAtEv = 22,
            EvChargingCableLockedAtStation = 23,
            EvChargingCableLockedAtEv = 24,
            RelayOpen = 30,
            RelayClosed = 31,
            PrechargerOpen = 40,
            PrechargerPrecharging = 41,
            PrechargerClosed = 42,
        }
        impl ComponentStateCode {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Self::Unspecified => "COMPONENT_STATE_CODE_UNSPECIFIED",
                    Self::Unknown => "COMPONENT_STATE_CODE_UNKNOWN",
                    Self::Unavailable => "COMPONENT_STATE_CODE_UNAVAILABLE",
                    Self::SwitchingOff => "COMPONENT_STATE_CODE_SWITCHING_OFF",
                    Self::Off => "COMPONENT_STATE_CODE_OFF",
                    Self::SwitchingOn => "COMPONENT_STATE_CODE_SWITCHING_ON",
                    Self::Standby => "COMPONENT_STATE_CODE_STANDBY",
                    Self::Ready => "COMPONENT_STATE_CODE_READY",
                    Self::Charging => "COMPONENT_STATE_CODE_CHARGING",
                    Self::Discharging => "COMPONENT_STATE_CODE_DISCHARGING",
                    Self::Error => "COMPONENT_STATE_CODE_ERROR",
                    Self::EvChargingCableUnplugged => {
                        "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_UNPLUGGED"
                    }
                    Self::EvChargingCablePluggedAtStation => {
                        "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_PLUGGED_AT_STATION"
                    }
                    Self::EvChargingCablePluggedAtEv => {
                        "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_PLUGGED_AT_EV"
                    }
                    Self::EvChargingCableLockedAtStation => {
                        "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_LOCKED_AT_STATION"
                    }
                    Self::EvChargingCableLockedAtEv => {
                        "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_LOCKED_AT_EV"
                    }
                    Self::RelayOpen => "COMPONENT_STATE_CODE_RELAY_OPEN",
                    Self::RelayClosed => "COMPONENT_STATE_CODE_RELAY_CLOSED",
                    Self::PrechargerOpen => "COMPONENT_STATE_CODE_PRECHARGER_OPEN",
                    Self::PrechargerPrecharging => "COMPONENT_STATE_CODE_PRECHARGER_PRECHARGING",
                    Self::PrechargerClosed => "COMPONENT_STATE_CODE_PRECHARGER_CLOSED",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "COMPONENT_STATE_CODE_UNSPECIFIED" => Some(Self::Unspecified),
                    "COMPONENT_STATE_CODE_UNKNOWN" => Some(Self::Unknown),
                    "COMPONENT_STATE_CODE_UNAVAILABLE" => Some(Self::Unavailable),
                    "COMPONENT_STATE_CODE_SWITCHING_OFF" => Some(Self::SwitchingOff),
                    "COMPONENT_STATE_CODE_OFF" => Some(Self::Off),
                    "COMPONENT_STATE_CODE_SWITCHING_ON" => Some(Self::SwitchingOn),
                    "COMPONENT_STATE_CODE_STANDBY" => Some(Self::Standby),
                    "COMPONENT_STATE_CODE_READY" => Some(Self::Ready),
                    "COMPONENT_STATE_CODE_CHARGING" => Some(Self::Charging),
                    "COMPONENT_STATE_CODE_DISCHARGING" => Some(Self::Discharging),
                    "COMPONENT_STATE_CODE_ERROR" => Some(Self::Error),
                    "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_UNPLUGGED" => {
                        Some(Self::EvChargingCableUnplugged)
                    }
                    "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_PLUGGED_AT_STATION" => {
                        Some(Self::EvChargingCablePluggedAtStation)
                    }
                    "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_PLUGGED_AT_EV" => {
                        Some(Self::EvChargingCablePluggedAtEv)
                    }
                    "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_LOCKED_AT_STATION" => {
                        Some(Self::EvChargingCableLockedAtStation)
                    }
                    "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_LOCKED_AT_EV" => {
                        Some(Self::EvChargingCableLockedAtEv)
                    }
                    "COMPONENT_STATE_CODE_RELAY_OPEN" => Some(Self::RelayOpen),
                    "COMPONENT_STATE_CODE_RELAY_CLOSED" => Some(Self::RelayClosed),
                    "COMPONENT_STATE_CODE_PRECHARGER_OPEN" => Some(Self::PrechargerOpen),
                    "COMPONENT_STATE_CODE_PRECHARGER_PRECHARGING" => {
                        Some(Self::PrechargerPrecharging)
                    }
                    "COMPONENT_STATE_CODE_PRECHARGER_CLOSED" => Some(Self::PrechargerClosed),
                    _ => None,
                }
            }
        }
        /// Warning and error conditions a component reports.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum ComponentErrorCode {
            Unspecified = 0,
            Unknown = 1,
            SwitchOnFault = 2,
            Undervoltage = 3,
            Overvoltage = 4,
            Overcurrent = 5,
            OvercurrentCharging = 6,
            OvercurrentDischarging = 7,
            Overtemperature = 8,
            Undertemperature = 9,
            HighHumidity = 10,
            FuseError = 11,
            PrechargeError = 12,
            PlausibilityError = 13,
            UndervoltageShutdown = 14,
            EvUnexpectedPilotFailure = 15,
            FaultCurrent = 16,
            ShortCircuit = 17,
            ConfigError = 18,
            IllegalComponentStateCodeRequested = 19,
            HardwareInaccessible = 20,
            Internal = 21,
            Unauthorized = 22,
            EvChargingCableUnpluggedFromStation = 40,
            EvChargingCableUnpluggedFromEv = 41,
            EvChargingCableLockFailed = 42,
            EvChargingCableInvalid = 43,
            EvConsumerIncompatible = 44,
            BatteryImbalance = 50,
            BatteryLowSoh = 51,
            BatteryBlockError = 52,
            BatteryControllerError = 53,
            BatteryRelayError = 54,
            BatteryCalibrationNeeded = 56,
            RelayCycleLimitReached = 60,
        }
        impl ComponentErrorCode {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Self::Unspecified => "COMPONENT_ERROR_CODE_UNSPECIFIED",
                    Self::Unknown => "COMPONENT_ERROR_CODE_UNKNOWN",
                    Self::SwitchOnFault => "COMPONENT_ERROR_CODE_SWITCH_ON_FAULT",
                    Self::Undervoltage => "COMPONENT_ERROR_CODE_UNDERVOLTAGE",
                    Self::Overvoltage => "COMPONENT_ERROR_CODE_OVERVOLTAGE",
                    Self::Overcurrent => "COMPONENT_ERROR_CODE_OVERCURRENT",
                    Self::OvercurrentCharging => "COMPONENT_ERROR_CODE_OVERCURRENT_CHARGING",
                    Self::OvercurrentDischarging => "COMPONENT_ERROR_CODE_OVERCURRENT_DISCHARGING",
                    Self::Overtemperature => "COMPONENT_ERROR_CODE_OVERTEMPERATURE",
                    Self::Undertemperature => "COMPONENT_ERROR_CODE_UNDERTEMPERATURE",
                    Self::HighHumidity => "COMPONENT_ERROR_CODE_HIGH_HUMIDITY",
                    Self::FuseError => "COMPONENT_ERROR_CODE_FUSE_ERROR",
                    Self::PrechargeError => "COMPONENT_ERROR_CODE_PRECHARGE_ERROR",
                    Self::PlausibilityError => "COMPONENT_ERROR_CODE_PLAUSIBILITY_ERROR",
                    Self::UndervoltageShutdown => "COMPONENT_ERROR_CODE_UNDERVOLTAGE_SHUTDOWN",
                    Self::EvUnexpectedPilotFailure => {
                        "COMPONENT_ERROR_CODE_EV_UNEXPECTED_PILOT_FAILURE"
                    }
                    Self::FaultCurrent => "COMPONENT_ERROR_CODE_FAULT_CURRENT",
                    Self::ShortCircuit => "COMPONENT_ERROR_CODE_SHORT_CIRCUIT",
                    Self::ConfigError => "COMPONENT_ERROR_CODE_CONFIG_ERROR",
                    Self::IllegalComponentStateCodeRequested => {
                        "COMPONENT_ERROR_CODE_ILLEGAL_COMPONENT_STATE_CODE_REQUESTED"
                    }
                    Self::HardwareInaccessible => "COMPONENT_ERROR_CODE_HARDWARE_INACCESSIBLE",
                    Self::Internal => "COMPONENT_ERROR_CODE_INTERNAL",
                    Self::Unauthorized => "COMPONENT_ERROR_CODE_UNAUTHORIZED",
                    Self::EvChargingCableUnpluggedFromStation => {
                        "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_UNPLUGGED_FROM_STATION"
                    }
                    Self::EvChargingCableUnpluggedFromEv => {
                        "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_UNPLUGGED_FROM_EV"
                    }
                    Self::EvChargingCableLockFailed => {
                        "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_LOCK_FAILED"
                    }
                    Self::EvChargingCableInvalid => {
                        "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_INVALID"
                    }
                    Self::EvConsumerIncompatible => "COMPONENT_ERROR_CODE_EV_CONSUMER_INCOMPATIBLE",
                    Self::BatteryImbalance => "COMPONENT_ERROR_CODE_BATTERY_IMBALANCE",
                    Self::BatteryLowSoh => "COMPONENT_ERROR_CODE_BATTERY_LOW_SOH",
                    Self::BatteryBlockError => "COMPONENT_ERROR_CODE_BATTERY_BLOCK_ERROR",
                    Self::BatteryControllerError => "COMPONENT_ERROR_CODE_BATTERY_CONTROLLER_ERROR",
                    Self::BatteryRelayError => "COMPONENT_ERROR_CODE_BATTERY_RELAY_ERROR",
                    Self::BatteryCalibrationNeeded => {
                        "COMPONENT_ERROR_CODE_BATTERY_CALIBRATION_NEEDED"
                    }
                    Self::RelayCycleLimitReached => {
                        "COMPONENT_ERROR_CODE_RELAY_CYCLE_LIMIT_REACHED"
                    }
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "COMPONENT_ERROR_CODE_UNSPECIFIED" => Some(Self::Unspecified),
                    "COMPONENT_ERROR_CODE_UNKNOWN" => Some(Self::Unknown),
                    "COMPONENT_ERROR_CODE_SWITCH_ON_FAULT" => Some(Self::SwitchOnFault),
                    "COMPONENT_ERROR_CODE_UNDERVOLTAGE" => Some(Self::Undervoltage),
                    "COMPONENT_ERROR_CODE_OVERVOLTAGE" => Some(Self::Overvoltage),
                    "COMPONENT_ERROR_CODE_OVERCURRENT" => Some(Self::Overcurrent),
                    "COMPONENT_ERROR_CODE_OVERCURRENT_CHARGING" => Some(Self::OvercurrentCharging),
                    "COMPONENT_ERROR_CODE_OVERCURRENT_DISCHARGING" => {
                        Some(Self::OvercurrentDischarging)
                    }
                    "COMPONENT_ERROR_CODE_OVERTEMPERATURE" => Some(Self::Overtemperature),
                    "COMPONENT_ERROR_CODE_UNDERTEMPERATURE" => Some(Self::Undertemperature),
                    "COMPONENT_ERROR_CODE_HIGH_HUMIDITY" => Some(Self::HighHumidity),
                    "COMPONENT_ERROR_CODE_FUSE_ERROR" => Some(Self::FuseError),
                    "COMPONENT_ERROR_CODE_PRECHARGE_ERROR" => Some(Self::PrechargeError),
                    "COMPONENT_ERROR_CODE_PLAUSIBILITY_ERROR" => Some(Self::PlausibilityError),
                    "COMPONENT_ERROR_CODE_UNDERVOLTAGE_SHUTDOWN" => {
                        Some(Self::UndervoltageShutdown)
                    }
                    "COMPONENT_ERROR_CODE_EV_UNEXPECTED_PILOT_FAILURE" => {
                        Some(Self::EvUnexpectedPilotFailure)
                    }
                    "COMPONENT_ERROR_CODE_FAULT_CURRENT" => Some(Self::FaultCurrent),
                    "COMPONENT_ERROR_CODE_SHORT_CIRCUIT" => Some(Self::ShortCircuit),
                    "COMPONENT_ERROR_CODE_CONFIG_ERROR" => Some(Self::ConfigError),
                    "COMPONENT_ERROR_CODE_ILLEGAL_COMPONENT_STATE_CODE_REQUESTED" => {
                        Some(Self::IllegalComponentStateCodeRequested)
                    }
                    "COMPONENT_ERROR_CODE_HARDWARE_INACCESSIBLE" => {
                        Some(Self::HardwareInaccessible)
                    }
                    "COMPONENT_ERROR_CODE_INTERNAL" => Some(Self::Internal),
                    "COMPONENT_ERROR_CODE_UNAUTHORIZED" => Some(Self::Unauthorized),
                    "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_UNPLUGGED_FROM_STATION" => {
                        Some(Self::EvChargingCableUnpluggedFromStation)
                    }
                    "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_UNPLUGGED_FROM_EV" => {
                        Some(Self::EvChargingCableUnpluggedFromEv)
                    }
                    "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_LOCK_FAILED" => {
                        Some(Self::EvChargingCableLockFailed)
                    }
                    "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_INVALID" => {
                        Some(Self::EvChargingCableInvalid)
                    }
                    "COMPONENT_ERROR_CODE_EV_CONSUMER_INCOMPATIBLE" => {
                        Some(Self::EvConsumerIncompatible)
                    }
                    "COMPONENT_ERROR_CODE_BATTERY_IMBALANCE" => Some(Self::BatteryImbalance),
                    "COMPONENT_ERROR_CODE_BATTERY_LOW_SOH" => Some(Self::BatteryLowSoh),
                    "COMPONENT_ERROR_CODE_BATTERY_BLOCK_ERROR" => Some(Self::BatteryBlockError),
                    "COMPONENT_ERROR_CODE_BATTERY_CONTROLLER_ERROR" => {
                        Some(Self::BatteryControllerError)
                    }
                    "COMPONENT_ERROR_CODE_BATTERY_RELAY_ERROR" => Some(Self::BatteryRelayError),
                    "COMPONENT_ERROR_CODE_BATTERY_CALIBRATION_NEEDED" => {
                        Some(Self::BatteryCalibrationNeeded)
                    }
                    "COMPONENT_ERROR_CODE_RELAY_CYCLE_LIMIT_REACHED" => {
                        Some(Self::RelayCycleLimitReached)
                    }
                    _ => None,
                }
            }
        }
        /// States, warnings and errors of a component at one point in time.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ComponentState {
            #[prost(message, optional, tag = "1")]
            pub sampled_at: ::core::option::Option<::prost_types::Timestamp>,
            #[prost(enumeration = "ComponentStateCode", repeated, tag = "2")]
            pub states: ::prost::alloc::vec::Vec<i32>,
            #[prost(enumeration = "ComponentErrorCode", repeated, tag = "3")]
            pub warnings: ::prost::alloc::vec::Vec<i32>,
            #[prost(enumeration = "ComponentErrorCode", repeated, tag = "4")]
            pub errors: ::prost::alloc::vec::Vec<i32>,
        }
        /// Metric samples and states of a single component.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ComponentData {
            #[prost(uint64, tag = "1")]
            pub component_id: u64,
            #[prost(message, repeated, tag = "2")]
            pub metric_samples: ::prost::alloc::vec::Vec<super::super::metrics::MetricSample>,
            #[prost(message, repeated, tag = "3")]
            pub states: ::prost::alloc::vec::Vec<ComponentState>,
        }
    }
}
