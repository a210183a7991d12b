// Metric catalog - human-readable metric names to wire codes and back
use std::fmt;
use std::str::FromStr;

use crate::error::ReportingError;

pub use crate::infrastructure::proto::common::metrics::Metric;

const WIRE_PREFIX: &str = "METRIC_";

impl Metric {
    /// Name without the wire prefix, e.g. `AC_ACTIVE_POWER`.
    pub fn name(&self) -> &'static str {
        let wire = self.as_str_name();
        wire.strip_prefix(WIRE_PREFIX).unwrap_or(wire)
    }

    pub fn to_proto(self) -> i32 {
        self as i32
    }

    /// Look up a wire code. Codes this build does not know yield `None`.
    pub fn from_proto(code: i32) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

/// Label for a wire code as it appears in samples. Unknown codes keep their number
/// so a newer server does not break older clients.
pub fn metric_label(code: i32) -> String {
    match Metric::from_proto(code) {
        Some(metric) => metric.name().to_string(),
        None => code.to_string(),
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ReportingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match Metric::from_str_name(&format!("{WIRE_PREFIX}{name}")) {
            Some(Metric::Unspecified) | None => {
                Err(ReportingError::UnknownMetric(name.to_string()))
            }
            Some(metric) => Ok(metric),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_strips_wire_prefix() {
        assert_eq!(Metric::AcActivePower.name(), "AC_ACTIVE_POWER");
        assert_eq!(Metric::BatterySocPct.to_string(), "BATTERY_SOC_PCT");
    }

    #[test]
    fn test_parse_known_name() {
        let metric: Metric = "AC_ACTIVE_POWER".parse().unwrap();
        assert_eq!(metric, Metric::AcActivePower);
        assert_eq!(metric.to_proto(), 46);
        assert_eq!(Metric::from_proto(46), Some(Metric::AcActivePower));
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "NOT_A_METRIC".parse::<Metric>().unwrap_err();
        assert!(matches!(err, ReportingError::UnknownMetric(name) if name == "NOT_A_METRIC"));

        // The wire-level sentinel and the prefixed form are not metric names
        assert!("UNSPECIFIED".parse::<Metric>().is_err());
        assert!("METRIC_DC_POWER".parse::<Metric>().is_err());
    }

    #[test]
    fn test_metric_label_for_unknown_code() {
        assert_eq!(metric_label(Metric::DcPower as i32), "DC_POWER");
        assert_eq!(metric_label(9999), "9999");
    }
}
