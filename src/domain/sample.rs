// Flat time-series samples produced from streamed component data
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Value of a sample. Metric samples are numeric, state samples carry a code name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Numeric(f64),
    Categorical(String),
    Absent,
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{}", value),
            Self::Categorical(code) => f.write_str(code),
            Self::Absent => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSample {
    pub timestamp: DateTime<Utc>,
    pub microgrid_id: u64,
    pub component_id: u64,
    pub metric: String,
    pub value: MetricValue,
}

impl MetricSample {
    pub const FIELDS: [&'static str; 5] =
        ["timestamp", "microgrid_id", "component_id", "metric", "value"];

    pub fn new(
        timestamp: DateTime<Utc>,
        microgrid_id: u64,
        component_id: u64,
        metric: String,
        value: MetricValue,
    ) -> Self {
        Self {
            timestamp,
            microgrid_id,
            component_id,
            metric,
            value,
        }
    }
}
