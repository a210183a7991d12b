// Command line arguments
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::Parser;
use std::time::Duration;

use crate::application::request_builder::StreamFilter;
use crate::domain::metric::Metric;
use crate::presentation::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "reporting-client",
    about = "Stream microgrid component data from the Reporting API"
)]
pub struct Cli {
    /// URL of the Reporting service (defaults to the configured URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Microgrid ID
    #[arg(long)]
    pub mid: u64,

    /// Component IDs
    #[arg(long, num_args = 1.., required = true)]
    pub cid: Vec<u64>,

    /// Metrics to stream, e.g. AC_ACTIVE_POWER
    #[arg(long, num_args = 0.., value_parser = parse_metric)]
    pub metrics: Vec<Metric>,

    /// Include states in the output
    #[arg(long)]
    pub states: bool,

    /// Include bounds in the output
    #[arg(long)]
    pub bounds: bool,

    /// Start, ISO-8601. Without a zone the time is read as UTC. Defaults to the earliest data
    #[arg(long, value_parser = parse_datetime)]
    pub start: Option<DateTime<Utc>>,

    /// End, ISO-8601. Without an end the stream stays open
    #[arg(long, value_parser = parse_datetime)]
    pub end: Option<DateTime<Utc>>,

    /// Resampling period in seconds
    #[arg(long = "resampling_period_s")]
    pub resampling_period_s: Option<u64>,

    /// Page size (kept for compatibility, the stream is not paginated)
    #[arg(long, default_value_t = 1000)]
    pub psize: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// API key
    #[arg(long)]
    pub key: Option<String>,
}

impl Cli {
    pub fn stream_filter(&self) -> StreamFilter {
        StreamFilter {
            start: self.start,
            end: self.end,
            resampling_period: self.resampling_period_s.map(Duration::from_secs),
            include_states: self.states,
            include_bounds: self.bounds,
        }
    }
}

fn parse_metric(name: &str) -> Result<Metric, String> {
    name.parse::<Metric>().map_err(|e| e.to_string())
}

/// Parse an ISO-8601 date or date-time. Values without an offset are UTC.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc());
    }
    Err(format!("invalid ISO-8601 timestamp: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_datetime("2024-01-01T00:00:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-01-01T00:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-01-01").unwrap(), expected);
    }

    #[test]
    fn test_parse_datetime_with_offset() {
        let dt = parse_datetime("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_full_command_line() {
        let cli = Cli::try_parse_from([
            "reporting-client",
            "--mid",
            "1",
            "--cid",
            "2",
            "--metrics",
            "AC_ACTIVE_POWER",
            "DC_POWER",
            "--start",
            "2024-01-01T00:00",
            "--end",
            "2024-01-02T00:00",
            "--resampling_period_s",
            "60",
            "--states",
            "--format",
            "dict",
            "--key",
            "secret",
        ])
        .unwrap();

        assert_eq!(cli.mid, 1);
        assert_eq!(cli.cid, vec![2]);
        assert_eq!(cli.metrics, vec![Metric::AcActivePower, Metric::DcPower]);
        assert_eq!(cli.format, OutputFormat::Dict);
        assert_eq!(cli.key.as_deref(), Some("secret"));
        assert_eq!(cli.psize, 1000);

        let filter = cli.stream_filter();
        assert_eq!(filter.resampling_period, Some(Duration::from_secs(60)));
        assert!(filter.include_states);
        assert!(!filter.include_bounds);
        assert!(filter.start.is_some() && filter.end.is_some());
    }

    #[test]
    fn test_defaults() {
        let cli =
            Cli::try_parse_from(["reporting-client", "--mid", "1", "--cid", "2", "3"]).unwrap();
        assert_eq!(cli.cid, vec![2, 3]);
        assert!(cli.metrics.is_empty());
        assert_eq!(cli.format, OutputFormat::Csv);
        assert!(cli.url.is_none());
        assert_eq!(cli.stream_filter(), StreamFilter::default());
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        let result = Cli::try_parse_from([
            "reporting-client",
            "--mid",
            "1",
            "--cid",
            "2",
            "--metrics",
            "NOT_A_METRIC",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Cli::try_parse_from([
            "reporting-client",
            "--mid",
            "1",
            "--cid",
            "2",
            "--format",
            "xml",
        ]);
        assert!(result.is_err());
    }
}
