// Request builder - turns a query into the stream request sent to the service
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::metric::Metric;
use crate::infrastructure::proto::common::microgrid::MicrogridComponentIds;
use crate::infrastructure::proto::reporting::include_options::FilterOption;
use crate::infrastructure::proto::reporting::{
    IncludeOptions, ReceiveMicrogridComponentsDataStreamRequest, ResamplingOptions, TimeFilter,
    receive_microgrid_components_data_stream_request::StreamFilter as PbStreamFilter,
};
use crate::infrastructure::proto_mapper::datetime_to_timestamp;

/// Time window, resampling and include options of a stream request.
///
/// `start: None` asks for the earliest available data and `end: None` keeps the
/// stream open indefinitely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub resampling_period: Option<Duration>,
    pub include_states: bool,
    pub include_bounds: bool,
}

impl StreamFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn resampling_period(mut self, period: Duration) -> Self {
        self.resampling_period = Some(period);
        self
    }

    pub fn include_states(mut self, include: bool) -> Self {
        self.include_states = include;
        self
    }

    pub fn include_bounds(mut self, include: bool) -> Self {
        self.include_bounds = include;
        self
    }
}

/// Resampling resolution in whole seconds, rounded to nearest with ties to even.
///
/// Periods up to half a second round to `0` and are sent as is. Periods beyond
/// the wire range are clamped to `u32::MAX`.
pub fn resolution_seconds(period: Duration) -> u32 {
    let seconds = period.as_secs_f64().round_ties_even();
    if seconds >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        seconds as u32
    }
}

fn filter_option(include: bool) -> FilterOption {
    if include {
        FilterOption::Include
    } else {
        FilterOption::Exclude
    }
}

pub fn build_request(
    microgrid_components: &[(u64, Vec<u64>)],
    metrics: &[Metric],
    filter: &StreamFilter,
) -> ReceiveMicrogridComponentsDataStreamRequest {
    let microgrid_components = microgrid_components
        .iter()
        .map(|(microgrid_id, component_ids)| MicrogridComponentIds {
            microgrid_id: *microgrid_id,
            component_ids: component_ids.clone(),
        })
        .collect();

    let time_filter = TimeFilter {
        start: filter.start.as_ref().map(datetime_to_timestamp),
        end: filter.end.as_ref().map(datetime_to_timestamp),
    };

    let resampling_options = ResamplingOptions {
        resolution: filter.resampling_period.map(resolution_seconds),
    };

    let include_options = IncludeOptions {
        bounds: Some(filter_option(filter.include_bounds) as i32),
        states: Some(filter_option(filter.include_states) as i32),
    };

    ReceiveMicrogridComponentsDataStreamRequest {
        microgrid_components,
        metrics: metrics.iter().map(|metric| metric.to_proto()).collect(),
        filter: Some(PbStreamFilter {
            time_filter: Some(time_filter),
            resampling_options: Some(resampling_options),
            include_options: Some(include_options),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stream_filter(request: &ReceiveMicrogridComponentsDataStreamRequest) -> PbStreamFilter {
        request.filter.clone().expect("stream filter is always set")
    }

    #[test]
    fn test_unset_window_and_resolution_are_omitted() {
        let request = build_request(&[(1, vec![2])], &[Metric::DcPower], &StreamFilter::new());
        let filter = stream_filter(&request);

        let time_filter = filter.time_filter.unwrap();
        assert!(time_filter.start.is_none());
        assert!(time_filter.end.is_none());
        assert!(filter.resampling_options.unwrap().resolution.is_none());
    }

    #[test]
    fn test_window_and_resolution_are_set() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let filter = StreamFilter::new()
            .start(start)
            .end(end)
            .resampling_period(Duration::from_secs(60));

        let request = build_request(&[(1, vec![2])], &[Metric::DcPower], &filter);
        let filter = stream_filter(&request);
        let time_filter = filter.time_filter.unwrap();

        assert_eq!(time_filter.start.unwrap().seconds, 1_704_067_200);
        assert_eq!(time_filter.end.unwrap().seconds, 1_704_153_600);
        assert_eq!(filter.resampling_options.unwrap().resolution, Some(60));
    }

    #[test]
    fn test_only_start_is_set() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let request = build_request(&[(1, vec![2])], &[], &StreamFilter::new().start(start));
        let time_filter = stream_filter(&request).time_filter.unwrap();

        assert!(time_filter.start.is_some());
        assert!(time_filter.end.is_none());
    }

    #[test]
    fn test_include_options_are_always_explicit() {
        let request = build_request(&[(1, vec![2])], &[], &StreamFilter::new());
        let options = stream_filter(&request).include_options.unwrap();
        assert_eq!(options.states, Some(FilterOption::Exclude as i32));
        assert_eq!(options.bounds, Some(FilterOption::Exclude as i32));

        let filter = StreamFilter::new().include_states(true).include_bounds(true);
        let request = build_request(&[(1, vec![2])], &[], &filter);
        let options = stream_filter(&request).include_options.unwrap();
        assert_eq!(options.states, Some(FilterOption::Include as i32));
        assert_eq!(options.bounds, Some(FilterOption::Include as i32));
    }

    #[test]
    fn test_groupings_and_metrics_keep_order() {
        let request = build_request(
            &[(7, vec![3, 1, 2]), (4, vec![9])],
            &[Metric::AcActivePower, Metric::DcVoltage],
            &StreamFilter::new(),
        );

        let groups: Vec<(u64, Vec<u64>)> = request
            .microgrid_components
            .iter()
            .map(|group| (group.microgrid_id, group.component_ids.clone()))
            .collect();
        assert_eq!(groups, vec![(7, vec![3, 1, 2]), (4, vec![9])]);
        assert_eq!(
            request.metrics,
            vec![Metric::AcActivePower as i32, Metric::DcVoltage as i32]
        );
    }

    #[test]
    fn test_resolution_rounds_to_nearest_even() {
        assert_eq!(resolution_seconds(Duration::from_millis(1_400)), 1);
        assert_eq!(resolution_seconds(Duration::from_millis(1_600)), 2);
        assert_eq!(resolution_seconds(Duration::from_millis(2_500)), 2);
        assert_eq!(resolution_seconds(Duration::from_millis(3_500)), 4);
        assert_eq!(resolution_seconds(Duration::from_secs(900)), 900);
    }

    #[test]
    fn test_resolution_edges() {
        assert_eq!(resolution_seconds(Duration::from_millis(400)), 0);
        assert_eq!(resolution_seconds(Duration::from_millis(500)), 0);
        assert_eq!(resolution_seconds(Duration::from_secs(u64::from(u32::MAX))), u32::MAX);
        assert_eq!(resolution_seconds(Duration::from_secs(u64::from(u32::MAX) + 10)), u32::MAX);
        assert_eq!(resolution_seconds(Duration::MAX), u32::MAX);
    }
}
