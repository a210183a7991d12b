// Components data batch - flattens one streamed response into metric samples
use chrono::{DateTime, Utc};

use crate::domain::metric::metric_label;
use crate::domain::sample::{MetricSample, MetricValue};
use crate::infrastructure::proto::common::metrics::MetricSample as PbMetricSample;
use crate::infrastructure::proto::common::metrics::metric_value_variant::MetricValueVariant;
use crate::infrastructure::proto::common::microgrid::components::{
    ComponentErrorCode, ComponentState, ComponentStateCode,
};
use crate::infrastructure::proto::reporting::ReceiveMicrogridComponentsDataStreamResponse;
use crate::infrastructure::proto_mapper::timestamp_to_datetime;

/// Data of the components of one microgrid, as returned in one streamed message.
#[derive(Debug, Clone)]
pub struct ComponentsDataBatch {
    data: ReceiveMicrogridComponentsDataStreamResponse,
}

impl ComponentsDataBatch {
    pub fn new(data: ReceiveMicrogridComponentsDataStreamResponse) -> Self {
        Self { data }
    }

    pub fn microgrid_id(&self) -> u64 {
        self.data.microgrid_id
    }

    /// True when there are no components, or the first one has neither metric
    /// samples nor states.
    pub fn is_empty(&self) -> bool {
        match self.data.components.first() {
            None => true,
            Some(first) => first.metric_samples.is_empty() && first.states.is_empty(),
        }
    }

    /// Lazily flatten the batch.
    ///
    /// Components come in response order. Within a component all metric samples
    /// come first, each followed by its bounds, then all states.
    ///
    /// Only simple metric values are supported; any other value variant is
    /// reported as [`MetricValue::Absent`].
    pub fn iter(&self) -> impl Iterator<Item = MetricSample> + Send + '_ {
        let microgrid_id = self.data.microgrid_id;
        self.data.components.iter().flat_map(move |component| {
            let component_id = component.component_id;
            let metrics = component
                .metric_samples
                .iter()
                .flat_map(move |sample| metric_samples(microgrid_id, component_id, sample));
            let states = component
                .states
                .iter()
                .flat_map(move |state| state_samples(microgrid_id, component_id, state));
            metrics.chain(states)
        })
    }
}

fn metric_samples(
    microgrid_id: u64,
    component_id: u64,
    sample: &PbMetricSample,
) -> impl Iterator<Item = MetricSample> + Send + '_ {
    let timestamp = timestamp_to_datetime(sample.sampled_at.as_ref());
    let metric = metric_label(sample.metric);

    let value = match sample.value.as_ref().and_then(|v| v.metric_value_variant.as_ref()) {
        Some(MetricValueVariant::SimpleMetric(simple)) => {
            MetricValue::Numeric(f64::from(simple.value))
        }
        _ => MetricValue::Absent,
    };
    let primary = MetricSample::new(timestamp, microgrid_id, component_id, metric.clone(), value);

    let bounds = sample.bounds.iter().enumerate().flat_map(move |(index, bounds)| {
        let metric = metric.clone();
        [("lower", bounds.lower), ("upper", bounds.upper)]
            .into_iter()
            .filter_map(move |(side, bound)| {
                let bound = bound?;
                Some(MetricSample::new(
                    timestamp,
                    microgrid_id,
                    component_id,
                    format!("{}_bound_{}_{}", metric, index, side),
                    MetricValue::Numeric(f64::from(bound)),
                ))
            })
    });

    std::iter::once(primary).chain(bounds)
}

fn state_samples(
    microgrid_id: u64,
    component_id: u64,
    state: &ComponentState,
) -> impl Iterator<Item = MetricSample> + Send + '_ {
    let timestamp: DateTime<Utc> = timestamp_to_datetime(state.sampled_at.as_ref());

    let states = state.states.iter().map(|&code| ("state", state_code_label(code)));
    let warnings = state.warnings.iter().map(|&code| ("warning", error_code_label(code)));
    let errors = state.errors.iter().map(|&code| ("error", error_code_label(code)));

    states.chain(warnings).chain(errors).map(move |(category, code)| {
        MetricSample::new(
            timestamp,
            microgrid_id,
            component_id,
            category.to_string(),
            MetricValue::Categorical(code),
        )
    })
}

fn state_code_label(code: i32) -> String {
    ComponentStateCode::try_from(code)
        .map(|state| state.as_str_name().to_string())
        .unwrap_or_else(|_| code.to_string())
}

fn error_code_label(code: i32) -> String {
    ComponentErrorCode::try_from(code)
        .map(|error| error.as_str_name().to_string())
        .unwrap_or_else(|_| code.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::metric::Metric;
    use crate::infrastructure::proto::common::metrics::{
        AggregatedMetricValue, Bounds, MetricValueVariant as PbValue, SimpleMetricValue,
    };
    use crate::infrastructure::proto::common::microgrid::components::ComponentData;
    use chrono::TimeZone;
    use prost_types::Timestamp;

    const JAN_1_2024: i64 = 1_704_067_200;

    pub(crate) fn simple_sample(metric: Metric, seconds: i64, value: f32) -> PbMetricSample {
        PbMetricSample {
            sampled_at: Some(Timestamp { seconds, nanos: 0 }),
            metric: metric as i32,
            value: Some(PbValue {
                metric_value_variant: Some(MetricValueVariant::SimpleMetric(SimpleMetricValue {
                    value,
                })),
            }),
            bounds: vec![],
        }
    }

    pub(crate) fn response(
        microgrid_id: u64,
        components: Vec<ComponentData>,
    ) -> ReceiveMicrogridComponentsDataStreamResponse {
        ReceiveMicrogridComponentsDataStreamResponse {
            microgrid_id,
            components,
        }
    }

    fn labels(batch: &ComponentsDataBatch) -> Vec<String> {
        batch.iter().map(|s| s.metric).collect()
    }

    #[test]
    fn test_is_empty_without_components() {
        assert!(ComponentsDataBatch::new(response(1, vec![])).is_empty());
    }

    #[test]
    fn test_is_empty_when_first_component_has_no_data() {
        let batch = ComponentsDataBatch::new(response(
            1,
            vec![
                ComponentData {
                    component_id: 2,
                    ..Default::default()
                },
                ComponentData {
                    component_id: 3,
                    metric_samples: vec![simple_sample(Metric::DcPower, JAN_1_2024, 1.0)],
                    states: vec![],
                },
            ],
        ));
        assert!(batch.is_empty());
    }

    #[test]
    fn test_not_empty_with_samples_or_states() {
        let with_samples = ComponentsDataBatch::new(response(
            1,
            vec![ComponentData {
                component_id: 2,
                metric_samples: vec![simple_sample(Metric::DcPower, JAN_1_2024, 1.0)],
                states: vec![],
            }],
        ));
        assert!(!with_samples.is_empty());

        let with_states = ComponentsDataBatch::new(response(
            1,
            vec![ComponentData {
                component_id: 2,
                metric_samples: vec![],
                states: vec![ComponentState::default()],
            }],
        ));
        assert!(!with_states.is_empty());
    }

    #[test]
    fn test_bounds_follow_their_metric() {
        let mut sample = simple_sample(Metric::AcActivePower, JAN_1_2024, 7.5);
        sample.bounds = vec![Bounds {
            lower: Some(5.0),
            upper: Some(10.0),
        }];
        let batch = ComponentsDataBatch::new(response(
            1,
            vec![ComponentData {
                component_id: 2,
                metric_samples: vec![sample],
                states: vec![],
            }],
        ));

        let samples: Vec<MetricSample> = batch.iter().collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].metric, "AC_ACTIVE_POWER");
        assert_eq!(samples[0].value, MetricValue::Numeric(7.5));
        assert_eq!(samples[1].metric, "AC_ACTIVE_POWER_bound_0_lower");
        assert_eq!(samples[1].value, MetricValue::Numeric(5.0));
        assert_eq!(samples[2].metric, "AC_ACTIVE_POWER_bound_0_upper");
        assert_eq!(samples[2].value, MetricValue::Numeric(10.0));
        assert!(samples.iter().all(|s| s.microgrid_id == 1 && s.component_id == 2));
    }

    #[test]
    fn test_unset_bound_sides_are_skipped() {
        let mut sample = simple_sample(Metric::DcCurrent, JAN_1_2024, 1.0);
        sample.bounds = vec![
            Bounds {
                lower: None,
                upper: Some(3.0),
            },
            Bounds {
                lower: Some(0.0),
                upper: None,
            },
        ];
        let batch = ComponentsDataBatch::new(response(
            1,
            vec![ComponentData {
                component_id: 2,
                metric_samples: vec![sample],
                states: vec![],
            }],
        ));

        assert_eq!(
            labels(&batch),
            vec!["DC_CURRENT", "DC_CURRENT_bound_0_upper", "DC_CURRENT_bound_1_lower"]
        );
        let zero_bound = batch.iter().nth(2).unwrap();
        assert_eq!(zero_bound.value, MetricValue::Numeric(0.0));
    }

    #[test]
    fn test_state_categories() {
        let state = ComponentState {
            sampled_at: Some(Timestamp {
                seconds: JAN_1_2024,
                nanos: 0,
            }),
            states: vec![
                ComponentStateCode::Ready as i32,
                ComponentStateCode::Charging as i32,
            ],
            warnings: vec![ComponentErrorCode::Overtemperature as i32],
            errors: vec![],
        };
        let batch = ComponentsDataBatch::new(response(
            1,
            vec![ComponentData {
                component_id: 2,
                metric_samples: vec![],
                states: vec![state],
            }],
        ));

        let samples: Vec<MetricSample> = batch.iter().collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].metric, "state");
        assert_eq!(
            samples[0].value,
            MetricValue::Categorical("COMPONENT_STATE_CODE_READY".to_string())
        );
        assert_eq!(samples[1].metric, "state");
        assert_eq!(
            samples[1].value,
            MetricValue::Categorical("COMPONENT_STATE_CODE_CHARGING".to_string())
        );
        assert_eq!(samples[2].metric, "warning");
        assert_eq!(
            samples[2].value,
            MetricValue::Categorical("COMPONENT_ERROR_CODE_OVERTEMPERATURE".to_string())
        );
        assert!(samples.iter().all(|s| s.metric != "error"));
    }

    #[test]
    fn test_unknown_state_code_keeps_number() {
        let state = ComponentState {
            sampled_at: None,
            states: vec![],
            warnings: vec![],
            errors: vec![999],
        };
        let batch = ComponentsDataBatch::new(response(
            1,
            vec![ComponentData {
                component_id: 2,
                metric_samples: vec![],
                states: vec![state],
            }],
        ));

        let samples: Vec<MetricSample> = batch.iter().collect();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].metric, "error");
        assert_eq!(samples[0].value, MetricValue::Categorical("999".to_string()));
    }

    #[test]
    fn test_traversal_order() {
        let mut bounded = simple_sample(Metric::DcPower, JAN_1_2024, 1.0);
        bounded.bounds = vec![Bounds {
            lower: Some(-1.0),
            upper: Some(1.0),
        }];
        let batch = ComponentsDataBatch::new(response(
            5,
            vec![
                ComponentData {
                    component_id: 20,
                    metric_samples: vec![
                        bounded,
                        simple_sample(Metric::DcVoltage, JAN_1_2024, 2.0),
                    ],
                    states: vec![ComponentState {
                        sampled_at: None,
                        states: vec![ComponentStateCode::Off as i32],
                        warnings: vec![],
                        errors: vec![ComponentErrorCode::FuseError as i32],
                    }],
                },
                ComponentData {
                    component_id: 10,
                    metric_samples: vec![simple_sample(Metric::AcFrequency, JAN_1_2024, 50.0)],
                    states: vec![],
                },
            ],
        ));

        let order: Vec<(u64, String)> = batch.iter().map(|s| (s.component_id, s.metric)).collect();
        assert_eq!(
            order,
            vec![
                (20, "DC_POWER".to_string()),
                (20, "DC_POWER_bound_0_lower".to_string()),
                (20, "DC_POWER_bound_0_upper".to_string()),
                (20, "DC_VOLTAGE".to_string()),
                (20, "state".to_string()),
                (20, "error".to_string()),
                (10, "AC_FREQUENCY".to_string()),
            ]
        );
    }

    #[test]
    fn test_unsupported_value_variant_is_absent() {
        let mut aggregated = simple_sample(Metric::DcPower, JAN_1_2024, 0.0);
        aggregated.value = Some(PbValue {
            metric_value_variant: Some(MetricValueVariant::AggregatedMetric(
                AggregatedMetricValue {
                    avg_value: 3.0,
                    ..Default::default()
                },
            )),
        });
        let mut missing = simple_sample(Metric::DcVoltage, JAN_1_2024, 0.0);
        missing.value = None;

        let batch = ComponentsDataBatch::new(response(
            1,
            vec![ComponentData {
                component_id: 2,
                metric_samples: vec![aggregated, missing],
                states: vec![],
            }],
        ));

        let samples: Vec<MetricSample> = batch.iter().collect();
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.value.is_absent()));
    }

    #[test]
    fn test_timestamps_carry_utc() {
        let batch = ComponentsDataBatch::new(response(
            1,
            vec![ComponentData {
                component_id: 2,
                metric_samples: vec![simple_sample(Metric::DcPower, JAN_1_2024, 1.0)],
                states: vec![],
            }],
        ));

        let sample = batch.iter().next().unwrap();
        assert_eq!(sample.timestamp, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(sample.timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_iteration_can_be_repeated() {
        let batch = ComponentsDataBatch::new(response(
            3,
            vec![ComponentData {
                component_id: 4,
                metric_samples: vec![simple_sample(Metric::DcPower, JAN_1_2024, 1.0)],
                states: vec![],
            }],
        ));
        assert_eq!(batch.iter().count(), 1);
        assert_eq!(batch.iter().count(), 1);
        assert_eq!(batch.microgrid_id(), 3);
    }
}
