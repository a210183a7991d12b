// Output formatting for streamed samples
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use futures::{Stream, StreamExt};
use std::collections::BTreeMap;
use std::io::Write;

use crate::domain::sample::{MetricSample, MetricValue};
use crate::error::ReportingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One sample per line
    Iter,
    /// microgrid -> component -> timestamp -> metric -> value, as JSON
    Dict,
    /// Header row followed by one row per sample
    Csv,
}

pub type MetricValues = BTreeMap<String, MetricValue>;

pub type SampleTree = BTreeMap<u64, BTreeMap<u64, BTreeMap<DateTime<Utc>, MetricValues>>>;

/// Render `samples` to `out`. On a stream error everything received before it
/// is still written, then the error is returned.
pub async fn write_samples<S, W>(
    samples: S,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: Stream<Item = Result<MetricSample, ReportingError>> + Unpin,
    W: Write,
{
    match format {
        OutputFormat::Iter => write_iter(samples, out).await,
        OutputFormat::Dict => {
            let (tree, error) = samples_to_tree(samples).await;
            serde_json::to_writer_pretty(&mut *out, &tree)?;
            writeln!(out)?;
            match error {
                Some(error) => Err(error.into()),
                None => Ok(()),
            }
        }
        OutputFormat::Csv => write_csv(samples, out).await,
    }
}

async fn write_iter<S, W>(mut samples: S, out: &mut W) -> anyhow::Result<()>
where
    S: Stream<Item = Result<MetricSample, ReportingError>> + Unpin,
    W: Write,
{
    while let Some(sample) = samples.next().await {
        writeln!(out, "{:?}", sample?)?;
    }
    Ok(())
}

async fn write_csv<S, W>(mut samples: S, out: &mut W) -> anyhow::Result<()>
where
    S: Stream<Item = Result<MetricSample, ReportingError>> + Unpin,
    W: Write,
{
    writeln!(out, "{}", MetricSample::FIELDS.join(","))?;
    while let Some(sample) = samples.next().await {
        let sample = sample?;
        writeln!(
            out,
            "{},{},{},{},{}",
            sample.timestamp.to_rfc3339(),
            sample.microgrid_id,
            sample.component_id,
            sample.metric,
            sample.value
        )?;
    }
    Ok(())
}

/// Collect a stream into nested maps. Later samples overwrite earlier ones
/// with the same microgrid, component, timestamp and metric. Collection stops at
/// the first error, which is returned next to the samples gathered before it.
pub async fn samples_to_tree<S>(mut samples: S) -> (SampleTree, Option<ReportingError>)
where
    S: Stream<Item = Result<MetricSample, ReportingError>> + Unpin,
{
    let mut tree = SampleTree::new();
    while let Some(sample) = samples.next().await {
        let sample = match sample {
            Ok(sample) => sample,
            Err(error) => return (tree, Some(error)),
        };
        tree.entry(sample.microgrid_id)
            .or_default()
            .entry(sample.component_id)
            .or_default()
            .entry(sample.timestamp)
            .or_default()
            .insert(sample.metric, sample.value);
    }
    (tree, None)
}
