// Main entry point - Configuration, dependency injection and output
use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use microgrid_reporting::infrastructure::config::load_reporting_config;
use microgrid_reporting::presentation::cli::Cli;
use microgrid_reporting::presentation::output::write_samples;
use microgrid_reporting::{GrpcTransport, ReportingApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries the data
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Command line flags override the configuration
    let settings = load_reporting_config()?;
    let url = cli.url.clone().unwrap_or(settings.url);
    let key = cli.key.clone().or(settings.key);

    let transport = GrpcTransport::new(&url)?;
    let client = ReportingApiClient::new(Arc::new(transport), key.as_deref())?;

    let filter = cli.stream_filter();
    let metrics = &cli.metrics;
    let samples = match cli.cid.as_slice() {
        [component_id] => {
            client.stream_single_component(cli.mid, *component_id, metrics, &filter)
        }
        component_ids => {
            client.stream_multi(&[(cli.mid, component_ids.to_vec())], metrics, &filter)
        }
    };

    // Whatever was received before a stream error is still printed
    let mut out = std::io::BufWriter::new(std::io::stdout());
    let written = write_samples(samples, cli.format, &mut out).await;
    out.flush()?;
    written
}
