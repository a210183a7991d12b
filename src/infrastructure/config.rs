use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;

pub const DEFAULT_URL: &str = "localhost:50051";

/// Connection settings for the Reporting service.
///
/// Sources, lowest precedence first: built-in defaults, `config/reporting.*`,
/// `REPORTING_*` environment variables. Command line flags override all of them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportingSettings {
    pub url: String,
    #[serde(default)]
    pub key: Option<String>,
}

pub fn load_reporting_config() -> anyhow::Result<ReportingSettings> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/reporting").required(false))
        .add_source(config::Environment::with_prefix("REPORTING"));

    settings_from(builder)
}

fn settings_from(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<ReportingSettings> {
    let settings = builder.set_default("url", DEFAULT_URL)?.build()?;

    Ok(settings.try_deserialize()?)
}
