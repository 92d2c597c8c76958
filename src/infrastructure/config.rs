use crate::domain::series::SeriesKind;
use anyhow::Context;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_THRESHOLD: f64 = 0.3;
pub const DEFAULT_PERIOD_MS: u64 = 30;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub reveal: RevealSettings,
    /// Statistics file replacing the compiled-in dataset
    #[serde(default)]
    pub statistics_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct RevealSettings {
    /// Fraction of the element that must be in the viewport
    pub threshold: f64,
    pub period_ms: u64,
}

impl RevealSettings {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms.max(1))
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatisticsConfig {
    pub outgoing: SeriesConfig,
    pub incoming: SeriesConfig,
    #[serde(default)]
    pub palette: HashMap<String, String>,
    #[serde(default)]
    pub highlights: Vec<HighlightConfig>,
}

impl StatisticsConfig {
    pub fn series(&self, kind: SeriesKind) -> &SeriesConfig {
        match kind {
            SeriesKind::Outgoing => &self.outgoing,
            SeriesKind::Incoming => &self.incoming,
        }
    }

    fn warn_on_total_mismatch(&self) {
        for kind in SeriesKind::ALL {
            if let Some((declared, counted)) = self.series(kind).total_mismatch() {
                tracing::warn!(
                    "Declared total {} for {} series differs from the displayed sum {}",
                    declared,
                    kind,
                    counted
                );
            }
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesConfig {
    pub total: Option<u64>,
    pub years: Vec<YearConfig>,
    #[serde(default)]
    pub countries: HashMap<String, Vec<String>>,
}

impl SeriesConfig {
    /// `(declared, counted)` when a declared total differs from the sum of
    /// the listed years. Allowed, since the total may cover hidden years.
    pub fn total_mismatch(&self) -> Option<(u64, u64)> {
        let declared = self.total?;
        let counted: u64 = self.years.iter().map(|y| y.count).sum();
        (declared != counted).then_some((declared, counted))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct YearConfig {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HighlightConfig {
    pub value: String,
    pub label: String,
    #[serde(default = "default_animated")]
    pub animated: bool,
}

fn default_animated() -> bool {
    true
}

fn app_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("reveal.threshold", DEFAULT_THRESHOLD)?
        .set_default("reveal.period_ms", DEFAULT_PERIOD_MS)
}

fn finish_app_config(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<AppConfig> {
    let app: AppConfig = builder.build()?.try_deserialize()?;

    if !(0.0..=1.0).contains(&app.reveal.threshold) {
        anyhow::bail!(
            "reveal.threshold must be between 0 and 1, got {}",
            app.reveal.threshold
        );
    }
    if app.reveal.period_ms == 0 {
        anyhow::bail!("reveal.period_ms must be positive");
    }

    Ok(app)
}

fn app_environment() -> Environment {
    Environment::with_prefix("EXCHANGE")
        .separator("__")
        .try_parsing(true)
}

/// Defaults, then `config/app.*` if present, then `EXCHANGE__*` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = app_defaults()?
        .add_source(File::with_name("config/app").required(false))
        .add_source(app_environment());

    finish_app_config(builder)
}

pub fn parse_app_config(toml: &str) -> anyhow::Result<AppConfig> {
    finish_app_config(app_defaults()?.add_source(File::from_str(toml, FileFormat::Toml)))
}

pub fn load_statistics_config(path: &str) -> anyhow::Result<StatisticsConfig> {
    let settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .with_context(|| format!("reading statistics from {path}"))?;

    let statistics: StatisticsConfig = settings.try_deserialize()?;
    statistics.warn_on_total_mismatch();
    Ok(statistics)
}

pub fn parse_statistics_config(toml: &str) -> anyhow::Result<StatisticsConfig> {
    let settings = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?;

    let statistics: StatisticsConfig = settings.try_deserialize()?;
    statistics.warn_on_total_mismatch();
    Ok(statistics)
}
