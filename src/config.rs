use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConsoleCfg {
    #[serde(default)]
    pub api: ApiCfg,
    #[serde(default)]
    pub ui: UiCfg,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct ApiCfg {
    pub base_url: String,
}
impl Default for ApiCfg {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct UiCfg {
    pub recent_limit: u32,
}
impl Default for UiCfg {
    fn default() -> Self {
        Self { recent_limit: 10 }
    }
}

impl ConsoleCfg {
    pub fn load(path: Option<String>) -> anyhow::Result<Self> {
        Self::from_builder(build_config(path, default_env())?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.api.base_url.is_empty(), "api.base_url cannot be empty");
        anyhow::ensure!(self.ui.recent_limit > 0, "ui.recent_limit must be > 0");
        Ok(())
    }

    fn from_builder(cfg: config::Config) -> anyhow::Result<Self> {
        Ok(cfg.try_deserialize()?)
    }
}

fn default_env() -> config::Environment {
    config::Environment::with_prefix("TELEMETRY").separator("__")
}

fn build_config(path: Option<String>, env: config::Environment) -> anyhow::Result<config::Config> {
    use config::{Config, File};
    let mut builder = Config::builder().add_source(File::with_name("telemetry").required(false));
    if let Some(path) = path {
        builder = builder.add_source(File::with_name(&path));
    }
    Ok(builder.add_source(env).build()?)
}
