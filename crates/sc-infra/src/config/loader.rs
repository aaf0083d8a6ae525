use anyhow::Result;
use config::{Config, Environment, File};
use sc_core::AppConfig;

/// Load configuration from defaults, an optional `skycodec.toml` next to the
/// working directory, and `SKYCODEC_*` environment variables (highest
/// precedence), e.g. `SKYCODEC_BIND_ADDR=0.0.0.0:8000`.
pub fn load_config() -> Result<AppConfig> {
    let config = Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name("skycodec").required(false))
        .add_source(Environment::with_prefix("SKYCODEC"))
        .build()?;

    Ok(config.try_deserialize()?)
}
