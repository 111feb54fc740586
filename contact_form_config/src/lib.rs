use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use contact_form_models::state::LiveValidation;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the config files at `paths`. Later files override earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub form: FormConfig,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub first_name_min_length: usize,
    pub live_validation: LiveValidation,
    pub clear_message_on_submit: bool,
}
