//! Bodies of the `sitecfg` subcommands. Output is returned rather than
//! printed so the binary decides where it goes.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use log::{debug, info};

use crate::config::Config;
use crate::defaults;
use crate::error::ConfigError;
use crate::render::Renderer;

pub const DEFAULT_CONFIG_PATH: &str = "site.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Toml,
    Json
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fragment {
    Socials,
    Head
}

/// An explicit path must load. Without one, `site.toml` in the working
/// directory is used if present, otherwise the built-in config.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_PATH);
            if fallback.exists() {
                Config::load(fallback)
            } else {
                info!("{} not found, using built-in config", fallback.display());
                Ok(defaults::CONFIG.clone())
            }
        }
    }
}

pub fn show(path: Option<&Path>, format: Format) -> Result<String, ConfigError> {
    let config = load_or_default(path)?;
    match format {
        Format::Toml => config.to_toml_string(),
        Format::Json => config.to_json_string()
    }
}

pub fn check(path: &Path) -> Result<Config, ConfigError> {
    let config = Config::load(path)?;
    for social in &config.socials {
        if social.is_active() {
            debug!("{} -> {}", social.name, social.href);
        } else {
            debug!("{} is inactive, not rendered", social.name);
        }
    }
    if config.locale.is_empty() {
        info!("No locale set, the environment default will be used");
    }
    info!(
        "{} is valid: {} of {} social links active",
        path.display(),
        config.active_socials().count(),
        config.socials.len()
    );
    Ok(config)
}

/// Writes the built-in config. An existing file is only replaced with `force`.
pub fn init(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let toml = defaults::CONFIG.to_toml_string()?;
    fs::write(path, toml).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

pub fn render(path: Option<&Path>, fragment: Fragment) -> Result<String, ConfigError> {
    let config = load_or_default(path)?;
    let renderer = Renderer::new()?;
    match fragment {
        Fragment::Socials => renderer.socials(&config),
        Fragment::Head => renderer.head(&config)
    }
}
