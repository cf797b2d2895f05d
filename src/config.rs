use std::fs;
use std::num::{NonZeroU32, NonZeroUsize};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::locale::{LocalePreference, is_valid_locale};
use crate::social::{SocialLink, escape_link_title, interpolate_link_title};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(default)]
    pub locale: LocalePreference,
    pub site: SiteConfig,
    #[serde(default)]
    pub logo: LogoConfig,
    #[serde(default)]
    pub socials: Vec<SocialLink>
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub website: String,
    pub author: String,
    #[serde(default)]
    pub desc: String,
    pub title: String,
    pub og_image: String,
    #[serde(default)]
    pub light_and_dark_mode: bool,
    pub post_per_page: NonZeroUsize
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogoConfig {
    pub enable: bool,
    pub svg: bool,
    pub width: NonZeroU32,
    pub height: NonZeroU32
}

impl Default for LogoConfig {
    fn default() -> Self {
        crate::defaults::logo()
    }
}

impl Config {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Reading config {}", path.display());
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parses a config, expands link title templates against `[site]` and
    /// validates the result.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(raw)?;
        for social in &mut config.socials {
            social.link_title = interpolate_link_title(&social.link_title, &config.site)?;
        }
        config.validate()?;
        debug!("{:?}", &config);
        Ok(config)
    }

    /// Serializes with link titles escaped, so [`Config::from_toml_str`]
    /// reads back the same titles.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let mut raw = self.clone();
        for social in &mut raw.socials {
            social.link_title = escape_link_title(&social.link_title);
        }
        Ok(toml::to_string(&raw)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let site = &self.site;
        for (field, value) in [
            ("website", &site.website),
            ("author", &site.author),
            ("title", &site.title),
            ("og_image", &site.og_image)
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    entry: "site".to_string(),
                    field
                });
            }
        }

        if let Some(bad) = self.locale.iter().find(|l| !is_valid_locale(l)) {
            return Err(ConfigError::InvalidLocale(bad.clone()));
        }

        self.socials.iter().try_for_each(SocialLink::validate)
    }

    /// Social links with `active = true`, in display order.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        crate::social::active_socials(&self.socials)
    }
}
