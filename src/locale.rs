use std::env;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Used when neither the config nor the environment names a locale.
pub const FALLBACK_LOCALE: &str = "en";

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

static LOCALE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(?:-[A-Za-z0-9]{2,8})*$").unwrap());

/// Ordered locale identifiers. An empty list defers to the environment.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalePreference(pub Vec<String>);

impl LocalePreference {
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self(locales.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Locales to format with, consulting `LC_ALL`, `LC_MESSAGES` and `LANG`
    /// when the list is empty.
    pub fn resolve(&self) -> Vec<String> {
        self.resolve_with(environment_locale())
    }

    pub fn resolve_with(&self, env_default: Option<String>) -> Vec<String> {
        if !self.is_empty() {
            return self.0.clone();
        }
        let locale = env_default.unwrap_or_else(|| FALLBACK_LOCALE.to_string());
        debug!("No locale configured, using {}", locale);
        vec![locale]
    }
}

pub fn is_valid_locale(id: &str) -> bool {
    LOCALE_ID.is_match(id)
}

/// First usable locale from the process environment, normalized.
pub fn environment_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find_map(|value| normalize_posix_locale(&value))
}

/// `en_US.UTF-8@euro` -> `en-US`. `C` and `POSIX` carry no language.
pub fn normalize_posix_locale(value: &str) -> Option<String> {
    let base = value.split(['.', '@']).next().unwrap_or_default().trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    let id = base.replace('_', "-");
    is_valid_locale(&id).then_some(id)
}
