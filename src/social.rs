use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::error::ConfigError;

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):\S+").unwrap());

static TAG_OPENER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[{%#]").unwrap());

/// One external profile or contact link. Inactive links are kept in the
/// config so they can be switched back on; only `active` controls whether
/// they are rendered.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub link_title: String,
    pub active: bool
}

impl SocialLink {
    pub fn new(name: &str, href: &str, link_title: String, active: bool) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
            link_title,
            active
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// URI scheme of `href`, e.g. `https` or `mailto`.
    pub fn scheme(&self) -> Option<&str> {
        SCHEME
            .captures(&self.href)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let entry = if self.name.is_empty() {
            "socials".to_string()
        } else {
            format!("socials.{}", self.name)
        };
        for (field, value) in [
            ("name", &self.name),
            ("href", &self.href),
            ("link_title", &self.link_title)
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    entry: entry.clone(),
                    field
                });
            }
        }
        if self.scheme().is_none() {
            return Err(ConfigError::MissingScheme {
                name: self.name.clone(),
                href: self.href.clone()
            });
        }
        Ok(())
    }
}

pub fn active_socials(socials: &[SocialLink]) -> impl Iterator<Item = &SocialLink> {
    socials.iter().filter(|s| s.is_active())
}

/// Expands `{{ site.* }}` references in a link title. Titles without template
/// tags come back unchanged, whitespace included.
pub fn interpolate_link_title(template: &str, site: &SiteConfig) -> Result<String, ConfigError> {
    if !TAG_OPENER.is_match(template) {
        return Ok(template.to_string());
    }
    let mut context = Context::new();
    context.insert("site", site);
    Ok(Tera::one_off(template, &context, false)?)
}

/// Inverse of [`interpolate_link_title`] for an already expanded title: every
/// `{{`, `{%` and `{#` is written as a string literal so it renders back as is.
pub fn escape_link_title(title: &str) -> String {
    TAG_OPENER
        .replace_all(title, |caps: &Captures| format!("{{{{ \"{}\" }}}}", &caps[0]))
        .into_owned()
}
