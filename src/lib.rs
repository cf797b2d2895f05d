//! Site metadata, locale preference, logo and social link configuration for
//! a personal blog, plus the fragments a site generator renders from them.

pub mod commands;
pub mod config;
pub mod defaults;
pub mod error;
pub mod locale;
pub mod pagination;
pub mod render;
pub mod social;

pub use config::{Config, LogoConfig, SiteConfig};
pub use error::ConfigError;
pub use locale::LocalePreference;
pub use social::SocialLink;
