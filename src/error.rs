use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("{} already exists, pass --force to overwrite", .0.display())]
    AlreadyExists(PathBuf),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to serialize config as json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("{entry}: `{field}` must not be empty")]
    EmptyField { entry: String, field: &'static str },

    #[error("social link `{name}`: href `{href}` has no URI scheme")]
    MissingScheme { name: String, href: String },

    #[error("invalid locale identifier `{0}`")]
    InvalidLocale(String)
}
