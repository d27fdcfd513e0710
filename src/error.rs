use thiserror::Error;

#[derive(Error, Debug)]
pub enum StagehandError {
    #[error("failed to parse name mapping from [{0}]")]
    MalformedMapping(String),

    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("failed to get deployment settings from the parameter store")]
    SettingsNotFound,

    #[error("failed to find environment [{0}] in deployment settings")]
    EnvironmentNotFound(String),

    #[error("failed to find variables in environment settings - {}", .0.join(","))]
    VariablesNotFound(Vec<String>),

    #[error("failed to fetch secrets - invalid parameters: {}", .0.join(","))]
    SecretFetchInvalidParameters(Vec<String>),

    #[error("fetched secret [{0}] matches no requested mapping")]
    MappingLookup(String),

    #[error("registry token parameter not found: {0}")]
    TokenNotFound(String),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("parameter store error: {0}")]
    Store(String),

    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StagehandError>;
