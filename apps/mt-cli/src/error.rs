use mt_units::UnitsError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Units error: {0}")]
    Units(#[from] UnitsError),

    #[error("Unknown unit '{name}' for {dimension}")]
    UnknownUnit {
        name: String,
        dimension: &'static str,
    },

    #[error("Batch contains no conversions")]
    EmptyBatch,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
