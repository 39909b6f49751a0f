#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Credential derivation failed: {0}")]
    Credential(String),
}
