/// Pass-level failures. Per-entity problems never surface here.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("shader program not found: {0}")]
    ShaderNotFound(String),
}

/// Errors from loading rendering configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
