use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OrbError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("particles.count = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: particles.count = 0 is out of range"
        );
    }

    #[test]
    fn orb_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: OrbError = config_err.into();
        assert!(matches!(err, OrbError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn config_io_failures_surface_as_config_errors() {
        // File reads go through the loader, which reports them as ConfigError.
        let err: OrbError = ConfigError::FileNotFound(PathBuf::from("/nope/config.toml")).into();
        match &err {
            OrbError::Config(ConfigError::FileNotFound(path)) => {
                assert_eq!(path, &PathBuf::from("/nope/config.toml"));
            }
            OrbError::Config(_) | OrbError::Renderer(_) | OrbError::Other(_) => {
                panic!("unexpected variant: {err:?}")
            }
        }
    }

    #[test]
    fn orb_error_message_variants() {
        let err = OrbError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = OrbError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
