use crate::presentation::config::Environment;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT` wins when set; otherwise production logs as JSON.
    pub fn new(environment: Environment) -> Self {
        let json_format = std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or_else(|_| environment.is_prod());

        Self {
            environment,
            json_format,
        }
    }
}
