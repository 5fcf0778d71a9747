use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// the documentation or `.env.example` file for required configuration
    /// variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but does not parse as a Discord snowflake.
    #[error("Invalid value '{value}' for environment variable {name}: {source}")]
    InvalidEnvVar {
        /// The environment variable name
        name: &'static str,
        /// The value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
