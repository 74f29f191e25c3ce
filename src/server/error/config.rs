use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be parsed.
    ///
    /// Check the documentation or `.env.example` file for the expected format of
    /// each configuration variable.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The value that failed to parse
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
