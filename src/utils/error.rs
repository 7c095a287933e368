use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Content error: {message}")]
    ContentError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

/// Failure while turning an asset request into a URL. Never leaves the resolver.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("token source failed: {message}")]
    TokenSource { message: String },

    #[error("malformed image url '{url}': {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Content,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorCategory::Io,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::ContentError { .. } => ErrorCategory::Content,
            SiteError::ServerError { .. } => ErrorCategory::Network,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::SerializationError(_) => ErrorSeverity::Medium,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::ContentError { .. } => ErrorSeverity::High,
            SiteError::IoError(_) | SiteError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read or write site files: {}", e),
            SiteError::SerializationError(e) => format!("Could not serialize content: {}", e),
            SiteError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SiteError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            SiteError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            SiteError::ContentError { message } => format!("Portfolio content is invalid: {}", message),
            SiteError::ServerError { message } => format!("HTTP server failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags and retry",
            ErrorCategory::Content => "Check the content file for empty names or skill levels above 100",
            ErrorCategory::Network => "Make sure the listen address is free and reachable",
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
