use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("Missing input file argument")]
    MissingInputArgument,

    #[error("Could not find file \"{}\".", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to parse JSON in \"{}\": {source}", .path.display())]
    JsonParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 只需提示，流程視為正常結束
    Low,
    High,
    Critical,
}

impl ReplaceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingInputArgument | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Usage
            }
            Self::InputNotFound { .. } | Self::JsonParseError { .. } => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InputNotFound { .. } => ErrorSeverity::Low,
            Self::MissingInputArgument
            | Self::InvalidConfigValueError { .. }
            | Self::JsonParseError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingInputArgument => "No input file was given".to_string(),
            Self::InputNotFound { .. } => self.to_string(),
            Self::JsonParseError { path, source } => format!(
                "\"{}\" is not valid JSON (line {}, column {}): {}",
                path.display(),
                source.line(),
                source.column(),
                source
            ),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingInputArgument => "Pass the path of a JSON file as the first argument",
            Self::InputNotFound { .. } => "Check the path and try again",
            Self::JsonParseError { .. } => "Fix the JSON syntax at the reported position",
            Self::IoError(_) => "Check permissions and free space in the target directory",
            Self::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReplaceError>;
