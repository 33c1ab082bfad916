//! Error categories shared by the tools.
//!
//! - Recoverable: logged, the batch keeps going
//! - Fatal: propagated, the batch stops

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Recoverable,
    Fatal,
}

impl ErrorCategory {
    pub fn is_fatal(self) -> bool {
        self == ErrorCategory::Fatal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Recoverable => write!(f, "RECOVERABLE"),
            ErrorCategory::Fatal => write!(f, "FATAL"),
        }
    }
}
