// Copyright 2026 The lexidrill developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// The crate-wide result type.
pub type Fallible<T> = Result<T, ErrorReport>;

/// A human-readable error with an optional underlying cause.
///
/// The core never panics on bad data; operations that can genuinely fail
/// (store I/O, mostly) return one of these.
#[derive(Debug)]
pub struct ErrorReport {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: Box<dyn Error + Send + Sync>) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }
}

/// Shorthand for returning an `ErrorReport` with the given message.
pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport::new(message))
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(e: std::io::Error) -> Self {
        Self::with_source("I/O failure", Box::new(e))
    }
}

impl From<rusqlite::Error> for ErrorReport {
    fn from(e: rusqlite::Error) -> Self {
        Self::with_source("database failure", Box::new(e))
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(e: serde_json::Error) -> Self {
        Self::with_source("serialization failure", Box::new(e))
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(e: toml::de::Error) -> Self {
        Self::with_source("configuration parse failure", Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_error() {
        let report = ErrorReport::new("lesson catalog unavailable.");
        assert_eq!(report.to_string(), "error: lesson catalog unavailable.");
    }

    #[test]
    fn test_fail_returns_err() {
        let result: Fallible<()> = fail("nope");
        assert!(result.is_err());
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let report: ErrorReport = io.into();
        assert!(report.source().is_some());
    }
}
