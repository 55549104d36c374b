//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Kichban.
//! The Kichban project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Kichban Error Module
//!
//! Error types shared by every Kichban module.
//!
//! The term rewriter itself is total: `filter_text` and `filter_scripts` never
//! return errors. Errors only arise at the edges, while loading configuration,
//! building a term table, compiling matchers or parsing generator output.
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors while reading configuration
//! - **Schema**: Generator or history payloads with an unexpected shape
//! - **Validation**: Invalid term tables or operator configuration
//! - **Operator**: Failures raised by a batch operator
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Kichban.
pub type Result<T> = std::result::Result<T, KbError>;

/// Canonical error enumeration for Kichban.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum KbError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors caused by payloads that do not match the script layout.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any failure raised by an operator implementation.
    #[error("operator '{operator}' failed: {message}")]
    Operator { operator: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for KbError {
    fn from(err: io::Error) -> Self {
        KbError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KbError {
    fn from(err: serde_json::Error) -> Self {
        KbError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for KbError {
    fn from(err: serde_yaml::Error) -> Self {
        KbError::Serde(err.to_string())
    }
}

impl From<regex::Error> for KbError {
    fn from(err: regex::Error) -> Self {
        KbError::validation(format!("term pattern rejected: {err}"))
    }
}

impl KbError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        KbError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        KbError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct operator errors.
    pub fn operator(name: impl Into<String>, message: impl Into<String>) -> Self {
        KbError::Operator {
            operator: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        KbError::Internal(message.into())
    }
}
