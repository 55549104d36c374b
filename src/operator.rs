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

//! # Kichban Operator Module
//!
//! Batch operators over generated scripts. An operator receives a
//! [`KbScriptBatch`] and returns a new one; the term rewriter is exposed as the
//! `rewrite.terms` operator so it can sit between the generator and whatever
//! displays or exports the scripts.
//!
//! ```rust
//! use kichban::operator::KbOperator;
//! use kichban::script::KbScriptBatch;
//! use kichban::errors::Result;
//!
//! #[derive(Debug)]
//! struct DropUnsaved;
//!
//! impl KbOperator for DropUnsaved {
//!     fn name(&self) -> &'static str {
//!         "select.saved"
//!     }
//!
//!     fn apply(&self, batch: KbScriptBatch) -> Result<KbScriptBatch> {
//!         Ok(batch.into_iter().filter(|s| s.is_saved()).collect())
//!     }
//! }
//! ```

use crate::errors::{KbError, Result};
use crate::script::KbScriptBatch;

/// Contract every Kichban batch operator fulfills.
pub trait KbOperator: std::fmt::Debug {
    /// Unique, human-readable name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Applies the operator to an incoming batch of scripts.
    fn apply(&self, batch: KbScriptBatch) -> Result<KbScriptBatch>;
}

/// Executes an operator, tagging any error with the operator name.
pub fn execute_operator(operator: &dyn KbOperator, batch: KbScriptBatch) -> Result<KbScriptBatch> {
    operator
        .apply(batch)
        .map_err(|err| KbError::operator(operator.name(), err.to_string()))
}
