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

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Substitution counters collected while rewriting text or script batches.
#[derive(Clone, Debug, Serialize, Default, PartialEq, Eq)]
pub struct KbRewriteStats {
    pub scripts_total: usize,
    pub scripts_changed: usize,
    pub fields_changed: usize,
    /// Replacement count per canonical term.
    pub substitutions: BTreeMap<String, usize>,
}

impl KbRewriteStats {
    pub fn record(&mut self, term: &str, count: usize) {
        if count == 0 {
            return;
        }
        *self.substitutions.entry(term.to_string()).or_insert(0) += count;
    }

    pub fn total_substitutions(&self) -> usize {
        self.substitutions.values().sum()
    }

    /// Folds another set of counters into this one.
    pub fn merge(&mut self, other: &KbRewriteStats) {
        self.scripts_total += other.scripts_total;
        self.scripts_changed += other.scripts_changed;
        self.fields_changed += other.fields_changed;
        for (term, count) in &other.substitutions {
            self.record(term, *count);
        }
    }

    pub fn as_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
