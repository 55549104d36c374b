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

//! # Kichban Configuration Module
//!
//! Configuration for the filter toggle and the composition of the term table.
//! Every field has a default, so an empty document yields the built-in table
//! with filtering enabled.
//!
//! ```yaml
//! filter_enabled: true
//! terms:
//!   builtin: true
//!   terms:
//!     "chốt đơn": "hoàn tất"
//!   exclude:
//!     - "email"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::history::KbHistory;
use crate::rewrite::{KbRewriter, KbTermMap};
use crate::workspace::KbWorkspace;

fn default_true() -> bool {
    true
}

/// How the term table is assembled: built-in table, then overrides, then
/// exclusions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbTermsConfig {
    /// Start from the curated built-in table.
    #[serde(default = "default_true")]
    pub builtin: bool,
    /// Extra terms; these override built-in replacements.
    #[serde(default)]
    pub terms: BTreeMap<String, String>,
    /// Terms removed after overrides are applied.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for KbTermsConfig {
    fn default() -> Self {
        KbTermsConfig {
            builtin: true,
            terms: BTreeMap::new(),
            exclude: Vec::new(),
        }
    }
}

impl KbTermsConfig {
    pub fn build_term_map(&self) -> Result<KbTermMap> {
        let mut map = if self.builtin {
            KbTermMap::builtin()
        } else {
            KbTermMap::new()
        };
        map.extend(&self.terms)?;
        for term in &self.exclude {
            if map.remove(term).is_none() {
                log::warn!("config.terms.exclude: term not present in table - term={}", term);
            }
        }
        Ok(map)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbConfig {
    /// Whether displayed scripts go through the rewriter.
    #[serde(default = "default_true")]
    pub filter_enabled: bool,
    #[serde(default)]
    pub terms: KbTermsConfig,
}

impl Default for KbConfig {
    fn default() -> Self {
        KbConfig {
            filter_enabled: true,
            terms: KbTermsConfig::default(),
        }
    }
}

impl KbConfig {
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Loads a file; `.yaml`/`.yml` are parsed as YAML, anything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);
        let config = if is_yaml {
            Self::from_yaml_str(&text)?
        } else {
            Self::from_json_str(&text)?
        };
        log::info!(
            "config.load: configuration loaded - path={}, filter_enabled={}",
            path.display(),
            config.filter_enabled
        );
        Ok(config)
    }

    pub fn build_term_map(&self) -> Result<KbTermMap> {
        self.terms.build_term_map()
    }

    pub fn build_rewriter(&self) -> Result<KbRewriter> {
        KbRewriter::new(&self.build_term_map()?)
    }

    /// Workspace over `history` using this configuration's toggle and table.
    pub fn build_workspace(&self, history: KbHistory) -> Result<KbWorkspace> {
        let rewriter = Arc::new(self.build_rewriter()?);
        let mut workspace = KbWorkspace::new(history, rewriter);
        workspace.set_filter_enabled(self.filter_enabled);
        Ok(workspace)
    }
}
