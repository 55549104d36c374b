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
use std::sync::Arc;

use serde_json::Value;

use crate::config::KbTermsConfig;
use crate::errors::{KbError, Result};
use crate::operator::KbOperator;
use crate::rewrite::KbRewriter;
use crate::script::KbScriptBatch;

/// Batch operator wrapping a shared [`KbRewriter`].
#[derive(Debug, Clone)]
pub struct KbRewriteOperator {
    rewriter: Arc<KbRewriter>,
}

impl KbRewriteOperator {
    pub fn new(rewriter: Arc<KbRewriter>) -> Self {
        Self { rewriter }
    }

    pub fn rewriter(&self) -> &KbRewriter {
        &self.rewriter
    }
}

impl KbOperator for KbRewriteOperator {
    fn name(&self) -> &'static str {
        "rewrite.terms"
    }

    fn apply(&self, batch: KbScriptBatch) -> Result<KbScriptBatch> {
        Ok(self.rewriter.filter_scripts(&batch))
    }
}

/// Builds `rewrite.terms` from `{"builtin": bool, "terms": {..}, "exclude": [..]}`.
pub fn rewrite_terms_factory(config: &Value) -> Result<Box<dyn KbOperator + Send + Sync>> {
    let obj = config
        .as_object()
        .ok_or_else(|| KbError::validation("rewrite.terms config must be object"))?;

    let builtin = match obj.get("builtin") {
        None => true,
        Some(value) => value
            .as_bool()
            .ok_or_else(|| KbError::validation("rewrite.terms 'builtin' must be boolean"))?,
    };

    let terms: BTreeMap<String, String> = match obj.get("terms") {
        None => BTreeMap::new(),
        Some(value) => {
            let entries = value
                .as_object()
                .ok_or_else(|| KbError::validation("rewrite.terms 'terms' must be object"))?;
            entries
                .iter()
                .map(|(term, replacement)| {
                    replacement
                        .as_str()
                        .map(|r| (term.clone(), r.to_string()))
                        .ok_or_else(|| {
                            KbError::validation("rewrite.terms replacements must be strings")
                        })
                })
                .collect::<Result<BTreeMap<_, _>>>()?
        }
    };

    let exclude = match obj.get("exclude") {
        None => Vec::new(),
        Some(value) => value
            .as_array()
            .ok_or_else(|| KbError::validation("rewrite.terms 'exclude' must be array"))?
            .iter()
            .map(|term| {
                term.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| KbError::validation("rewrite.terms exclusions must be strings"))
            })
            .collect::<Result<Vec<_>>>()?,
    };

    let terms_config = KbTermsConfig {
        builtin,
        terms,
        exclude,
    };
    let rewriter = KbRewriter::new(&terms_config.build_term_map()?)?;
    Ok(Box::new(KbRewriteOperator::new(Arc::new(rewriter))))
}
