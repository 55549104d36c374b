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

use std::sync::Arc;

use kichban::errors::{KbError, Result};
use kichban::operator::{execute_operator, KbOperator};
use kichban::operators::rewrite::{rewrite_terms_factory, KbRewriteOperator};
use kichban::rewrite::{KbRewriter, KbTermMap};
use kichban::script::{KbScript, KbScriptBatch};
use serde_json::json;

#[derive(Debug)]
struct PassThrough;

impl KbOperator for PassThrough {
    fn name(&self) -> &'static str {
        "pass"
    }

    fn apply(&self, batch: KbScriptBatch) -> Result<KbScriptBatch> {
        Ok(batch)
    }
}

#[derive(Debug)]
struct Failing;

impl KbOperator for Failing {
    fn name(&self) -> &'static str {
        "fail"
    }

    fn apply(&self, _batch: KbScriptBatch) -> Result<KbScriptBatch> {
        Err(KbError::validation("boom"))
    }
}

#[test]
fn execute_success_returns_same_batch() {
    let batch = vec![KbScript::new("id", "t", "h", "c")];
    let result = execute_operator(&PassThrough, batch.clone()).unwrap();
    assert_eq!(result, batch);
}

#[test]
fn execute_error_wraps_with_operator_name() {
    let err = execute_operator(&Failing, Vec::new()).unwrap_err();
    match err {
        KbError::Operator { operator, message } => {
            assert_eq!(operator, "fail");
            assert!(message.contains("boom"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rewrite_operator_runs_through_execute() {
    let map = KbTermMap::from_pairs([("hot", "nổi bật")]).unwrap();
    let op = KbRewriteOperator::new(Arc::new(KbRewriter::new(&map).unwrap()));
    assert_eq!(op.name(), "rewrite.terms");

    let out = execute_operator(&op, vec![KbScript::new("1", "Hot trend", "hotel", "")]).unwrap();
    assert_eq!(out[0].title, "nổi bật trend");
    assert_eq!(out[0].hook, "hotel");
}

#[test]
fn factory_excludes_builtin_terms() {
    let op = rewrite_terms_factory(&json!({"exclude": ["shopee"]})).unwrap();
    let out = op
        .apply(vec![KbScript::new("1", "Shopee", "Lazada", "")])
        .unwrap();
    assert_eq!(out[0].title, "Shopee");
    assert_eq!(out[0].hook, "sàn Xanh");
}

#[test]
fn factory_validates_field_types() {
    for config in [
        json!({"builtin": "yes"}),
        json!({"terms": ["a"]}),
        json!({"exclude": "a"}),
        json!({"exclude": [1]}),
        json!({"terms": {"  ": "blank"}}),
    ] {
        assert!(
            matches!(rewrite_terms_factory(&config), Err(KbError::Validation { .. })),
            "config accepted: {config}"
        );
    }
}
