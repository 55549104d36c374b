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

//! # Kichban Core Library
//!
//! Post-processing for AI-generated short-video marketing scripts. The core is
//! a deterministic term rewriter that softens words likely to trigger
//! moderation on short-video platforms, applied over every text field of a
//! batch of generated scripts.
//!
//! ## Module Overview
//!
//! - **script**: KbScript, KbScriptScene and generator response parsing
//! - **rewrite**: term table, matcher and the batch rewriter
//! - **operator** / **operators**: batch operator trait and `rewrite.terms`
//! - **history**: generation history, newest first
//! - **workspace**: selection, `saved` flags and the filter toggle
//! - **export**: plain-text layout for copy and file export
//! - **config**: JSON/YAML configuration of the toggle and term table
//! - **metrics**: substitution counters
//!
//! ## Feature Flags
//!
//! - `parallel`: rewrites batches with Rayon (enabled by `full`, the default)
//!
//! ## Quick Start
//!
//! ```rust
//! use kichban::{KbRewriter, KbScript};
//!
//! let rewriter = KbRewriter::builtin().unwrap();
//! let scripts = vec![KbScript::new("1", "Deal hot", "Mua ngay trên Shopee kẻo hết hàng!", "")];
//! let filtered = rewriter.filter_scripts(&scripts);
//! assert_eq!(filtered[0].hook, "trải nghiệm ngay trên sàn Cam kẻo hết hàng!");
//! ```
//!
//! ## Error Handling
//!
//! Rewriting never fails. Configuration loading, term-table validation and
//! generator parsing return `Result<T, KbError>`.

pub mod config;
pub mod errors;
pub mod export;
pub mod history;
pub mod metrics;
pub mod operator;
pub mod operators;
pub mod rewrite;
pub mod script;
pub mod workspace;

pub use config::{KbConfig, KbTermsConfig};
pub use errors::{KbError, Result};
pub use export::{format_batch_for_export, format_script_for_copy};
pub use history::{KbHistory, KbHistoryItem};
pub use metrics::KbRewriteStats;
pub use operator::{execute_operator, KbOperator};
pub use operators::rewrite::{rewrite_terms_factory, KbRewriteOperator};
pub use rewrite::{escape_term, sort_terms, KbRewriter, KbTermMap, KbTermMatcher};
pub use script::{parse_generator_response, KbScript, KbScriptBatch, KbScriptScene};
pub use workspace::KbWorkspace;
