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

//! # Rewrite Module
//!
//! Risky-term rewriting for generated scripts.
//!
//! The rewriter replaces words and phrases that tend to trigger moderation on
//! short-video platforms with safer synonyms. It is split into three stages
//! that can be tested independently:
//!
//! - **table**: [`KbTermMap`], the mapping from canonical terms to replacements,
//!   including the curated built-in table
//! - **matcher**: [`escape_term`] and [`KbTermMatcher`], a case-insensitive,
//!   word-boundary matcher for a single term
//! - **rewriter**: [`sort_terms`] and [`KbRewriter`], which apply every matcher
//!   longest-first over the running text and walk script batches
//!
//! ## Matching Rules
//!
//! - Terms match regardless of case; replacements keep their own casing
//! - A match must not be preceded or followed by an alphanumeric character
//! - Longer terms run before shorter ones, so `giá rẻ` wins over `rẻ`
//! - Each term scans the output of the previous terms, so a replacement that
//!   contains another term is rewritten again later in the same call

pub mod matcher;
pub mod rewriter;
pub mod table;

pub use matcher::{escape_term, KbTermMatcher};
pub use rewriter::{sort_terms, KbRewriter};
pub use table::KbTermMap;
