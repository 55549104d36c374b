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

use std::borrow::Cow;
use std::cmp::Reverse;

use crate::errors::Result;
use crate::metrics::KbRewriteStats;
use crate::rewrite::matcher::KbTermMatcher;
use crate::rewrite::table::KbTermMap;
use crate::script::{KbScript, KbScriptBatch};

/// Orders terms by descending character count, ties by ascending key.
///
/// Longer phrases run first so that a phrase containing a shorter term is
/// rewritten as a whole before the shorter term gets a chance to split it.
pub fn sort_terms(map: &KbTermMap) -> Vec<(&str, &str)> {
    let mut terms = map.iter().collect::<Vec<_>>();
    terms.sort_by(|a, b| {
        Reverse(a.0.chars().count())
            .cmp(&Reverse(b.0.chars().count()))
            .then_with(|| a.0.cmp(b.0))
    });
    terms
}

/// Rewrites risky terms in text and script batches.
///
/// Matchers are compiled once, in application order, when the rewriter is
/// built. The rewriter holds no mutable state and can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct KbRewriter {
    matchers: Vec<KbTermMatcher>,
}

impl KbRewriter {
    pub fn new(map: &KbTermMap) -> Result<Self> {
        let matchers = sort_terms(map)
            .into_iter()
            .map(|(term, replacement)| KbTermMatcher::new(term, replacement))
            .collect::<Result<Vec<_>>>()?;
        log::debug!(
            "rewrite.compile: term matchers compiled - terms={}",
            matchers.len()
        );
        Ok(KbRewriter { matchers })
    }

    /// Rewriter over the curated built-in table.
    pub fn builtin() -> Result<Self> {
        Self::new(&KbTermMap::builtin())
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Terms in the order they are applied.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(KbTermMatcher::term)
    }

    /// Applies every matcher, in order, to the running text.
    ///
    /// Each pass sees the output of the previous passes, so replacement text
    /// can itself be rewritten by a later, shorter term.
    fn rewrite<'t, F>(&self, text: &'t str, mut on_hit: F) -> Cow<'t, str>
    where
        F: FnMut(&str, usize),
    {
        let mut current = Cow::Borrowed(text);
        if text.is_empty() {
            return current;
        }
        for matcher in &self.matchers {
            let (replaced, hits) = matcher.replace_all(&current);
            if hits > 0 {
                let next = replaced.into_owned();
                on_hit(matcher.term(), hits);
                current = Cow::Owned(next);
            }
        }
        current
    }

    /// Rewrites a single string. Empty strings and strings without risky
    /// terms come back unchanged.
    pub fn filter_text(&self, text: &str) -> String {
        self.rewrite(text, |_, _| {}).into_owned()
    }

    pub fn filter_text_with_stats(&self, text: &str) -> (String, KbRewriteStats) {
        let mut stats = KbRewriteStats::default();
        let out = self
            .rewrite(text, |term, hits| stats.record(term, hits))
            .into_owned();
        if out != text {
            stats.fields_changed = 1;
        }
        (out, stats)
    }

    /// Returns a rewritten copy of one script.
    pub fn filter_script(&self, script: &KbScript) -> KbScript {
        script.map_text_fields(|text| self.filter_text(text))
    }

    /// Returns a rewritten copy of the batch, same length and order.
    ///
    /// Only natural-language fields change; ids, `saved` flags and hashtags
    /// are copied as they are.
    pub fn filter_scripts(&self, scripts: &[KbScript]) -> KbScriptBatch {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            scripts
                .par_iter()
                .map(|script| self.filter_script(script))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            scripts
                .iter()
                .map(|script| self.filter_script(script))
                .collect()
        }
    }

    /// Same as [`filter_scripts`](Self::filter_scripts), also counting what
    /// was replaced.
    pub fn filter_scripts_with_stats(&self, scripts: &[KbScript]) -> (KbScriptBatch, KbRewriteStats) {
        let mut stats = KbRewriteStats {
            scripts_total: scripts.len(),
            ..KbRewriteStats::default()
        };

        let mut out = Vec::with_capacity(scripts.len());
        for script in scripts {
            let mut fields_changed = 0;
            let rewritten = script.map_text_fields(|text| {
                let rewritten = self.rewrite(text, |term, hits| stats.record(term, hits));
                if rewritten.as_ref() != text {
                    fields_changed += 1;
                }
                rewritten.into_owned()
            });
            if fields_changed > 0 {
                stats.scripts_changed += 1;
                stats.fields_changed += fields_changed;
            }
            out.push(rewritten);
        }

        log::debug!(
            "rewrite.batch: scripts rewritten - scripts={}, changed={}, substitutions={}",
            stats.scripts_total,
            stats.scripts_changed,
            stats.total_substitutions()
        );
        (out, stats)
    }
}
