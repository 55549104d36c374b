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

use regex::{Regex, RegexBuilder};

use crate::errors::{KbError, Result};

/// Escapes every regex metacharacter in `term` so it matches literally.
pub fn escape_term(term: &str) -> String {
    regex::escape(term)
}

/// Case-insensitive, word-boundary matcher for a single term.
///
/// A candidate match is accepted only when the characters immediately before
/// and after it are not alphanumeric. The boundary check is done on the text
/// itself rather than with `\b`, because terms may begin or end with
/// punctuation (`18+`, `đảm bảo 100%`).
#[derive(Debug, Clone)]
pub struct KbTermMatcher {
    term: String,
    replacement: String,
    pattern: Regex,
}

impl KbTermMatcher {
    pub fn new(term: &str, replacement: &str) -> Result<Self> {
        if term.is_empty() {
            return Err(KbError::validation("cannot build a matcher for an empty term"));
        }
        let pattern = RegexBuilder::new(&escape_term(term))
            .case_insensitive(true)
            .build()?;
        Ok(KbTermMatcher {
            term: term.to_string(),
            replacement: replacement.to_string(),
            pattern,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces every accepted, non-overlapping occurrence of the term.
    ///
    /// Returns the rewritten text and the number of replacements. The input is
    /// borrowed back unchanged when nothing matched.
    pub fn replace_all<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut out: Option<String> = None;
        let mut last = 0;
        let mut pos = 0;
        let mut count = 0;

        while pos <= text.len() {
            let Some(found) = self.pattern.find_at(text, pos) else {
                break;
            };
            let (start, end) = (found.start(), found.end());
            if start == end {
                break;
            }
            if is_word_boundary(text, start, end) {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                buf.push_str(&text[last..start]);
                buf.push_str(&self.replacement);
                last = end;
                pos = end;
                count += 1;
            } else {
                // retry one character after the rejected candidate's start
                pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&text[last..]);
                (Cow::Owned(buf), count)
            }
            None => (Cow::Borrowed(text), 0),
        }
    }

    /// Whether the term occurs at least once on word boundaries.
    pub fn is_match(&self, text: &str) -> bool {
        self.replace_all(text).1 > 0
    }
}

/// True when `text[start..end]` is not glued to an alphanumeric neighbour.
fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
