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

//! # Kichban Workspace Module
//!
//! Headless state of a script-generation session: the history, which item is
//! selected, and whether displayed scripts are filtered.
//!
//! The workspace decides *when* the rewriter runs. With filtering enabled,
//! [`KbWorkspace::displayed_scripts`] returns a rewritten copy of the
//! selected scripts; with filtering disabled it returns the stored scripts
//! verbatim. The stored scripts are never rewritten in place.

use std::borrow::Cow;
use std::sync::Arc;

use crate::history::KbHistory;
use crate::rewrite::KbRewriter;
use crate::script::{KbScript, KbScriptBatch};

#[derive(Debug, Clone)]
pub struct KbWorkspace {
    history: KbHistory,
    selected: Option<String>,
    filter_enabled: bool,
    rewriter: Arc<KbRewriter>,
}

impl KbWorkspace {
    /// New workspace with filtering enabled and nothing selected.
    pub fn new(history: KbHistory, rewriter: Arc<KbRewriter>) -> Self {
        KbWorkspace {
            history,
            selected: None,
            filter_enabled: true,
            rewriter,
        }
    }

    pub fn history(&self) -> &KbHistory {
        &self.history
    }

    pub fn rewriter(&self) -> &KbRewriter {
        &self.rewriter
    }

    pub fn filter_enabled(&self) -> bool {
        self.filter_enabled
    }

    pub fn set_filter_enabled(&mut self, enabled: bool) {
        self.filter_enabled = enabled;
    }

    /// Flips the filter toggle and returns the new state.
    pub fn toggle_filter(&mut self) -> bool {
        self.filter_enabled = !self.filter_enabled;
        self.filter_enabled
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Stores a fresh generation and selects it.
    pub fn record_generation(
        &mut self,
        product_link: impl Into<String>,
        scripts: KbScriptBatch,
        timestamp: i64,
    ) -> String {
        let id = self.history.record(product_link, scripts, timestamp);
        self.selected = Some(id.clone());
        id
    }

    /// Selects a history item. Returns false when the id is unknown.
    pub fn select(&mut self, id: &str) -> bool {
        if self.history.get(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Deletes a history item; deleting the selected item clears the selection.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.history.remove(id).is_some();
        if removed && self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Flips the `saved` flag of a script in the selected item.
    ///
    /// Returns the new flag, or `None` when nothing is selected or the script
    /// is not part of the selection.
    pub fn toggle_saved(&mut self, script_id: &str) -> Option<bool> {
        let selected = self.selected.as_deref()?;
        let item = self.history.get_mut(selected)?;
        let script = item.scripts.iter_mut().find(|s| s.id == script_id)?;
        let saved = !script.is_saved();
        script.saved = Some(saved);
        Some(saved)
    }

    /// Scripts of the selected item as they should be shown.
    pub fn displayed_scripts(&self) -> Option<Cow<'_, [KbScript]>> {
        let item = self.history.get(self.selected.as_deref()?)?;
        if self.filter_enabled {
            Some(Cow::Owned(self.rewriter.filter_scripts(&item.scripts)))
        } else {
            Some(Cow::Borrowed(item.scripts.as_slice()))
        }
    }
}
