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

//! # Kichban History Module
//!
//! Generation history: one [`KbHistoryItem`] per generator call, newest first.
//! History is stored as plain JSON of the items; a stored document that cannot
//! be parsed is discarded and replaced by an empty history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::script::KbScriptBatch;

/// Scripts produced by one generator call for one product link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KbHistoryItem {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub product_link: String,
    pub scripts: KbScriptBatch,
}

impl KbHistoryItem {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KbHistory {
    items: Vec<KbHistoryItem>,
}

impl KbHistory {
    pub fn new() -> Self {
        KbHistory { items: Vec::new() }
    }

    /// Parses stored history, falling back to an empty history.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<Vec<KbHistoryItem>>(text) {
            Ok(items) => KbHistory { items },
            Err(err) => {
                log::warn!("history.load: stored history discarded - error={}", err);
                KbHistory::new()
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Prepends a generation made at `timestamp` (ms) and returns its id.
    pub fn record(
        &mut self,
        product_link: impl Into<String>,
        scripts: KbScriptBatch,
        timestamp: i64,
    ) -> String {
        let id = format!("gen-{timestamp}");
        let item = KbHistoryItem {
            id: id.clone(),
            timestamp,
            product_link: product_link.into(),
            scripts,
        };
        log::info!(
            "history.record: generation stored - id={}, scripts={}",
            item.id,
            item.scripts.len()
        );
        self.items.insert(0, item);
        id
    }

    /// Same as [`record`](Self::record) using the current time.
    pub fn record_now(&mut self, product_link: impl Into<String>, scripts: KbScriptBatch) -> String {
        self.record(product_link, scripts, Utc::now().timestamp_millis())
    }

    /// Removes an item, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<KbHistoryItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&KbHistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut KbHistoryItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Items, newest first.
    pub fn items(&self) -> &[KbHistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
