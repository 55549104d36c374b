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

//! # Kichban Script Module
//!
//! Data structures for generated short-video scripts. A [`KbScript`] is the
//! unit that flows from the script generator through the term rewriter to
//! display and export.
//!
//! ## Serde Layout
//!
//! Field names follow the generator's JSON (`postContent`, camelCase) so that
//! generator responses and stored history deserialize directly:
//!
//! ```json
//! {
//!   "id": "gen-1717000000000-0",
//!   "title": "Ba giây đầu tiên",
//!   "hook": "Bạn đã thử cách này chưa?",
//!   "scenes": [{"visual": "Cận cảnh sản phẩm", "voiceover": "Nhìn nè!"}],
//!   "cta": "Theo dõi để xem thêm",
//!   "postContent": "Một chiếc máy xay nhỏ gọn",
//!   "hashtags": ["#review"]
//! }
//! ```
//!
//! Scripts are treated as immutable values by the rewriter: every rewrite goes
//! through [`KbScript::map_text_fields`], which returns a fresh copy.

use serde::{Deserialize, Serialize};

use crate::errors::{KbError, Result};

/// One scene of a script: what is shown and what is said.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbScriptScene {
    pub visual: String,
    pub voiceover: String,
}

impl KbScriptScene {
    pub fn new(visual: impl Into<String>, voiceover: impl Into<String>) -> Self {
        KbScriptScene {
            visual: visual.into(),
            voiceover: voiceover.into(),
        }
    }
}

/// A generated short-video script.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KbScript {
    /// Stable identifier assigned once at creation.
    pub id: String,
    pub title: String,
    /// Opening line or visual idea for the first seconds of the video.
    pub hook: String,
    /// Ordered scenes.
    #[serde(default)]
    pub scenes: Vec<KbScriptScene>,
    /// Call to action.
    pub cta: String,
    /// Optional social post caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    /// Bookmark flag owned by the workspace. The rewriter never touches it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
}

impl KbScript {
    /// Constructs a script without scenes or optional fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        hook: impl Into<String>,
        cta: impl Into<String>,
    ) -> Self {
        KbScript {
            id: id.into(),
            title: title.into(),
            hook: hook.into(),
            cta: cta.into(),
            ..KbScript::default()
        }
    }

    /// Appends a scene.
    pub fn with_scene(mut self, scene: KbScriptScene) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Sets the social post caption.
    pub fn with_post_content(mut self, content: impl Into<String>) -> Self {
        self.post_content = Some(content.into());
        self
    }

    /// Sets the hashtag list.
    pub fn with_hashtags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns a copy with every natural-language field passed through `f`.
    ///
    /// Rewritten fields: `title`, `hook`, `cta`, `post_content` (when present)
    /// and `visual`/`voiceover` of every scene. `id`, `saved` and `hashtags`
    /// are copied unchanged.
    pub fn map_text_fields<F>(&self, mut f: F) -> KbScript
    where
        F: FnMut(&str) -> String,
    {
        KbScript {
            id: self.id.clone(),
            title: f(&self.title),
            hook: f(&self.hook),
            scenes: self
                .scenes
                .iter()
                .map(|scene| KbScriptScene {
                    visual: f(&scene.visual),
                    voiceover: f(&scene.voiceover),
                })
                .collect(),
            cta: f(&self.cta),
            post_content: self.post_content.as_deref().map(&mut f),
            hashtags: self.hashtags.clone(),
            saved: self.saved,
        }
    }

    /// Number of natural-language fields visited by [`map_text_fields`](Self::map_text_fields).
    pub fn text_field_count(&self) -> usize {
        3 + self.scenes.len() * 2 + usize::from(self.post_content.is_some())
    }

    pub fn is_saved(&self) -> bool {
        self.saved.unwrap_or(false)
    }
}

/// Convenience alias for working on batches of scripts.
pub type KbScriptBatch = Vec<KbScript>;

/// Script as returned by the generator, where the id may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedScript {
    #[serde(default)]
    id: Option<String>,
    title: String,
    hook: String,
    #[serde(default)]
    scenes: Vec<KbScriptScene>,
    cta: String,
    #[serde(default)]
    post_content: Option<String>,
    #[serde(default)]
    hashtags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct GeneratedResponse {
    scripts: Vec<GeneratedScript>,
}

/// Parses the generator's `{"scripts": [...]}` response into a batch.
///
/// Scripts without an id receive `"{id_prefix}-{index}"`.
pub fn parse_generator_response(text: &str, id_prefix: &str) -> Result<KbScriptBatch> {
    let response: GeneratedResponse = serde_json::from_str(text.trim()).map_err(|err| {
        KbError::schema(format!("generator returned malformed script payload: {err}"))
    })?;

    let batch = response
        .scripts
        .into_iter()
        .enumerate()
        .map(|(index, generated)| KbScript {
            id: generated
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| format!("{id_prefix}-{index}")),
            title: generated.title,
            hook: generated.hook,
            scenes: generated.scenes,
            cta: generated.cta,
            post_content: generated.post_content,
            hashtags: generated.hashtags,
            saved: None,
        })
        .collect::<KbScriptBatch>();

    log::debug!(
        "script.parse: generator response parsed - scripts={}, id_prefix={}",
        batch.len(),
        id_prefix
    );
    Ok(batch)
}
