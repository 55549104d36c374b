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

//! # Kichban Export Module
//!
//! Plain-text layout used for clipboard copy and text-file export. Labels are
//! in Vietnamese, the language the scripts are generated in.

use std::fmt::Write;

use crate::script::KbScript;

const BATCH_SEPARATOR: &str = "\n\n---\n\n";

/// Formats one script for the clipboard.
///
/// Post content and hashtags are appended only when present.
pub fn format_script_for_copy(script: &KbScript) -> String {
    let mut text = String::new();
    // writing into a String cannot fail
    let _ = write!(text, "**{}**\n\n", script.title);
    let _ = write!(text, "**Mở đầu (Hook):**\n{}\n\n", script.hook);
    text.push_str("**Các cảnh:**\n");
    for (i, scene) in script.scenes.iter().enumerate() {
        let _ = writeln!(text, "Cảnh {}:", i + 1);
        let _ = writeln!(text, "- Hình ảnh: {}", scene.visual);
        let _ = write!(text, "- Lời thoại: {}\n\n", scene.voiceover);
    }
    let _ = write!(text, "**Kêu gọi hành động (CTA):**\n{}", script.cta);

    if let Some(content) = script.post_content.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(text, "\n\n**Nội dung bài đăng:**\n{content}");
    }
    if let Some(tags) = script.hashtags.as_ref().filter(|t| !t.is_empty()) {
        let line = tags
            .iter()
            .map(|tag| {
                if tag.starts_with('#') {
                    tag.clone()
                } else {
                    format!("#{tag}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(text, "\n\n**Hashtags:**\n{line}");
    }
    text
}

/// Formats a batch for a text-file export, scripts separated by `---`.
pub fn format_batch_for_export(scripts: &[KbScript]) -> String {
    scripts
        .iter()
        .map(format_script_for_copy)
        .collect::<Vec<_>>()
        .join(BATCH_SEPARATOR)
}
