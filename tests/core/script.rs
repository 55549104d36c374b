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

use kichban::errors::KbError;
use kichban::script::{parse_generator_response, KbScript, KbScriptScene};
use serde_json::json;

#[test]
fn script_serializes_with_camel_case_and_skips_absent_options() {
    let script = KbScript::new("s-1", "t", "h", "c")
        .with_scene(KbScriptScene::new("v", "o"))
        .with_post_content("caption");

    let value = serde_json::to_value(&script).unwrap();
    assert_eq!(value["postContent"], json!("caption"));
    assert!(value.get("hashtags").is_none());
    assert!(value.get("saved").is_none());
    assert_eq!(value["scenes"][0], json!({"visual": "v", "voiceover": "o"}));
}

#[test]
fn script_round_trips_saved_flag() {
    let value = json!({
        "id": "x",
        "title": "t",
        "hook": "h",
        "scenes": [],
        "cta": "c",
        "saved": true
    });
    let script: KbScript = serde_json::from_value(value).unwrap();
    assert!(script.is_saved());
    assert_eq!(script.post_content, None);
}

#[test]
fn map_text_fields_visits_post_content_and_every_scene() {
    let script = KbScript::new("id", "a", "b", "c")
        .with_scene(KbScriptScene::new("d", "e"))
        .with_scene(KbScriptScene::new("f", "g"))
        .with_post_content("h");

    let mut seen = Vec::new();
    let _ = script.map_text_fields(|text| {
        seen.push(text.to_string());
        text.to_string()
    });

    assert_eq!(seen.len(), script.text_field_count());
    for field in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        assert!(seen.iter().any(|s| s == field), "field {field} not visited");
    }
}

#[test]
fn generator_response_with_post_content_and_hashtags() {
    let text = r##"
        {"scripts": [{
            "title": "Góc bếp xinh",
            "hook": "Bạn có tin không?",
            "scenes": [{"visual": "Cận cảnh", "voiceover": "Nhìn nè"}],
            "cta": "Lưu lại nhé",
            "postContent": "Góc bếp nhỏ",
            "hashtags": ["#bep", "#decor"]
        }]}
    "##;
    let batch = parse_generator_response(text, "gen-7").unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].id, "gen-7-0");
    assert_eq!(batch[0].post_content.as_deref(), Some("Góc bếp nhỏ"));
    assert_eq!(batch[0].hashtags.as_ref().map(Vec::len), Some(2));
    assert_eq!(batch[0].saved, None);
}

#[test]
fn generator_response_without_scripts_is_schema_error() {
    for text in ["not json", "{}", r#"{"scripts": [{"title": 1}]}"#] {
        match parse_generator_response(text, "gen") {
            Err(KbError::Schema { message }) => assert!(message.contains("malformed")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
