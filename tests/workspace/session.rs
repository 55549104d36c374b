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
use std::fs;
use std::sync::Arc;

use kichban::config::KbConfig;
use kichban::errors::KbError;
use kichban::history::KbHistory;
use kichban::rewrite::KbRewriter;
use kichban::script::KbScript;
use kichban::workspace::KbWorkspace;

fn builtin_workspace() -> KbWorkspace {
    KbWorkspace::new(KbHistory::new(), Arc::new(KbRewriter::builtin().unwrap()))
}

#[test]
fn displayed_scripts_follow_the_filter_toggle() {
    let mut ws = builtin_workspace();
    let id = ws.record_generation(
        "https://shopee.vn/product/1",
        vec![KbScript::new("s1", "Deal", "Mua ngay", "Inbox")],
        1_700_000_000_000,
    );
    assert_eq!(ws.selected_id(), Some(id.as_str()));
    assert!(ws.filter_enabled());

    let shown = ws.displayed_scripts().unwrap();
    assert!(matches!(shown, Cow::Owned(_)));
    assert_eq!(shown[0].title, "cơ hội tốt");
    assert_eq!(shown[0].hook, "trải nghiệm ngay");
    assert_eq!(shown[0].cta, "nhắn tin cho mình");

    assert!(!ws.toggle_filter());
    let shown = ws.displayed_scripts().unwrap();
    assert!(matches!(shown, Cow::Borrowed(_)));
    assert_eq!(shown[0].title, "Deal");

    // the stored generation is never rewritten
    assert_eq!(ws.history().get(&id).unwrap().scripts[0].hook, "Mua ngay");
}

#[test]
fn deleting_the_selected_item_clears_selection() {
    let mut ws = builtin_workspace();
    let first = ws.record_generation("https://a", vec![], 1);
    let second = ws.record_generation("https://b", vec![], 2);

    assert!(ws.select(&first));
    assert!(!ws.select("gen-404"));
    assert!(ws.delete(&second));
    assert_eq!(ws.selected_id(), Some(first.as_str()));

    assert!(ws.delete(&first));
    assert_eq!(ws.selected_id(), None);
    assert!(ws.displayed_scripts().is_none());
    assert!(!ws.delete(&first));
}

#[test]
fn saved_flag_survives_filtering() {
    let mut ws = builtin_workspace();
    ws.record_generation("https://a", vec![KbScript::new("s1", "hot", "h", "c")], 1);
    assert_eq!(ws.toggle_saved("s1"), Some(true));

    let shown = ws.displayed_scripts().unwrap();
    assert_eq!(shown[0].saved, Some(true));
    assert_eq!(shown[0].title, "nổi bật");
}

#[test]
fn history_survives_a_json_round_trip() {
    let mut history = KbHistory::new();
    history.record("https://a", vec![KbScript::new("s1", "t", "h", "c")], 10);
    let restored = KbHistory::from_json(&history.to_json().unwrap());
    assert_eq!(restored, history);
    assert_eq!(restored.items()[0].id, "gen-10");
}

#[test]
fn workspace_from_yaml_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kichban.yaml");
    fs::write(
        &path,
        "filter_enabled: true\nterms:\n  builtin: false\n  terms:\n    chốt đơn: hoàn tất\n",
    )
    .unwrap();

    let config = KbConfig::from_path(&path).unwrap();
    let mut ws = config.build_workspace(KbHistory::new()).unwrap();
    assert_eq!(ws.rewriter().len(), 1);

    ws.record_generation("https://a", vec![KbScript::new("s1", "Chốt đơn", "Shopee", "")], 1);
    let shown = ws.displayed_scripts().unwrap();
    assert_eq!(shown[0].title, "hoàn tất");
    assert_eq!(shown[0].hook, "Shopee");
}

#[test]
fn json_config_file_can_disable_filtering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kichban.json");
    fs::write(&path, r#"{"filter_enabled": false}"#).unwrap();

    let ws = KbConfig::from_path(&path)
        .unwrap()
        .build_workspace(KbHistory::new())
        .unwrap();
    assert!(!ws.filter_enabled());
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = KbConfig::from_path(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, KbError::Io(_)));
}
