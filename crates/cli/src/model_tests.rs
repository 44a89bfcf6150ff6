#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

fn minimal(kind: FileKind) -> FileModel {
    FileModel {
        path: "src/a.ts".to_string(),
        kind,
        line_count: 10,
        declared_props: Vec::new(),
        jsx_max_depth: 0,
        import_entries: Vec::new(),
        uses_mutable_binding: false,
        uses_loose_equality: false,
        has_explicit_return_types: true,
        uses_any_type: false,
        is_test_file: false,
    }
}

#[test]
fn well_formed_model_validates() {
    assert!(minimal(FileKind::Utility).validate().is_ok());
}

#[test]
fn component_with_jsx_depth_validates() {
    let mut model = minimal(FileKind::Component);
    model.jsx_max_depth = 4;
    assert!(model.validate().is_ok());
}

#[test]
fn empty_path_is_malformed() {
    let mut model = minimal(FileKind::Utility);
    model.path = String::new();
    assert_eq!(model.validate().unwrap_err(), "path is empty");
}

#[test]
fn negative_line_count_is_malformed() {
    let mut model = minimal(FileKind::Utility);
    model.line_count = -5;
    assert!(model.validate().unwrap_err().contains("line_count"));
}

#[parameterized(
    hook = { FileKind::Hook },
    utility = { FileKind::Utility },
    type_file = { FileKind::Type },
    test = { FileKind::Test },
)]
fn jsx_depth_on_non_component_is_malformed(kind: FileKind) {
    let mut model = minimal(kind);
    model.jsx_max_depth = 3;
    assert!(model.validate().unwrap_err().contains("jsx_max_depth"));
}

#[test]
fn import_groups_rank_in_variant_order() {
    let ranked = [
        ImportGroup::Builtin,
        ImportGroup::External,
        ImportGroup::Internal,
        ImportGroup::Parent,
        ImportGroup::Sibling,
        ImportGroup::Index,
    ];
    for pair in ranked.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn model_deserializes_from_manifest_record() {
    let json = r#"{
        "path": "src/Button.tsx",
        "kind": "component",
        "line_count": 80,
        "declared_props": ["label", "onClick"],
        "jsx_max_depth": 3,
        "import_entries": [{"group": "builtin", "module": "fs"}]
    }"#;
    let model: FileModel = serde_json::from_str(json).unwrap();
    assert_eq!(model.kind, FileKind::Component);
    assert_eq!(model.declared_props.len(), 2);
    assert_eq!(model.import_entries[0].group, ImportGroup::Builtin);
    // Omitted flags take their defaults
    assert!(!model.uses_mutable_binding);
    assert!(model.has_explicit_return_types);
}

#[test]
fn negative_line_count_survives_decode_for_screening() {
    let json = r#"{"path": "src/a.ts", "kind": "utility", "line_count": -1}"#;
    let model: FileModel = serde_json::from_str(json).unwrap();
    assert!(model.validate().is_err());
}
