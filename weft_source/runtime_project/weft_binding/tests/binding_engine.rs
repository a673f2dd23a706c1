use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use weft_binding::{
    BindError, BindingEngine, ConversionError, MappingEntry, MappingTable, MissingMappingPolicy,
    ValueConverter,
};
use weft_ids::NodeID;
use weft_io::AssetPaths;
use weft_nodes::{
    BehaviorRegistry, Button, Image, ImageType, NodeArena, RectTransform, Text, TextAnchor,
    UiAttributes, UiNode,
};
use weft_structs::{Color, Vector2};

fn attrs(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn standard_rows() -> Vec<MappingEntry> {
    vec![
        MappingEntry::new("color", "Image", "tint", "color", true),
        MappingEntry::new("text", "Text", "text", "string", true),
        MappingEntry::new("fontSize", "Text", "fontSize", "int", true),
        MappingEntry::new("align", "Text", "alignment", "TextAnchor", true),
        MappingEntry::new("imageType", "Image", "type", "UnityEngine.UI.ImageType", true),
        MappingEntry::new("position", "RectTransform", "anchoredPosition", "Vector2", true),
        MappingEntry::new("pivotX", "RectTransform", "pivot.x", "float", true),
        MappingEntry::new("normal", "Button", "colors.normalColor", "Color", true),
        MappingEntry::new("fade", "Button", "colors.fadeDuration", "float", true),
        MappingEntry::new("strictText", "Text", "text", "string", false),
        MappingEntry::new("rect", "RectTransform", "sizeDelta", "Vector2", true),
    ]
}

fn engine(policy: MissingMappingPolicy) -> BindingEngine {
    BindingEngine::new(
        MappingTable::from_entries(standard_rows()),
        BehaviorRegistry::with_builtins(),
        ValueConverter::default(),
        policy,
    )
}

fn arena_with_node(name: &'static str) -> (NodeArena, NodeID) {
    let mut arena = NodeArena::new();
    let id = arena.insert(UiNode::with_attributes(name, UiAttributes::new()));
    (arena, id)
}

#[test]
fn color_attribute_adds_image_and_sets_tint() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let (mut arena, id) = arena_with_node("Panel");

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("color", "#FF0000FF")]));

    assert_eq!(report.written, 1);
    assert!(report.errors.is_empty());
    let image = arena.get(id).unwrap().get::<Image>().unwrap();
    assert_eq!(image.tint, Color::new(255, 0, 0, 255));
}

#[test]
fn unmapped_key_records_placeholder_once_and_blocks_writes() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let (mut arena, id) = arena_with_node("Panel");

    let first = engine.apply_attributes(
        &mut arena,
        id,
        &attrs(&[("glow", "3"), ("text", "hello")]),
    );
    assert_eq!(first.placeholders, ["glow"]);
    assert_eq!(first.written, 0);
    assert_eq!(first.suppressed, 1);
    assert!(engine.writes_suspended());
    assert!(arena.get(id).unwrap().get::<Text>().is_none());

    let second = engine.apply_attributes(&mut arena, id, &attrs(&[("glow", "7")]));
    assert!(second.placeholders.is_empty());
    assert_eq!(second.written, 0);
    assert_eq!(engine.table().placeholders().count(), 1);
    assert!(engine.table().is_dirty());
}

#[test]
fn suspend_all_blocks_later_calls() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let (mut arena, id) = arena_with_node("Panel");

    engine.apply_attributes(&mut arena, id, &attrs(&[("unknown", "1")]));
    let later = engine.apply_attributes(&mut arena, id, &attrs(&[("text", "hi")]));

    assert_eq!(later.written, 0);
    assert_eq!(later.suppressed, 1);
    assert!(arena.get(id).unwrap().get::<Text>().is_none());
}

#[test]
fn per_call_only_blocks_the_current_call() {
    let mut engine = engine(MissingMappingPolicy::PerCall);
    let (mut arena, id) = arena_with_node("Panel");

    let first = engine.apply_attributes(
        &mut arena,
        id,
        &attrs(&[("unknown", "1"), ("text", "skipped")]),
    );
    assert_eq!(first.suppressed, 1);
    assert!(!engine.writes_suspended());

    let second = engine.apply_attributes(&mut arena, id, &attrs(&[("text", "hi")]));
    assert_eq!(second.written, 1);
    assert_eq!(arena.get(id).unwrap().get::<Text>().unwrap().text, "hi");
}

#[test]
fn attributes_before_the_unmapped_key_are_still_written() {
    let mut engine = engine(MissingMappingPolicy::PerCall);
    let (mut arena, id) = arena_with_node("Panel");

    let report = engine.apply_attributes(
        &mut arena,
        id,
        &attrs(&[("text", "first"), ("unknown", "1"), ("fontSize", "20")]),
    );
    assert_eq!(report.written, 1);
    assert_eq!(report.suppressed, 1);
    let text = arena.get(id).unwrap().get::<Text>().unwrap();
    assert_eq!(text.text, "first");
    assert_ne!(text.font_size, 20);
}

#[test]
fn placeholder_row_reports_incomplete_mapping() {
    let mut table = MappingTable::from_entries(standard_rows());
    table.add_placeholder("todo");
    let mut engine = BindingEngine::new(
        table,
        BehaviorRegistry::with_builtins(),
        ValueConverter::default(),
        MissingMappingPolicy::SuspendAll,
    );
    let (mut arena, id) = arena_with_node("Panel");

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("todo", "x")]));
    assert_eq!(
        report.errors,
        [BindError::IncompleteMapping {
            key: "todo".to_string()
        }]
    );
    assert!(!engine.writes_suspended());
}

#[test]
fn disallowed_add_leaves_node_untouched() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let (mut arena, id) = arena_with_node("Panel");

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("strictText", "x")]));
    assert_eq!(report.written, 0);
    assert!(matches!(
        report.errors.as_slice(),
        [BindError::BehaviorMissing { .. }]
    ));
    assert!(!arena.get(id).unwrap().has_behavior("Text"));

    // Once present, the same row writes.
    arena.get_mut(id).unwrap().attach(Box::new(Text::default()));
    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("strictText", "x")]));
    assert_eq!(report.written, 1);
    assert_eq!(arena.get(id).unwrap().get::<Text>().unwrap().text, "x");
}

#[test]
fn structural_behavior_is_never_added() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let mut arena = NodeArena::new();
    let id = arena.insert(UiNode::new("Bare"));

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("rect", "10,20")]));
    assert!(matches!(
        report.errors.as_slice(),
        [BindError::AddRefused { .. }]
    ));
    assert!(!arena.get(id).unwrap().has_behavior("RectTransform"));
}

#[test]
fn rect_transform_fields_and_nested_pivot() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let (mut arena, id) = arena_with_node("Panel");

    let report = engine.apply_attributes(
        &mut arena,
        id,
        &attrs(&[("position", "1,2"), ("pivotX", "0.25")]),
    );
    assert_eq!(report.written, 2);
    let rect = arena.get(id).unwrap().get::<RectTransform>().unwrap();
    assert_eq!(rect.anchored_position, Vector2::new(1.0, 2.0));
    assert_eq!(rect.pivot.x, 0.25);
    assert_eq!(rect.pivot.y, 0.5);
}

#[test]
fn nested_button_colors_are_written_back() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let (mut arena, id) = arena_with_node("Button");

    let report = engine.apply_attributes(
        &mut arena,
        id,
        &attrs(&[("normal", "#00FF00"), ("fade", "0.3")]),
    );
    assert_eq!(report.written, 2);
    let button = arena.get(id).unwrap().get::<Button>().unwrap();
    assert_eq!(button.colors.normal, Color::new(0, 255, 0, 255));
    assert_eq!(button.colors.fade_duration, 0.3);
}

#[test]
fn enum_members_convert_by_name_and_ordinal() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let (mut arena, id) = arena_with_node("Label");

    engine.apply_attributes(
        &mut arena,
        id,
        &attrs(&[("align", "MiddleCenter"), ("imageType", "3")]),
    );
    let node = arena.get(id).unwrap();
    assert_eq!(node.get::<Text>().unwrap().alignment, TextAnchor::MiddleCenter);
    assert_eq!(node.get::<Image>().unwrap().image_type, ImageType::Filled);
}

#[test]
fn conversion_failure_is_reported_and_leaves_default() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let (mut arena, id) = arena_with_node("Label");

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("position", "1,2,3")]));
    assert!(matches!(
        report.errors.as_slice(),
        [BindError::Conversion {
            source: ConversionError::Arity { expected: 2, found: 3, .. },
            ..
        }]
    ));
    let rect = arena.get(id).unwrap().get::<RectTransform>().unwrap();
    assert_eq!(rect.anchored_position, Vector2::zero());
}

#[test]
fn bad_member_path_is_a_path_error() {
    let table = MappingTable::from_entries([MappingEntry::new(
        "deep", "Button", "colors.missing.x", "float", true,
    )]);
    let mut engine = BindingEngine::new(
        table,
        BehaviorRegistry::with_builtins(),
        ValueConverter::default(),
        MissingMappingPolicy::SuspendAll,
    );
    let (mut arena, id) = arena_with_node("Button");

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("deep", "1")]));
    assert!(matches!(
        report.errors.as_slice(),
        [BindError::PathResolution { .. }]
    ));
}

#[test]
fn unknown_behavior_type_is_reported() {
    let table = MappingTable::from_entries([MappingEntry::new(
        "wobble", "Wobbler", "amount", "float", true,
    )]);
    let mut engine = BindingEngine::new(
        table,
        BehaviorRegistry::with_builtins(),
        ValueConverter::default(),
        MissingMappingPolicy::SuspendAll,
    );
    let (mut arena, id) = arena_with_node("Panel");

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("wobble", "1")]));
    assert!(matches!(
        report.errors.as_slice(),
        [BindError::UnknownBehavior { .. }]
    ));
}

#[test]
fn missing_node_is_reported() {
    let mut engine = engine(MissingMappingPolicy::SuspendAll);
    let mut arena = NodeArena::new();
    let report = engine.apply_attributes(&mut arena, NodeID::from_parts(9, 0), &attrs(&[("text", "x")]));
    assert!(matches!(report.errors.as_slice(), [BindError::NodeNotFound(_)]));
}

#[test]
fn shutdown_persists_sorted_table_with_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ConfigFile.csv");

    {
        let mut engine = BindingEngine::load(
            &path,
            BehaviorRegistry::with_builtins(),
            ValueConverter::default(),
            MissingMappingPolicy::SuspendAll,
        );
        engine
            .table_mut()
            .upsert(MappingEntry::new("text", "Text", "text", "string", true));
        let (mut arena, id) = arena_with_node("Panel");
        engine.apply_attributes(&mut arena, id, &attrs(&[("zeta", "1"), ("alpha", "2")]));
        assert!(engine.shutdown());
        assert!(!engine.table().is_dirty());
    }

    let reloaded = MappingTable::load(&path);
    let keys: Vec<&str> = reloaded.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["alpha", "text", "zeta"]);
    assert!(reloaded.get("alpha").unwrap().is_placeholder());
    assert!(reloaded.get("alpha").unwrap().allow_add_component);
    assert_eq!(reloaded.get("text").unwrap().component_type, "Text");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("key,componentType,propertyPath,valueType,allowAddComponent"));
}

#[test]
fn drop_persists_dirty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.csv");
    {
        let mut engine = engine(MissingMappingPolicy::SuspendAll).with_persist_path(&path);
        let (mut arena, id) = arena_with_node("Panel");
        engine.apply_attributes(&mut arena, id, &attrs(&[("glow", "1")]));
    }
    let reloaded = MappingTable::load(&path);
    assert!(reloaded.contains("glow"));
    assert!(reloaded.contains("color"));
}

#[test]
fn clean_table_is_not_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.csv");
    let mut engine = engine(MissingMappingPolicy::SuspendAll).with_persist_path(&path);
    assert!(engine.shutdown());
    assert!(!path.exists());
}

const HEADER: &[u8] = b"key,componentType,propertyPath,valueType,allowAddComponent\n";

#[test]
fn malformed_row_is_skipped_and_good_rows_survive_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ConfigFile.csv");
    let mut bytes = HEADER.to_vec();
    bytes.extend_from_slice(b"color,Image,tint,color,true\n");
    bytes.extend_from_slice(b"bad,Te\xffxt,text,string,true\n");
    bytes.extend_from_slice(b"text,Text,text,string,true\n");
    fs::write(&path, bytes).unwrap();

    let mut engine = BindingEngine::load(
        &path,
        BehaviorRegistry::with_builtins(),
        ValueConverter::default(),
        MissingMappingPolicy::SuspendAll,
    );
    assert_eq!(engine.table().len(), 2);
    assert!(engine.persist_path().is_some());

    let (mut arena, id) = arena_with_node("Panel");
    let report = engine.apply_attributes(
        &mut arena,
        id,
        &attrs(&[("color", "#FF0000FF"), ("glow", "1")]),
    );
    assert_eq!(report.written, 1);
    assert_eq!(report.placeholders, ["glow"]);
    assert!(engine.shutdown());

    let reloaded = MappingTable::load(&path);
    let keys: Vec<&str> = reloaded.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["color", "glow", "text"]);
    assert_eq!(reloaded.get("color").unwrap().component_type, "Image");
}

#[test]
fn unreadable_table_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ConfigFile.csv");
    let mut bytes = HEADER.to_vec();
    bytes.extend_from_slice(b"bad,Te\xffxt,text,string,true\n");
    fs::write(&path, &bytes).unwrap();

    {
        let mut engine = BindingEngine::load(
            &path,
            BehaviorRegistry::with_builtins(),
            ValueConverter::default(),
            MissingMappingPolicy::SuspendAll,
        );
        assert!(engine.table().is_empty());
        assert!(engine.persist_path().is_none());
        assert!(MappingTable::try_load(&path).is_err());

        let (mut arena, id) = arena_with_node("Panel");
        engine.apply_attributes(&mut arena, id, &attrs(&[("color", "#FF0000FF")]));
        assert!(!engine.shutdown());
    }

    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn header_only_table_is_empty_and_writable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ConfigFile.csv");
    fs::write(&path, HEADER).unwrap();

    let table = MappingTable::try_load(&path).unwrap();
    assert!(table.is_empty());
    let engine = BindingEngine::load(
        &path,
        BehaviorRegistry::with_builtins(),
        ValueConverter::default(),
        MissingMappingPolicy::SuspendAll,
    );
    assert!(engine.persist_path().is_some());
}

#[test]
fn missing_table_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let table = MappingTable::load(dir.path().join("absent.csv"));
    assert!(table.is_empty());
}

fn write_png(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]));
    img.save(path).unwrap();
}

#[test]
fn sprite_attribute_loads_from_assets() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("Sprites/ui/button.png"));

    let table = MappingTable::from_entries([MappingEntry::new(
        "icon", "Image", "sprite", "Sprite", true,
    )]);
    let mut engine = BindingEngine::new(
        table,
        BehaviorRegistry::with_builtins(),
        ValueConverter::new(AssetPaths::new(dir.path())),
        MissingMappingPolicy::SuspendAll,
    );
    let (mut arena, id) = arena_with_node("Icon");

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("icon", "ui\\button.png")]));
    assert_eq!(report.written, 1);
    let sprite = arena
        .get(id)
        .unwrap()
        .get::<Image>()
        .unwrap()
        .sprite
        .clone()
        .unwrap();
    assert_eq!((sprite.width, sprite.height), (2, 3));
    assert_eq!(&sprite.pixels()[..4], &[10, 20, 30, 255]);
}

#[test]
fn missing_sprite_clears_image() {
    let dir = tempfile::tempdir().unwrap();
    let table = MappingTable::from_entries([MappingEntry::new(
        "icon", "Image", "sprite", "Sprite", true,
    )]);
    let mut engine = BindingEngine::new(
        table,
        BehaviorRegistry::with_builtins(),
        ValueConverter::new(AssetPaths::new(dir.path())),
        MissingMappingPolicy::SuspendAll,
    );
    let (mut arena, id) = arena_with_node("Icon");

    let report = engine.apply_attributes(&mut arena, id, &attrs(&[("icon", "absent.png")]));
    assert!(report.errors.is_empty());
    assert!(arena.get(id).unwrap().get::<Image>().unwrap().sprite.is_none());
}
