pub mod behavior;
pub mod behaviors;
pub mod enums;
pub mod node;
pub mod node_arena;
pub mod reflect;
pub mod registry;

pub use behavior::*;
pub use behaviors::*;
pub use enums::*;
pub use node::*;
pub use node_arena::*;
pub use reflect::*;
pub use registry::*;

#[cfg(test)]
mod tests {
    use super::*;
    use weft_structs::{Color, Vector2};
    use weft_variant::Variant;

    fn node_with_attrs(name: &'static str, pairs: &[(&str, &str)]) -> UiNode {
        let mut attrs = UiAttributes::new();
        for (k, v) in pairs {
            attrs.set_attribute(*k, *v);
        }
        UiNode::with_attributes(name, attrs)
    }

    // -------------------- NodeArena --------------------

    #[test]
    fn arena_first_id_is_one() {
        let mut arena = NodeArena::new();
        let id = arena.insert(UiNode::new("Window"));
        assert_eq!(id.index(), 1);
        assert_eq!(arena.get(id).unwrap().id, id);
    }

    #[test]
    fn arena_stale_id_after_remove() {
        let mut arena = NodeArena::new();
        let id = arena.insert(UiNode::new("A"));
        assert!(arena.remove(id).is_some());
        let reused = arena.insert(UiNode::new("B"));
        assert_eq!(reused.index(), id.index());
        assert_ne!(reused.generation(), id.generation());
        assert!(arena.get(id).is_none());
        assert_eq!(arena.get(reused).unwrap().name, "B");
    }

    #[test]
    fn remove_subtree_removes_descendants_and_unlinks() {
        let mut arena = NodeArena::new();
        let root = arena.insert(UiNode::new("Window"));
        let panel = arena.add_child(root, UiNode::new("Panel")).unwrap();
        let label = arena.add_child(panel, UiNode::new("Label")).unwrap();
        let other = arena.add_child(root, UiNode::new("Other")).unwrap();

        assert_eq!(arena.remove_subtree(panel), 2);
        assert!(!arena.contains(panel));
        assert!(!arena.contains(label));
        assert_eq!(arena.get(root).unwrap().children, vec![other]);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn preorder_visits_parent_before_children_in_order() {
        let mut arena = NodeArena::new();
        let root = arena.insert(UiNode::new("Window"));
        let a = arena.add_child(root, UiNode::new("A")).unwrap();
        let a1 = arena.add_child(a, UiNode::new("A1")).unwrap();
        let b = arena.add_child(root, UiNode::new("B")).unwrap();
        assert_eq!(arena.preorder(root), vec![root, a, a1, b]);
    }

    #[test]
    fn add_child_to_stale_parent_fails() {
        let mut arena = NodeArena::new();
        let root = arena.insert(UiNode::new("Window"));
        arena.remove(root);
        assert!(arena.add_child(root, UiNode::new("A")).is_none());
    }

    // -------------------- UiNode / behaviors --------------------

    #[test]
    fn with_attributes_attaches_transform_and_storage() {
        let node = node_with_attrs("Button", &[("color", "#fff"), ("title", "Go")]);
        assert_eq!(node.behavior_names(), vec!["RectTransform", "UiAttributes"]);
        let attrs = node.attributes().unwrap();
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("color", "#fff"), ("title", "Go")]);
    }

    #[test]
    fn attach_refuses_duplicate_type() {
        let mut node = UiNode::new("X");
        assert!(node.attach(Box::new(Image::default())));
        assert!(!node.attach(Box::new(Image::default())));
        assert_eq!(node.behavior_names(), vec!["Image"]);
    }

    #[test]
    fn typed_access_round_trips() {
        let mut node = UiNode::new("X");
        node.attach(Box::new(Image::default()));
        node.get_mut::<Image>().unwrap().tint = Color::RED;
        assert_eq!(node.get::<Image>().unwrap().tint, Color::RED);
        assert!(node.get::<Text>().is_none());
    }

    // -------------------- Reflection --------------------

    #[test]
    fn set_member_checks_kind() {
        let mut image = Image::default();
        image
            .set_member("tint", &Variant::from(Color::RED))
            .unwrap();
        assert_eq!(image.tint, Color::RED);

        let err = image.set_member("tint", &Variant::from(3i32)).unwrap_err();
        assert!(matches!(err, MemberError::TypeMismatch { .. }));
        let err = image.set_member("nope", &Variant::Null).unwrap_err();
        assert!(matches!(err, MemberError::UnknownMember { .. }));
    }

    #[test]
    fn write_path_descends_into_composites() {
        let mut rect = RectTransform::default();
        write_path(&mut rect, "sizeDelta.x", &Variant::from(250.0f32)).unwrap();
        assert_eq!(rect.size_delta, Vector2::new(250.0, 100.0));

        let mut button = Button::default();
        write_path(
            &mut button,
            "colors.pressedColor",
            &Variant::from(Color::BLACK),
        )
        .unwrap();
        assert_eq!(button.colors.pressed, Color::BLACK);

        write_path(&mut button, "colors.normalColor.a", &Variant::from(10i32)).unwrap();
        assert_eq!(button.colors.normal.a, 10);
        assert_eq!(
            read_path(&mut button, "colors.normalColor.a").unwrap(),
            Variant::from(10i32)
        );
    }

    #[test]
    fn write_path_reports_bad_descent() {
        let mut image = Image::default();
        let err = write_path(&mut image, "fillAmount.x", &Variant::from(1.0f32)).unwrap_err();
        assert!(matches!(err, MemberError::NotComposite { .. }));
        let err = write_path(&mut image, "missing.x", &Variant::from(1.0f32)).unwrap_err();
        assert!(matches!(err, MemberError::UnknownMember { .. }));
        let err = write_path(&mut image, "a..b", &Variant::Null).unwrap_err();
        assert!(matches!(err, MemberError::InvalidPath(_)));
    }

    #[test]
    fn read_only_member_rejects_writes() {
        let mut attrs = UiAttributes::new();
        attrs.set_attribute("a", "1");
        assert_eq!(attrs.get_member("count").unwrap(), Variant::from(1i64));
        assert!(matches!(
            attrs.set_member("count", &Variant::from(2i64)),
            Err(MemberError::ReadOnly { .. })
        ));
    }

    #[test]
    fn sprite_member_accepts_null_to_clear() {
        let mut image = Image::default();
        let sprite = weft_structs::Sprite::from_rgba("a.png", 1, 1, vec![1, 2, 3, 4]);
        image.set_member("sprite", &Variant::from(sprite)).unwrap();
        assert!(image.sprite.is_some());
        image.set_member("sprite", &Variant::Null).unwrap();
        assert!(image.sprite.is_none());
    }

    // -------------------- Enums & registries --------------------

    #[test]
    fn enum_parse_name_case_and_ordinal() {
        let def = ENUM_REGISTRY.get("TextAnchor").unwrap();
        assert_eq!(&*def.parse("MiddleCenter").unwrap().member, "MiddleCenter");
        assert_eq!(def.parse("middlecenter").unwrap().ordinal, 4);
        assert_eq!(&*def.parse("8").unwrap().member, "LowerRight");
        assert!(def.parse("Sideways").is_none());
        assert!(ENUM_REGISTRY.get("UnityEngine.FontStyle").is_some());
    }

    #[test]
    fn enum_member_write_through_text() {
        let mut text = Text::default();
        let value = Variant::from(ENUM_REGISTRY.get("TextAnchor").unwrap().parse("LowerLeft").unwrap());
        text.set_member("alignment", &value).unwrap();
        assert_eq!(text.alignment, TextAnchor::LowerLeft);

        let wrong = Variant::from(FontStyle::DEF.parse("Bold").unwrap());
        assert!(text.set_member("alignment", &wrong).is_err());
    }

    #[test]
    fn registry_creates_builtins_and_flags_structural() {
        let reg = BehaviorRegistry::with_builtins();
        assert!(reg.get("RectTransform").unwrap().structural);
        assert!(!reg.get("Image").unwrap().structural);
        assert_eq!(reg.create("UnityEngine.UI.Text").unwrap().type_name(), "Text");
        assert!(reg.create("Slider").is_none());
    }
}
