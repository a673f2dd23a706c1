use weft_structs::{Vector2, Vector3};
use weft_variant::VariantKind;

use crate::behavior::BehaviorType;
use crate::reflect::{Described, MemberDef, Reflect, as_f32};

/// Layout rectangle of a node. Every node gets one at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct RectTransform {
    pub anchored_position: Vector2,
    pub size_delta: Vector2,
    pub anchor_min: Vector2,
    pub anchor_max: Vector2,
    pub pivot: Vector2,
    pub local_scale: Vector3,
    /// Degrees around Z.
    pub rotation: f32,
}

impl Default for RectTransform {
    fn default() -> Self {
        Self {
            anchored_position: Vector2::zero(),
            size_delta: Vector2::new(100.0, 100.0),
            anchor_min: Vector2::new(0.5, 0.5),
            anchor_max: Vector2::new(0.5, 0.5),
            pivot: Vector2::new(0.5, 0.5),
            local_scale: Vector3::one(),
            rotation: 0.0,
        }
    }
}

fn anchored_position_mut(t: &mut RectTransform) -> &mut dyn Reflect {
    &mut t.anchored_position
}
fn size_delta_mut(t: &mut RectTransform) -> &mut dyn Reflect {
    &mut t.size_delta
}
fn anchor_min_mut(t: &mut RectTransform) -> &mut dyn Reflect {
    &mut t.anchor_min
}
fn anchor_max_mut(t: &mut RectTransform) -> &mut dyn Reflect {
    &mut t.anchor_max
}
fn pivot_mut(t: &mut RectTransform) -> &mut dyn Reflect {
    &mut t.pivot
}
fn local_scale_mut(t: &mut RectTransform) -> &mut dyn Reflect {
    &mut t.local_scale
}

impl Described for RectTransform {
    const TYPE_NAME: &'static str = "RectTransform";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "anchoredPosition",
            kind: VariantKind::Vector2,
            get: |t| t.anchored_position.into(),
            set: Some(|t, v| {
                t.anchored_position = v.as_vec2()?;
                Some(())
            }),
            nested: Some(anchored_position_mut),
        },
        MemberDef {
            name: "sizeDelta",
            kind: VariantKind::Vector2,
            get: |t| t.size_delta.into(),
            set: Some(|t, v| {
                t.size_delta = v.as_vec2()?;
                Some(())
            }),
            nested: Some(size_delta_mut),
        },
        MemberDef {
            name: "anchorMin",
            kind: VariantKind::Vector2,
            get: |t| t.anchor_min.into(),
            set: Some(|t, v| {
                t.anchor_min = v.as_vec2()?;
                Some(())
            }),
            nested: Some(anchor_min_mut),
        },
        MemberDef {
            name: "anchorMax",
            kind: VariantKind::Vector2,
            get: |t| t.anchor_max.into(),
            set: Some(|t, v| {
                t.anchor_max = v.as_vec2()?;
                Some(())
            }),
            nested: Some(anchor_max_mut),
        },
        MemberDef {
            name: "pivot",
            kind: VariantKind::Vector2,
            get: |t| t.pivot.into(),
            set: Some(|t, v| {
                t.pivot = v.as_vec2()?;
                Some(())
            }),
            nested: Some(pivot_mut),
        },
        MemberDef {
            name: "localScale",
            kind: VariantKind::Vector3,
            get: |t| t.local_scale.into(),
            set: Some(|t, v| {
                t.local_scale = v.as_vec3()?;
                Some(())
            }),
            nested: Some(local_scale_mut),
        },
        MemberDef {
            name: "rotation",
            kind: VariantKind::Float,
            get: |t| t.rotation.into(),
            set: Some(|t, v| {
                t.rotation = as_f32(v)?;
                Some(())
            }),
            nested: None,
        },
    ];
}

impl BehaviorType for RectTransform {
    const STRUCTURAL: bool = true;
}
