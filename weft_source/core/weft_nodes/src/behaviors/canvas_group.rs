use weft_variant::VariantKind;

use crate::behavior::BehaviorType;
use crate::reflect::{Described, MemberDef, as_f32};

#[derive(Clone, Debug, PartialEq)]
pub struct CanvasGroup {
    pub alpha: f32,
    pub interactable: bool,
    pub blocks_raycasts: bool,
    pub ignore_parent_groups: bool,
}

impl Default for CanvasGroup {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            interactable: true,
            blocks_raycasts: true,
            ignore_parent_groups: false,
        }
    }
}

impl Described for CanvasGroup {
    const TYPE_NAME: &'static str = "CanvasGroup";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "alpha",
            kind: VariantKind::Float,
            get: |g| g.alpha.into(),
            set: Some(|g, v| {
                g.alpha = as_f32(v)?.clamp(0.0, 1.0);
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "interactable",
            kind: VariantKind::Bool,
            get: |g| g.interactable.into(),
            set: Some(|g, v| {
                g.interactable = v.as_bool()?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "blocksRaycasts",
            kind: VariantKind::Bool,
            get: |g| g.blocks_raycasts.into(),
            set: Some(|g, v| {
                g.blocks_raycasts = v.as_bool()?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "ignoreParentGroups",
            kind: VariantKind::Bool,
            get: |g| g.ignore_parent_groups.into(),
            set: Some(|g, v| {
                g.ignore_parent_groups = v.as_bool()?;
                Some(())
            }),
            nested: None,
        },
    ];
}

impl BehaviorType for CanvasGroup {}
