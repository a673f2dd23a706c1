use weft_structs::{Color, Sprite};
use weft_variant::{Variant, VariantKind};

use crate::behavior::BehaviorType;
use crate::enums::ImageType;
use crate::reflect::{Described, MemberDef, as_f32};

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub tint: Color,
    pub sprite: Option<Sprite>,
    pub image_type: ImageType,
    /// 0.0..=1.0, only meaningful for `ImageType::Filled`.
    pub fill_amount: f32,
    pub preserve_aspect: bool,
    pub raycast_target: bool,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            tint: Color::WHITE,
            sprite: None,
            image_type: ImageType::Simple,
            fill_amount: 1.0,
            preserve_aspect: false,
            raycast_target: true,
        }
    }
}

impl Described for Image {
    const TYPE_NAME: &'static str = "Image";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "tint",
            kind: VariantKind::Color,
            get: |i| i.tint.into(),
            set: Some(|i, v| {
                i.tint = v.as_color()?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "sprite",
            kind: VariantKind::Sprite,
            get: |i| i.sprite.clone().into(),
            set: Some(|i, v| {
                i.sprite = match v {
                    Variant::Null => None,
                    other => Some(other.as_sprite()?.clone()),
                };
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "type",
            kind: VariantKind::Enum("ImageType"),
            get: |i| i.image_type.to_variant(),
            set: Some(|i, v| {
                i.image_type = ImageType::from_variant(v)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "fillAmount",
            kind: VariantKind::Float,
            get: |i| i.fill_amount.into(),
            set: Some(|i, v| {
                i.fill_amount = as_f32(v)?.clamp(0.0, 1.0);
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "preserveAspect",
            kind: VariantKind::Bool,
            get: |i| i.preserve_aspect.into(),
            set: Some(|i, v| {
                i.preserve_aspect = v.as_bool()?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "raycastTarget",
            kind: VariantKind::Bool,
            get: |i| i.raycast_target.into(),
            set: Some(|i, v| {
                i.raycast_target = v.as_bool()?;
                Some(())
            }),
            nested: None,
        },
    ];
}

impl BehaviorType for Image {}
