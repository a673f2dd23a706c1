use weft_structs::Color;
use weft_variant::{Variant, VariantKind};

use crate::behavior::BehaviorType;
use crate::reflect::{Described, MemberDef, Reflect, as_f32};

/// Tints applied to the target graphic per interaction state.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBlock {
    pub normal: Color,
    pub highlighted: Color,
    pub pressed: Color,
    pub disabled: Color,
    pub color_multiplier: f32,
    pub fade_duration: f32,
}

impl Default for ColorBlock {
    fn default() -> Self {
        Self {
            normal: Color::WHITE,
            highlighted: Color::new(245, 245, 245, 255),
            pressed: Color::new(200, 200, 200, 255),
            disabled: Color::new(200, 200, 200, 128),
            color_multiplier: 1.0,
            fade_duration: 0.1,
        }
    }
}

fn normal_mut(c: &mut ColorBlock) -> &mut dyn Reflect {
    &mut c.normal
}
fn highlighted_mut(c: &mut ColorBlock) -> &mut dyn Reflect {
    &mut c.highlighted
}
fn pressed_mut(c: &mut ColorBlock) -> &mut dyn Reflect {
    &mut c.pressed
}
fn disabled_mut(c: &mut ColorBlock) -> &mut dyn Reflect {
    &mut c.disabled
}

impl Described for ColorBlock {
    const TYPE_NAME: &'static str = "ColorBlock";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "normalColor",
            kind: VariantKind::Color,
            get: |c| c.normal.into(),
            set: Some(|c, v| {
                c.normal = v.as_color()?;
                Some(())
            }),
            nested: Some(normal_mut),
        },
        MemberDef {
            name: "highlightedColor",
            kind: VariantKind::Color,
            get: |c| c.highlighted.into(),
            set: Some(|c, v| {
                c.highlighted = v.as_color()?;
                Some(())
            }),
            nested: Some(highlighted_mut),
        },
        MemberDef {
            name: "pressedColor",
            kind: VariantKind::Color,
            get: |c| c.pressed.into(),
            set: Some(|c, v| {
                c.pressed = v.as_color()?;
                Some(())
            }),
            nested: Some(pressed_mut),
        },
        MemberDef {
            name: "disabledColor",
            kind: VariantKind::Color,
            get: |c| c.disabled.into(),
            set: Some(|c, v| {
                c.disabled = v.as_color()?;
                Some(())
            }),
            nested: Some(disabled_mut),
        },
        MemberDef {
            name: "colorMultiplier",
            kind: VariantKind::Float,
            get: |c| c.color_multiplier.into(),
            set: Some(|c, v| {
                c.color_multiplier = as_f32(v)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "fadeDuration",
            kind: VariantKind::Float,
            get: |c| c.fade_duration.into(),
            set: Some(|c, v| {
                c.fade_duration = as_f32(v)?;
                Some(())
            }),
            nested: None,
        },
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub interactable: bool,
    pub colors: ColorBlock,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            interactable: true,
            colors: ColorBlock::default(),
        }
    }
}

fn colors_mut(b: &mut Button) -> &mut dyn Reflect {
    &mut b.colors
}

impl Described for Button {
    const TYPE_NAME: &'static str = "Button";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "interactable",
            kind: VariantKind::Bool,
            get: |b| b.interactable.into(),
            set: Some(|b, v| {
                b.interactable = v.as_bool()?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "colors",
            kind: VariantKind::Composite("ColorBlock"),
            get: |_| Variant::Null,
            set: None,
            nested: Some(colors_mut),
        },
    ];
}

impl BehaviorType for Button {}
