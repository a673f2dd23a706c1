use weft_structs::Color;
use weft_variant::VariantKind;

use crate::behavior::BehaviorType;
use crate::enums::{FontStyle, TextAnchor};
use crate::reflect::{Described, MemberDef, as_f32, as_i32, as_string};

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub text: String,
    pub font_size: i32,
    pub font_style: FontStyle,
    pub alignment: TextAnchor,
    pub color: Color,
    pub line_spacing: f32,
    pub rich_text: bool,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 14,
            font_style: FontStyle::Normal,
            alignment: TextAnchor::UpperLeft,
            color: Color::BLACK,
            line_spacing: 1.0,
            rich_text: true,
        }
    }
}

impl Described for Text {
    const TYPE_NAME: &'static str = "Text";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "text",
            kind: VariantKind::String,
            get: |t| t.text.as_str().into(),
            set: Some(|t, v| {
                t.text = as_string(v)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "fontSize",
            kind: VariantKind::Int,
            get: |t| t.font_size.into(),
            set: Some(|t, v| {
                t.font_size = as_i32(v)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "fontStyle",
            kind: VariantKind::Enum("FontStyle"),
            get: |t| t.font_style.to_variant(),
            set: Some(|t, v| {
                t.font_style = FontStyle::from_variant(v)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "alignment",
            kind: VariantKind::Enum("TextAnchor"),
            get: |t| t.alignment.to_variant(),
            set: Some(|t, v| {
                t.alignment = TextAnchor::from_variant(v)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "color",
            kind: VariantKind::Color,
            get: |t| t.color.into(),
            set: Some(|t, v| {
                t.color = v.as_color()?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "lineSpacing",
            kind: VariantKind::Float,
            get: |t| t.line_spacing.into(),
            set: Some(|t, v| {
                t.line_spacing = as_f32(v)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "supportRichText",
            kind: VariantKind::Bool,
            get: |t| t.rich_text.into(),
            set: Some(|t, v| {
                t.rich_text = v.as_bool()?;
                Some(())
            }),
            nested: None,
        },
    ];
}

impl BehaviorType for Text {}
