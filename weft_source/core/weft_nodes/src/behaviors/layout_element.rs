use weft_variant::VariantKind;

use crate::behavior::BehaviorType;
use crate::reflect::{Described, MemberDef, as_f32};

/// Size hints for layout groups. Negative values mean "unset".
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutElement {
    pub min_width: f32,
    pub min_height: f32,
    pub preferred_width: f32,
    pub preferred_height: f32,
    pub flexible_width: f32,
    pub flexible_height: f32,
    pub ignore_layout: bool,
}

impl Default for LayoutElement {
    fn default() -> Self {
        Self {
            min_width: -1.0,
            min_height: -1.0,
            preferred_width: -1.0,
            preferred_height: -1.0,
            flexible_width: -1.0,
            flexible_height: -1.0,
            ignore_layout: false,
        }
    }
}

macro_rules! float_member {
    ($name:literal, $field:ident) => {
        MemberDef {
            name: $name,
            kind: VariantKind::Float,
            get: |l| l.$field.into(),
            set: Some(|l, v| {
                l.$field = as_f32(v)?;
                Some(())
            }),
            nested: None,
        }
    };
}

impl Described for LayoutElement {
    const TYPE_NAME: &'static str = "LayoutElement";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        float_member!("minWidth", min_width),
        float_member!("minHeight", min_height),
        float_member!("preferredWidth", preferred_width),
        float_member!("preferredHeight", preferred_height),
        float_member!("flexibleWidth", flexible_width),
        float_member!("flexibleHeight", flexible_height),
        MemberDef {
            name: "ignoreLayout",
            kind: VariantKind::Bool,
            get: |l| l.ignore_layout.into(),
            set: Some(|l, v| {
                l.ignore_layout = v.as_bool()?;
                Some(())
            }),
            nested: None,
        },
    ];
}

impl BehaviorType for LayoutElement {}
