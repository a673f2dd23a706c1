//! Enum types exposed to bindings, plus the name-based registry used to parse
//! enum values from raw attribute text.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use weft_variant::{EnumValue, Variant};

/// Static description of an enum: type name plus `(member, ordinal)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct EnumDef {
    pub name: &'static str,
    pub members: &'static [(&'static str, i64)],
}

impl EnumDef {
    /// Member name (exact, then case-insensitive) or numeric ordinal.
    pub fn parse(&self, raw: &str) -> Option<EnumValue> {
        let raw = raw.trim();
        let found = self
            .members
            .iter()
            .find(|(m, _)| *m == raw)
            .or_else(|| self.members.iter().find(|(m, _)| m.eq_ignore_ascii_case(raw)))
            .or_else(|| {
                let ordinal: i64 = raw.parse().ok()?;
                self.members.iter().find(|(_, o)| *o == ordinal)
            })?;
        Some(EnumValue::new(self.name, found.0, found.1))
    }

    pub fn by_ordinal(&self, ordinal: i64) -> Option<EnumValue> {
        self.members
            .iter()
            .find(|(_, o)| *o == ordinal)
            .map(|(m, o)| EnumValue::new(self.name, m, *o))
    }
}

macro_rules! define_ui_enum {
    ($name:ident, default = $default:ident, { $($member:ident = $ord:expr),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($member = $ord),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            pub const DEF: EnumDef = EnumDef {
                name: stringify!($name),
                members: &[$((stringify!($member), $ord)),+],
            };

            pub fn from_ordinal(ordinal: i64) -> Option<Self> {
                match ordinal {
                    $(o if o == $ord => Some(Self::$member),)+
                    _ => None,
                }
            }

            pub fn to_variant(self) -> Variant {
                let ordinal = self as i64;
                Self::DEF.by_ordinal(ordinal).map_or(Variant::Null, Variant::Enum)
            }

            /// Accepts an enum value of this type, an integer ordinal or a member name.
            pub fn from_variant(value: &Variant) -> Option<Self> {
                match value {
                    Variant::Enum(e) if &*e.type_name == stringify!($name) => {
                        Self::from_ordinal(e.ordinal)
                    }
                    Variant::Enum(_) => None,
                    Variant::String(s) => Self::DEF.parse(s).and_then(|e| Self::from_ordinal(e.ordinal)),
                    other => other.as_i64().and_then(Self::from_ordinal),
                }
            }
        }
    };
}

define_ui_enum!(TextAnchor, default = UpperLeft, {
    UpperLeft = 0,
    UpperCenter = 1,
    UpperRight = 2,
    MiddleLeft = 3,
    MiddleCenter = 4,
    MiddleRight = 5,
    LowerLeft = 6,
    LowerCenter = 7,
    LowerRight = 8,
});

define_ui_enum!(FontStyle, default = Normal, {
    Normal = 0,
    Bold = 1,
    Italic = 2,
    BoldAndItalic = 3,
});

define_ui_enum!(ImageType, default = Simple, {
    Simple = 0,
    Sliced = 1,
    Tiled = 2,
    Filled = 3,
});

/// Enum types known to value conversion, keyed by type name.
#[derive(Debug, Default, Clone)]
pub struct EnumRegistry {
    by_name: HashMap<&'static str, EnumDef>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        let mut reg = Self::default();
        reg.register(TextAnchor::DEF);
        reg.register(FontStyle::DEF);
        reg.register(ImageType::DEF);
        reg
    }

    pub fn register(&mut self, def: EnumDef) {
        self.by_name.insert(def.name, def);
    }

    /// Exact name first, then the last `.`-separated segment (`UnityEngine.TextAnchor`).
    pub fn get(&self, name: &str) -> Option<&EnumDef> {
        self.by_name.get(name).or_else(|| {
            let short = name.rsplit('.').next()?;
            self.by_name.get(short)
        })
    }
}

/// Global enum registry.
pub static ENUM_REGISTRY: Lazy<EnumRegistry> = Lazy::new(EnumRegistry::new);
