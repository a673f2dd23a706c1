//! Raw attribute text -> typed `Variant`, driven by a mapping row's value type.

use thiserror::Error;
use weft_io::{AssetPaths, load_sprite_file};
use weft_nodes::{ENUM_REGISTRY, EnumRegistry};
use weft_structs::{Color, Vector2, Vector3};
use weft_variant::{Number, Variant};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("'{raw}' is not a valid {kind}")]
    InvalidNumber { raw: String, kind: &'static str },
    #[error("'{0}' is not a valid bool, expected true or false")]
    InvalidBool(String),
    #[error("'{0}' is not a single character")]
    InvalidChar(String),
    #[error("invalid colour '{raw}': {reason}")]
    InvalidColor { raw: String, reason: String },
    #[error("'{raw}' has {found} components, {expected} expected")]
    Arity {
        raw: String,
        expected: usize,
        found: usize,
    },
    #[error("'{raw}' is not a member of {type_name}")]
    InvalidEnum { type_name: String, raw: String },
    #[error("unknown value type '{0}'")]
    UnknownType(String),
}

/// Logical value kinds a mapping row can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Long,
    UInt,
    ULong,
    Float,
    Double,
    Bool,
    Char,
    String,
    Color,
    Vector2,
    Vector3,
    Sprite,
}

impl ValueType {
    /// Built-in names and their aliases. Enum types are resolved separately.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.trim() {
            "int" | "Int32" | "System.Int32" | "int32" => Self::Int,
            "long" | "Int64" | "System.Int64" | "int64" => Self::Long,
            "uint" | "UInt32" | "System.UInt32" => Self::UInt,
            "ulong" | "UInt64" | "System.UInt64" => Self::ULong,
            "float" | "Single" | "System.Single" => Self::Float,
            "double" | "Double" | "System.Double" => Self::Double,
            "bool" | "Boolean" | "System.Boolean" => Self::Bool,
            "char" | "Char" | "System.Char" => Self::Char,
            "string" | "String" | "System.String" => Self::String,
            "Color" | "UnityEngine.Color" | "color" => Self::Color,
            "Vector2" | "UnityEngine.Vector2" | "vector2" => Self::Vector2,
            "Vector3" | "UnityEngine.Vector3" | "vector3" => Self::Vector3,
            "Sprite" | "UnityEngine.Sprite" | "image" | "sprite" => Self::Sprite,
            _ => return None,
        })
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, kind: &'static str) -> Result<T, ConversionError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConversionError::InvalidNumber {
            raw: raw.to_string(),
            kind,
        })
}

fn parse_components(raw: &str, expected: usize) -> Result<Vec<f32>, ConversionError> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != expected {
        return Err(ConversionError::Arity {
            raw: raw.to_string(),
            expected,
            found: parts.len(),
        });
    }
    parts
        .into_iter()
        .map(|p| parse_number::<f32>(p, "float"))
        .collect()
}

/// Converts raw attribute text. Holds what conversion needs from the outside:
/// where sprites live and which enum types exist.
#[derive(Debug, Clone)]
pub struct ValueConverter {
    assets: AssetPaths,
    enums: EnumRegistry,
}

impl Default for ValueConverter {
    fn default() -> Self {
        Self::new(AssetPaths::default())
    }
}

impl ValueConverter {
    pub fn new(assets: AssetPaths) -> Self {
        Self {
            assets,
            enums: (*ENUM_REGISTRY).clone(),
        }
    }

    pub fn with_enums(mut self, enums: EnumRegistry) -> Self {
        self.enums = enums;
        self
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    /// Never fails: conversion errors are logged and give `Variant::Null`.
    pub fn convert_value(&self, raw: &str, value_type: &str) -> Variant {
        match self.try_convert_value(raw, value_type) {
            Ok(v) => v,
            Err(e) => {
                log::error!("value conversion failed: {e}");
                Variant::Null
            }
        }
    }

    /// Sprite lookups that fail are logged and yield `Ok(Variant::Null)`.
    pub fn try_convert_value(&self, raw: &str, value_type: &str) -> Result<Variant, ConversionError> {
        let Some(kind) = ValueType::from_name(value_type) else {
            return self.convert_named(raw, value_type);
        };

        Ok(match kind {
            ValueType::Int => Variant::Number(Number::I32(parse_number(raw, "int")?)),
            ValueType::Long => Variant::Number(Number::I64(parse_number(raw, "long")?)),
            ValueType::UInt => Variant::Number(Number::U32(parse_number(raw, "uint")?)),
            ValueType::ULong => Variant::Number(Number::U64(parse_number(raw, "ulong")?)),
            ValueType::Float => Variant::Number(Number::F32(parse_number(raw, "float")?)),
            ValueType::Double => Variant::Number(Number::F64(parse_number(raw, "double")?)),
            ValueType::Bool => {
                let t = raw.trim();
                if t.eq_ignore_ascii_case("true") {
                    Variant::Bool(true)
                } else if t.eq_ignore_ascii_case("false") {
                    Variant::Bool(false)
                } else {
                    return Err(ConversionError::InvalidBool(raw.to_string()));
                }
            }
            ValueType::Char => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Variant::Char(c),
                    _ => return Err(ConversionError::InvalidChar(raw.to_string())),
                }
            }
            ValueType::String => Variant::string(raw),
            ValueType::Color => Variant::Color(Color::parse_html(raw).map_err(|reason| {
                ConversionError::InvalidColor {
                    raw: raw.to_string(),
                    reason,
                }
            })?),
            ValueType::Vector2 => {
                let c = parse_components(raw, 2)?;
                Variant::Vector2(Vector2::new(c[0], c[1]))
            }
            ValueType::Vector3 => {
                let c = parse_components(raw, 3)?;
                Variant::Vector3(Vector3::new(c[0], c[1], c[2]))
            }
            ValueType::Sprite => self.load_sprite(raw),
        })
    }

    fn convert_named(&self, raw: &str, value_type: &str) -> Result<Variant, ConversionError> {
        let Some(def) = self.enums.get(value_type) else {
            return Err(ConversionError::UnknownType(value_type.to_string()));
        };
        def.parse(raw)
            .map(Variant::Enum)
            .ok_or_else(|| ConversionError::InvalidEnum {
                type_name: def.name.to_string(),
                raw: raw.to_string(),
            })
    }

    fn load_sprite(&self, raw: &str) -> Variant {
        let path = self.assets.resolve_sprite(raw);
        if !path.is_file() {
            log::error!("sprite '{raw}' not found at {}", path.display());
            return Variant::Null;
        }
        match load_sprite_file(&path, raw.trim()) {
            Ok(sprite) => Variant::Sprite(sprite),
            Err(e) => {
                log::error!("failed to decode sprite {}: {e}", path.display());
                Variant::Null
            }
        }
    }
}
