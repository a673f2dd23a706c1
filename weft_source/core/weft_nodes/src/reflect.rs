//! Member descriptor tables.
//!
//! Every reflectable type lists its members once in a const `MemberDef` table. The
//! blanket `Reflect` impl turns that table into name-based get/set/descend so the
//! binding layer can walk dotted paths like `colors.normalColor` without knowing
//! the concrete type.

use std::any::Any;

use thiserror::Error;
use weft_structs::{Color, Vector2, Vector3};
use weft_variant::{Variant, VariantKind};

/// One member of a reflectable type `T`.
pub struct MemberDef<T: 'static> {
    pub name: &'static str,
    pub kind: VariantKind,
    pub get: fn(&T) -> Variant,
    /// `None` for read-only members. Returns `None` when the value has the wrong kind.
    pub set: Option<fn(&mut T, &Variant) -> Option<()>>,
    /// Present on composite members that can be descended into.
    pub nested: Option<fn(&mut T) -> &mut dyn Reflect>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MemberError {
    #[error("'{type_name}' has no member '{member}'")]
    UnknownMember {
        type_name: &'static str,
        member: String,
    },
    #[error("'{type_name}.{member}' is read-only")]
    ReadOnly {
        type_name: &'static str,
        member: String,
    },
    #[error("'{type_name}.{member}' is not a composite member")]
    NotComposite {
        type_name: &'static str,
        member: String,
    },
    #[error("'{type_name}.{member}' expects {expected}, got {found}")]
    TypeMismatch {
        type_name: &'static str,
        member: String,
        expected: VariantKind,
        found: String,
    },
    #[error("invalid member path '{0}'")]
    InvalidPath(String),
}

/// Implemented by hand for every type that exposes members.
pub trait Described: Any + Sized {
    const TYPE_NAME: &'static str;
    const MEMBERS: &'static [MemberDef<Self>];
}

/// Object-safe, name-based view over a `Described` type.
pub trait Reflect: Any {
    fn type_name(&self) -> &'static str;
    fn member_names(&self) -> Vec<&'static str>;
    fn member_kind(&self, name: &str) -> Option<VariantKind>;
    fn get_member(&self, name: &str) -> Result<Variant, MemberError>;
    fn set_member(&mut self, name: &str, value: &Variant) -> Result<(), MemberError>;
    fn member_mut(&mut self, name: &str) -> Result<&mut dyn Reflect, MemberError>;
}

fn find_member<T: Described>(name: &str) -> Result<&'static MemberDef<T>, MemberError> {
    T::MEMBERS
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| MemberError::UnknownMember {
            type_name: T::TYPE_NAME,
            member: name.to_string(),
        })
}

impl<T: Described> Reflect for T {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn member_names(&self) -> Vec<&'static str> {
        T::MEMBERS.iter().map(|m| m.name).collect()
    }

    fn member_kind(&self, name: &str) -> Option<VariantKind> {
        T::MEMBERS.iter().find(|m| m.name == name).map(|m| m.kind)
    }

    fn get_member(&self, name: &str) -> Result<Variant, MemberError> {
        let def = find_member::<T>(name)?;
        Ok((def.get)(self))
    }

    fn set_member(&mut self, name: &str, value: &Variant) -> Result<(), MemberError> {
        let def = find_member::<T>(name)?;
        let set = def.set.ok_or_else(|| MemberError::ReadOnly {
            type_name: T::TYPE_NAME,
            member: name.to_string(),
        })?;
        set(self, value).ok_or_else(|| MemberError::TypeMismatch {
            type_name: T::TYPE_NAME,
            member: name.to_string(),
            expected: def.kind,
            found: value.to_string(),
        })
    }

    fn member_mut(&mut self, name: &str) -> Result<&mut dyn Reflect, MemberError> {
        let def = find_member::<T>(name)?;
        let nested = def.nested.ok_or_else(|| MemberError::NotComposite {
            type_name: T::TYPE_NAME,
            member: name.to_string(),
        })?;
        Ok(nested(self))
    }
}

/// Splits a dotted member path. Empty segments are rejected.
pub fn split_path(path: &str) -> Result<Vec<&str>, MemberError> {
    let segments: Vec<&str> = path.split('.').map(str::trim).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(MemberError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}

/// Follows nested accessors through every segment.
pub fn descend<'a>(
    target: &'a mut dyn Reflect,
    segments: &[&str],
) -> Result<&'a mut dyn Reflect, MemberError> {
    let mut cursor = target;
    for segment in segments {
        cursor = cursor.member_mut(segment)?;
    }
    Ok(cursor)
}

/// Descends every segment but the last, then writes `value` into the last one.
pub fn write_path(
    target: &mut dyn Reflect,
    path: &str,
    value: &Variant,
) -> Result<(), MemberError> {
    let segments = split_path(path)?;
    let Some((last, parents)) = segments.split_last() else {
        return Err(MemberError::InvalidPath(path.to_string()));
    };
    descend(target, parents)?.set_member(last, value)
}

pub fn read_path(target: &mut dyn Reflect, path: &str) -> Result<Variant, MemberError> {
    let segments = split_path(path)?;
    let Some((last, parents)) = segments.split_last() else {
        return Err(MemberError::InvalidPath(path.to_string()));
    };
    descend(target, parents)?.get_member(last)
}

// -------------------- value extraction used by setters --------------------

pub(crate) fn as_f32(v: &Variant) -> Option<f32> {
    v.as_f32_lossy()
}

pub(crate) fn as_i32(v: &Variant) -> Option<i32> {
    v.as_i64().and_then(|i| i32::try_from(i).ok())
}

pub(crate) fn as_string(v: &Variant) -> Option<String> {
    match v {
        Variant::String(s) => Some(s.to_string()),
        Variant::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

fn as_channel(v: &Variant) -> Option<u8> {
    v.as_i64().and_then(|i| u8::try_from(i).ok())
}

// -------------------- math structs --------------------

impl Described for Vector2 {
    const TYPE_NAME: &'static str = "Vector2";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "x",
            kind: VariantKind::Float,
            get: |v| v.x.into(),
            set: Some(|v, val| {
                v.x = as_f32(val)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "y",
            kind: VariantKind::Float,
            get: |v| v.y.into(),
            set: Some(|v, val| {
                v.y = as_f32(val)?;
                Some(())
            }),
            nested: None,
        },
    ];
}

impl Described for Vector3 {
    const TYPE_NAME: &'static str = "Vector3";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "x",
            kind: VariantKind::Float,
            get: |v| v.x.into(),
            set: Some(|v, val| {
                v.x = as_f32(val)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "y",
            kind: VariantKind::Float,
            get: |v| v.y.into(),
            set: Some(|v, val| {
                v.y = as_f32(val)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "z",
            kind: VariantKind::Float,
            get: |v| v.z.into(),
            set: Some(|v, val| {
                v.z = as_f32(val)?;
                Some(())
            }),
            nested: None,
        },
    ];
}

// Channels are 0..=255.
impl Described for Color {
    const TYPE_NAME: &'static str = "Color";
    const MEMBERS: &'static [MemberDef<Self>] = &[
        MemberDef {
            name: "r",
            kind: VariantKind::Int,
            get: |c| (c.r as i32).into(),
            set: Some(|c, val| {
                c.r = as_channel(val)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "g",
            kind: VariantKind::Int,
            get: |c| (c.g as i32).into(),
            set: Some(|c, val| {
                c.g = as_channel(val)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "b",
            kind: VariantKind::Int,
            get: |c| (c.b as i32).into(),
            set: Some(|c, val| {
                c.b = as_channel(val)?;
                Some(())
            }),
            nested: None,
        },
        MemberDef {
            name: "a",
            kind: VariantKind::Int,
            get: |c| (c.a as i32).into(),
            set: Some(|c, val| {
                c.a = as_channel(val)?;
                Some(())
            }),
            nested: None,
        },
    ];
}
