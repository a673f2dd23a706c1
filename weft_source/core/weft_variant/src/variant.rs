// weft_variant/src/variant.rs

#![forbid(unsafe_code)]

use std::fmt;
use std::sync::Arc;

use weft_structs::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),

    F32(f32),
    F64(f64),
}

impl Number {
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(
            self,
            Number::I32(_) | Number::I64(_) | Number::U32(_) | Number::U64(_)
        )
    }

    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    #[inline]
    pub fn as_i64_lossy(&self) -> Option<i64> {
        match *self {
            Number::I32(v) => Some(v as i64),
            Number::I64(v) => Some(v),
            Number::U32(v) => Some(v as i64),
            Number::U64(v) => i64::try_from(v).ok(),
            Number::F32(_) | Number::F64(_) => None,
        }
    }

    #[inline]
    pub fn as_f64_lossy(&self) -> Option<f64> {
        match *self {
            Number::I32(v) => Some(v as f64),
            Number::I64(v) => Some(v as f64),
            Number::U32(v) => Some(v as f64),
            Number::U64(v) => Some(v as f64),
            Number::F32(v) => Some(v as f64),
            Number::F64(v) => Some(v),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I32(v) => write!(f, "{v}"),
            Number::I64(v) => write!(f, "{v}"),
            Number::U32(v) => write!(f, "{v}"),
            Number::U64(v) => write!(f, "{v}"),
            Number::F32(v) => write!(f, "{v}"),
            Number::F64(v) => write!(f, "{v}"),
        }
    }
}

/// Member of a registered enum type, e.g. `TextAnchor::MiddleCenter`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub type_name: Arc<str>,
    pub member: Arc<str>,
    pub ordinal: i64,
}

impl EnumValue {
    pub fn new(type_name: &str, member: &str, ordinal: i64) -> Self {
        Self {
            type_name: Arc::from(type_name),
            member: Arc::from(member),
            ordinal,
        }
    }
}

/// Dynamic value written into behavior members by the binding layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    // --- Nullary ---
    Null,

    // --- Primitives ---
    Bool(bool),
    Number(Number),
    Char(char),

    // --- Text ---
    String(Arc<str>),

    // --- Visual / math ---
    Color(Color),
    Vector2(Vector2),
    Vector3(Vector3),
    Sprite(Sprite),

    Enum(EnumValue),
}

/// Declared type of a behavior member. Used to check writes before they happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Bool,
    Int,
    Float,
    Char,
    String,
    Color,
    Vector2,
    Vector3,
    /// Optional sprite; `Variant::Null` clears it.
    Sprite,
    Enum(&'static str),
    /// Composite member only reachable through nested access.
    Composite(&'static str),
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantKind::Bool => write!(f, "bool"),
            VariantKind::Int => write!(f, "int"),
            VariantKind::Float => write!(f, "float"),
            VariantKind::Char => write!(f, "char"),
            VariantKind::String => write!(f, "string"),
            VariantKind::Color => write!(f, "Color"),
            VariantKind::Vector2 => write!(f, "Vector2"),
            VariantKind::Vector3 => write!(f, "Vector3"),
            VariantKind::Sprite => write!(f, "Sprite"),
            VariantKind::Enum(name) | VariantKind::Composite(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Null => write!(f, "null"),
            Variant::Bool(v) => write!(f, "{v}"),
            Variant::Number(v) => write!(f, "{v}"),
            Variant::Char(v) => write!(f, "{v}"),
            Variant::String(v) => write!(f, "{:?}", v.as_ref()),
            Variant::Color(v) => write!(f, "{v}"),
            Variant::Vector2(v) => write!(f, "({v})"),
            Variant::Vector3(v) => write!(f, "({v})"),
            Variant::Sprite(v) => write!(f, "<sprite:{} {}x{}>", v.source, v.width, v.height),
            Variant::Enum(v) => write!(f, "{}::{}", v.type_name, v.member),
        }
    }
}

// -------------------- Constructors --------------------

impl Variant {
    #[inline]
    pub const fn null() -> Self {
        Variant::Null
    }
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }

    #[inline]
    pub fn string<S: AsRef<str>>(s: S) -> Self {
        Variant::String(Arc::<str>::from(s.as_ref()))
    }

    /// Kind of the held value, `None` for `Null`.
    pub fn kind(&self) -> Option<VariantKind> {
        Some(match self {
            Variant::Null => return None,
            Variant::Bool(_) => VariantKind::Bool,
            Variant::Number(n) if n.is_float() => VariantKind::Float,
            Variant::Number(_) => VariantKind::Int,
            Variant::Char(_) => VariantKind::Char,
            Variant::String(_) => VariantKind::String,
            Variant::Color(_) => VariantKind::Color,
            Variant::Vector2(_) => VariantKind::Vector2,
            Variant::Vector3(_) => VariantKind::Vector3,
            Variant::Sprite(_) => VariantKind::Sprite,
            Variant::Enum(_) => return None,
        })
    }
}

// -------------------- Accessors --------------------

impl Variant {
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Variant::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Variant::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Any integer number widened to i64; enums yield their ordinal.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Variant::Number(n) => n.as_i64_lossy(),
            Variant::Enum(e) => Some(e.ordinal),
            _ => None,
        }
    }

    /// Any number, floats and integers alike.
    #[inline]
    pub fn as_f32_lossy(&self) -> Option<f32> {
        match *self {
            Variant::Number(n) => n.as_f64_lossy().map(|v| v as f32),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Variant::Char(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_color(&self) -> Option<Color> {
        match *self {
            Variant::Color(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Option<Vector2> {
        match *self {
            Variant::Vector2(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec3(&self) -> Option<Vector3> {
        match *self {
            Variant::Vector3(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sprite(&self) -> Option<&Sprite> {
        match self {
            Variant::Sprite(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Variant::Enum(e) => Some(e),
            _ => None,
        }
    }
}

// -------------------- From impls --------------------

impl From<bool> for Variant {
    #[inline]
    fn from(v: bool) -> Self {
        Variant::Bool(v)
    }
}
impl From<Number> for Variant {
    #[inline]
    fn from(v: Number) -> Self {
        Variant::Number(v)
    }
}
impl From<i32> for Variant {
    #[inline]
    fn from(v: i32) -> Self {
        Variant::Number(Number::I32(v))
    }
}
impl From<i64> for Variant {
    #[inline]
    fn from(v: i64) -> Self {
        Variant::Number(Number::I64(v))
    }
}
impl From<u32> for Variant {
    #[inline]
    fn from(v: u32) -> Self {
        Variant::Number(Number::U32(v))
    }
}
impl From<u64> for Variant {
    #[inline]
    fn from(v: u64) -> Self {
        Variant::Number(Number::U64(v))
    }
}
impl From<f32> for Variant {
    #[inline]
    fn from(v: f32) -> Self {
        Variant::Number(Number::F32(v))
    }
}
impl From<f64> for Variant {
    #[inline]
    fn from(v: f64) -> Self {
        Variant::Number(Number::F64(v))
    }
}
impl From<char> for Variant {
    #[inline]
    fn from(v: char) -> Self {
        Variant::Char(v)
    }
}

impl From<&str> for Variant {
    #[inline]
    fn from(v: &str) -> Self {
        Variant::string(v)
    }
}
impl From<String> for Variant {
    #[inline]
    fn from(v: String) -> Self {
        Variant::String(Arc::from(v))
    }
}

impl From<Color> for Variant {
    #[inline]
    fn from(v: Color) -> Self {
        Variant::Color(v)
    }
}
impl From<Vector2> for Variant {
    #[inline]
    fn from(v: Vector2) -> Self {
        Variant::Vector2(v)
    }
}
impl From<Vector3> for Variant {
    #[inline]
    fn from(v: Vector3) -> Self {
        Variant::Vector3(v)
    }
}
impl From<Sprite> for Variant {
    #[inline]
    fn from(v: Sprite) -> Self {
        Variant::Sprite(v)
    }
}
impl From<Option<Sprite>> for Variant {
    #[inline]
    fn from(v: Option<Sprite>) -> Self {
        v.map_or(Variant::Null, Variant::Sprite)
    }
}
impl From<EnumValue> for Variant {
    #[inline]
    fn from(v: EnumValue) -> Self {
        Variant::Enum(v)
    }
}
