//! Field descriptor tables for tabular records (CSV rows, XML record elements).

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Bool,
    Text,
}

impl FieldKind {
    /// Value an empty cell stands for.
    pub fn zero(self) -> &'static str {
        match self {
            FieldKind::Int | FieldKind::Float => "0",
            FieldKind::Bool => "false",
            FieldKind::Text => "",
        }
    }
}

/// One persisted field of `R`. `get` yields the canonical text form, `set` parses it back.
pub struct FieldDef<R: 'static> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub get: fn(&R) -> String,
    pub set: fn(&mut R, &str) -> Result<(), String>,
}

pub trait Record: Default + 'static {
    const TYPE_NAME: &'static str;
    const FIELDS: &'static [FieldDef<Self>];

    fn field(name: &str) -> Option<&'static FieldDef<Self>> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }
}

/// Parses a trimmed value, for use in `FieldDef::set`.
pub fn parse_field<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| format!("'{raw}': {e}"))
}

/// `true` case-insensitively, anything else is `false`.
pub fn parse_bool_lenient(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Applies the shared cell rules: a blank non-text cell means the kind's zero
/// value, booleans are lenient, and a failed parse keeps the current value with
/// a warning. Text cells are passed through as-is, whitespace included.
pub(crate) fn assign_field<R>(record: &mut R, field: &FieldDef<R>, raw: &str, location: &str) {
    let value = if field.kind != FieldKind::Text && raw.trim().is_empty() {
        field.kind.zero()
    } else if field.kind == FieldKind::Bool {
        if parse_bool_lenient(raw) { "true" } else { "false" }
    } else {
        raw
    };

    if let Err(e) = (field.set)(record, value) {
        log::warn!("{location}: field '{}' keeps its default, {e}", field.name);
    }
}
