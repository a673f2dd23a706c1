use indexmap::IndexMap;
use weft_variant::VariantKind;

use crate::behavior::BehaviorType;
use crate::reflect::{Described, MemberDef};

/// Raw attribute dictionary of a node, in document order.
///
/// This is what the markup writer emits. Bound behavior values are not written
/// back here; use [`UiAttributes::set_attribute`] to record an edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiAttributes {
    values: IndexMap<String, String>,
}

impl UiAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: IndexMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Replaces in place when present, appends otherwise.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Described for UiAttributes {
    const TYPE_NAME: &'static str = "UiAttributes";
    const MEMBERS: &'static [MemberDef<Self>] = &[MemberDef {
        name: "count",
        kind: VariantKind::Int,
        get: |a| (a.values.len() as i64).into(),
        set: None,
        nested: None,
    }];
}

impl BehaviorType for UiAttributes {}
