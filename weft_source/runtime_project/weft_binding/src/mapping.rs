//! The binding schema: one `MappingEntry` per attribute name.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_io::{CodecError, DataFormat, FieldDef, FieldKind, Record, parse_bool_lenient};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    pub key: String,
    pub component_type: String,
    /// Dot-separated member chain, e.g. `colors.normalColor`.
    pub property_path: String,
    pub value_type: String,
    pub allow_add_component: bool,
}

impl MappingEntry {
    pub fn new(
        key: impl Into<String>,
        component_type: impl Into<String>,
        property_path: impl Into<String>,
        value_type: impl Into<String>,
        allow_add_component: bool,
    ) -> Self {
        Self {
            key: key.into(),
            component_type: component_type.into(),
            property_path: property_path.into(),
            value_type: value_type.into(),
            allow_add_component,
        }
    }

    /// Row recorded for an attribute nobody has mapped yet.
    pub fn placeholder(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            allow_add_component: true,
            ..Self::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.component_type.trim().is_empty()
            && self.property_path.trim().is_empty()
            && self.value_type.trim().is_empty()
    }
}

impl Record for MappingEntry {
    const TYPE_NAME: &'static str = "MappingEntry";
    const FIELDS: &'static [FieldDef<Self>] = &[
        FieldDef {
            name: "key",
            kind: FieldKind::Text,
            get: |e| e.key.clone(),
            set: |e, v| {
                e.key = v.trim().to_string();
                Ok(())
            },
        },
        FieldDef {
            name: "componentType",
            kind: FieldKind::Text,
            get: |e| e.component_type.clone(),
            set: |e, v| {
                e.component_type = v.trim().to_string();
                Ok(())
            },
        },
        FieldDef {
            name: "propertyPath",
            kind: FieldKind::Text,
            get: |e| e.property_path.clone(),
            set: |e, v| {
                e.property_path = v.trim().to_string();
                Ok(())
            },
        },
        FieldDef {
            name: "valueType",
            kind: FieldKind::Text,
            get: |e| e.value_type.clone(),
            set: |e, v| {
                e.value_type = v.trim().to_string();
                Ok(())
            },
        },
        FieldDef {
            name: "allowAddComponent",
            kind: FieldKind::Bool,
            get: |e| e.allow_add_component.to_string(),
            set: |e, v| {
                e.allow_add_component = parse_bool_lenient(v);
                Ok(())
            },
        },
    ];
}

/// Mapping rows keyed by attribute name. Tracks whether rows were added since
/// the last persist.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
    dirty: bool,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table; later rows with an already seen key are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = MappingEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            if entry.key.trim().is_empty() {
                log::warn!("mapping row without a key ignored");
                continue;
            }
            if table.index.contains_key(&entry.key) {
                log::warn!("duplicate mapping key '{}' ignored", entry.key);
                continue;
            }
            table.index.insert(entry.key.clone(), table.entries.len());
            table.entries.push(entry);
        }
        table
    }

    /// Reads a CSV table. A missing file, or one with no data rows, is an empty
    /// table. Any other failure is returned so the caller can avoid writing over
    /// a file it could not read.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        match weft_io::try_load::<Vec<MappingEntry>>(path, DataFormat::Csv) {
            Ok(entries) => Ok(Self::from_entries(entries)),
            Err(CodecError::MissingRows) => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }

    /// Like `try_load`, but a failure is logged and gives an empty table.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!(
                "mapping table {} not found, starting with an empty table",
                path.display()
            );
            return Self::new();
        }
        match Self::try_load(path) {
            Ok(table) => {
                log::info!("loaded {} mapping rows from {}", table.len(), path.display());
                table
            }
            Err(e) => {
                log::warn!(
                    "mapping table {} unreadable ({e}), starting with an empty table",
                    path.display()
                );
                Self::new()
            }
        }
    }

    /// Sorts by key and writes CSV. Clears the dirty flag on success.
    pub fn save(&mut self, path: impl AsRef<Path>) -> bool {
        self.sort();
        let ok = weft_io::save(&self.entries, path.as_ref(), DataFormat::Csv);
        if ok {
            self.dirty = false;
        }
        ok
    }

    pub fn get(&self, key: &str) -> Option<&MappingEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Adds or replaces a row and marks the table dirty.
    pub fn upsert(&mut self, entry: MappingEntry) {
        match self.index.get(&entry.key) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self.dirty = true;
    }

    /// Appends a placeholder row unless `key` is already present.
    pub fn add_placeholder(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.upsert(MappingEntry::placeholder(key));
        true
    }

    /// Ordinal (byte-wise) key order.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter().filter(|e| e.is_placeholder())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
