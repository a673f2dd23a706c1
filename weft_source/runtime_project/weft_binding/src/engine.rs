use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use weft_ids::NodeID;
use weft_io::AssetPaths;
use weft_nodes::{BehaviorRegistry, NodeArena, UiNode, descend, split_path};
use weft_project::{MissingMappingPolicy, ProjectConfig};

use crate::convert::ValueConverter;
use crate::error::BindError;
use crate::mapping::{MappingEntry, MappingTable};

/// Outcome of one `apply_attributes` call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApplyReport {
    pub written: usize,
    /// Keys recorded as new placeholder rows during this call.
    pub placeholders: Vec<String>,
    /// Mapped attributes skipped because writes were suspended.
    pub suppressed: usize,
    pub errors: Vec<BindError>,
}

/// Applies raw attributes to nodes through the mapping table.
pub struct BindingEngine {
    table: MappingTable,
    registry: BehaviorRegistry,
    converter: ValueConverter,
    policy: MissingMappingPolicy,
    mapping_path: Option<PathBuf>,
    writes_suspended: bool,
}

impl BindingEngine {
    pub fn new(
        table: MappingTable,
        registry: BehaviorRegistry,
        converter: ValueConverter,
        policy: MissingMappingPolicy,
    ) -> Self {
        Self {
            table,
            registry,
            converter,
            policy,
            mapping_path: None,
            writes_suspended: false,
        }
    }

    /// Loads the table from `mapping_path` and persists back to it on shutdown.
    /// A file that exists but cannot be read is never overwritten: the engine
    /// starts empty and keeps no persist path.
    pub fn load(
        mapping_path: impl Into<PathBuf>,
        registry: BehaviorRegistry,
        converter: ValueConverter,
        policy: MissingMappingPolicy,
    ) -> Self {
        let mapping_path = mapping_path.into();
        match MappingTable::try_load(&mapping_path) {
            Ok(table) => {
                log::info!(
                    "loaded {} mapping rows from {}",
                    table.len(),
                    mapping_path.display()
                );
                Self::new(table, registry, converter, policy).with_persist_path(mapping_path)
            }
            Err(e) => {
                log::error!(
                    "mapping table {} unreadable ({e}), it will not be overwritten",
                    mapping_path.display()
                );
                Self::new(MappingTable::new(), registry, converter, policy)
            }
        }
    }

    /// Engine for a project: built-in behaviors, the project's sprite folder,
    /// mapping table and policy.
    pub fn for_project(config: &ProjectConfig, root: &Path) -> Self {
        let paths = config.resolve(root);
        let assets = AssetPaths {
            assets_root: paths.assets_root,
            sprites_dir: config.sprites_dir.clone(),
        };
        Self::load(
            paths.mapping_table,
            BehaviorRegistry::with_builtins(),
            ValueConverter::new(assets),
            config.missing_mapping,
        )
    }

    pub fn with_persist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mapping_path = Some(path.into());
        self
    }

    pub fn persist_path(&self) -> Option<&Path> {
        self.mapping_path.as_deref()
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut MappingTable {
        &mut self.table
    }

    pub fn registry(&self) -> &BehaviorRegistry {
        &self.registry
    }

    pub fn converter(&self) -> &ValueConverter {
        &self.converter
    }

    pub fn policy(&self) -> MissingMappingPolicy {
        self.policy
    }

    /// True once a missing key has switched writes off for good (`SuspendAll`).
    pub fn writes_suspended(&self) -> bool {
        self.writes_suspended
    }

    pub fn apply_attributes(
        &mut self,
        arena: &mut NodeArena,
        node_id: NodeID,
        attributes: &IndexMap<String, String>,
    ) -> ApplyReport {
        let mut report = ApplyReport::default();
        let Some(node) = arena.get_mut(node_id) else {
            let err = BindError::NodeNotFound(node_id);
            log::error!("{err}");
            report.errors.push(err);
            return report;
        };

        let mut call_suspended = false;
        for (name, raw) in attributes {
            let Some(entry) = self.table.get(name).cloned() else {
                if self.table.add_placeholder(name) {
                    log::warn!(
                        "no mapping for attribute '{name}' on <{}>, placeholder row added",
                        node.name
                    );
                    report.placeholders.push(name.clone());
                }
                match self.policy {
                    MissingMappingPolicy::SuspendAll => {
                        if !self.writes_suspended {
                            log::warn!(
                                "attribute writes suspended until the mapping table is completed"
                            );
                        }
                        self.writes_suspended = true;
                    }
                    MissingMappingPolicy::PerCall => call_suspended = true,
                }
                continue;
            };

            if self.writes_suspended || call_suspended {
                report.suppressed += 1;
                continue;
            }

            match self.bind_one(node, &entry, raw) {
                Ok(()) => report.written += 1,
                Err(e) => {
                    if e.is_warning() {
                        log::warn!("{e}");
                    } else {
                        log::error!("{e}");
                    }
                    report.errors.push(e);
                }
            }
        }
        report
    }

    fn bind_one(&self, node: &mut UiNode, entry: &MappingEntry, raw: &str) -> Result<(), BindError> {
        let key = || entry.key.clone();
        if entry.is_placeholder() {
            return Err(BindError::IncompleteMapping { key: key() });
        }

        let behavior_type = self
            .registry
            .get(&entry.component_type)
            .ok_or_else(|| BindError::UnknownBehavior {
                key: key(),
                type_name: entry.component_type.clone(),
            })?;
        let type_name = behavior_type.type_name;

        if !node.has_behavior(type_name) {
            if !entry.allow_add_component {
                return Err(BindError::BehaviorMissing {
                    key: key(),
                    type_name: type_name.to_string(),
                });
            }
            if behavior_type.structural {
                return Err(BindError::AddRefused {
                    key: key(),
                    type_name: type_name.to_string(),
                });
            }
            node.attach(behavior_type.create());
            log::debug!("attached '{type_name}' to <{}>", node.name);
        }

        let behavior = node
            .behavior_mut(type_name)
            .ok_or_else(|| BindError::BehaviorMissing {
                key: key(),
                type_name: type_name.to_string(),
            })?;

        let path_error = |source| BindError::PathResolution {
            key: key(),
            path: entry.property_path.clone(),
            source,
        };
        let segments = split_path(&entry.property_path).map_err(path_error)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(BindError::IncompleteMapping { key: key() });
        };
        let target = descend(behavior.as_reflect_mut(), parents).map_err(path_error)?;

        let value = self
            .converter
            .try_convert_value(raw, &entry.value_type)
            .map_err(|source| BindError::Conversion { key: key(), source })?;

        target
            .set_member(last, &value)
            .map_err(|source| BindError::Write { key: key(), source })
    }

    /// Persists the table if placeholders were added. Returns `false` when a
    /// write was needed but failed or no path is configured.
    pub fn shutdown(&mut self) -> bool {
        if !self.table.is_dirty() {
            return true;
        }
        let Some(path) = self.mapping_path.clone() else {
            log::warn!("mapping table changed but no persist path is configured");
            return false;
        };
        let ok = self.table.save(&path);
        if ok {
            log::info!(
                "persisted {} mapping rows to {}",
                self.table.len(),
                path.display()
            );
        }
        ok
    }
}

impl Drop for BindingEngine {
    fn drop(&mut self) {
        if self.table.is_dirty() && self.mapping_path.is_some() {
            self.shutdown();
        }
    }
}
