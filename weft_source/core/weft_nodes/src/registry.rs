//! Behavior type registry: type name -> constructor.

use indexmap::IndexMap;

use crate::behavior::{Behavior, BehaviorType};
use crate::behaviors::*;

#[derive(Debug, Clone, Copy)]
pub struct BehaviorEntry {
    pub type_name: &'static str,
    pub structural: bool,
    construct: fn() -> Box<dyn Behavior>,
}

impl BehaviorEntry {
    pub fn create(&self) -> Box<dyn Behavior> {
        (self.construct)()
    }
}

fn construct<T: BehaviorType>() -> Box<dyn Behavior> {
    Box::new(T::default())
}

#[derive(Debug, Clone, Default)]
pub struct BehaviorRegistry {
    entries: IndexMap<&'static str, BehaviorEntry>,
}

impl BehaviorRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every built-in behavior.
    pub fn with_builtins() -> Self {
        let mut reg = Self::default();
        reg.register::<RectTransform>();
        reg.register::<UiAttributes>();
        reg.register::<Image>();
        reg.register::<Text>();
        reg.register::<Button>();
        reg.register::<CanvasGroup>();
        reg.register::<LayoutElement>();
        reg
    }

    pub fn register<T: BehaviorType>(&mut self) {
        if self.entries.contains_key(T::TYPE_NAME) {
            log::warn!("behavior type '{}' registered twice, keeping the newest", T::TYPE_NAME);
        }
        self.entries.insert(
            T::TYPE_NAME,
            BehaviorEntry {
                type_name: T::TYPE_NAME,
                structural: T::STRUCTURAL,
                construct: construct::<T>,
            },
        );
    }

    /// Exact name first, then the last `.`-separated segment (`UnityEngine.UI.Image`).
    pub fn get(&self, name: &str) -> Option<&BehaviorEntry> {
        self.entries.get(name).or_else(|| {
            let short = name.rsplit('.').next()?;
            self.entries.get(short)
        })
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn Behavior>> {
        self.get(name).map(BehaviorEntry::create)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}
