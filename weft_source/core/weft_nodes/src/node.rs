use std::borrow::Cow;

use weft_ids::NodeID;

use crate::behavior::{Behavior, BehaviorType};
use crate::reflect::Reflect;
use crate::behaviors::{RectTransform, UiAttributes};

/// One element of a UI tree. Children are owned through the arena; `parent` and
/// `children` only hold IDs.
pub struct UiNode {
    pub id: NodeID,
    pub name: Cow<'static, str>,
    pub parent: Option<NodeID>,
    pub children: Vec<NodeID>,
    behaviors: Vec<Box<dyn Behavior>>,
}

impl UiNode {
    /// Bare node with no behaviors.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: NodeID::nil(),
            name: name.into(),
            parent: None,
            children: Vec::new(),
            behaviors: Vec::new(),
        }
    }

    /// Node with the standard `RectTransform` and the given attribute dictionary.
    pub fn with_attributes(name: impl Into<Cow<'static, str>>, attributes: UiAttributes) -> Self {
        let mut node = Self::new(name);
        node.behaviors.push(Box::new(RectTransform::default()));
        node.behaviors.push(Box::new(attributes));
        node
    }

    pub fn has_behavior(&self, type_name: &str) -> bool {
        self.behaviors.iter().any(|b| b.type_name() == type_name)
    }

    pub fn behavior(&self, type_name: &str) -> Option<&(dyn Behavior + 'static)> {
        self.behaviors
            .iter()
            .find(|b| b.type_name() == type_name)
            .map(|b| b.as_ref())
    }

    pub fn behavior_mut(&mut self, type_name: &str) -> Option<&mut (dyn Behavior + 'static)> {
        self.behaviors
            .iter_mut()
            .find(|b| b.type_name() == type_name)
            .map(|b| b.as_mut())
    }

    pub fn get<T: BehaviorType>(&self) -> Option<&T> {
        self.behavior(T::TYPE_NAME)?.as_any().downcast_ref::<T>()
    }

    pub fn get_mut<T: BehaviorType>(&mut self) -> Option<&mut T> {
        self.behavior_mut(T::TYPE_NAME)?
            .as_any_mut()
            .downcast_mut::<T>()
    }

    /// Attaches `behavior` unless one of the same type is already present.
    /// Returns `false` (and drops the new instance) in that case.
    pub fn attach(&mut self, behavior: Box<dyn Behavior>) -> bool {
        if self.has_behavior(behavior.type_name()) {
            log::warn!(
                "node '{}' already has a '{}' behavior",
                self.name,
                behavior.type_name()
            );
            return false;
        }
        self.behaviors.push(behavior);
        true
    }

    pub fn detach(&mut self, type_name: &str) -> Option<Box<dyn Behavior>> {
        let index = self
            .behaviors
            .iter()
            .position(|b| b.type_name() == type_name)?;
        Some(self.behaviors.remove(index))
    }

    /// Type names of attached behaviors, in attach order.
    pub fn behavior_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.type_name()).collect()
    }

    pub fn attributes(&self) -> Option<&UiAttributes> {
        self.get::<UiAttributes>()
    }

    pub fn attributes_mut(&mut self) -> Option<&mut UiAttributes> {
        self.get_mut::<UiAttributes>()
    }
}

impl std::fmt::Debug for UiNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiNode")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("behaviors", &self.behavior_names())
            .finish()
    }
}
