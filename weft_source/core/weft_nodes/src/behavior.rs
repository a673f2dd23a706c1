use std::any::Any;

use crate::reflect::{Described, Reflect};

/// Capability attached to a `UiNode`. At most one instance per type name per node.
pub trait Behavior: Reflect {
    /// Structural behaviors (the rect transform) are created with the node and
    /// are never added afterwards by bindings.
    fn structural(&self) -> bool;
    fn as_reflect(&self) -> &dyn Reflect;
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Marker for concrete behavior types. Gives them `Behavior` and a default constructor.
pub trait BehaviorType: Described + Default {
    const STRUCTURAL: bool = false;
}

impl<T: BehaviorType> Behavior for T {
    fn structural(&self) -> bool {
        T::STRUCTURAL
    }
    fn as_reflect(&self) -> &dyn Reflect {
        self
    }
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        self
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
