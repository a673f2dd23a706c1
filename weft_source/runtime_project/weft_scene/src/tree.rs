use weft_binding::{ApplyReport, BindingEngine};
use weft_ids::NodeID;
use weft_nodes::{NodeArena, UiNode};

/// A parsed UI hierarchy: the arena plus the id of its `Window` root.
#[derive(Debug)]
pub struct SceneTree {
    pub arena: NodeArena,
    pub root: NodeID,
}

impl SceneTree {
    pub fn root_node(&self) -> Option<&UiNode> {
        self.arena.get(self.root)
    }

    pub fn get(&self, id: NodeID) -> Option<&UiNode> {
        self.arena.get(id)
    }

    pub fn get_mut(&mut self, id: NodeID) -> Option<&mut UiNode> {
        self.arena.get_mut(id)
    }

    /// Node ids, parents before children, siblings in document order.
    pub fn preorder(&self) -> Vec<NodeID> {
        self.arena.preorder(self.root)
    }

    /// First node with the given tag name, in pre-order.
    pub fn find(&self, name: &str) -> Option<NodeID> {
        self.preorder()
            .into_iter()
            .find(|&id| self.arena.get(id).is_some_and(|n| n.name == name))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Hands every node's stored attributes to `engine`, parents first.
    pub fn bind_all(&mut self, engine: &mut BindingEngine) -> ApplyReport {
        let mut total = ApplyReport::default();
        for id in self.preorder() {
            let Some(attributes) = self
                .arena
                .get(id)
                .and_then(|n| n.attributes())
                .map(|a| a.as_map().clone())
            else {
                continue;
            };
            let report = engine.apply_attributes(&mut self.arena, id, &attributes);
            total.written += report.written;
            total.suppressed += report.suppressed;
            total.placeholders.extend(report.placeholders);
            total.errors.extend(report.errors);
        }
        log::debug!(
            "bound {} nodes: {} writes, {} suppressed, {} errors",
            self.arena.len(),
            total.written,
            total.suppressed,
            total.errors.len()
        );
        total
    }
}
