use weft_ids::NodeID;

use crate::node::UiNode;

#[derive(Debug)]
pub struct NodeArena {
    nodes: Vec<Option<UiNode>>,
    generations: Vec<u32>,
    free_indices: Vec<usize>,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeArena {
    pub fn new() -> Self {
        // Reserve index 0 as invalid/nil sentinel so first real node ID is 1.
        Self::with_capacity(1)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        // +1 for reserved nil sentinel slot at index 0.
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        let mut generations = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(None);
        generations.push(0);
        Self {
            nodes,
            generations,
            free_indices: Vec::new(),
        }
    }

    fn slot_valid(&self, id: NodeID) -> bool {
        !id.is_nil()
            && id.index() != 0
            && id.index() < self.nodes.len() as u32
            && self.generations[id.index() as usize] == id.generation()
    }

    /// Insert a detached node, returns NodeID with index and generation.
    pub fn insert(&mut self, mut node: UiNode) -> NodeID {
        // Reuse a previously freed slot in O(1).
        if let Some(index) = self.free_indices.pop() {
            let id = NodeID::from_parts(index as u32, self.generations[index]);
            node.id = id;
            self.nodes[index] = Some(node);
            return id;
        }

        let index = self.nodes.len();
        let id = NodeID::from_parts(index as u32, 0);
        node.id = id;
        self.nodes.push(Some(node));
        self.generations.push(0);
        id
    }

    /// Inserts `node` as the last child of `parent`. `None` if the parent is stale.
    pub fn add_child(&mut self, parent: NodeID, mut node: UiNode) -> Option<NodeID> {
        if !self.contains(parent) {
            return None;
        }
        node.parent = Some(parent);
        let id = self.insert(node);
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }
        Some(id)
    }

    /// Get a node by ID, returns None if generation doesn't match
    pub fn get(&self, id: NodeID) -> Option<&UiNode> {
        if !self.slot_valid(id) {
            return None;
        }
        self.nodes[id.index() as usize].as_ref()
    }

    pub fn get_mut(&mut self, id: NodeID) -> Option<&mut UiNode> {
        if !self.slot_valid(id) {
            return None;
        }
        self.nodes[id.index() as usize].as_mut()
    }

    /// Remove a single node, bumping the generation counter. Children are left in place.
    pub fn remove(&mut self, id: NodeID) -> Option<UiNode> {
        if !self.slot_valid(id) {
            return None;
        }

        let index = id.index() as usize;
        self.generations[index] = self.generations[index].wrapping_add(1);
        let removed = self.nodes[index].take();
        if removed.is_some() {
            self.free_indices.push(index);
        }
        removed
    }

    /// Removes `id` and all of its descendants, unlinking it from its parent.
    /// Returns the number of nodes removed.
    pub fn remove_subtree(&mut self, id: NodeID) -> usize {
        let Some(parent) = self.get(id).map(|n| n.parent) else {
            return 0;
        };
        if let Some(p) = parent.and_then(|p| self.get_mut(p)) {
            p.children.retain(|c| *c != id);
        }

        let mut removed = 0;
        for node_id in self.preorder(id) {
            if self.remove(node_id).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Depth-first, parent before children, children in order.
    pub fn preorder(&self, root: NodeID) -> Vec<NodeID> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            out.push(id);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Check if a NodeID is still valid
    pub fn contains(&self, id: NodeID) -> bool {
        self.slot_valid(id) && self.nodes[id.index() as usize].is_some()
    }

    /// Iterator over all valid nodes
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &UiNode)> {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, node)| {
                node.as_ref()
                    .map(|n| (NodeID::from_parts(index as u32, self.generations[index]), n))
            })
    }

    /// Clear all nodes
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.generations.clear();
        self.free_indices.clear();
        self.nodes.push(None);
        self.generations.push(0);
    }

    /// Number of active nodes
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|n| n.is_none())
    }
}
