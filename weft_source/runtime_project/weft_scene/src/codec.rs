//! Markup <-> node tree.

use std::fs;
use std::path::Path;

use weft_ids::NodeID;
use weft_markup::{Element, MarkupNode, WriteOptions, parse_markup, write_element};
use weft_nodes::{NodeArena, UiAttributes, UiNode};

use crate::error::SceneError;
use crate::tree::SceneTree;

pub const DOCUMENT_ROOT: &str = "Prefab";
pub const UI_ROOT: &str = "Window";

pub fn parse_document(markup: &str) -> Result<SceneTree, SceneError> {
    let document = parse_markup(markup)?;
    let Some(prefab) = document.root() else {
        return Err(SceneError::Structure("document has no root element".into()));
    };
    if prefab.name != DOCUMENT_ROOT {
        return Err(SceneError::Structure(format!(
            "root element is <{}>, expected <{DOCUMENT_ROOT}>",
            prefab.name
        )));
    }
    let Some(window) = prefab.first_child_element(UI_ROOT) else {
        return Err(SceneError::Structure(format!(
            "<{DOCUMENT_ROOT}> has no <{UI_ROOT}> child"
        )));
    };

    let mut arena = NodeArena::new();
    let root = arena.insert(node_from_element(window));
    build_children(&mut arena, root, window);
    log::debug!("parsed scene with {} nodes", arena.len());
    Ok(SceneTree { arena, root })
}

pub fn parse_document_file(path: impl AsRef<Path>) -> Result<SceneTree, SceneError> {
    let path = path.as_ref();
    let markup = fs::read_to_string(path).map_err(|e| {
        log::error!("cannot read {}: {e}", path.display());
        e
    })?;
    parse_document(&markup)
}

fn node_from_element(element: &Element) -> UiNode {
    UiNode::with_attributes(
        element.name.clone(),
        UiAttributes::from_map(element.attributes.clone()),
    )
}

fn build_children(arena: &mut NodeArena, parent: NodeID, element: &Element) {
    for child in element.child_elements() {
        if let Some(id) = arena.add_child(parent, node_from_element(child)) {
            build_children(arena, id, child);
        }
    }
}

/// Emits the whole tree wrapped in the document root.
pub fn serialize_tree(tree: &SceneTree) -> String {
    let mut prefab = Element::new(DOCUMENT_ROOT);
    if let Some(window) = element_from_node(&tree.arena, tree.root) {
        prefab.children.push(MarkupNode::Element(window));
    }
    write_element(&prefab, &WriteOptions::default())
}

/// Emits one node and its descendants, without the document root.
pub fn serialize_subtree(arena: &NodeArena, id: NodeID) -> String {
    match element_from_node(arena, id) {
        Some(element) => write_element(&element, &WriteOptions::default()),
        None => {
            log::warn!("serialize_subtree: node {id} does not exist");
            String::new()
        }
    }
}

fn element_from_node(arena: &NodeArena, id: NodeID) -> Option<Element> {
    let node = arena.get(id)?;
    let mut element = Element::new(&*node.name);
    if let Some(attributes) = node.attributes() {
        element.attributes = attributes.as_map().clone();
    }
    element.children = node
        .children
        .iter()
        .filter_map(|&child| element_from_node(arena, child))
        .map(MarkupNode::Element)
        .collect();
    Some(element)
}
