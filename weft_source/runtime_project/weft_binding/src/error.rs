use thiserror::Error;
use weft_ids::NodeID;
use weft_nodes::MemberError;

use crate::convert::ConversionError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeID),
    #[error("'{key}': mapping row is incomplete")]
    IncompleteMapping { key: String },
    #[error("'{key}': unknown behavior type '{type_name}'")]
    UnknownBehavior { key: String, type_name: String },
    #[error("'{key}': node has no '{type_name}' and adding it is not allowed")]
    BehaviorMissing { key: String, type_name: String },
    #[error("'{key}': '{type_name}' is structural and cannot be added")]
    AddRefused { key: String, type_name: String },
    #[error("'{key}': cannot resolve '{path}': {source}")]
    PathResolution {
        key: String,
        path: String,
        source: MemberError,
    },
    #[error("'{key}': {source}")]
    Write { key: String, source: MemberError },
    #[error("'{key}': {source}")]
    Conversion {
        key: String,
        source: ConversionError,
    },
}

impl BindError {
    /// Expected situations that are worth a warning, not an error.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            BindError::IncompleteMapping { .. }
                | BindError::BehaviorMissing { .. }
                | BindError::AddRefused { .. }
        )
    }
}
