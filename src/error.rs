use crate::element::{ElementId, ElementUuid, GraphId};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by graphs, views and algorithms.
///
/// All of them report a violated precondition of the caller.
/// Nothing is retried and no partial state is left behind.
#[derive(Debug, Error)]
pub enum Error {
    #[error("element {uuid} is already associated with graph {graph}")]
    AlreadyAssociated { graph: GraphId, uuid: ElementUuid },

    #[error("element {uuid} is not associated with graph {graph}")]
    NotAssociated { graph: GraphId, uuid: ElementUuid },

    #[error("edge {uuid} misses its source or target vertex")]
    MissingEndpoint { uuid: ElementUuid },

    #[error("endpoint {uuid} is not part of graph {graph}")]
    EndpointNotInGraph { graph: GraphId, uuid: ElementUuid },

    #[error("graph {graph} has no element with id {id}")]
    UnknownElementId { graph: GraphId, id: ElementId },

    #[error("element {uuid} is not part of the underlying graph")]
    NotInBaseGraph { uuid: ElementUuid },

    #[error("element {uuid} is disabled in this subgraph")]
    ElementDisabled { uuid: ElementUuid },

    #[error("element {uuid} belongs to another registry")]
    ForeignRegistry { uuid: ElementUuid },

    #[error("cannot traverse an empty graph")]
    EmptyGraph,

    #[error("no more delta steps pending")]
    NoMoreSteps,

    #[error("no items left to draw from")]
    EmptyPool,

    #[error("probability densities sum up to zero")]
    ZeroMass,

    #[error("unknown item {0}")]
    UnknownItem(ElementId),

    #[error("filter position {position} is out of range for {len} filters")]
    FilterPosition { position: usize, len: usize },

    #[error("negative cycle detected")]
    NegativeCycle,

    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("type '{type_name}' has no attribute '{attribute}'")]
    UnknownAttribute { type_name: String, attribute: String },

    #[error("invalid value '{value}' for attribute '{attribute}'")]
    InvalidAttributeValue { attribute: String, value: String },

    #[error("element kind '{0}' does not support this operation")]
    KindMismatch(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("storage backend rejected the operation: {0}")]
    Backend(String),
}
