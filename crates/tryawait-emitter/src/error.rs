use thiserror::Error;
use tryawait_parser::NodeIndex;

/// Failures surfaced by the host collaborators (resolver, rewriter, walker)
/// and by plugin declaration.
///
/// Visitors forward collaborator errors to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("node {0:?} does not exist in the arena")]
    MissingNode(NodeIndex),

    #[error("expected {expected}, found {found}")]
    UnexpectedNode {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown helper `{0}`")]
    UnknownHelper(String),

    #[error("compilation unit root is not a source file")]
    MissingRoot,

    #[error("tree nesting exceeds the depth limit at node {node:?}")]
    DepthLimitExceeded { node: NodeIndex },

    #[error("requires host API version {required}, but was loaded by version {actual}")]
    IncompatibleHost { required: u32, actual: u32 },
}
