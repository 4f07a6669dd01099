use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by the priority queues in [`crate::heap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    EmptyQueue,
}

impl Error for HeapError {}

impl Display for HeapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::EmptyQueue => write!(f, "Priority queue is empty"),
        }
    }
}

/// Possible errors that arise while reading or building a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    Io(String),
    Parse(String),
    VertexOutOfRange(String),
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            GraphError::Io(msg) => format!("Unable to read graph: {msg}"),
            GraphError::Parse(msg) => format!("Malformed graph description: {msg}"),
            GraphError::VertexOutOfRange(msg) => format!("Vertex out of range: {msg}"),
        };
        write!(f, "{message}")
    }
}

/// Possible errors that arise when computing a minimum spanning tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MstError {
    EmptyGraph,
    UnknownVertex(String),
    Disconnected(String),
    WeightOverflow(String),
    Heap(HeapError),
}

impl Error for MstError {}

impl Display for MstError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            MstError::EmptyGraph => String::from("The graph provided has no vertices"),
            MstError::UnknownVertex(msg) => format!("Unknown vertex: {msg}"),
            MstError::Disconnected(msg) => format!("Graph is not connected: {msg}"),
            MstError::WeightOverflow(msg) => format!("Tree weight does not fit the weight type: {msg}"),
            MstError::Heap(err) => format!("Priority queue failure: {err}"),
        };
        write!(f, "{message}")
    }
}

impl From<HeapError> for MstError {
    fn from(err: HeapError) -> Self {
        MstError::Heap(err)
    }
}
