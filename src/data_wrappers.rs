use std::cell::{RefCell, RefMut};
use std::cmp::Ordering;
use std::rc::Rc;
use crate::algorithm::Algorithm;
use crate::graph::{Edge, Weight};
use crate::heap::HeapIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VisitState {
    Unvisited,
    InProgress,
}

/// Per-run bookkeeping for one graph vertex. Borůvka uses `state` and `component`, Prim uses the
/// remaining fields.
#[derive(Clone, Debug)]
pub(crate) struct MstVertex<W> {
    pub(crate) vertex: usize,
    pub(crate) state: VisitState,
    pub(crate) component: usize,
    pub(crate) parent: Option<usize>,
    pub(crate) incoming_edge: Option<Edge<W>>,
    /// Tentative distance to the tree, `None` until some edge reaches the vertex
    pub(crate) d: Option<W>,
    pub(crate) seen: bool,
    pub(crate) index: usize,
}

impl<W: Weight> MstVertex<W> {
    pub(crate) fn new(vertex: usize) -> Self {
        MstVertex {
            vertex,
            state: VisitState::Unvisited,
            component: 0,
            parent: None,
            incoming_edge: None,
            d: None,
            seen: false,
            index: 0,
        }
    }
}

/// Shared handle to an [`MstVertex`], so that Prim can lower `d` on a record the heap holds.
/// Ordered by tentative distance, then by vertex.
#[derive(Debug)]
pub(crate) struct VertexRef<W>(Rc<RefCell<MstVertex<W>>>);

impl<W: Weight> VertexRef<W> {
    pub(crate) fn new(record: MstVertex<W>) -> Self {
        VertexRef(Rc::new(RefCell::new(record)))
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, MstVertex<W>> {
        self.0.borrow_mut()
    }
}

impl<W> Clone for VertexRef<W> {
    fn clone(&self) -> Self {
        VertexRef(Rc::clone(&self.0))
    }
}

impl<W: Weight> Ord for VertexRef<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        if Rc::ptr_eq(&self.0, &other.0) {
            return Ordering::Equal;
        }
        let (a, b) = (self.0.borrow(), other.0.borrow());
        compare_distances(a.d, b.d).then(a.vertex.cmp(&b.vertex))
    }
}

/// Orders tentative distances with an unreached vertex (`None`) after every reached one.
fn compare_distances<W: Weight>(a: Option<W>, b: Option<W>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl<W: Weight> PartialOrd for VertexRef<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for VertexRef<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for VertexRef<W> {}

impl<W> HeapIndex for VertexRef<W> {
    fn put_index(&mut self, index: usize) {
        self.0.borrow_mut().index = index;
    }

    fn get_index(&self) -> usize {
        self.0.borrow().index
    }
}

/// The outcome of a minimum spanning tree computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstResult<W> {
    /// The algorithm that produced this tree.
    pub algorithm: Algorithm,
    /// Sum of the weights of the tree edges.
    pub total_weight: W,
    /// The tree edges, in the order the algorithm selected them.
    pub edges: Vec<Edge<W>>,
}
