use std::fmt::{Display, Formatter};

/// The minimum spanning tree algorithms available.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Repeatedly merges components along their cheapest outgoing edges.
    Boruvka,
    /// Grows a single tree from a source vertex, driven by an indexed heap.
    Prim,
}

impl Algorithm {
    /// Maps the numeric selector used on the command line: 0 for Borůvka, 1 for Prim.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            0 => Some(Algorithm::Boruvka),
            1 => Some(Algorithm::Prim),
            _ => None,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Boruvka => write!(f, "Boruvka"),
            Algorithm::Prim => write!(f, "Prim indexed heaps"),
        }
    }
}
