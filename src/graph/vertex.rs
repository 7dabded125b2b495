/// ID for vertices, which are essentially `usize`.
///
/// Vertices of every graph store are numbered contiguously from zero.
/// Removing a vertex renumbers all vertices after it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub const MIN: VertexId = VertexId(0);
    pub const MAX: VertexId = VertexId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The ID this vertex gets after `removed` is taken out of the graph.
    ///
    /// Returns `None` for `removed` itself.
    pub fn after_removal_of(&self, removed: &VertexId) -> Option<Self> {
        match self.0.cmp(&removed.0) {
            std::cmp::Ordering::Less => Some(*self),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self(self.0 - 1)),
        }
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(x: usize) -> Self {
        Self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renumbering() {
        let removed = VertexId(3);
        assert_eq!(VertexId(1).after_removal_of(&removed), Some(VertexId(1)));
        assert_eq!(VertexId(3).after_removal_of(&removed), None);
        assert_eq!(VertexId(7).after_removal_of(&removed), Some(VertexId(6)));
    }
}
