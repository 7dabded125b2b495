use super::*;
use tracing::{debug, warn};

/// Counts the vertices of a neighbor-list text.
///
/// This is the number of lines, or one past the largest neighbor index if that is larger.
/// Tokens which are not indices are left for [ListReader] to report.
pub fn count_list_vertices(text: &str) -> usize {
    let mut res = 0usize;
    for (v, line) in text.lines().enumerate() {
        res = res.max(v + 1);
        for w in line.split_whitespace().filter_map(|t| t.parse::<usize>().ok()) {
            res = res.max(w.saturating_add(1));
        }
    }
    res
}

/// Neighbor indices at or above this are rejected unless the text has that many lines.
pub const DEFAULT_MAX_LIST_VERTEX_SIZE: usize = 1 << 20;

/// Reads the neighbor-list format into a [ListGraph].
///
/// Every entry becomes a directed edge, so an undirected edge needs an entry on both of its lines.
/// A neighbor index may point past the last line, which adds isolated vertices, but only up to
/// [ListReader::max_vertex_size]. Larger indices are reported as [Error::MalformedToken]
/// before anything is allocated.
///
/// # Examples
/// ```
/// use reprgraph::{graph::*, io::*};
///
/// let g: ListGraph = ListReader::new().read_str("1 2\n\n0\n").unwrap();
/// assert_eq!(g.vertex_size(), 3);
/// assert_eq!(g.neighbors(&VertexId(0)), &[VertexId(1), VertexId(2)]);
/// assert!(g.neighbors(&VertexId(1)).is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ListReader {
    max_vertex_size: usize,
}

impl Default for ListReader {
    fn default() -> Self {
        Self {
            max_vertex_size: DEFAULT_MAX_LIST_VERTEX_SIZE,
        }
    }
}

impl ListReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the largest vertex count a neighbor index may imply.
    pub fn set_max_vertex_size(&mut self, max_vertex_size: usize) {
        self.max_vertex_size = max_vertex_size;
    }

    /// Same as [ListReader::set_max_vertex_size], consuming and returning `self` for chaining.
    pub fn max_vertex_size(mut self, max_vertex_size: usize) -> Self {
        self.set_max_vertex_size(max_vertex_size);
        self
    }
}

impl GraphReader<ListGraph> for ListReader {
    fn read_str(&self, text: &str) -> Result<ListGraph> {
        let bound = self.max_vertex_size.max(text.lines().count());
        let mut rows = vec![];
        for (v, line) in text.lines().enumerate() {
            let row = parse_tokens::<usize>(v, line)?;
            if let Some(w) = row.iter().find(|w| **w >= bound) {
                warn!(line = v + 1, index = *w, bound, "neighbor index too large");
                return Err(Error::MalformedToken {
                    line: v + 1,
                    token: w.to_string(),
                });
            }
            rows.push(row);
        }
        let vertex_size = count_list_vertices(text);
        let mut res = ListGraph::with_vertices(vertex_size);
        for (v, row) in rows.into_iter().enumerate() {
            for w in row {
                res.add_edge(VertexId(v), VertexId(w), Direction::Directed)?;
            }
        }
        debug!(vertices = vertex_size, "loaded neighbor lists");
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::tests::SCENARIO_LIST;

    #[test]
    fn counts_lines_and_indices() {
        assert_eq!(count_list_vertices(""), 0);
        assert_eq!(count_list_vertices("\n\n"), 2);
        assert_eq!(count_list_vertices("4\n"), 5);
        assert_eq!(count_list_vertices(SCENARIO_LIST), 6);
    }

    #[test]
    fn neighbors_beyond_the_last_line() {
        let g = ListReader::new().read_str("3\n").unwrap();
        assert_eq!(g.vertex_size(), 4);
        assert!(g.has_arc(&VertexId(0), &VertexId(3)));
        assert_eq!(g.out_neighbors(&VertexId(3)).count(), 0);
    }

    #[test]
    fn keeps_duplicates_and_self_loops() {
        let g = ListReader::new().read_str("0 1 1\n").unwrap();
        assert_eq!(g.neighbors(&VertexId(0)), &[VertexId(0), VertexId(1), VertexId(1)]);
    }

    #[test]
    fn huge_index_is_rejected_before_allocating() {
        assert!(matches!(
            ListReader::new().read_str("18446744073709551615\n"),
            Err(Error::MalformedToken { line: 1, token }) if token == "18446744073709551615"
        ));
        assert!(matches!(
            ListReader::new().read_str("0\n100000000000\n"),
            Err(Error::MalformedToken { line: 2, .. })
        ));
    }

    #[test]
    fn cap_is_configurable() {
        let reader = ListReader::new().max_vertex_size(4);
        assert_eq!(reader.read_str("3\n").unwrap().vertex_size(), 4);
        assert!(reader.read_str("4\n").is_err());
        // indices below the line count are always fine
        assert_eq!(reader.read_str("5\n\n\n\n\n\n").unwrap().vertex_size(), 6);
    }

    #[test]
    fn negative_index_is_malformed() {
        assert!(matches!(
            ListReader::new().read_str("1\n-1\n"),
            Err(Error::MalformedToken { line: 2, token }) if token == "-1"
        ));
    }
}
