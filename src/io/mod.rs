/*!
# IO

Reading graphs from, and writing them to, plain text.

## Formats

- **List**: one line per vertex holding its out-neighbors, separated by whitespace.
  An empty line is a vertex without neighbors.
- **Matrix**: $\|V\|$ lines of $\|V\|$ `0`/`1` tokens.
- **Incidence**: $\|V\|$ lines of $\|E\|$ tokens from `-1`, `0` and `1`. Every column
  is one edge: `1`/`1` undirected, `1` at the tail and `-1` at the head otherwise.

Each reader first counts the dimensions of the text, sizes an empty graph accordingly,
and then populates it from the same text, checking that every line agrees with the count.

Writing is the `Display` rendering of each store, which produces exactly these formats.
*/

mod incidence;
mod list;
mod matrix;

pub use self::incidence::*;
pub use self::list::*;
pub use self::matrix::*;

use crate::{graph::*, Error, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

/// Implemented by readers of one specific format.
pub trait GraphReader<G> {
    /// Parses a whole text.
    fn read_str(&self, text: &str) -> Result<G>;

    /// Reads a graph from any buffered reader.
    ///
    /// # Errors
    /// Fails with [Error::FileUnreadable] if the reader fails, or with a parse error if the
    /// text is not a valid graph in the expected format.
    fn try_read_graph<R>(&self, mut reader: R) -> Result<G>
    where
        R: BufRead,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.read_str(&text)
    }

    /// Reads a graph from a file.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Writes a store in the format its reader accepts.
pub trait GraphWriter
where
    Self: std::fmt::Display,
{
    fn try_write_graph<W>(&self, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        write!(writer, "{}", self)
            .and_then(|_| writer.flush())
            .map_err(Error::FileUnwritable)
    }

    fn try_write_graph_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let file = File::create(path).map_err(Error::FileUnwritable)?;
        self.try_write_graph(BufWriter::new(file))
    }
}

impl GraphWriter for ListGraph {}
impl GraphWriter for MatrixGraph {}
impl GraphWriter for IncidenceGraph {}
impl GraphWriter for GraphRepr {}

/// Reads a graph of the given kind.
pub fn load<R>(kind: GraphKind, reader: R) -> Result<GraphRepr>
where
    R: BufRead,
{
    let res = match kind {
        GraphKind::List => GraphRepr::List(ListReader::new().try_read_graph(reader)?),
        GraphKind::Matrix => GraphRepr::Matrix(MatrixReader.try_read_graph(reader)?),
        GraphKind::Incidence => GraphRepr::Incidence(IncidenceReader.try_read_graph(reader)?),
    };
    Ok(res)
}

/// Reads a graph of the given kind from a file.
pub fn load_file<P>(kind: GraphKind, path: P) -> Result<GraphRepr>
where
    P: AsRef<Path>,
{
    load(kind, BufReader::new(File::open(path)?))
}

/// Splits a line into whitespace-separated tokens and parses each of them.
/// `line` is zero-based; errors report it one-based.
fn parse_tokens<T>(line: usize, text: &str) -> Result<Vec<T>>
where
    T: FromStr,
{
    text.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| Error::MalformedToken {
                line: line + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Checks that a dense format has exactly `expected` rows.
fn check_row_count(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            line: expected.min(found) + 1,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::*;
    use std::io::Cursor;

    pub(super) const SCENARIO_LIST: &str = "1 2 3\n0 2\n0 1 4\n0\n2 5\n4\n";

    pub(super) const SCENARIO_MATRIX: &str = "\
0 1 1 1 0 0
1 0 1 0 0 0
1 1 0 0 1 0
1 0 0 0 0 0
0 0 1 0 0 1
0 0 0 0 1 0
";

    pub(super) const SCENARIO_INCIDENCE: &str = "\
1 1 1 0 0 0
1 0 0 1 0 0
0 1 0 1 1 0
0 0 1 0 0 0
0 0 0 0 1 1
0 0 0 0 0 1
";

    fn scenario(kind: GraphKind) -> GraphRepr {
        let text = match kind {
            GraphKind::List => SCENARIO_LIST,
            GraphKind::Matrix => SCENARIO_MATRIX,
            GraphKind::Incidence => SCENARIO_INCIDENCE,
        };
        load(kind, Cursor::new(text)).unwrap()
    }

    #[test]
    fn scenario_in_every_encoding() {
        for kind in [GraphKind::List, GraphKind::Matrix, GraphKind::Incidence] {
            let g = scenario(kind);
            assert_eq!(g.kind(), kind);
            assert_eq!(g.vertex_size(), 6);
            assert!(g.is_connected(), "{:?}", kind);
            assert_eq!(g.shortest_path(&VertexId(0), &VertexId(1)), Some(1));
            assert_eq!(g.shortest_path(&VertexId(0), &VertexId(5)), Some(3));
            assert_eq!(g.shortest_path(&VertexId(3), &VertexId(5)), Some(4));
            assert_eq!(g.spanning_tree(VertexId(0)).unwrap().edge_size(), 5);
        }
    }

    #[test]
    fn scenario_list_complement() {
        let c = match scenario(GraphKind::List).complement() {
            GraphRepr::List(c) => c,
            other => panic!("unexpected kind {:?}", other.kind()),
        };
        let expected = ListGraph::from_adjacency(vec![
            vec![4, 5],
            vec![3, 4, 5],
            vec![3, 5],
            vec![1, 2, 4, 5],
            vec![0, 1, 3],
            vec![0, 1, 2, 3],
        ])
        .unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn scenario_matrix_complement() {
        let g = scenario(GraphKind::Matrix);
        let c = g.complement();
        for v in g.iter_vertices() {
            for w in g.iter_vertices().filter(|w| *w != v) {
                assert_eq!(c.has_arc(&v, &w), !g.has_arc(&v, &w));
            }
            assert!(!c.has_arc(&v, &v));
        }
    }

    #[test]
    fn scenario_incidence_complement() {
        let c = match scenario(GraphKind::Incidence).complement() {
            GraphRepr::Incidence(c) => c,
            other => panic!("unexpected kind {:?}", other.kind()),
        };
        let expected: [[i8; 9]; 6] = [
            [1, 1, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 1, 1, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 1, 1, 0, 0],
            [0, 0, 1, 0, 0, 1, 0, 1, 1],
            [1, 0, 0, 1, 0, 0, 0, 1, 0],
            [0, 1, 0, 0, 1, 0, 1, 0, 1],
        ];
        assert_eq!(c.edge_size(), 9);
        for (v, row) in expected.iter().enumerate() {
            let cells: Vec<i8> = c.incidence().row(v).iter().map(|x| x.value().abs()).collect();
            assert_eq!(cells, row.to_vec());
        }
        assert!(c.is_directed());
    }

    #[test]
    fn display_round_trips() {
        for kind in [GraphKind::List, GraphKind::Matrix, GraphKind::Incidence] {
            let g = scenario(kind);
            let mut buf = vec![];
            g.try_write_graph(&mut buf).unwrap();
            let again = load(kind, Cursor::new(buf)).unwrap();
            assert_eq!(again, g);
        }
    }

    #[test]
    fn missing_file_is_unreadable() {
        let res = load_file(GraphKind::List, "/nonexistent/graph.txt");
        assert!(matches!(res, Err(Error::FileUnreadable(_))));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("reprgraph-{}.txt", std::process::id()));
        let g = scenario(GraphKind::Matrix);
        g.try_write_graph_file(&path).unwrap();
        let again = load_file(GraphKind::Matrix, &path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(again, g);
    }

    #[test]
    fn tokens_report_one_based_lines() {
        assert!(matches!(
            parse_tokens::<usize>(2, "1 x"),
            Err(Error::MalformedToken { line: 3, token }) if token == "x"
        ));
    }
}
