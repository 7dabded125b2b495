use super::*;
use tracing::debug;

/// The vertex count of an adjacency-matrix text: the number of tokens on its first line.
pub fn count_matrix_vertices(text: &str) -> usize {
    text.lines()
        .next()
        .map(|line| line.split_whitespace().count())
        .unwrap_or(0)
}

/// Reads rows of `0`/`1` into a [MatrixGraph].
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixReader;

impl GraphReader<MatrixGraph> for MatrixReader {
    fn read_str(&self, text: &str) -> Result<MatrixGraph> {
        let vertex_size = count_matrix_vertices(text);
        let mut rows = Vec::with_capacity(vertex_size);
        for (v, line) in text.lines().enumerate() {
            let row: Vec<u8> = parse_tokens(v, line)?;
            let row = row
                .into_iter()
                .map(|x| match x {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => Err(Error::MalformedToken {
                        line: v + 1,
                        token: x.to_string(),
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            if row.len() != vertex_size {
                return Err(Error::DimensionMismatch {
                    line: v + 1,
                    expected: vertex_size,
                    found: row.len(),
                });
            }
            rows.push(row);
        }
        check_row_count(vertex_size, rows.len())?;
        debug!(vertices = vertex_size, "loaded adjacency matrix");
        MatrixGraph::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::tests::SCENARIO_MATRIX;

    #[test]
    fn counts_first_line() {
        assert_eq!(count_matrix_vertices(""), 0);
        assert_eq!(count_matrix_vertices(SCENARIO_MATRIX), 6);
    }

    #[test]
    fn reads_directed_cells() {
        let g = MatrixReader.read_str("0 1\n0 0\n").unwrap();
        assert!(g.has_arc(&VertexId(0), &VertexId(1)));
        assert!(!g.has_arc(&VertexId(1), &VertexId(0)));
        assert_eq!(
            g.iter_edges().collect::<Vec<_>>(),
            vec![Edge::directed(VertexId(0), VertexId(1))]
        );
    }

    #[test]
    fn short_row() {
        assert!(matches!(
            MatrixReader.read_str("0 1 0\n1 0\n0 0 0\n"),
            Err(Error::DimensionMismatch {
                line: 2,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn wrong_row_count() {
        assert!(matches!(
            MatrixReader.read_str("0 1\n1 0\n0 0\n"),
            Err(Error::DimensionMismatch {
                line: 3,
                expected: 2,
                found: 3
            })
        ));
        assert!(matches!(
            MatrixReader.read_str("0 1 1\n1 0 0\n"),
            Err(Error::DimensionMismatch {
                line: 3,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn only_zero_and_one() {
        assert!(matches!(
            MatrixReader.read_str("0 2\n0 0\n"),
            Err(Error::MalformedToken { line: 1, token }) if token == "2"
        ));
    }
}
