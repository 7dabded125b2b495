use super::*;
use tracing::debug;

/// Dimensions `(V, E)` of an incidence-matrix text.
///
/// `V` is the number of lines and `E` the number of tokens on the first one.
/// `-1` counts as one token.
pub fn count_incidence_dimensions(text: &str) -> (usize, usize) {
    let edge_size = text
        .lines()
        .next()
        .map(|line| line.split_whitespace().count())
        .unwrap_or(0);
    (text.lines().count(), edge_size)
}

/// Reads rows of `-1`/`0`/`1` into an [IncidenceGraph].
///
/// Every column must hold exactly two nonzero cells with at most one `-1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncidenceReader;

impl GraphReader<IncidenceGraph> for IncidenceReader {
    fn read_str(&self, text: &str) -> Result<IncidenceGraph> {
        let (vertex_size, edge_size) = count_incidence_dimensions(text);
        let mut rows = Vec::with_capacity(vertex_size);
        for (v, line) in text.lines().enumerate() {
            let row: Vec<i8> = parse_tokens(v, line)?;
            let row = row
                .into_iter()
                .map(|x| {
                    Incidence::try_from(x).map_err(|x| Error::MalformedToken {
                        line: v + 1,
                        token: x.to_string(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        check_row_count(vertex_size, rows.len())?;
        let res = IncidenceGraph::from_rows(rows, edge_size)?;
        debug!(
            vertices = vertex_size,
            edges = edge_size,
            directed = res.is_directed(),
            "loaded incidence matrix"
        );
        Ok(res)
    }
}
