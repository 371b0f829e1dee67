//! DIMACS arc-list reader.
//!
//! Line types, 1-based vertex ids:
//!
//! ```text
//! c <comment>
//! p <kind> <vertices> <arcs>
//! a <u> <v> [w]      directed arc, weight defaults to 1
//! e <u> <v> [w]      undirected edge (`p edge` files)
//! n <id> s|t         flow source / sink
//! ```
//!
//! `p edge` problems produce an undirected list; every other kind is directed.

use std::io::BufRead;
use std::path::Path;

use gk_core::{Real, ensure_finite};
use gk_graph::Directedness;
use tracing::debug;

use crate::edge_list::EdgeList;
use crate::error::{ReadError, ReadResult};
use crate::parse::{content_lines, field, finish, one_based, optional_field};

/// Parsed `p` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub kind: String,
    pub vertices: usize,
    pub arcs: usize,
}

pub fn read_dimacs_file(path: &Path) -> ReadResult<EdgeList> {
    let file = std::fs::File::open(path)?;
    read_dimacs(std::io::BufReader::new(file))
}

pub fn read_dimacs<R: BufRead>(reader: R) -> ReadResult<EdgeList> {
    let mut problem: Option<Problem> = None;
    let mut list = EdgeList::new(0, Directedness::Directed);

    for line in content_lines(reader, 1, is_comment) {
        let (number, line) = line?;
        let mut tokens = line.split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };

        if tag == "p" {
            if problem.is_some() {
                return Err(ReadError::header(format!("second problem line on line {number}")));
            }
            let p = Problem {
                kind: field(&mut tokens, number, "problem kind")?,
                vertices: field(&mut tokens, number, "vertex count")?,
                arcs: field(&mut tokens, number, "arc count")?,
            };
            finish(&mut tokens, number)?;
            let directedness = if p.kind == "edge" {
                Directedness::Undirected
            } else {
                Directedness::Directed
            };
            list = EdgeList::new(p.vertices, directedness);
            problem = Some(p);
            continue;
        }

        let Some(p) = problem.as_ref() else {
            return Err(ReadError::header(format!(
                "line {number} ('{tag}') comes before the problem line"
            )));
        };
        match tag {
            "a" | "e" => {
                let u = one_based(field(&mut tokens, number, "tail")?, p.vertices, number)?;
                let v = one_based(field(&mut tokens, number, "head")?, p.vertices, number)?;
                let weight: Real = optional_field(&mut tokens, number, "weight")?.unwrap_or(1.0);
                let weight =
                    ensure_finite(weight, "arc weight").map_err(|e| ReadError::parse(number, e.to_string()))?;
                finish(&mut tokens, number)?;
                list.edges.push((u, v, weight));
            }
            "n" => {
                let id = one_based(field(&mut tokens, number, "node id")?, p.vertices, number)?;
                let role: String = field(&mut tokens, number, "node designator")?;
                finish(&mut tokens, number)?;
                match role.as_str() {
                    "s" => list.source = Some(id),
                    "t" => list.sink = Some(id),
                    other => {
                        return Err(ReadError::parse(number, format!("unknown node designator '{other}'")));
                    }
                }
            }
            other => return Err(ReadError::parse(number, format!("unknown line type '{other}'"))),
        }
    }

    let p = problem.ok_or_else(|| ReadError::header("missing problem line"))?;
    if list.len() != p.arcs {
        return Err(ReadError::CountMismatch {
            expected: p.arcs,
            found: list.len(),
        });
    }
    debug!(
        kind = %p.kind,
        vertices = list.num_vertices,
        arcs = list.len(),
        source = ?list.source,
        sink = ?list.sink,
        "read DIMACS file"
    );
    Ok(list)
}

fn is_comment(line: &str) -> bool {
    line == "c" || line.starts_with("c ") || line.starts_with("c\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> ReadResult<EdgeList> {
        read_dimacs(text.as_bytes())
    }

    #[test]
    fn reads_max_flow_problem() {
        let list = read(
            "c tiny flow network\n\
             p max 4 5\n\
             n 1 s\n\
             n 4 t\n\
             a 1 2 3\n\
             a 1 3 2\n\
             a 2 3 1\n\
             a 2 4 2\n\
             a 3 4 3\n",
        )
        .unwrap();
        assert_eq!(list.num_vertices, 4);
        assert_eq!(list.directedness, Directedness::Directed);
        assert_eq!(list.source, Some(0));
        assert_eq!(list.sink, Some(3));
        assert_eq!(list.edges[0], (0, 1, 3.0));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn missing_weight_defaults_to_one() {
        let list = read("p sp 2 1\na 2 1\n").unwrap();
        assert_eq!(list.edges, vec![(1, 0, 1.0)]);
    }

    #[test]
    fn edge_problems_are_undirected() {
        let list = read("p edge 3 2\ne 1 2\ne 2 3\n").unwrap();
        assert_eq!(list.directedness, Directedness::Undirected);
        assert_eq!(list.to_unweighted().unwrap().num_edges(), 4);
    }

    #[test]
    fn rejects_missing_or_duplicate_problem_line() {
        assert!(matches!(read("c nothing\n"), Err(ReadError::Header { .. })));
        assert!(matches!(read("a 1 2\np sp 2 1\n"), Err(ReadError::Header { .. })));
        assert!(matches!(read("p sp 2 0\np sp 2 0\n"), Err(ReadError::Header { .. })));
    }

    #[test]
    fn rejects_arc_count_mismatch() {
        let err = read("p sp 3 2\na 1 2\n").unwrap_err();
        assert!(matches!(err, ReadError::CountMismatch { expected: 2, found: 1 }));
    }

    #[test]
    fn huge_declared_arc_count_is_a_count_mismatch() {
        let err = read("p sp 2 18446744073709551615\na 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ReadError::CountMismatch {
                expected: usize::MAX,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_ids() {
        assert!(matches!(read("p sp 3 1\na 1 4\n"), Err(ReadError::Parse { line: 2, .. })));
        assert!(matches!(read("p max 3 0\nn 0 s\n"), Err(ReadError::Parse { line: 2, .. })));
    }

    #[test]
    fn rejects_unknown_lines() {
        assert!(matches!(read("p max 2 0\nn 1 x\n"), Err(ReadError::Parse { .. })));
        assert!(matches!(read("p max 2 0\nq 1 2\n"), Err(ReadError::Parse { .. })));
    }

    #[test]
    fn comment_lines_need_a_separator() {
        // "cx" is not a comment and is not a known line type either.
        assert!(read("p sp 1 0\ncx\n").is_err());
        assert!(read("c\np sp 1 0\nc\tdone\n").is_ok());
    }
}
