//! Matrix-Market coordinate reader.
//!
//! Accepts `%%MatrixMarket matrix coordinate {real|integer|pattern}
//! {general|symmetric}`. Row `i`, column `j` becomes the edge `i-1 -> j-1`;
//! a symmetric matrix becomes an undirected graph.

use std::io::BufRead;
use std::path::Path;

use gk_core::{Real, ensure_finite};
use gk_graph::Directedness;
use tracing::debug;

use crate::edge_list::EdgeList;
use crate::error::{ReadError, ReadResult};
use crate::parse::{content_lines, field, finish, one_based};

const BANNER: &str = "%%matrixmarket";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Real,
    Integer,
    /// No value column; every entry has weight 1.
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    General,
    Symmetric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub field: ValueField,
    pub symmetry: Symmetry,
}

impl Banner {
    pub fn parse(line: &str) -> ReadResult<Self> {
        let lower = line.trim().to_ascii_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        let [banner, object, format, field, symmetry] = tokens.as_slice() else {
            return Err(ReadError::header(format!("expected five banner tokens in '{}'", line.trim())));
        };
        if *banner != BANNER {
            return Err(ReadError::header("missing %%MatrixMarket banner"));
        }
        if *object != "matrix" || *format != "coordinate" {
            return Err(ReadError::header(format!(
                "only 'matrix coordinate' is supported, got '{object} {format}'"
            )));
        }
        let field = match *field {
            "real" => ValueField::Real,
            "integer" => ValueField::Integer,
            "pattern" => ValueField::Pattern,
            other => return Err(ReadError::header(format!("unsupported field '{other}'"))),
        };
        let symmetry = match *symmetry {
            "general" => Symmetry::General,
            "symmetric" => Symmetry::Symmetric,
            other => return Err(ReadError::header(format!("unsupported symmetry '{other}'"))),
        };
        Ok(Self { field, symmetry })
    }

    fn directedness(&self) -> Directedness {
        match self.symmetry {
            Symmetry::General => Directedness::Directed,
            Symmetry::Symmetric => Directedness::Undirected,
        }
    }
}

pub fn read_matrix_market_file(path: &Path) -> ReadResult<EdgeList> {
    let file = std::fs::File::open(path)?;
    read_matrix_market(std::io::BufReader::new(file))
}

pub fn read_matrix_market<R: BufRead>(mut reader: R) -> ReadResult<EdgeList> {
    let mut first = String::new();
    if reader.read_line(&mut first)? == 0 {
        return Err(ReadError::header("empty input"));
    }
    let banner = Banner::parse(&first)?;
    let mut lines = content_lines(reader, 2, |line| line.starts_with('%'));

    let (number, size_line) = lines
        .next()
        .ok_or_else(|| ReadError::header("missing size line"))??;
    let mut tokens = size_line.split_whitespace();
    let rows: usize = field(&mut tokens, number, "row count")?;
    let cols: usize = field(&mut tokens, number, "column count")?;
    let declared: usize = field(&mut tokens, number, "entry count")?;
    finish(&mut tokens, number)?;
    if rows != cols {
        return Err(ReadError::header(format!("matrix is {rows} x {cols}, not square")));
    }

    let mut list = EdgeList::new(rows, banner.directedness());
    for line in lines {
        let (number, line) = line?;
        if list.len() == declared {
            return Err(ReadError::CountMismatch {
                expected: declared,
                found: declared + 1,
            });
        }
        let mut tokens = line.split_whitespace();
        let row = one_based(field(&mut tokens, number, "row index")?, rows, number)?;
        let col = one_based(field(&mut tokens, number, "column index")?, rows, number)?;
        let weight = match banner.field {
            ValueField::Pattern => 1.0,
            ValueField::Integer => field::<i64, _>(&mut tokens, number, "integer value")? as Real,
            ValueField::Real => {
                let value = field(&mut tokens, number, "real value")?;
                ensure_finite(value, "matrix value").map_err(|e| ReadError::parse(number, e.to_string()))?
            }
        };
        finish(&mut tokens, number)?;
        list.edges.push((row, col, weight));
    }

    if list.len() != declared {
        return Err(ReadError::CountMismatch {
            expected: declared,
            found: list.len(),
        });
    }
    debug!(
        vertices = list.num_vertices,
        entries = list.len(),
        field = ?banner.field,
        symmetry = ?banner.symmetry,
        "read Matrix-Market file"
    );
    Ok(list)
}
