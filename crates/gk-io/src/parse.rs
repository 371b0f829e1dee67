//! Token helpers shared by the line-oriented readers.

use std::io::BufRead;
use std::str::FromStr;

use gk_core::Vertex;

use crate::error::{ReadError, ReadResult};

/// Trimmed lines that are neither blank nor comments, numbered from
/// `first_number`.
pub(crate) fn content_lines<R: BufRead>(
    reader: R,
    first_number: usize,
    is_comment: fn(&str) -> bool,
) -> impl Iterator<Item = ReadResult<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(i, line)| match line {
            Err(e) => Some(Err(e.into())),
            Ok(line) => {
                let trimmed = line.trim();
                (!trimmed.is_empty() && !is_comment(trimmed))
                    .then(|| Ok((first_number + i, trimmed.to_owned())))
            }
        })
}

/// Parse the next whitespace token as `T`, naming `what` on failure.
pub(crate) fn field<'t, T, I>(tokens: &mut I, line: usize, what: &str) -> ReadResult<T>
where
    T: FromStr,
    I: Iterator<Item = &'t str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| ReadError::parse(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| ReadError::parse(line, format!("invalid {what} '{token}'")))
}

/// Like [`field`], but a missing token yields `None`.
pub(crate) fn optional_field<'t, T, I>(tokens: &mut I, line: usize, what: &str) -> ReadResult<Option<T>>
where
    T: FromStr,
    I: Iterator<Item = &'t str>,
{
    match tokens.next() {
        None => Ok(None),
        Some(token) => token
            .parse()
            .map(Some)
            .map_err(|_| ReadError::parse(line, format!("invalid {what} '{token}'"))),
    }
}

/// Convert a 1-based file index into a vertex in `[0, n)`.
pub(crate) fn one_based(raw: usize, n: usize, line: usize) -> ReadResult<Vertex> {
    if raw == 0 || raw > n {
        return Err(ReadError::parse(
            line,
            format!("index {raw} is outside 1..={n}"),
        ));
    }
    Ok(raw - 1)
}

/// Reject anything left on a line after the expected fields.
pub(crate) fn finish<'t, I>(tokens: &mut I, line: usize) -> ReadResult<()>
where
    I: Iterator<Item = &'t str>,
{
    match tokens.next() {
        None => Ok(()),
        Some(extra) => Err(ReadError::parse(line, format!("unexpected token '{extra}'"))),
    }
}
