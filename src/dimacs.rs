use std::fs;

use bit_set::BitSet;
use nom::IResult;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::map_res;
use nom::sequence::tuple;

use crate::error::GraphParseError;
use crate::instance::VertexId;

/// reads an instance from a file, returns (n, m, adj_list).
/// n and m are the declared counts of the problem line; the adjacency list is
/// built from the edge lines (duplicate edges collapsed).
pub fn read_from_file(filename: &str) -> Result<(usize, usize, Vec<Vec<VertexId>>), GraphParseError> {
    let content = fs::read_to_string(filename)
        .map_err(|e| GraphParseError::Io { path: filename.to_string(), source: e })?
        .replace('\r', "");
    read_from_str(content.as_str())
}

/** reads an instance from a string (DIMACS format).
lines starting with 'c' are comments; exactly one line `p <name> <n> <m>`
declares the sizes; lines `e <u> <v>` declare one edge each (1-indexed).
any other line is ignored. */
pub fn read_from_str(content: &str) -> Result<(usize, usize, Vec<Vec<VertexId>>), GraphParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut adj_list: Vec<Vec<VertexId>> = Vec::new();
    let mut known: Vec<BitSet> = Vec::new(); // known[u]: edges already registered
    for raw_line in content.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            if header.is_some() {
                return Err(GraphParseError::DuplicateHeader);
            }
            match read_header(line) {
                Ok(("", (n, m))) => {
                    adj_list = vec![Vec::new(); n];
                    known = vec![BitSet::default(); n];
                    header = Some((n, m));
                }
                _ => return Err(GraphParseError::MalformedLine(line.to_string())),
            }
        } else if line.starts_with('e') {
            let (u, v) = match read_edge(line) {
                Ok(("", endpoints)) => endpoints,
                _ => return Err(GraphParseError::MalformedLine(line.to_string())),
            };
            let (n, _) = header.ok_or(GraphParseError::MissingHeader)?;
            if u == 0 || v == 0 || u > n || v > n {
                return Err(GraphParseError::VertexOutOfRange { u, v, n });
            }
            if u == v {
                return Err(GraphParseError::SelfLoop(u));
            }
            let (a, b) = (u - 1, v - 1); // indices start at 1 in the DIMACS format
            if !known[a].contains(b) { // some files repeat each edge in both directions
                known[a].insert(b);
                known[b].insert(a);
                adj_list[a].push(b);
                adj_list[b].push(a);
            }
        }
        // any other line is ignored
    }
    match header {
        Some((n, m)) => Ok((n, m, adj_list)),
        None => Err(GraphParseError::MissingHeader),
    }
}

/// reads a positive integer
fn number(s: &str) -> IResult<&str, usize> {
    map_res(digit1, |digits: &str| digits.parse::<usize>())(s)
}

/// reads a header line `p <name> <n> <m>`, returning (n,m)
pub fn read_header(s: &str) -> IResult<&str, (usize, usize)> {
    let (rest, (_, _, _name, _, n, _, m, _)) = tuple((
        tag("p"),
        space1,
        take_till1(|c: char| c.is_whitespace()),
        space1,
        number,
        space1,
        number,
        space0,
    ))(s)?;
    Ok((rest, (n, m)))
}

/// reads an edge line `e <u> <v>` (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s: &str) -> IResult<&str, (usize, usize)> {
    let (rest, (_, _, u, _, v, _)) = tuple((
        tag("e"),
        space1,
        number,
        space1,
        number,
        space0,
    ))(s)?;
    Ok((rest, (u, v)))
}
