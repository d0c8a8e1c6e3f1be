// Copyright (c) 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading edge lists.
//!
//! An edge list is a plain text file without a header, one edge per line in
//! the form `from,to,minutes`. Fields are trimmed, blank lines are skipped
//! and the edge order is irrelevant. Distances must be positive.
//!
//! ```
//! use std::io::Cursor;
//! use rs_trains::{edgelist, Network};
//!
//! let edges = edgelist::read::<u32, _>(Cursor::new("A,B,10\nB,C,5\n")).unwrap();
//! let net = Network::from_edges(edges);
//! assert_eq!(net.num_cities(), 3);
//! ```

use crate::num::traits::Zero;

use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Error when reading an edge list.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
    #[error("data error on line {line}: {msg}")]
    Data { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read an edge list, returning the `(from, to, distance)` triples in file
/// order.
///
/// Duplicate edges are *not* filtered here, that happens when the triples
/// are inserted into a network (see
/// [`Network::from_edges`](crate::Network::from_edges)).
pub fn read<D, R>(reader: R) -> Result<Vec<(String, String, D)>>
where
    D: Copy + FromStr + PartialOrd + Zero,
    R: Read,
{
    let mut edges = vec![];

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let lineno = i + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<_> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(Error::Format {
                line: lineno,
                msg: format!("expected 3 fields, got {}", fields.len()),
            });
        }

        let dist = fields[2].parse::<D>().map_err(|_| Error::Format {
            line: lineno,
            msg: format!("invalid distance '{}'", fields[2]),
        })?;
        if dist <= D::zero() {
            return Err(Error::Data {
                line: lineno,
                msg: "distance must be positive".to_string(),
            });
        }

        edges.push((fields[0].to_string(), fields[1].to_string(), dist));
    }

    debug!("read {} edges", edges.len());
    Ok(edges)
}

/// Read an edge list from a file.
pub fn read_from_file<D, P>(path: P) -> Result<Vec<(String, String, D)>>
where
    D: Copy + FromStr + PartialOrd + Zero,
    P: AsRef<Path>,
{
    read(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::{read, Error};
    use std::io::Cursor;

    #[test]
    fn test_read() {
        let file = "Malmö,Göteborg,152\n\n  Göteborg , Stockholm , 211\n";

        let edges = read::<u32, _>(Cursor::new(file)).unwrap();
        assert_eq!(
            edges,
            vec![
                ("Malmö".to_string(), "Göteborg".to_string(), 152),
                ("Göteborg".to_string(), "Stockholm".to_string(), 211),
            ]
        );
    }

    #[test]
    fn test_missing_field() {
        match read::<u32, _>(Cursor::new("A,B,1\nB,C\n")) {
            Err(Error::Format { line: 2, .. }) => (),
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn test_invalid_distance() {
        match read::<u32, _>(Cursor::new("A,B,ten\n")) {
            Err(Error::Format { line: 1, .. }) => (),
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn test_nonpositive_distance() {
        match read::<u32, _>(Cursor::new("A,B,1\nA,C,0\n")) {
            Err(Error::Data { line: 2, .. }) => (),
            res => panic!("unexpected result: {:?}", res),
        }
    }
}
