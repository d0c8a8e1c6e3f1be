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

//! Shortest route search algorithms.
//!
//! The algorithms in [`dfs`] search the network recursively and form a
//! progression: an exhaustive search bounded only by a distance budget, a
//! loop-avoiding variant and a branch-and-bound variant. [`dijkstra`] is the
//! classic priority-queue algorithm and the fastest of the family. On the
//! same network the loop-avoiding search, the branch-and-bound search and
//! Dijkstra return the same distances.

use thiserror::Error;

pub mod dfs;
pub mod dijkstra;

/// Error returned by a failed route search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One of the endpoints is not registered in the network.
    #[error("city {0} not found")]
    CityNotFound(String),
    /// A budgeted search branch ran out of its distance allowance.
    ///
    /// Recoverable by retrying with a larger budget.
    #[error("max distance exceeded")]
    MaxDistanceExceeded,
    /// The search space was exhausted without reaching the destination.
    #[error("no path found")]
    NoPathFound,
}

pub type Result<T> = std::result::Result<T, Error>;
