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

//! A library for train network data structures and shortest route search.
//!
//! A [`Network`](crate::network::Network) is a registry of cities connected
//! by undirected, positively weighted links (travel times in minutes). On
//! top of it the crate provides a family of route search algorithms of
//! increasing sophistication: a budgeted exhaustive depth-first search, a
//! loop-avoiding depth-first search, a branch-and-bound depth-first search
//! and Dijkstra's algorithm backed by an indexable binary heap.
//!
//! # Example
//!
//! ```
//! use rs_trains::Net;
//! use rs_trains::shortestpath::dijkstra;
//!
//! let mut net = Net::new();
//! net.add_edge("Malmö", "Göteborg", 152);
//! net.add_edge("Göteborg", "Stockholm", 211);
//! net.add_edge("Malmö", "Stockholm", 273);
//!
//! let (dist, route, _) = dijkstra::find(&net, "Malmö", "Stockholm").unwrap();
//! assert_eq!(dist, 273);
//! assert_eq!(route, vec!["Malmö", "Stockholm"]);
//! ```

mod num {
    pub use num_iter as iter;
    pub use num_traits as traits;
}

// # Data structures

pub mod network;
pub use self::network::{City, CityId, Link, Network};

pub mod collections;

/// The default network type.
///
/// Link distances are `u32` minutes.
pub type Net = Network<u32>;

// # Algorithms

pub mod shortestpath;

// # Input

pub mod edgelist;
