/*
 * Copyright (c) 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! The city registry.
//!
//! A [`Network`] owns all cities of a train network. Cities are stored in a
//! growable arena and addressed by [`CityId`]; in addition each city is
//! registered in one of a fixed number of hash buckets keyed by its name, so
//! cities can be found by name without a full scan.
//!
//! Links are undirected: [`Network::connect`] and [`Network::add_edge`]
//! always insert a pair of symmetric [`Link`]s.
//!
//! # Example
//!
//! ```
//! use rs_trains::Net;
//!
//! let mut net = Net::new();
//! net.add_edge("A", "B", 10);
//! net.add_edge("B", "C", 5);
//!
//! let a = net.lookup("A").unwrap();
//! let b = net.lookup("B").unwrap();
//! assert!(net.is_connected(a, b));
//! assert_eq!(net.connection(a, b), Some(10));
//! assert_eq!(net.num_cities(), 3);
//! ```

use crate::num::iter::{range, Range};

use log::debug;
use std::fmt;
use std::slice::Iter as SliceIter;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The number of name buckets.
///
/// A prime, so that the polynomial rolling hash distributes reasonably well
/// over the buckets.
const BUCKETS: usize = 541;

/// Compute the bucket of a city name.
///
/// This is a polynomial rolling hash over the characters of the name, reduced
/// modulo the bucket count. The same name always lands in the same bucket.
fn bucket_of(name: &str) -> usize {
    let mut hash = 0;
    for c in name.chars() {
        hash = hash * 31 % BUCKETS + c as usize;
    }
    hash % BUCKETS
}

/// A city of a network.
///
/// This is basically a newtype of the arena index.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct CityId(u32);

impl CityId {
    /// Return the arena index of this city.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// One direction of an undirected connection between two cities.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Link<D> {
    /// The city this link leads to.
    pub to: CityId,
    /// The travel time of this link in minutes.
    pub dist: D,
}

/// Data of a single city.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct City<D> {
    name: String,
    links: Vec<Link<D>>,
}

impl<D> City<D> {
    /// Return the name of this city.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the outgoing links of this city in insertion order.
    pub fn links(&self) -> &[Link<D>] {
        &self.links
    }
}

/// A hash-bucketed registry of cities and their connections.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Network<D> {
    /// The arena owning all cities.
    cities: Vec<City<D>>,
    /// For each bucket the arena indices of the cities hashed to it.
    buckets: Vec<Vec<u32>>,
}

impl<D> Default for Network<D>
where
    D: Copy,
{
    fn default() -> Self {
        Network {
            cities: vec![],
            buckets: vec![vec![]; BUCKETS],
        }
    }
}

impl<D> Network<D>
where
    D: Copy,
{
    /// Create an empty network.
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the number of cities in the network.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Add a new city with the given name and no links.
    ///
    /// The name must not be registered, yet. Adding the same name twice
    /// leaves both records in the bucket and later lookups return an
    /// unspecified one of them.
    pub fn add_city(&mut self, name: &str) -> CityId {
        let u = CityId(self.cities.len() as u32);
        self.buckets[bucket_of(name)].push(u.0);
        self.cities.push(City {
            name: name.to_string(),
            links: vec![],
        });
        u
    }

    /// Find a city by name.
    ///
    /// Computes the bucket of the name and scans that bucket. Returns `None`
    /// if no city with this name has been added.
    pub fn lookup(&self, name: &str) -> Option<CityId> {
        self.buckets[bucket_of(name)]
            .iter()
            .find(|&&i| self.cities[i as usize].name == name)
            .map(|&i| CityId(i))
    }

    /// Return the city with the given id.
    pub fn city(&self, u: CityId) -> &City<D> {
        &self.cities[u.index()]
    }

    /// Connect two cities with an undirected link of the given length.
    ///
    /// A symmetric pair of links is inserted. Duplicates are *not*
    /// suppressed, use [`add_edge`](Network::add_edge) for that.
    pub fn connect(&mut self, u: CityId, v: CityId, dist: D) {
        self.cities[u.index()].links.push(Link { to: v, dist });
        self.cities[v.index()].links.push(Link { to: u, dist });
    }

    /// Return the length of the link between `u` and `v`, if one exists.
    ///
    /// Scans the link list of the endpoint with fewer links.
    pub fn connection(&self, u: CityId, v: CityId) -> Option<D> {
        let (src, snk) = if self.cities[u.index()].links.len() <= self.cities[v.index()].links.len() {
            (u, v)
        } else {
            (v, u)
        };
        self.cities[src.index()]
            .links
            .iter()
            .find(|l| l.to == snk)
            .map(|l| l.dist)
    }

    /// Return `true` iff `u` and `v` are directly connected.
    pub fn is_connected(&self, u: CityId, v: CityId) -> bool {
        self.connection(u, v).is_some()
    }

    /// Register one edge of an edge list.
    ///
    /// Both endpoints are created if they are not part of the network, yet.
    /// If the two cities are already connected the edge is dropped, otherwise
    /// a symmetric pair of links is inserted.
    pub fn add_edge(&mut self, from: &str, to: &str, dist: D) {
        let u = match self.lookup(from) {
            Some(u) => u,
            None => self.add_city(from),
        };
        let v = match self.lookup(to) {
            Some(v) => v,
            None => self.add_city(to),
        };

        if self.is_connected(u, v) {
            return;
        }

        self.connect(u, v, dist);
    }

    /// Build a network from `(from, to, dist)` triples.
    ///
    /// Edges are inserted with [`add_edge`](Network::add_edge), so endpoints
    /// are created lazily and duplicate connections are dropped.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (String, String, D)>,
    {
        let mut net = Network::new();
        let mut nedges = 0;
        for (from, to, dist) in edges {
            net.add_edge(&from, &to, dist);
            nedges += 1;
        }
        debug!("built network with {} cities from {} edges", net.num_cities(), nedges);
        net
    }

    /// Return an iterator over all cities in bucket order.
    ///
    /// The order is determined by the name hashes, it is neither sorted nor
    /// the insertion order.
    pub fn cities(&self) -> Cities {
        Cities {
            outer: self.buckets.iter(),
            inner: [].iter(),
        }
    }

    /// Return an iterator over all cities in insertion order.
    pub fn city_ids(&self) -> CityIds {
        CityIds(range(0, self.cities.len() as u32))
    }

    /// Return the number of buckets holding more than one city and the sizes
    /// of all non-empty buckets.
    pub fn bucket_collisions(&self) -> (usize, Vec<(usize, usize)>) {
        let mut collisions = 0;
        let mut sizes = vec![];

        for (i, bucket) in self.buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            if bucket.len() > 1 {
                collisions += 1;
            }
            sizes.push((i, bucket.len()));
        }

        (collisions, sizes)
    }
}

/// An iterator over all cities of a network in bucket order.
pub struct Cities<'a> {
    outer: SliceIter<'a, Vec<u32>>,
    inner: SliceIter<'a, u32>,
}

impl<'a> Iterator for Cities<'a> {
    type Item = CityId;

    fn next(&mut self) -> Option<CityId> {
        loop {
            if let Some(&i) = self.inner.next() {
                return Some(CityId(i));
            }
            self.inner = self.outer.next()?.iter();
        }
    }
}

/// An iterator over all cities of a network in insertion order.
pub struct CityIds(Range<u32>);

impl Iterator for CityIds {
    type Item = CityId;

    fn next(&mut self) -> Option<CityId> {
        self.0.next().map(CityId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::{bucket_of, Network, BUCKETS};

    #[test]
    fn test_bucket_hash() {
        for name in &["Malmö", "Göteborg", "Stockholm", "", "A"] {
            let b = bucket_of(name);
            assert!(b < BUCKETS);
            assert_eq!(b, bucket_of(name));
        }
    }

    #[test]
    fn test_add_and_lookup() {
        let mut net = Network::<u32>::new();
        let a = net.add_city("Alvesta");
        let b = net.add_city("Boden");

        assert_eq!(net.lookup("Alvesta"), Some(a));
        assert_eq!(net.lookup("Boden"), Some(b));
        assert_eq!(net.lookup("Nässjö"), None);
        assert_eq!(net.city(a).name(), "Alvesta");
        assert_eq!(net.num_cities(), 2);
    }

    #[test]
    fn test_symmetric_connect() {
        let mut net = Network::new();
        net.add_edge("A", "B", 10);

        let a = net.lookup("A").unwrap();
        let b = net.lookup("B").unwrap();
        assert!(net.is_connected(a, b));
        assert!(net.is_connected(b, a));
        assert_eq!(net.connection(a, b), Some(10));
        assert_eq!(net.connection(b, a), Some(10));
    }

    #[test]
    fn test_duplicate_edges_are_dropped() {
        let mut net = Network::new();
        net.add_edge("A", "B", 10);
        net.add_edge("A", "B", 20);
        net.add_edge("B", "A", 30);

        let a = net.lookup("A").unwrap();
        let b = net.lookup("B").unwrap();
        assert_eq!(net.city(a).links().len(), 1);
        assert_eq!(net.city(b).links().len(), 1);
        assert_eq!(net.connection(a, b), Some(10));
    }

    #[test]
    fn test_city_iterators() {
        let mut net = Network::new();
        net.add_edge("A", "B", 1);
        net.add_edge("B", "C", 2);
        net.add_edge("C", "D", 3);

        let mut by_bucket: Vec<_> = net.cities().map(|u| net.city(u).name().to_string()).collect();
        by_bucket.sort();
        assert_eq!(by_bucket, vec!["A", "B", "C", "D"]);

        let in_order: Vec<_> = net.city_ids().map(|u| net.city(u).name().to_string()).collect();
        assert_eq!(in_order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_bucket_collisions() {
        let mut net = Network::<u32>::new();
        net.add_city("A");
        net.add_city("B");

        let (collisions, sizes) = net.bucket_collisions();
        assert_eq!(collisions, 0);
        assert_eq!(sizes.len(), 2);
        assert!(sizes.iter().all(|&(_, n)| n == 1));
    }
}
