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

//! Recursive depth-first route search.
//!
//! Three variants of the same recursive search, in increasing order of
//! sophistication:
//!
//! 1. [`find_within`] explores every route whose length stays within a
//!    distance budget. It has no cycle protection: on a cyclic network the
//!    budget is the only brake, so a too generous budget makes the search
//!    practically unbounded. Kept as the baseline for comparison.
//! 2. [`find`] skips cities already on the current branch and therefore
//!    terminates on any finite network. The search space is still
//!    exponential in the worst case.
//! 3. [`find_path`] additionally tracks the best complete route found so
//!    far and abandons branches that cannot beat it. It returns the route
//!    itself along with its length.
//!
//! # Example
//!
//! ```
//! use rs_trains::Net;
//! use rs_trains::shortestpath::dfs;
//!
//! let mut net = Net::new();
//! net.add_edge("A", "B", 10);
//! net.add_edge("B", "C", 5);
//! net.add_edge("A", "C", 20);
//!
//! assert_eq!(dfs::find(&net, "A", "C"), Ok(15));
//! let (dist, route) = dfs::find_path(&net, "A", "C").unwrap();
//! assert_eq!(dist, 15);
//! assert_eq!(route, vec!["A", "B", "C"]);
//! ```

use crate::network::{CityId, Network};
use crate::num::traits::Zero;
use crate::shortestpath::{Error, Result};

/// Return the length of the shortest route from `from` to `to` not longer
/// than `max_distance`.
///
/// The search recursively follows all links and abandons a branch once its
/// accumulated length exceeds the budget. Cities may be visited repeatedly,
/// so on a cyclic network the running time grows rapidly with the budget and
/// an unbounded budget does not terminate. Callers typically retry with a
/// doubled budget until a route is found.
///
/// Fails with [`Error::CityNotFound`] if either endpoint is unknown and with
/// [`Error::NoPathFound`] if no route within the budget exists.
pub fn find_within<D>(net: &Network<D>, from: &str, to: &str, max_distance: D) -> Result<D>
where
    D: Copy + PartialOrd + Zero,
{
    let src = net.lookup(from).ok_or_else(|| Error::CityNotFound(from.to_string()))?;
    let snk = net.lookup(to).ok_or_else(|| Error::CityNotFound(to.to_string()))?;

    search_within(net, src, snk, D::zero(), max_distance)
}

fn search_within<D>(net: &Network<D>, u: CityId, snk: CityId, spent: D, max_distance: D) -> Result<D>
where
    D: Copy + PartialOrd + Zero,
{
    if spent > max_distance {
        return Err(Error::MaxDistanceExceeded);
    }

    if u == snk {
        return Ok(D::zero());
    }

    let mut min_dist = None;

    for link in net.city(u).links() {
        let dist = match search_within(net, link.to, snk, spent + link.dist, max_distance) {
            Ok(d) => d + link.dist,
            Err(_) => continue,
        };

        if min_dist.map_or(true, |m| dist < m) {
            min_dist = Some(dist);
        }
    }

    min_dist.ok_or(Error::NoPathFound)
}

/// Return the length of the shortest route from `from` to `to`.
///
/// Like [`find_within`] but without a budget: instead the search skips every
/// city that is already on the current branch, which guarantees termination
/// on a finite network. This is the slow reference implementation, the
/// number of explored loop-free routes can still be exponential.
pub fn find<D>(net: &Network<D>, from: &str, to: &str) -> Result<D>
where
    D: Copy + PartialOrd + Zero,
{
    let src = net.lookup(from).ok_or_else(|| Error::CityNotFound(from.to_string()))?;
    let snk = net.lookup(to).ok_or_else(|| Error::CityNotFound(to.to_string()))?;

    let mut visited = Vec::with_capacity(net.num_cities());
    search_avoiding(net, src, snk, &mut visited)
}

fn search_avoiding<D>(net: &Network<D>, u: CityId, snk: CityId, visited: &mut Vec<CityId>) -> Result<D>
where
    D: Copy + PartialOrd + Zero,
{
    if u == snk {
        return Ok(D::zero());
    }

    let mut min_dist = None;
    visited.push(u);

    for link in net.city(u).links() {
        if visited.contains(&link.to) {
            continue;
        }

        let dist = match search_avoiding(net, link.to, snk, visited) {
            Ok(d) => d + link.dist,
            Err(_) => continue,
        };

        if min_dist.map_or(true, |m| dist < m) {
            min_dist = Some(dist);
        }
    }

    visited.pop();
    min_dist.ok_or(Error::NoPathFound)
}

/// Return the shortest route from `from` to `to` and its length.
///
/// A branch-and-bound refinement of [`find`]: the length of the best
/// complete route found so far is threaded through the recursion and a
/// branch is abandoned with [`Error::MaxDistanceExceeded`] as soon as it has
/// spent that much distance without reaching the destination. The returned
/// route lists the city names from `from` to `to` inclusive.
///
/// The result is the same as that of [`find`], only the pruned search space
/// differs.
pub fn find_path<D>(net: &Network<D>, from: &str, to: &str) -> Result<(D, Vec<String>)>
where
    D: Copy + PartialOrd + Zero,
{
    let src = net.lookup(from).ok_or_else(|| Error::CityNotFound(from.to_string()))?;
    let snk = net.lookup(to).ok_or_else(|| Error::CityNotFound(to.to_string()))?;

    let mut path = Vec::with_capacity(net.num_cities());
    let (dist, route) = search_pruned(net, src, snk, &mut path, None, D::zero())?;

    Ok((dist, route.into_iter().map(|u| net.city(u).name().to_string()).collect()))
}

/// One call level of the branch-and-bound search.
///
/// `best` is the length of the best complete route seen so far (if any) and
/// `spent` the distance accumulated since `best` was last improved. A branch
/// is pruned once `spent` reaches `best`, completing it could not improve on
/// the route already found.
fn search_pruned<D>(
    net: &Network<D>,
    u: CityId,
    snk: CityId,
    path: &mut Vec<CityId>,
    best: Option<D>,
    spent: D,
) -> Result<(D, Vec<CityId>)>
where
    D: Copy + PartialOrd + Zero,
{
    if let Some(b) = best {
        if spent >= b {
            return Err(Error::MaxDistanceExceeded);
        }
    }

    if u == snk {
        let mut route = path.clone();
        route.push(u);
        return Ok((D::zero(), route));
    }

    let mut min_dist = None;
    let mut min_route = None;
    let mut best = best;
    let mut spent = spent;

    path.push(u);

    for link in net.city(u).links() {
        if path.contains(&link.to) {
            continue;
        }

        let (dist, route) = match search_pruned(net, link.to, snk, path, best, spent + link.dist) {
            Ok((d, route)) => (d + link.dist, route),
            Err(_) => continue,
        };

        if min_dist.map_or(true, |m| dist < m) {
            min_dist = Some(dist);
            min_route = Some(route);

            if best.map_or(true, |b| dist < b) {
                best = Some(dist);
                spent = D::zero();
            }
        }
    }

    path.pop();

    match (min_dist, min_route) {
        (Some(dist), Some(route)) => Ok((dist, route)),
        _ => Err(Error::NoPathFound),
    }
}
