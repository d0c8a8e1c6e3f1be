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

//! Dijkstra's shortest route search.
//!
//! Classic single-source Dijkstra over a [`Network`]: the frontier of
//! discovered but not yet finalized cities is kept in an indexable binary
//! heap keyed by tentative distance, and relaxing a link may decrease a
//! frontier city's distance in place. The search stops as soon as the
//! destination is finalized, so only the part of the network closer than the
//! destination is explored.
//!
//! # Example
//!
//! ```
//! use rs_trains::Net;
//! use rs_trains::shortestpath::dijkstra;
//!
//! let mut net = Net::new();
//! net.add_edge("A", "B", 10);
//! net.add_edge("B", "C", 5);
//! net.add_edge("A", "C", 20);
//!
//! let (dist, route, explored) = dijkstra::find(&net, "A", "C").unwrap();
//! assert_eq!(dist, 15);
//! assert_eq!(route, ["A", "B", "C"]);
//! assert_eq!(explored, 3);
//! ```

use crate::collections::{BinHeap, ItemPriQueue};
use crate::network::{CityId, Network};
use crate::num::traits::Zero;
use crate::shortestpath::{Error, Result};

/// Search state of a discovered city.
struct NodeState<I, D> {
    /// Handle of this city on the queue.
    item: I,
    /// The previous city on the best known route from the source.
    prev: Option<CityId>,
    /// Tentative distance from the source.
    dist: D,
    /// The distance is final, the city has left the queue.
    done: bool,
}

/// Find the shortest route from `from` to `to`.
///
/// Returns the total distance, the city names along the route from `from`
/// to `to` inclusive, and the number of cities that entered the frontier
/// (a diagnostic for the size of the explored part of the network).
///
/// Fails with [`Error::CityNotFound`] if either endpoint is unknown and with
/// [`Error::NoPathFound`] if the destination is unreachable.
pub fn find<D>(net: &Network<D>, from: &str, to: &str) -> Result<(D, Vec<String>, usize)>
where
    D: Copy + PartialOrd + Zero,
{
    find_with_queue(net, from, to, BinHeap::new())
}

/// Find the shortest route using a caller-supplied priority queue.
///
/// Like [`find`], but the frontier queue is passed in (it is cleared before
/// use), so its storage can be reused over many searches.
pub fn find_with_queue<D, P>(net: &Network<D>, from: &str, to: &str, mut queue: P) -> Result<(D, Vec<String>, usize)>
where
    D: Copy + PartialOrd + Zero,
    P: ItemPriQueue<CityId, D>,
{
    if from == to {
        return Ok((D::zero(), vec![from.to_string()], 0));
    }

    let src = net.lookup(from).ok_or_else(|| Error::CityNotFound(from.to_string()))?;
    let snk = net.lookup(to).ok_or_else(|| Error::CityNotFound(to.to_string()))?;

    queue.clear();
    let mut states: Vec<Option<NodeState<P::Item, D>>> = vec![];
    states.resize_with(net.num_cities(), || None);

    let item = queue.push(src, D::zero());
    states[src.index()] = Some(NodeState {
        item,
        prev: None,
        dist: D::zero(),
        done: false,
    });

    while let Some((u, dist)) = queue.pop_min() {
        if u == snk {
            return Ok((dist, assemble_route(net, &states, u), explored(&states)));
        }

        if let Some(state) = states[u.index()].as_mut() {
            state.done = true;
        }

        for link in net.city(u).links() {
            let next = dist + link.dist;
            let idx = link.to.index();

            if states[idx].is_none() {
                let item = queue.push(link.to, next);
                states[idx] = Some(NodeState {
                    item,
                    prev: Some(u),
                    dist: next,
                    done: false,
                });
            } else if let Some(state) = states[idx].as_mut() {
                if !state.done && next < state.dist {
                    state.dist = next;
                    state.prev = Some(u);
                    queue.update(&state.item, next);
                }
            }
        }
    }

    Err(Error::NoPathFound)
}

/// Walk the predecessor references back from `snk` and return the city
/// names in source-to-destination order.
fn assemble_route<I, D>(net: &Network<D>, states: &[Option<NodeState<I, D>>], snk: CityId) -> Vec<String>
where
    D: Copy,
{
    let mut route = vec![];
    let mut cur = Some(snk);

    while let Some(u) = cur {
        route.push(net.city(u).name().to_string());
        cur = states[u.index()].as_ref().and_then(|s| s.prev);
    }

    route.reverse();
    route
}

/// The number of cities that ever entered the frontier.
fn explored<I, D>(states: &[Option<NodeState<I, D>>]) -> usize {
    states.iter().filter(|s| s.is_some()).count()
}
