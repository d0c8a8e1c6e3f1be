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

use rs_trains::edgelist;
use rs_trains::shortestpath::{dfs, dijkstra, Error};
use rs_trains::{Net, Network};

use std::io::Cursor;
use std::sync::Arc;
use std::thread;

//     a-----9-----b
//    / \           \
//   |   2           6
//   |    \           \
//  14     c-----8-----d
//   |    / \         /
//   |   9  10      15
//    \ /     \     /
//     e----7--f----
const EDGES: &str = "a,b,9
a,c,2
a,e,14
b,d,6
c,d,8
c,e,9
c,f,10
d,f,15
e,f,7
";

fn testnet() -> Net {
    Network::from_edges(edgelist::read::<u32, _>(Cursor::new(EDGES)).unwrap())
}

#[test]
fn edges_are_symmetric() {
    let net = testnet();

    for (from, to, dist) in edgelist::read::<u32, _>(Cursor::new(EDGES)).unwrap() {
        let u = net.lookup(&from).unwrap();
        let v = net.lookup(&to).unwrap();

        assert!(net.is_connected(u, v));
        assert!(net.is_connected(v, u));
        assert_eq!(net.connection(u, v), Some(dist));
        assert_eq!(net.connection(v, u), Some(dist));
    }
}

#[test]
fn known_shortest_route() {
    let net = testnet();

    let (dist, route, explored) = dijkstra::find(&net, "e", "b").unwrap();
    assert_eq!(dist, 20);
    assert_eq!(route, ["e", "c", "a", "b"]);
    assert!(explored >= route.len());

    assert_eq!(dfs::find(&net, "e", "b"), Ok(20));
    assert_eq!(dfs::find_path(&net, "e", "b").unwrap().0, 20);
}

// The loop-avoiding search, the branch-and-bound search and Dijkstra must
// agree on the distance of every city pair.
#[test]
fn algorithms_agree_on_all_pairs() {
    let net = testnet();
    let names: Vec<_> = net.cities().map(|u| net.city(u).name().to_string()).collect();

    for from in &names {
        for to in &names {
            let (dist, route, _) = dijkstra::find(&net, from, to).unwrap();
            assert_eq!(dfs::find(&net, from, to), Ok(dist), "{} -> {}", from, to);

            let (pruned_dist, pruned_route) = dfs::find_path(&net, from, to).unwrap();
            assert_eq!(pruned_dist, dist, "{} -> {}", from, to);
            assert_eq!(pruned_route.first(), route.first());
            assert_eq!(pruned_route.last(), route.last());
        }
    }
}

// The returned distance must equal the sum of the link lengths along the
// returned route.
#[test]
fn route_length_is_consistent() {
    let net = testnet();

    for from in net.cities() {
        for to in net.cities() {
            let (dist, route, _) =
                dijkstra::find(&net, net.city(from).name(), net.city(to).name()).unwrap();

            assert_eq!(route.first().map(String::as_str), Some(net.city(from).name()));
            assert_eq!(route.last().map(String::as_str), Some(net.city(to).name()));

            let mut total = 0;
            for leg in route.windows(2) {
                let u = net.lookup(&leg[0]).unwrap();
                let v = net.lookup(&leg[1]).unwrap();
                total += net.connection(u, v).expect("route uses a missing link");
            }
            assert_eq!(total, dist);
        }
    }
}

#[test]
fn isolated_city_is_unreachable() {
    let mut net = testnet();
    net.add_city("z");

    assert_eq!(dijkstra::find(&net, "a", "z"), Err(Error::NoPathFound));
    assert_eq!(dijkstra::find(&net, "z", "a"), Err(Error::NoPathFound));
    assert_eq!(dfs::find(&net, "a", "z"), Err(Error::NoPathFound));
    assert_eq!(dfs::find_path(&net, "z", "a"), Err(Error::NoPathFound));
}

#[test]
fn source_equals_destination() {
    let net = testnet();

    assert_eq!(dijkstra::find(&net, "a", "a"), Ok((0, vec!["a".to_string()], 0)));
    assert_eq!(dfs::find(&net, "a", "a"), Ok(0));
    assert_eq!(dfs::find_path(&net, "a", "a"), Ok((0, vec!["a".to_string()])));
}

// The network is never mutated after construction, so read-only searches
// may run in parallel, one per query.
#[test]
fn parallel_queries() {
    let net = Arc::new(testnet());
    let targets: Vec<_> = net.cities().map(|u| net.city(u).name().to_string()).collect();

    let handles: Vec<_> = targets
        .iter()
        .map(|to| {
            let net = Arc::clone(&net);
            let to = to.clone();
            thread::spawn(move || dijkstra::find(&net, "a", &to).map(|(dist, _, _)| dist))
        })
        .collect();

    for (to, handle) in targets.iter().zip(handles) {
        let dist = handle.join().unwrap().unwrap();
        assert_eq!(dfs::find(&net, "a", to), Ok(dist));
    }
}
