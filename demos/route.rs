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

use time::OffsetDateTime;

use rustop::opts;

use rs_trains::edgelist;
use rs_trains::shortestpath::{dfs, dijkstra};
use rs_trains::Network;

fn timed<T>(label: &str, niter: usize, f: impl Fn() -> T) -> T {
    let tstart = OffsetDateTime::now_utc();
    let mut result = f();
    for _ in 1..niter {
        result = f();
    }
    let tend = OffsetDateTime::now_utc();
    println!("{}: {}s", label, (tend - tstart).as_seconds_f64());
    result
}

fn main() {
    let (args, _) = opts! {
        synopsis "Find the shortest train route between two cities.";
        opt num:usize=1, desc:"Number of times each search is repeated.";
        opt budget:Option<u32>, desc:"Also run the budgeted exhaustive search, starting with this budget.";
        param file:String, desc:"Edge list file name (one from,to,minutes edge per line)";
        param from:String, desc:"Source city";
        param to:String, desc:"Destination city";
    }
    .parse_or_exit();

    let tstart = OffsetDateTime::now_utc();
    let edges = edgelist::read_from_file::<u32, _>(&args.file).unwrap();
    let net = Network::from_edges(edges);
    let tend = OffsetDateTime::now_utc();

    let (collisions, _) = net.bucket_collisions();
    println!("loading: {}s", (tend - tstart).as_seconds_f64());
    println!("  number of cities: {}", net.num_cities());
    println!("  bucket collisions: {}", collisions);

    let (dist, route, explored) =
        timed("dijkstra", args.num, || dijkstra::find(&net, &args.from, &args.to)).unwrap();
    println!("  distance: {} min", dist);
    println!("  route: {}", route.join(" - "));
    println!("  explored cities: {}", explored);

    let (bb_dist, _) =
        timed("branch-and-bound dfs", args.num, || dfs::find_path(&net, &args.from, &args.to)).unwrap();
    let la_dist = timed("loop-avoiding dfs", args.num, || dfs::find(&net, &args.from, &args.to)).unwrap();

    assert_eq!(bb_dist, dist);
    assert_eq!(la_dist, dist);

    // the budgeted search is retried with a doubled budget until it finds
    // a route
    if let Some(budget) = args.budget {
        let mut budget = budget;
        for _ in 0..8 {
            let result = timed("exhaustive dfs", args.num, || {
                dfs::find_within(&net, &args.from, &args.to, budget)
            });
            match result {
                Ok(d) => {
                    println!("  distance (budget {}): {} min", budget, d);
                    assert_eq!(d, dist);
                    break;
                }
                Err(err) => {
                    println!("  budget {}: {}", budget, err);
                    budget *= 2;
                }
            }
        }
    }
}
