//! Find the nearest point to a target.
//!
//! Reads whitespace-separated `x y` pairs from stdin and prints the point
//! closest to the target, checked against a linear scan.
//!
//! Usage: `cargo run --example query_nearest -- <x> <y> < points.txt`

use std::env;
use std::io::{self, Read};

use kd2::prelude::*;

mod common;
use common::read_points;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let target = env::args()
        .skip(1)
        .map(|a| a.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    let [x, y] = target.as_slice() else {
        return Err("usage: query_nearest <x> <y>".into());
    };
    let target = Point::new(*x, *y);

    let mut input = String::new();
    let _ = io::stdin().read_to_string(&mut input)?;
    let points = read_points(&input)?;
    let tree = KdTree::from_points(points.iter().copied())?;
    let set: PointSet = points.into_iter().collect();

    match (tree.nearest_query(target)?, set.nearest_query(target)?) {
        (Some(found), Some(expected)) => {
            println!("Nearest point to {target}: {found} (distance {})", found.distance_to(target));
            if found.distance_squared_to(target) != expected.distance_squared_to(target) {
                println!("Linear scan disagrees: {expected}");
            }
        }
        _ => println!("No points read"),
    }
    Ok(())
}
