//! Find every point inside a rectangle.
//!
//! Reads whitespace-separated `x y` pairs from stdin and prints the points in
//! `[min_x, max_x] x [min_y, max_y]`.
//!
//! Usage: `cargo run --example query_range -- <min_x> <min_y> <max_x> <max_y> < points.txt`

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

    let bounds = env::args()
        .skip(1)
        .map(|a| a.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    let [min_x, min_y, max_x, max_y] = bounds.as_slice() else {
        return Err("usage: query_range <min_x> <min_y> <max_x> <max_y>".into());
    };
    let rect = Rect::new(*min_x, *min_y, *max_x, *max_y);

    let mut input = String::new();
    let _ = io::stdin().read_to_string(&mut input)?;
    let tree = KdTree::from_points(read_points(&input)?)?;

    let found = tree.range_query(&rect)?;
    println!("{} of {} points inside {}", found.len(), tree.len(), rect);
    for p in found {
        println!("{:8.6} {:8.6}", p.x, p.y);
    }
    Ok(())
}
