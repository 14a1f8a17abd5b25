//! Print `n` random points on an `m x m` grid in the unit square, one per line.
//!
//! Usage: `cargo run --example generate_points -- <n> <m> <mode>`
//!
//! Modes: `0` no two points share an x or a y coordinate, `1` all points
//! distinct, anything else allows duplicates. Modes 0 and 1 need enough grid
//! cells for `n` points.

use std::collections::HashSet;
use std::env;

use rand::Rng;

fn cell<R: Rng>(rng: &mut R, m: u32) -> f64 {
    f64::from(rng.random_range(0..m)) / f64::from(m)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let [n, m, mode] = args.as_slice() else {
        return Err("usage: generate_points <n> <m> <mode>".into());
    };
    let n: usize = n.parse()?;
    let m: u32 = m.parse()?;
    let mode: i32 = mode.parse()?;
    if m == 0 && n > 0 {
        return Err("m must be positive".into());
    }

    let mut rng = rand::rng();
    let mut points = Vec::with_capacity(n);
    match mode {
        0 => {
            if n > m as usize {
                return Err("mode 0 needs m >= n".into());
            }
            let mut xs = HashSet::new();
            let mut ys = HashSet::new();
            while points.len() < n {
                let (x, y) = (cell(&mut rng, m), cell(&mut rng, m));
                if !xs.contains(&x.to_bits()) && !ys.contains(&y.to_bits()) {
                    let _ = xs.insert(x.to_bits());
                    let _ = ys.insert(y.to_bits());
                    points.push((x, y));
                }
            }
        }
        1 => {
            if n > (m as usize) * (m as usize) {
                return Err("mode 1 needs m * m >= n".into());
            }
            let mut seen = HashSet::new();
            while points.len() < n {
                let (x, y) = (cell(&mut rng, m), cell(&mut rng, m));
                if seen.insert((x.to_bits(), y.to_bits())) {
                    points.push((x, y));
                }
            }
        }
        _ => points.extend((0..n).map(|_| (cell(&mut rng, m), cell(&mut rng, m)))),
    }

    for (x, y) in points {
        println!("{x:8.6} {y:8.6}");
    }
    Ok(())
}
