//! Helpers shared by the demo programs.

use kd2::Point;

/// Parses whitespace-separated `x y` pairs, one point per pair, until end of input
pub(crate) fn read_points(input: &str) -> Result<Vec<Point>, Box<dyn std::error::Error>> {
    let coords = input
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()?;
    if coords.len() % 2 != 0 {
        return Err("odd number of coordinates".into());
    }
    Ok(coords.chunks(2).map(|c| Point::new(c[0], c[1])).collect())
}
