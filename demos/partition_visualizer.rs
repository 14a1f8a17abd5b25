//! 2-d tree partition SVG visualizer
//!
//! Reads whitespace-separated `x y` pairs from stdin, inserts them in order and
//! draws every stored point together with its splitting line: red for vertical
//! lines, blue for horizontal ones.
//!
//! Usage: `cargo run --example partition_visualizer -- [out.svg] < points.txt`

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};

use kd2::prelude::*;

mod common;
use common::read_points;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = env::args().nth(1).unwrap_or_else(|| "kd2_partition.svg".to_string());

    let mut input = String::new();
    let _ = io::stdin().read_to_string(&mut input)?;
    let tree = KdTree::from_points(read_points(&input)?)?;

    let size = 800.0;
    let margin = 40.0;
    let area = size - 2.0 * margin;
    let bounds = tree.bounds();
    let scale_x = area / bounds.width().max(f64::EPSILON);
    let scale_y = area / bounds.height().max(f64::EPSILON);

    // SVG y grows downwards
    let to_svg = |p: Point| {
        (
            margin + (p.x - bounds.min_x) * scale_x,
            size - margin - (p.y - bounds.min_y) * scale_y,
        )
    };

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg width=\"{size}\" height=\"{size}\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\">\n"
    ));
    svg.push_str("  <defs>\n");
    svg.push_str("    <style>\n");
    svg.push_str("      .vertical { stroke: #D62728; stroke-width: 1; }\n");
    svg.push_str("      .horizontal { stroke: #1F77B4; stroke-width: 1; }\n");
    svg.push_str("      .point { fill: #000000; }\n");
    svg.push_str("      .bounds { fill: none; stroke: #333333; stroke-width: 2; }\n");
    svg.push_str("    </style>\n");
    svg.push_str("  </defs>\n\n");

    svg.push_str(&format!(
        "  <rect x=\"{margin}\" y=\"{margin}\" width=\"{area}\" height=\"{area}\" class=\"bounds\"/>\n\n"
    ));

    let mut dots = String::new();
    for part in tree.traverse() {
        let (a, b) = part.split_line();
        let (x1, y1) = to_svg(a);
        let (x2, y2) = to_svg(b);
        let class = match part.axis {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        };
        svg.push_str(&format!(
            "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" class=\"{class}\"/>\n"
        ));
        let (cx, cy) = to_svg(part.point);
        dots.push_str(&format!("  <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"3\" class=\"point\"/>\n"));
    }
    svg.push('\n');
    svg.push_str(&dots);
    svg.push_str("</svg>\n");

    let mut file = File::create(&out)?;
    file.write_all(svg.as_bytes())?;
    println!("Wrote {} points (depth {}) to {}", tree.len(), tree.depth(), out);
    Ok(())
}
