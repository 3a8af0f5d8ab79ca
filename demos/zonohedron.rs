//! Zonohedra demo: builds one shape and prints a summary of it.
//!
//! Usage:
//! ```text
//! cargo run --example zonohedron                                # standard, 12 sides
//! cargo run --example zonohedron -- spirallohedra 8 3 2.0       # kind sides detail width
//! cargo run --example zonohedron -- spiral 12 1 1.0 3 --clockwise
//! ```
//!
//! Positional arguments are `kind sides detail width spiral_count`; any that
//! are omitted keep their defaults.

use std::error::Error;

use tracing::info;
use zonohedra::operations::query::{first_invalid_quad, BoundingBox, IsValid};
use zonohedra::{build_shape, Polyline, ShapeOutput, ShapeParameters};

fn parse_args() -> Result<ShapeParameters, Box<dyn Error>> {
    let mut params = ShapeParameters::default();
    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        if arg == "--clockwise" || arg == "-c" {
            params.clockwise = true;
            continue;
        }
        match positional {
            0 => params.kind = arg.parse()?,
            1 => params.sides = arg.parse()?,
            2 => params.detail = arg.parse()?,
            3 => params.width = arg.parse()?,
            4 => params.spiral_count = arg.parse()?,
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
        positional += 1;
    }
    Ok(params)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for zonohedra.
    // Override with RUST_LOG env var (e.g. RUST_LOG=zonohedra=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("zonohedron=info".parse().unwrap_or_default())
        .add_directive("zonohedra=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = parse_args()?;
    info!(?params, "building");

    let shape = build_shape(&params)?;
    let aabb = BoundingBox::new(&shape).execute()?;

    match &shape {
        ShapeOutput::Faces(quads) => {
            println!("{} {}: {} quads", params.kind, params.sides, quads.len());
            if let Some(i) = first_invalid_quad(quads) {
                println!("quad {i} is not planar or not finite");
            }
        }
        ShapeOutput::Wireframe(lines) => {
            let points: usize = lines.iter().map(Polyline::len).sum();
            let length: f64 = lines.iter().map(Polyline::length).sum();
            println!(
                "{} {}: {} polylines, {points} points, total length {length:.4}",
                params.kind,
                params.sides,
                lines.len()
            );
        }
    }
    println!(
        "bounds: ({:.4}, {:.4}, {:.4}) .. ({:.4}, {:.4}, {:.4})",
        aabb.min.x, aabb.min.y, aabb.min.z, aabb.max.x, aabb.max.y, aabb.max.z
    );
    println!("valid: {}", IsValid::new(&shape).execute());
    Ok(())
}
