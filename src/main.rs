// main.rs
//
// Command line front end: classify the points of a regular grid spanning a mesh as
// inside or outside of it.

use clap::{Parser, ValueEnum};
use inpolyhedron::{GridAxes, Polyhedron};
use nalgebra::Vector3;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Cube,
    Tetrahedron,
    Octahedron,
    Sphere,
}

#[derive(Parser)]
#[command(name = "inpolyhedron")]
#[command(about = "Classify grid points as inside or outside a closed triangle mesh", long_about = None)]
struct Cli {
    /// STL file (ASCII or binary) describing a closed surface
    #[arg(required_unless_present = "shape")]
    input: Option<PathBuf>,

    /// Use a built-in unit-sized shape instead of an STL file
    #[arg(long, value_enum, conflicts_with = "input")]
    shape: Option<Shape>,

    /// Grid points per axis
    #[arg(short, long, default_value_t = 64)]
    resolution: usize,

    /// Grid points along X (overrides --resolution)
    #[arg(long)]
    nx: Option<usize>,

    /// Grid points along Y (overrides --resolution)
    #[arg(long)]
    ny: Option<usize>,

    /// Grid points along Z (overrides --resolution)
    #[arg(long)]
    nz: Option<usize>,

    /// Margin around the mesh bounds, as a fraction of its largest extent
    #[arg(short, long, default_value_t = 0.05)]
    padding: f64,

    /// Write one byte (0 or 1) per grid point, in meshgrid order, to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load(cli: &Cli) -> Result<Polyhedron, Box<dyn Error>> {
    if let Some(shape) = cli.shape {
        return Ok(match shape {
            Shape::Cube => Polyhedron::cube(1.0),
            Shape::Tetrahedron => Polyhedron::tetrahedron(1.0),
            Shape::Octahedron => Polyhedron::octahedron(1.0),
            Shape::Sphere => Polyhedron::sphere(1.0, 48, 24),
        });
    }
    let path = cli.input.as_ref().ok_or("no input given")?;
    let data = std::fs::read(path)?;
    Ok(Polyhedron::from_stl(&data)?)
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let polyhedron = load(cli)?;
    let (lo, hi) = polyhedron.bounds().ok_or("mesh has no triangles")?;

    let margin = Vector3::repeat((hi - lo).max() * cli.padding);
    let counts = [
        cli.nx.unwrap_or(cli.resolution),
        cli.ny.unwrap_or(cli.resolution),
        cli.nz.unwrap_or(cli.resolution),
    ];
    let grid = GridAxes::spanning(&(lo - margin), &(hi + margin), counts);

    let start = Instant::now();
    let inside = polyhedron.inside_grid(&grid);
    let elapsed = start.elapsed();

    let report = inside.report();
    println!("faces:        {}", polyhedron.len());
    println!("grid:         {}x{}x{} ({} points)", counts[0], counts[1], counts[2], grid.len());
    println!("axis order:   {:?}", report.order.axes());
    println!("inside:       {}", inside.count_inside());
    println!("rays traced:  {}", report.stats.rays_traced);
    println!("face tests:   {}", report.stats.faces_tested);
    println!("elapsed:      {:.3?}", elapsed);
    if !report.diagnostics.is_clean() {
        println!(
            "warnings:     {} near-singular solves, {} odd-parity rays",
            report.diagnostics.singular_systems, report.diagnostics.odd_crossing_rays
        );
    }

    if let Some(path) = &cli.output {
        let bytes: Vec<u8> = inside.as_slice().iter().map(|&b| u8::from(b)).collect();
        std::fs::write(path, bytes)?;
        log::info!("wrote {} bytes to {}", grid.len(), path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}
