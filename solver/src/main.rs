use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use junctions::{ComponentTracker, PointSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    /// Product of the largest circuit sizes after connecting the closest pairs
    One,
    /// Product of the X coordinates of the pair that finally joins every box into one circuit
    Two,
    Both,
}

/// Connect junction boxes closest-first and report on the circuits they form
#[derive(Parser, Debug)]
#[command(name = "solver", version, about)]
struct Cli {
    /// File with one `x,y,z` junction box per line
    input: PathBuf,

    /// Number of closest pairs to connect for part one
    #[arg(short, long, default_value_t = 1000)]
    connect: usize,

    /// Number of largest circuits to multiply for part one
    #[arg(short, long, default_value_t = 3)]
    top: usize,

    /// Which answer to print
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let points = match text.parse::<PointSet>() {
        Ok(points) => points,
        Err(reasons) => {
            for reason in &reasons {
                log::error!("{}", reason);
            }
            bail!("{} malformed line(s) in {}", reasons.len(), cli.input.display());
        }
    };

    for pair in points.first_n_pairs(cli.connect) {
        log::debug!("dist: {}, {}:{}", pair.distance(), points[pair.first()], points[pair.second()]);
    }

    let mut tracker = ComponentTracker::new(&points);

    // part two continues from the first `connect` edges
    let circuits = tracker.build_from_first_n_edges(cli.connect);
    if cli.part != Part::Two {
        for size in circuits.largest_sizes(cli.top) {
            log::debug!("{}", size);
        }
        println!("{}", circuits.product_of_largest(cli.top));
    }

    if cli.part != Part::One {
        let Some(last) = tracker.step_until_unified() else {
            bail!("no final edge to compute product from");
        };
        log::info!(
            "unified after {} edges by {:?}:{:?}",
            tracker.cursor(),
            last.newly_attached.map(|id| points[id]),
            last.attached_to.map(|id| points[id]),
        );
        println!("{}", last.x_product(&points).context("final edge names no points")?);
    }

    Ok(())
}
