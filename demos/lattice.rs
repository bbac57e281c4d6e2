use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use fca_rs::context::Context;
use fca_rs::dot::{DotConfig, LabelStyle};
use fca_rs::enumerate::Strategy;
use fca_rs::lattice::ConceptLattice;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Algorithm {
    Dense,
    Sparse,
    Auto,
}

impl From<Algorithm> for Strategy {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Dense => Strategy::Dense,
            Algorithm::Sparse => Strategy::Sparse,
            Algorithm::Auto => Strategy::Auto,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Labels {
    Full,
    Extent,
    Intent,
}

impl From<Labels> for LabelStyle {
    fn from(labels: Labels) -> Self {
        match labels {
            Labels::Full => LabelStyle::Full,
            Labels::Extent => LabelStyle::Extent,
            Labels::Intent => LabelStyle::Intent,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Concept lattice of a formal context")]
struct Cli {
    /// Enumeration algorithm.
    #[arg(long, value_enum, default_value = "auto")]
    strategy: Algorithm,

    /// Use a random context with this many objects instead of the built-in sample.
    #[arg(long, value_name = "INT")]
    objects: Option<usize>,

    /// Number of attributes of the random context.
    #[arg(long, value_name = "INT", default_value = "6")]
    attributes: usize,

    /// Probability of each incidence in the random context.
    #[arg(long, value_name = "FLOAT", default_value = "0.4")]
    density: f64,

    /// Seed for the random context.
    #[arg(long, value_name = "INT", default_value = "42")]
    seed: u64,

    /// Write the Hasse diagram in DOT format to this file.
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Node labels in the DOT output.
    #[arg(long, value_enum, default_value = "full")]
    labels: Labels,
}

fn sample_table() -> Vec<Vec<bool>> {
    vec![
        vec![false, true, true, true],
        vec![true, false, true, true],
        vec![true, false, true, false],
        vec![true, false, true, false],
        vec![true, false, false, false],
    ]
}

fn random_table(objects: usize, attributes: usize, density: f64, seed: u64) -> Vec<Vec<bool>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..objects)
        .map(|_| (0..attributes).map(|_| rng.gen_bool(density)).collect())
        .collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let table = match args.objects {
        Some(n) => random_table(n, args.attributes, args.density, args.seed),
        None => sample_table(),
    };
    let ctx = Context::from_table(&table)?;
    println!(
        "Context: {} objects, {} attributes",
        ctx.num_objects(),
        ctx.num_attributes()
    );

    let time_enumerate = std::time::Instant::now();
    let lattice = ConceptLattice::compute(&ctx, args.strategy.into())?;
    println!(
        "Found {} concepts in {:.3} s",
        lattice.len(),
        time_enumerate.elapsed().as_secs_f64()
    );
    print!("{}", lattice);

    let time_hasse = std::time::Instant::now();
    let diagram = lattice.hasse();
    println!(
        "Hasse diagram: {} edges in {:.3} s",
        diagram.edges().len(),
        time_hasse.elapsed().as_secs_f64()
    );
    for edge in diagram.edges() {
        let child = diagram.lattice().get(edge.child);
        let parent = diagram.lattice().get(edge.parent);
        println!("  {} -> {}", child.extent(), parent.extent());
    }

    if let Some(path) = &args.dot {
        let config = DotConfig {
            labels: args.labels.into(),
            ..DotConfig::default()
        };
        std::fs::write(path, diagram.to_dot_with_config(&config)?)?;
        println!("Wrote DOT to {}", path.display());
    }

    println!("\nAll done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
