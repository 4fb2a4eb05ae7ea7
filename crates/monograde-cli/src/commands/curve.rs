use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::resolve_config;

#[derive(Args)]
pub struct CurveArgs {
    /// Transform config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Blend between identity (0.0) and the random curve (1.0)
    #[arg(long)]
    pub strength: Option<f32>,

    /// Seed for reproducible curves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of evenly spaced points to print
    #[arg(long, default_value = "33")]
    pub points: usize,
}

pub fn run(args: &CurveArgs) -> Result<()> {
    if args.points < 2 {
        anyhow::bail!("At least 2 points are required");
    }

    let config = resolve_config(args.config.as_deref(), args.strength, args.seed)?;
    let transformer = config.build_transformer()?;
    let curve = transformer.generate_curve(&mut config.job_rng(0));

    println!("x,y");
    let last = (args.points - 1) as f64;
    for i in 0..args.points {
        let x = i as f64 / last;
        println!("{:.6},{:.6}", x, curve.eval(x));
    }

    Ok(())
}
