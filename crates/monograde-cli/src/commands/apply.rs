use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use monograde_core::config::TransformConfig;
use monograde_core::io::image_io::{load_image, save_image};
use monograde_core::MonotoneImageTransformer;
use rayon::prelude::*;
use tracing::info;

use super::{plan_outputs, resolve_config};
use crate::summary::print_apply_summary;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input images (PNG, JPEG, TIFF, ...)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Transform config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Blend between identity (0.0) and the random curve (1.0)
    #[arg(long)]
    pub strength: Option<f32>,

    /// Base seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of graded variants written per input
    #[arg(long, default_value = "1")]
    pub variants: usize,

    /// Directory for the graded images
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    if args.variants == 0 {
        anyhow::bail!("--variants must be at least 1");
    }

    let config = resolve_config(args.config.as_deref(), args.strength, args.seed)?;
    let transformer = config.build_transformer()?;

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    let plan = plan_outputs(&args.files, args.variants, &args.output_dir)?;

    print_apply_summary(&config, args.files.len(), args.variants, &args.output_dir);

    let total = args.files.len() * args.variants;
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Grading [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let failures: Vec<(PathBuf, anyhow::Error)> = args
        .files
        .par_iter()
        .zip(plan.par_iter())
        .enumerate()
        .filter_map(|(file_index, (input, outputs))| {
            grade_file(
                input,
                file_index,
                outputs,
                &config,
                &transformer,
                &pb,
            )
            .err()
            .map(|e| (input.clone(), e))
        })
        .collect();
    pb.finish();

    for (path, err) in &failures {
        eprintln!("{}: {:#}", path.display(), err);
    }
    if !failures.is_empty() {
        anyhow::bail!("{} of {} input(s) failed", failures.len(), args.files.len());
    }

    println!("Wrote {} image(s) to {}", total, args.output_dir.display());
    Ok(())
}

fn grade_file(
    input: &Path,
    file_index: usize,
    outputs: &[PathBuf],
    config: &TransformConfig,
    transformer: &MonotoneImageTransformer,
    pb: &ProgressBar,
) -> Result<()> {
    let image =
        load_image(input).with_context(|| format!("Failed to load {}", input.display()))?;

    for (variant, output) in outputs.iter().enumerate() {
        let job = (file_index * outputs.len() + variant) as u64;
        let mut rng = config.job_rng(job);
        let graded = transformer
            .apply_to_image(&image, &mut rng)
            .with_context(|| format!("Failed to grade {}", input.display()))?;

        save_image(&graded, output)
            .with_context(|| format!("Failed to save {}", output.display()))?;
        info!(input = %input.display(), output = %output.display(), job, "Saved graded image");
        pb.inc(1);
    }

    Ok(())
}
