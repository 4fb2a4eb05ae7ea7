pub mod apply;
pub mod config;
pub mod curve;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use monograde_core::config::TransformConfig;
use monograde_core::io::image_io::writable_path;

/// Load a TOML config if given, then overlay command-line values.
pub fn resolve_config(
    path: Option<&Path>,
    strength: Option<f32>,
    seed: Option<u64>,
) -> Result<TransformConfig> {
    let mut config = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid transform config")?
        }
        None => TransformConfig::default(),
    };

    if let Some(strength) = strength {
        config.strength = strength;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

/// `<dir>/<name>_grade<index>.<ext>`, keeping the input's extension when an
/// 8-bit RGB encoder exists for it and switching to PNG otherwise.
pub fn variant_path(input: &Path, name: &str, output_dir: &Path, index: usize) -> PathBuf {
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    writable_path(&output_dir.join(format!("{name}_grade{index}.{ext}")))
}

/// Output paths for every `(input, variant)` pair, indexed `[file][variant]`.
///
/// Inputs sharing a file stem get their position in `inputs` appended to the
/// name. Fails if two outputs would still land on the same path.
pub fn plan_outputs(
    inputs: &[PathBuf],
    variants: usize,
    output_dir: &Path,
) -> Result<Vec<Vec<PathBuf>>> {
    let mut stem_counts: HashMap<String, usize> = HashMap::new();
    for input in inputs {
        *stem_counts.entry(file_stem(input)).or_default() += 1;
    }

    let plan: Vec<Vec<PathBuf>> = inputs
        .iter()
        .enumerate()
        .map(|(file_index, input)| {
            let stem = file_stem(input);
            let name = if stem_counts[&stem] > 1 {
                format!("{stem}_{file_index}")
            } else {
                stem
            };
            (0..variants)
                .map(|v| variant_path(input, &name, output_dir, v))
                .collect()
        })
        .collect();

    {
        let mut seen: HashMap<&Path, &Path> = HashMap::new();
        for (input, outputs) in inputs.iter().zip(&plan) {
            for output in outputs {
                if let Some(other) = seen.insert(output, input) {
                    anyhow::bail!(
                        "{} and {} would both write {}",
                        other.display(),
                        input.display(),
                        output.display()
                    );
                }
            }
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn variant_path_keeps_extension() {
        let p = variant_path(Path::new("/data/cat.jpg"), "cat", Path::new("out"), 2);
        assert_eq!(p, PathBuf::from("out/cat_grade2.jpg"));
    }

    #[test]
    fn variant_path_without_extension() {
        let p = variant_path(Path::new("raw"), "raw", Path::new("."), 0);
        assert_eq!(p, PathBuf::from("./raw_grade0.png"));
    }

    #[test]
    fn variant_path_switches_unwritable_format_to_png() {
        let p = variant_path(Path::new("anim.gif"), "anim", Path::new("out"), 0);
        assert_eq!(p, PathBuf::from("out/anim_grade0.png"));
        let p = variant_path(Path::new("photo.webp"), "photo", Path::new("out"), 0);
        assert_eq!(p, PathBuf::from("out/photo_grade0.webp"));
    }

    #[test]
    fn plan_outputs_unique_stems_keep_plain_names() {
        let plan = plan_outputs(&paths(&["a/cat.png", "b/dog.jpg"]), 2, Path::new("out")).unwrap();
        assert_eq!(
            plan,
            vec![
                paths(&["out/cat_grade0.png", "out/cat_grade1.png"]),
                paths(&["out/dog_grade0.jpg", "out/dog_grade1.jpg"]),
            ]
        );
    }

    #[test]
    fn plan_outputs_separates_shared_stems() {
        let plan = plan_outputs(&paths(&["day1/cat.png", "day2/cat.png"]), 1, Path::new("out"))
            .unwrap();
        assert_ne!(plan[0][0], plan[1][0]);
        assert_eq!(plan[0][0], PathBuf::from("out/cat_0_grade0.png"));
        assert_eq!(plan[1][0], PathBuf::from("out/cat_1_grade0.png"));
    }

    #[test]
    fn plan_outputs_rejects_remaining_collisions() {
        // `cat_1` is a plain stem that collides with the disambiguated `cat` at index 1.
        let inputs = paths(&["x/cat.png", "y/cat.png", "cat_1.png"]);
        assert!(plan_outputs(&inputs, 1, Path::new("out")).is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve_config(None, Some(0.9), Some(7)).unwrap();
        assert_eq!(config.strength, 0.9);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grade.toml");
        std::fs::write(&path, "strength = 0.2\nseed = 5\n\n[curve]\nterms = 20\n").unwrap();

        let config = resolve_config(Some(&path), None, Some(9)).unwrap();
        assert_eq!(config.strength, 0.2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.curve.terms, 20);
        assert_eq!(config.curve.resolution, 1000);
    }
}
