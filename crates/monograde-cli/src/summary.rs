use std::path::Path;

use console::Style;
use monograde_core::config::TransformConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_apply_summary(
    config: &TransformConfig,
    inputs: usize,
    variants: usize,
    output_dir: &Path,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Monotone Grading"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Inputs"),
        s.value.apply_to(inputs)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Variants"),
        s.value.apply_to(variants)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Strength"),
        s.value.apply_to(format!("{:.2}", config.strength))
    );
    match config.seed {
        Some(seed) => println!(
            "  {:<14}{}",
            s.label.apply_to("Seed"),
            s.value.apply_to(seed)
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Seed"),
            s.disabled.apply_to("random")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Curve"),
        s.value.apply_to(format!(
            "{} samples, {} terms, decay {}",
            config.curve.resolution, config.curve.terms, config.curve.decay_exponent
        ))
    );
    println!();
}
