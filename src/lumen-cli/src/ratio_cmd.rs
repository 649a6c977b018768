//! Single-pair contrast command.

use anyhow::{Context, Result};

use lumen_color::Rgb;
use lumen_contrast::{level_name, ContrastResult};

use crate::cli::RatioArgs;

/// Run `lumen ratio`.
pub fn run(args: &RatioArgs) -> Result<()> {
    let rgb1 = Rgb::from_hex(&args.color1)
        .with_context(|| format!("invalid color: {}", args.color1))?;
    let rgb2 = Rgb::from_hex(&args.color2)
        .with_context(|| format!("invalid color: {}", args.color2))?;

    let result = ContrastResult::for_pair(rgb1, rgb2);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} vs {}: {} ({})",
        rgb1.to_hex(),
        rgb2.to_hex(),
        result.ratio_display(),
        level_name(result.ratio)
    );

    Ok(())
}
