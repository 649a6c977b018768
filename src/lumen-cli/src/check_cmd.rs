//! Palette evaluation command.

use anyhow::Result;

use lumen_contrast::{evaluate_palette, level_name};

use crate::cli::CheckArgs;

/// Run `lumen check`.
pub fn run(args: &CheckArgs) -> Result<()> {
    let evaluation = evaluate_palette(&args.colors, !args.no_black_white);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    if evaluation.is_empty() {
        println!("No valid colors supplied (expected #RRGGBB entries).");
        return Ok(());
    }

    for (color1, row) in &evaluation.results {
        println!("{color1}");
        for (color2, result) in row {
            println!(
                "  vs {color2}: {} ({})",
                result.ratio_display(),
                level_name(result.ratio)
            );
        }
    }

    if let Some(summary) = &evaluation.summary {
        println!();
        println!(
            "pairs: {}  AAA: {}  AA: {}  AA Large: {}  failed: {}",
            summary.total,
            summary.aaa,
            summary.aa,
            summary.aa_large,
            summary.total - summary.aaa - summary.aa - summary.aa_large
        );
    }

    Ok(())
}
