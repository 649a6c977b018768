//! Color suggestion command.

use anyhow::{Context, Result};

use lumen_suggest::suggest;

use crate::cli::SuggestArgs;

/// Run `lumen suggest`.
pub fn run(args: &SuggestArgs) -> Result<()> {
    let suggestion = suggest(
        &args.color1,
        &args.color2,
        args.adjust_background,
        args.target.map(Into::into),
    )
    .context("could not compute a suggestion")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!(
        "{} on {} -> {} on {}",
        args.color2, args.color1, suggestion.suggested_color2, suggestion.suggested_color1
    );
    println!(
        "achieved {:.2} aiming for {} ({} steps)",
        suggestion.new_ratio, suggestion.target_level, suggestion.iterations
    );

    Ok(())
}
