//! Types command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use estate_core::{Catalog, FilterChip};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Print the filters as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &Context, args: TypesArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let types = catalog
        .property_types()
        .await
        .context("Failed to load property types")?;

    let chips = FilterChip::row(&types);
    if args.json {
        return output::json_pretty(&chips);
    }

    for chip in &chips {
        println!("{:<8} {}", chip.filter.to_string(), chip.label);
    }
    Ok(())
}
