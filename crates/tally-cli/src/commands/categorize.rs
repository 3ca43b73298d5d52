//! Category suggestion command

use anyhow::Result;
use tally_core::InsightEngine;

pub fn cmd_categorize(engine: &InsightEngine, description: &str) -> Result<()> {
    let category = engine.categorize(description);
    println!("{}", category);
    Ok(())
}
