//! Budget advice and status commands

use std::path::Path;

use anyhow::Result;
use tally_core::insights::BudgetLevel;
use tally_core::{recent, InsightEngine};

use super::{load_expenses, money, print_json};

pub fn cmd_budget(engine: &InsightEngine, file: &Path, json: bool) -> Result<()> {
    let records = load_expenses(file)?;
    let records = recent(&records, engine.config().limits.budget_records);
    let advice = engine.advise_budget(&records);

    if json {
        return print_json(&advice);
    }

    let symbol = &engine.config().currency_symbol;
    println!();
    println!("🎯 Budget Recommendation");
    println!(
        "   Recommended:  {}",
        money(symbol, advice.recommended_amount)
    );
    if let Some(current) = advice.current_spend {
        println!("   Recent spend: {}", money(symbol, current));
    }
    println!("   {}", advice.reasoning);
    Ok(())
}

pub fn cmd_status(engine: &InsightEngine, file: &Path, budget: f64, json: bool) -> Result<()> {
    let records = load_expenses(file)?;
    let Some(status) = engine.budget_status(budget, &records) else {
        anyhow::bail!("Budget must be a positive amount, got {}", budget);
    };

    if json {
        return print_json(&status);
    }

    let symbol = &engine.config().currency_symbol;
    let icon = match status.level {
        BudgetLevel::Healthy => "🟢",
        BudgetLevel::Caution => "🟡",
        BudgetLevel::Critical => "🔴",
    };

    println!();
    println!("💰 Budget Status");
    println!("   Budget:     {}", money(symbol, status.budget));
    println!("   Spent:      {}", money(symbol, status.spent));
    println!("   Remaining:  {}", money(symbol, status.remaining));
    println!(
        "   Progress:   {} {:.1}% ({})",
        icon,
        status.progress,
        status.level.as_str()
    );
    if status.low_balance {
        println!("   ⚠️  Less than 10% of your budget remains");
    }
    Ok(())
}
