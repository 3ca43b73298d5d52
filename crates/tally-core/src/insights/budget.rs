//! Budget advice and budget progress

use serde::Serialize;

use crate::models::ExpenseRecord;

use super::aggregate::total_amount;

/// Recommended budget when there is no spending history
pub const DEFAULT_BUDGET: f64 = 5000.0;

/// Markup applied to recent spending
pub const BUDGET_BUFFER: f64 = 1.2;

/// Recommendations are rounded up to a multiple of this
pub const BUDGET_ROUNDING: f64 = 1000.0;

/// Percent used at which a budget needs attention
pub const CAUTION_PERCENT: f64 = 70.0;

/// Percent used at which a budget is nearly exhausted
pub const CRITICAL_PERCENT: f64 = 90.0;

/// Remaining share at or below which a low balance is flagged
pub const LOW_BALANCE_SHARE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAdvice {
    pub recommended_amount: f64,
    /// Absent when there was no spending history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_spend: Option<f64>,
    pub reasoning: String,
}

/// Propose a budget: recent spending plus 20%, rounded up to the next 1000
pub fn advise_budget(records: &[ExpenseRecord], currency_symbol: &str) -> BudgetAdvice {
    if records.is_empty() {
        return BudgetAdvice {
            recommended_amount: DEFAULT_BUDGET,
            current_spend: None,
            reasoning: "Start with a basic budget".to_string(),
        };
    }

    let monthly_spending = total_amount(records);
    let recommended_amount =
        (monthly_spending * BUDGET_BUFFER / BUDGET_ROUNDING).ceil() * BUDGET_ROUNDING;

    tracing::debug!(
        records = records.len(),
        spending = monthly_spending,
        recommended = recommended_amount,
        "Budget advice computed"
    );

    BudgetAdvice {
        recommended_amount,
        current_spend: Some(monthly_spending),
        reasoning: format!(
            "Based on your recent spending of {}{}, we recommend a budget with 20% buffer",
            currency_symbol, monthly_spending
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    /// Under 70% used
    Healthy,
    /// 70% to under 90% used
    Caution,
    /// 90% or more used
    Critical,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Healthy => "healthy",
            BudgetLevel::Caution => "caution",
            BudgetLevel::Critical => "critical",
        }
    }
}

/// Progress of spending against a set budget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub budget: f64,
    pub spent: f64,
    /// Negative when over budget
    pub remaining: f64,
    pub percent_used: f64,
    /// `percent_used` capped at 100
    pub progress: f64,
    pub level: BudgetLevel,
    /// Less than 10% of the budget left, but not yet overspent
    pub low_balance: bool,
}

/// Compare spending against a budget; `None` when no budget is set (≤ 0)
pub fn budget_status(budget: f64, records: &[ExpenseRecord]) -> Option<BudgetStatus> {
    if budget <= 0.0 || !budget.is_finite() {
        return None;
    }

    let spent = total_amount(records);
    let remaining = budget - spent;
    let percent_used = spent / budget * 100.0;

    let level = if percent_used >= CRITICAL_PERCENT {
        BudgetLevel::Critical
    } else if percent_used >= CAUTION_PERCENT {
        BudgetLevel::Caution
    } else {
        BudgetLevel::Healthy
    };

    let low_balance = remaining > 0.0 && remaining / budget <= LOW_BALANCE_SHARE;
    if low_balance {
        tracing::warn!(budget, remaining, "Budget nearly exhausted");
    }

    Some(BudgetStatus {
        budget,
        spent,
        remaining,
        percent_used,
        progress: percent_used.min(100.0),
        level,
        low_balance,
    })
}
