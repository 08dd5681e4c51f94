//! Plan assembler: numeric targets plus the outputs of the four generators.

use serde::{Deserialize, Serialize};

use crate::actions::{DailyAction, build_plan};
use crate::category::{SavingsCategory, classify};
use crate::profile::FinancialProfile;
use crate::suggestions::{PersonalizedSuggestion, rank};
use crate::tips::compose_tips;

/// Renderer week boundaries over the 30 days: 1-7, 8-14, 15-21, 22-28, 29-30.
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS: usize = 5;

/// The generated 30-day improvement plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPlan {
    /// savings / income, or 0 when income is 0. Not clamped.
    pub savings_rate: f64,
    pub category: SavingsCategory,
    pub category_message: String,
    /// Half of disposable income, floored at 0
    pub savings_target: f64,
    /// min(10% of expenses, 30% of disposable income). Not floored.
    pub expense_reduction_target: f64,
    pub projected_savings: f64,
    pub daily_tips: Vec<String>,
    pub thirty_day_plan: Vec<DailyAction>,
    pub personalized_suggestions: Vec<PersonalizedSuggestion>,
}

impl FinancialPlan {
    pub fn savings_rate_percent(&self) -> f64 {
        self.savings_rate * 100.0
    }

    /// The five display weeks; the last holds days 29-30.
    pub fn weeks(&self) -> Vec<&[DailyAction]> {
        self.thirty_day_plan.chunks(DAYS_PER_WEEK).collect()
    }

    /// 1-based week lookup
    pub fn week(&self, n: usize) -> Option<&[DailyAction]> {
        n.checked_sub(1)
            .and_then(|i| self.thirty_day_plan.chunks(DAYS_PER_WEEK).nth(i))
    }

    /// Sum of the monthly savings the suggestions estimate.
    pub fn total_potential_savings(&self) -> f64 {
        self.personalized_suggestions
            .iter()
            .map(|s| s.potential_savings)
            .sum()
    }
}

/// Savings rate with the zero-income guard. Negative income is not guarded.
pub fn savings_rate(profile: &FinancialProfile) -> f64 {
    if profile.monthly_income > 0.0 {
        profile.monthly_savings / profile.monthly_income
    } else {
        0.0
    }
}

/// Generate the plan for a profile. Pure and deterministic; never fails.
pub fn generate_financial_plan(profile: &FinancialProfile) -> FinancialPlan {
    let savings_rate = savings_rate(profile);
    let (category, message) = classify(savings_rate);

    let disposable = profile.disposable_income();
    let savings_target = (disposable * 0.5).max(0.0);
    let expense_reduction_target = (profile.monthly_expenses * 0.1).min(disposable * 0.3);

    let daily_tips = compose_tips(profile, category, savings_target, expense_reduction_target);
    let thirty_day_plan = build_plan(profile, category);
    let personalized_suggestions = rank(profile);

    tracing::debug!(
        %category,
        savings_rate,
        savings_target,
        expense_reduction_target,
        tips = daily_tips.len(),
        suggestions = personalized_suggestions.len(),
        "generated financial plan"
    );

    FinancialPlan {
        savings_rate,
        category,
        category_message: message.to_string(),
        savings_target,
        expense_reduction_target,
        projected_savings: profile.monthly_savings + savings_target,
        daily_tips,
        thirty_day_plan,
        personalized_suggestions,
    }
}
