//! Tip composer: up to 3 personalized, 2 generic and 2 category-specific tips.

use crate::category::SavingsCategory;
use crate::money::{format_amount, round_half_up};
use crate::profile::{CommutingMethod, FinancialProfile, HousingType};

const MAX_PERSONALIZED: usize = 3;
const CATEGORY_TIPS_KEPT: usize = 2;

fn category_tips(category: SavingsCategory) -> [&'static str; 3] {
    match category {
        SavingsCategory::Growing => [
            "Consider investing in low-cost index funds",
            "Look into tax-advantaged retirement accounts",
            "Set up automatic transfers to your savings",
        ],
        SavingsCategory::Stuck => [
            "Track all daily expenses in a spending journal",
            "Try the 50/30/20 budgeting rule",
            "Review and cancel unused subscriptions",
        ],
        SavingsCategory::Critical => [
            "Start with small, achievable savings goals",
            "Cook meals at home more frequently",
            "Look for free entertainment options in your area",
        ],
    }
}

fn personalized_tips(profile: &FinancialProfile) -> Vec<String> {
    let mut tips = Vec::new();

    let dining = profile.dining_out_frequency;
    if dining.is_frequent() {
        tips.push(format!(
            "Try reducing dining out from {} to just 1-2 times per week to save approximately ${}",
            dining,
            round_half_up(profile.monthly_expenses * 0.08)
        ));
    }

    match profile.housing_type {
        HousingType::Rent => {
            tips.push("Consider negotiating your rent at renewal or exploring roommate options".into())
        }
        HousingType::Own => tips.push(
            "Look into refinancing your mortgage if rates have dropped since you purchased".into(),
        ),
        _ => {}
    }

    if profile.commuting_method == CommutingMethod::Car {
        tips.push("Track your car expenses and look for carpooling opportunities to reduce costs".into());
    }

    let subscriptions = profile.subscription_count();
    if subscriptions > 0 {
        tips.push(format!(
            "Review your {subscriptions} subscription services and consider rotating them instead of keeping all active at once"
        ));
    }

    if let Some(occupation) = profile.occupation() {
        tips.push(format!("Explore freelance opportunities in {occupation} for additional income"));
    }

    if profile.has_hobby("Shopping") {
        tips.push("Try the 24-hour rule before making non-essential purchases to reduce impulse buying".into());
    }

    tips.truncate(MAX_PERSONALIZED);
    tips
}

/// Personalized (at most 3), then the two target tips, then two category tips.
pub fn compose_tips(
    profile: &FinancialProfile,
    category: SavingsCategory,
    savings_target: f64,
    expense_reduction: f64,
) -> Vec<String> {
    let mut tips = personalized_tips(profile);
    tips.push(format!(
        "Try to save an additional ${} per month",
        format_amount(savings_target)
    ));
    tips.push(format!(
        "Look for ways to reduce expenses by ${}",
        format_amount(expense_reduction)
    ));
    tips.extend(
        category_tips(category)
            .iter()
            .take(CATEGORY_TIPS_KEPT)
            .map(|t| t.to_string()),
    );
    tips
}
