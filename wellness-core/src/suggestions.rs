//! Personalized savings suggestions.
//!
//! A fixed list of independent rules, evaluated in order. Each rule appends at
//! most one suggestion; the result keeps the first [`MAX_SUGGESTIONS`].

use serde::{Deserialize, Serialize};

use crate::profile::{CommutingMethod, DiningFrequency, FinancialProfile, HousingType};

pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionArea {
    #[serde(rename = "housing")]
    Housing,
    #[serde(rename = "transportation")]
    Transportation,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "subscriptions")]
    Subscriptions,
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "career")]
    Career,
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "easy")]
    Easy,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "hard")]
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFrame {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "short-term")]
    ShortTerm,
    #[serde(rename = "long-term")]
    LongTerm,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::Immediate => "immediate",
            TimeFrame::ShortTerm => "short-term",
            TimeFrame::LongTerm => "long-term",
        }
    }
}

/// A rule-derived recommendation with an estimated monthly dollar impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedSuggestion {
    pub category: SuggestionArea,
    pub title: String,
    pub description: String,
    pub potential_savings: f64,
    pub implementation_difficulty: Difficulty,
    pub time_frame: TimeFrame,
}

impl PersonalizedSuggestion {
    fn new(
        category: SuggestionArea,
        title: &str,
        description: impl Into<String>,
        potential_savings: f64,
        implementation_difficulty: Difficulty,
        time_frame: TimeFrame,
    ) -> Self {
        Self {
            category,
            title: title.to_string(),
            description: description.into(),
            potential_savings,
            implementation_difficulty,
            time_frame,
        }
    }
}

/// Evaluate every rule against the profile and keep the first five that fire.
pub fn rank(profile: &FinancialProfile) -> Vec<PersonalizedSuggestion> {
    use Difficulty::{Easy, Hard, Medium};
    use SuggestionArea as Area;
    use TimeFrame::{Immediate, LongTerm, ShortTerm};

    let expenses = profile.monthly_expenses;
    let income = profile.monthly_income;
    let mut out = Vec::new();

    // Housing
    match profile.housing_type {
        HousingType::Rent => out.push(PersonalizedSuggestion::new(
            Area::Housing,
            "Optimize your housing costs",
            "Consider negotiating your rent at renewal, finding a roommate, or exploring more affordable neighborhoods while still meeting your needs.",
            expenses * 0.15,
            Medium,
            LongTerm,
        )),
        HousingType::Own => out.push(PersonalizedSuggestion::new(
            Area::Housing,
            "Refinance your mortgage",
            "If interest rates have dropped since you got your mortgage, refinancing could save you significantly over the life of the loan.",
            expenses * 0.05,
            Medium,
            LongTerm,
        )),
        _ => {}
    }

    // Transportation
    match profile.commuting_method {
        CommutingMethod::Car => out.push(PersonalizedSuggestion::new(
            Area::Transportation,
            "Optimize your commuting costs",
            "Consider carpooling, using public transportation part-time, or combining errands to save on fuel costs.",
            expenses * 0.04,
            Easy,
            Immediate,
        )),
        CommutingMethod::PublicTransport => out.push(PersonalizedSuggestion::new(
            Area::Transportation,
            "Get the best fare deal",
            "Check if monthly passes, employer discounts, or off-peak travel could reduce your public transportation costs.",
            expenses * 0.02,
            Easy,
            Immediate,
        )),
        _ => {}
    }

    // Dining out
    let dining = profile.dining_out_frequency;
    if dining.is_frequent() {
        let rate = if dining == DiningFrequency::VeryOften { 0.12 } else { 0.08 };
        out.push(PersonalizedSuggestion::new(
            Area::Food,
            "Reduce dining out expenses",
            format!(
                "Since you dine out {dining}, try reducing by 1-2 meals per week and batch cooking instead. Look for restaurant specials and happy hours when you do eat out."
            ),
            expenses * rate,
            Medium,
            Immediate,
        ));
    }

    // Subscriptions
    let subscriptions = profile.subscription_count();
    if subscriptions > 2 {
        out.push(PersonalizedSuggestion::new(
            Area::Subscriptions,
            "Streamline your subscription services",
            format!(
                "You have {subscriptions} subscriptions. Consider using service rotation (subscribe to only one streaming service at a time), sharing accounts with family, or using free alternatives."
            ),
            subscriptions as f64 * 12.0,
            Easy,
            Immediate,
        ));
    }

    // Hobbies
    if profile.has_hobby("Shopping") {
        out.push(PersonalizedSuggestion::new(
            Area::Entertainment,
            "Mindful shopping practices",
            "Try the 24-hour rule: wait a day before making non-essential purchases to avoid impulse buying. Create a \"want list\" and prioritize purchases.",
            expenses * 0.08,
            Medium,
            ShortTerm,
        ));
    }

    if profile.has_hobby("Traveling") {
        out.push(PersonalizedSuggestion::new(
            Area::Entertainment,
            "Smarter travel spending",
            "Book travel during off-peak times, use price comparison tools, and consider vacation rentals instead of hotels. Set up a dedicated travel fund with monthly contributions.",
            expenses * 0.05,
            Medium,
            LongTerm,
        ));
    }

    // Career
    if let Some(occupation) = profile.occupation() {
        out.push(PersonalizedSuggestion::new(
            Area::Career,
            "Leverage your professional skills",
            format!(
                "With your experience in {occupation}, consider freelancing, consulting, or teaching your skills for extra income. This could significantly increase your savings rate."
            ),
            income * 0.10,
            Hard,
            LongTerm,
        ));
    }

    // Primary expense category; only three labels are recognised.
    match profile.primary_expense() {
        Some("Groceries") => out.push(PersonalizedSuggestion::new(
            Area::Food,
            "Optimize grocery spending",
            "Meal plan based on sales, use a grocery list to avoid impulse purchases, buy in bulk for non-perishables, and consider store brands for staples.",
            expenses * 0.05,
            Easy,
            Immediate,
        )),
        Some("Entertainment") => out.push(PersonalizedSuggestion::new(
            Area::Entertainment,
            "Reduce entertainment costs",
            "Look for free events in your community, use library resources, take advantage of free trial periods, and check for discount days at venues.",
            expenses * 0.06,
            Easy,
            Immediate,
        )),
        Some("Utilities") => out.push(PersonalizedSuggestion::new(
            Area::Utilities,
            "Lower utility bills",
            "Install energy-efficient bulbs, use a programmable thermostat, unplug devices when not in use, and check for better rates from providers.",
            expenses * 0.03,
            Medium,
            ShortTerm,
        )),
        _ => {}
    }

    out.push(PersonalizedSuggestion::new(
        Area::Other,
        "Automate your savings",
        "Set up automatic transfers to your savings account on payday so you save before you can spend.",
        income * 0.03,
        Easy,
        Immediate,
    ));

    out.truncate(MAX_SUGGESTIONS);
    out
}
