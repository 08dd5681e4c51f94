//! wellness-core: rule-based 30-day financial improvement plan generator

pub mod actions;
pub mod category;
pub mod error;
pub mod money;
pub mod plan;
pub mod profile;
pub mod suggestions;
pub mod tips;

pub use actions::{ActionKind, DailyAction, PLAN_DAYS, build_plan};
pub use category::{SavingsCategory, classify};
pub use error::ProfileError;
pub use plan::{FinancialPlan, generate_financial_plan, savings_rate};
pub use profile::{
    CommutingMethod, DiningFrequency, FinancialPriority, FinancialProfile, HousingType,
    EXPENSE_CATEGORIES, HOBBIES, SUBSCRIPTION_TYPES,
};
pub use suggestions::{
    Difficulty, MAX_SUGGESTIONS, PersonalizedSuggestion, SuggestionArea, TimeFrame, rank,
};
pub use tips::compose_tips;
