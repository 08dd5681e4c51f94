//! Financial self-report: the single input record of the plan generator.
//!
//! Every field has an empty default so that a partially filled profile file
//! still deserialises. Absence is always the empty value for the type, never null.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProfileError, Result};

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Groceries",
    "Dining Out",
    "Housing",
    "Utilities",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Healthcare",
    "Education",
    "Travel",
];

pub const SUBSCRIPTION_TYPES: &[&str] = &[
    "Streaming (Netflix, Hulu, etc.)",
    "Music (Spotify, Apple Music, etc.)",
    "News/Magazines",
    "Gaming",
    "Software/Apps",
    "Meal Kits",
    "Fitness/Wellness",
    "Beauty/Fashion Boxes",
];

pub const HOBBIES: &[&str] = &[
    "Reading",
    "Cooking",
    "Gaming",
    "Sports",
    "Fitness",
    "Art/Crafting",
    "Music",
    "Traveling",
    "Photography",
    "Collecting",
    "Gardening",
    "Shopping",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HousingType {
    #[serde(rename = "rent")]
    Rent,
    #[serde(rename = "own")]
    Own,
    #[serde(rename = "with-family")]
    WithFamily,
    #[serde(rename = "other")]
    Other,
    #[default]
    #[serde(rename = "", alias = "unset")]
    Unset,
}

impl HousingType {
    pub const ALL: [HousingType; 4] = [Self::Rent, Self::Own, Self::WithFamily, Self::Other];

    /// Wire name (kebab-case)
    pub fn as_str(&self) -> &'static str {
        match self {
            HousingType::Rent => "rent",
            HousingType::Own => "own",
            HousingType::WithFamily => "with-family",
            HousingType::Other => "other",
            HousingType::Unset => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiningFrequency {
    #[serde(rename = "rarely")]
    Rarely,
    #[serde(rename = "sometimes")]
    Sometimes,
    #[serde(rename = "often")]
    Often,
    #[serde(rename = "very-often")]
    VeryOften,
    #[default]
    #[serde(rename = "", alias = "unset")]
    Unset,
}

impl DiningFrequency {
    pub const ALL: [DiningFrequency; 4] =
        [Self::Rarely, Self::Sometimes, Self::Often, Self::VeryOften];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiningFrequency::Rarely => "rarely",
            DiningFrequency::Sometimes => "sometimes",
            DiningFrequency::Often => "often",
            DiningFrequency::VeryOften => "very-often",
            DiningFrequency::Unset => "",
        }
    }

    /// `often` or `very often`
    pub fn is_frequent(&self) -> bool {
        matches!(self, DiningFrequency::Often | DiningFrequency::VeryOften)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommutingMethod {
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "public-transport")]
    PublicTransport,
    #[serde(rename = "bicycle")]
    Bicycle,
    #[serde(rename = "walk")]
    Walk,
    #[serde(rename = "work-from-home")]
    WorkFromHome,
    #[serde(rename = "other")]
    Other,
    #[default]
    #[serde(rename = "", alias = "unset")]
    Unset,
}

impl CommutingMethod {
    pub const ALL: [CommutingMethod; 6] = [
        Self::Car,
        Self::PublicTransport,
        Self::Bicycle,
        Self::Walk,
        Self::WorkFromHome,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommutingMethod::Car => "car",
            CommutingMethod::PublicTransport => "public-transport",
            CommutingMethod::Bicycle => "bicycle",
            CommutingMethod::Walk => "walk",
            CommutingMethod::WorkFromHome => "work-from-home",
            CommutingMethod::Other => "other",
            CommutingMethod::Unset => "",
        }
    }
}

/// Financial priorities, drawn from a fixed vocabulary. The first one listed is primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialPriority {
    #[serde(rename = "debt-payment")]
    DebtPayment,
    #[serde(rename = "emergency-fund")]
    EmergencyFund,
    #[serde(rename = "retirement")]
    Retirement,
    #[serde(rename = "home-purchase")]
    HomePurchase,
    #[serde(rename = "travel")]
    Travel,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "other")]
    Other,
}

impl FinancialPriority {
    pub const ALL: [FinancialPriority; 7] = [
        Self::DebtPayment,
        Self::EmergencyFund,
        Self::Retirement,
        Self::HomePurchase,
        Self::Travel,
        Self::Education,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialPriority::DebtPayment => "debt-payment",
            FinancialPriority::EmergencyFund => "emergency-fund",
            FinancialPriority::Retirement => "retirement",
            FinancialPriority::HomePurchase => "home-purchase",
            FinancialPriority::Travel => "travel",
            FinancialPriority::Education => "education",
            FinancialPriority::Other => "other",
        }
    }
}

/// Human label: the wire name with spaces, which is how values read inside generated prose.
fn label(wire: &str) -> String {
    wire.replace('-', " ")
}

/// Accepts `very-often`, `very often`, `VERY_OFTEN`, ...
fn parse_variant<T: Copy>(
    field: &'static str,
    s: &str,
    all: &[T],
    wire: fn(&T) -> &'static str,
) -> Result<T> {
    let key = s.trim().to_lowercase().replace([' ', '_'], "-");
    all.iter()
        .copied()
        .find(|v| wire(v) == key)
        .ok_or_else(|| ProfileError::UnknownVariant {
            field,
            value: s.to_string(),
        })
}

macro_rules! impl_text {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&label(self.as_str()))
            }
        }

        impl FromStr for $ty {
            type Err = ProfileError;

            fn from_str(s: &str) -> Result<Self> {
                parse_variant($field, s, &<$ty>::ALL, <$ty>::as_str)
            }
        }
    };
}

impl_text!(HousingType, "housing type");
impl_text!(DiningFrequency, "dining-out frequency");
impl_text!(CommutingMethod, "commuting method");
impl_text!(FinancialPriority, "financial priority");

/// The user's financial self-report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialProfile {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_savings: f64,
    pub financial_goal: f64,

    pub occupation: String,
    pub housing_type: HousingType,

    /// First element is the primary expense category.
    pub top_expense_categories: Vec<String>,
    pub dining_out_frequency: DiningFrequency,
    /// Only the count matters to the generator.
    pub subscription_services: Vec<String>,

    pub commuting_method: CommutingMethod,
    pub hobbies: Vec<String>,
    /// First element is the primary priority.
    pub financial_priorities: Vec<FinancialPriority>,
}

impl FinancialProfile {
    /// Wire names of every field, in declaration order.
    pub const FIELD_NAMES: [&'static str; 12] = [
        "monthly_income",
        "monthly_expenses",
        "monthly_savings",
        "financial_goal",
        "occupation",
        "housing_type",
        "top_expense_categories",
        "dining_out_frequency",
        "subscription_services",
        "commuting_method",
        "hobbies",
        "financial_priorities",
    ];

    pub fn new(monthly_income: f64, monthly_expenses: f64, monthly_savings: f64) -> Self {
        Self {
            monthly_income,
            monthly_expenses,
            monthly_savings,
            ..Self::default()
        }
    }

    /// Savings implied by income and expenses when the user doesn't state them.
    pub fn derived_savings(monthly_income: f64, monthly_expenses: f64) -> f64 {
        (monthly_income - monthly_expenses).max(0.0)
    }

    pub fn with_goal(mut self, financial_goal: f64) -> Self {
        self.financial_goal = financial_goal;
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }

    pub fn with_housing(mut self, housing_type: HousingType) -> Self {
        self.housing_type = housing_type;
        self
    }

    pub fn with_dining(mut self, frequency: DiningFrequency) -> Self {
        self.dining_out_frequency = frequency;
        self
    }

    pub fn with_commute(mut self, method: CommutingMethod) -> Self {
        self.commuting_method = method;
        self
    }

    pub fn with_expense_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.top_expense_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subscriptions<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscription_services = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = hobbies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = FinancialPriority>) -> Self {
        self.financial_priorities = priorities.into_iter().collect();
        self
    }

    /// Reject negative or non-finite amounts. The generator does not call this.
    pub fn validate(&self) -> Result<()> {
        let amounts = [
            ("monthly income", self.monthly_income),
            ("monthly expenses", self.monthly_expenses),
            ("monthly savings", self.monthly_savings),
            ("financial goal", self.financial_goal),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(ProfileError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ProfileError::NegativeAmount { field, value });
            }
        }
        Ok(())
    }

    pub fn primary_expense(&self) -> Option<&str> {
        self.top_expense_categories.first().map(String::as_str)
    }

    pub fn has_expense_category(&self, category: &str) -> bool {
        self.top_expense_categories.iter().any(|c| c == category)
    }

    pub fn primary_priority(&self) -> Option<FinancialPriority> {
        self.financial_priorities.first().copied()
    }

    pub fn has_priority(&self, priority: FinancialPriority) -> bool {
        self.financial_priorities.contains(&priority)
    }

    pub fn first_hobby(&self) -> Option<&str> {
        self.hobbies.first().map(String::as_str)
    }

    pub fn has_hobby(&self, hobby: &str) -> bool {
        self.hobbies.iter().any(|h| h == hobby)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscription_services.len()
    }

    pub fn occupation(&self) -> Option<&str> {
        if self.occupation.is_empty() {
            None
        } else {
            Some(&self.occupation)
        }
    }

    /// Income minus expenses minus current savings. May be negative.
    pub fn disposable_income(&self) -> f64 {
        self.monthly_income - self.monthly_expenses - self.monthly_savings
    }
}
