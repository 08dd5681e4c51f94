//! Savings-rate classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse financial-health bucket derived from the savings rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SavingsCategory {
    Growing,
    Stuck,
    Critical,
}

const GROWING_THRESHOLD: f64 = 0.20;
const STUCK_THRESHOLD: f64 = 0.10;

impl SavingsCategory {
    /// Step function over all reals; negative and NaN rates land in Critical.
    pub fn classify(savings_rate: f64) -> Self {
        if savings_rate >= GROWING_THRESHOLD {
            SavingsCategory::Growing
        } else if savings_rate >= STUCK_THRESHOLD {
            SavingsCategory::Stuck
        } else {
            SavingsCategory::Critical
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SavingsCategory::Growing => {
                "Great job on your savings! You're building a strong financial foundation. Let's look at ways to make your money work even harder for you."
            }
            SavingsCategory::Stuck => {
                "You're making progress with your savings, but there's room to grow. We'll help you find opportunities to save more while maintaining your lifestyle."
            }
            SavingsCategory::Critical => {
                "Everyone starts somewhere! Let's work together to find simple ways to build your savings while keeping your daily life comfortable."
            }
        }
    }

    /// Presentation hint for renderers
    pub fn badge(&self) -> &'static str {
        match self {
            SavingsCategory::Growing => "🚀",
            SavingsCategory::Stuck => "⚡",
            SavingsCategory::Critical => "💪",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SavingsCategory::Growing => "Growing",
            SavingsCategory::Stuck => "Stuck",
            SavingsCategory::Critical => "Critical",
        }
    }
}

impl fmt::Display for SavingsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify and pair with the fixed message.
pub fn classify(savings_rate: f64) -> (SavingsCategory, &'static str) {
    let category = SavingsCategory::classify(savings_rate);
    (category, category.message())
}
