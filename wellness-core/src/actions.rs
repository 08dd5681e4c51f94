//! 30-day action sequencer.
//!
//! The month is five fixed blocks: awareness (days 1-5), habit (6-10), a
//! category-specific block (11-15) and a common tail (16-30). Each slot is a
//! (day, kind, emoji, text) row; the text selector prefers a phrase built from the
//! profile and falls back to generic wording when the relevant field is empty.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::SavingsCategory;
use crate::money::round_half_up;
use crate::profile::{FinancialPriority, FinancialProfile, HousingType};

pub const PLAN_DAYS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "awareness")]
    Awareness,
    #[serde(rename = "habit")]
    Habit,
    #[serde(rename = "action")]
    Action,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Awareness => "awareness",
            ActionKind::Habit => "habit",
            ActionKind::Action => "action",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAction {
    /// 1-30
    pub day: u8,
    pub task: String,
    pub category: ActionKind,
    /// Presentation hint, carried through unchanged
    pub emoji: String,
}

/// Profile plus the amounts quoted inline by some slots.
struct SlotInputs<'a> {
    profile: &'a FinancialProfile,
    /// round(expenses * 0.1)
    monthly_expense_target: i64,
    /// round(goal / 365)
    daily_savings_goal: i64,
}

impl SlotInputs<'_> {
    fn dines_out_often(&self) -> bool {
        self.profile.dining_out_frequency.is_frequent()
    }

    fn has_priority(&self, priority: FinancialPriority) -> bool {
        self.profile.has_priority(priority)
    }
}

type TaskText = fn(&SlotInputs<'_>) -> String;

struct Slot {
    day: u8,
    kind: ActionKind,
    emoji: &'static str,
    text: TaskText,
}

const fn slot(day: u8, kind: ActionKind, emoji: &'static str, text: TaskText) -> Slot {
    Slot { day, kind, emoji, text }
}

use ActionKind::{Action, Awareness, Habit};

static AWARENESS: [Slot; 5] = [
    slot(1, Awareness, "📱", |s| match s.profile.subscription_count() {
        0 => "Download a spending tracker app".into(),
        n => format!("Review your {n} subscription services for duplicates"),
    }),
    slot(2, Awareness, "📝", |s| match s.profile.primary_expense() {
        Some(top) => format!("Analyze your top expense: {top}"),
        None => "List all your monthly subscriptions".into(),
    }),
    slot(3, Awareness, "🏦", |_| "Review last month's bank statement".into()),
    slot(4, Awareness, "☕", |s| {
        if s.dines_out_often() {
            "Calculate how much you spend dining out each week".into()
        } else {
            "Calculate your daily coffee/snack spending".into()
        }
    }),
    slot(5, Awareness, "🎯", |s| match s.profile.primary_priority() {
        Some(priority) => format!("Create a plan for your top priority: {priority}"),
        None => "List your financial goals and priorities".into(),
    }),
];

static HABIT: [Slot; 5] = [
    slot(6, Habit, "🍱", |s| {
        if s.dines_out_often() {
            "Pack lunch for tomorrow instead of eating out".into()
        } else {
            "Prepare a homemade coffee to save on café costs".into()
        }
    }),
    slot(7, Habit, "✉️", |s| {
        if s.profile.has_expense_category("Shopping") {
            "Unsubscribe from shopping newsletters and promotional emails".into()
        } else {
            "Unsubscribe from one service you rarely use".into()
        }
    }),
    slot(8, Habit, "📅", |s| {
        if s.profile.has_expense_category("Groceries") {
            "Create a budget-friendly meal plan using grocery ads".into()
        } else {
            "Create a simple meal plan for the week".into()
        }
    }),
    slot(9, Habit, "💰", |s| {
        if s.has_priority(FinancialPriority::EmergencyFund) {
            "Set up an automatic transfer of $20 to your emergency fund".into()
        } else {
            "Set up auto-transfer for savings".into()
        }
    }),
    slot(10, Habit, "🎨", |s| match s.profile.first_hobby() {
        Some(hobby) => format!("Find a free way to enjoy your {hobby} hobby"),
        None => "Find a free weekend activity".into(),
    }),
];

static GROWING: [Slot; 5] = [
    slot(11, Action, "📊", |s| {
        if s.has_priority(FinancialPriority::Retirement) {
            "Research increasing your retirement contributions".into()
        } else {
            "Research index fund investing".into()
        }
    }),
    slot(12, Action, "💵", |s| {
        let target = s
            .profile
            .primary_priority()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "your financial goal".to_string());
        format!("Set aside ${} today toward {}", s.daily_savings_goal, target)
    }),
    slot(13, Action, "🏦", |_| {
        "Compare interest rates on high-yield savings accounts".into()
    }),
    slot(14, Action, "💡", |s| match s.profile.occupation() {
        Some(job) => format!("List potential side hustle ideas related to your {job} expertise"),
        None => "List potential side hustle ideas".into(),
    }),
    slot(15, Action, "👵", |_| "Review your retirement contributions".into()),
];

static STUCK: [Slot; 5] = [
    slot(11, Action, "✂️", |s| match s.profile.subscription_services.first() {
        Some(service) => format!("Choose one subscription to cancel: {service}"),
        None => "Find one subscription to cancel".into(),
    }),
    slot(12, Action, "📦", |s| {
        if s.profile.has_hobby("Collecting") {
            format!("Find collectibles worth ${} to sell", s.monthly_expense_target)
        } else {
            format!("Find items worth ${} to sell", s.monthly_expense_target)
        }
    }),
    slot(13, Action, "🔍", |s| match s.profile.primary_expense() {
        Some(top) => format!("Compare prices on your {top} expenses"),
        None => "Compare prices on your regular purchases".into(),
    }),
    slot(14, Action, "📞", |s| {
        if s.profile.housing_type == HousingType::Rent {
            "Research if you can negotiate your rent or find a more affordable option".into()
        } else {
            "Call one service provider to negotiate rates".into()
        }
    }),
    slot(15, Action, "💳", |_| {
        "Research cashback credit cards for your most common purchases".into()
    }),
];

static CRITICAL: [Slot; 5] = [
    slot(11, Action, "🎭", |s| match s.profile.first_hobby() {
        Some(hobby) => format!("Find 3 free alternatives to paid {hobby} activities"),
        None => "List 3 free alternatives to paid activities".into(),
    }),
    slot(12, Action, "✂️", |s| match s.profile.primary_expense() {
        Some(top) if top != "Housing" => format!("Find one way to reduce your {top} expenses"),
        _ => "Find one unnecessary expense to cut".into(),
    }),
    slot(13, Action, "🤝", |_| "Research local free financial counseling".into()),
    slot(14, Action, "📊", |s| {
        if s.has_priority(FinancialPriority::DebtPayment) {
            "Create a debt snowball or avalanche plan".into()
        } else {
            "Create a simple debt payoff plan".into()
        }
    }),
    slot(15, Action, "💪", |s| match s.profile.occupation() {
        Some(job) => format!("List skills from your {job} job that you could monetize"),
        None => "List skills you could monetize".into(),
    }),
];

static COMMON: [Slot; 15] = [
    slot(16, Awareness, "📈", |_| "Review your progress so far".into()),
    slot(17, Habit, "👥", |s| {
        if s.has_priority(FinancialPriority::EmergencyFund) {
            "Calculate how many months of expenses you have saved".into()
        } else {
            "Share a money-saving tip with a friend".into()
        }
    }),
    slot(18, Action, "🎯", |_| "Try a no-spend day challenge".into()),
    slot(19, Habit, "✏️", |_| "Update your expense tracker".into()),
    slot(20, Awareness, "🎧", |_| "Find a free financial podcast to follow".into()),
    slot(21, Awareness, "🧮", |_| "Calculate this week's savings".into()),
    slot(22, Action, "📅", |s| match s.profile.primary_priority() {
        Some(priority) => format!("Plan next month's budget with focus on {priority}"),
        None => "Plan next month's budget".into(),
    }),
    slot(23, Awareness, "🎯", |_| "Review your financial goals".into()),
    slot(24, Awareness, "📚", |_| "Learn one new financial term".into()),
    slot(25, Habit, "✨", |_| "Write down your money wins".into()),
    slot(26, Habit, "🎨", |s| match s.profile.first_hobby() {
        Some(hobby) => format!("Plan a free {hobby} activity"),
        None => "Plan a fun, free weekend activity".into(),
    }),
    slot(27, Awareness, "🔍", |s| {
        if s.profile.subscription_count() > 0 {
            "Check for better deals on your current subscriptions".into()
        } else {
            "Review your subscriptions again".into()
        }
    }),
    slot(28, Action, "🏆", |_| "Set a new savings milestone".into()),
    slot(29, Habit, "👨‍👩‍👧‍👦", |_| "Share your progress with family".into()),
    slot(30, Action, "📝", |_| "Create next month's action plan".into()),
];

fn category_block(category: SavingsCategory) -> &'static [Slot; 5] {
    match category {
        SavingsCategory::Growing => &GROWING,
        SavingsCategory::Stuck => &STUCK,
        SavingsCategory::Critical => &CRITICAL,
    }
}

/// Build the 30 daily actions for a profile already classified as `category`.
///
/// Always returns exactly [`PLAN_DAYS`] entries with days 1..=30 in order.
pub fn build_plan(profile: &FinancialProfile, category: SavingsCategory) -> Vec<DailyAction> {
    let inputs = SlotInputs {
        profile,
        monthly_expense_target: round_half_up(profile.monthly_expenses * 0.1),
        daily_savings_goal: round_half_up(profile.financial_goal / 365.0),
    };

    AWARENESS
        .iter()
        .chain(HABIT.iter())
        .chain(category_block(category).iter())
        .chain(COMMON.iter())
        .map(|slot| DailyAction {
            day: slot.day,
            task: (slot.text)(&inputs),
            category: slot.kind,
            emoji: slot.emoji.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CommutingMethod, DiningFrequency};

    fn rich_profile() -> FinancialProfile {
        FinancialProfile::new(6000.0, 4000.0, 1500.0)
            .with_goal(7300.0)
            .with_occupation("nurse")
            .with_housing(HousingType::Rent)
            .with_dining(DiningFrequency::VeryOften)
            .with_commute(CommutingMethod::Car)
            .with_expense_categories(["Groceries", "Shopping"])
            .with_subscriptions(["Netflix", "Spotify", "Gym"])
            .with_hobbies(["Collecting", "Reading"])
            .with_priorities([FinancialPriority::EmergencyFund, FinancialPriority::Retirement])
    }

    fn task(plan: &[DailyAction], day: u8) -> &str {
        &plan[usize::from(day) - 1].task
    }

    #[test]
    fn test_thirty_days_in_order_for_every_category() {
        for category in [SavingsCategory::Growing, SavingsCategory::Stuck, SavingsCategory::Critical] {
            for profile in [FinancialProfile::default(), rich_profile()] {
                let plan = build_plan(&profile, category);
                assert_eq!(plan.len(), PLAN_DAYS);
                for (i, action) in plan.iter().enumerate() {
                    assert_eq!(usize::from(action.day), i + 1);
                }
            }
        }
    }

    #[test]
    fn test_kind_fixed_by_block() {
        let empty = build_plan(&FinancialProfile::default(), SavingsCategory::Critical);
        let rich = build_plan(&rich_profile(), SavingsCategory::Critical);
        for (a, b) in empty.iter().zip(rich.iter()) {
            assert_eq!(a.category, b.category);
            assert_eq!(a.emoji, b.emoji);
        }
        assert!(empty[..5].iter().all(|a| a.category == ActionKind::Awareness));
        assert!(empty[5..10].iter().all(|a| a.category == ActionKind::Habit));
        assert!(empty[10..15].iter().all(|a| a.category == ActionKind::Action));
    }

    #[test]
    fn test_generic_fallbacks() {
        let plan = build_plan(&FinancialProfile::default(), SavingsCategory::Critical);
        assert_eq!(task(&plan, 1), "Download a spending tracker app");
        assert_eq!(task(&plan, 2), "List all your monthly subscriptions");
        assert_eq!(task(&plan, 4), "Calculate your daily coffee/snack spending");
        assert_eq!(task(&plan, 5), "List your financial goals and priorities");
        assert_eq!(task(&plan, 10), "Find a free weekend activity");
        assert_eq!(task(&plan, 12), "Find one unnecessary expense to cut");
        assert_eq!(task(&plan, 17), "Share a money-saving tip with a friend");
        assert_eq!(task(&plan, 22), "Plan next month's budget");
        assert_eq!(task(&plan, 27), "Review your subscriptions again");
    }

    #[test]
    fn test_personalized_awareness_and_habits() {
        let plan = build_plan(&rich_profile(), SavingsCategory::Stuck);
        assert_eq!(task(&plan, 1), "Review your 3 subscription services for duplicates");
        assert_eq!(task(&plan, 2), "Analyze your top expense: Groceries");
        assert_eq!(task(&plan, 4), "Calculate how much you spend dining out each week");
        assert_eq!(task(&plan, 5), "Create a plan for your top priority: emergency fund");
        assert_eq!(task(&plan, 6), "Pack lunch for tomorrow instead of eating out");
        assert_eq!(task(&plan, 7), "Unsubscribe from shopping newsletters and promotional emails");
        assert_eq!(task(&plan, 8), "Create a budget-friendly meal plan using grocery ads");
        assert_eq!(task(&plan, 9), "Set up an automatic transfer of $20 to your emergency fund");
        assert_eq!(task(&plan, 10), "Find a free way to enjoy your Collecting hobby");
    }

    #[test]
    fn test_growing_block() {
        let plan = build_plan(&rich_profile(), SavingsCategory::Growing);
        assert_eq!(task(&plan, 11), "Research increasing your retirement contributions");
        // 7300 / 365 = 20
        assert_eq!(task(&plan, 12), "Set aside $20 today toward emergency fund");
        assert_eq!(task(&plan, 14), "List potential side hustle ideas related to your nurse expertise");

        let bare = build_plan(&FinancialProfile::default(), SavingsCategory::Growing);
        assert_eq!(task(&bare, 11), "Research index fund investing");
        assert_eq!(task(&bare, 12), "Set aside $0 today toward your financial goal");
        assert_eq!(task(&bare, 14), "List potential side hustle ideas");
    }

    #[test]
    fn test_stuck_block() {
        let plan = build_plan(&rich_profile(), SavingsCategory::Stuck);
        assert_eq!(task(&plan, 11), "Choose one subscription to cancel: Netflix");
        // round(4000 * 0.1) = 400
        assert_eq!(task(&plan, 12), "Find collectibles worth $400 to sell");
        assert_eq!(task(&plan, 13), "Compare prices on your Groceries expenses");
        assert_eq!(
            task(&plan, 14),
            "Research if you can negotiate your rent or find a more affordable option"
        );

        let bare = build_plan(&FinancialProfile::new(0.0, 1234.0, 0.0), SavingsCategory::Stuck);
        assert_eq!(task(&bare, 12), "Find items worth $123 to sell");
        assert_eq!(task(&bare, 14), "Call one service provider to negotiate rates");
    }

    #[test]
    fn test_critical_block_skips_housing_expense() {
        let housing = FinancialProfile::default().with_expense_categories(["Housing", "Travel"]);
        let plan = build_plan(&housing, SavingsCategory::Critical);
        assert_eq!(task(&plan, 12), "Find one unnecessary expense to cut");

        let plan = build_plan(&rich_profile(), SavingsCategory::Critical);
        assert_eq!(task(&plan, 11), "Find 3 free alternatives to paid Collecting activities");
        assert_eq!(task(&plan, 12), "Find one way to reduce your Groceries expenses");
        assert_eq!(task(&plan, 14), "Create a simple debt payoff plan");
        assert_eq!(task(&plan, 15), "List skills from your nurse job that you could monetize");
    }

    #[test]
    fn test_common_tail_personalization() {
        let plan = build_plan(&rich_profile(), SavingsCategory::Growing);
        assert_eq!(task(&plan, 17), "Calculate how many months of expenses you have saved");
        assert_eq!(task(&plan, 22), "Plan next month's budget with focus on emergency fund");
        assert_eq!(task(&plan, 26), "Plan a free Collecting activity");
        assert_eq!(task(&plan, 27), "Check for better deals on your current subscriptions");
        assert_eq!(task(&plan, 30), "Create next month's action plan");
    }

    #[test]
    fn test_blocks_are_disjoint_between_categories() {
        let profile = FinancialProfile::default();
        let growing = build_plan(&profile, SavingsCategory::Growing);
        let stuck = build_plan(&profile, SavingsCategory::Stuck);
        let critical = build_plan(&profile, SavingsCategory::Critical);
        for i in 10..15 {
            assert_ne!(growing[i].task, stuck[i].task);
            assert_ne!(stuck[i].task, critical[i].task);
            assert_ne!(growing[i].task, critical[i].task);
        }
        assert_eq!(growing[..10], stuck[..10]);
        assert_eq!(stuck[15..], critical[15..]);
    }
}
