//! Plain-text rendering of a plan.
//!
//! `render_week_text` is also the fallback when a visual week export isn't available.

use std::fmt::Write;

use wellness_core::money::format_amount;
use wellness_core::plan::WEEKS;
use wellness_core::{DailyAction, FinancialPlan};

use crate::error::{ExportError, Result};

fn push_day(out: &mut String, action: &DailyAction) {
    let _ = writeln!(
        out,
        "  Day {:>2}  {}  {} [{}]",
        action.day, action.emoji, action.task, action.category
    );
}

fn push_week(out: &mut String, n: usize, days: &[DailyAction]) {
    let (first, last) = match (days.first(), days.last()) {
        (Some(f), Some(l)) => (f.day, l.day),
        _ => return,
    };
    let _ = writeln!(out, "Week {n} (days {first}-{last})");
    for action in days {
        push_day(out, action);
    }
}

/// Full plan: category, targets, all five weeks, suggestions and tips.
pub fn render_plan_text(plan: &FinancialPlan) -> String {
    let mut out = String::new();

    out.push_str("Your 30-Day Financial Improvement Plan\n\n");
    let _ = writeln!(out, "{} {}", plan.category.badge(), plan.category);
    let _ = writeln!(out, "Current Savings Rate: {:.1}%", plan.savings_rate_percent());
    let _ = writeln!(out, "{}\n", plan.category_message);

    out.push_str("Monthly Targets\n");
    let _ = writeln!(out, "  Additional Savings Target: ${}", format_amount(plan.savings_target));
    let _ = writeln!(
        out,
        "  Expense Reduction Target: ${}",
        format_amount(plan.expense_reduction_target)
    );
    let _ = writeln!(out, "  Projected Total Savings: ${}\n", format_amount(plan.projected_savings));

    for (i, days) in plan.weeks().into_iter().enumerate() {
        push_week(&mut out, i + 1, days);
        out.push('\n');
    }

    if !plan.personalized_suggestions.is_empty() {
        out.push_str("Personalized Suggestions\n");
        for s in &plan.personalized_suggestions {
            let _ = writeln!(
                out,
                "  - {} (~${}/month, {}, {})",
                s.title,
                format_amount(s.potential_savings),
                s.implementation_difficulty.as_str(),
                s.time_frame.as_str()
            );
            let _ = writeln!(out, "    {}", s.description);
        }
        let _ = writeln!(
            out,
            "  Combined potential: ~${}/month",
            format_amount(plan.total_potential_savings())
        );
        out.push('\n');
    }

    out.push_str("Key Financial Tips\n");
    for tip in &plan.daily_tips {
        let _ = writeln!(out, "  - {tip}");
    }

    out
}

/// A single week's sheet (1-based week number).
pub fn render_week_text(plan: &FinancialPlan, week: usize) -> Result<String> {
    let days = plan
        .week(week)
        .ok_or(ExportError::WeekOutOfRange { week, weeks: WEEKS })?;

    let mut out = String::new();
    let _ = writeln!(out, "{} {} plan", plan.category.badge(), plan.category);
    push_week(&mut out, week, days);
    Ok(out)
}
