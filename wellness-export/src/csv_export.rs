//! Row-based CSV export: the day table, then a summary block, then the tips.
//!
//! Layout:
//! - `Day,Category,Task` header and one row per day
//! - `Summary` marker, `Field,Value` header and one row per target
//! - `Tips` marker and one row per tip
//!
//! The writer runs in flexible mode since the blocks have different widths.

use csv::WriterBuilder;
use wellness_core::FinancialPlan;
use wellness_core::money::format_amount;

use crate::error::{ExportError, Result};

pub const DAY_HEADER: [&str; 3] = ["Day", "Category", "Task"];
pub const SUMMARY_MARKER: &str = "Summary";
pub const TIPS_MARKER: &str = "Tips";

/// Summary rows as (field, value) pairs, in export order.
pub fn summary_rows(plan: &FinancialPlan) -> Vec<(&'static str, String)> {
    vec![
        ("Category", plan.category.to_string()),
        ("Savings Rate", format!("{:.1}%", plan.savings_rate_percent())),
        ("Savings Target", format_amount(plan.savings_target)),
        ("Expense Reduction Target", format_amount(plan.expense_reduction_target)),
        ("Projected Savings", format_amount(plan.projected_savings)),
    ]
}

pub fn plan_to_csv(plan: &FinancialPlan) -> Result<String> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    wtr.write_record(DAY_HEADER)?;
    for action in &plan.thirty_day_plan {
        wtr.write_record([
            action.day.to_string().as_str(),
            action.category.as_str(),
            action.task.as_str(),
        ])?;
    }

    wtr.write_record([SUMMARY_MARKER])?;
    wtr.write_record(["Field", "Value"])?;
    for (field, value) in summary_rows(plan) {
        wtr.write_record([field, value.as_str()])?;
    }

    wtr.write_record([TIPS_MARKER])?;
    for tip in &plan.daily_tips {
        wtr.write_record([tip.as_str()])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))?;
    let out = String::from_utf8(bytes)?;

    tracing::debug!(bytes = out.len(), tips = plan.daily_tips.len(), "exported plan csv");
    Ok(out)
}
