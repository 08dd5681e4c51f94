use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use wellness_core::{
    CommutingMethod, DiningFrequency, EXPENSE_CATEGORIES, FinancialPriority, FinancialProfile,
    HOBBIES, HousingType, SUBSCRIPTION_TYPES,
};

use crate::state::{SavedProfile, profile_path, write_profile};

/// Line-based prompter over any reader/writer pair, so the questionnaire runs under test.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush().ok();
        let mut s = String::new();
        let n = self.input.read_line(&mut s).context("read answer")?;
        if n == 0 {
            bail!("input ended before '{}' was answered", label);
        }
        Ok(s.trim().to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Re-ask until the answer parses.
    fn ask_parsed<T>(&mut self, label: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Ok(v) => return Ok(v),
                Err(e) => self.say(&format!("  {e:#}"))?,
            }
        }
    }
}

pub fn parse_amount(s: &str) -> Result<f64> {
    let cleaned = s.trim().trim_start_matches('$').replace(',', "");
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    let v: f64 = cleaned
        .parse()
        .with_context(|| format!("'{}' is not a number", s.trim()))?;
    if !v.is_finite() || v < 0.0 {
        bail!("amount must be zero or more");
    }
    Ok(v)
}

/// Blank means unset.
pub fn parse_choice<T: FromStr + Default>(s: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if s.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(s.parse::<T>()?)
}

/// Comma-separated list; blank entries dropped.
pub fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_priorities(s: &str) -> Result<Vec<FinancialPriority>> {
    parse_list(s)
        .iter()
        .map(|p| p.parse::<FinancialPriority>().map_err(Into::into))
        .collect()
}

fn options<T: ToString>(values: &[T]) -> String {
    values.iter().map(T::to_string).collect::<Vec<_>>().join(", ")
}

/// Walk the questionnaire and build a profile.
pub fn run_questionnaire<R: BufRead, W: Write>(input: R, output: W) -> Result<FinancialProfile> {
    let mut p = Prompter { input, output };

    p.say("Basic financial information")?;
    let monthly_income = p.ask_parsed("Monthly income", parse_amount)?;
    let monthly_expenses = p.ask_parsed("Monthly expenses", parse_amount)?;
    let derived = FinancialProfile::derived_savings(monthly_income, monthly_expenses);
    let savings_label = format!("Monthly savings (blank for {:.2})", derived);
    let monthly_savings = p.ask_parsed(&savings_label, |s| {
        if s.trim().is_empty() {
            Ok(derived)
        } else {
            parse_amount(s)
        }
    })?;
    let financial_goal = p.ask_parsed("Savings goal for the year", parse_amount)?;

    p.say("\nAbout you")?;
    let occupation = p.ask("Occupation (optional)")?;
    let housing_type: HousingType =
        p.ask_parsed(&format!("Housing [{}]", options(&HousingType::ALL)), parse_choice)?;

    p.say("\nSpending")?;
    p.say(&format!("  e.g. {}", EXPENSE_CATEGORIES.join(", ")))?;
    let top_expense_categories = parse_list(&p.ask("Top expense categories, biggest first (comma separated)")?);
    let dining_out_frequency: DiningFrequency = p.ask_parsed(
        &format!("Dining out [{}]", options(&DiningFrequency::ALL)),
        parse_choice,
    )?;
    p.say(&format!("  e.g. {}", SUBSCRIPTION_TYPES.join("; ")))?;
    let subscription_services = parse_list(&p.ask("Subscriptions (comma separated)")?);

    p.say("\nLifestyle")?;
    let commuting_method: CommutingMethod = p.ask_parsed(
        &format!("Commute [{}]", options(&CommutingMethod::ALL)),
        parse_choice,
    )?;
    p.say(&format!("  e.g. {}", HOBBIES.join(", ")))?;
    let hobbies = parse_list(&p.ask("Hobbies (comma separated)")?);
    let financial_priorities = p.ask_parsed(
        &format!("Priorities, most important first [{}]", options(&FinancialPriority::ALL)),
        parse_priorities,
    )?;

    let profile = FinancialProfile {
        monthly_income,
        monthly_expenses,
        monthly_savings,
        financial_goal,
        occupation,
        housing_type,
        top_expense_categories,
        dining_out_frequency,
        subscription_services,
        commuting_method,
        hobbies,
        financial_priorities,
    };
    profile.validate()?;
    Ok(profile)
}

pub fn run_setup() -> Result<()> {
    println!("Financial wellness setup\n");
    let stdin = io::stdin();
    let profile = run_questionnaire(stdin.lock(), io::stdout())?;

    let path = profile_path()?;
    let saved = SavedProfile {
        created_at_utc: Some(chrono::Utc::now().to_rfc3339()),
        profile,
    };
    write_profile(&path, &saved)?;
    tracing::info!(path = %path.display(), "saved profile");

    println!("\nWrote:");
    println!("- {}", path.display());

    println!("\nNext recommended steps:");
    println!("- wellness plan");
    println!("- wellness export");

    Ok(())
}
