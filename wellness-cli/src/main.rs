use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wellness_core::{FinancialPlan, FinancialProfile, generate_financial_plan};
use wellness_export::{plan_to_csv, render_plan_text, render_week_text};

mod config;
mod setup;
mod state;

use config::{Config, OutputFormat, load_config};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("WELLNESS_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "wellness", version = VERSION, about = "30-day financial improvement plans")]
struct Cli {
    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive questionnaire: capture your profile and write ~/.wellness/profile.json
    Setup,

    /// Generate and print your 30-day plan
    Plan {
        /// Profile JSON (defaults to the one written by `setup`)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Output format (default: from config, fallback text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Print a single week (1-5)
        #[arg(long)]
        week: Option<usize>,
    },

    /// Export the plan as CSV, or a single week as a text sheet
    Export {
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Output file (default: dated file in the configured export directory)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Export one week (1-5) as plain text instead of the full CSV
        #[arg(long)]
        week: Option<usize>,
    },

    /// Manage ~/.wellness/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn init_logging(verbose: bool) {
    // RUST_LOG > --verbose > warn, so stdout stays clean for plan output
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Setup => setup::run_setup()?,

        Command::Plan { profile, format, week } => {
            let cfg = load_config()?;
            let plan = plan_for(profile)?;
            let format = format.unwrap_or(cfg.output.format);
            print!("{}", render(&plan, format, week)?);
        }

        Command::Export { profile, out, week } => {
            let cfg = load_config()?;
            let plan = plan_for(profile)?;
            export(&plan, &cfg, out, week)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn load_profile(path: Option<PathBuf>) -> Result<FinancialProfile> {
    let path = match path {
        Some(p) => p,
        None => state::profile_path()?,
    };
    if !path.exists() {
        bail!(
            "No profile found at {}. Run: wellness setup (or pass --profile <file>)",
            path.display()
        );
    }
    let saved = state::read_profile(&path)?;
    saved
        .profile
        .validate()
        .with_context(|| format!("invalid profile {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded profile");
    Ok(saved.profile)
}

fn plan_for(profile: Option<PathBuf>) -> Result<FinancialPlan> {
    Ok(generate_financial_plan(&load_profile(profile)?))
}

fn render(plan: &FinancialPlan, format: OutputFormat, week: Option<usize>) -> Result<String> {
    match (format, week) {
        (OutputFormat::Text, None) => Ok(render_plan_text(plan)),
        (OutputFormat::Text, Some(n)) => Ok(render_week_text(plan, n)?),
        (OutputFormat::Json, None) => {
            Ok(serde_json::to_string_pretty(plan).context("serialize plan")? + "\n")
        }
        (OutputFormat::Json, Some(n)) => {
            let days = plan
                .week(n)
                .with_context(|| format!("week {} is out of range (1-5)", n))?;
            Ok(serde_json::to_string_pretty(days).context("serialize week")? + "\n")
        }
    }
}

/// Dated default file name, e.g. `wellness-plan-2026-10-19.csv`
fn default_export_name(week: Option<usize>, today: chrono::NaiveDate) -> String {
    let date = today.format("%Y-%m-%d");
    match week {
        Some(n) => format!("wellness-week-{}-{}.txt", n, date),
        None => format!("wellness-plan-{}.csv", date),
    }
}

fn export(plan: &FinancialPlan, cfg: &Config, out: Option<PathBuf>, week: Option<usize>) -> Result<()> {
    let body = match week {
        Some(n) => render_week_text(plan, n)?,
        None => plan_to_csv(plan)?,
    };

    let path = out.unwrap_or_else(|| {
        let today = chrono::Local::now().date_naive();
        Path::new(&cfg.export.directory).join(default_export_name(week, today))
    });
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;

    tracing::info!(path = %path.display(), "exported plan");
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_export_names() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(default_export_name(None, day), "wellness-plan-2026-10-19.csv");
        assert_eq!(default_export_name(Some(2), day), "wellness-week-2-2026-10-19.txt");
    }

    #[test]
    fn test_render_json_week() {
        let plan = generate_financial_plan(&FinancialProfile::new(5000.0, 4000.0, 500.0));
        let out = render(&plan, OutputFormat::Json, Some(5)).unwrap();
        let days: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(days.as_array().map(Vec::len), Some(2));
        assert!(render(&plan, OutputFormat::Json, Some(9)).is_err());
    }

    #[test]
    fn test_render_text_full_plan() {
        let plan = generate_financial_plan(&FinancialProfile::default());
        let out = render(&plan, OutputFormat::Text, None).unwrap();
        assert!(out.starts_with("Your 30-Day Financial Improvement Plan"));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["wellness", "-v", "plan", "--format", "json", "--week", "2"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Plan { format, week, profile } => {
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(week, Some(2));
                assert!(profile.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_profile_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "p.json",
            r#"{"monthly_income": 5000, "monthly_expenses": 4000, "monthly_savings": 500}"#,
        );
        let profile = load_profile(Some(path)).unwrap();
        assert_eq!(profile, FinancialProfile::new(5000.0, 4000.0, 500.0));
    }

    #[test]
    fn test_missing_profile_points_at_setup() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(Some(dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("wellness setup"));
    }

    #[test]
    fn test_negative_amount_fails_plan() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "p.json", r#"{"monthly_income": 5000, "monthly_expenses": -10}"#);
        let err = plan_for(Some(path)).unwrap_err();
        assert!(format!("{err:#}").contains("monthly expenses"));
    }

    #[test]
    fn test_mis_keyed_profile_fails_plan() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "p.json", r#"{"monthlyIncome": 5000}"#);
        assert!(plan_for(Some(path)).is_err());
    }

    #[test]
    fn test_export_csv_to_out() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("plan.csv");
        let plan = generate_financial_plan(&FinancialProfile::new(5000.0, 4000.0, 500.0));
        export(&plan, &Config::default(), Some(out.clone()), None).unwrap();

        let body = fs::read_to_string(&out).unwrap();
        assert!(body.starts_with("Day,Category,Task\n"));
        assert!(body.contains("Savings Rate,10.0%\n"));
    }

    #[test]
    fn test_export_week_to_out() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("week.txt");
        let plan = generate_financial_plan(&FinancialProfile::default());
        export(&plan, &Config::default(), Some(out.clone()), Some(2)).unwrap();

        let body = fs::read_to_string(&out).unwrap();
        assert!(body.starts_with("💪 Critical plan\nWeek 2 (days 8-14)\n"));
        assert!(export(&plan, &Config::default(), Some(out), Some(6)).is_err());
    }

    #[test]
    fn test_export_falls_back_to_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.export.directory = dir.path().join("exports").display().to_string();
        let plan = generate_financial_plan(&FinancialProfile::default());

        export(&plan, &cfg, None, None).unwrap();
        export(&plan, &cfg, None, Some(5)).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path().join("exports"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names.len(), 2);
        assert!(names[0].starts_with("wellness-plan-") && names[0].ends_with(".csv"));
        assert!(names[1].starts_with("wellness-week-5-") && names[1].ends_with(".txt"));
    }
}
