use chrono::{Local, NaiveDate, Utc};
use clap::Args;
use std::path::PathBuf;
use stride_risk::activity::{
    ActivityDataProvider, ActivitySource, CsvActivityImporter, WeeklyActivitySeries,
    DEFAULT_WINDOW_DAYS,
};
use stride_risk::config::AppConfig;
use stride_risk::error::AppError;
use stride_risk::risk::{RiskAssessment, RiskEngine, RiskReport, RiskScore};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// CSV export with `Date,Steps[,Source]` columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Number of trailing days to score
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub(crate) window_days: usize,
    /// Score every day in the export instead of the trailing window
    #[arg(long)]
    pub(crate) full_history: bool,
    /// Print the signal values behind each level
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the signal values behind each level
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        csv,
        window_days,
        full_history,
        breakdown,
    } = args;

    let config = AppConfig::load()?;
    let engine = RiskEngine::new(config.risk)?;

    let window = if full_history {
        None
    } else {
        Some(window_days)
    };
    let series = CsvActivityImporter::from_path(&csv)?
        .with_window(window)
        .weekly_series()?;

    println!("Step risk assessment");
    println!("Source: {}", csv.display());
    render(&engine, &series, breakdown);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = RiskEngine::default();
    let today = Local::now().date_naive();

    println!("Step risk demo (default weights and standards)");
    for (label, counts) in reference_weeks() {
        let series = reference_series(today, counts)?;
        println!("\n== {label} {counts:?}");
        render(&engine, &series, args.breakdown);
    }
    Ok(())
}

pub(crate) fn reference_weeks() -> [(&'static str, &'static [u32]); 5] {
    [
        ("Steady week", &[5000, 5200, 4800, 5100, 4900, 5000, 5050]),
        ("Idle week", &[0, 0, 0, 0, 0, 0, 0]),
        ("Declining week", &[6000, 5500, 5000, 4500, 4000, 3500, 3000]),
        ("Single reading", &[3000]),
        ("No data", &[]),
    ]
}

fn reference_series(last_day: NaiveDate, counts: &[u32]) -> Result<WeeklyActivitySeries, AppError> {
    WeeklyActivitySeries::from_daily_counts(last_day, counts, ActivitySource::Device, Utc::now())
        .ok_or_else(|| AppError::BadRequest(format!("reference week cannot end on {last_day}")))
}

fn render(engine: &RiskEngine, series: &WeeklyActivitySeries, breakdown: bool) {
    match (series.first_date(), series.last_date()) {
        (Some(first), Some(last)) => println!(
            "Window: {} -> {} ({} day(s), average {:.0} steps)",
            first,
            last,
            series.len(),
            series.average_steps()
        ),
        _ => println!("Window: no activity recorded"),
    }

    let (score, assessment) = match engine.assess(series) {
        Ok(assessment) => (assessment.score.clone(), Some(assessment)),
        Err(err) => {
            println!("Assessment failed ({err}); showing fail-safe levels");
            (RiskScore::fail_safe(Utc::now()), None)
        }
    };

    if breakdown {
        if let Some(assessment) = &assessment {
            render_breakdown(assessment);
        }
    }

    let report = RiskReport::from_score(score);
    println!("\nRisk levels");
    for summary in &report.domains {
        println!(
            "- {}: {} | {}",
            summary.domain.label(),
            summary.level,
            summary.description
        );
    }

    println!("\nSuggestions");
    for (idx, suggestion) in report.suggestions.iter().enumerate() {
        println!("{}. {}", idx + 1, suggestion);
    }
}

fn render_breakdown(assessment: &RiskAssessment) {
    let signals = &assessment.signals;
    println!("\nSignals");
    println!("- average level: {:.0}", signals.average_level);
    println!("- variability: {:.0}", signals.variability);
    println!("- trend: {:.0}", signals.trend);
    println!("- consistency: {:.0}", signals.consistency);
    println!(
        "Composite step risk {:.1}, overall score {:.1}",
        assessment.composite_step_risk, assessment.combined_score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_risk::risk::RiskLevel;

    #[test]
    fn reference_weeks_match_documented_levels() {
        let engine = RiskEngine::default();
        let today = Local::now().date_naive();
        let levels: Vec<RiskLevel> = reference_weeks()
            .iter()
            .map(|(_, counts)| {
                let series = reference_series(today, counts).expect("reference week fits");
                engine.score(&series).frailty_risk
            })
            .collect();

        assert_eq!(
            levels,
            vec![
                RiskLevel::Low,
                RiskLevel::High,
                RiskLevel::Low,
                RiskLevel::Low,
                RiskLevel::High
            ]
        );
    }

    #[test]
    fn demo_renders_without_error() {
        run_demo(DemoArgs { breakdown: true }).expect("demo runs");
    }
}
