use anyhow::{Context, bail};
use chrono::NaiveDate;
use homeledger_core::config::load_config;
use homeledger_recurrence::range::{RangeLimits, occurrences_in_range_with_limits};
use homeledger_recurrence::{FrequencyConfig, FrequencyKind, RecurrenceRule, validate_frequency};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str =
    "usage: preview-schedule <kind> <config-json> <window-start> <window-end> [anchor-date]";

fn parse_date(value: &str, what: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("{what} must be an ISO date (YYYY-MM-DD), got {value:?}"))
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let [kind, config, start, end, rest @ ..] = args else {
        bail!(USAGE);
    };

    let settings = load_config()?;
    let filter = EnvFilter::try_new(settings.logging.level.as_str())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let Some(kind) = FrequencyKind::parse(kind) else {
        bail!("unknown frequency kind {kind:?}");
    };
    let config: FrequencyConfig =
        serde_json::from_str(config).context("config must be a JSON object")?;

    let validation = validate_frequency(kind, &config);
    if let Some(message) = validation.error_message() {
        bail!(message);
    }
    let rule = RecurrenceRule::from_config(kind, &config)?;

    let window_start = parse_date(start, "window start")?;
    let window_end = parse_date(end, "window end")?;
    let anchor = rest
        .first()
        .map(|value| parse_date(value, "anchor date"))
        .transpose()?;
    if rule.requires_anchor() && anchor.is_none() {
        bail!("{kind} schedules need an anchor date as the fifth argument");
    }

    tracing::info!(%kind, %window_start, %window_end, ?anchor, "Previewing schedule");

    let occurrences = occurrences_in_range_with_limits(
        &rule,
        anchor,
        window_start,
        window_end,
        None,
        RangeLimits::try_from(&settings.recurrence)?,
    )?;

    println!("{rule}");
    for date in occurrences {
        println!("{date}");
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(err) = run(&args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
