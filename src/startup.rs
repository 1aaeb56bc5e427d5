use crate::calendar::{CalendarEvent, EventStore, InMemoryEventStore};
use crate::cli::Args;
use crate::config::Config;
use crate::error::{AppResult, Error};
use crate::interpreter::interpret;
use crate::summary::{describe, describe_agenda};
use std::io::Write;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
///
/// Logs go to stderr so that drafts printed on stdout stay machine readable.
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Interpret every utterance and write the results to `out`
pub async fn run<W: Write>(
    config: &Config,
    args: &Args,
    utterances: &[String],
    out: &mut W,
) -> AppResult<()> {
    let reference = args.reference.unwrap_or_else(|| config.reference_now());
    info!(
        "Interpreting {} utterance(s) relative to {}",
        utterances.len(),
        reference
    );

    let store = InMemoryEventStore::new();

    for utterance in utterances {
        let mut event = interpret(utterance, reference);
        if let Some(color) = &config.default_color {
            event = event.with_color(color.as_str());
        }

        if args.json {
            writeln!(out, "{}", serde_json::to_string(&event)?)?;
        } else {
            writeln!(out, "{}", describe(&event, &config.locale))?;
        }

        if args.agenda {
            store.upsert(CalendarEvent::from_parsed(event)).await?;
        }
    }

    if args.agenda {
        let day = reference.date();
        let events = store.events_for_day(day).await?;
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&events)?)?;
        } else {
            writeln!(out, "{}", describe_agenda(day, &events, &config.locale))?;
        }
    }

    Ok(())
}
