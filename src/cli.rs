use crate::error::{usage_error, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use getopts::Options;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the usage text
    Help(String),
    /// Interpret utterances
    Run(Args),
}

/// Parsed command line arguments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Args {
    /// Print drafts as JSON instead of summaries
    pub json: bool,
    /// Commit drafts to the in-memory calendar and print the day's agenda
    pub agenda: bool,
    /// Instant treated as now, defaults to the current time
    pub reference: Option<NaiveDateTime>,
    /// Utterance given on the command line; stdin is read when absent
    pub utterance: Option<String>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optflag("j", "json", "Print each event draft as a JSON line");
    opts.optflag(
        "a",
        "agenda",
        "Add every draft to the calendar and print the agenda of the reference day",
    );
    opts.optopt(
        "r",
        "reference",
        "Date or date and time treated as now [Default: current time]",
        "YYYY-MM-DD[THH:MM]",
    );
    opts
}

/// Parse command line arguments, without the program name
pub fn parse(args: Vec<String>) -> AppResult<Command> {
    let opts = opts();

    let matches = opts
        .parse(args)
        .map_err(|fail| usage_error(&fail.to_string()))?;

    if matches.opt_present("help") {
        let brief = format!(
            "{} [OPTIONS] [UTTERANCE...]\n\nReads one utterance per line from stdin when none is given.",
            env!("CARGO_PKG_NAME")
        );
        return Ok(Command::Help(opts.usage(&brief)));
    }

    let reference = matches
        .opt_str("reference")
        .map(|value| parse_reference(&value))
        .transpose()?;

    // Unquoted words belong to one utterance
    let utterance = if matches.free.is_empty() {
        None
    } else {
        Some(matches.free.join(" "))
    };

    Ok(Command::Run(Args {
        json: matches.opt_present("json"),
        agenda: matches.opt_present("agenda"),
        reference,
        utterance,
    }))
}

/// Parse a reference instant, a bare date meaning its midnight
pub fn parse_reference(value: &str) -> AppResult<NaiveDateTime> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            usage_error(&format!(
                "Provided value for option 'reference' is invalid: {}",
                value
            ))
        })
}
