use std::env;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use yotei::cli::{self, Command};
use yotei::startup;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    let args = match cli::parse(env::args().skip(1).collect())? {
        Command::Help(usage) => {
            println!("{}", usage);
            return Ok(());
        }
        Command::Run(args) => args,
    };

    // Load configuration
    let config = startup::load_config()?;
    debug!("Using configuration {:?}", config);

    let utterances = match &args.utterance {
        Some(utterance) => vec![utterance.clone()],
        None => read_stdin_lines().await.map_err(yotei::error::Error::from)?,
    };

    if utterances.is_empty() {
        info!("No utterances given");
    }

    let mut stdout = std::io::stdout().lock();
    startup::run(&config, &args, &utterances, &mut stdout).await?;

    Ok(())
}

/// Non-empty lines from stdin
async fn read_stdin_lines() -> std::io::Result<Vec<String>> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut utterances = Vec::new();

    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            utterances.push(line);
        }
    }

    Ok(utterances)
}
