//! Interactive prompt loop over the shared counting pipeline.

use abc_census::about;
use abc_census::config::{interactive_help_text, parse_cli_args, write_usage_error};
use abc_census::session::{EditorReader, SequenceSource, SessionConfig, run_session};
use anyhow::{Context, bail};
use std::{env, io};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_cli_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            write_usage_error(&mut io::stderr(), &e, interactive_help_text())?;
            std::process::exit(1);
        }
    };
    if cli.show_help {
        println!("{}", interactive_help_text());
        return Ok(());
    }
    if cli.show_version {
        println!("{}", about::version_cli_text());
        return Ok(());
    }
    if let Some(extra) = cli.sequences.first() {
        bail!("Unexpected argument '{extra}', use --sequence SEQ");
    }

    let config = SessionConfig {
        source: match &cli.sequence {
            Some(seq) => SequenceSource::Fixed(seq.clone()),
            None => SequenceSource::Prompt,
        },
        report: cli.report_options(),
    };

    let mut reader = EditorReader::new().context("Could not open terminal line editor")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(&mut reader, &mut out, &config)?;
    Ok(())
}
