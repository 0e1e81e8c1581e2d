use abc_census::about;
use abc_census::config::{oneshot_help_text, parse_cli_args, write_usage_error};
use abc_census::report::run_oneshot;
use std::{env, io};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

/// Returns false on usage errors or when at least one sequence was rejected.
fn run() -> anyhow::Result<bool> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_cli_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            write_usage_error(&mut io::stderr(), &e, oneshot_help_text())?;
            return Ok(false);
        }
    };
    if cli.show_help {
        println!("{}", oneshot_help_text());
        return Ok(true);
    }
    if cli.show_version {
        println!("{}", about::version_cli_text());
        return Ok(true);
    }

    let mut sequences = cli.sequences.clone();
    if let Some(seq) = &cli.sequence {
        sequences.insert(0, seq.clone());
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    Ok(run_oneshot(
        &sequences,
        cli.report_options(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?)
}
