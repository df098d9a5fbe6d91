use clap::Parser;
use schedwire::{CodecError, Defaults, ScheduleConfiguration, WireText};
use std::io::{self, IsTerminal, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "schedwire",
    about = "Decode, describe and encode scheduler wire arrays",
    version
)]
struct Cli {
    /// Wire tokens (e.g. "StartTime=07:55:00"); read from stdin, one per line, when omitted
    tokens: Vec<String>,

    /// Validate tokens without printing the schedule
    #[arg(long)]
    check: bool,

    /// Print the decoded schedule as JSON
    #[arg(long)]
    json: bool,

    /// Decode, then print the re-encoded wire tokens
    #[arg(long)]
    wire: bool,

    /// Read a JSON schedule from stdin and print its wire tokens
    #[arg(long, conflicts_with_all = ["tokens", "check", "json", "wire"])]
    encode: bool,

    /// Print the wire tokens of the default schedule
    #[arg(long, conflicts_with_all = ["tokens", "check", "json", "wire", "encode"])]
    default: bool,

    /// Time zone used when the tokens carry none
    #[arg(long, env = "SCHEDWIRE_TIME_ZONE")]
    time_zone: Option<String>,

    /// Business calendar used when the tokens carry none
    #[arg(long = "calendar", env = "SCHEDWIRE_BUSINESS_CALENDAR")]
    business_calendar: Option<String>,
}

impl Cli {
    fn defaults(&self) -> Result<Defaults, CodecError> {
        let mut defaults = Defaults::default();
        if let Some(ref zone) = self.time_zone {
            if jiff::tz::TimeZone::get(zone).is_err() {
                tracing::warn!(zone = %zone, "time zone is not in the local tz database");
            }
            defaults.time_zone = WireText::new(zone.as_str())?;
        }
        if let Some(ref calendar) = self.business_calendar {
            defaults.business_calendar = WireText::new(calendar.as_str())?;
        }
        Ok(defaults)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("schedwire=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = match cli.defaults() {
        Ok(defaults) => defaults,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    if cli.default {
        print_tokens(&ScheduleConfiguration::new_default(&defaults).encode());
        process::exit(0);
    }

    if cli.encode {
        let input = read_stdin();
        if input.trim().is_empty() {
            eprintln!("error: no JSON provided on stdin");
            process::exit(2);
        }
        match serde_json::from_str::<ScheduleConfiguration>(&input) {
            Ok(config) => {
                print_tokens(&config.encode());
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: invalid JSON schedule: {e}");
                process::exit(1);
            }
        }
    }

    let tokens = if cli.tokens.is_empty() {
        stdin_tokens()
    } else {
        cli.tokens.clone()
    };
    if tokens.is_empty() {
        eprintln!("error: no tokens provided");
        process::exit(2);
    }
    tracing::debug!(count = tokens.len(), "decoding wire tokens");

    let config = match ScheduleConfiguration::decode_with(&tokens, &defaults) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.json {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    if cli.wire {
        print_tokens(&config.encode());
        process::exit(0);
    }

    println!("{config}");
}

fn print_tokens(tokens: &[String]) {
    for token in tokens {
        println!("{token}");
    }
}

fn read_stdin() -> String {
    let mut input = String::new();
    if io::stdin().is_terminal() {
        return input;
    }
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("error: failed to read stdin: {e}");
        process::exit(1);
    }
    input
}

/// Non-blank stdin lines, trimmed of surrounding whitespace.
fn stdin_tokens() -> Vec<String> {
    read_stdin()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
