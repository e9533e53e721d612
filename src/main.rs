use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use monkey::repl::{self, Mode};

#[derive(Parser, Debug)]
#[command(name = "monkey", about = "Interactive front end for the Monkey language")]
struct Cli {
    /// Parse each line and print its canonical form instead of its tokens
    #[arg(long)]
    parse: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}", repl::banner(&repl::user_name()));

    let mode = if cli.parse { Mode::Parse } else { Mode::Tokens };
    repl::start(mode)
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "monkey=warn",
        1 => "monkey=debug",
        _ => "monkey=trace",
    }
}
