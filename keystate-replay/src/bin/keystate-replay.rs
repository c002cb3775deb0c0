use anyhow::{Context, Result};
use clap::Parser;
use keystate_replay::demo::DEMO_SCRIPT;
use keystate_replay::parser::Parser as ScriptParser;
use keystate_replay::{ReplayOptions, Session};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay keyboard and focus events against key state trackers", long_about = None)]
struct Args {
    /// Script to replay (runs the built-in demo when omitted)
    script: Option<PathBuf>,

    /// Show key locations, e.g. Shift(Left)
    #[arg(short, long)]
    locations: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let (name, input) = match &args.script {
        Some(path) => {
            let input = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            (path.display().to_string(), input)
        }
        None => ("<demo>".to_string(), DEMO_SCRIPT.to_string()),
    };
    log::info!("Replaying {}", name);

    let script = ScriptParser::new(&input)
        .parse()
        .with_context(|| format!("Failed to parse {}", name))?;

    let mut session = Session::new(ReplayOptions {
        with_location: args.locations,
    });
    let result = session.run(&script);

    // Report what happened up to a failure as well
    if !args.quiet {
        for line in session.output() {
            println!("{}", line);
        }
    }

    result.with_context(|| format!("Replay of {} stopped", name))
}
