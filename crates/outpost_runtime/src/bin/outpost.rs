//! Outpost CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use outpost_runtime::{
    GameContent, Repl, ScriptEditor, Session, SessionConfig, demo, init_logging,
};
use tokio::runtime::Builder;
use tracing::info;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    content: Option<PathBuf>,
    script: Option<PathBuf>,
    ticker_secs: Option<u64>,
    no_banner: bool,
    trace: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mErrore: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            "--trace" => config.trace = true,
            "--ticker-secs" => {
                i += 1;
                let value = args.get(i).ok_or("--ticker-secs requires a value")?;
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("invalid --ticker-secs value: {value}"))?;
                if secs == 0 {
                    return Err("--ticker-secs must be at least 1".into());
                }
                config.ticker_secs = Some(secs);
            }
            "--script" => {
                i += 1;
                let value = args.get(i).ok_or("--script requires a file")?;
                config.script = Some(PathBuf::from(value));
            }
            "--content" => {
                i += 1;
                let value = args.get(i).ok_or("--content requires a file")?;
                config.content = Some(PathBuf::from(value));
            }
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("outpost {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(cli.trace)?;

    let mut config = SessionConfig::new().with_banner(!cli.no_banner);
    if let Some(secs) = cli.ticker_secs {
        config = config.with_ticker_period(Duration::from_secs(secs));
    }

    let (content, intro) = match &cli.content {
        Some(path) => (GameContent::load(path)?, None),
        None => (demo::content(), Some(demo::INTRO)),
    };

    // The ticker lives on this runtime; turns stay on the main thread.
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("outpost-ticker")
        .enable_time()
        .build()?;
    let session = Session::new(content, &config)?.with_runtime(runtime.handle().clone());

    if let Some(path) = &cli.script {
        info!(script = %path.display(), "running script");
        let script = fs::read_to_string(path)?;
        let editor = ScriptEditor::from_script(&script);
        Repl::with_editor(editor, session).without_banner().run()?;
    } else {
        let mut repl = Repl::new(session)?.configured(&config);
        if let Some(intro) = intro {
            repl = repl.with_intro(intro);
        }
        repl.run()?;
    }

    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mOutpost\x1b[0m - Avventura testuale in un avamposto di ricerca isolato

\x1b[1mUSAGE:\x1b[0m
    outpost [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Show this help message
    -V, --version           Show version information
    --no-banner             Start without the welcome banner
    --ticker-secs <N>       Seconds between the creature's warnings (default: 10)
    --content <FILE>        Play a JSON content file instead of the built-in outpost
    --script <FILE>         Read commands from FILE instead of the terminal
    --trace                 Log debug diagnostics to stderr

\x1b[1mENVIRONMENT:\x1b[0m
    OUTPOST_LOG             Log filter (e.g. \"info\", \"outpost_engine=debug\")

\x1b[1mEXAMPLES:\x1b[0m
    outpost                            Play the built-in outpost
    outpost --ticker-secs 5            Play with a faster creature
    outpost --script walkthrough.txt   Replay a list of commands"
    );
}
