use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use codetrace::{FrameInspector, Snapshot};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(
    name = "codetrace",
    about = "Map interpreter error state back onto user snippets"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Source label of dynamically executed code
    #[arg(long, global = true)]
    exec_label: Option<String>,
    /// Path component of the runtime's internal package
    #[arg(long, global = true)]
    runtime_marker: Option<String>,
    /// Function name of the async evaluation entry point
    #[arg(long, global = true)]
    entry_point: Option<String>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the user line an exception originated from
    Line { snapshot: PathBuf },
    /// Print the stack frames belonging to the user snippet
    Frames {
        snapshot: PathBuf,
        /// Emit frames as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the last line of a code file (`-` reads stdin)
    ReturnLine { file: String },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    if let Err(err) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("{} could not install logger: {err}", "warning:".yellow().bold());
    }

    let inspector = build_inspector(&cli);
    match cli.command {
        Command::Line { snapshot } => {
            let snapshot = load_snapshot(&snapshot);
            match inspector.line_number_from_traceback(snapshot.traceback.entries()) {
                Ok(line) => println!("{line}"),
                Err(err) => fail(&err.to_string()),
            }
        }
        Command::Frames { snapshot, json } => {
            let snapshot = load_snapshot(&snapshot);
            let Some(frames) = inspector.user_frames(snapshot.stack.frames()) else {
                fail("could not determine user frames");
            };
            if json {
                match serde_json::to_string_pretty(&frames) {
                    Ok(out) => println!("{out}"),
                    Err(err) => fail(&err.to_string()),
                }
            } else if frames.is_empty() {
                println!("{}", "no user frames on the stack".bright_black());
            } else {
                print!(
                    "{}",
                    codetrace::format_user_traceback(&frames, snapshot.code.as_deref())
                );
            }
        }
        Command::ReturnLine { file } => {
            let code = read_code(&file);
            println!("{}", codetrace::return_line(&code));
        }
    }
}

fn build_inspector(cli: &Cli) -> FrameInspector {
    let mut inspector = FrameInspector::new();
    if let Some(label) = &cli.exec_label {
        inspector = inspector.with_exec_label(label);
    }
    if let Some(marker) = &cli.runtime_marker {
        inspector = inspector.with_runtime_path_marker(marker);
    }
    if let Some(name) = &cli.entry_point {
        inspector = inspector.with_entry_point(name);
    }
    inspector
}

fn load_snapshot(path: &Path) -> Snapshot {
    match Snapshot::load(path) {
        Ok(snapshot) => snapshot,
        Err(err) => match err.source() {
            Some(source) => fail(&format!("{err}: {source}")),
            None => fail(&err.to_string()),
        },
    }
}

fn read_code(file: &str) -> String {
    let result = if file == "-" {
        let mut code = String::new();
        io::stdin().read_to_string(&mut code).map(|_| code)
    } else {
        fs::read_to_string(file)
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!(
                "{} could not read '{}': {e}",
                "error:".red().bold(),
                file.yellow()
            );
            process::exit(1);
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message.bright_white());
    process::exit(1);
}
