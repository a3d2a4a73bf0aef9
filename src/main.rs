mod app;
mod command;
mod config;
mod consts;
mod game;
mod options;
mod theme;
mod title;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::util::Globals;
use crate::warning::Warning;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e}");
            return ExitCode::from(2);
        }
    };
    let (globals, warning) = load_globals(&args);
    let terminal = ratatui::init();
    let r = App::new(globals, warning).run(terminal);
    ratatui::restore();
    io_exit(r)
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    config: Option<PathBuf>,
}

impl Args {
    /// Parse the command line.  Returns `Ok(None)` when `--help` or
    /// `--version` was handled and the program should exit.
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        let mut args = Args::default();
        let mut parser = Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => {
                    println!("Usage: gridsnake [-c|--config <PATH>]");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <PATH>  Read configuration from <PATH>");
                    println!("  -h, --help           Show this message and exit");
                    println!("  -V, --version        Show the program version and exit");
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }
}

/// Load configuration without ever aborting: a broken or unreadable config
/// comes back as a warning to show on the title screen over defaults.
fn load_globals(args: &Args) -> (Globals, Option<Warning>) {
    let r = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    };
    match r {
        Ok(config) => (
            Globals {
                options: config.options,
                theme: config.theme,
            },
            None,
        ),
        Err(e) => (
            Globals::default(),
            Some(Warning::from_error(&anyhow::Error::new(e))),
        ),
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
