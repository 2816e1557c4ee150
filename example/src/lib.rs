//! Terminal host for the Aurora home screen.
//!
//! Each input line is one tap or native picker report; the screen is printed
//! after every command.
pub mod home;
pub mod session;

use std::{
    fs,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use aurora_components::calendar_date::CalendarDate;
use aurora_ui::{Color, PlatformFamily};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use crate::session::{Command, Flow, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Android,
    Ios,
}

impl From<PlatformArg> for PlatformFamily {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Android => PlatformFamily::Android,
            PlatformArg::Ios => PlatformFamily::Ios,
        }
    }
}

/// Drive the home screen's date field from the terminal.
#[derive(Debug, Parser)]
#[command(name = "aurora-example", version)]
pub struct Cli {
    /// Interaction model to imitate. Defaults to the build target's.
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,
    /// Date already selected when the screen opens (YYYY-MM-DD).
    #[arg(long)]
    pub initial: Option<CalendarDate>,
    /// Confirm button color as #RRGGBB.
    #[arg(long)]
    pub accent: Option<Color>,
    /// Read commands from a file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,
}

pub fn desktop_main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    match &cli.script {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(&cli, BufReader::new(file), stdout.lock())
        }
        None => run(&cli, io::stdin().lock(), stdout.lock()),
    }
}

/// Runs a session over `input`, writing each rendered screen to `output`.
///
/// Unparseable lines are reported and skipped; blank lines and `#` comments
/// are ignored.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, mut output: W) -> anyhow::Result<()> {
    let platform = cli
        .platform
        .map(PlatformFamily::from)
        .unwrap_or_else(PlatformFamily::current);
    info!(platform = platform.as_str(), "starting home screen session");

    let mut session = Session::new(platform, cli.initial).with_accent(cli.accent);
    write!(output, "{}", session.render())?;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read command")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(line = index + 1, %err, "skipping command");
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        if session.apply(command) == Flow::Quit {
            break;
        }
        write!(output, "{}", session.render())?;
    }
    output.flush()?;
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,aurora_components=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::{Cli, run};

    fn run_script(args: &[&str], script: &str) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut output = Vec::new();
        run(&cli, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn scripted_ios_cancel_keeps_initial_date() {
        let output = run_script(
            &["aurora-example", "--platform", "ios", "--initial", "2025-01-01"],
            "open\npick 2099-12-31\ncancel\nquit\n",
        );
        assert!(output.contains("picker (spinner): 2099-12-31  [Cancelar] [Confirmar]"));
        assert!(output.ends_with("Fecha de nacimiento: [01/01/2025]\nContador: 0\n"));
    }

    #[test]
    fn bad_lines_are_reported_and_skipped() {
        let output = run_script(
            &["aurora-example", "--platform", "android"],
            "# comment\n\njump\ninc\n",
        );
        assert!(output.contains("error: unknown command `jump`"));
        assert!(output.contains("Contador: 1"));
    }

    #[test]
    fn rejects_malformed_flags() {
        assert!(Cli::try_parse_from(["aurora-example", "--accent", "blue"]).is_err());
        assert!(Cli::try_parse_from(["aurora-example", "--initial", "2025-13-01"]).is_err());
        let cli = Cli::try_parse_from(["aurora-example", "--accent", "#60A5FA"]).unwrap();
        assert!(cli.accent.is_some());
    }
}
