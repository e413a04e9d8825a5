mod app;
mod command;
mod config;
mod consts;
mod game;
mod geometry;
mod options;
mod scene;
mod surface;
mod tick;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::options::{Options, OptionsError};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use log::{error, info, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake in the terminal.  Steer with the arrow keys or WASD; quit with q,
Esc, or Ctrl-C.

Options:
  -c, --config <PATH>       Read configuration from the given file
      --speed <N>           Game ticks per second [default: 12]
      --board-length <N>    Cells along each side of the board [default: 17]
      --log-file <PATH>     Write log messages to the given file
  -h, --help                Display this help message and exit
  -V, --version             Show the program version and exit
";

fn main() -> ExitCode {
    let args = match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => args,
        Ok(Mode::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Mode::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            return ExitCode::from(2);
        }
    };
    let options = match args.setup() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            return ExitCode::from(2);
        }
    };
    info!("Starting gridsnake {} with {options:?}", env!("CARGO_PKG_VERSION"));
    let terminal = ratatui::init();
    let r = App::new(options).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terminal I/O failed: {e}");
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("speed") => args.speed = Some(parser.value()?.parse()?),
                Arg::Long("board-length") => args.board_length = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

/// Command-line arguments for a game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    speed: Option<NonZeroU32>,
    board_length: Option<u16>,
    log_file: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration, start logging, and return the gameplay
    /// options to use
    fn setup(mut self) -> anyhow::Result<Options> {
        let mut config = self.load_config()?;
        if let Some(path) = self.log_file.take() {
            config.log_file = Some(path);
        }
        if let Some(path) = config.log_path() {
            init_logging(&path, config.log_level)
                .with_context(|| format!("failed to set up logging to {}", path.display()))?;
        }
        if let Some((path, _)) = self.config_source() {
            info!("Configuration file: {}", path.display());
        }
        self.apply(config.options)
            .context("invalid options on command line")
    }

    /// Return the configuration file to read and whether it is allowed to be
    /// absent
    fn config_source(&self) -> Option<(PathBuf, bool)> {
        match &self.config {
            Some(path) => Some((path.clone(), false)),
            None => Config::default_path().ok().map(|path| (path, true)),
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let Some((path, allow_missing)) = self.config_source() else {
            return Ok(Config::default());
        };
        Config::load(&path, allow_missing)
            .with_context(|| format!("failed to load configuration from {}", path.display()))
    }

    /// Override `options` with any values given on the command line
    fn apply(&self, mut options: Options) -> Result<Options, OptionsError> {
        if let Some(speed) = self.speed {
            options.speed = speed;
        }
        if let Some(board_length) = self.board_length {
            options.board_length = board_length;
        }
        options.validate()
    }
}

/// Send log messages at or above `level` to the end of the file at `path`
fn init_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    WriteLogger::init(level, simplelog::Config::default(), file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Mode, lexopt::Error> {
        Mode::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Mode::Run(Arguments::default()));
    }

    #[test]
    fn all_args() {
        let mode = parse(&[
            "-c",
            "snake.toml",
            "--speed",
            "20",
            "--board-length=25",
            "--log-file",
            "snake.log",
        ])
        .unwrap();
        assert_eq!(
            mode,
            Mode::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                speed: NonZeroU32::new(20),
                board_length: Some(25),
                log_file: Some(PathBuf::from("snake.log")),
            })
        );
    }

    #[rstest]
    #[case(&["--help"], Mode::Help)]
    #[case(&["-h", "--speed", "bogus"], Mode::Help)]
    #[case(&["-V"], Mode::Version)]
    #[case(&["--version"], Mode::Version)]
    fn test_info_modes(#[case] args: &[&str], #[case] mode: Mode) {
        assert_eq!(parse(args).unwrap(), mode);
    }

    #[rstest]
    #[case(&["--speed", "0"])]
    #[case(&["--speed", "fast"])]
    #[case(&["--board-length", "-3"])]
    #[case(&["--speed"])]
    #[case(&["--frobnicate"])]
    #[case(&["extra"])]
    fn test_bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn apply_overrides() {
        let args = Arguments {
            speed: NonZeroU32::new(5),
            board_length: Some(30),
            ..Arguments::default()
        };
        let options = args.apply(Options::default()).unwrap();
        assert_eq!(options.speed.get(), 5);
        assert_eq!(options.board_length, 30);
        assert_eq!(options.origin, Cell::new(2, 13));
    }

    #[test]
    fn apply_invalid() {
        let args = Arguments {
            board_length: Some(5),
            ..Arguments::default()
        };
        assert_eq!(
            args.apply(Options::default()),
            Err(OptionsError::Origin {
                origin: Cell::new(2, 13),
                board_length: 5,
            })
        );
    }

    #[test]
    fn load_explicit_config() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("gridsnake.toml");
        fs_err::write(&path, "speed = 6\n").unwrap();
        let args = Arguments {
            config: Some(path),
            ..Arguments::default()
        };
        let config = args.load_config().unwrap();
        assert_eq!(config.options.speed.get(), 6);
    }

    #[test]
    fn load_missing_explicit_config() {
        let tmpdir = tempfile::tempdir().unwrap();
        let args = Arguments {
            config: Some(tmpdir.path().join("nope.toml")),
            ..Arguments::default()
        };
        let e = args.load_config().unwrap_err();
        assert!(
            e.to_string().starts_with("failed to load configuration from"),
            "unexpected error: {e}"
        );
    }
}
