//! Néctar CLI: keypad calculator from the command line
//!
//! ## Usage
//!
//! ```bash
//! nectar eval 12 + 30 =           # prints 42
//! nectar --show-history eval 3 + 4 + 5 =
//! nectar --format json eval 8 ÷ 0 =
//! echo "2 × 21 =" | nectar repl
//! nectar keypad
//! ```

use clap::Parser;
use nectar_cli::{
    logging, print_keypad, Cli, CliConfig, CliResult, Commands, Session, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(&config)?;
    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Eval(args) => Session::new(&config).eval(&args.keys, &mut out),
        Commands::Repl => {
            let stdin = std::io::stdin();
            let mut err = std::io::stderr();
            Session::new(&config).repl(stdin.lock(), &mut out, &mut err)
        }
        Commands::Keypad => print_keypad(&mut out),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.clone().into())
        .with_format(cli.format.clone().into())
        .with_history_capacity(cli.history)
        .with_show_history(cli.show_history)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nectar_cli::{ColorChoice, OutputFormat};

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::parse_from(["nectar", "keypad"]);
        let config = build_config(&cli);
        assert_eq!(config, CliConfig::new());
    }

    #[test]
    fn test_build_config_verbosity() {
        let cli = Cli::parse_from(["nectar", "-v", "keypad"]);
        assert_eq!(build_config(&cli).verbosity, Verbosity::Verbose);
        let cli = Cli::parse_from(["nectar", "-vvv", "keypad"]);
        assert_eq!(build_config(&cli).verbosity, Verbosity::Debug);
        let cli = Cli::parse_from(["nectar", "-q", "-v", "keypad"]);
        assert_eq!(build_config(&cli).verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_build_config_output() {
        let cli = Cli::parse_from([
            "nectar",
            "--color",
            "never",
            "--format",
            "json",
            "--history",
            "7",
            "keypad",
        ]);
        let config = build_config(&cli);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.history_capacity, 7);
    }
}
