//! realtype - classify JavaScript-like values
//!
//! Entry point for the CLI. Parses arguments and delegates to the
//! Inspector, or runs the built-in assertion suite.

use assert_reporter::Reporter;
use clap::Parser as ClapParser;
use realtype_cli::{self_check, Cli, CliError, Inspector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    if cli.self_check {
        let mut reporter = Reporter::new();
        self_check::run(&mut reporter);
        return Ok(());
    }

    let inspector = Inspector::new(cli.mode).with_json(cli.json);

    let result = if let Some(file) = &cli.file {
        inspector.inspect_file(file)
    } else if let Some(code) = &cli.eval {
        inspector.inspect_string(code)
    } else {
        // Default: show usage
        println!("realtype v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  realtype --eval <LITERAL>     Classify an inline array literal");
        println!("  realtype --file <FILE>        Classify the array literal in a file");
        println!("  realtype --self-check         Run the built-in assertion suite");
        println!();
        println!("Run 'realtype --help' for more options.");
        return Ok(());
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(CliError::IoError(e)) => {
            eprintln!(
                "Error: Could not read file '{}': {}",
                cli.file.as_deref().unwrap_or_default(),
                e
            );
            std::process::exit(1);
        }
        Err(CliError::ParseError(e)) => {
            eprintln!("Syntax Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
