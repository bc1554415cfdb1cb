use anyhow::Result;
use clap::Parser;
use colored::*;
use std::process::ExitCode;

use numeric_sum::logging::init_logging;
use numeric_sum::SumCommand;

#[derive(Parser)]
#[command(name = "numsum")]
#[command(version = "0.1.0")]
#[command(about = "Add two non-negative integers given as decimal strings", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    #[arg(help = "First numeric string")]
    a: String,

    #[arg(help = "Second numeric string")]
    b: String,

    #[arg(short = 't', long, help = "Print the result's type after the value")]
    show_type: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }

    let command = SumCommand::new(cli.verbose).with_show_type(cli.show_type);
    match command.execute(&cli.a, &cli.b) {
        Ok(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red().bold(), err);
            Ok(ExitCode::FAILURE)
        }
    }
}
