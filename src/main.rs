use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use wellform::xml::Checker;

/// Check an XML file for well-formed tag nesting.
#[derive(Parser)]
#[command(name = "wellform", version, about)]
struct Cli {
    /// The XML file to check
    file: PathBuf,

    /// Print violations only, without the summary banner
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let report = Checker::check_file(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    if report.is_well_formed() {
        if !cli.quiet {
            println!("{} {}", "✓".green(), "XML is well-formed! No errors found.".green());
        }
        return Ok(ExitCode::SUCCESS);
    }

    if cli.quiet {
        for violation in &report {
            println!("{violation}");
        }
    } else {
        println!("{}", "XML Errors:".red().bold());
        for violation in &report {
            println!("{} {violation}", "✗".red());
        }
    }

    Ok(ExitCode::FAILURE)
}
