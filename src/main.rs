mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use pattern_hygiene::{audit, checks, config, output, registry};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            format,
            output: output_path,
            config: config_path,
        } => {
            if !path.exists() {
                eprintln!("Error: path does not exist: {}", path.display());
                std::process::exit(2);
            }

            let config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let report = audit::run_audit(&path, &config);
            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::CheckTools => {
            println!("{}", "Check Availability".bold().underline());
            println!();

            let all = checks::all_checks();
            for check in &all {
                let status = if check.is_available() {
                    "READY".green().bold().to_string()
                } else {
                    "NOT AVAILABLE".red().to_string()
                };

                println!(
                    "  [{status}] {name:<12} {desc}",
                    name = check.name(),
                    desc = check.description(),
                );
            }

            println!();
            println!(
                "Note: when an external tool is missing, its check is skipped and \
                 reports no overlap — inconclusive, not clean."
            );
        }

        Commands::ListPatterns {
            path,
            config: config_path,
        } => {
            if !path.exists() {
                eprintln!("Error: path does not exist: {}", path.display());
                std::process::exit(2);
            }

            let config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let patterns = registry::load_rules(&path, &config.allowlist_file);
            println!("{}", "Loaded Patterns".bold().underline());
            println!();

            for pattern in &patterns {
                let languages = if pattern.languages.is_empty() {
                    "any".dimmed().to_string()
                } else {
                    pattern.languages.join(", ")
                };

                println!(
                    "  {regex:<40} [{languages}]",
                    regex = pattern.regex,
                );
                if let Some(ref source) = pattern.source {
                    println!("    {}", source.display().to_string().dimmed());
                }
            }

            println!();
            println!("  Total: {} patterns", patterns.len());
        }
    }
}
