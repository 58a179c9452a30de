//! Trebol CLI: validate coverage report descriptions
//!
//! ## Usage
//!
//! ```bash
//! trebol columns                  # List registered columns
//! trebol check report.yaml        # Validate a description
//! trebol emit report.yaml --pretty  # Print task configuration as JSON
//! ```

use clap::Parser;
use std::process::ExitCode;
use trebol_cli::{
    stdout_is_terminal, CheckArgs, Cli, CliResult, ColumnsArgs, ColumnsFormat, Commands, EmitArgs,
    Printer, ReportDescription,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let printer = Printer::new(stdout_is_terminal(), cli.quiet);
    match run(&cli, &printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            printer.failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, printer: &Printer) -> CliResult<()> {
    match &cli.command {
        Commands::Columns(args) => run_columns(args, printer),
        Commands::Check(args) => run_check(args, printer),
        Commands::Emit(args) => run_emit(args),
    }
}

fn run_columns(args: &ColumnsArgs, printer: &Printer) -> CliResult<()> {
    match args.format {
        ColumnsFormat::Text => {
            println!("Registered report columns:");
            for (name, policy) in trebol::registered_columns() {
                printer.column_row(name, policy);
            }
        }
        ColumnsFormat::Json => {
            let listing: Vec<serde_json::Value> = trebol::registered_columns()
                .map(|(name, policy)| {
                    serde_json::json!({
                        "column": name,
                        "formats": policy.allowed_formats(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}

fn run_check(args: &CheckArgs, printer: &Printer) -> CliResult<()> {
    let description = ReportDescription::load(&args.file)?;
    let config = description.into_task_config()?;
    printer.success(&format!(
        "{}: {} column(s), historical {}",
        args.file.display(),
        config.columns.columns().len(),
        if config.historical.enabled {
            "enabled"
        } else {
            "disabled"
        }
    ));
    Ok(())
}

fn run_emit(args: &EmitArgs) -> CliResult<()> {
    let description = ReportDescription::load(&args.file)?;
    let config = description.into_task_config()?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    println!("{json}");
    Ok(())
}
