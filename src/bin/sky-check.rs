use std::process::ExitCode;

use skyscraper_check::config::{Config, OutputFormat};
use skyscraper_check::reader;
use skyscraper_check::rules::check_board;
use skyscraper_check::validation::{validate_board, Severity, ValidationResult};

fn main() -> ExitCode {
    let config = Config::from_args_and_env();
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("sky-check: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<bool> {
    let board = reader::load_board(&config.board)?;
    let result = validate_board(&board);
    let valid = check_board(&board);

    match config.format {
        OutputFormat::Text => print_text(&result, valid),
        OutputFormat::Json => print_json(&result, valid)?,
    }

    Ok(valid)
}

fn print_text(result: &ValidationResult, valid: bool) {
    for diagnostic in &result.diagnostics {
        let tag = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("{tag}: {}", diagnostic.message);
    }
    if valid {
        println!("board is valid");
    } else {
        println!("board is not valid");
    }
}

fn print_json(result: &ValidationResult, valid: bool) -> anyhow::Result<()> {
    let report = serde_json::json!({
        "valid": valid,
        "consistent": result.is_valid(),
        "diagnostics": result.diagnostics,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
