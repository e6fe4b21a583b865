//! # Stitchwise CLI Application
//!
//! Terminal front end for the thread length calculator. Flags (or prompts)
//! are fed into the same form model the GUI uses, so text is cleaned and
//! gated exactly as it is there.

mod cli;
mod logging;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use thread_core::calculations::{breakdown, StitchLength, ThreadLengthBreakdown};
use thread_core::errors::{ThreadError, ThreadResult};
use thread_core::{FormField, FormModel, FormState, IronSpacing};

use crate::cli::Cli;

/// JSON document printed with `--json`
#[derive(Serialize)]
struct Report<'a> {
    form: &'a FormState,
    result: ThreadLengthBreakdown,
}

fn prompt_text(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbosity.tracing_level_filter());

    if cli.list_spacings {
        return match list_spacings(cli.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report_error(&e, cli.json),
        };
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e, cli.json),
    }
}

fn run(cli: &Cli) -> ThreadResult<()> {
    let interactive = io::stdin().is_terminal() && !cli.json;
    let mut model = FormModel::default();

    if let Some(spacing) = cli.spacing {
        model.set_spacing(spacing);
    }
    if let Some(finishing) = &cli.finishing {
        model.set_finishing_length_text(finishing.as_str());
    }

    let holes = match (&cli.holes, cli.distance) {
        (Some(holes), _) => holes.clone(),
        (None, Some(length_mm)) => {
            let length = StitchLength::ByDistance {
                length_mm,
                spacing_mm: model.state().spacing().spacing_mm(),
            };
            debug!(length_mm, holes = length.hole_count(), "derived hole count from distance");
            length.hole_count().to_string()
        }
        (None, None) if interactive => prompt_text("Hole count: "),
        (None, None) => String::new(),
    };
    model.set_hole_count_text(holes);

    let thickness = match &cli.thickness {
        Some(thickness) => thickness.clone(),
        None if interactive => prompt_text("Leather thickness (mm): "),
        None => String::new(),
    };
    model.set_thickness_text(thickness);

    if let Some(error) = blocking_error(model.state()) {
        return Err(error);
    }

    // Cleanup can still zero a field the raw text passed with (e.g. "inf")
    model.request_calculate();
    let state = model.state();
    let result = match breakdown(&state.calculation_params()) {
        Some(result) => result,
        None => return Err(blocking_error(state).unwrap_or_else(|| {
            ThreadError::invalid_input("form", "", "inputs are not calculable")
        })),
    };
    info!(total_mm = result.total_length_mm, "thread length calculated");

    if cli.json {
        let json = serde_json::to_string_pretty(&Report { form: state, result })?;
        println!("{}", json);
    } else {
        print_report(state, &result);
    }
    Ok(())
}

/// Error describing the first gating field that reads as zero, if any.
fn blocking_error(state: &FormState) -> Option<ThreadError> {
    let field = *state.blocking_fields().first()?;
    let value = match field {
        FormField::HoleCount => state.hole_count_text().to_string(),
        FormField::Thickness => state.thickness_text().to_string(),
        _ => state.spacing().label().to_string(),
    };
    Some(ThreadError::invalid_input(
        field.label(),
        value,
        "must be a number other than zero",
    ))
}

fn list_spacings(json: bool) -> ThreadResult<()> {
    if json {
        let labels: Vec<&str> = IronSpacing::ALL.iter().map(|s| s.label()).collect();
        println!("{}", serde_json::to_string_pretty(&labels)?);
    } else {
        for iron in IronSpacing::ALL {
            println!("{}", iron);
        }
    }
    Ok(())
}

fn print_report(state: &FormState, result: &ThreadLengthBreakdown) {
    println!("═══════════════════════════════════════");
    println!("  THREAD LENGTH");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Holes:      {}", state.hole_count_text());
    println!("  Spacing:    {}", state.spacing());
    println!("  Thickness:  {} mm", state.thickness_text());
    println!("  Finishing:  {} mm", result.finishing_length_mm);
    println!();
    println!("Travel:");
    println!("  Along seam:       {:>6} mm", result.horizontal_travel_mm);
    println!("  Through leather:  {:>6} mm", result.thickness_travel_mm);
    println!("  Finishing:        {:>6} mm", result.finishing_length_mm);
    println!();
    println!("═══════════════════════════════════════");
    println!("  TOTAL LENGTH: {} mm", result.total_length_mm);
    println!("═══════════════════════════════════════");
}

fn report_error(error: &ThreadError, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(error) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("Error: {}", error),
        }
    } else {
        eprintln!("Error: {}", error);
    }
    ExitCode::FAILURE
}
