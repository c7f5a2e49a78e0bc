//! # Footing CLI
//!
//! Terminal front end for footing_core.
//!
//! ## Usage
//!
//! ```text
//! footing_cli <input.json>    run a calculation described in a JSON file
//! footing_cli -               read the calculation JSON from stdin
//! footing_cli                 interactive punching perimeter demo
//! ```
//!
//! `-v` / `--verbose` turns on debug logging; otherwise the level comes from
//! the `FOOTING_LOG` environment variable (`error` .. `trace`, default `warn`).

use std::env;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};

use footing_core::calculations::punching_perimeter::PunchingPerimeterInput;
use footing_core::calculations::{BendingRatioResult, PunchingPerimeterResult};
use footing_core::geometry::{AbsoluteLocation, CoordinatesSystem};
use footing_core::{CalcError, CalcResult, CalculationItem, CalculationOutput, PunchingFooting};

/// Writes log records to stderr
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        env::var("FOOTING_LOG")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(LevelFilter::Warn)
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn read_input(source: &str) -> CalcResult<CalculationItem> {
    let json = if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        buffer
    } else {
        fs::read_to_string(source).map_err(|e| CalcError::file_error("read", source, e.to_string()))?
    };

    CalculationItem::from_json(&json)
}

/// Column on a 2500 x 1000 footing (d = 450), placed interactively
fn demo_item() -> CalculationItem {
    println!("Footing 2500 x 1000, effective height 450, column 450 x 250");
    println!("Footing anchor at the origin; footing spans x in [-1250, 1250], y in [-500, 500]");
    println!();

    let value_x = prompt_f64("Enter column center x [-1025.0]: ", -1025.0);
    let value_y = prompt_f64("Enter column center y [375.0]: ", 375.0);

    let mut footing = PunchingFooting::new(2500.0, 1000.0, 450.0);
    footing.add_coordinates_system(CoordinatesSystem::new(AbsoluteLocation::origin()));

    CalculationItem::PunchingPerimeter(PunchingPerimeterInput {
        label: "CLI-Demo".to_string(),
        footing,
        column_section_length_1: 450.0,
        column_section_length_2: 250.0,
        column_absolute_location: AbsoluteLocation::new(value_x, value_y, 0.0),
    })
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.iter().any(|arg| arg == "-v" || arg == "--verbose");
    init_logger(verbose);

    println!("Footing CLI - NSR-10 Footing Design");
    println!("===================================");
    println!();

    let source = args.iter().find(|arg| arg.as_str() == "-" || !arg.starts_with('-'));
    let item = match source {
        Some(source) => read_input(source),
        None => Ok(demo_item()),
    };

    match item.and_then(|item| item.run().map(|output| (item, output))) {
        Ok((item, output)) => {
            print_report(&item, &output);

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_report(item: &CalculationItem, output: &CalculationOutput) {
    println!("═══════════════════════════════════════");
    println!("  {} {}", item.calc_type().to_uppercase(), item.label());
    println!("═══════════════════════════════════════");
    println!();

    match (item, output) {
        (CalculationItem::PunchingPerimeter(input), CalculationOutput::PunchingPerimeter(result)) => {
            print_punching(input, result)
        }
        (_, CalculationOutput::BendingRatio(result)) => print_bending(result),
        (_, CalculationOutput::PunchingPerimeter(result)) => {
            println!("  b0 = {:.1}", result.perimeter);
        }
    }
}

fn print_punching(input: &PunchingPerimeterInput, result: &PunchingPerimeterResult) {
    let (width_1, width_2) = input.critical_section_widths();
    let column = input.column_absolute_location;

    println!("Input:");
    println!("  Footing:  {:.0} x {:.0}, d = {:.0}", input.footing.length_1, input.footing.length_2, input.footing.effective_height);
    println!("  Column:   {:.0} x {:.0} at ({:.1}, {:.1}, {:.1})",
        input.column_section_length_1,
        input.column_section_length_2,
        column.value_x(),
        column.value_y(),
        column.value_z()
    );
    println!();
    println!("Critical section ({}):", result.code_reference);
    println!("  Rectangle:  {:.1} x {:.1}", width_1, width_2);
    println!("  Edges kept: {} of 4", result.edges_kept);
    for (index, vertex) in result.vertices.iter().enumerate() {
        println!("  Vertex {}:   ({:.1}, {:.1})", index + 1, vertex.x, vertex.y);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  b0 = {:.1} of {:.1} ({:.0}%) {}",
        result.perimeter,
        result.unclipped_perimeter,
        100.0 * result.effective_fraction(),
        if result.clipped { "[CLIPPED]" } else { "[FULL]" }
    );
    println!("═══════════════════════════════════════");
}

fn print_bending(result: &BendingRatioResult) {
    println!("Flexural reinforcement ({}):", result.code_reference);
    println!("  Required ratio: {:.5}", result.required_ratio);
    println!("  Design ratio:   {:.5}{}",
        result.ratio,
        if result.minimum_governs { " (minimum governs)" } else { "" }
    );
    println!("  Steel area:     {:.6}", result.steel_area);
}
