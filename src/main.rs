// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod app;
mod cli;
mod config;
mod console_format;
mod dataset;
mod download;
mod host;
mod key;
mod markers;
mod report;
mod selection;
mod shell;
mod ui;
mod warning;

use app::App;
use cli::ReportChoice;
use console_format::ConsoleWriter;
use report::{OutputFormat, ReportKind, ReportSnapshot};
use selection::SelectionState;
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Set console width override if specified
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    let config = match config::build_session_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Nothing else starts without the order data
    let dataset = match download::load_dataset(&config.data_source) {
        Ok(d) => d,
        Err(e) => {
            ui::print_error(&format!("Ошибка при загрузке ресурсов: {}", e));
            std::process::exit(1);
        }
    };

    let mut app = App::new(dataset, Box::new(config.host.clone()));

    if args.list || args.search.is_some() {
        if let Err(e) = print_options(&app, args.search.as_deref()) {
            ui::print_error(&format!("Failed to write output: {}", e));
            std::process::exit(1);
        }
        return;
    }

    if !args.factors.is_empty() {
        if let Err(e) = app.select_keys(&args.factors) {
            ui::print_error(&e);
            std::process::exit(1);
        }
    }

    // Letters were validated together with the other arguments
    for letter in args.marker_letters().unwrap_or_default() {
        if let Err(e) = app.add_letter(letter) {
            ui::print_error(&e);
            std::process::exit(1);
        }
    }

    if args.interactive {
        let stdin = io::stdin();
        if let Err(e) = shell::run_shell(&mut app, stdin.lock(), io::stdout(), config.use_colors) {
            ui::print_error(&format!("Interactive session failed: {}", e));
            std::process::exit(1);
        }
        return;
    }

    if app.selection().state() == SelectionState::Empty {
        ui::status("No factors selected. Use --factors, --list or --interactive.");
        return;
    }

    let writes_to_console = args.output.is_none() && args.format == OutputFormat::Console;
    if writes_to_console {
        if let Err(e) = ConsoleWriter::new(io::stdout(), config.use_colors).write_warning_panel(&app.warning()) {
            ui::print_error(&format!("Failed to write output: {}", e));
            std::process::exit(1);
        }
    }

    let (snapshot, print_visible) = generate_reports(&mut app, args.report);

    if let Err(e) = write_report(&snapshot, &args, config.use_colors) {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if let Some(ref print_path) = args.print {
        if print_visible {
            match report::export_report(&snapshot, OutputFormat::Html, print_path) {
                Ok(()) => ui::status(&format!("Print-ready page saved to: {}", print_path.display())),
                Err(e) => {
                    ui::print_error(&e);
                    std::process::exit(1);
                }
            }
        } else {
            ui::print_warning("Printing is not offered on mobile devices");
        }
    }
}

/// Run the requested report actions and collect their blocks
fn generate_reports(app: &mut App, choice: ReportChoice) -> (ReportSnapshot, bool) {
    let kinds: &[ReportKind] = match choice {
        ReportChoice::Inspections => &[ReportKind::Inspections],
        ReportChoice::Contraindications => &[ReportKind::Contraindications],
        ReportChoice::Both => &[ReportKind::Inspections, ReportKind::Contraindications],
    };

    let mut snapshot = app.results().snapshot();
    let mut print_visible = false;
    for kind in kinds {
        if app.run_report(*kind) {
            snapshot.blocks.extend(app.results().blocks().iter().cloned());
            print_visible = app.results().is_print_visible();
        }
    }

    (snapshot, print_visible)
}

/// Write the report to stdout or to the --output file
fn write_report(snapshot: &ReportSnapshot, args: &cli::CliArgs, use_colors: bool) -> Result<(), String> {
    match args.output {
        Some(ref path) => {
            report::export_report(snapshot, args.format, path)?;
            ui::status(&format!("Report saved to: {}", path.display()));
            Ok(())
        }
        None if args.format == OutputFormat::Console => ConsoleWriter::new(io::stdout(), use_colors)
            .write_blocks(&snapshot.blocks)
            .map_err(|e| format!("Failed to write output: {}", e)),
        None => {
            let content = report::render_snapshot(snapshot, args.format)?;
            println!("{}", content);
            Ok(())
        }
    }
}

/// Print the factor list, optionally filtered by a search query
fn print_options(app: &App, query: Option<&str>) -> io::Result<()> {
    let options = app.selection().search(query.unwrap_or(""));
    if options.is_empty() {
        println!("Совпадений не найдено");
        return Ok(());
    }
    ConsoleWriter::new(io::stdout(), false).write_options(&options, &[])
}
