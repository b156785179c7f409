/// Interactive session
///
/// Reads one command per line and applies it to the app, the way the page
/// reacts to widget edits and button clicks. Selection edits echo the warning
/// panel; report commands print the results region.
use crate::app::App;
use crate::cli::parse_marker_letter;
use crate::console_format::ConsoleWriter;
use crate::report::ReportKind;
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const DEFAULT_PRINT_PATH: &str = "order-report.html";

const HELP: &str = "\
Commands:
  list                      show all factors (* marks selected)
  search <text>             show factors whose label contains text
  add <key>...              select factors by key
  remove <key>...           unselect factors
  letter <А|К|Р|Ф>          add all factors marked with a letter
  show                      show the current selection
  inspections | i           doctors and examinations report
  contraindications | c     contraindications report
  reset                     clear selection and report
  print [path]              write the report as a print-ready page
  help                      this text
  quit                      leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    Add(Vec<String>),
    Remove(Vec<String>),
    Letter(char),
    Show,
    Report(ReportKind),
    Reset,
    Print(Option<PathBuf>),
    Help,
    Quit,
    Empty,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let words: Vec<String> =
        rest.split(|c: char| c.is_whitespace() || c == ',').filter(|w| !w.is_empty()).map(String::from).collect();

    match command.to_lowercase().as_str() {
        "" => Ok(ShellCommand::Empty),
        "list" | "ls" => Ok(ShellCommand::List),
        "search" | "find" => {
            if rest.is_empty() {
                Err("search needs some text".to_string())
            } else {
                Ok(ShellCommand::Search(rest.to_string()))
            }
        }
        "add" | "select" => {
            if words.is_empty() {
                Err("add needs at least one factor key".to_string())
            } else {
                Ok(ShellCommand::Add(words))
            }
        }
        "remove" | "rm" => {
            if words.is_empty() {
                Err("remove needs at least one factor key".to_string())
            } else {
                Ok(ShellCommand::Remove(words))
            }
        }
        "letter" => parse_marker_letter(rest).map(ShellCommand::Letter),
        "show" => Ok(ShellCommand::Show),
        "inspections" | "i" => Ok(ShellCommand::Report(ReportKind::Inspections)),
        "contraindications" | "c" => Ok(ShellCommand::Report(ReportKind::Contraindications)),
        "reset" => Ok(ShellCommand::Reset),
        "print" => Ok(ShellCommand::Print(if rest.is_empty() { None } else { Some(PathBuf::from(rest)) })),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("Unknown command '{}', type 'help'", other)),
    }
}

/// Run the session until `quit` or end of input
pub fn run_shell<R: BufRead, W: Write>(app: &mut App, input: R, mut output: W, use_colors: bool) -> io::Result<()> {
    writeln!(output, "{} factors loaded. Type 'help' for commands.", app.selection().options().len())?;

    for line in input.lines() {
        let line = line?;
        debug!("shell command: {}", line);

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }
        execute(app, command, &mut output, use_colors)?;
    }

    output.flush()
}

fn execute<W: Write>(app: &mut App, command: ShellCommand, output: &mut W, use_colors: bool) -> io::Result<()> {
    match command {
        ShellCommand::Empty | ShellCommand::Quit => {}
        ShellCommand::Help => writeln!(output, "{}", HELP)?,
        ShellCommand::List => {
            let options: Vec<_> = app.selection().options().iter().collect();
            let selected = selected_keys(app);
            ConsoleWriter::new(&mut *output, false).write_options(&options, &selected)?;
        }
        ShellCommand::Search(query) => {
            let options = app.selection().search(&query);
            if options.is_empty() {
                writeln!(output, "Совпадений не найдено")?;
            } else {
                let selected = selected_keys(app);
                ConsoleWriter::new(&mut *output, false).write_options(&options, &selected)?;
            }
        }
        ShellCommand::Add(keys) => match app.select_keys(&keys) {
            Ok(added) => {
                writeln!(output, "Added {} factor(s)", added)?;
                write_selection(app, output, use_colors)?;
            }
            Err(e) => writeln!(output, "{}", e)?,
        },
        ShellCommand::Remove(keys) => {
            let removed = app.remove_keys(&keys);
            writeln!(output, "Removed {} factor(s)", removed)?;
            write_selection(app, output, use_colors)?;
        }
        ShellCommand::Letter(letter) => match app.add_letter(letter) {
            Ok(added) => {
                writeln!(output, "Added {} factor(s) marked {}", added, letter)?;
                write_selection(app, output, use_colors)?;
            }
            Err(e) => writeln!(output, "{}", e)?,
        },
        ShellCommand::Show => write_selection(app, output, use_colors)?,
        ShellCommand::Report(kind) => {
            if app.run_report(kind) {
                ConsoleWriter::new(&mut *output, use_colors).write_blocks(app.results().blocks())?;
                if app.results().is_print_visible() {
                    writeln!(output, "\n(type 'print' to save a print-ready page)")?;
                }
            } else {
                writeln!(output, "Nothing selected")?;
            }
        }
        ShellCommand::Reset => {
            app.reset();
            writeln!(output, "Selection cleared")?;
        }
        ShellCommand::Print(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_PRINT_PATH));
            match app.print(&path) {
                Ok(()) => writeln!(output, "Saved {}", path.display())?,
                Err(e) => writeln!(output, "{}", e)?,
            }
        }
    }
    Ok(())
}

fn selected_keys(app: &App) -> Vec<String> {
    app.selection().get_selection().into_iter().map(|f| f.key).collect()
}

fn write_selection<W: Write>(app: &App, output: &mut W, use_colors: bool) -> io::Result<()> {
    let selection = app.selection().get_selection();
    if selection.is_empty() {
        writeln!(output, "Selection is empty")?;
    } else {
        writeln!(output, "Selected:")?;
        for factor in &selection {
            writeln!(output, "  {}", factor.label())?;
        }
    }
    ConsoleWriter::new(&mut *output, use_colors).write_warning_panel(&app.warning())
}
