/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Report headings and numbered lists
/// - The marker letter warning panel
/// - The factor option list
/// - Color terminal output, wrapping and truncation
///
/// It accepts the report blocks and renders them to any `std::io::Write`
/// destination. Colors are only emitted when the writer is the terminal.

use crate::report::Block;
use crate::selection::FactorOption;
use crate::warning::{self, WarningPanel};
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Writer for report output - configurable for color/plain text
pub struct ConsoleWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> ConsoleWriter<W> {
    /// Create a new console writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Write formatted text, optionally with color
    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            if let Some(ref mut t) = term::stdout() {
                let _ = t.fg(color);
                let _ = t.attr(term::Attr::Bold);
                let _ = t.write_all(text.as_bytes());
                let _ = t.reset();
                let _ = t.flush();
                return Ok(());
            }
        }
        write!(self.writer, "{}", text)
    }

    fn writeln(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Write all blocks of a report
    pub fn write_blocks(&mut self, blocks: &[Block]) -> io::Result<()> {
        let width = get_console_width();

        for block in blocks {
            match block {
                Block::Header { text } => {
                    self.write_colored(text, term::color::BRIGHT_CYAN)?;
                    self.writeln()?;
                    writeln!(self.writer, "{}", "═".repeat(display_width(text).min(width)))?;
                }
                Block::Subheader { text } => {
                    self.writeln()?;
                    self.write_colored(text, term::color::BRIGHT_WHITE)?;
                    self.writeln()?;
                }
                Block::List { items } => {
                    self.write_numbered_list(items, width)?;
                }
            }
        }
        self.writer.flush()
    }

    /// Numbered list with hanging indent for wrapped lines
    fn write_numbered_list(&mut self, items: &[String], width: usize) -> io::Result<()> {
        let number_width = items.len().to_string().len();
        for (i, item) in items.iter().enumerate() {
            let prefix = format!("  {:>w$}. ", i + 1, w = number_width);
            let indent = " ".repeat(display_width(&prefix));
            let available = width.saturating_sub(display_width(&prefix)).max(20);

            for (line_no, line) in wrap_text(item, available).iter().enumerate() {
                if line_no == 0 {
                    writeln!(self.writer, "{}{}", prefix, line)?;
                } else {
                    writeln!(self.writer, "{}{}", indent, line)?;
                }
            }
        }
        Ok(())
    }

    /// Write the warning panel, or nothing when it is hidden
    pub fn write_warning_panel(&mut self, panel: &WarningPanel) -> io::Result<()> {
        if !panel.is_visible() {
            return Ok(());
        }

        self.write_colored(warning::WARNING_TITLE, term::color::BRIGHT_YELLOW)?;
        self.writeln()?;
        for line in panel.factor_lines() {
            writeln!(self.writer, "  - {}", line)?;
        }

        let buttons: Vec<String> =
            panel.buttons().iter().filter(|b| b.visible).map(|b| format!("[{}]", b.letter)).collect();
        writeln!(self.writer, "{} {}", warning::WARNING_HINT, buttons.join(" "))?;
        self.writer.flush()
    }

    /// Write option labels, one per line, truncated to the console width
    pub fn write_options(&mut self, options: &[&FactorOption], selected_keys: &[String]) -> io::Result<()> {
        let width = get_console_width().saturating_sub(4).max(20);
        for option in options {
            let mark = if selected_keys.contains(&option.key) { "*" } else { " " };
            writeln!(self.writer, "{} {}", mark, truncate_with_padding(&option.label, width).trim_end())?;
        }
        self.writer.flush()
    }
}

/// Get terminal width or default to 100
fn get_terminal_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        w as usize
    } else {
        100 // Default width
    }
}

static CONSOLE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Override console width (must be called before any output)
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH.set(width); // Ignore error if already initialized
}

/// Console width, detected on first use
pub fn get_console_width() -> usize {
    *CONSOLE_WIDTH.get_or_init(get_terminal_width)
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w > width {
        let mut result = String::new();
        let mut current_width = 0;

        // Reserve space for "..."
        let target_width = if width >= 3 { width - 3 } else { width };

        for c in s.chars() {
            let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
            if current_width + c_width > target_width {
                break;
            }
            result.push(c);
            current_width += c_width;
        }

        if width >= 3 {
            result.push_str("...");
            current_width += 3;
        }

        if current_width < width {
            result.push_str(&" ".repeat(width - current_width));
        }

        result
    } else {
        format!("{}{}", s, " ".repeat(width - display_w))
    }
}

/// Wrap text on whitespace so no line exceeds `width` display columns
///
/// Words longer than the width are placed on their own line unbroken.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in s.split_whitespace() {
        let word_width = display_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
