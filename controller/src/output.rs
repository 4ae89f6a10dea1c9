//! Console output for controller messages
//!
//! Lines written here are meant for the operator watching the controller, not
//! for diagnostics (those go through `tracing`). Each agent gets its own
//! `Console` so that output from several agents can be told apart by color
//! and label prefix.

use crossterm::style::{Color, Stylize};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::warn;

use crate::constants::display::{DEFAULT_COLOR, ERROR_COLOR, PREFIX_WIDTH, STDERR_SOURCE};
use crate::errors::ConfigError;

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
pub struct Console {
    color: Option<Color>,
    prefix: Option<String>,
    color_enabled: bool,
    sink: Sink,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("color", &self.color)
            .field("prefix", &self.prefix)
            .field("color_enabled", &self.color_enabled)
            .finish_non_exhaustive()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    /// Console writing to the process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Console writing to an arbitrary sink
    pub fn new<W>(sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            color: None,
            prefix: None,
            color_enabled: true,
            sink: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    /// Set the color used for regular lines. Accepts plain names (`green`,
    /// `bright_blue`) as well as the `fg:ansigreen` form.
    pub fn with_color(mut self, name: &str) -> Result<Self, ConfigError> {
        let color = parse_color(name).ok_or_else(|| ConfigError::InvalidValue {
            field: "color".to_string(),
            reason: format!("unknown color '{}'", name),
        })?;
        self.color = Some(color);
        Ok(self)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    pub fn with_color_enabled(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// Label prefix padded to a fixed width, e.g. `"alice      |"`
    pub fn prefix_str(&self) -> Option<String> {
        self.prefix
            .as_ref()
            .map(|p| format!("{:<width$} |", p, width = PREFIX_WIDTH))
    }

    /// Write a regular, newline-terminated line
    pub fn log(&self, message: impl fmt::Display) {
        self.handle_output(&[&message], None);
    }

    /// Write output parts joined by spaces.
    ///
    /// `source` selects the rendering: `None` is a regular colored line,
    /// `Some("stderr")` is an error line in red, any other source is a raw
    /// continuation write. Whenever a source is given no newline is appended.
    pub fn handle_output(&self, parts: &[&dyn fmt::Display], source: Option<&str>) {
        let rendered = self.render(parts, source);

        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = sink.write_all(rendered.as_bytes()).and_then(|_| sink.flush()) {
            warn!("Failed to write console output: {}", e);
        }
    }

    fn line_color(&self, source: Option<&str>) -> Option<Color> {
        if !self.color_enabled {
            return None;
        }
        match source {
            Some(STDERR_SOURCE) => parse_color(ERROR_COLOR),
            None => self.color.or_else(|| parse_color(DEFAULT_COLOR)),
            Some(_) => None,
        }
    }

    fn render(&self, parts: &[&dyn fmt::Display], source: Option<&str>) -> String {
        let text = parts
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let color = self.line_color(source);
        let prefix = self.prefix_str();

        let mut out = text
            .split('\n')
            .map(|line| {
                let line = match &prefix {
                    Some(prefix) => format!("{} {}", prefix, line),
                    None => line.to_string(),
                };
                match color {
                    Some(color) => line.with(color).to_string(),
                    None => line,
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        if source.is_none() {
            out.push('\n');
        }
        out
    }
}

/// Map a color name onto a terminal color.
///
/// Base names map onto the standard eight ANSI colors, `bright` variants onto
/// the high-intensity ones.
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    let name = name.strip_prefix("fg:").unwrap_or(&name);
    let name = name.strip_prefix("ansi").unwrap_or(name);
    let (bright, base) = match name.strip_prefix("bright") {
        Some(rest) => (true, rest.trim_start_matches(['_', '-'])),
        None => (false, name),
    };

    let color = match (bright, base) {
        (false, "black") => Color::Black,
        (true, "black") => Color::DarkGrey,
        (false, "red") => Color::DarkRed,
        (true, "red") => Color::Red,
        (false, "green") => Color::DarkGreen,
        (true, "green") => Color::Green,
        (false, "yellow") => Color::DarkYellow,
        (true, "yellow") => Color::Yellow,
        (false, "blue") => Color::DarkBlue,
        (true, "blue") => Color::Blue,
        (false, "magenta" | "purple") => Color::DarkMagenta,
        (true, "magenta" | "purple") => Color::Magenta,
        (false, "cyan") => Color::DarkCyan,
        (true, "cyan") => Color::Cyan,
        (false, "white" | "gray" | "grey") => Color::Grey,
        (true, "white") => Color::White,
        _ => return None,
    };
    Some(color)
}
