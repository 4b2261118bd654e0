use owo_colors::{OwoColorize, XtermColors};

/// Output encodings selectable with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Markdown,
    Csv,
    Html,
}

impl OutputFormat {
    /// Look up a format by name. Anything unrecognized is a table.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "markdown" => Self::Markdown,
            "csv" => Self::Csv,
            "html" => Self::Html,
            "table" => Self::Table,
            other => {
                tracing::debug!(format = other, "unknown output format, using table");
                Self::Table
            }
        }
    }
}

/// ANSI-256 colors for terminal output, passed to renderers by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub active: u8,
    pub eol: u8,
    pub lts: u8,
    pub dim: u8,
    pub header: u8,
    pub table_header: u8,
    pub enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: 42,
            eol: 203,
            lts: 220,
            dim: 240,
            header: 212,
            table_header: 252,
            enabled: true,
        }
    }
}

impl Palette {
    /// Same codes, no escape sequences.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn row_color(&self, is_eol: bool) -> u8 {
        if is_eol { self.eol } else { self.active }
    }

    pub fn paint(&self, text: &str, code: u8) -> String {
        if self.enabled {
            text.color(XtermColors::from(code)).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, self.dim)
    }

    pub fn title(&self, text: &str) -> String {
        if self.enabled {
            text.color(XtermColors::from(self.header)).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
