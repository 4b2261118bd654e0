use eoldate_types::CycleSummary;

/// `{relative, absolute}` projection of one temporal field.
///
/// Both empty means unknown. Flag labels ("Active", "Ended", "-") have no
/// absolute part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelativeLabel {
    pub relative: String,
    pub absolute: String,
}

impl RelativeLabel {
    pub fn new(relative: impl Into<String>, absolute: impl Into<String>) -> Self {
        Self {
            relative: relative.into(),
            absolute: absolute.into(),
        }
    }

    pub fn flag(relative: &str) -> Self {
        Self::new(relative, "")
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.relative.is_empty() && self.absolute.is_empty()
    }
}

/// One temporal column of a row: the human label plus the machine value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayCell {
    pub label: RelativeLabel,
    /// `"true"`/`"false"` for flags, ISO date or empty for dates
    pub raw: String,
}

impl DisplayCell {
    pub fn relative(&self) -> &str {
        &self.label.relative
    }

    pub fn absolute(&self) -> &str {
        &self.label.absolute
    }
}

/// Format-agnostic projection of one release cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRow {
    pub cycle: String,
    pub latest: String,
    pub released: DisplayCell,
    pub support: DisplayCell,
    pub eol: DisplayCell,
    pub lts: bool,
    pub is_eol: bool,
}

/// Everything a renderer needs for one product.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub product: String,
    pub rows: Vec<DisplayRow>,
    /// Counted over the unfiltered list, so hidden EOL cycles still show up
    pub summary: CycleSummary,
    pub show_all: bool,
}
