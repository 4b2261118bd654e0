/// Markdown/HTML cell text: "rel (raw)" when both are present, otherwise
/// whichever is present. Flag raws ("true"/"false") never show.
pub fn combine_label(relative: &str, raw: &str) -> String {
    let raw = match raw {
        "true" | "false" => "",
        other => other,
    };

    match (relative.is_empty(), raw.is_empty()) {
        (true, true) => String::new(),
        (false, true) => relative.to_string(),
        (true, false) => raw.to_string(),
        (false, false) => format!("{} ({})", relative, raw),
    }
}

/// Table cell text: relative left, absolute right, at least one space apart.
pub fn spread_cell(relative: &str, absolute: &str, width: usize) -> String {
    if absolute.is_empty() {
        return relative.to_string();
    }

    let used = relative.chars().count() + absolute.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", relative, " ".repeat(gap), absolute)
}

/// Width a spread cell needs: `len(rel) + 1 + len(abs)`, or just the label
/// when there is no absolute part.
pub fn spread_width(relative: &str, absolute: &str) -> usize {
    if absolute.is_empty() {
        relative.chars().count()
    } else {
        relative.chars().count() + 1 + absolute.chars().count()
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}
