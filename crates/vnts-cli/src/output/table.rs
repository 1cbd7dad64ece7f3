//! Plain-text tables for entity lists and key/value views.
//!
//! Column widths come from the data, clamped to the terminal width when one
//! is known. When an accent is set the header row is painted with the
//! resolved tenant color and status-like cells get the usual green/red.

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    /// Tenant accent for the header row. `None` renders monochrome.
    pub accent: Option<(u8, u8, u8)>,
}

const MIN_COLUMN: usize = 6;
const COLUMN_GAP: &str = "  ";

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let widths = column_widths(headers, rows, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| {
            let cell = pad_left_aligned(&truncate_text(header, *width), *width);
            match options.accent {
                Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{cell}\x1b[0m"),
                None => cell,
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    let visible_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push("-".repeat(visible_width));
    for row in rows {
        lines.push(render_row(row, &widths, options.accent.is_some()));
    }
    lines.join("\n")
}

fn render_row(row: &[String], widths: &[usize], colored: bool) -> String {
    widths
        .iter()
        .copied()
        .enumerate()
        .map(|(index, width)| {
            let value = row.get(index).map_or("-", String::as_str);
            let truncated = truncate_text(value, width);
            if looks_numeric(&truncated) {
                // Numbers (ids, prices, quantities) read better right-aligned.
                return format!("{truncated:>width$}");
            }
            let pad = width.saturating_sub(truncated.chars().count());
            let cell = if colored {
                colorize_status(&truncated)
            } else {
                truncated
            };
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

/// Natural widths, then shrink the widest shrinkable column until the
/// table fits. A column never goes below its header or [`MIN_COLUMN`].
fn column_widths(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> Vec<usize> {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN)
        })
        .collect();

    let Some(max_width) = max_width else {
        return widths;
    };
    if widths.is_empty() {
        return widths;
    }

    let gaps = COLUMN_GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max_width {
        let shrinkable = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width);
        let Some((idx, _)) = shrinkable else {
            break;
        };
        widths[idx] -= 1;
    }
    widths
}

fn pad_left_aligned(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.chars().count());
    format!("{}{}", value, " ".repeat(pad))
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// Green for healthy states, yellow for transitional ones, red for the rest
/// of the vocabulary the backend uses in list cells.
fn colorize_status(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "ok" | "true" | "active" | "authenticated" => "32",
        "pending" | "warning" | "stale" => "33",
        "error" | "failed" | "false" | "inactive" | "missing" | "expired" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
