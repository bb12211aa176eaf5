use crate::error::CtabResult;
use crate::records::{RecordSource, Records, Row};

pub(crate) const DEFAULT_BORDER: char = '-';

/// Horizontal alignment for data rows
///
/// The header row ignores this and is always centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    pub fn from_str(src: &str) -> Option<Self> {
        match src.to_lowercase().trim() {
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            "center" | "c" => Some(Self::Center),
            _ => None,
        }
    }
}

/// Effective parameters for a single render pass
pub struct RenderConfig {
    /// Upper bound for every column width
    ///
    /// The cap is a final clamp applied after natural widths are computed
    /// from the whole data, so a later row can still widen an uncapped
    /// column. Cells wider than a capped column are hard-cut to the column
    /// width without an ellipsis.
    pub max_width: Option<usize>,
    /// Maximum number of data rows to render
    ///
    /// Header and separator lines are not counted.
    pub max_rows: Option<usize>,
    pub align: Alignment,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_width: None,
            max_rows: None,
            align: Alignment::Left,
        }
    }
}

/// Render a record source into bordered table lines
///
/// First pass computes per column widths, second pass formats rows. A data
/// row identical to the header row is skipped so that sources which repeat
/// their header line do not render it twice. An input without any record
/// renders zero lines.
pub fn render(source: &RecordSource, config: &RenderConfig) -> CtabResult<Vec<String>> {
    let mut records = source.records();
    let mut header = match records.next() {
        Some(row) => row?,
        None => return Ok(vec![]),
    };
    let mut widths = natural_widths(&mut header, records)?;
    if let Some(cap) = config.max_width {
        for width in widths.iter_mut() {
            *width = (*width).min(cap);
        }
    }

    let separator = separator_line(&widths, DEFAULT_BORDER);
    let mut lines = vec![
        separator.clone(),
        format_row(&header, &widths, Alignment::Center),
        separator.clone(),
    ];

    let mut rendered = 0usize;
    for row in source.records().skip(1) {
        let mut row = row?;
        while row.len() < widths.len() {
            row.push(String::new());
        }
        if row == header {
            continue;
        }
        if let Some(limit) = config.max_rows {
            if rendered >= limit {
                break;
            }
        }
        lines.push(format_row(&row, &widths, config.align));
        rendered += 1;
    }

    lines.push(separator);
    Ok(lines)
}

/// Compute per column natural widths from header and every data row
///
/// Widths are character counts, not byte counts. A row with more cells than
/// seen before extends the vector and the header is padded afterwards to the
/// final column count.
fn natural_widths(header: &mut Row, records: Records) -> CtabResult<Vec<usize>> {
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in records {
        let row = row?;
        for (index, cell) in row.iter().enumerate() {
            let length = cell.chars().count();
            if index >= widths.len() {
                widths.push(length);
            } else if length > widths[index] {
                widths[index] = length;
            }
        }
    }
    while header.len() < widths.len() {
        header.push(String::new());
    }
    Ok(widths)
}

fn separator_line(widths: &[usize], border: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        for _ in 0..width + 2 {
            line.push(border);
        }
        line.push('+');
    }
    line
}

fn format_row(row: &Row, widths: &[usize], align: Alignment) -> String {
    let mut line = String::from("|");
    for (index, width) in widths.iter().enumerate() {
        let cell = row.get(index).map(|cell| cell.as_str()).unwrap_or("");
        line.push(' ');
        line.push_str(&pad_cell(cell, *width, align));
        line.push(' ');
        line.push('|');
    }
    line
}

fn pad_cell(cell: &str, width: usize, align: Alignment) -> String {
    let length = cell.chars().count();
    if length > width {
        // Only possible when a cap clamped the column below the cell length
        return cell.chars().take(width).collect();
    }
    let pad = width - length;
    match align {
        Alignment::Left => format!("{}{}", cell, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), cell),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), cell, " ".repeat(pad - left))
        }
    }
}
