//! Column and box-drawing primitives shared by the formatters.
//!
//! Widths count `char`s, which matches a monospace cell for the Latin text
//! and box-drawing glyphs the terminal renders.

/// Pads `text` with trailing spaces to `width` columns. Never truncates.
pub fn pad_end(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

/// Pads `text` with leading spaces to `width` columns. Never truncates.
pub fn pad_start(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out: String = std::iter::repeat(' ')
        .take(width.saturating_sub(len))
        .collect();
    out.push_str(text);
    out
}

/// Centers `text` in `width` columns, extra space going to the right.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    pad_end(&format!("{}{text}", " ".repeat(left)), width)
}

/// A horizontal rule of `width` light box-drawing dashes.
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// `┌────┐` with `width` inner columns.
pub fn box_top(width: usize) -> String {
    format!("┌{}┐", rule(width))
}

/// `├────┤` with `width` inner columns.
pub fn box_divider(width: usize) -> String {
    format!("├{}┤", rule(width))
}

/// `└────┘` with `width` inner columns.
pub fn box_bottom(width: usize) -> String {
    format!("└{}┘", rule(width))
}

/// `│content   │` with `content` padded to `width` inner columns.
pub fn box_row(content: &str, width: usize) -> String {
    format!("│{}│", pad_end(content, width))
}

/// Joins two columns row by row, padding the left column to `left_width`.
///
/// Runs for as many rows as the longer column; missing cells are blank.
pub fn side_by_side<L, R>(left: &[L], right: &[R], left_width: usize) -> String
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let l = left.get(i).map(AsRef::as_ref).unwrap_or("");
            let r = right.get(i).map(AsRef::as_ref).unwrap_or("");
            format!("{}{}", pad_end(l, left_width), r)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
