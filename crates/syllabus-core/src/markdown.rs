//! Line-oriented markdown grammar shared by the document converters.
//!
//! Only the small subset of markdown the converters emit is understood:
//! ATX headings, `-`/`*` bullets, single-line pipe tables and italic lines.
//! Every reader here is total: input it cannot make sense of is skipped,
//! never reported.

/// Separator row emitted under every table header.
const TABLE_SEPARATOR_CELL: &str = "---";

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Accumulates output lines and joins them with `\n`.
#[derive(Debug, Default)]
pub struct MarkdownWriter {
    lines: Vec<String>,
}

impl MarkdownWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an ATX heading of the given level.
    pub fn heading(&mut self, level: usize, text: &str) {
        self.lines.push(format!("{} {text}", "#".repeat(level)));
    }

    /// Emit a raw line of text as-is.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Emit a line wrapped in single-asterisk italics.
    pub fn italic(&mut self, text: &str) {
        self.lines.push(format!("*{text}*"));
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Emit a `- ` bullet. Embedded newlines collapse to spaces.
    pub fn bullet(&mut self, text: &str) {
        self.lines.push(format!("- {}", collapse_newlines(text)));
    }

    /// Emit a table header row followed by its separator row.
    pub fn table_header(&mut self, columns: &[&str]) {
        self.lines.push(format!("| {} |", columns.join(" | ")));
        let separator = vec![TABLE_SEPARATOR_CELL; columns.len()];
        self.lines.push(format!("| {} |", separator.join(" | ")));
    }

    /// Emit a table data row. Cells must already be escaped.
    pub fn table_row(&mut self, cells: &[String]) {
        self.lines.push(format!("| {} |", cells.join(" | ")));
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Escape free text for use inside a table cell: literal pipes become `\|`
/// and line breaks become single spaces.
pub fn escape_cell(text: &str) -> String {
    collapse_newlines(text).replace('|', "\\|")
}

fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Drop a leading UTF-8 byte order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Return the trimmed heading text if `line` is an ATX heading of exactly
/// `level`: `level` hashes followed by whitespace.
pub fn heading_text(line: &str, level: usize) -> Option<&str> {
    let rest = line.strip_prefix(&"#".repeat(level)[..])?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Return the inner text of a line that is entirely one `*italic*` span.
pub fn italic_text(line: &str) -> Option<&str> {
    let inner = line.trim().strip_prefix('*')?.strip_suffix('*')?;
    if inner.trim().is_empty() || inner.contains('*') {
        return None;
    }
    Some(inner.trim())
}

/// Blocks of a document keyed by heading text, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    blocks: Vec<(String, String)>,
}

impl Sections {
    /// Body of the block whose heading matches `key` case-insensitively.
    ///
    /// When a heading repeats, the last block wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.blocks
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, body)| body.as_str())
    }

    /// Body of the block for `key`, or the empty string when absent.
    pub fn body(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Lowercased heading keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|(k, _)| k.as_str())
    }
}

/// Partition `text` into blocks at every heading of exactly `level`.
///
/// Keys are the trimmed, lowercased heading text; bodies are trimmed. Text
/// before the first heading belongs to no block.
pub fn split_sections(text: &str, level: usize) -> Sections {
    let mut blocks = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(heading) = heading_text(line, level) {
            if let Some((key, body)) = current.take() {
                blocks.push((key, body.join("\n").trim().to_string()));
            }
            current = Some((heading.to_lowercase(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    if let Some((key, body)) = current {
        blocks.push((key, body.join("\n").trim().to_string()));
    }

    Sections { blocks }
}

/// Plain body text of a block: every line that is neither a heading nor a
/// table row, joined and trimmed.
pub fn body_text(block: &str) -> String {
    block
        .lines()
        .filter(|l| !l.starts_with('#') && !l.starts_with('|'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Items of every `-` or `*` bullet line in a block.
pub fn bullets(block: &str) -> Vec<String> {
    block.lines().filter_map(bullet_item).collect()
}

fn bullet_item(line: &str) -> Option<String> {
    let rest = line.strip_prefix(['-', '*'])?;
    if !rest.starts_with(char::is_whitespace) || rest.trim().is_empty() {
        return None;
    }
    Some(rest.trim().to_string())
}

/// Data rows of the pipe table in a block.
///
/// The first two table lines are taken to be the header and separator rows
/// and are always discarded.
pub fn table_rows(block: &str) -> Vec<Vec<String>> {
    block
        .lines()
        .filter(|l| l.trim_start().starts_with('|'))
        .skip(2)
        .map(split_cells)
        .collect()
}

/// Split a table row on unescaped pipes, unescaping `\|` and trimming cells.
///
/// The segment before the leading pipe is dropped, as is the segment after
/// the final pipe when it is blank.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = line.trim().chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                cell.push('|');
            }
            '|' => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    if !cell.trim().is_empty() {
        cells.push(cell);
    }
    if !cells.is_empty() {
        cells.remove(0);
    }

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

/// Cell `index` of a row, or the empty string when the row is too short.
pub fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}
