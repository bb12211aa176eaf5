use crate::error::{CtabError, CtabResult};
use std::path::Path;

/// A single parsed csv record
pub type Row = Vec<String>;

/// Buffered csv source
///
/// The whole text is kept in memory so that records can be iterated multiple
/// times. The renderer needs two passes, one for width computation and one
/// for formatting.
pub struct RecordSource {
    content: String,
}

impl RecordSource {
    pub fn from_file(path: &Path) -> CtabResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::InvalidData => CtabError::MalformedInput(format!(
                "File \"{}\" is not valid utf-8 text",
                path.display()
            )),
            _ => CtabError::not_found(
                err,
                &format!("Failed to read file \"{}\"", path.display()),
            ),
        })?;
        Ok(Self { content })
    }

    pub fn from_string(content: &str) -> Self {
        Self {
            content: content.to_owned(),
        }
    }

    /// Iterate records from the start
    ///
    /// The first record is the header row. Every call starts a fresh pass.
    pub fn records(&self) -> Records<'_> {
        Records {
            iter: self.content.chars().peekable(),
            poisoned: false,
        }
    }
}

/// Lazy record iterator over a csv source
///
/// Cells are comma separated and can be quoted with double quotes. A quoted
/// cell keeps embedded commas and newlines as-is while two consecutive double
/// quotes inside a quote become a literal one. An unterminated quote yields a
/// malformed input error and ends the iteration.
pub struct Records<'src> {
    iter: std::iter::Peekable<std::str::Chars<'src>>,
    poisoned: bool,
}

impl<'src> Iterator for Records<'src> {
    type Item = CtabResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }
        self.iter.peek()?;

        let mut row: Row = vec![];
        let mut cell = String::new();
        let mut on_quote = false;
        while let Some(ch) = self.iter.next() {
            match ch {
                '"' => {
                    if on_quote {
                        // Add literal double quote if the next is the same character
                        if let Some('"') = self.iter.peek() {
                            self.iter.next();
                            cell.push('"');
                        } else {
                            on_quote = false;
                        }
                    } else {
                        on_quote = true;
                    }
                }
                ',' if !on_quote => row.push(std::mem::take(&mut cell)),
                '\r' if !on_quote => {
                    // Swallow only when part of a crlf line break
                    if let Some('\n') = self.iter.peek() {
                    } else {
                        cell.push(ch);
                    }
                }
                '\n' if !on_quote => {
                    row.push(cell);
                    return Some(Ok(row));
                }
                _ => cell.push(ch),
            }
        }

        if on_quote {
            self.poisoned = true;
            return Some(Err(CtabError::MalformedInput(
                "Unterminated quote in csv input".to_string(),
            )));
        }

        row.push(cell);
        Some(Ok(row))
    }
}
