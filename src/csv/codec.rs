//! CSV codec
//!
//! Row-level parsing and encoding.
//!
//! ## Grammar
//! - Fields are separated by `,`, records by `\n`, `\r\n` or a bare `\r`
//! - A field starting with `"` is quoted: it may contain `,` and line breaks,
//!   and `""` stands for a literal quote
//! - A quote inside an unquoted field is kept literally
//! - Blank lines are skipped

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Result, SocialError};

/// One parsed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line on which the record starts
    pub line: usize,
    pub fields: Vec<String>,
}

/// Parser state carried across characters
struct RowParser<'a> {
    chars: Peekable<Chars<'a>>,
    rows: Vec<CsvRow>,
    fields: Vec<String>,
    field: String,
    /// Current line (1-based)
    line: usize,
    /// Line the current record started on
    row_start: usize,
    /// Current record has seen at least one character
    in_row: bool,
    /// Current field was quoted and its closing quote has been read
    closed_quote: bool,
}

impl<'a> RowParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.strip_prefix('\u{feff}').unwrap_or(text).chars().peekable(),
            rows: Vec::new(),
            fields: Vec::new(),
            field: String::new(),
            line: 1,
            row_start: 1,
            in_row: false,
            closed_quote: false,
        }
    }

    fn run(mut self) -> Result<Vec<CsvRow>> {
        while let Some(c) = self.chars.next() {
            match c {
                '\r' if self.chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    self.end_row();
                    self.line += 1;
                }
                ',' => {
                    self.start_row();
                    self.end_field();
                }
                _ if self.closed_quote => {
                    return Err(SocialError::Malformed {
                        line: self.line,
                        reason: format!("unexpected '{}' after closing quote", c),
                    });
                }
                '"' if self.field.is_empty() => {
                    self.start_row();
                    self.quoted_field()?;
                }
                _ => {
                    self.start_row();
                    self.field.push(c);
                }
            }
        }

        self.end_row();
        Ok(self.rows)
    }

    /// Consume a quoted field up to and including its closing quote
    fn quoted_field(&mut self) -> Result<()> {
        let opened_on = self.line;

        while let Some(c) = self.chars.next() {
            match c {
                '"' if self.chars.peek() == Some(&'"') => {
                    self.chars.next();
                    self.field.push('"');
                }
                '"' => {
                    self.closed_quote = true;
                    return Ok(());
                }
                '\r' if self.chars.peek() == Some(&'\n') => self.field.push(c),
                '\n' | '\r' => {
                    self.line += 1;
                    self.field.push(c);
                }
                _ => self.field.push(c),
            }
        }

        Err(SocialError::Malformed {
            line: opened_on,
            reason: "unterminated quoted field".to_string(),
        })
    }

    fn start_row(&mut self) {
        if !self.in_row {
            self.in_row = true;
            self.row_start = self.line;
        }
    }

    fn end_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.field));
        self.closed_quote = false;
    }

    fn end_row(&mut self) {
        if !self.in_row {
            return;
        }
        self.end_field();
        self.rows.push(CsvRow {
            line: self.row_start,
            fields: std::mem::take(&mut self.fields),
        });
        self.in_row = false;
    }
}

/// Parse CSV text into rows
pub fn parse_rows(text: &str) -> Result<Vec<CsvRow>> {
    RowParser::new(text).run()
}

/// Encode one row, quoting fields where needed (no trailing newline)
pub fn encode_row<S: AsRef<str>>(fields: &[S]) -> String {
    let mut out = String::new();

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let field = field.as_ref();
        if needs_quoting(field) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }

    out
}

fn needs_quoting(field: &str) -> bool {
    field.contains([',', '"', '\r', '\n'])
}
