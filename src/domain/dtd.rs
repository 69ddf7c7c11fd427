//! DTD entity parsing.
//!
//! Localization DTD files are a flat list of `<!ENTITY name "value">`
//! declarations mixed with comments. The parser walks the markup once and
//! collects general entities; parameter entities, processing instructions and
//! other declarations are skipped.

use thiserror::Error;

/// Errors raised while scanning DTD markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DtdError {
    #[error("Unterminated comment starting at line {line}")]
    UnterminatedComment { line: usize },

    #[error("Unterminated entity value starting at line {line}")]
    UnterminatedLiteral { line: usize },

    #[error("Unterminated declaration starting at line {line}")]
    UnterminatedDeclaration { line: usize },

    #[error("Missing entity name at line {line}")]
    MissingName { line: usize },

    #[error("Expected '{expected}' at line {line}, found {found}")]
    Expected { expected: &'static str, found: String, line: usize },
}

/// A general entity declared with a literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtdEntity {
    pub name: String,
    /// Decoded value.
    pub value: String,
    /// 1-based line of the `<!ENTITY` keyword.
    pub line: usize,
}

/// Parsed DTD file.
#[derive(Debug, Clone, Default)]
pub struct DtdDocument {
    entities: Vec<DtdEntity>,
}

impl DtdDocument {
    pub fn parse(content: &str) -> Result<Self, DtdError> {
        let mut cursor = Cursor::new(content);
        let mut entities = Vec::new();

        loop {
            cursor.skip_whitespace();
            if cursor.is_eof() {
                break;
            }

            if cursor.starts_with("<!--") {
                cursor.skip_delimited("<!--", "-->", |line| DtdError::UnterminatedComment { line })?;
            } else if cursor.starts_with("<?") {
                cursor.skip_delimited("<?", "?>", |line| DtdError::UnterminatedDeclaration { line })?;
            } else if cursor.starts_with("<!ENTITY") {
                if let Some(entity) = parse_entity(&mut cursor)? {
                    entities.push(entity);
                }
            } else if cursor.starts_with("<!") {
                cursor.skip_declaration()?;
            } else if cursor.peek() == Some('%') {
                cursor.skip_parameter_reference()?;
            } else {
                return Err(DtdError::Expected {
                    expected: "<",
                    found: cursor.describe_next(),
                    line: cursor.line,
                });
            }
        }

        Ok(Self { entities })
    }

    /// Value of the first declaration of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entities.iter().find(|e| e.name == name).map(|e| e.value.as_str())
    }

    pub fn entities(&self) -> &[DtdEntity] {
        &self.entities
    }
}

/// Parse `content` and return the value of entity `name`, if declared.
pub fn find_entity_value(content: &str, name: &str) -> Result<Option<String>, DtdError> {
    let document = DtdDocument::parse(content)?;
    Ok(document.get(name).map(str::to_string))
}

fn parse_entity(cursor: &mut Cursor<'_>) -> Result<Option<DtdEntity>, DtdError> {
    let line = cursor.line;
    cursor.advance("<!ENTITY".len());
    cursor.expect_whitespace()?;
    cursor.skip_whitespace();

    if cursor.peek() == Some('%') {
        cursor.skip_until_close(line)?;
        return Ok(None);
    }

    let name = cursor.take_while(|c| !c.is_whitespace() && c != '>' && c != '"' && c != '\'');
    if name.is_empty() {
        return Err(DtdError::MissingName { line });
    }
    let name = name.to_string();

    cursor.expect_whitespace()?;
    cursor.skip_whitespace();

    let value = match cursor.peek() {
        Some(quote @ ('"' | '\'')) => cursor.take_literal(quote)?,
        // External entity (SYSTEM/PUBLIC): no literal value to migrate.
        _ => {
            cursor.skip_until_close(line)?;
            return Ok(None);
        }
    };

    cursor.skip_whitespace();
    match cursor.bump() {
        Some('>') => Ok(Some(DtdEntity { name, value: decode_value(value), line })),
        other => Err(DtdError::Expected {
            expected: ">",
            found: other.map_or_else(|| "end of file".to_string(), |c| format!("'{c}'")),
            line: cursor.line,
        }),
    }
}

/// Decode character and predefined entity references in an entity value.
///
/// References to other entities (`&brandShortName;`) are kept verbatim.
pub fn decode_value(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let Some(semi) = after.find(';') else {
            decoded.push_str(&rest[amp..]);
            return decoded;
        };

        let reference = &after[..semi];
        match resolve_reference(reference) {
            Some(c) => decoded.push(c),
            None => {
                decoded.push('&');
                decoded.push_str(reference);
                decoded.push(';');
            }
        }
        rest = &after[semi + 1..];
    }

    decoded.push_str(rest);
    decoded
}

fn resolve_reference(reference: &str) -> Option<char> {
    match reference {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = reference.strip_prefix('#')?;
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)
        }
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, line: 1 }
    }

    fn rest(&self) -> &'a str {
        let src = self.src;
        &src[self.pos..]
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn advance(&mut self, bytes: usize) {
        let end = (self.pos + bytes).min(self.src.len());
        while self.pos < end {
            self.bump();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect_whitespace(&mut self) -> Result<(), DtdError> {
        match self.peek() {
            Some(c) if c.is_whitespace() => Ok(()),
            _ => Err(DtdError::Expected {
                expected: "whitespace",
                found: self.describe_next(),
                line: self.line,
            }),
        }
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&keep) {
            self.bump();
        }
        let src = self.src;
        &src[start..self.pos]
    }

    fn take_literal(&mut self, quote: char) -> Result<&'a str, DtdError> {
        let line = self.line;
        self.bump();
        let start = self.pos;
        let src = self.src;
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(&src[start..self.pos - quote.len_utf8()]),
                Some(_) => {}
                None => return Err(DtdError::UnterminatedLiteral { line }),
            }
        }
    }

    fn skip_delimited(
        &mut self,
        open: &str,
        close: &str,
        unterminated: impl Fn(usize) -> DtdError,
    ) -> Result<(), DtdError> {
        let line = self.line;
        self.advance(open.len());
        match self.rest().find(close) {
            Some(offset) => {
                self.advance(offset + close.len());
                Ok(())
            }
            None => Err(unterminated(line)),
        }
    }

    /// Skip a `<!...>` declaration, honoring quoted literals.
    fn skip_declaration(&mut self) -> Result<(), DtdError> {
        let line = self.line;
        self.advance("<!".len());
        self.skip_until_close(line)
    }

    fn skip_until_close(&mut self, line: usize) -> Result<(), DtdError> {
        loop {
            match self.peek() {
                Some('>') => {
                    self.bump();
                    return Ok(());
                }
                Some(quote @ ('"' | '\'')) => {
                    self.take_literal(quote)?;
                }
                Some(_) => {
                    self.bump();
                }
                None => return Err(DtdError::UnterminatedDeclaration { line }),
            }
        }
    }

    fn skip_parameter_reference(&mut self) -> Result<(), DtdError> {
        let line = self.line;
        self.bump();
        self.take_while(|c| c != ';' && !c.is_whitespace());
        match self.bump() {
            Some(';') => Ok(()),
            other => Err(DtdError::Expected {
                expected: ";",
                found: other.map_or_else(|| "end of file".to_string(), |c| format!("'{c}'")),
                line,
            }),
        }
    }

    fn describe_next(&self) -> String {
        self.peek().map_or_else(|| "end of file".to_string(), |c| format!("'{c}'"))
    }
}
