//! Properties file model and merge planning.

/// License header written at the top of newly created properties files.
pub const DEFAULT_LICENSE_HEADER: &str = "\
# This Source Code Form is subject to the terms of the Mozilla Public
# License, v. 2.0. If a copy of the MPL was not distributed with this
# file, You can obtain one at http://mozilla.org/MPL/2.0/.
";

/// A `key=value` entry with the comment block directly above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesEntry {
    pub key: String,
    /// Value as written in the file (escapes preserved).
    pub raw_value: String,
    /// 1-based line where the entry starts.
    pub line: usize,
    /// Comment lines immediately preceding the entry, verbatim.
    pub comments: Vec<String>,
}

/// Parsed properties file.
#[derive(Debug, Clone, Default)]
pub struct PropertiesDocument {
    entries: Vec<PropertiesEntry>,
}

impl PropertiesDocument {
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();
        let mut comments: Vec<String> = Vec::new();
        let mut lines = content.lines().enumerate();

        while let Some((index, line)) = lines.next() {
            let trimmed = line.trim_start_matches(is_separator_space);
            if trimmed.is_empty() {
                comments.clear();
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with('!') {
                comments.push(line.to_string());
                continue;
            }

            let mut logical = trimmed.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start_matches(is_separator_space)),
                    None => break,
                }
            }

            let (key, raw_value) = split_entry(&logical);
            entries.push(PropertiesEntry {
                key: key.to_string(),
                raw_value: raw_value.to_string(),
                line: index + 1,
                comments: std::mem::take(&mut comments),
            });
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[PropertiesEntry] {
        &self.entries
    }

    /// Last definition of `key`, matching `java.util.Properties` semantics.
    pub fn get(&self, key: &str) -> Option<&PropertiesEntry> {
        self.entries.iter().rev().find(|e| e.key == key)
    }

    pub fn contains(&self, key: &str, raw_value: &str) -> bool {
        self.entries.iter().any(|e| e.key == key && e.raw_value == raw_value)
    }

    /// Localization note documenting `key`, if the comment block above it has one.
    pub fn note_for(&self, key: &str) -> Option<Note> {
        let entry = self.get(key)?;
        let documented = entry.comments.iter().any(|line| note_names_key(line, key));
        documented.then(|| Note::from_comment_lines(entry.comments.clone()))
    }
}

/// Whether `line` reads `LOCALIZATION NOTE (k1, k2, ...)` with `key` among the keys.
fn note_names_key(line: &str, key: &str) -> bool {
    let Some((_, rest)) = line.split_once("LOCALIZATION NOTE") else {
        return false;
    };
    let Some((keys, _)) = rest.trim_start().strip_prefix('(').and_then(|r| r.split_once(')')) else {
        return false;
    };
    keys.split(|c: char| c == ',' || c.is_whitespace()).any(|k| k == key)
}

/// Whitespace the properties format treats as insignificant around keys.
fn is_separator_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C')
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 1
}

/// Split a logical line into key and raw value.
///
/// The key ends at the first unescaped `=`, `:` or whitespace; one separator
/// and surrounding whitespace are dropped.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_separator_space(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_separator_space);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(is_separator_space);
    }
    (key, rest)
}

/// Escape a decoded string for use as a properties value.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x0C' => escaped.push_str("\\f"),
            ' ' if i == 0 => escaped.push_str("\\u0020"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Comment block written above a migrated entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    lines: Vec<String>,
}

impl Note {
    /// Build a note from free text, prefixing each line with `# `.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(|line| if line.is_empty() { "#".to_string() } else { format!("# {line}") })
            .collect();
        Self { lines }
    }

    /// Reuse comment lines taken verbatim from another properties file.
    pub fn from_comment_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Entry about to be merged into a properties file.
#[derive(Debug, Clone)]
pub struct IncomingEntry<'a> {
    pub key: &'a str,
    /// Decoded value; escaped when written.
    pub value: &'a str,
    pub note: &'a Note,
}

/// Outcome of comparing an incoming entry against the destination file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergePlan {
    /// Destination is missing; create it with this content.
    Create { content: String },
    /// Append this block to the existing destination.
    Append { block: String },
    /// Same key and value already present.
    AlreadyPresent,
    /// Key present with a different value; left untouched.
    Conflict { existing: String, incoming: String },
}

/// Decide how `entry` lands in a destination whose current content is `existing`.
pub fn plan_merge(existing: Option<&str>, entry: &IncomingEntry<'_>, license_header: &str) -> MergePlan {
    let raw_value = escape_value(entry.value);

    let Some(content) = existing else {
        let mut content = String::new();
        let header = license_header.trim_end();
        if !header.is_empty() {
            content.push_str(header);
            content.push('\n');
        }
        content.push_str(&render_block(entry.key, &raw_value, entry.note));
        return MergePlan::Create { content };
    };

    let document = PropertiesDocument::parse(content);
    if document.contains(entry.key, &raw_value) {
        return MergePlan::AlreadyPresent;
    }
    if let Some(current) = document.get(entry.key) {
        return MergePlan::Conflict { existing: current.raw_value.clone(), incoming: raw_value };
    }

    let mut block = String::new();
    if !content.is_empty() && !content.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&render_block(entry.key, &raw_value, entry.note));
    MergePlan::Append { block }
}

fn render_block(key: &str, raw_value: &str, note: &Note) -> String {
    let mut block = String::from("\n");
    for line in note.lines() {
        block.push_str(line);
        block.push('\n');
    }
    block.push_str(key);
    block.push('=');
    block.push_str(raw_value);
    block.push('\n');
    block
}
