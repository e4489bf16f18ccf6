//! Relaxed parser for structured-literal data files.
//!
//! Two vendors keep their icon metadata inside a source file as a
//! language-level constant rather than in JSON. The literal syntax is a
//! superset of JSON: unquoted object keys, single- or double-quoted
//! strings, trailing commas, line and block comments, and bare identifier
//! values such as enum members (`IconCategory.ARROWS`), which parse to
//! plain strings.
//!
//! The public entry points never fail: a slice that cannot be located or
//! parsed yields an empty array. "No metadata" is an expected outcome, not
//! an error.

use serde_json::{Map, Number, Value};

/// Locate the array literal bound to `export const <binding>` in a source
/// file and return it as a slice of text.
///
/// Lines that are import directives are dropped first. The slice runs from
/// the first `[` after the binding's `=` to the last `]` in the remaining
/// text.
pub fn slice_array_export(source: &str, binding: &str) -> Option<String> {
    let cleaned: String = source
        .lines()
        .filter(|line| !line.trim_start().starts_with("import "))
        .collect::<Vec<_>>()
        .join("\n");

    let anchor = cleaned.find(&format!("export const {binding}"))?;
    let eq = cleaned[anchor..].find('=').map(|i| anchor + i)?;
    let start = cleaned[eq..].find('[').map(|i| eq + i)?;
    let end = cleaned.rfind(']')?;
    if end < start {
        return None;
    }
    Some(cleaned[start..=end].to_string())
}

/// Parse a relaxed array literal. Returns an empty vector on any failure.
pub fn parse_relaxed_array(text: &str) -> Vec<Value> {
    match parse_relaxed(text) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Parse a single relaxed value. `None` on any syntax error or trailing
/// garbage.
pub fn parse_relaxed(text: &str) -> Option<Value> {
    let mut parser = Parser::new(text);
    parser.skip_trivia();
    let value = parser.value()?;
    parser.skip_trivia();
    if parser.at_end() {
        Some(value)
    } else {
        None
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip whitespace plus `//` and `/* */` comments.
    fn skip_trivia(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.pos += 1;
            }
            if self.peek() == Some('/') && self.chars.get(self.pos + 1) == Some(&'/') {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.pos += 1;
                }
            } else if self.peek() == Some('/') && self.chars.get(self.pos + 1) == Some(&'*') {
                self.pos += 2;
                while !self.at_end() {
                    if self.peek() == Some('*') && self.chars.get(self.pos + 1) == Some(&'/') {
                        self.pos += 2;
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                return;
            }
        }
    }

    fn value(&mut self) -> Option<Value> {
        match self.peek()? {
            '{' => self.object(),
            '[' => self.array(),
            '"' | '\'' => self.quoted_string().map(Value::String),
            c if c == '-' || c == '+' || c.is_ascii_digit() => self.number(),
            c if is_ident_start(c) => Some(self.bare_literal()),
            _ => None,
        }
    }

    fn object(&mut self) -> Option<Value> {
        self.eat('{').then_some(())?;
        let mut map = Map::new();
        loop {
            self.skip_trivia();
            if self.eat('}') {
                return Some(Value::Object(map));
            }
            let key = self.key()?;
            self.skip_trivia();
            self.eat(':').then_some(())?;
            self.skip_trivia();
            let value = self.value()?;
            map.insert(key, value);
            self.skip_trivia();
            if !self.eat(',') {
                self.eat('}').then_some(())?;
                return Some(Value::Object(map));
            }
        }
    }

    fn array(&mut self) -> Option<Value> {
        self.eat('[').then_some(())?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            if self.eat(']') {
                return Some(Value::Array(items));
            }
            items.push(self.value()?);
            self.skip_trivia();
            if !self.eat(',') {
                self.eat(']').then_some(())?;
                return Some(Value::Array(items));
            }
        }
    }

    fn key(&mut self) -> Option<String> {
        match self.peek()? {
            '"' | '\'' => self.quoted_string(),
            c if is_ident_start(c) => Some(self.ident()),
            _ => None,
        }
    }

    fn quoted_string(&mut self) -> Option<String> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            match self.bump()? {
                c if c == quote => return Some(out),
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    'u' => {
                        let mut code = 0u32;
                        for _ in 0..4 {
                            code = code * 16 + self.bump()?.to_digit(16)?;
                        }
                        out.push(char::from_u32(code)?);
                    }
                    other => out.push(other),
                },
                c => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Option<Value> {
        let start = self.pos;
        if self.peek() == Some('-') || self.peek() == Some('+') {
            self.pos += 1;
        }
        while matches!(
            self.peek(),
            Some(c) if c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
        ) {
            self.pos += 1;
        }
        let token: String = self.chars[start..self.pos].iter().collect();
        if !token.contains(['.', 'e', 'E']) {
            if let Ok(n) = token.parse::<i64>() {
                return Some(Value::Number(n.into()));
            }
        }
        token
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
    }

    /// `true`/`false`/`null` keywords, or a bare identifier kept as a
    /// string (covers enum members like `IconCategory.ARROWS`).
    fn bare_literal(&mut self) -> Value {
        let ident = self.ident();
        match ident.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            "null" | "undefined" => Value::Null,
            _ => Value::String(ident),
        }
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_ident_continue(c)) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '.')
}
