//! Built-in best-effort repairer.
//!
//! A forgiving single-pass scanner over `Vec<char>` that re-emits compact JSON.
//! It handles single-quoted strings, unquoted keys and values, missing or
//! redundant commas and colons, comments, Python-style literals, loose
//! numbers, and unclosed strings or containers. Its output still goes through
//! the strict parser before anyone trusts it.

use serde_json::Value;

use super::{RepairCapability, RepairError};

/// Containers nested deeper than this are refused
const MAX_DEPTH: usize = 128;

/// Default repair capability
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientRepairer;

impl RepairCapability for LenientRepairer {
    fn attempt_repair(&self, text: &str) -> Result<String, RepairError> {
        let mut scanner = Scanner::new(strip_code_fence(text));
        scanner.parse_root()?;
        Ok(scanner.out)
    }
}

/// Take the body of a Markdown code fence (```json ... ```) if the text is one
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.trim().strip_prefix("```") else {
        return text;
    };
    // Skip the language tag on the opening line
    let Some(newline) = rest.find('\n') else {
        return text;
    };
    let body = &rest[newline + 1..];
    match body.rfind("```") {
        Some(end) => &body[..end],
        None => body,
    }
}

struct Scanner {
    input: Vec<char>,
    pos: usize,
    depth: usize,
    out: String,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Scanner {
            input: text.chars().collect(),
            pos: 0,
            depth: 0,
            out: String::with_capacity(text.len() + 8),
        }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.input.get(self.pos + ahead).copied()
    }

    fn parse_root(&mut self) -> Result<(), RepairError> {
        self.skip_trivia();
        if self.current().is_none() {
            return Err(RepairError::new("no JSON value found"));
        }
        // Anything after the root value is dropped
        self.parse_value()
    }

    /// Whitespace, BOM, `//`, `#` and `/* */` comments
    fn skip_trivia(&mut self) {
        loop {
            match (self.current(), self.peek(1)) {
                (Some(c), _) if c.is_whitespace() || c == '\u{feff}' => self.pos += 1,
                (Some('/'), Some('/')) | (Some('#'), _) => {
                    while let Some(c) = self.current() {
                        if c == '\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                (Some('/'), Some('*')) => {
                    self.pos += 2;
                    while self.current().is_some() {
                        if self.current() == Some('*') && self.peek(1) == Some('/') {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    fn enter(&mut self) -> Result<(), RepairError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(RepairError::new(format!(
                "nesting deeper than {} levels",
                MAX_DEPTH
            )));
        }
        Ok(())
    }

    fn parse_value(&mut self) -> Result<(), RepairError> {
        self.skip_trivia();
        match self.current() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(quote @ ('"' | '\'')) => {
                self.parse_string(quote);
                Ok(())
            }
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                self.parse_number();
                Ok(())
            }
            // Missing value; the delimiter is left for the enclosing container
            Some(',' | '}' | ']' | ':') | None => {
                self.out.push_str("null");
                Ok(())
            }
            Some(_) => {
                self.parse_bare_word();
                Ok(())
            }
        }
    }

    fn parse_object(&mut self) -> Result<(), RepairError> {
        self.enter()?;
        self.pos += 1;
        self.out.push('{');

        let mut need_comma = false;
        loop {
            self.skip_trivia();
            match self.current() {
                None => break,
                Some('}') => {
                    self.pos += 1;
                    break;
                }
                // Mismatched closer belongs to an outer array
                Some(']') => break,
                Some(',' | ':') => self.pos += 1,
                Some(_) => {
                    if need_comma {
                        self.out.push(',');
                    }
                    self.parse_key();
                    self.skip_trivia();
                    if self.current() == Some(':') {
                        self.pos += 1;
                    }
                    self.out.push(':');
                    self.parse_value()?;
                    need_comma = true;
                }
            }
        }

        self.out.push('}');
        self.depth -= 1;
        Ok(())
    }

    fn parse_array(&mut self) -> Result<(), RepairError> {
        self.enter()?;
        self.pos += 1;
        self.out.push('[');

        let mut need_comma = false;
        loop {
            self.skip_trivia();
            match self.current() {
                None => break,
                Some(']') => {
                    self.pos += 1;
                    break;
                }
                Some('}') => break,
                Some(',' | ':') => self.pos += 1,
                Some(_) => {
                    if need_comma {
                        self.out.push(',');
                    }
                    self.parse_value()?;
                    need_comma = true;
                }
            }
        }

        self.out.push(']');
        self.depth -= 1;
        Ok(())
    }

    fn parse_key(&mut self) {
        if let Some(quote @ ('"' | '\'')) = self.current() {
            self.parse_string(quote);
            return;
        }

        let start = self.pos;
        self.pos += 1;
        while let Some(c) = self.current() {
            if c.is_whitespace() || matches!(c, ':' | ',' | '}' | ']') {
                break;
            }
            self.pos += 1;
        }
        let key: String = self.input[start..self.pos].iter().collect();
        self.push_string(&key);
    }

    /// Quoted string; an unescaped line break or end of input closes it
    fn parse_string(&mut self, quote: char) {
        self.pos += 1;
        let mut value = String::new();

        while let Some(c) = self.current() {
            if c == '\n' {
                break;
            }
            self.pos += 1;
            if c == quote {
                break;
            }
            if c != '\\' {
                value.push(c);
                continue;
            }

            match self.current() {
                Some(escaped @ ('"' | '\'' | '\\' | '/')) => {
                    self.pos += 1;
                    value.push(escaped);
                }
                Some(letter @ ('b' | 'f' | 'n' | 'r' | 't')) => {
                    self.pos += 1;
                    value.push(match letter {
                        'b' => '\u{8}',
                        'f' => '\u{c}',
                        'n' => '\n',
                        'r' => '\r',
                        _ => '\t',
                    });
                }
                Some('u') => match self.hex_escape() {
                    Some(decoded) => value.push(decoded),
                    None => value.push('\\'),
                },
                // Unknown escape or trailing backslash: keep it literally
                _ => value.push('\\'),
            }
        }

        self.push_string(&value);
    }

    /// Decode `uXXXX` (and a following low surrogate) after a backslash
    fn hex_escape(&mut self) -> Option<char> {
        let high = self.hex_digits(self.pos + 1)?;
        self.pos += 5;

        if !(0xD800..0xDC00).contains(&high) {
            return Some(char::from_u32(high).unwrap_or('\u{fffd}'));
        }
        if self.current() == Some('\\') && self.peek(1) == Some('u') {
            if let Some(low) = self.hex_digits(self.pos + 2) {
                if (0xDC00..0xE000).contains(&low) {
                    self.pos += 6;
                    let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    return Some(char::from_u32(combined).unwrap_or('\u{fffd}'));
                }
            }
        }
        Some('\u{fffd}')
    }

    fn hex_digits(&self, at: usize) -> Option<u32> {
        let digits = self.input.get(at..at + 4)?;
        digits
            .iter()
            .try_fold(0u32, |acc, c| c.to_digit(16).map(|d| acc * 16 + d))
    }

    fn parse_number(&mut self) {
        let start = self.pos;
        while let Some(c) = self.current() {
            if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E') {
                self.pos += 1;
            } else {
                break;
            }
        }
        let raw: String = self.input[start..self.pos].iter().collect();
        match normalize_number(&raw) {
            Some(number) => self.out.push_str(&number),
            None => self.push_string(&raw),
        }
    }

    /// Unquoted token: a literal or a bare string running to the next delimiter
    fn parse_bare_word(&mut self) {
        let start = self.pos;
        self.pos += 1;
        while let Some(c) = self.current() {
            let comment = c == '/' && matches!(self.peek(1), Some('/' | '*'));
            if comment || matches!(c, ',' | '}' | ']' | ':' | '\n' | '"' | '{' | '[') {
                break;
            }
            self.pos += 1;
        }

        let word: String = self.input[start..self.pos].iter().collect();
        match word.trim_end() {
            "true" | "True" => self.out.push_str("true"),
            "false" | "False" => self.out.push_str("false"),
            "null" | "None" | "undefined" => self.out.push_str("null"),
            other => self.push_string(other),
        }
    }

    fn push_string(&mut self, text: &str) {
        self.out.push_str(&Value::String(text.to_string()).to_string());
    }
}

/// Coerce loose numerals (`+1`, `.5`, `1.`, `2e`) into JSON numbers
fn normalize_number(raw: &str) -> Option<String> {
    let mut text = raw.strip_prefix('+').unwrap_or(raw).to_string();
    if let Some(rest) = text.strip_prefix("-.") {
        text = format!("-0.{}", rest);
    } else if text.starts_with('.') {
        text.insert(0, '0');
    }
    while text.ends_with(['.', 'e', 'E', '+', '-']) {
        text.pop();
    }

    serde_json::from_str::<serde_json::Number>(&text)
        .ok()
        .map(|_| text)
}
