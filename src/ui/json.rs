//! Syntax highlighting for JSON bodies.
//!
//! The parsed value tree is walked once and emitted as typed tokens laid out
//! exactly like `serde_json::to_string_pretty`. Keys and string values are
//! told apart by where they occur in the tree, never by re-scanning text.

use serde_json::Value;

use super::escape_html;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Key,
    String,
    Number,
    Boolean,
    Null,
    Punctuation,
    Whitespace,
}

impl TokenKind {
    /// CSS class for highlighted kinds; layout tokens have none.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TokenKind::Key => Some("json-key"),
            TokenKind::String => Some("json-string"),
            TokenKind::Number => Some("json-number"),
            TokenKind::Boolean => Some("json-boolean"),
            TokenKind::Null => Some("json-null"),
            TokenKind::Punctuation | TokenKind::Whitespace => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

pub fn tokenize(value: &Value) -> Vec<Token> {
    let mut tokens = Vec::new();
    push_value(value, 0, &mut tokens);
    tokens
}

/// Pretty-printed, escaped HTML with each scalar wrapped in a classed span.
pub fn highlight(value: &Value) -> String {
    let mut html = String::new();
    for token in tokenize(value) {
        let text = escape_html(&token.text);
        match token.kind.css_class() {
            Some(class) => {
                html.push_str(&format!(r#"<span class="{class}">{text}</span>"#));
            }
            None => html.push_str(&text),
        }
    }
    html
}

fn push(tokens: &mut Vec<Token>, kind: TokenKind, text: impl Into<String>) {
    tokens.push(Token {
        kind,
        text: text.into(),
    });
}

fn push_newline(tokens: &mut Vec<Token>, depth: usize) {
    push(tokens, TokenKind::Whitespace, format!("\n{}", INDENT.repeat(depth)));
}

fn push_value(value: &Value, depth: usize, tokens: &mut Vec<Token>) {
    match value {
        Value::Null => push(tokens, TokenKind::Null, "null"),
        Value::Bool(b) => push(tokens, TokenKind::Boolean, b.to_string()),
        Value::Number(n) => push(tokens, TokenKind::Number, n.to_string()),
        Value::String(_) => push(tokens, TokenKind::String, value.to_string()),
        Value::Array(items) if items.is_empty() => push(tokens, TokenKind::Punctuation, "[]"),
        Value::Array(items) => {
            push(tokens, TokenKind::Punctuation, "[");
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    push(tokens, TokenKind::Punctuation, ",");
                }
                push_newline(tokens, depth + 1);
                push_value(item, depth + 1, tokens);
            }
            push_newline(tokens, depth);
            push(tokens, TokenKind::Punctuation, "]");
        }
        Value::Object(map) if map.is_empty() => push(tokens, TokenKind::Punctuation, "{}"),
        Value::Object(map) => {
            push(tokens, TokenKind::Punctuation, "{");
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    push(tokens, TokenKind::Punctuation, ",");
                }
                push_newline(tokens, depth + 1);
                push(tokens, TokenKind::Key, Value::String(key.clone()).to_string());
                push(tokens, TokenKind::Punctuation, ":");
                push(tokens, TokenKind::Whitespace, " ");
                push_value(item, depth + 1, tokens);
            }
            push_newline(tokens, depth);
            push(tokens, TokenKind::Punctuation, "}");
        }
    }
}
