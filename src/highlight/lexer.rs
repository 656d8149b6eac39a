//! Line tokenizer
//!
//! Splits one line of C-family source text into an ordered, gap-free
//! token stream. Matching uses a fixed list of anchored regex rules
//! tried in order at each position; the first rule that matches wins,
//! so rule order (not match length) determines precedence.

use regex::Regex;

use super::tokens::{RawKind, Token};

/// One lexical rule: an anchored pattern and the shape it produces
struct LexRule {
    pattern: Regex,
    kind: RawKind,
}

impl LexRule {
    /// Compile a rule, anchoring the pattern at the match position
    fn new(pattern: &str, kind: RawKind) -> Option<Self> {
        Regex::new(&format!("^(?:{})", pattern))
            .ok()
            .map(|pattern| Self { pattern, kind })
    }
}

/// Rule table in precedence order.
///
/// The hex rule sits above the decimal rule so `0x1F` is not split,
/// and multi-character operators sit above single-character ones so
/// `->` is not read as `-` then `>`.
const RULES: &[(&str, RawKind)] = &[
    // String literal (with escapes) or character literal
    (
        r#""[^"\\]*(?:\\.[^"\\]*)*"|'[^'\\]*(?:\\.[^'\\]*)*'"#,
        RawKind::String,
    ),
    // Hex literal; lowercase x only, matching the vocabulary this
    // tokenizer was built against
    (r"0x[0-9a-fA-F]+", RawKind::Number),
    // Decimal/float literal with optional suffix letters
    (r"[0-9]+\.?[0-9]*[fFlLuU]*", RawKind::Number),
    // Identifier
    (r"[A-Za-z_]\w*", RawKind::Identifier),
    // Multi-character operators
    (
        r"::|->|\+\+|--|<<|>>|<=|>=|==|!=|&&|\|\|",
        RawKind::Operator,
    ),
    // Single-character operators
    (r"[+\-*/%=<>!&|^~?:]", RawKind::Operator),
    // Brackets and separators
    (r"[()\[\]{};,.#]", RawKind::Punctuation),
    // Whitespace run
    (r"\s+", RawKind::Whitespace),
];

/// Line tokenizer with the fixed C-family rule set
pub struct Tokenizer {
    rules: Vec<LexRule>,
}

impl Tokenizer {
    /// Build the tokenizer, compiling the rule table
    pub fn new() -> Self {
        let mut rules = Vec::new();
        for &(pattern, kind) in RULES {
            if let Some(rule) = LexRule::new(pattern, kind) {
                rules.push(rule);
            }
        }
        Self { rules }
    }

    /// Tokenize one line of text
    ///
    /// The concatenated text of the returned tokens reconstructs the
    /// line exactly, except for characters no rule matches: those are
    /// silently dropped rather than reported as errors.
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < line.len() {
            let mut matched = false;
            for rule in &self.rules {
                if let Some(m) = rule.pattern.find(&line[pos..]) {
                    tokens.push(Token::new(&line[pos..pos + m.end()], rule.kind));
                    pos += m.end();
                    matched = true;
                    break;
                }
            }

            if !matched {
                // Unmatched character: drop it and move to the next
                // char boundary
                pos += 1;
                while pos < line.len() && !line.is_char_boundary(pos) {
                    pos += 1;
                }
            }
        }

        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_completeness() {
        let tokenizer = Tokenizer::new();
        let lines = [
            "int main() {",
            "    std::vector<int> v = {1, 2, 3};",
            "    printf(\"%d\\n\", x->count);",
            "    return a <= b && c != d;",
            "",
        ];
        for line in lines {
            let tokens = tokenizer.tokenize(line);
            assert_eq!(concat(&tokens), line, "line: {:?}", line);
        }
    }

    #[test]
    fn test_string_with_escapes() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize(r#"s = "a\"b";"#);
        assert!(tokens
            .iter()
            .any(|t| t.kind == RawKind::String && t.text == r#""a\"b""#));
    }

    #[test]
    fn test_char_literal() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize(r"c = '\n';");
        assert!(tokens
            .iter()
            .any(|t| t.kind == RawKind::String && t.text == r"'\n'"));
    }

    #[test]
    fn test_hex_before_decimal() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("0x1F");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "0x1F");
        assert_eq!(tokens[0].kind, RawKind::Number);
    }

    #[test]
    fn test_number_suffixes() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("3.14f 10UL");
        assert_eq!(tokens[0].text, "3.14f");
        assert_eq!(tokens[0].kind, RawKind::Number);
        assert_eq!(tokens[2].text, "10UL");
        assert_eq!(tokens[2].kind, RawKind::Number);
    }

    #[test]
    fn test_multichar_operators() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("a->b::c<<2");
        let ops: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == RawKind::Operator)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(ops, vec!["->", "::", "<<"]);
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("a   b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "   ");
        assert_eq!(tokens[1].kind, RawKind::Whitespace);
    }

    #[test]
    fn test_unmatched_character_dropped() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("a @ b");
        // '@' has no rule; it vanishes from the stream
        assert_eq!(concat(&tokens), "a  b");
    }

    #[test]
    fn test_punctuation_set() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("#include");
        assert_eq!(tokens[0].text, "#");
        assert_eq!(tokens[0].kind, RawKind::Punctuation);
        assert_eq!(tokens[1].kind, RawKind::Identifier);
    }
}
