//! Token classifier
//!
//! Assigns a semantic category to each token of a line using the fixed
//! keyword/type vocabularies and strict neighbor adjacency. "Previous"
//! and "next" always mean the literal neighboring element of the token
//! stream, whitespace included, so spacing is semantically significant
//! for the call/member/namespace rules.

use std::collections::HashSet;

use super::tokens::{Category, RawKind, StyledSpan, Token};

/// C++ keywords
const KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "do", "switch", "case", "default", "break", "continue",
    "return", "goto", "const", "static", "extern", "auto", "register", "volatile", "mutable",
    "inline", "virtual", "explicit", "friend", "typedef", "public", "private", "protected",
    "class", "struct", "union", "enum", "namespace", "using", "template", "typename", "try",
    "catch", "throw", "new", "delete", "this", "const_cast", "dynamic_cast",
    "reinterpret_cast", "static_cast", "true", "false", "nullptr",
];

/// Built-in and common standard library type names
const TYPES: &[&str] = &[
    "int", "float", "double", "char", "bool", "void", "long", "short", "unsigned", "signed",
    "wchar_t", "char16_t", "char32_t", "size_t", "ptrdiff_t", "nullptr_t", "int8_t", "int16_t",
    "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t", "string", "vector",
    "map", "set", "list", "deque", "array", "pair", "tuple", "unique_ptr", "shared_ptr",
    "weak_ptr",
];

/// General operators for the classifier.
///
/// `*` and `&` are absent: they are caught by the pointer/reference
/// rule first. `:` is absent from both this set and the punctuation
/// set, so a lone `:` falls through to `Identifier`.
const OPERATORS: &[&str] = &[
    "+", "-", "/", "%", "=", "<", ">", "!", "|", "^", "~", "?", "++", "--", "<<", ">>", "<=",
    ">=", "==", "!=", "&&", "||",
];

/// Pointer/reference tokens, checked before the general operator rule
const POINTER_OR_REF: &[&str] = &["*", "&", "->", "::"];

/// Punctuation for the classifier. Note that `.` is not in this set;
/// a lone `.` classifies as `Identifier`.
const PUNCTUATION: &[&str] = &["(", ")", "[", "]", "{", "}", ";", ",", "#"];

/// Classifier with the fixed C++ vocabularies
pub struct Classifier {
    keywords: HashSet<&'static str>,
    types: HashSet<&'static str>,
    operators: HashSet<&'static str>,
    punctuation: HashSet<&'static str>,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            keywords: KEYWORDS.iter().copied().collect(),
            types: TYPES.iter().copied().collect(),
            operators: OPERATORS.iter().copied().collect(),
            punctuation: PUNCTUATION.iter().copied().collect(),
        }
    }

    /// Classify a full token stream into styled spans
    pub fn classify(&self, tokens: &[Token]) -> Vec<StyledSpan> {
        (0..tokens.len())
            .map(|i| StyledSpan::new(tokens[i].text.clone(), self.categorize(tokens, i)))
            .collect()
    }

    /// Category of the token at `index`, with positional lookback and
    /// lookahead into the stream. First applicable rule wins.
    fn categorize(&self, tokens: &[Token], index: usize) -> Category {
        let token = &tokens[index];
        let text = token.text.as_str();
        let prev = index.checked_sub(1).map(|i| tokens[i].text.as_str());
        let next = tokens.get(index + 1).map(|t| t.text.as_str());

        if token.kind == RawKind::String {
            return Category::String;
        }
        if self.keywords.contains(text) {
            return Category::Keyword;
        }
        if self.types.contains(text) {
            return Category::Type;
        }
        if token.kind == RawKind::Identifier {
            // Adjacency is strict: an intervening whitespace token
            // defeats all three of these rules
            if next == Some("(") {
                return Category::FunctionCall;
            }
            if prev == Some(".") || prev == Some("->") {
                return Category::MemberAccess;
            }
            if prev == Some("::") {
                return Category::NamespaceAccess;
            }
        }
        if POINTER_OR_REF.contains(&text) {
            return Category::PointerOrRef;
        }
        if self.operators.contains(text) {
            return Category::Operator;
        }
        if token.kind == RawKind::Number {
            return Category::Number;
        }
        if self.punctuation.contains(text) {
            return Category::Punctuation;
        }
        if token.kind == RawKind::Whitespace {
            return Category::Whitespace;
        }
        Category::Identifier
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
