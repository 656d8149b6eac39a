//! Token and span types for highlighting
//!
//! This module defines the raw lexical shapes produced by the tokenizer
//! and the refined semantic categories assigned by the classifier.

/// Syntactic shape of a token, produced purely by pattern matching
/// before any context is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// Double-quoted string or single-quoted character literal
    String,
    /// Hex, integer or float literal
    Number,
    /// Letter/underscore followed by word characters
    Identifier,
    /// Single- or multi-character operator
    Operator,
    /// Brackets, separators, `;`, `,`, `.`, `#`
    Punctuation,
    /// Run of whitespace
    Whitespace,
}

/// A minimal lexical unit from one line of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The exact text of the token
    pub text: String,
    /// The raw shape matched by the lexer
    pub kind: RawKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: RawKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Semantic category used to select a display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Language keywords (if, class, return, ...)
    Keyword,
    /// Built-in and standard library type names
    Type,
    /// String and character literals
    String,
    /// Numeric literals
    Number,
    /// A whole `#...` directive line
    Preprocessor,
    /// `//` to end of line
    LineComment,
    /// A `/* ... */` region, possibly spanning lines
    BlockComment,
    /// Identifier immediately followed by `(`
    FunctionCall,
    /// Identifier immediately preceded by `.` or `->`
    MemberAccess,
    /// Identifier immediately preceded by `::`
    NamespaceAccess,
    /// `*`, `&`, `->` or `::`
    PointerOrRef,
    /// General operators
    Operator,
    /// Brackets and separators
    Punctuation,
    /// Plain variable or name
    Identifier,
    /// Blank advance, no visible glyph
    Whitespace,
}

impl Category {
    /// All categories, for exhaustive palette checks
    pub const ALL: [Category; 15] = [
        Category::Keyword,
        Category::Type,
        Category::String,
        Category::Number,
        Category::Preprocessor,
        Category::LineComment,
        Category::BlockComment,
        Category::FunctionCall,
        Category::MemberAccess,
        Category::NamespaceAccess,
        Category::PointerOrRef,
        Category::Operator,
        Category::Punctuation,
        Category::Identifier,
        Category::Whitespace,
    ];

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::Type => "Type",
            Category::String => "String",
            Category::Number => "Number",
            Category::Preprocessor => "Preprocessor",
            Category::LineComment => "LineComment",
            Category::BlockComment => "BlockComment",
            Category::FunctionCall => "FunctionCall",
            Category::MemberAccess => "MemberAccess",
            Category::NamespaceAccess => "NamespaceAccess",
            Category::PointerOrRef => "PointerOrRef",
            Category::Operator => "Operator",
            Category::Punctuation => "Punctuation",
            Category::Identifier => "Identifier",
            Category::Whitespace => "Whitespace",
        }
    }
}

/// A contiguous run of original text tagged with one category
///
/// For a given input line, concatenating the `text` of all spans in
/// order reconstructs the line, except for characters no lexical rule
/// matched (those are dropped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub category: Category,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}
