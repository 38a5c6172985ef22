use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `let`
    #[token("let")]
    Let,
    /// `in`
    #[token("in")]
    In,
    /// `global`
    #[token("global")]
    Global,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `lambda`
    #[token("lambda")]
    Lambda,
    /// `apply`
    #[token("apply")]
    Apply,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `not`
    #[token("not")]
    Not,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `list`
    #[token("list")]
    List,
    /// `tuple`
    #[token("tuple")]
    Tuple,
    /// `hd`
    #[token("hd")]
    Head,
    /// `tl`
    #[token("tl")]
    Tail,
    /// Identifier tokens; variable or function names such as `x` or `inc`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `:=`
    #[token(":=")]
    Assign,
    /// `=>`
    #[token("=>")]
    Arrow,
    /// `++`
    #[token("++")]
    Concat,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equal,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// The `#` comment marker. Comments are bracketed by a marker on each
    /// side; the text between markers is lexed normally and discarded by the
    /// parser, so the marker itself must surface as a token.
    #[token("#")]
    Comment,
    /// Any single character the language does not recognize. Kept as a token
    /// (rather than a lexer failure) so that stray characters inside comments
    /// are skippable and stray characters outside comments become parse
    /// diagnostics.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Unknown(String),

    /// Newlines advance the line counter and are otherwise ignored.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Parses a real literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid real.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice is not a valid integer.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A stream of tokens lexed eagerly from a source string.
///
/// The stream pairs every token with the 1-based line it was found on and
/// hands tokens to the parser one at a time. Input the lexer cannot match is
/// surfaced as [`Token::Unknown`] instead of aborting, so the parser decides
/// how to treat it (skippable inside comments, a diagnostic outside).
///
/// # Example
/// ```
/// use letlang::interpreter::lexer::{Token, TokenStream};
///
/// let mut stream = TokenStream::new("let x := 3");
///
/// assert_eq!(stream.next_token(), Some((Token::Let, 1)));
/// assert_eq!(stream.next_token(), Some((Token::Identifier("x".to_string()), 1)));
/// assert_eq!(stream.next_token(), Some((Token::Assign, 1)));
/// assert_eq!(stream.next_token(), Some((Token::Integer(3), 1)));
/// assert_eq!(stream.next_token(), None);
/// ```
pub struct TokenStream {
    tokens:   Vec<(Token, usize)>,
    position: usize,
}

impl TokenStream {
    /// Lexes the entire source up front and returns a stream over the result.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
        let mut tokens = Vec::new();

        while let Some(token) = lexer.next() {
            let line = lexer.extras.line;
            match token {
                Ok(token) => tokens.push((token, line)),
                Err(()) => tokens.push((Token::Unknown(lexer.slice().to_string()), line)),
            }
        }

        Self { tokens,
               position: 0 }
    }

    /// Returns the next token and its line, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<(Token, usize)> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// The line of the most recently returned token, `1` before any token
    /// has been consumed. Used for diagnostics at end of input.
    #[must_use]
    pub fn current_line(&self) -> usize {
        if self.position == 0 {
            1
        } else {
            self.tokens[self.position - 1].1
        }
    }
}
