//! Tokenizer and token cursor for the English rule grammar.
//!
//! Words are split on whitespace and commas are kept as tokens of their own,
//! so `10:00, 14:00` and `10:00 , 14:00` tokenize identically.

/// A word of input, lower-cased for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Original spelling, used for error fragments and zone names.
    pub raw: &'a str,
    /// Lower-cased form, used for matching.
    pub word: String,
}

impl<'a> Token<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            word: raw.to_lowercase(),
        }
    }
}

/// Splits input into word and comma tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    for piece in input.split_whitespace() {
        let mut rest = piece;
        while let Some(idx) = rest.find(',') {
            if idx > 0 {
                tokens.push(Token::new(&rest[..idx]));
            }
            tokens.push(Token::new(&rest[idx..=idx]));
            rest = &rest[idx + 1..];
        }
        if !rest.is_empty() {
            tokens.push(Token::new(rest));
        }
    }

    tokens
}

/// Splits a schedule into rule clauses on the `,` `and` token pair.
///
/// A bare `and` never separates rules.
#[must_use]
pub fn split_rules<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<&'t [Token<'a>]> {
    let mut clauses = Vec::new();
    let mut start = 0;
    let mut idx = 0;

    while idx < tokens.len() {
        let is_separator = tokens[idx].word == ","
            && tokens.get(idx + 1).is_some_and(|next| next.word == "and");
        if is_separator {
            clauses.push(&tokens[start..idx]);
            idx += 2;
            start = idx;
        } else {
            idx += 1;
        }
    }
    clauses.push(&tokens[start..]);

    clauses
}

/// Rebuilds readable text from tokens, without a space before commas.
#[must_use]
pub fn fragment(tokens: &[Token<'_>]) -> String {
    let mut text = String::new();
    for token in tokens {
        if !text.is_empty() && token.word != "," {
            text.push(' ');
        }
        text.push_str(token.raw);
    }
    text
}

/// Position reached when a matcher gave up, and what it wanted there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub pos: usize,
    pub expected: &'static str,
}

pub type MatchResult<T> = Result<T, Mismatch>;

/// Forward-only view over a clause's tokens.
#[derive(Debug, Clone)]
pub struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    #[must_use]
    pub const fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    pub const fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&'t str> {
        self.peek_nth(0)
    }

    #[must_use]
    pub fn peek_nth(&self, offset: usize) -> Option<&'t str> {
        self.tokens
            .get(self.pos + offset)
            .map(|token| token.word.as_str())
    }

    pub const fn advance(&mut self) {
        self.pos += 1;
    }

    #[must_use]
    pub const fn mismatch(&self, expected: &'static str) -> Mismatch {
        Mismatch {
            pos: self.pos,
            expected,
        }
    }

    /// Consumes `word` if it is next.
    pub fn eat(&mut self, word: &str) -> bool {
        if self.peek() == Some(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// ## Errors
    /// Returns a mismatch if the next token is not `word`.
    pub fn expect(&mut self, word: &'static str) -> MatchResult<()> {
        if self.eat(word) {
            Ok(())
        } else {
            Err(self.mismatch(word))
        }
    }

    /// Consumes the next token if `convert` accepts it.
    ///
    /// ## Errors
    /// Returns a mismatch naming `expected` otherwise.
    pub fn take<T>(
        &mut self,
        convert: impl Fn(&str) -> Option<T>,
        expected: &'static str,
    ) -> MatchResult<T> {
        let value = self
            .peek()
            .and_then(convert)
            .ok_or_else(|| self.mismatch(expected))?;
        self.advance();
        Ok(value)
    }

    /// One or more items separated by commas, `and`, or plain spaces.
    ///
    /// Separators after the last item are left unconsumed.
    ///
    /// ## Errors
    /// Returns a mismatch if the first item is missing.
    pub fn take_list<T>(
        &mut self,
        convert: impl Fn(&str) -> Option<T>,
        expected: &'static str,
    ) -> MatchResult<Vec<T>> {
        let mut items = vec![self.take(&convert, expected)?];

        loop {
            let before_separators = self.pos;
            while matches!(self.peek(), Some("," | "and")) {
                self.advance();
            }
            if let Some(item) = self.peek().and_then(&convert) {
                self.advance();
                items.push(item);
            } else {
                self.reset(before_separators);
                break;
            }
        }

        Ok(items)
    }
}
