//! propc-lex — the scanner (lexer) for propositional-logic source text.
//!
//! # Alphabet
//!
//! | Glyph | UTF-8 bytes  | Token kind             |
//! |-------|--------------|------------------------|
//! | `;`   | `3B`         | Semicolon              |
//! | `(`   | `28`         | OpenParen              |
//! | `)`   | `29`         | CloseParen             |
//! | `∧`   | `E2 88 A7`   | Conjunction            |
//! | `∨`   | `E2 88 A8`   | Disjunction            |
//! | `⊻`   | `E2 8A BB`   | ExclusiveDisjunction   |
//! | `→`   | `E2 86 92`   | Implication            |
//! | `↔`   | `E2 86 94`   | Biconditional          |
//! | `¬`   | `C2 AC`      | Negation               |
//! | `true`| ASCII        | LiteralTrue            |
//! | `false`| ASCII       | LiteralFalse           |
//! | `[A-Za-z_][A-Za-z0-9_]*` | ASCII | Variable    |
//! | end of input | `00`  | Eof                    |
//!
//! `true`/`false` are keywords only when not immediately followed by an
//! identifier-continuation byte; `truest` and `falsey` scan as variables.
//!
//! # Column bookkeeping
//!
//! The cursor bumps `col` only for bytes whose high bit is clear. A
//! multi-byte glyph's lead byte and continuation bytes all have the high
//! bit set, so scanning one never moves the column: `" ∧"` (space then the
//! glyph) yields `begin_col == end_col == 2` for the `∧` token, because the
//! one ASCII space before it already advanced the column to 2 and nothing
//! inside the glyph advances it further.
//!
//! # End-of-token position
//!
//! A token's `end` position is *not* one byte past its last byte for every
//! kind. Single-byte tokens (`;`, `(`, `)`) record `end == begin`, because
//! their position is snapshotted before the one byte is consumed.
//! Multi-byte tokens (keywords, variables, glyphs) record `end` pointing at
//! their last byte, snapshotted just before that last byte is consumed.
//! `Eof` always has `end == begin`. See `edge_cases.rs` for the exact
//! worked examples this reproduces.

mod cursor;
mod token;

pub use token::{Token, TokenKind};

use cursor::Cursor;
use propc_util::{Position, Span};

fn is_ascii_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C | 0x0B)
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Tokenizes a borrowed input string. The scanner owns no heap allocations
/// and borrows its input for its entire lifetime; `read_token` never
/// allocates.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`
    /// (`index = 0, line = 1, col = 1`).
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    fn pos(&self) -> Position {
        Position::new(self.cursor.index(), self.cursor.line(), self.cursor.col())
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && is_ascii_whitespace(self.cursor.current()) {
            self.cursor.advance();
        }
    }

    /// Reads and consumes the next token.
    ///
    /// # Example
    ///
    /// ```
    /// use propc_lex::{Scanner, TokenKind};
    ///
    /// let mut scanner = Scanner::new("x \u{2227} y");
    /// assert_eq!(scanner.read_token().kind, TokenKind::Variable);
    /// assert_eq!(scanner.read_token().kind, TokenKind::Conjunction);
    /// ```
    pub fn read_token(&mut self) -> Token {
        self.skip_whitespace();
        let begin = self.pos();

        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Eof, Span::new(begin, begin));
        }

        match self.cursor.current() {
            b';' => self.single(TokenKind::Semicolon, begin),
            b'(' => self.single(TokenKind::OpenParen, begin),
            b')' => self.single(TokenKind::CloseParen, begin),
            b't' => self.scan_keyword_or_variable(begin, b"rue", TokenKind::LiteralTrue),
            b'f' => self.scan_keyword_or_variable(begin, b"alse", TokenKind::LiteralFalse),
            0xE2 => self.scan_math_glyph(begin),
            0xC2 => self.scan_negation(begin),
            b if is_ident_start(b) => self.scan_variable(begin),
            _ => Token::new(TokenKind::BadInput, Span::new(begin, begin)),
        }
    }

    /// Reads the next token without consuming it: the scanner's state
    /// after `peek_token` is bit-identical to its state before, and a
    /// following `read_token` reproduces exactly what was peeked.
    pub fn peek_token(&mut self) -> Token {
        let mark = self.cursor.mark();
        let token = self.read_token();
        self.cursor.reset(mark);
        token
    }

    fn single(&mut self, kind: TokenKind, begin: Position) -> Token {
        let end = begin;
        self.cursor.advance();
        Token::new(kind, Span::new(begin, end))
    }

    fn bad_input(&mut self, begin: Position) -> Token {
        self.cursor
            .reset((begin.index, begin.line, begin.col));
        Token::new(TokenKind::BadInput, Span::new(begin, begin))
    }

    fn scan_keyword_or_variable(
        &mut self,
        begin: Position,
        rest: &'static [u8],
        kind: TokenKind,
    ) -> Token {
        for &expected in rest {
            if self.cursor.peek(1) != expected {
                return self.scan_variable(begin);
            }
            self.cursor.advance();
        }

        if is_ident_continue(self.cursor.peek(1)) {
            return self.scan_variable(begin);
        }

        let end = self.pos();
        self.cursor.advance();
        Token::new(kind, Span::new(begin, end))
    }

    fn scan_variable(&mut self, begin: Position) -> Token {
        while is_ident_continue(self.cursor.peek(1)) {
            self.cursor.advance();
        }
        let end = self.pos();
        self.cursor.advance();
        Token::new(TokenKind::Variable, Span::new(begin, end))
    }

    /// The three-byte math glyphs (`∧ ∨ ⊻ → ↔`) all lead with `0xE2`;
    /// the second byte narrows the family, the third selects the member.
    fn scan_math_glyph(&mut self, begin: Position) -> Token {
        match self.cursor.peek(1) {
            0x88 => {
                self.cursor.advance();
                match self.cursor.peek(1) {
                    0xA7 => self.finish_glyph(begin, TokenKind::Conjunction),
                    0xA8 => self.finish_glyph(begin, TokenKind::Disjunction),
                    _ => self.bad_input(begin),
                }
            }
            0x8A => {
                self.cursor.advance();
                match self.cursor.peek(1) {
                    0xBB => self.finish_glyph(begin, TokenKind::ExclusiveDisjunction),
                    _ => self.bad_input(begin),
                }
            }
            0x86 => {
                self.cursor.advance();
                match self.cursor.peek(1) {
                    0x92 => self.finish_glyph(begin, TokenKind::Implication),
                    0x94 => self.finish_glyph(begin, TokenKind::Biconditional),
                    _ => self.bad_input(begin),
                }
            }
            _ => self.bad_input(begin),
        }
    }

    fn scan_negation(&mut self, begin: Position) -> Token {
        if self.cursor.peek(1) == 0xAC {
            self.finish_glyph(begin, TokenKind::Negation)
        } else {
            self.bad_input(begin)
        }
    }

    /// Finishes a multi-byte glyph whose lead byte has already been
    /// consumed and whose cursor now sits on the second byte: consumes the
    /// second byte, snapshots `end` on the third, then consumes the third.
    fn finish_glyph(&mut self, begin: Position, kind: TokenKind) -> Token {
        self.cursor.advance();
        let end = self.pos();
        self.cursor.advance();
        Token::new(kind, Span::new(begin, end))
    }
}
