//! Token definitions for move text.
//!
//! The tokenizer strips `{...}` comments and whitespace, recognizes parens
//! as standalone tokens even when glued to a move, separates a leading
//! integer-plus-dots ply marker from whatever follows it, and recognizes
//! the four game-result markers. Every other word is a move token; lexing
//! never fails (unlexable bytes are skipped).

use logos::{Lexer, Logos};

/// A game result marker. Accepted at the end of move text and otherwise
/// uninterpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
    Draw,
    Unknown,
}

impl GameOutcome {
    /// The notation form of this outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameOutcome::WhiteWin => "1-0",
            GameOutcome::BlackWin => "0-1",
            GameOutcome::Draw => "1/2-1/2",
            GameOutcome::Unknown => "*",
        }
    }
}

/// All possible tokens in move text.
#[derive(Logos, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"\{[^}]*\}")]
pub enum Token {
    #[token("(")]
    Open,

    #[token(")")]
    Close,

    #[token("1-0", |_| GameOutcome::WhiteWin)]
    #[token("0-1", |_| GameOutcome::BlackWin)]
    #[token("1/2-1/2", |_| GameOutcome::Draw)]
    #[token("*", |_| GameOutcome::Unknown, priority = 10)]
    Outcome(GameOutcome),

    /// `N.` / `N...` / bare `N` — carries the resolved 1-based ply.
    #[regex(r"[0-9]+\.{0,3}", ply_from_marker)]
    Ply(u32),

    /// Anything else that isn't whitespace, a paren, or digit-led.
    /// The parser inserts these optimistically; only hydration validates.
    #[regex(r"[^ \t\r\n\f(){}0-9][^ \t\r\n\f(){}]*", |lex| lex.slice().to_owned(), priority = 1)]
    Move(String),
}

/// Convert a `N.`-style marker into the ply it introduces: `N.` (or a bare
/// integer) is White's move of turn `N` (ply `2N-1`), `N...` is Black's
/// (ply `2N`).
fn ply_from_marker(lex: &mut Lexer<Token>) -> u32 {
    let slice = lex.slice();
    let digits_end = slice.find('.').unwrap_or(slice.len());
    let number: u32 = slice[..digits_end].parse().unwrap_or(u32::MAX / 2);
    let dots = slice.len() - digits_end;
    if dots >= 3 {
        number.saturating_mul(2)
    } else {
        number.saturating_mul(2).saturating_sub(1).max(1)
    }
}

/// Tokenize move text. Never fails; bytes no rule matches are dropped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Token::lexer(input).filter_map(Result::ok).collect()
}
