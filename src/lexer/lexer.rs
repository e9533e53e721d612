use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{classify, Token, TokenKind};

/// Builds a token from the text a pattern matched at the cursor.
pub type RegexHandler = fn(&str) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\n\r]+").unwrap();

    // Every pattern is anchored at the cursor. Two-character operators come
    // before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
    ];
}

/// On-demand scanner over a single source string.
///
/// Each call to [`Lexer::next_token`] consumes exactly one token's worth of
/// input. Once the input is exhausted every further call yields `EOF`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer { source, pos: 0 }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// The character under the cursor, if any.
    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let skipped = WHITESPACE.find(self.remainder()).map_or(0, |m| m.end());
        self.advance_n(skipped);
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = self.scan();
        trace!(kind = %token.kind, literal = %token.literal, "lexed token");
        token
    }

    fn scan(&mut self) -> Token {
        let Some(current) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, String::new());
        };

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(self.remainder()) {
                let (token, len) = ((pattern.handler)(matched.as_str()), matched.end());
                self.advance_n(len);
                return token;
            }
        }

        // Unrecognised input is reported as a token; the caller decides what to do.
        self.advance_n(current.len_utf8());
        MK_TOKEN!(TokenKind::Illegal, current.to_string())
    }
}

fn number_handler(matched: &str) -> Token {
    MK_TOKEN!(TokenKind::Int, String::from(matched))
}

fn symbol_handler(matched: &str) -> Token {
    MK_TOKEN!(classify(matched), String::from(matched))
}

/// Drains a fresh lexer over `source`, up to and including the first `EOF`.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
