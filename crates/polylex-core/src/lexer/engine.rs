//! The tokenizer state machine.
//!
//! The engine reads one character at a time. When a character cannot extend
//! the token being built, the pending token is emitted, the state resets to
//! `Start`, and the same character is fed again. Token boundaries are
//! therefore found one character past their end, except at end of input
//! where a final flush emits whatever is still pending.

use std::collections::VecDeque;
use std::str::Chars;

use tracing::{debug, trace};

use super::profile::classify_at_end;
use super::{LanguageProfile, STRUCTURAL_SYMBOLS, Token, TokenKind};

/// What kind of token the engine is currently building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Between tokens
    #[default]
    Start,
    /// Inside a name
    Identifier,
    /// Inside a run of digits and dots
    Number,
    /// Inside a quoted literal
    String,
    /// Inside an operator spelling
    Operator,
    /// Inside a `#` directive
    Preprocessor,
    /// After `#include`, collecting the header name
    Header,
}

/// Mutable state of one tokenization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizerState {
    /// Current mode
    pub mode: Mode,
    /// Characters of the token being built
    pub accumulator: String,
}

impl TokenizerState {
    /// Creates a state in `Start` with an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The outcome of feeding one character to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Token completed by this character, if any
    pub emitted: Option<Token>,
    /// Whether the same character must be fed again
    pub reprocess: bool,
}

impl Step {
    fn consumed() -> Self {
        Self {
            emitted: None,
            reprocess: false,
        }
    }

    fn emit(token: Option<Token>) -> Self {
        Self {
            emitted: token,
            reprocess: false,
        }
    }

    fn emit_and_reprocess(token: Option<Token>) -> Self {
        Self {
            emitted: token,
            reprocess: true,
        }
    }
}

/// A tokenizer bound to one language profile.
#[derive(Clone, Copy)]
pub struct Tokenizer<'p> {
    profile: &'p dyn LanguageProfile,
}

impl<'p> Tokenizer<'p> {
    /// Creates a tokenizer for the given profile.
    pub fn new(profile: &'p dyn LanguageProfile) -> Self {
        Self { profile }
    }

    /// The profile this tokenizer classifies with.
    pub fn profile(&self) -> &'p dyn LanguageProfile {
        self.profile
    }

    /// Tokenizes the whole source text.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let tokens: Vec<Token> = self.tokens(source).collect();
        debug!(
            language = %self.profile.language(),
            chars = source.chars().count(),
            tokens = tokens.len(),
            "tokenized source"
        );
        tokens
    }

    /// Returns a lazy iterator over the tokens of `source`.
    pub fn tokens<'s>(&self, source: &'s str) -> Tokens<'p, 's> {
        Tokens {
            tokenizer: *self,
            chars: source.chars(),
            state: TokenizerState::new(),
            pending: VecDeque::new(),
            flushed: false,
        }
    }

    /// Feeds one character to the state machine.
    ///
    /// At most one token is emitted per call. When `reprocess` is set the
    /// state has been reset to `Start` and the caller must feed `ch` again.
    pub fn step(&self, state: &mut TokenizerState, ch: char) -> Step {
        match state.mode {
            Mode::Start => self.step_start(state, ch),
            Mode::Preprocessor => {
                if ch.is_whitespace() {
                    // Only `#include` ends at whitespace; other directives
                    // keep absorbing text.
                    if state.accumulator == "#include" {
                        let token = self.finish(state, TokenKind::Preprocessor);
                        state.mode = Mode::Header;
                        return Step::emit(token);
                    }
                } else {
                    state.accumulator.push(ch);
                }
                Step::consumed()
            }
            Mode::Header => match ch {
                '<' => {
                    state.accumulator.clear();
                    state.accumulator.push('<');
                    Step::consumed()
                }
                '>' => {
                    state.accumulator.push('>');
                    let token = self.finish(state, TokenKind::Header);
                    state.mode = Mode::Start;
                    Step::emit(token)
                }
                _ => {
                    state.accumulator.push(ch);
                    Step::consumed()
                }
            },
            Mode::Identifier => {
                if self.profile.continues_identifier(ch) {
                    state.accumulator.push(ch);
                    return Step::consumed();
                }
                let kind = self.profile.classify_identifier(&state.accumulator);
                self.exit_and_reprocess(state, kind, ch)
            }
            Mode::Number => {
                if ch.is_ascii_digit() || ch == '.' {
                    state.accumulator.push(ch);
                    return Step::consumed();
                }
                self.exit_and_reprocess(state, TokenKind::Number, ch)
            }
            Mode::String => {
                state.accumulator.push(ch);
                // The first accumulated character is the terminator.
                if state.accumulator.starts_with(ch) {
                    let token = self.finish(state, TokenKind::String);
                    state.mode = Mode::Start;
                    return Step::emit(token);
                }
                Step::consumed()
            }
            Mode::Operator => {
                if self
                    .profile
                    .symbols()
                    .extends_operator(&state.accumulator, ch)
                {
                    state.accumulator.push(ch);
                    return Step::consumed();
                }
                self.exit_and_reprocess(state, TokenKind::Operator, ch)
            }
        }
    }

    fn step_start(&self, state: &mut TokenizerState, ch: char) -> Step {
        match ch {
            '#' if self.profile.has_preprocessor() => {
                state.mode = Mode::Preprocessor;
                state.accumulator.clear();
                state.accumulator.push('#');
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                state.mode = Mode::Identifier;
                state.accumulator.push(ch);
            }
            _ if ch.is_ascii_digit() => {
                state.mode = Mode::Number;
                state.accumulator.push(ch);
            }
            '"' | '\'' => {
                state.mode = Mode::String;
                state.accumulator.push(ch);
            }
            _ if STRUCTURAL_SYMBOLS.contains(&ch) => {
                // Emitted on its own; any pending text stays in the accumulator.
                return Step::emit(Some(Token::new(TokenKind::Symbol, ch)));
            }
            _ if self.profile.symbols().starts_operator(ch) => {
                state.mode = Mode::Operator;
                state.accumulator.push(ch);
            }
            _ if ch.is_whitespace() => {}
            _ => state.accumulator.push(ch),
        }
        Step::consumed()
    }

    fn exit_and_reprocess(&self, state: &mut TokenizerState, kind: TokenKind, ch: char) -> Step {
        let token = self.finish(state, kind);
        state.mode = Mode::Start;
        trace!(?kind, ?ch, "token boundary, reprocessing");
        Step::emit_and_reprocess(token)
    }

    /// Emits whatever is still pending at end of input and resets the state.
    pub fn flush(&self, state: &mut TokenizerState) -> Option<Token> {
        let kind = match state.mode {
            Mode::Identifier => classify_at_end(self.profile, &state.accumulator),
            Mode::Number => TokenKind::Number,
            Mode::String => TokenKind::String,
            Mode::Operator => TokenKind::Operator,
            Mode::Preprocessor => TokenKind::Preprocessor,
            Mode::Header => TokenKind::Header,
            // Stray characters that never joined a token.
            Mode::Start => TokenKind::Symbol,
        };
        let token = self.finish(state, kind);
        state.mode = Mode::Start;
        token
    }

    /// Turns the accumulator into a token and clears it.
    ///
    /// Class names win over the candidate kind; identifiers naming a
    /// standard function are relabelled. An empty accumulator emits nothing.
    fn finish(&self, state: &mut TokenizerState, kind: TokenKind) -> Option<Token> {
        let text = std::mem::take(&mut state.accumulator);
        if text.is_empty() {
            return None;
        }

        let symbols = self.profile.symbols();
        let kind = if symbols.is_class_name(&text) {
            TokenKind::ClassName
        } else if kind == TokenKind::Identifier && symbols.is_standard_function(&text) {
            TokenKind::StandardFunction
        } else {
            kind
        };

        Some(Token::new(kind, text))
    }
}

/// Lazy token stream produced by [`Tokenizer::tokens`].
pub struct Tokens<'p, 's> {
    tokenizer: Tokenizer<'p>,
    chars: Chars<'s>,
    state: TokenizerState,
    pending: VecDeque<Token>,
    flushed: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            match self.chars.next() {
                Some(ch) => loop {
                    let step = self.tokenizer.step(&mut self.state, ch);
                    self.pending.extend(step.emitted);
                    if !step.reprocess {
                        break;
                    }
                },
                None if self.flushed => return None,
                None => {
                    self.flushed = true;
                    self.pending.extend(self.tokenizer.flush(&mut self.state));
                }
            }
        }
    }
}
