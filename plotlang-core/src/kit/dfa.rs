//! Generic table-driven deterministic finite automaton
//!
//! The automaton knows nothing about tokens beyond a final-state class tag
//! and a caller-supplied builder that turns (class, buffered text) into
//! whatever token type the caller wants. Transitions are tried in
//! registration order; the first guard that accepts the character wins.
//!
//! The feed contract is two-phase: when no transition accepts a character
//! and a token is mid-match, the automaton emits the pending token (or an
//! error token when the current state is not final) and returns
//! [`FeedOutcome::Boundary`] WITHOUT consuming the character. The caller
//! must feed the same character again so matching restarts from the
//! initial state. This is what gives maximal-munch tokenization without a
//! lookahead buffer. A character rejected with nothing mid-match can
//! never start a token; it is consumed into an error emission that
//! carries the character as its text.

use thiserror::Error;

/// State identifier; the initial state is always 0.
pub type StateId = usize;

/// Single-character transition guard.
pub type TransitionGuard = Box<dyn Fn(char) -> bool>;

/// Token builder callback. The class is `None` on the lexical-error path.
pub type TokenBuilder<C, T> = Box<dyn Fn(Option<C>, &str) -> T>;

struct Transition {
    to: StateId,
    guard: TransitionGuard,
}

/// Outcome of feeding one character.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome<T> {
    /// A transition matched; the character was consumed.
    Consumed,
    /// No transition matched; the pending token (or an error token) was
    /// emitted and the triggering character was NOT consumed. Feed it
    /// again to restart matching from the initial state.
    Boundary(T),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DfaError {
    #[error("transition references unregistered state {id}")]
    UnknownState { id: StateId },
}

/// Table-driven automaton with an accumulation buffer and an ordered
/// emitted-token list. The table is configured once and reused for every
/// scan; `reset` only touches the current state and the buffer.
pub struct Dfa<C, T> {
    transitions: Vec<Vec<Transition>>,
    finals: Vec<Option<C>>,
    current: StateId,
    buffer: String,
    results: Vec<T>,
    builder: TokenBuilder<C, T>,
}

impl<C: Clone, T: Clone> Dfa<C, T> {
    /// Create an automaton whose initial state 0 is registered and
    /// non-final.
    pub fn new(builder: TokenBuilder<C, T>) -> Self {
        Self {
            transitions: vec![Vec::new()],
            finals: vec![None],
            current: 0,
            buffer: String::new(),
            results: Vec::new(),
            builder,
        }
    }

    /// Register a state. A `Some` class marks it final; emitting from it
    /// hands that class to the token builder.
    pub fn register_state(&mut self, id: StateId, class: Option<C>) {
        if id >= self.finals.len() {
            self.finals.resize_with(id + 1, || None);
            self.transitions.resize_with(id + 1, Vec::new);
        }
        self.finals[id] = class;
    }

    /// Register a transition. Guards for one source state are tried in
    /// registration order; there is no other ambiguity resolution.
    pub fn register_transition(
        &mut self,
        from: StateId,
        to: StateId,
        guard: impl Fn(char) -> bool + 'static,
    ) -> Result<(), DfaError> {
        if from >= self.finals.len() {
            return Err(DfaError::UnknownState { id: from });
        }
        if to >= self.finals.len() {
            return Err(DfaError::UnknownState { id: to });
        }
        self.transitions[from].push(Transition {
            to,
            guard: Box::new(guard),
        });
        Ok(())
    }

    /// Feed one character; see the module docs for the boundary contract.
    ///
    /// A character nothing accepts even from the initial state is consumed
    /// into an error emission carrying that character as its text, so the
    /// offending input is never silently dropped.
    pub fn feed(&mut self, c: char) -> FeedOutcome<T> {
        for transition in &self.transitions[self.current] {
            if (transition.guard)(c) {
                self.current = transition.to;
                self.buffer.push(c);
                return FeedOutcome::Consumed;
            }
        }
        if !self.is_mid_match() {
            self.buffer.push(c);
            let _ = self.emit();
            return FeedOutcome::Consumed;
        }
        FeedOutcome::Boundary(self.emit())
    }

    /// Flush the pending token (or error token) without consuming a
    /// character; used at whitespace boundaries and end of input.
    pub fn finalize(&mut self) -> T {
        self.emit()
    }

    /// Whether characters have been matched since the last emission.
    pub fn is_mid_match(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Return to the initial state and clear the buffer. Emitted tokens
    /// stay queued until drained.
    pub fn reset(&mut self) {
        self.current = 0;
        self.buffer.clear();
    }

    /// Take all tokens emitted since the last drain, in order.
    pub fn drain_results(&mut self) -> Vec<T> {
        std::mem::take(&mut self.results)
    }

    fn emit(&mut self) -> T {
        let class = self.finals[self.current].clone();
        let token = (self.builder)(class, &self.buffer);
        self.results.push(token.clone());
        self.reset();
        token
    }
}
