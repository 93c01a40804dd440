//! # Calculator Engine
//!
//! The accumulator state machine behind a four-function calculator. A
//! presentation layer feeds it [`InputEvent`]s one at a time and renders the
//! display text it hands back.
//!
//! Operators chain left to right without precedence: `3 + 4 * 2 =` shows
//! `14`. Dividing by zero resets the engine and shows `"Error"` until the
//! next digit.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::Engine;
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.press_keys("3+4*2=").unwrap(), "14");
//! assert_eq!(engine.press_keys("5/0=").unwrap(), "Error");
//! assert_eq!(engine.press_keys("7").unwrap(), "7");
//! ```
//!
//! The same transitions are available in consuming form on [`EngineState`]
//! for callers that prefer state-in, state-out:
//!
//! ```rust
//! use calc_core::engine::EngineState;
//! use calc_core::input::InputEvent;
//! use calc_core::settings::EngineSettings;
//!
//! let settings = EngineSettings::default();
//! let state = EngineState::default()
//!     .apply(InputEvent::digit(9).unwrap(), &settings)
//!     .apply(InputEvent::point(), &settings);
//! assert_eq!(state.display, "9.");
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::format_number;
use crate::input::{InputEvent, Symbol};
use crate::operator::Operator;
use crate::settings::{EngineSettings, MAX_INPUT_LEN};

/// Display text shown after a failed operation
pub const ERROR_TEXT: &str = "Error";

/// Complete engine state.
///
/// `display` is always a parseable number or [`ERROR_TEXT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Running left-hand operand
    pub accumulator: f64,

    /// Operator waiting for its right-hand operand
    pub pending_operator: Option<Operator>,

    /// Text currently shown to the user
    pub display: String,

    /// Next digit starts a fresh number instead of extending `display`
    pub awaiting_operand: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        EngineState {
            accumulator: 0.0,
            pending_operator: None,
            display: "0".to_string(),
            awaiting_operand: true,
        }
    }
}

impl EngineState {
    /// Whether the error sentinel is showing.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    /// Check the display holds something the engine could have produced:
    /// the error sentinel, or a number of at most 15 characters with at most
    /// one decimal point.
    pub fn validate(&self) -> CalcResult<()> {
        if self.is_error() {
            return Ok(());
        }
        let reason = if self.display.len() > MAX_INPUT_LEN {
            format!("display {:?} is longer than {} characters", self.display, MAX_INPUT_LEN)
        } else if self.display.matches('.').count() > 1 {
            format!("display {:?} has more than one decimal point", self.display)
        } else if self.display.parse::<f64>().is_err() {
            format!("display {:?} is not a number", self.display)
        } else {
            return Ok(());
        };
        Err(CalcError::SerializationError { reason })
    }

    /// Consume the state and return the state after `event`.
    pub fn apply(mut self, event: InputEvent, settings: &EngineSettings) -> Self {
        self.handle(event, settings);
        self
    }

    /// Handle one event in place.
    pub fn handle(&mut self, event: InputEvent, settings: &EngineSettings) {
        match event {
            InputEvent::Symbol(symbol) => self.digit(symbol, settings),
            InputEvent::Operator(op) => self.operator(op, settings),
            InputEvent::Equals => self.equals(settings),
            InputEvent::Clear => self.clear(),
        }
        debug!(
            "{} -> display {:?} (accumulator {}, pending {:?})",
            event, self.display, self.accumulator, self.pending_operator
        );
    }

    /// A digit or decimal point was entered.
    pub fn digit(&mut self, symbol: Symbol, settings: &EngineSettings) {
        if self.is_error() {
            self.display = "0".to_string();
            self.awaiting_operand = true;
        }

        if self.awaiting_operand {
            self.display = match symbol {
                Symbol::DecimalPoint => "0.".to_string(),
                Symbol::Digit(d) => d.as_char().to_string(),
            };
            self.awaiting_operand = false;
            return;
        }

        let has_room = self.display.len() < settings.max_input_len;
        match symbol {
            Symbol::DecimalPoint => {
                if !self.display.contains('.') && has_room {
                    self.display.push('.');
                }
            }
            Symbol::Digit(d) => {
                if self.display == "0" {
                    self.display = d.as_char().to_string();
                } else if has_room {
                    self.display.push(d.as_char());
                }
            }
        }
    }

    /// A binary operator was pressed: resolve any pending operation, then
    /// queue `op`.
    pub fn operator(&mut self, op: Operator, settings: &EngineSettings) {
        let operand = self.operand();

        if let Some(pending) = self.pending_operator {
            if !self.calculate(pending, operand) {
                self.abort();
                return;
            }
            self.display = format_number(self.accumulator, settings.significant_digits);
        } else {
            self.accumulator = operand;
        }

        self.pending_operator = Some(op);
        self.awaiting_operand = true;
    }

    /// Equals was pressed: resolve any pending operation and show the result.
    pub fn equals(&mut self, settings: &EngineSettings) {
        let operand = self.operand();

        if let Some(pending) = self.pending_operator {
            if !self.calculate(pending, operand) {
                self.abort();
                return;
            }
            self.pending_operator = None;
        } else {
            self.accumulator = operand;
        }

        self.display = format_number(self.accumulator, settings.significant_digits);
        self.accumulator = 0.0;
        self.awaiting_operand = true;
    }

    /// Backspace while a number is being typed, all-clear otherwise.
    pub fn clear(&mut self) {
        if self.awaiting_operand {
            *self = EngineState::default();
        } else if self.display.len() > 1 && self.display != "0" {
            self.display.pop();
        } else {
            self.display = "0".to_string();
            self.awaiting_operand = true;
        }
    }

    /// Apply `op` to the accumulator. Returns false, leaving the accumulator
    /// unchanged, when the operation fails.
    fn calculate(&mut self, op: Operator, right: f64) -> bool {
        match op.apply(self.accumulator, right) {
            Ok(value) => {
                self.accumulator = value;
                true
            }
            Err(err) => {
                warn!("{} {} {}: {}", self.accumulator, op, right, err);
                false
            }
        }
    }

    /// Reset everything and show the error sentinel.
    fn abort(&mut self) {
        *self = EngineState::default();
        self.display = ERROR_TEXT.to_string();
    }

    /// The display read as a number. The error sentinel reads as zero.
    fn operand(&self) -> f64 {
        if self.is_error() {
            return 0.0;
        }
        match self.display.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("display text {:?} is not a number, using 0", self.display);
                0.0
            }
        }
    }
}

/// A calculator engine: state plus the settings it runs with.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: EngineState,
    settings: EngineSettings,
}

impl Engine {
    /// Create an engine in the start state with default settings.
    pub fn new() -> Self {
        Engine::default()
    }

    /// Create an engine with custom settings.
    pub fn with_settings(settings: EngineSettings) -> CalcResult<Self> {
        settings.validate()?;
        Ok(Engine {
            state: EngineState::default(),
            settings,
        })
    }

    /// Resume from a previously captured state.
    ///
    /// Fails if either the settings or the state's display are invalid.
    pub fn from_state(state: EngineState, settings: EngineSettings) -> CalcResult<Self> {
        settings.validate()?;
        state.validate()?;
        Ok(Engine { state, settings })
    }

    /// Current state, e.g. for serializing a session.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Settings this engine runs with.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// The text to render.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Enter a digit or decimal point.
    pub fn digit(&mut self, symbol: Symbol) -> &str {
        self.press(InputEvent::Symbol(symbol))
    }

    /// Press a binary operator.
    pub fn operator(&mut self, op: Operator) -> &str {
        self.press(InputEvent::Operator(op))
    }

    /// Press equals.
    pub fn equals(&mut self) -> &str {
        self.press(InputEvent::Equals)
    }

    /// Backspace, or all-clear when no number is being typed.
    pub fn clear(&mut self) -> &str {
        self.press(InputEvent::Clear)
    }

    /// Handle one event and return the text to render.
    pub fn press(&mut self, event: InputEvent) -> &str {
        self.state.handle(event, &self.settings);
        &self.state.display
    }

    /// Press every key in `keys` (see [`InputEvent::parse_keys`]).
    ///
    /// Keys are checked before any is applied, so an unrecognized key leaves
    /// the engine untouched.
    pub fn press_keys(&mut self, keys: &str) -> CalcResult<&str> {
        for event in InputEvent::parse_keys(keys)? {
            self.state.handle(event, &self.settings);
        }
        Ok(&self.state.display)
    }

    /// Return to the start state, keeping settings.
    pub fn reset(&mut self) {
        self.state = EngineState::default();
    }
}
