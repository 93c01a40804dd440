//! # calc_core - Four-Function Calculator Engine
//!
//! `calc_core` turns raw calculator key presses (digits, decimal point,
//! binary operators, equals, clear/backspace) into a running accumulator and
//! the text a display should show. It has no UI of its own: any front end
//! sends [`InputEvent`]s and renders the returned string verbatim.
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: [`EngineState`] holds everything, transitions are plain method calls
//! - **Closed types**: operators and events are enums, not strings
//! - **Always usable**: division by zero shows `"Error"` and the next digit recovers
//! - **JSON-First**: state, events, settings and errors all implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Engine, InputEvent, Operator};
//!
//! let mut engine = Engine::new();
//! engine.press(InputEvent::digit(5).unwrap());
//! engine.press(InputEvent::Operator(Operator::Add));
//! engine.press(InputEvent::digit(3).unwrap());
//! assert_eq!(engine.press(InputEvent::Equals), "8");
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The accumulator state machine
//! - [`input`] - Input events and key bindings
//! - [`operator`] - Binary operators and the arithmetic step
//! - [`format`] - Number-to-display formatting
//! - [`settings`] - Engine settings
//! - [`errors`] - Structured error types

pub mod engine;
pub mod errors;
pub mod format;
pub mod input;
pub mod operator;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use engine::{Engine, EngineState, ERROR_TEXT};
pub use errors::{CalcError, CalcResult};
pub use input::{Digit, InputEvent, Symbol};
pub use operator::Operator;
pub use settings::EngineSettings;
