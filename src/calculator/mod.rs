//! Calculator core: state, actions, the reducer and display formatting.
//!
//! Nothing in this module performs I/O. The UI holds a single
//! [`CalculatorState`], turns button presses into [`Action`]s and replaces
//! its state with the result of [`reduce`].
//!
//! # Example
//!
//! ```
//! use calc_tui::calculator::{reduce_all, format_operand, Action, Operation};
//!
//! let state = reduce_all(&[
//!     Action::add_digit('5'),
//!     Action::choose(Operation::Add),
//!     Action::add_digit('3'),
//!     Action::Evaluate,
//! ]);
//! assert_eq!(state.current_operand.as_deref(), Some("8"));
//! assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
//! ```

mod action;
mod evaluate;
mod format;
mod reducer;
mod state;

pub use action::{is_digit_char, Action};
pub use evaluate::{evaluate, number_to_string, parse_operand};
pub use format::{format_operand, DisplayFormatter, DEFAULT_GROUPING_SEPARATOR};
pub use reducer::{reduce, reduce_all};
pub use state::{CalculatorState, Operation};
