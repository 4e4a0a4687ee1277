//! Core calculator logic
//!
//! Everything the frontends share: token types, the keystroke
//! classification boundary, the token-buffer engine, and the
//! left-to-right reduction.

pub mod buffer;
pub mod key;
pub mod reduce;
pub mod token;

pub use buffer::{OperatorPress, TokenBuffer};
pub use key::{classify, Key, KeyEventError, RawKey};
pub use reduce::{calculate, format_number, parse_number, reduce};
pub use token::{Operator, Token};
