//! The grammar state machines.
//!
//! Every scanner follows the same contract:
//! - `parse` advances the cursor as far as the supplied bytes allow and
//!   returns an [`Outcome`](crate::Outcome);
//! - progress survives across calls, so chunk boundaries may fall anywhere;
//! - on `Error` the cursor is back where the call found it, which lets the
//!   value dispatcher try the next alternative on the same byte;
//! - `reset` returns the scanner to its freshly constructed state.
//!
//! Nesting is handled by ownership: a [`ValueDispatcher`] lazily boxes one
//! [`ObjectScanner`] and one [`ArrayScanner`], which in turn own the
//! [`KeyValueScanner`] / [`ValueDispatcher`] for their members. A call
//! descends through that chain, so the [`Cursor`](crate::Cursor) limits how
//! deep objects and arrays may nest.

mod array;
mod dispatcher;
mod escape;
mod key_value;
mod literal;
mod number;
mod object;
mod string;
mod whitespace;

pub use array::ArrayScanner;
pub use dispatcher::{Scalar, ValueDispatcher};
pub use escape::push_utf8;
pub use key_value::KeyValueScanner;
pub use literal::LiteralMatcher;
pub use number::{Number, NumberScanner};
pub use object::ObjectScanner;
pub use string::StringScanner;
pub use whitespace::WhitespaceScanner;
