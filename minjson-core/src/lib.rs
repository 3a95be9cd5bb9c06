//! minjson Core Parser
//!
//! Recursive-descent parser for single JSON scalar values: `null`,
//! `true`/`false`, and numbers. One value per input, strict number
//! grammar, structured error codes.
//!
//! # Architecture
//!
//! - **cursor.rs** - forward-only byte cursor over the input
//! - **scanner.rs** - whitespace, keyword, and number-grammar scanning
//! - **parser.rs** - value dispatch, top-level entry, error codes
//! - **value.rs** - scalar value type and accessors

pub mod cursor;
pub mod parser;
pub mod scanner;
pub mod value;

pub use cursor::Cursor;
pub use parser::{parse, parse_str, ParseError};
pub use value::{Value, ValueKind};
