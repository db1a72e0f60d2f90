//! Ground-literal validation and parsing.
//!
//! A literal has the surface form `name(arg1, arg2, ..., argN).` where the
//! name and every argument are non-empty ASCII alphanumeric runs. Spaces are
//! only tolerated directly after a comma.

pub mod parser;
pub mod syntax;
pub mod traits;

pub use parser::LiteralParser;
pub use syntax::LiteralSyntax;
pub use traits::LiteralSource;

#[cfg(test)]
mod tests;
