//! Turns the text of an expression into a tree of tokens that can be resolved.
//!
//! Parsing happens in three stages:
//!
//! - The [`tokenizer`] classifies runs of characters (digits, letters, operators, parentheses,
//! commas and whitespace).
//! - The [`parser::Parser`] consumes those runs into a flat stream of [`parser::stream::FlatToken`]s,
//! inserting implicit multiplication where operands are juxtaposed.
//! - [`parser::tree::build`] nests the flat stream into a [`parser::node::Tree`], where every
//! parenthesized group and function call owns the tokens between its parentheses.
//!
//! ```
//! use bigfold_parser::parser::parse;
//!
//! let tree = parse("5x+1+1").unwrap();
//! assert_eq!(tree.to_string(), "5*x+1+1");
//! ```

pub mod parser;
pub mod tokenizer;
