//! # Path expression items and steps
//!
//! A path such as `friends[0].name` passes through two stages:
//!
//! - **[tokens]** - lexical [`Item`]s produced by the [`Lexer`](crate::lexer::Lexer):
//!   `Identifier("friends")`, `ArrayIndex("[0]")`, `Dot`, `Identifier("name")`, `Eof`
//! - **[steps]** - access [`Step`]s produced by the [`Parser`](crate::parser::Parser):
//!   `Field("friends")`, `Index(0)`, `Field("name")`, `End`
//!
//! Steps are what the evaluator threads through the document.

pub mod steps;
pub mod tokens;

pub use steps::Step;
pub use tokens::{Item, ItemKind};
