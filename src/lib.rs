pub mod ast;
pub mod cli;
pub mod convert;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod typed;
pub mod value;

pub use ast::{Item, ItemKind, Step};
pub use convert::{from_json_str, json_to_value, value_to_json};
pub use evaluator::{AccessError, ErrorKind, get, step};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use typed::{FromValue, get_as};
pub use value::Value;
