//! Resolve a path against JSON input

use super::CliError;
use crate::{
    convert::{from_json_str, value_to_json},
    evaluator::get,
    parser::Parser,
};

/// Options for the get command
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// The path to resolve, e.g. `friends[0].name`
    pub path: String,
    /// JSON input string
    pub input: Option<String>,
    /// Only validate the path, don't resolve it
    pub syntax_only: bool,
}

/// Result of a get operation
#[derive(Debug)]
pub enum GetResult {
    /// Path syntax validation passed
    SyntaxValid,
    /// The value the path resolved to
    Found(serde_json::Value),
}

/// Execute a get operation
pub fn execute_get(options: &GetOptions) -> Result<GetResult, CliError> {
    if options.syntax_only {
        Parser::from_path(&options.path).collect_steps()?;
        return Ok(GetResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document = from_json_str(json_str)?;

    let found = get(&document, &options.path)?;
    Ok(GetResult::Found(value_to_json(found)))
}
