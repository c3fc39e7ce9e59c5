//! Show how a path breaks down into access steps

use super::CliError;
use crate::{Step, parser::Parser};

/// Renders one line per access step, e.g. `field friends`, `index 0`.
pub fn describe_steps(path: &str) -> Result<String, CliError> {
    let steps = Parser::from_path(path).collect_steps()?;

    let mut out = String::new();
    for step in steps {
        let line = match step {
            Step::Field(key) => format!("field {}\n", key),
            Step::Index(index) => format!("index {}\n", index),
            Step::End => "end\n".to_string(),
        };
        out.push_str(&line);
    }
    Ok(out)
}
