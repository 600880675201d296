//! Schema command implementation.
//!
//! The `netsec-pkg schema` command prints the JSON Schema for `package.yml`.

use crate::error::{PackagingError, Result};
use crate::metadata::SchemaGenerator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        let json =
            serde_json::to_string_pretty(&schema).map_err(|e| PackagingError::Other(e.into()))?;
        ui.message(&json);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_parseable_schema() {
        let mut ui = MockUI::new();
        let result = SchemaCommand::new().execute(&mut ui).unwrap();

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["title"], "Package Metadata");
    }
}
