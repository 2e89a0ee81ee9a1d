//! MCP `parse_entry` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `parse_entry` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ParseEntryParams {
    #[schemars(description = "The journal entry text. Null or missing is treated as an empty entry.")]
    pub text: Option<String>,

    #[schemars(
        description = "Reference date (YYYY-MM-DD) that relative expressions like 'tomorrow' resolve against. Defaults to today."
    )]
    pub reference_date: Option<String>,
}
