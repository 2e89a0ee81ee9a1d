//! MCP `resolve_date` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `resolve_date` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ResolveDateParams {
    #[schemars(description = "A phrase containing a date cue, e.g. 'next week' or 'on friday'")]
    pub phrase: String,

    #[schemars(description = "Reference date (YYYY-MM-DD). Defaults to today.")]
    pub reference_date: Option<String>,
}
