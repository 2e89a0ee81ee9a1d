pub mod parse_entry;
pub mod resolve_date;

use chrono::NaiveDate;
use parse_entry::ParseEntryParams;
use resolve_date::ResolveDateParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use std::sync::Arc;

use journey::Extractor;

/// The Journey MCP tool handler. Holds the compiled extractor and exposes it via
/// the `#[tool_router]` macro. The extractor is immutable, so clones share it freely.
#[derive(Clone)]
pub struct JourneyTools {
    tool_router: ToolRouter<Self>,
    extractor: Arc<Extractor>,
}

/// Parse an optional `YYYY-MM-DD` parameter, defaulting to the local date.
fn reference_date(param: Option<&str>) -> Result<NaiveDate, String> {
    match param {
        Some(s) => s
            .trim()
            .parse::<NaiveDate>()
            .map_err(|e| format!("invalid reference_date {s:?}: {e}")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[tool_router]
impl JourneyTools {
    pub fn new(extractor: Arc<Extractor>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            extractor,
        }
    }

    /// Extract keywords, plans, and priorities from a journal entry.
    #[tool(description = "Parse a journal entry. Returns up to 3 keywords, plans (future intentions with an optional planned_date), and priorities (obligations dated to the reference date).")]
    async fn parse_entry(
        &self,
        Parameters(params): Parameters<ParseEntryParams>,
    ) -> Result<String, String> {
        let reference = reference_date(params.reference_date.as_deref())?;

        tracing::info!(
            text_len = params.text.as_deref().map_or(0, str::len),
            reference = %reference,
            "parse_entry called"
        );

        let result = self
            .extractor
            .parse_optional(params.text.as_deref(), reference);

        tracing::info!(
            plans = result.plans.len(),
            priorities = result.priorities.len(),
            "entry parsed"
        );

        serde_json::to_string(&result).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Resolve a relative date phrase.
    #[tool(description = "Resolve a date phrase (tomorrow, next week, 3 days, on friday, on 2025-12-25, besok, ...) against a reference date. Returns the date and the rule that matched, or null.")]
    async fn resolve_date(
        &self,
        Parameters(params): Parameters<ResolveDateParams>,
    ) -> Result<String, String> {
        let reference = reference_date(params.reference_date.as_deref())?;
        tracing::info!(phrase = %params.phrase, reference = %reference, "resolve_date called");

        let resolved = self.extractor.resolve_date(reference, &params.phrase);
        serde_json::to_string(&resolved).map_err(|e| format!("serialization failed: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for JourneyTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "Journey extracts plans, priorities, and keywords from journal entries. \
                 Use parse_entry for a whole entry and resolve_date for a single date phrase."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
