//! Optional narrative generator (an external text-generation service).

use crate::error::GenerationError;
use crate::weather::describe::ConditionsSummary;

/// Produces flavour text for a set of conditions.
///
/// Implementations wrap whatever service the host talks to. Failures never reach the
/// user: `narrate` logs them and returns the deterministic fallback instead.
pub trait DescriptionGenerator {
    fn generate(&self, summary: &ConditionsSummary) -> Result<String, GenerationError>;
}

impl<F> DescriptionGenerator for F
where
    F: Fn(&ConditionsSummary) -> Result<String, GenerationError>,
{
    fn generate(&self, summary: &ConditionsSummary) -> Result<String, GenerationError> {
        self(summary)
    }
}

/// Generated text when available, the fallback narrative otherwise.
pub fn narrate(summary: &ConditionsSummary, generator: Option<&dyn DescriptionGenerator>) -> String {
    let Some(generator) = generator else {
        return summary.fallback_narrative();
    };
    match generator.generate(summary) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            tracing::warn!(error = %GenerationError::Empty, "using fallback weather narrative");
            summary.fallback_narrative()
        }
        Err(err) => {
            tracing::warn!(error = %err, "using fallback weather narrative");
            summary.fallback_narrative()
        }
    }
}
