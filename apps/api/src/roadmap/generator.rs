//! Roadmap generation dispatcher.
//!
//! Flow: build prompt from the validated profile → call the provider (with
//! bounded retries on transient failures) → parse-and-validate the model's
//! text into a `CareerRoadmap`.
//!
//! Every failure below this layer — network, provider error, shape-invalid
//! output — surfaces as `AppError::Generation`, which the boundary collapses
//! into one fixed 500 message. No partial roadmap ever leaves this module.

use std::time::Duration;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, CompletionProvider, LlmError};
use crate::roadmap::models::{CareerProfile, CareerRoadmap};
use crate::roadmap::prompts::{build_roadmap_prompt, ROADMAP_SYSTEM};

/// Max automatic retries after a transient provider failure (3 attempts total).
const MAX_RETRIES: u32 = 2;

/// Runs one generation: exactly one structured result or one error.
pub async fn generate_roadmap(
    provider: &dyn CompletionProvider,
    profile: &CareerProfile,
) -> Result<CareerRoadmap, AppError> {
    let prompt = build_roadmap_prompt(profile);
    info!(
        "Generating roadmap: target_role='{}', daily_hours={}",
        profile.target_role, profile.daily_hours
    );

    let text = complete_with_retries(provider, &prompt)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    let roadmap = parse_roadmap(&text)
        .map_err(|e| AppError::Generation(format!("response failed shape validation: {e}")))?;

    info!(
        "Roadmap generated: {} weeks, {} skill gaps",
        roadmap.study_plan.len(),
        roadmap.skill_gaps.len()
    );
    Ok(roadmap)
}

/// Calls the provider, retrying transient failures with exponential backoff
/// (1s, 2s). Non-transient failures return immediately.
async fn complete_with_retries(
    provider: &dyn CompletionProvider,
    prompt: &str,
) -> Result<String, LlmError> {
    let mut last_error: Option<LlmError> = None;

    for attempt in 0..=MAX_RETRIES {
        if attempt > 0 {
            let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
            warn!(
                "LLM call attempt {} failed, retrying after {}ms...",
                attempt,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }

        match provider.complete(prompt, ROADMAP_SYSTEM).await {
            Ok(text) => return Ok(text),
            Err(e) if e.is_transient() => {
                warn!("Transient LLM failure: {e}");
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_error.unwrap_or(LlmError::EmptyContent))
}

/// Parse-and-validate step: strips code fences, then deserializes into the
/// declared roadmap shape. Tagged outcome — a valid roadmap or an error,
/// never a best-effort partial object.
pub fn parse_roadmap(text: &str) -> Result<CareerRoadmap, LlmError> {
    let text = strip_json_fences(text);
    serde_json::from_str(text).map_err(LlmError::Parse)
}
