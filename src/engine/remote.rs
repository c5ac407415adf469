//! Remote classification adapter.
//!
//! Wraps the LLM provider behind a narrow contract: send the analysis
//! window, get back `Some(ScoreVector)` or `None`. Every expected failure
//! mode — transient errors past the retry budget, answers outside the
//! category vocabulary, malformed bodies — collapses to `None`; the
//! decision engine falls back to the lexical scorer.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::engine::types::{Category, ScoreVector};
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider, RetryPolicy};

/// Deterministic sampling — minimizes answer variance.
const REMOTE_TEMPERATURE: f32 = 0.0;

/// The answer is one word; anything longer is already suspect.
const REMOTE_MAX_TOKENS: u32 = 16;

/// Constant share assigned to a clean remote answer. The capability
/// exposes no calibrated score, so "it answered cleanly" maps to a fixed
/// high confidence.
const REMOTE_WINNER_SHARE: f64 = 0.95;

/// Remote half of the hybrid classifier.
pub struct RemoteClassifier {
    llm: Arc<dyn LlmProvider>,
    retry: RetryPolicy,
}

impl RemoteClassifier {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            llm,
            retry: RetryPolicy::default(),
        }
    }

    /// Classify the analysis window.
    ///
    /// `None` means "no usable answer" — never an error the caller must
    /// handle.
    pub async fn classify(&self, window: &str) -> Option<ScoreVector> {
        let request = build_request(window);

        let response = match self
            .retry
            .run("remote classification", || self.llm.complete(request.clone()))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Remote classification failed, using fallback");
                return None;
            }
        };

        match parse_remote_answer(&response.content) {
            Some(category) => {
                debug!(categoria = %category, "Remote classification accepted");
                Some(ScoreVector::from_winner(category, REMOTE_WINNER_SHARE))
            }
            None => {
                warn!(
                    raw_answer = %response.content,
                    "Remote answer outside category vocabulary, using fallback"
                );
                None
            }
        }
    }
}

// ── Prompt construction ─────────────────────────────────────────────

fn build_request(window: &str) -> CompletionRequest {
    let system = format!(
        "Você é um classificador de emails de suporte. Responda com exatamente \
         uma palavra: \"{productive}\" ou \"{unproductive}\".\n\n\
         Definições:\n\
         - {productive}: o email exige uma ação técnica, resposta ou tem urgência \
         (solicitações, erros, problemas, dúvidas, prazos).\n\
         - {unproductive}: saudações, agradecimentos, conteúdo social, nenhuma \
         ação necessária.\n\n\
         Não explique. Não use pontuação. Apenas a palavra da categoria.",
        productive = Category::Productive.label(),
        unproductive = Category::Unproductive.label(),
    );
    let user = format!("Classifique este email:\n\n{window}");

    CompletionRequest::new(vec![ChatMessage::system(system), ChatMessage::user(user)])
        .with_temperature(REMOTE_TEMPERATURE)
        .with_max_tokens(REMOTE_MAX_TOKENS)
}

// ── Answer decoding ─────────────────────────────────────────────────

/// The two response shapes the capability is known to produce.
enum RemoteAnswer {
    /// A bare category word, possibly quoted or oddly cased.
    Plain(String),
    /// A JSON array of scored candidates.
    Candidates(Vec<Candidate>),
}

#[derive(Debug, Deserialize)]
struct Candidate {
    label: String,
    #[serde(default)]
    score: f64,
}

/// Decode the raw answer into one of the known shapes. No attribute
/// probing — a candidate list is a JSON array or it is plain text.
fn decode_answer(raw: &str) -> RemoteAnswer {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        if let Ok(candidates) = serde_json::from_str::<Vec<Candidate>>(trimmed) {
            return RemoteAnswer::Candidates(candidates);
        }
    }
    RemoteAnswer::Plain(trimmed.to_string())
}

/// Extract a category from the decoded answer, or `None` if the answer is
/// outside the two-word vocabulary.
fn parse_remote_answer(raw: &str) -> Option<Category> {
    match decode_answer(raw) {
        RemoteAnswer::Plain(text) => Category::from_label(&normalize_label(&text)),
        RemoteAnswer::Candidates(candidates) => {
            let top = candidates.into_iter().max_by(|a, b| {
                a.score
                    .partial_cmp(&b.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })?;
            Category::from_label(&normalize_label(&top.label))
        }
    }
}

/// Strip quotes and whitespace, then title-case.
fn normalize_label(text: &str) -> String {
    let stripped = text
        .trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '`' | '“' | '”' | '‘' | '’'))
        .trim();
    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
