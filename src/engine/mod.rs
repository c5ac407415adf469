//! Hybrid classification decision engine.
//!
//! Combines a remote LLM classification with a deterministic lexical
//! fallback:
//! 1. `ClassificationInput` — validation (the only caller-visible errors)
//! 2. `RemoteClassifier` — authoritative when it yields a clean answer
//! 3. `LexicalScorer` — total fallback, never fails
//!
//! Constructed once at startup and shared across requests; all per-request
//! state is call-local, so no locking.

pub mod input;
pub mod keywords;
pub mod lexical;
pub mod remote;
pub mod templates;
pub mod types;

pub use input::ClassificationInput;
pub use lexical::LexicalScorer;
pub use remote::RemoteClassifier;
pub use templates::ResponseTemplateSet;
pub use types::{Category, ClassificationResult, Method, ScoreVector};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::ClassifyError;
use crate::llm::LlmProvider;

/// How a clean remote answer is arbitrated against the lexical fallback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ArbitrationPolicy {
    /// Any clean remote answer is final. The baseline rule.
    #[default]
    Authoritative,
    /// Remote answers whose confidence (0-100) falls below the bar are
    /// discarded in favor of the lexical scorer.
    MinConfidence(f64),
}

/// The decision engine. One instance per process, `Send + Sync`.
pub struct DecisionEngine {
    remote: Option<RemoteClassifier>,
    lexical: LexicalScorer,
    templates: ResponseTemplateSet,
    policy: ArbitrationPolicy,
}

impl DecisionEngine {
    /// Build the engine. `llm: None` switches it permanently into
    /// lexical-only mode — logged once here, not per request.
    pub fn new(llm: Option<Arc<dyn LlmProvider>>, policy: ArbitrationPolicy) -> Self {
        let remote = match llm {
            Some(llm) => Some(RemoteClassifier::new(llm)),
            None => {
                info!("No remote classifier configured — running in keyword-fallback mode");
                None
            }
        };
        Self {
            remote,
            lexical: LexicalScorer::default_keywords(),
            templates: ResponseTemplateSet::default_templates(),
            policy,
        }
    }

    /// Whether the remote path is configured for this process.
    pub fn remote_available(&self) -> bool {
        self.remote.is_some()
    }

    /// Classify raw caller text.
    ///
    /// Validation failures are the only errors; every remote failure
    /// degrades silently to the lexical fallback.
    pub async fn classify(&self, raw_text: &str) -> Result<ClassificationResult, ClassifyError> {
        let input = ClassificationInput::new(raw_text)?;
        let window = input.analysis_window();

        if let Some(remote) = &self.remote {
            if let Some(scores) = remote.classify(&window).await {
                if self.accepts(&scores) {
                    let result = ClassificationResult::from_scores(scores, Method::Remote);
                    debug!(
                        categoria = %result.categoria,
                        confianca = result.confianca,
                        "Remote answer accepted"
                    );
                    return Ok(result);
                }
                debug!("Remote answer below confidence bar, using lexical fallback");
            }
        }

        let (categoria, confianca) = self.lexical.classify(&window);
        Ok(ClassificationResult::from_lexical(categoria, confianca))
    }

    fn accepts(&self, scores: &ScoreVector) -> bool {
        match self.policy {
            ArbitrationPolicy::Authoritative => true,
            ArbitrationPolicy::MinConfidence(bar) => scores.winning_score() * 100.0 >= bar,
        }
    }

    /// Canned reply for a category label. Unknown labels coerce to
    /// Improdutivo — this never errors.
    pub fn generate_response(&self, category_label: &str) -> String {
        let categoria = Category::from_label(category_label).unwrap_or_else(|| {
            warn!(label = category_label, "Unknown category, defaulting to Improdutivo");
            Category::Unproductive
        });
        self.templates.pick(categoria).to_string()
    }

    /// Canned reply for an already-typed category.
    pub fn response_for(&self, categoria: Category) -> String {
        self.templates.pick(categoria).to_string()
    }
}
