//! Error types for mailsift.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),
}

/// Configuration-related errors.
///
/// A missing remote credential is deliberately NOT an error — the engine
/// starts in lexical-only mode instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input validation errors — the only class surfaced to callers.
///
/// Messages are user-facing and mirror the HTTP 400 bodies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("O email está vazio após processamento.")]
    Empty,

    #[error("Email muito curto. Forneça pelo menos {min} caracteres.")]
    TooShort { min: usize },

    #[error("Email muito longo. Máximo {max} caracteres.")]
    TooLong { max: usize },
}

/// Remote provider errors. Never surfaced to callers — transient variants
/// are retried, everything else degrades to the keyword fallback.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} rate limited")]
    RateLimited { provider: String },

    #[error("Provider {provider} server error (status {status})")]
    ServerError { provider: String, status: u16 },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Whether the retry budget applies. Rate limits and server-side
    /// failures are worth retrying; everything else fails fast.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::ServerError { .. })
    }
}

/// Upload handling errors — user-facing, mapped to HTTP 400.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Tipo de arquivo inválido. Use .txt ou .pdf.")]
    UnsupportedType,

    #[error("Não foi possível extrair texto do PDF.")]
    PdfExtraction,
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
