//! Shared types for the classification engine.

use serde::{Deserialize, Serialize};

// ── Category ────────────────────────────────────────────────────────

/// The two fixed classification categories.
///
/// The canonical label strings are the Portuguese words the remote
/// capability is prompted to answer with; they are also the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Produtivo")]
    Productive,
    #[serde(rename = "Improdutivo")]
    Unproductive,
}

impl Category {
    /// Canonical label string.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Productive => "Produtivo",
            Self::Unproductive => "Improdutivo",
        }
    }

    /// The opposite category.
    pub fn other(&self) -> Self {
        match self {
            Self::Productive => Self::Unproductive,
            Self::Unproductive => Self::Productive,
        }
    }

    /// Parse a canonical label. Exact match only — callers normalize first.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Produtivo" => Some(Self::Productive),
            "Improdutivo" => Some(Self::Unproductive),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Method ──────────────────────────────────────────────────────────

/// Which subsystem produced the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "keyword-fallback")]
    KeywordFallback,
}

impl Method {
    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::KeywordFallback => "keyword-fallback",
        }
    }
}

// ── Score vector ────────────────────────────────────────────────────

/// Relative confidence for the two labels.
///
/// One field per label, so a third label is unrepresentable. Both
/// canonical producers normalize the pair to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreVector {
    pub productive: f64,
    pub unproductive: f64,
}

impl ScoreVector {
    /// Build from the winning category's share; the loser gets the rest.
    pub fn from_winner(winner: Category, share: f64) -> Self {
        match winner {
            Category::Productive => Self {
                productive: share,
                unproductive: 1.0 - share,
            },
            Category::Unproductive => Self {
                productive: 1.0 - share,
                unproductive: share,
            },
        }
    }

    /// The higher-scoring category. An exact tie goes to Productive so
    /// real requests are not silently dropped.
    pub fn winner(&self) -> Category {
        if self.productive >= self.unproductive {
            Category::Productive
        } else {
            Category::Unproductive
        }
    }

    /// The winning share.
    pub fn winning_score(&self) -> f64 {
        self.productive.max(self.unproductive)
    }

    /// The losing share.
    pub fn losing_score(&self) -> f64 {
        self.productive.min(self.unproductive)
    }
}

// ── Classification result ───────────────────────────────────────────

/// Final result of one classification request. Built once, never mutated.
///
/// Field names are the wire format consumed by the HTTP layer.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// Winning category.
    pub categoria: Category,
    /// Confidence in the winner, 0-100 with 2 decimals.
    pub confianca: f64,
    /// Both labels, ordered by descending score.
    pub labels: [&'static str; 2],
    /// Percentages parallel to `labels`.
    pub scores: [f64; 2],
    /// Provenance of the answer.
    pub metodo: Method,
}

impl ClassificationResult {
    /// Build from a normalized score vector (remote path).
    pub fn from_scores(vector: ScoreVector, metodo: Method) -> Self {
        let winner = vector.winner();
        let winning = round2(vector.winning_score() * 100.0);
        let losing = round2(vector.losing_score() * 100.0);
        Self {
            categoria: winner,
            confianca: winning,
            labels: [winner.label(), winner.other().label()],
            scores: [winning, losing],
            metodo,
        }
    }

    /// Build from the lexical scorer's (category, percentage) pair.
    pub fn from_lexical(categoria: Category, confianca: f64) -> Self {
        let winning = round2(confianca);
        Self {
            categoria,
            confianca: winning,
            labels: [categoria.label(), categoria.other().label()],
            scores: [winning, round2(100.0 - winning)],
            metodo: Method::KeywordFallback,
        }
    }
}

/// Round to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for category in [Category::Productive, Category::Unproductive] {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn category_from_label_rejects_unknown() {
        assert_eq!(Category::from_label("Talvez"), None);
        assert_eq!(Category::from_label("produtivo"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn category_serializes_as_canonical_label() {
        let json = serde_json::to_string(&Category::Productive).unwrap();
        assert_eq!(json, "\"Produtivo\"");
        let json = serde_json::to_string(&Category::Unproductive).unwrap();
        assert_eq!(json, "\"Improdutivo\"");
    }

    #[test]
    fn method_serializes_as_provenance_tag() {
        assert_eq!(
            serde_json::to_string(&Method::KeywordFallback).unwrap(),
            "\"keyword-fallback\""
        );
        assert_eq!(serde_json::to_string(&Method::Remote).unwrap(), "\"remote\"");
    }

    #[test]
    fn score_vector_from_winner_sums_to_one() {
        let vector = ScoreVector::from_winner(Category::Unproductive, 0.95);
        assert!((vector.productive + vector.unproductive - 1.0).abs() < 1e-9);
        assert_eq!(vector.winner(), Category::Unproductive);
        assert!((vector.winning_score() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn score_vector_tie_goes_productive() {
        let vector = ScoreVector {
            productive: 0.5,
            unproductive: 0.5,
        };
        assert_eq!(vector.winner(), Category::Productive);
    }

    #[test]
    fn result_from_remote_scores() {
        let vector = ScoreVector::from_winner(Category::Productive, 0.95);
        let result = ClassificationResult::from_scores(vector, Method::Remote);
        assert_eq!(result.categoria, Category::Productive);
        assert_eq!(result.confianca, 95.0);
        assert_eq!(result.labels, ["Produtivo", "Improdutivo"]);
        assert_eq!(result.scores, [95.0, 5.0]);
        assert_eq!(result.metodo, Method::Remote);
    }

    #[test]
    fn result_labels_ordered_by_descending_score() {
        let result = ClassificationResult::from_lexical(Category::Unproductive, 80.0);
        assert_eq!(result.labels, ["Improdutivo", "Produtivo"]);
        assert_eq!(result.scores, [80.0, 20.0]);
        assert_eq!(result.metodo, Method::KeywordFallback);
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let result = ClassificationResult::from_lexical(Category::Productive, 70.0);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["categoria"], "Produtivo");
        assert_eq!(json["confianca"], 70.0);
        assert_eq!(json["metodo"], "keyword-fallback");
        assert_eq!(json["labels"][0], "Produtivo");
        assert_eq!(json["scores"][1], 30.0);
    }

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(94.999), 95.0);
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(50.0), 50.0);
    }
}
