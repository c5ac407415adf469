//! Static keyword tables for the lexical scorer.
//!
//! Entries must be lowercase — matching lowercases the input, never the
//! table. The two sets are disjoint by intent, not by construction.

/// Signals that a message asks for support action.
pub const PRODUCTIVE_KEYWORDS: &[&str] = &[
    // Portuguese
    "ajuda",
    "preciso",
    "urgente",
    "erro",
    "problema",
    "falha",
    "suporte",
    "sistema",
    "protocolo",
    "solicitação",
    "solicito",
    "chamado",
    "acesso",
    "senha",
    "atualização",
    "prazo",
    "pendente",
    "fatura",
    "cobrança",
    "não consigo",
    "não funciona",
    "dúvida",
    // English
    "help",
    "urgent",
    "error",
    "issue",
    "problem",
    "support",
    "request",
    "broken",
    "not working",
    "deadline",
    "access",
    "password",
    "update",
    "invoice",
    "ticket",
];

/// Signals that a message is social content with no action needed.
pub const UNPRODUCTIVE_KEYWORDS: &[&str] = &[
    // Portuguese
    "obrigado",
    "obrigada",
    "agradeço",
    "agradecemos",
    "parabéns",
    "feliz",
    "aniversário",
    "natal",
    "ano novo",
    "festa",
    "abraço",
    "abraços",
    "bom dia",
    "boa tarde",
    "boas festas",
    "felicidades",
    "cumprimentos",
    // English
    "thank you",
    "thanks",
    "congratulations",
    "happy",
    "merry christmas",
    "happy new year",
    "holidays",
    "birthday",
    "best wishes",
    "cheers",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_entries_are_lowercase() {
        for keyword in PRODUCTIVE_KEYWORDS.iter().chain(UNPRODUCTIVE_KEYWORDS) {
            assert_eq!(
                *keyword,
                keyword.to_lowercase(),
                "keyword table entries must be lowercase: {keyword}"
            );
        }
    }

    #[test]
    fn sets_do_not_share_entries() {
        for keyword in PRODUCTIVE_KEYWORDS {
            assert!(
                !UNPRODUCTIVE_KEYWORDS.contains(keyword),
                "keyword in both sets: {keyword}"
            );
        }
    }

    #[test]
    fn no_empty_entries() {
        for keyword in PRODUCTIVE_KEYWORDS.iter().chain(UNPRODUCTIVE_KEYWORDS) {
            assert!(!keyword.is_empty());
        }
    }
}
