//! Canned reply templates, one table per category.
//!
//! Presentation only — selection is uniformly random and carries no
//! confidence information.

use rand::seq::SliceRandom;

use crate::engine::types::Category;

/// Replies acknowledging a request that needs action.
pub const PRODUCTIVE_TEMPLATES: &[&str] = &[
    "Obrigado pelo contato! Estamos analisando sua solicitação.",
    "Recebemos seu email. Nossa equipe está trabalhando nisso.",
    "Ótimo, vamos verificar isso e retornaremos em breve.",
    "Sua solicitação foi registrada e está em análise pela equipe responsável.",
    "Recebido! Abrimos um atendimento para o seu caso e retornaremos em breve.",
    "Agradecemos o aviso. Nossa equipe técnica já está verificando o ocorrido.",
    "Obrigado por reportar. Vamos investigar e enviaremos uma atualização em breve.",
    "Entendido! Encaminhamos sua solicitação ao time responsável.",
];

/// Replies for social content with no action needed.
pub const UNPRODUCTIVE_TEMPLATES: &[&str] = &[
    "Muito obrigado pelo seu contato! Apreciamos.",
    "Agradecemos a mensagem! Tudo bem com você?",
    "Obrigado! Voltaremos em breve com atualizações.",
    "Agradecemos as palavras! Ficamos à disposição.",
    "Muito obrigado! Desejamos tudo de bom para você também.",
    "Que gentileza! Agradecemos o carinho.",
    "Obrigado pela mensagem! Conte conosco sempre que precisar.",
    "Agradecemos o contato! Até breve.",
];

/// Category → candidate replies.
pub struct ResponseTemplateSet {
    productive: &'static [&'static str],
    unproductive: &'static [&'static str],
}

impl ResponseTemplateSet {
    /// The built-in tables.
    pub fn default_templates() -> Self {
        Self {
            productive: PRODUCTIVE_TEMPLATES,
            unproductive: UNPRODUCTIVE_TEMPLATES,
        }
    }

    /// All candidates for a category.
    pub fn candidates(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Productive => self.productive,
            Category::Unproductive => self.unproductive,
        }
    }

    /// Pick one candidate uniformly at random.
    pub fn pick(&self, category: Category) -> &'static str {
        let candidates = self.candidates(category);
        candidates
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("Obrigado pelo contato!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_templates_per_category() {
        let templates = ResponseTemplateSet::default_templates();
        assert_eq!(templates.candidates(Category::Productive).len(), 8);
        assert_eq!(templates.candidates(Category::Unproductive).len(), 8);
    }

    #[test]
    fn pick_returns_member_of_category_set() {
        let templates = ResponseTemplateSet::default_templates();
        for _ in 0..50 {
            let reply = templates.pick(Category::Productive);
            assert!(templates.candidates(Category::Productive).contains(&reply));
            let reply = templates.pick(Category::Unproductive);
            assert!(templates.candidates(Category::Unproductive).contains(&reply));
        }
    }

    #[test]
    fn tables_are_disjoint() {
        let templates = ResponseTemplateSet::default_templates();
        for reply in templates.candidates(Category::Productive) {
            assert!(!templates.candidates(Category::Unproductive).contains(reply));
        }
    }
}
