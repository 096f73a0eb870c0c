//! Game phases
//!
//! A phase is a chapter of the library. It only changes the flavour of the
//! prompts sent to the LLM; there is no progression logic here.

/// The three chapters of the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Health,
    Programming,
    Art,
}

impl GamePhase {
    pub const ALL: [GamePhase; 3] = [GamePhase::Health, GamePhase::Programming, GamePhase::Art];

    /// Recognise a phase from the label the front-end sends.
    ///
    /// Accepts both the short key (`health`) and the displayed chapter title
    /// (`O Labirinto da Saúde`). Returns `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|phase| {
            label == phase.key() || label == phase.title().to_lowercase()
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            GamePhase::Health => "health",
            GamePhase::Programming => "programming",
            GamePhase::Art => "art",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GamePhase::Health => "O Labirinto da Saúde",
            GamePhase::Programming => "O Reino Digital",
            GamePhase::Art => "O Mundo das Cores",
        }
    }

    /// Thematic hint for enemies of this phase
    pub fn enemy_hint(&self) -> &'static str {
        match self {
            GamePhase::Health => {
                "Para Fase da Saúde: inimigos relacionados a doenças, vírus, desequilíbrios"
            }
            GamePhase::Programming => "Para Fase da Programação: bugs, algoritmos corrompidos",
            GamePhase::Art => "Para Fase da Arte: sombras de artistas esquecidos",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_accepts_keys_and_titles() {
        assert_eq!(GamePhase::from_label("health"), Some(GamePhase::Health));
        assert_eq!(GamePhase::from_label(" Programming "), Some(GamePhase::Programming));
        assert_eq!(GamePhase::from_label("O Mundo das Cores"), Some(GamePhase::Art));
        assert_eq!(
            GamePhase::from_label("o labirinto da saúde"),
            Some(GamePhase::Health)
        );
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(GamePhase::from_label("music"), None);
        assert_eq!(GamePhase::from_label(""), None);
    }
}
