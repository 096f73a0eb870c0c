//! Prompt building functions for LLM requests
//!
//! The game is played in Portuguese, so the instructions sent to the model
//! are in Portuguese too.

use crate::domain::value_objects::{AbilityKind, GamePhase};

/// System prompt for the library narrator
pub fn build_dialogue_system_prompt(character_name: &str, phase: &str) -> String {
    format!(
        "Você é um narrador de RPG ambientado na Biblioteca de Alexandria.\n\
         Personagem: {character_name}\n\
         Fase: {phase}\n\
         \n\
         Crie diálogos épicos, filosóficos e inspirados em mitologia grega.\n\
         Use linguagem poética mas compreensível. Máximo 2-3 frases."
    )
}

/// System prompt asking for an enemy as `{"name", "description"}` JSON
pub fn build_enemy_system_prompt(enemy_type: &str, phase: &str) -> String {
    let mut prompt = format!(
        "Você cria inimigos para um RPG na Biblioteca de Alexandria.\n\
         Fase: {phase}\n\
         Tipo: {enemy_type}\n\
         \n\
         Retorne APENAS no formato JSON:\n\
         {{\"name\": \"Nome do Inimigo\", \"description\": \"Descrição curta e épica (1-2 frases)\"}}\n\
         \n"
    );

    // Unknown phases get every hint and let the model pick
    match GamePhase::from_label(phase) {
        Some(known) => prompt.push_str(known.enemy_hint()),
        None => {
            let hints: Vec<&str> = GamePhase::ALL.iter().map(|p| p.enemy_hint()).collect();
            prompt.push_str(&hints.join("\n"));
        }
    }

    prompt
}

pub fn build_enemy_user_message(enemy_type: &str) -> String {
    format!("Crie um inimigo do tipo {enemy_type}")
}

/// System prompt asking for an ability as `{"name", "description", "effect"}` JSON
pub fn build_ability_system_prompt(ability_type: &str, level: u32) -> String {
    format!(
        "Você cria habilidades para um RPG baseado em sabedoria.\n\
         Tipo: {ability_type}\n\
         Nível: {level}\n\
         \n\
         Tipos de habilidades:\n\
         - {logic}: ataques baseados em razão\n\
         - {inspiration}: buffs e fortalecimento\n\
         - {heal}: recuperação de HP\n\
         \n\
         Retorne APENAS no formato JSON:\n\
         {{\"name\": \"Nome da Habilidade\", \"description\": \"Descrição épica (1 frase)\", \"effect\": \"descrição do efeito\"}}",
        logic = AbilityKind::Logic.label(),
        inspiration = AbilityKind::Inspiration.label(),
        heal = AbilityKind::Heal.label(),
    )
}

pub fn build_ability_user_message(ability_type: &str, level: u32) -> String {
    format!("Crie uma habilidade de {ability_type} nível {level}")
}
