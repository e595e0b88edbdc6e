// src/data.rs

use crate::model::{NavigationTile, Question};
use std::collections::HashSet;
use thiserror::Error;

pub const AREAS: [&str; 5] = [
    "Direito Civil",
    "Direito Penal",
    "Direito Constitucional",
    "Direito Administrativo",
    "Direito Tributário",
];

pub const EXAMS: [&str; 4] = ["OAB", "Delegado", "Procurador", "Magistratura"];

pub const AUDIO_LESSONS: &str = "Áudio-aulas";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("banco de questões inválido: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("questão {id}: alternativa correta {index} fora do intervalo 0..=3")]
    CorrectChoiceOutOfRange { id: u32, index: usize },
    #[error("id de questão duplicado: {0}")]
    DuplicateId(u32),
}

/// Converte o YAML do banco em questões, validando índices e ids.
pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, DataError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;

    let mut seen = HashSet::new();
    for q in &questions {
        if q.correct_choice >= q.choices.len() {
            return Err(DataError::CorrectChoiceOutOfRange {
                id: q.id,
                index: q.correct_choice,
            });
        }
        if !seen.insert(q.id) {
            return Err(DataError::DuplicateId(q.id));
        }
    }

    Ok(questions)
}

/// Carrega o banco de questões a partir do YAML embutido
pub fn read_questions_embedded() -> Result<Vec<Question>, DataError> {
    parse_questions(include_str!("data/questoes.yaml"))
}

pub fn default_tiles() -> Vec<NavigationTile> {
    let tile = |id, title, icon, function_name| NavigationTile {
        id,
        title,
        active: true,
        icon,
        function_name,
        external_link: None,
    };

    vec![
        tile(1, "Vade Mecum", "⚖", "Vade Mecum Digital"),
        tile(2, "Assistente IA", "🤖", "Assistente IA"),
        tile(3, "Plataforma Desktop", "🖥", "Plataforma Desktop"),
        tile(4, AUDIO_LESSONS, "🎧", AUDIO_LESSONS),
        tile(5, "Biblioteca Jurídica", "📚", "Biblioteca Jurídica"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;

    #[test]
    fn embedded_bank_loads_three_questions() {
        let questions = read_questions_embedded().unwrap();
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(questions[1].area, "Direito Penal");
        assert_eq!(questions[1].level, Level::Basic);
        assert_eq!(questions[1].correct_choice, 1);
        assert_eq!(questions[2].level, Level::Intermediate);
    }

    #[test]
    fn rejects_correct_choice_out_of_range() {
        let yaml = r#"
- id: 7
  area: Direito Civil
  prompt: p
  choices: [a, b, c, d]
  correct_choice: 4
  explanation: e
  level: Básico
  exam: OAB 2023
  topic: t
"#;
        match parse_questions(yaml) {
            Err(DataError::CorrectChoiceOutOfRange { id: 7, index: 4 }) => {}
            other => panic!("resultado inesperado: {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let yaml = r#"
- id: 1
  area: A
  prompt: p
  choices: [a, b, c, d]
  correct_choice: 0
  explanation: e
  level: Avançado
  exam: OAB
  topic: t
- id: 1
  area: B
  prompt: q
  choices: [a, b, c, d]
  correct_choice: 2
  explanation: e
  level: Básico
  exam: OAB
  topic: t
"#;
        assert!(matches!(parse_questions(yaml), Err(DataError::DuplicateId(1))));
    }

    #[test]
    fn rejects_wrong_choice_count() {
        let yaml = r#"
- id: 1
  area: A
  prompt: p
  choices: [a, b, c]
  correct_choice: 0
  explanation: e
  level: Básico
  exam: OAB
  topic: t
"#;
        assert!(matches!(parse_questions(yaml), Err(DataError::Yaml(_))));
    }

    #[test]
    fn only_audio_tile_resolves_externally() {
        let tiles = default_tiles();
        assert_eq!(tiles.len(), 5);
        assert!(tiles.iter().all(|t| t.active && t.external_link.is_none()));
        assert_eq!(tiles[3].id, 4);
        assert_eq!(tiles[3].function_name, AUDIO_LESSONS);
    }
}
