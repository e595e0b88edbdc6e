use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Level {
    #[serde(rename = "Básico")]
    Basic,
    #[serde(rename = "Intermediário")]
    Intermediate,
    #[serde(rename = "Avançado")]
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Basic, Level::Intermediate, Level::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            Level::Basic => "Básico",
            Level::Intermediate => "Intermediário",
            Level::Advanced => "Avançado",
        }
    }
}

/// Uma questão de múltipla escolha. Nunca é modificada depois de carregada.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub area: String,
    pub prompt: String,          // Enunciado
    pub choices: [String; 4],    // Alternativas
    pub correct_choice: usize,   // Índice da alternativa correta (0..=3)
    pub explanation: String,
    pub level: Level,
    pub exam: String,            // Concurso, ex.: "OAB 2023"
    pub topic: String,           // Tema
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTile {
    pub id: u32,
    pub title: &'static str,
    pub active: bool,
    pub icon: &'static str,
    pub function_name: &'static str,
    pub external_link: Option<String>,
}

impl NavigationTile {
    /// Link externo utilizável (ausente ou vazio conta como sem link).
    pub fn external_link(&self) -> Option<&str> {
        self.external_link
            .as_deref()
            .filter(|link| !link.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Function(String),
}
