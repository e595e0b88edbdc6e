use crate::model::{Level, Question};

pub const ALL_AREAS: &str = "Todas as Áreas";
pub const ALL_LEVELS: &str = "Todos os Níveis";
pub const ALL_EXAMS: &str = "Todos os Concursos";

/// Filtros escolhidos pelo usuário. `None` equivale a "Todos".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub area: Option<String>,
    pub level: Option<Level>,
    pub exam: Option<String>,
    pub search: String,
}

impl Filters {
    pub fn area_label(&self) -> &str {
        self.area.as_deref().unwrap_or(ALL_AREAS)
    }

    pub fn level_label(&self) -> &str {
        self.level.map(Level::label).unwrap_or(ALL_LEVELS)
    }

    pub fn exam_label(&self) -> &str {
        self.exam.as_deref().unwrap_or(ALL_EXAMS)
    }

    pub fn is_default(&self) -> bool {
        *self == Filters::default()
    }

    pub fn matches(&self, q: &Question) -> bool {
        let area = self.area.as_ref().is_none_or(|a| q.area == *a);
        let level = self.level.is_none_or(|l| q.level == l);
        // concurso: basta conter o texto ("OAB" casa com "OAB 2023")
        let exam = self.exam.as_ref().is_none_or(|e| q.exam.contains(e.as_str()));
        let search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            q.prompt.to_lowercase().contains(&needle) || q.topic.to_lowercase().contains(&needle)
        };

        area && level && exam && search
    }
}

/// Questões que passam em todos os filtros, na ordem original.
pub fn filter_questions<'a>(questions: &'a [Question], filters: &Filters) -> Vec<&'a Question> {
    questions.iter().filter(|q| filters.matches(q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, area: &str, level: Level, exam: &str, prompt: &str, topic: &str) -> Question {
        Question {
            id,
            area: area.into(),
            prompt: prompt.into(),
            choices: ["a".into(), "b".into(), "c".into(), "d".into()],
            correct_choice: 0,
            explanation: String::new(),
            level,
            exam: exam.into(),
            topic: topic.into(),
        }
    }

    fn fixture() -> Vec<Question> {
        vec![
            question(1, "Direito Civil", Level::Intermediate, "OAB 2023", "Capacidade civil", "Capacidade Civil"),
            question(2, "Direito Penal", Level::Basic, "Delegado 2023", "Crimes contra o patrimônio", "Crimes Patrimoniais"),
            question(3, "Direito Constitucional", Level::Intermediate, "Procurador 2023", "Constituição de 1988", "Direitos Fundamentais"),
            question(4, "Direito Penal", Level::Advanced, "OAB 2022", "Tentativa e consumação", "Iter Criminis"),
        ]
    }

    fn ids(list: &[&Question]) -> Vec<u32> {
        list.iter().map(|q| q.id).collect()
    }

    #[test]
    fn default_filters_keep_everything_in_order() {
        let qs = fixture();
        assert_eq!(ids(&filter_questions(&qs, &Filters::default())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn area_is_exact_match() {
        let qs = fixture();
        let filters = Filters {
            area: Some("Direito Penal".into()),
            ..Filters::default()
        };
        assert_eq!(ids(&filter_questions(&qs, &filters)), vec![2, 4]);

        let partial = Filters {
            area: Some("Penal".into()),
            ..Filters::default()
        };
        assert!(filter_questions(&qs, &partial).is_empty());
    }

    #[test]
    fn exam_is_substring_match() {
        let qs = fixture();
        let filters = Filters {
            exam: Some("OAB".into()),
            ..Filters::default()
        };
        assert_eq!(ids(&filter_questions(&qs, &filters)), vec![1, 4]);
    }

    #[test]
    fn search_is_case_insensitive_on_prompt_or_topic() {
        let qs = fixture();
        let by_prompt = Filters {
            search: "CONSTITUIÇÃO".into(),
            ..Filters::default()
        };
        assert_eq!(ids(&filter_questions(&qs, &by_prompt)), vec![3]);

        let by_topic = Filters {
            search: "iter crim".into(),
            ..Filters::default()
        };
        assert_eq!(ids(&filter_questions(&qs, &by_topic)), vec![4]);
    }

    #[test]
    fn all_predicates_are_combined() {
        let qs = fixture();
        let filters = Filters {
            area: Some("Direito Penal".into()),
            level: Some(Level::Advanced),
            exam: Some("OAB".into()),
            search: "tentativa".into(),
        };
        assert_eq!(ids(&filter_questions(&qs, &filters)), vec![4]);

        let none = Filters {
            level: Some(Level::Basic),
            exam: Some("OAB".into()),
            ..Filters::default()
        };
        assert!(filter_questions(&qs, &none).is_empty());
    }

    #[test]
    fn labels_fall_back_to_sentinels() {
        let filters = Filters::default();
        assert_eq!(filters.area_label(), ALL_AREAS);
        assert_eq!(filters.level_label(), ALL_LEVELS);
        assert_eq!(filters.exam_label(), ALL_EXAMS);
        assert!(filters.is_default());

        let filters = Filters {
            level: Some(Level::Advanced),
            ..Filters::default()
        };
        assert_eq!(filters.level_label(), "Avançado");
    }
}
