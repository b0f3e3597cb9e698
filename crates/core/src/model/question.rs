//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Number of questions in the survey.
pub const QUESTION_COUNT: usize = 10;

/// Number of options offered by every question.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question.
///
/// Questions are static data; their position in [`QUESTIONS`] is the key used
/// by answers, tallies, and element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    text: &'static str,
    options: [&'static str; OPTION_COUNT],
    icon: &'static str,
}

impl Question {
    #[must_use]
    pub const fn new(
        text: &'static str,
        options: [&'static str; OPTION_COUNT],
        icon: &'static str,
    ) -> Self {
        Self {
            text,
            options,
            icon,
        }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn options(&self) -> &[&'static str; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// Returns the position of `label` among this question's options.
    #[must_use]
    pub fn option_index(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|option| *option == label)
    }
}

//
// ─── CATALOG ──────────────────────────────────────────────────────────────────
//

/// The fixed survey catalog, in display order.
pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question::new(
        "¿Cuántos días a la semana asistes correctamente uniformado a la institución educativa?",
        ["1 vez", "2 veces", "3 veces", "4 o más veces"],
        "👕",
    ),
    Question::new(
        "¿Por qué razón los estudiantes llegan tarde a clases después del recreo?",
        [
            "Van al baño a última hora",
            "Se quedan en el kiosco",
            "Se quedan jugando con el balón",
            "No escuchan el timbre",
        ],
        "⏰",
    ),
    Question::new(
        "¿Cuántas veces a la semana llegas tarde a la institución educativa?",
        ["1 vez", "2 veces", "3 veces", "Todos los días"],
        "🏃",
    ),
    Question::new(
        "El día que llegaste tarde a la institución educativa, ¿cuántos minutos de tardanza tuviste?",
        [
            "Menos de 5 min",
            "De 5 a 10 min",
            "De 10 a 15 min",
            "Más de 15 min",
        ],
        "⌛",
    ),
    Question::new(
        "¿En qué medida cumples con las normas de convivencia establecidas en la hora de clase?",
        ["Siempre", "Casi siempre", "Nunca", "Casi nunca"],
        "📏",
    ),
    Question::new(
        "¿Por qué crees que los estudiantes asisten a la institución educativa con el cabello desalineado?",
        [
            "No tienen tiempo de arreglarse",
            "No respetan las normas de presentación escolar",
            "Es una moda venir sin arreglarse",
            "Quieren dar la contra a las autoridades de la I.E.",
        ],
        "💇",
    ),
    Question::new(
        "¿A qué se debe el bajo rendimiento académico en nuestra Institución Educativa?",
        [
            "No estudiamos o practicamos",
            "Desinterés",
            "Trabajo",
            "Falta de tiempo",
        ],
        "📚",
    ),
    Question::new(
        "¿Por qué motivo los estudiantes llevan celulares a la Institución Educativa?",
        [
            "Contactarme con mis compañeros",
            "Herramienta de estudio",
            "Chatear",
            "Me obligan mis padres",
        ],
        "📱",
    ),
    Question::new(
        "¿A qué se debe que la gran mayoría de los estudiantes carezcan de presentación personal?",
        [
            "Falta de tiempo",
            "Está de moda",
            "Baja autoestima",
            "Para estar a la par de mis compañeros",
        ],
        "🪞",
    ),
    Question::new(
        "¿De qué manera podríamos mantener nuestra aula limpia, ordenada y ambientada?",
        [
            "Todos colaboramos",
            "El comité de aula",
            "El personal de limpieza",
            "Nos turnamos",
        ],
        "🧹",
    ),
];

/// Looks up a question by index.
#[must_use]
pub fn question(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}
