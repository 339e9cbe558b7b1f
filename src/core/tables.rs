//! Static language tables
//!
//! Intents, their phrase variants, the fast-path literals, the question
//! words and the question patterns. Phrases are written the way users say
//! them; [`SynonymTable::load`] normalizes them once so they can be matched
//! against normalized input.

use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use crate::error::BaroError;

/// Classified purpose of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Hora,
    Fecha,
    Clima,
    Buscar,
    Youtube,
    Noticias,
    Chiste,
    Calculadora,
    Ubicacion,
    Saludo,
    Despedida,
    Identidad,
    Aprender,
    Traducir,
}

impl Intent {
    /// Declaration order, also the classifier's tie-breaking order
    pub const ALL: [Intent; 14] = [
        Intent::Hora,
        Intent::Fecha,
        Intent::Clima,
        Intent::Buscar,
        Intent::Youtube,
        Intent::Noticias,
        Intent::Chiste,
        Intent::Calculadora,
        Intent::Ubicacion,
        Intent::Saludo,
        Intent::Despedida,
        Intent::Identidad,
        Intent::Aprender,
        Intent::Traducir,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Intent::Hora => "hora",
            Intent::Fecha => "fecha",
            Intent::Clima => "clima",
            Intent::Buscar => "buscar",
            Intent::Youtube => "youtube",
            Intent::Noticias => "noticias",
            Intent::Chiste => "chiste",
            Intent::Calculadora => "calculadora",
            Intent::Ubicacion => "ubicacion",
            Intent::Saludo => "saludo",
            Intent::Despedida => "despedida",
            Intent::Identidad => "identidad",
            Intent::Aprender => "aprender",
            Intent::Traducir => "traducir",
        }
    }

    /// Raw phrase variants, as spoken
    fn phrases(&self) -> &'static [&'static str] {
        match self {
            Intent::Hora => &[
                "hora",
                "qué hora es",
                "me dices la hora",
                "dime la hora",
                "hora actual",
                "tiempo",
            ],
            Intent::Fecha => &[
                "fecha",
                "qué día es",
                "día de hoy",
                "fecha actual",
                "qué fecha",
                "calendario",
            ],
            Intent::Clima => &[
                "clima",
                "tiempo",
                "temperatura",
                "pronóstico",
                "hace calor",
                "hace frío",
                "llueve",
                "cómo está el clima",
                "qué temperatura",
            ],
            Intent::Buscar => &[
                "busca",
                "buscar",
                "búscame",
                "encuentra",
                "google",
                "investiga",
                "consulta",
                "mira en internet",
            ],
            Intent::Youtube => &[
                "youtube",
                "reproduce",
                "pon música",
                "video",
                "canción",
                "música",
            ],
            Intent::Noticias => &[
                "noticias",
                "últimas noticias",
                "qué pasó",
                "actualidad",
                "informativo",
                "novedades",
            ],
            Intent::Chiste => &[
                "chiste",
                "broma",
                "hazme reír",
                "cuéntame un chiste",
                "dime algo gracioso",
                "algo divertido",
            ],
            Intent::Calculadora => &[
                "calculadora",
                "calcula",
                "cuánto es",
                "opera",
                "haz la cuenta",
                "resultado de",
                "suma",
                "resta",
                "multiplica",
                "divide",
            ],
            Intent::Ubicacion => &[
                "dónde queda",
                "dónde está",
                "ubicación",
                "dirección",
                "localización",
                "cómo llegar",
            ],
            Intent::Saludo => &[
                "hola",
                "buenos días",
                "buenas tardes",
                "buenas noches",
                "hey",
                "qué tal",
                "saludos",
                "qué onda",
            ],
            Intent::Despedida => &[
                "adiós",
                "hasta luego",
                "chau",
                "nos vemos",
                "me voy",
                "hasta pronto",
                "bye",
            ],
            Intent::Identidad => &[
                "quién eres",
                "preséntate",
                "tu nombre",
                "qué eres",
                "cómo te llamas",
                "quién eres tú",
            ],
            Intent::Aprender => &["aprende", "recuerda", "guarda", "memoriza", "anota"],
            Intent::Traducir => &[
                "traduce",
                "tradúceme",
                "cómo se dice",
                "dime en",
                "traducción",
            ],
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Intent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Intent::ALL
            .into_iter()
            .find(|i| i.name() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown intent: {}", s))
    }
}

/// High-priority literal groups, checked before any scoring
pub const FAST_PATH: &[(Intent, &[&str])] = &[
    (
        Intent::Hora,
        &["que hora", "hora", "hora actual", "hora es", "me dices la hora"],
    ),
    (Intent::Fecha, &["fecha", "que dia", "dia de hoy"]),
    (
        Intent::Ubicacion,
        &["donde estoy", "mi ubicacion", "mi localizacion"],
    ),
];

/// Confidence reported for a fast-path hit
pub const FAST_PATH_CONFIDENCE: f64 = 0.95;

/// Wake words, checked in this order
pub const ACTIVATION_WORDS: &[&str] = &["baro", "varo"];

/// Always removed by the query extractor
pub const BASE_STOP_WORDS: &[&str] = &["baro", "varo", "por favor", "porfavor", "gracias"];

/// Leading words that mark a question, longest first so that
/// `cuales` wins over `cual`
pub const QUESTION_WORDS: &[&str] = &[
    "para que", "por que", "cuantas", "cuantos", "cuales", "cuanta", "cuanto", "cuando",
    "quien", "donde", "como", "cual", "que",
];

/// Literals that route to the time rule even without the intent
pub const TIME_LITERALS: &[&str] = &["hora", "que hora"];

/// Literals that route to the date rule even without the intent
pub const DATE_LITERALS: &[&str] = &["fecha", "que dia"];

/// Literals that open the default web page
pub const BROWSER_LITERALS: &[&str] = &["navegador", "chrome", "browser"];

/// Phrases asking for the user's own position
pub const SELF_LOCATION_PHRASES: &[&str] = &[
    "donde estoy",
    "mi ubicacion",
    "mi localizacion",
    "localizacion actual",
];

/// Phrases asking where something else is
pub const PLACE_PHRASES: &[&str] = &["donde queda", "donde esta", "ubicacion de", "como llegar"];

/// Words that trigger the learn rule
pub const LEARN_TRIGGERS: &[&str] = &["aprende", "recuerda"];

/// Weather queries that mean "here", not a city
pub const TEMPORAL_WORDS: &[&str] = &["hoy", "ahora", "actual"];

/// Kind of knowledge question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Definicion,
    Persona,
    Ubicacion,
    Tiempo,
    Procedimiento,
    Razon,
    Cantidad,
    General,
}

impl QuestionKind {
    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::Definicion => "definicion",
            QuestionKind::Persona => "persona",
            QuestionKind::Ubicacion => "ubicacion",
            QuestionKind::Tiempo => "tiempo",
            QuestionKind::Procedimiento => "procedimiento",
            QuestionKind::Razon => "razon",
            QuestionKind::Cantidad => "cantidad",
            QuestionKind::General => "general",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Question patterns in match order. The topic is the last capture group.
pub const QUESTION_PATTERNS: &[(QuestionKind, &str)] = &[
    (
        QuestionKind::Definicion,
        r"^(que es|define|definicion de|que significa|explica|explicame)\s+(.+)",
    ),
    (
        QuestionKind::Persona,
        r"^(quien es|quien fue|hablame de|cuentame sobre|info sobre)\s+(.+)",
    ),
    (
        QuestionKind::Ubicacion,
        r"^(donde|ubicacion|localizacion|direccion)\s+(esta|queda|se encuentra)\s+(.+)",
    ),
    (
        QuestionKind::Tiempo,
        r"^(cuando)\s+(fue|ocurrio|paso|es|sera)\s+(.+)",
    ),
    (
        QuestionKind::Procedimiento,
        r"^(como)\s+(se|funciona|hacer)\s+(.+)",
    ),
    (QuestionKind::Razon, r"^(por que|porque|para que|motivo)\s+(.+)"),
    (
        QuestionKind::Cantidad,
        r"^(cuanto|cuanta|cuantos|cuantas)\s+(.+)",
    ),
];

/// Normalized phrase variants per intent, in declaration order
#[derive(Debug, Clone)]
pub struct SynonymTable {
    rules: Vec<(Intent, Vec<String>)>,
}

impl SynonymTable {
    /// Normalize the built-in phrases.
    ///
    /// Fails if a phrase normalizes to nothing; an empty variant would be a
    /// substring of every input.
    pub fn load() -> Result<Self, BaroError> {
        let mut rules = Vec::with_capacity(Intent::ALL.len());
        for intent in Intent::ALL {
            let mut variants = Vec::new();
            for phrase in intent.phrases() {
                let variant = normalize(phrase);
                if variant.is_empty() {
                    return Err(BaroError::EmptySynonym(intent.name().to_string()));
                }
                variants.push(variant);
            }
            rules.push((intent, variants));
        }
        Ok(Self { rules })
    }

    /// All `(intent, variants)` rules in declaration order
    pub fn rules(&self) -> &[(Intent, Vec<String>)] {
        &self.rules
    }

    /// Variants of one intent
    pub fn variants(&self, intent: Intent) -> &[String] {
        self.rules
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_normalizes_variants() {
        let table = SynonymTable::load().unwrap();
        let hora = table.variants(Intent::Hora);
        assert!(hora.contains(&"que hora es".to_string()));
        assert!(!hora.iter().any(|v| v.contains('é')));

        let calc = table.variants(Intent::Calculadora);
        assert!(calc.contains(&"cuanto es".to_string()));
    }

    #[test]
    fn test_rules_keep_declaration_order() {
        let table = SynonymTable::load().unwrap();
        let order: Vec<Intent> = table.rules().iter().map(|(i, _)| *i).collect();
        assert_eq!(order, Intent::ALL.to_vec());
    }

    #[test]
    fn test_intent_names_roundtrip() {
        for intent in Intent::ALL {
            assert_eq!(intent.name().parse::<Intent>().unwrap(), intent);
        }
        assert_eq!("ubicación".parse::<Intent>().unwrap(), Intent::Ubicacion);
        assert!("desconocido".parse::<Intent>().is_err());
    }

    #[test]
    fn test_static_literals_are_normalized() {
        let groups = FAST_PATH.iter().flat_map(|(_, p)| p.iter());
        let literals = groups
            .chain(QUESTION_WORDS)
            .chain(SELF_LOCATION_PHRASES)
            .chain(PLACE_PHRASES)
            .chain(TIME_LITERALS)
            .chain(DATE_LITERALS);
        for literal in literals {
            assert_eq!(&normalize(literal), literal);
        }
    }

    #[test]
    fn test_question_words_longest_prefix_first() {
        for (i, a) in QUESTION_WORDS.iter().enumerate() {
            for b in &QUESTION_WORDS[i + 1..] {
                assert!(
                    !b.starts_with(a) || a == b,
                    "'{}' shadows '{}'",
                    a,
                    b
                );
            }
        }
    }
}
