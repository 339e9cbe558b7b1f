//! Spanish response texts
//!
//! Fixed replies, random pools and the formatters that turn collaborator
//! results into sentences.

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::calculator::format_number;
use super::services::{Article, GeoLocation, NewsSource, Place, WeatherReport};

pub const NOT_ACTIVATED: &str = "Di 'Baro' o 'Varo' al inicio para activarme.";

pub const HELP: &str = "¿En qué puedo ayudarte? Puedes preguntarme sobre cualquier tema, el clima, noticias, hacer cálculos y mucho más.";

pub const LEARN_NO_COLON: &str =
    "Para enseñarme algo nuevo, usa este formato: 'Baro aprende [tema]: [información]'.";

pub const LEARN_EMPTY_PART: &str = "Para enseñarme, di: 'Baro aprende [tema]: [información]'. Por ejemplo: 'Baro aprende python: es un lenguaje de programación'.";

pub const LEARN_FAILED: &str = "No pude guardar lo que me enseñaste. Intenta de nuevo.";

pub const GREETINGS: &[&str] = &[
    "¡Hola! ¿En qué puedo ayudarte hoy?",
    "¡Hola! Soy Baro, tu asistente. ¿Qué necesitas?",
    "¡Hola! Estoy aquí para ayudarte. ¿Qué te gustaría saber?",
    "¡Hola! Es un placer saludarte. ¿En qué puedo asistirte?",
];

pub const FAREWELLS: &[&str] = &[
    "¡Hasta luego! Que tengas un excelente día.",
    "¡Adiós! Fue un placer ayudarte.",
    "¡Hasta pronto! Vuelve cuando me necesites.",
    "¡Chau! Cuídate mucho.",
];

pub const IDENTITY: &str = "Soy Baro, tu asistente de voz inteligente, similar a Alexa. Puedo ayudarte con información, clima, noticias, cálculos, búsquedas en internet, reproducir música, contar chistes y mucho más. Tengo capacidad de aprender cosas nuevas que me enseñes. ¿En qué puedo ayudarte?";

pub const JOKES: &[&str] = &[
    "¿Por qué el libro de matemáticas está triste? Porque tiene muchos problemas.",
    "¿Qué hace una abeja en el gimnasio? ¡Zumba!",
    "¿Por qué los pájaros no usan Facebook? Porque ya tienen Twitter.",
    "¿Qué le dice un 0 a un 8? Bonito cinturón.",
    "¿Por qué el programador se fue al médico? Porque tenía un virus... ¡y no era de computadora!",
    "¿Cómo se llama el campeón de apnea japonés? Tokofondo.",
    "¿Qué le dice una iguana a su hermana gemela? Iguanita tú.",
    "¿Por qué el tomate se sonroja? Porque ve a la ensalada sin vestir.",
    "¿Qué le dice una pared a otra pared? Nos vemos en la esquina.",
    "¿Cuál es el colmo de un electricista? Que su esposa se llame Luz y sus hijos le sigan la corriente.",
    "¿Qué le dice el número 3 al número 30? Para ser como yo, tienes que ser sincero.",
    "¿Por qué la escoba está feliz? Porque se barre de la risa.",
    "¿Cómo se despiden los químicos? Ácido un placer.",
    "¿Qué hace un perro con un taladro? Taladrando.",
    "¿Cuál es el café más peligroso del mundo? El ex-preso.",
];

pub const WEATHER_UNAVAILABLE: &str =
    "No pude conectarme al servicio de clima. Revisa tu conexión a internet.";

pub const SEARCH_PROMPT: &str = "¿Qué quieres que busque en internet?";

pub const YOUTUBE_HOME: &str = "Abriendo YouTube.";

pub const BROWSER_OPENED: &str = "Abriendo el navegador web.";

pub const CALCULATOR_LAUNCHED: &str = "Abriendo la calculadora.";

pub const WEB_CALCULATOR_OPENED: &str = "Abriendo calculadora web.";

pub const NEWS_EMPTY: &str = "No pude obtener noticias en este momento. Intenta más tarde.";

pub const NEWS_UNAVAILABLE: &str = "Error al conectar con el servicio de noticias.";

pub const PLACE_PROMPT: &str =
    "¿Qué ubicación quieres buscar? Por ejemplo: 'dónde queda el museo del Prado'.";

pub const PLACE_UNAVAILABLE: &str = "No pude buscar esa ubicación. Verifica tu conexión.";

pub const TRANSLATE_PENDING: &str = "La función de traducción estará disponible pronto. Por ahora puedes usar Google Translate en tu navegador.";

pub const QUESTION_UNCLEAR: &str = "No entendí tu pregunta. ¿Podrías reformularla? Por ejemplo: '¿Qué es la inteligencia artificial?' o '¿Quién fue Einstein?'";

pub const ENCYCLOPEDIA_INVALID_TOPIC: &str = "Necesito un tema válido para buscar en Wikipedia.";

pub const ENCYCLOPEDIA_ERROR: &str = "Hubo un error al buscar en Wikipedia. Intenta de nuevo.";

pub const CAPABILITIES: &str = "No estoy seguro de qué me preguntas. Puedes: pedirme la hora, el clima, noticias, que busque en internet, reproduzca música, cuente un chiste, haga cálculos, o preguntarme sobre cualquier tema. También puedo aprender: di 'Baro aprende [tema]: [información]'.";

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const CONDITIONS: &[(&str, &str)] = &[
    ("Sunny", "soleado"),
    ("Clear", "despejado"),
    ("Partly cloudy", "parcialmente nublado"),
    ("Cloudy", "nublado"),
    ("Overcast", "muy nublado"),
    ("Mist", "neblina"),
    ("Fog", "niebla"),
    ("Light rain", "lluvia ligera"),
    ("Rain", "lluvia"),
    ("Heavy rain", "lluvia fuerte"),
    ("Thunderstorm", "tormenta"),
    ("Snow", "nieve"),
];

/// Capitalize the first letter of every word
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

pub fn time(now: NaiveDateTime) -> String {
    format!(
        "Son las {} ({}).",
        now.format("%H:%M"),
        now.format("%I:%M %p")
    )
}

pub fn date(now: NaiveDateTime) -> String {
    let weekday = WEEKDAYS[now.weekday().num_days_from_monday() as usize];
    let month = MONTHS[now.month0() as usize];
    format!("Hoy es {}, {} de {} de {}.", weekday, now.day(), month, now.year())
}

/// Spanish name for a provider condition; unknown ones are lower-cased
pub fn translate_condition(condition: &str) -> String {
    CONDITIONS
        .iter()
        .find(|(en, _)| *en == condition)
        .map(|(_, es)| es.to_string())
        .unwrap_or_else(|| condition.to_lowercase())
}

pub fn weather(location: &str, report: &WeatherReport) -> String {
    format!(
        "El clima en {}: {}°C (sensación térmica {}°C), {}, humedad {}%.",
        title_case(location),
        report.temp_c,
        report.feels_like_c,
        translate_condition(&report.condition),
        report.humidity
    )
}

pub fn weather_not_found(location: &str) -> String {
    format!(
        "No pude obtener el clima de '{}'. Verifica el nombre de la ciudad.",
        location
    )
}

pub fn search_opened(query: &str) -> String {
    format!("Abriendo Google para buscar '{}'.", query)
}

pub fn youtube_opened(query: &str) -> String {
    format!("Abriendo YouTube para buscar '{}'.", query)
}

pub fn calculation(expression: &str, value: f64) -> String {
    format!("El resultado de {} es {}.", expression, format_number(value))
}

/// At most five headlines
pub fn news(source: NewsSource, headlines: &[String]) -> String {
    let shown: Vec<&str> = headlines.iter().take(5).map(String::as_str).collect();
    format!(
        "Últimas noticias de {}: {}.",
        source.display_name(),
        shown.join(". ")
    )
}

pub fn self_location(location: &GeoLocation) -> String {
    format!(
        "Según mi información, estás en {}. Tu zona horaria es {}.",
        location.full_location(),
        location.timezone
    )
}

pub fn place(query: &str, place: &Place) -> String {
    format!(
        "'{}' está ubicado en: {}. Coordenadas: latitud {:.4}, longitud {:.4}.",
        title_case(query),
        place.display_name,
        place.latitude,
        place.longitude
    )
}

pub fn place_not_found(query: &str) -> String {
    format!(
        "No encontré la ubicación de '{}'. Intenta ser más específico.",
        query
    )
}

/// Sentence for an encyclopedia answer
pub fn article(topic: &str, article: &Article) -> String {
    match article {
        Article::Summary(text) => text.clone(),
        Article::Ambiguous(options) => {
            let options: Vec<&str> = options.iter().take(6).map(String::as_str).collect();
            format!(
                "Encontré varias opciones para '{}'. ¿Te refieres a: {}? Especifica cuál quieres.",
                topic,
                options.join(", ")
            )
        }
        Article::Suggestions(titles) => format!(
            "No encontré '{}' exactamente, pero encontré: {}. ¿Cuál te interesa?",
            topic,
            titles.join(", ")
        ),
        Article::NotFound => format!(
            "No encontré información sobre '{}' en Wikipedia. Intenta reformular tu búsqueda.",
            topic
        ),
    }
}

/// Whether a reply is worth synthesizing as speech
pub fn should_speak(response: &str) -> bool {
    if response.chars().count() <= 10 {
        return false;
    }
    !["Di 'Baro'", "No entendí", "Error"]
        .iter()
        .any(|marker| response.contains(marker))
}
