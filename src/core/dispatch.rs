//! Command dispatcher
//!
//! One call per command, no state kept between calls:
//! 1. Activation gate: the lower-cased command must start with "baro" or
//!    "varo". Otherwise reply with the activation hint.
//! 2. Empty remainder: reply with the help prompt.
//! 3. Classify once, then walk [`Rule::ORDER`]. The first rule whose
//!    predicate holds produces the reply.
//! 4. Record the interaction. Log failures never change the reply.
//!
//! Collaborator failures are turned into Spanish apologies inside the rule
//! that hit them, so [`Dispatcher::handle`] always returns a reply.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use url::form_urlencoded;

use super::calculator::{ArithmeticCalculator, Calculator};
use super::intent::{Classification, IntentClassifier};
use super::knowledge::{self, KnowledgeStore};
use super::normalize::normalize;
use super::question::{leading_question_word, QuestionExtractor};
use super::responses;
use super::services::{
    Article, Clock, InteractionLog, InteractionRecord, NewsSource, RandomSource, Services,
    SystemClock, ThreadRandom, TracingLog,
};
use super::similarity::{SequenceRatio, Similarity};
use super::tables::{
    Intent, ACTIVATION_WORDS, BROWSER_LITERALS, DATE_LITERALS, LEARN_TRIGGERS, PLACE_PHRASES,
    SELF_LOCATION_PHRASES, TEMPORAL_WORDS, TIME_LITERALS,
};
use crate::error::{BaroError, ServiceError};

const GOOGLE_HOME: &str = "https://www.google.com";
const GOOGLE_SEARCH: &str = "https://www.google.com/search?q=";
const YOUTUBE_HOME: &str = "https://www.youtube.com";
const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results?search_query=";
const WEB_CALCULATOR: &str = "https://www.google.com/search?q=calculadora";

/// Handlers in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Learn,
    Greeting,
    Farewell,
    Identity,
    Time,
    Date,
    Weather,
    Search,
    Media,
    Browser,
    Calculator,
    Joke,
    News,
    SelfLocation,
    PlaceLookup,
    Translate,
    Question,
    Fallback,
}

impl Rule {
    /// Evaluation order; the first matching rule wins
    pub const ORDER: [Rule; 18] = [
        Rule::Learn,
        Rule::Greeting,
        Rule::Farewell,
        Rule::Identity,
        Rule::Time,
        Rule::Date,
        Rule::Weather,
        Rule::Search,
        Rule::Media,
        Rule::Browser,
        Rule::Calculator,
        Rule::Joke,
        Rule::News,
        Rule::SelfLocation,
        Rule::PlaceLookup,
        Rule::Translate,
        Rule::Question,
        Rule::Fallback,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Learn => "learn",
            Rule::Greeting => "greeting",
            Rule::Farewell => "farewell",
            Rule::Identity => "identity",
            Rule::Time => "time",
            Rule::Date => "date",
            Rule::Weather => "weather",
            Rule::Search => "search",
            Rule::Media => "media",
            Rule::Browser => "browser",
            Rule::Calculator => "calculator",
            Rule::Joke => "joke",
            Rule::News => "news",
            Rule::SelfLocation => "self_location",
            Rule::PlaceLookup => "place_lookup",
            Rule::Translate => "translate",
            Rule::Question => "question",
            Rule::Fallback => "fallback",
        }
    }

    /// Whether this rule handles the turn
    pub fn matches(&self, turn: &Turn) -> bool {
        let text = turn.normalized.as_str();
        let intent = turn.classification.intent;
        let contains_any = |literals: &'static [&'static str]| {
            literals.iter().any(|l| text.contains(l))
        };

        match self {
            Rule::Learn => contains_any(LEARN_TRIGGERS),
            Rule::Greeting => intent == Some(Intent::Saludo),
            Rule::Farewell => intent == Some(Intent::Despedida),
            Rule::Identity => intent == Some(Intent::Identidad),
            Rule::Time => intent == Some(Intent::Hora) || contains_any(TIME_LITERALS),
            Rule::Date => {
                intent == Some(Intent::Fecha)
                    || contains_any(DATE_LITERALS)
                    || (text.contains("dia") && text.contains("hoy"))
            }
            Rule::Weather => intent == Some(Intent::Clima),
            Rule::Search => intent == Some(Intent::Buscar),
            Rule::Media => intent == Some(Intent::Youtube),
            Rule::Browser => contains_any(BROWSER_LITERALS),
            Rule::Calculator => intent == Some(Intent::Calculadora),
            Rule::Joke => intent == Some(Intent::Chiste),
            Rule::News => intent == Some(Intent::Noticias),
            Rule::SelfLocation => contains_any(SELF_LOCATION_PHRASES),
            Rule::PlaceLookup => intent == Some(Intent::Ubicacion) || contains_any(PLACE_PHRASES),
            Rule::Translate => intent == Some(Intent::Traducir),
            Rule::Question => leading_question_word(text).is_some(),
            Rule::Fallback => true,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One activated command, ready for the rules
#[derive(Debug, Clone)]
pub struct Turn {
    /// Post-activation text, lower-cased and trimmed (accents kept)
    pub command: String,
    /// `normalize(command)`
    pub normalized: String,
    pub classification: Classification,
}

/// How a reply was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    NotActivated,
    Help,
    Rule(Rule),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::NotActivated => "not_activated",
            Route::Help => "help",
            Route::Rule(rule) => rule.name(),
        }
    }
}

/// Dispatcher output
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub response: String,
    pub intent: Option<Intent>,
    pub confidence: f64,
    pub route: Route,
}

impl Reply {
    fn early(response: &str, route: Route) -> Self {
        Self {
            response: response.to_string(),
            intent: None,
            confidence: 0.0,
            route,
        }
    }

    pub fn intent_name(&self) -> &'static str {
        self.intent.map(|i| i.name()).unwrap_or("none")
    }

    pub fn should_speak(&self) -> bool {
        responses::should_speak(&self.response)
    }
}

/// Tunables from the configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchSettings {
    /// Weather location when the command names none
    pub fallback_city: String,
    /// Knowledge threshold for recognized questions
    pub question_threshold: f64,
    /// Knowledge threshold for the catch-all rule
    pub fallback_threshold: f64,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            fallback_city: "La Habana".to_string(),
            question_threshold: knowledge::DEFAULT_THRESHOLD,
            fallback_threshold: 0.5,
        }
    }
}

/// Routes commands to handlers
pub struct Dispatcher {
    classifier: IntentClassifier,
    questions: QuestionExtractor,
    similarity: Arc<dyn Similarity>,
    knowledge: Arc<dyn KnowledgeStore>,
    services: Arc<dyn Services>,
    calculator: Arc<dyn Calculator>,
    log: Arc<dyn InteractionLog>,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    settings: DispatchSettings,
}

impl Dispatcher {
    /// Load the language tables; fails on malformed static configuration
    pub fn new(
        knowledge: Arc<dyn KnowledgeStore>,
        services: Arc<dyn Services>,
    ) -> Result<Self, BaroError> {
        Ok(Self {
            classifier: IntentClassifier::load()?,
            questions: QuestionExtractor::load()?,
            similarity: Arc::new(SequenceRatio),
            knowledge,
            services,
            calculator: Arc::new(ArithmeticCalculator),
            log: Arc::new(TracingLog),
            random: Arc::new(ThreadRandom),
            clock: Arc::new(SystemClock),
            settings: DispatchSettings::default(),
        })
    }

    pub fn with_log(mut self, log: Arc<dyn InteractionLog>) -> Self {
        self.log = log;
        self
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_calculator(mut self, calculator: Arc<dyn Calculator>) -> Self {
        self.calculator = calculator;
        self
    }

    pub fn with_settings(mut self, settings: DispatchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Handle one raw command. Never fails.
    pub fn handle(&self, raw: &str) -> Reply {
        let lowered = raw.trim().to_lowercase();
        let Some(command) = strip_activation(&lowered) else {
            return Reply::early(responses::NOT_ACTIVATED, Route::NotActivated);
        };
        if command.is_empty() {
            return Reply::early(responses::HELP, Route::Help);
        }

        let normalized = normalize(command);
        let classification = self.classifier.detect_intent(&normalized);
        let turn = Turn {
            command: command.to_string(),
            normalized,
            classification,
        };

        let rule = Rule::ORDER
            .into_iter()
            .find(|r| r.matches(&turn))
            .unwrap_or(Rule::Fallback);
        debug!(
            rule = %rule,
            intent = classification.intent_name(),
            confidence = classification.confidence,
            "dispatch"
        );

        let response = self.apply(rule, &turn);
        self.record(&turn, &response);

        Reply {
            response,
            intent: classification.intent,
            confidence: classification.confidence,
            route: Route::Rule(rule),
        }
    }

    fn apply(&self, rule: Rule, turn: &Turn) -> String {
        match rule {
            Rule::Learn => self.learn(&turn.command),
            Rule::Greeting => self.pick(responses::GREETINGS),
            Rule::Farewell => self.pick(responses::FAREWELLS),
            Rule::Identity => responses::IDENTITY.to_string(),
            Rule::Time => responses::time(self.clock.now()),
            Rule::Date => responses::date(self.clock.now()),
            Rule::Weather => self.weather(turn),
            Rule::Search => self.search(turn),
            Rule::Media => self.media(turn),
            Rule::Browser => {
                self.services.browse(GOOGLE_HOME);
                responses::BROWSER_OPENED.to_string()
            }
            Rule::Calculator => self.calculate(turn),
            Rule::Joke => self.pick(responses::JOKES),
            Rule::News => self.news(turn),
            Rule::SelfLocation => responses::self_location(&self.services.geolocate()),
            Rule::PlaceLookup => self.place(turn),
            Rule::Translate => responses::TRANSLATE_PENDING.to_string(),
            Rule::Question => self.question(turn),
            Rule::Fallback => self.fallback(turn),
        }
    }

    fn pick(&self, pool: &[&str]) -> String {
        let index = self.random.index(pool.len());
        pool.get(index).or(pool.first()).copied().unwrap_or_default().to_string()
    }

    fn query(&self, turn: &Turn, intent: Intent) -> String {
        self.classifier.extract_query(&turn.normalized, Some(intent))
    }

    fn learn(&self, command: &str) -> String {
        let Some((topic_part, info)) = command.split_once(':') else {
            return responses::LEARN_NO_COLON.to_string();
        };
        let topic = LEARN_TRIGGERS
            .iter()
            .fold(topic_part.to_string(), |acc, t| acc.replace(t, ""));
        let (topic, info) = (topic.trim(), info.trim());
        if topic.is_empty() || info.is_empty() {
            return responses::LEARN_EMPTY_PART.to_string();
        }

        match knowledge::learn(self.knowledge.as_ref(), topic, info) {
            Ok(confirmation) => confirmation,
            Err(e) => {
                warn!(topic, error = %e, "failed to store taught entry");
                responses::LEARN_FAILED.to_string()
            }
        }
    }

    fn weather(&self, turn: &Turn) -> String {
        let mut location = self.query(turn, Intent::Clima);
        if location.is_empty() || TEMPORAL_WORDS.contains(&location.as_str()) {
            location = self.settings.fallback_city.clone();
        }

        match self.services.weather(&location) {
            Ok(report) => responses::weather(&location, &report),
            Err(ServiceError::NotFound(_)) => responses::weather_not_found(&location),
            Err(e) => {
                warn!(location = %location, error = %e, "weather lookup failed");
                responses::WEATHER_UNAVAILABLE.to_string()
            }
        }
    }

    fn search(&self, turn: &Turn) -> String {
        let query = self.query(turn, Intent::Buscar);
        if query.is_empty() {
            return responses::SEARCH_PROMPT.to_string();
        }
        self.services
            .browse(&format!("{}{}", GOOGLE_SEARCH, encode(&query)));
        responses::search_opened(&query)
    }

    fn media(&self, turn: &Turn) -> String {
        let query = self.query(turn, Intent::Youtube);
        if query.is_empty() {
            self.services.browse(YOUTUBE_HOME);
            return responses::YOUTUBE_HOME.to_string();
        }
        self.services
            .browse(&format!("{}{}", YOUTUBE_SEARCH, encode(&query)));
        responses::youtube_opened(&query)
    }

    fn calculate(&self, turn: &Turn) -> String {
        let expression = self.query(turn, Intent::Calculadora);
        if let Some(value) = self.calculator.evaluate(&expression) {
            return responses::calculation(&expression, value);
        }

        debug!(expression = %expression, "not a plain arithmetic expression");
        match self.services.launch_calculator() {
            Ok(()) => responses::CALCULATOR_LAUNCHED.to_string(),
            Err(e) => {
                debug!(error = %e, "desktop calculator unavailable");
                self.services.browse(WEB_CALCULATOR);
                responses::WEB_CALCULATOR_OPENED.to_string()
            }
        }
    }

    fn news(&self, turn: &Turn) -> String {
        let source = NewsSource::from_hint(&turn.normalized);
        match self.services.news(source) {
            Ok(headlines) if !headlines.is_empty() => responses::news(source, &headlines),
            Ok(_) | Err(ServiceError::NotFound(_)) => responses::NEWS_EMPTY.to_string(),
            Err(e) => {
                warn!(source = source.id(), error = %e, "news lookup failed");
                responses::NEWS_UNAVAILABLE.to_string()
            }
        }
    }

    fn place(&self, turn: &Turn) -> String {
        let query = self.query(turn, Intent::Ubicacion);
        if query.is_empty() {
            return responses::PLACE_PROMPT.to_string();
        }

        match self.services.place_lookup(&query) {
            Ok(Some(place)) => responses::place(&query, &place),
            Ok(None) | Err(ServiceError::NotFound(_)) => responses::place_not_found(&query),
            Err(e) => {
                warn!(query = %query, error = %e, "place lookup failed");
                responses::PLACE_UNAVAILABLE.to_string()
            }
        }
    }

    fn question(&self, turn: &Turn) -> String {
        let Some(question) = self.questions.detect(&turn.normalized) else {
            return responses::QUESTION_UNCLEAR.to_string();
        };
        debug!(kind = %question.kind, topic = %question.topic, "question");

        if let Some(info) = self.known(&question.topic, self.settings.question_threshold) {
            return info;
        }
        match self.encyclopedia(&question.topic) {
            Ok(article) => responses::article(&question.topic, &article),
            Err(text) => text,
        }
    }

    fn fallback(&self, turn: &Turn) -> String {
        if let Some(info) = self.known(&turn.command, self.settings.fallback_threshold) {
            return info;
        }
        match self.encyclopedia(&turn.command) {
            Ok(article @ (Article::Summary(_) | Article::Ambiguous(_))) => {
                responses::article(&turn.command, &article)
            }
            _ => responses::CAPABILITIES.to_string(),
        }
    }

    /// Stored info for `query`; storage errors count as a miss
    fn known(&self, query: &str, threshold: f64) -> Option<String> {
        match knowledge::scored_search(
            self.knowledge.as_ref(),
            query,
            threshold,
            self.similarity.as_ref(),
        ) {
            Ok(hit) => hit.map(|r| r.info),
            Err(e) => {
                warn!(query, error = %e, "knowledge search failed");
                None
            }
        }
    }

    /// Encyclopedia article, or the apology to show instead
    fn encyclopedia(&self, topic: &str) -> Result<Article, String> {
        if topic.trim().chars().count() < 2 {
            return Err(responses::ENCYCLOPEDIA_INVALID_TOPIC.to_string());
        }
        match self.services.encyclopedia(topic) {
            Ok(article) => Ok(article),
            Err(ServiceError::NotFound(_)) => Ok(Article::NotFound),
            Err(e) => {
                warn!(topic, error = %e, "encyclopedia lookup failed");
                Err(responses::ENCYCLOPEDIA_ERROR.to_string())
            }
        }
    }

    fn record(&self, turn: &Turn, response: &str) {
        let record = InteractionRecord::new(
            turn.command.as_str(),
            response,
            turn.classification.intent_name(),
            turn.classification.confidence,
        );
        if let Err(e) = self.log.record(&record) {
            warn!(error = %e, "failed to record interaction");
        }
    }
}

/// Command after the activation word, if it has one
fn strip_activation(lowered: &str) -> Option<&str> {
    ACTIVATION_WORDS
        .iter()
        .find_map(|word| lowered.strip_prefix(word))
        .map(str::trim)
}

fn encode(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge::{KnowledgeEntry, MemoryKnowledge};
    use crate::core::services::{
        FixedClock, GeoLocation, OfflineServices, Place, SequentialRandom, WeatherReport,
    };
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use parking_lot::Mutex;

    /// Scripted collaborators that remember what they were asked
    #[derive(Default)]
    struct FakeServices {
        weather: Option<Result<WeatherReport, ServiceError>>,
        news: Option<Result<Vec<String>, ServiceError>>,
        article: Option<Result<Article, ServiceError>>,
        place: Option<Result<Option<Place>, ServiceError>>,
        calculator_ok: bool,
        calls: Mutex<Vec<String>>,
        browsed: Mutex<Vec<String>>,
    }

    impl FakeServices {
        fn call(&self, what: String) {
            self.calls.lock().push(what);
        }

        fn unavailable() -> ServiceError {
            ServiceError::Unavailable("test".to_string())
        }
    }

    impl Services for FakeServices {
        fn weather(&self, location: &str) -> Result<WeatherReport, ServiceError> {
            self.call(format!("weather:{}", location));
            self.weather.clone().unwrap_or_else(|| Err(Self::unavailable()))
        }

        fn news(&self, source: NewsSource) -> Result<Vec<String>, ServiceError> {
            self.call(format!("news:{}", source.id()));
            self.news.clone().unwrap_or_else(|| Err(Self::unavailable()))
        }

        fn encyclopedia(&self, topic: &str) -> Result<Article, ServiceError> {
            self.call(format!("encyclopedia:{}", topic));
            self.article.clone().unwrap_or_else(|| Err(Self::unavailable()))
        }

        fn place_lookup(&self, query: &str) -> Result<Option<Place>, ServiceError> {
            self.call(format!("place:{}", query));
            self.place.clone().unwrap_or_else(|| Err(Self::unavailable()))
        }

        fn geolocate(&self) -> GeoLocation {
            GeoLocation::fallback()
        }

        fn browse(&self, url: &str) {
            self.browsed.lock().push(url.to_string());
        }

        fn launch_calculator(&self) -> Result<(), ServiceError> {
            self.call("calculator".to_string());
            if self.calculator_ok {
                Ok(())
            } else {
                Err(Self::unavailable())
            }
        }
    }

    #[derive(Default)]
    struct MemoryLog {
        records: Mutex<Vec<InteractionRecord>>,
    }

    impl InteractionLog for MemoryLog {
        fn record(&self, record: &InteractionRecord) -> Result<()> {
            self.records.lock().push(record.clone());
            Ok(())
        }
    }

    struct BrokenLog;

    impl InteractionLog for BrokenLog {
        fn record(&self, _record: &InteractionRecord) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    struct Harness {
        dispatcher: Dispatcher,
        services: Arc<FakeServices>,
        knowledge: Arc<MemoryKnowledge>,
        log: Arc<MemoryLog>,
    }

    fn harness_with(services: FakeServices, knowledge: MemoryKnowledge) -> Harness {
        let services = Arc::new(services);
        let knowledge = Arc::new(knowledge);
        let log = Arc::new(MemoryLog::default());
        let clock = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 0)
            .unwrap();
        let dispatcher = Dispatcher::new(knowledge.clone(), services.clone())
            .unwrap()
            .with_log(log.clone())
            .with_random(Arc::new(SequentialRandom::default()))
            .with_clock(Arc::new(FixedClock(clock)));
        Harness {
            dispatcher,
            services,
            knowledge,
            log,
        }
    }

    fn harness(services: FakeServices) -> Harness {
        harness_with(services, MemoryKnowledge::seeded())
    }

    fn ask(h: &Harness, text: &str) -> Reply {
        h.dispatcher.handle(text)
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(Rule::ORDER.first(), Some(&Rule::Learn));
        assert_eq!(Rule::ORDER.last(), Some(&Rule::Fallback));
        let pos = |r: Rule| Rule::ORDER.iter().position(|x| *x == r).unwrap();
        assert!(pos(Rule::Time) < pos(Rule::Date));
        assert!(pos(Rule::Calculator) < pos(Rule::Question));
        assert!(pos(Rule::SelfLocation) < pos(Rule::PlaceLookup));
        assert_eq!(Rule::ORDER.len(), 18);
    }

    #[test]
    fn test_not_activated() {
        let h = harness(FakeServices::default());
        for text in ["hola", "qué hora es", "", "  la baro hora"] {
            let reply = ask(&h, text);
            assert_eq!(reply.response, responses::NOT_ACTIVATED);
            assert_eq!(reply.route, Route::NotActivated);
            assert_eq!(reply.intent_name(), "none");
        }
        assert!(h.log.records.lock().is_empty());
    }

    #[test]
    fn test_activation_is_case_insensitive() {
        let h = harness(FakeServices::default());
        assert_eq!(ask(&h, "BARO hola").route, Route::Rule(Rule::Greeting));
        assert_eq!(ask(&h, "Varo hola").route, Route::Rule(Rule::Greeting));
    }

    #[test]
    fn test_help_prompt() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "varo");
        assert_eq!(reply.response, responses::HELP);
        assert_eq!(reply.route, Route::Help);
        assert_eq!(reply.intent, None);
        assert!(h.log.records.lock().is_empty());
    }

    #[test]
    fn test_greeting_from_pool() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "Baro hola");
        assert_eq!(reply.intent, Some(Intent::Saludo));
        assert!(responses::GREETINGS.contains(&reply.response.as_str()));

        let log = h.log.records.lock();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].command, "hola");
        assert_eq!(log[0].intent, "saludo");
        assert_eq!(log[0].response, reply.response);
    }

    #[test]
    fn test_pool_choice_uses_random_source() {
        let h = harness(FakeServices::default());
        assert_eq!(ask(&h, "baro hola").response, responses::GREETINGS[0]);
        assert_eq!(ask(&h, "baro hola").response, responses::GREETINGS[1]);
    }

    #[test]
    fn test_farewell_identity_joke() {
        let h = harness(FakeServices::default());
        assert!(responses::FAREWELLS.contains(&ask(&h, "baro adiós").response.as_str()));
        assert_eq!(ask(&h, "baro quién eres").response, responses::IDENTITY);
        let joke = ask(&h, "baro cuéntame un chiste");
        assert_eq!(joke.route, Route::Rule(Rule::Joke));
        assert!(responses::JOKES.contains(&joke.response.as_str()));
    }

    #[test]
    fn test_time_fast_path() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "baro qué hora es");
        assert_eq!(reply.intent, Some(Intent::Hora));
        assert_eq!(reply.confidence, 0.95);
        assert_eq!(reply.response, "Son las 14:07 (02:07 PM).");
    }

    #[test]
    fn test_date() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "baro qué día es hoy");
        assert_eq!(reply.route, Route::Rule(Rule::Date));
        assert_eq!(reply.response, "Hoy es martes, 5 de marzo de 2024.");
    }

    #[test]
    fn test_weather_with_location() {
        let h = harness(FakeServices {
            weather: Some(Ok(WeatherReport {
                temp_c: "18".to_string(),
                feels_like_c: "17".to_string(),
                humidity: "40".to_string(),
                condition: "Clear".to_string(),
            })),
            ..Default::default()
        });
        let reply = ask(&h, "baro clima madrid");
        assert_eq!(reply.route, Route::Rule(Rule::Weather));
        assert_eq!(
            reply.response,
            "El clima en Madrid: 18°C (sensación térmica 17°C), despejado, humedad 40%."
        );
        assert_eq!(*h.services.calls.lock(), vec!["weather:madrid"]);
    }

    #[test]
    fn test_weather_defaults_to_fallback_city() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "baro clima");
        assert_eq!(reply.response, responses::WEATHER_UNAVAILABLE);
        assert_eq!(*h.services.calls.lock(), vec!["weather:La Habana"]);
    }

    #[test]
    fn test_weather_temporal_word_is_no_location() {
        let h = harness(FakeServices::default());
        ask(&h, "baro clima hoy");
        assert_eq!(*h.services.calls.lock(), vec!["weather:La Habana"]);
    }

    #[test]
    fn test_weather_not_found() {
        let h = harness(FakeServices {
            weather: Some(Err(ServiceError::NotFound("404".to_string()))),
            ..Default::default()
        });
        assert_eq!(
            ask(&h, "baro clima atlantida").response,
            "No pude obtener el clima de 'atlantida'. Verifica el nombre de la ciudad."
        );
    }

    #[test]
    fn test_search_opens_browser() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "baro busca recetas de pan");
        assert_eq!(reply.response, "Abriendo Google para buscar 'recetas de pan'.");
        assert_eq!(
            *h.services.browsed.lock(),
            vec!["https://www.google.com/search?q=recetas+de+pan"]
        );
    }

    #[test]
    fn test_search_without_query() {
        let h = harness(FakeServices::default());
        assert_eq!(ask(&h, "baro busca").response, responses::SEARCH_PROMPT);
        assert!(h.services.browsed.lock().is_empty());
    }

    #[test]
    fn test_media() {
        let h = harness(FakeServices::default());
        assert_eq!(
            ask(&h, "baro pon música salsa").response,
            "Abriendo YouTube para buscar 'salsa'."
        );
        assert_eq!(ask(&h, "baro youtube").response, responses::YOUTUBE_HOME);
        assert_eq!(
            *h.services.browsed.lock(),
            vec![
                "https://www.youtube.com/results?search_query=salsa",
                "https://www.youtube.com"
            ]
        );
    }

    #[test]
    fn test_browser_literal() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "baro abre el navegador");
        assert_eq!(reply.route, Route::Rule(Rule::Browser));
        assert_eq!(*h.services.browsed.lock(), vec!["https://www.google.com"]);
    }

    #[test]
    fn test_calculator_success() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "baro cuánto es 2+2*3");
        assert_eq!(reply.response, "El resultado de 2+2*3 es 8.");
    }

    #[test]
    fn test_calculator_falls_back_to_web() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "Baro cuánto es 25 por 8");
        assert_eq!(reply.intent, Some(Intent::Calculadora));
        assert!((reply.confidence - 0.5).abs() < 1e-9);
        assert_eq!(reply.response, responses::WEB_CALCULATOR_OPENED);
        assert_eq!(*h.services.calls.lock(), vec!["calculator"]);
        assert_eq!(
            *h.services.browsed.lock(),
            vec!["https://www.google.com/search?q=calculadora"]
        );
    }

    #[test]
    fn test_calculator_launches_desktop_app() {
        let h = harness(FakeServices {
            calculator_ok: true,
            ..Default::default()
        });
        let reply = ask(&h, "baro cuánto es 25 por 8");
        assert_eq!(reply.response, responses::CALCULATOR_LAUNCHED);
        assert!(h.services.browsed.lock().is_empty());
    }

    #[test]
    fn test_news() {
        let h = harness(FakeServices {
            news: Some(Ok(vec!["Uno".to_string(), "Dos".to_string()])),
            ..Default::default()
        });
        let reply = ask(&h, "baro noticias de la bbc");
        assert_eq!(reply.response, "Últimas noticias de BBC: Uno. Dos.");
        assert_eq!(*h.services.calls.lock(), vec!["news:bbc"]);
    }

    #[test]
    fn test_news_failures() {
        let h = harness(FakeServices {
            news: Some(Ok(vec![])),
            ..Default::default()
        });
        assert_eq!(ask(&h, "baro noticias").response, responses::NEWS_EMPTY);

        let h = harness(FakeServices::default());
        assert_eq!(ask(&h, "baro noticias").response, responses::NEWS_UNAVAILABLE);
    }

    #[test]
    fn test_self_location() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "baro ¿dónde estoy?");
        assert_eq!(reply.route, Route::Rule(Rule::SelfLocation));
        assert_eq!(
            reply.response,
            "Según mi información, estás en La Habana, Cuba. Tu zona horaria es America/Havana."
        );
    }

    #[test]
    fn test_place_lookup() {
        let h = harness(FakeServices {
            place: Some(Ok(Some(Place {
                display_name: "Museo del Prado, Madrid".to_string(),
                latitude: 40.41378,
                longitude: -3.69213,
            }))),
            ..Default::default()
        });
        let reply = ask(&h, "baro dónde queda el museo del prado");
        assert_eq!(reply.route, Route::Rule(Rule::PlaceLookup));
        assert_eq!(
            reply.response,
            "'El Museo Del Prado' está ubicado en: Museo del Prado, Madrid. Coordenadas: latitud 40.4138, longitud -3.6921."
        );
    }

    #[test]
    fn test_place_lookup_misses() {
        let h = harness(FakeServices {
            place: Some(Ok(None)),
            ..Default::default()
        });
        assert_eq!(
            ask(&h, "baro dónde queda atlantida").response,
            "No encontré la ubicación de 'atlantida'. Intenta ser más específico."
        );

        let h = harness(FakeServices::default());
        assert_eq!(ask(&h, "baro dónde queda").response, responses::PLACE_PROMPT);
        assert_eq!(
            ask(&h, "baro dónde queda atlantida").response,
            responses::PLACE_UNAVAILABLE
        );
    }

    #[test]
    fn test_translate() {
        let h = harness(FakeServices::default());
        assert_eq!(ask(&h, "baro traduce hola").response, responses::TRANSLATE_PENDING);
    }

    #[test]
    fn test_question_uses_knowledge() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "baro ¿qué es Python?");
        assert_eq!(reply.route, Route::Rule(Rule::Question));
        assert!(reply.response.starts_with("Python es un lenguaje"));
        assert!(h.services.calls.lock().is_empty());
    }

    #[test]
    fn test_question_falls_back_to_encyclopedia() {
        let h = harness_with(
            FakeServices {
                article: Some(Ok(Article::Summary("La fotosíntesis es...".to_string()))),
                ..Default::default()
            },
            MemoryKnowledge::default(),
        );
        let reply = ask(&h, "baro qué es la fotosíntesis");
        assert_eq!(reply.response, "La fotosíntesis es...");
        assert_eq!(*h.services.calls.lock(), vec!["encyclopedia:la fotosintesis"]);
    }

    #[test]
    fn test_question_encyclopedia_error() {
        let h = harness_with(FakeServices::default(), MemoryKnowledge::default());
        assert_eq!(
            ask(&h, "baro qué es la fotosíntesis").response,
            responses::ENCYCLOPEDIA_ERROR
        );
    }

    #[test]
    fn test_question_without_topic() {
        let h = harness(FakeServices::default());
        assert_eq!(ask(&h, "baro qué").response, responses::QUESTION_UNCLEAR);
    }

    #[test]
    fn test_fallback_uses_knowledge() {
        let h = harness(FakeServices::default());
        let reply = ask(&h, "Baro Python");
        assert_eq!(reply.route, Route::Rule(Rule::Fallback));
        assert!(reply.response.starts_with("Python es un lenguaje"));
    }

    #[test]
    fn test_fallback_encyclopedia_summary() {
        let h = harness_with(
            FakeServices {
                article: Some(Ok(Article::Summary("Un volcán...".to_string()))),
                ..Default::default()
            },
            MemoryKnowledge::default(),
        );
        assert_eq!(ask(&h, "baro volcanes").response, "Un volcán...");
    }

    #[test]
    fn test_fallback_capabilities() {
        let h = harness_with(
            FakeServices {
                article: Some(Ok(Article::Suggestions(vec!["Xyz".to_string()]))),
                ..Default::default()
            },
            MemoryKnowledge::default(),
        );
        assert_eq!(ask(&h, "baro xyzzy").response, responses::CAPABILITIES);

        let h = harness_with(FakeServices::default(), MemoryKnowledge::default());
        assert_eq!(ask(&h, "baro xyzzy").response, responses::CAPABILITIES);
    }

    #[test]
    fn test_learn_round_trip() {
        let h = harness_with(FakeServices::default(), MemoryKnowledge::default());
        let reply = ask(&h, "baro aprende zeta: info-z");
        assert_eq!(reply.route, Route::Rule(Rule::Learn));
        assert_eq!(
            reply.response,
            "¡Perfecto! Aprendí sobre 'zeta'. Ahora puedes preguntarme sobre esto cuando quieras."
        );
        assert_eq!(ask(&h, "baro zeta").response, "info-z");

        ask(&h, "baro recuerda zeta: info-z2");
        assert_eq!(h.knowledge.len(), 1);
        assert_eq!(ask(&h, "baro zeta").response, "info-z2");
    }

    #[test]
    fn test_learn_usage_hints() {
        let h = harness(FakeServices::default());
        assert_eq!(ask(&h, "baro aprende zeta").response, responses::LEARN_NO_COLON);
        assert_eq!(ask(&h, "baro aprende : algo").response, responses::LEARN_EMPTY_PART);
        assert_eq!(ask(&h, "baro aprende zeta:").response, responses::LEARN_EMPTY_PART);
    }

    #[test]
    fn test_log_failure_is_swallowed() {
        let dispatcher = Dispatcher::new(
            Arc::new(MemoryKnowledge::seeded()),
            Arc::new(OfflineServices),
        )
        .unwrap()
        .with_log(Arc::new(BrokenLog));
        let reply = dispatcher.handle("baro quién eres");
        assert_eq!(reply.response, responses::IDENTITY);
    }

    #[test]
    fn test_custom_settings() {
        let h = harness(FakeServices::default());
        let dispatcher = Dispatcher::new(h.knowledge.clone(), h.services.clone())
            .unwrap()
            .with_settings(DispatchSettings {
                fallback_city: "Madrid".to_string(),
                ..Default::default()
            });
        dispatcher.handle("baro clima");
        assert_eq!(*h.services.calls.lock(), vec!["weather:Madrid"]);
    }

    #[test]
    fn test_every_reply_is_logged_once() {
        let h = harness(FakeServices::default());
        for text in ["baro hola", "baro noticias", "baro xyzzy", "hola", "baro"] {
            ask(&h, text);
        }
        let log = h.log.records.lock();
        assert_eq!(log.len(), 3);
        assert_eq!(log[2].intent, "none");
    }

    #[test]
    fn test_seeded_entry_beats_rule_free_text() {
        let entries = vec![KnowledgeEntry::new(
            "rust",
            "Rust es un lenguaje de sistemas.",
            "tecnologia",
            vec!["rust".to_string()],
        )];
        let h = harness_with(FakeServices::default(), MemoryKnowledge::new(entries));
        assert_eq!(ask(&h, "baro rust").response, "Rust es un lenguaje de sistemas.");
    }
}
