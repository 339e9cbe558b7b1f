//! baro - Spanish voice-assistant core
//!
//! Turns a transcribed command into a reply: activation gate, intent
//! classification, query and question extraction, scored knowledge lookup
//! and an ordered rule table that routes to the handlers.
//!
//! ## Key Concepts
//!
//! - **Activation**: commands start with "baro" or "varo"
//! - **Intents**: fast-path literals, then a fuzzy synonym scan
//! - **Knowledge**: additive scoring over topic, keywords and info text
//! - **Collaborators**: weather, news, encyclopedia, places and the desktop
//!   sit behind the [`Services`] trait; everything else is pure

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod remote;

pub use crate::core::dispatch::{Dispatcher, Reply, Route, Rule};
pub use crate::core::intent::{Classification, IntentClassifier};
pub use crate::core::knowledge::{KnowledgeEntry, KnowledgeStore, MemoryKnowledge, SearchResult};
pub use crate::core::normalize::normalize;
pub use crate::core::question::{Question, QuestionExtractor};
pub use crate::core::services::{OfflineServices, Services};
pub use crate::core::storage::Storage;
pub use crate::core::tables::Intent;
pub use error::{BaroError, ServiceError};
pub use remote::HttpServices;
