//! Shared engine for the HR Desk assistant.
//!
//! Routes free-text questions either to a live backend query or to the static
//! knowledge base, and renders the answer plus follow-up suggestions.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod conversation;
pub mod endpoints;
pub mod error;
pub mod extract;
pub mod knowledge;
pub mod router;
pub mod synthesizer;
pub mod types;

pub use classifier::{ClassifiedResponse, IntentClassifier, IntentKind};
pub use config::HrDeskConfig;
pub use conversation::{ConversationService, TurnOutcome, TurnResult};
pub use endpoints::{EndpointRegistry, FakeEndpointRegistry, HttpEndpointRegistry};
pub use error::{EndpointError, HrDeskError};
pub use knowledge::{ModuleInfo, Workflow};
pub use router::{QueryMatch, QueryRouter};
pub use synthesizer::{ResponseSynthesizer, SynthesizedResponse};
pub use types::{
    DateRange, HyperResponse, Message, QueryCategory, QueryParams, QueryType, ResponseMeta,
    Role, TimePeriod,
};
