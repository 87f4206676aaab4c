use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::MatchScorer;
use crate::matching::vocabulary::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum
/// extractors. Immutable after startup — requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Injectable skill vocabulary — file-backed via SKILL_VOCAB_FILE, or
    /// the built-in list.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable match scorer. Default: KeywordMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
