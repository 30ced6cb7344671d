use std::sync::Arc;

use crate::ai::TalentAi;
use crate::config::Config;
use crate::matching::scorer::MatchScorer;
use crate::store::TalentRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TalentRepository>,
    /// Pluggable match scorer. Default: HeuristicMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    /// Resume analysis and question generation backend. Default: HeuristicTalentAi.
    pub ai: Arc<dyn TalentAi>,
    pub config: Config,
}
