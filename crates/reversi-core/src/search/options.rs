use std::fmt;
use std::str::FromStr;

use crate::types::Depth;

/// Default cutoff depth.
pub const DEFAULT_MAX_DEPTH: Depth = 5;

/// Selects how the search expands and scores nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchRules {
    /// Reproduces the classic engine move for move.
    ///
    /// - The color expanded at a node is `node.turn` when maximizing and its opposite
    ///   when minimizing.
    /// - Cutoff nodes are scored for `node.turn`.
    /// - Dead ends score the raw disc count of `node.turn` (negated when minimizing).
    /// - Only the maximizing branch prunes.
    /// - An expanded minimizing node is worth 0. Its children are still searched and
    ///   still tighten `beta`, but their values never reach the parent.
    #[default]
    Classic,
    /// Textbook two-player minimax.
    ///
    /// - The color expanded at a node is always `node.turn`; a side without moves passes.
    /// - Every value is taken from the root mover's perspective.
    /// - Finished games score the exact disc difference.
    /// - Both branches prune.
    Standard,
}

impl fmt::Display for SearchRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchRules::Classic => write!(f, "classic"),
            SearchRules::Standard => write!(f, "standard"),
        }
    }
}

impl FromStr for SearchRules {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(SearchRules::Classic),
            "standard" => Ok(SearchRules::Standard),
            _ => Err(format!("Unknown search rules '{s}': expected classic or standard")),
        }
    }
}

/// Parameters of a search run, owned by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Deepest ply that is still expanded. Nodes below it are scored by the heuristic.
    pub max_depth: Depth,
    pub rules: SearchRules,
}

impl SearchOptions {
    /// Create search options with the given cutoff depth and classic rules.
    #[must_use]
    pub fn new(max_depth: Depth) -> Self {
        SearchOptions {
            max_depth,
            ..Default::default()
        }
    }

    /// Search without a cutoff: every line is played out to the end of the game.
    #[must_use]
    pub fn unlimited() -> Self {
        SearchOptions::new(Depth::MAX)
    }

    /// Build options from a signed cutoff where any negative value means unlimited.
    #[must_use]
    pub fn from_cutoff(cutoff: i64) -> Self {
        // Cutoffs too large for `Depth` are unreachable anyway.
        Depth::try_from(cutoff)
            .map(SearchOptions::new)
            .unwrap_or_else(|_| SearchOptions::unlimited())
    }

    #[must_use]
    pub fn with_rules(mut self, rules: SearchRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns `true` if the search has no cutoff depth.
    pub fn is_unlimited(&self) -> bool {
        self.max_depth == Depth::MAX
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            rules: SearchRules::default(),
        }
    }
}
