//! Common type aliases used throughout the engine.

/// Search depth, counted in plies from the root.
pub type Depth = u32;

/// Search score. Disc counts, disc differences and heuristic values all share this type.
pub type Score = i32;
