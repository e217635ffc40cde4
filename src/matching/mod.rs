mod fuzzy;
mod normalize;

pub use fuzzy::{MatchKind, MatchOutcome, find_match, matches};
pub use normalize::normalize;
