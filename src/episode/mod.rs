mod resolve;

pub use resolve::{DEFAULT_HINT_LIMIT, episode_hints, resolve_episode};
