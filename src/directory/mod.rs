mod search;

pub use search::{
    DEFAULT_DIRECTORY_URL, DEFAULT_SEARCH_LIMIT, DirectoryCandidate, SearchQuery,
    decode_search_response, search_show, select_candidate,
};
