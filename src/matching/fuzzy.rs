use super::normalize::normalize;

/// Which selection tier produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Normalized texts are equal
    Exact,
    /// One normalized text contains the other
    Fuzzy,
    /// Nothing matched; the first candidate was taken as-is
    FirstOfList,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy => "fuzzy",
            MatchKind::FirstOfList => "first result",
        }
    }
}

/// Result of selecting a candidate for a target text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<T> {
    Exact(T),
    Fuzzy(T),
    FirstOfList(T),
    NoMatch,
}

impl<T> MatchOutcome<T> {
    pub fn kind(&self) -> Option<MatchKind> {
        match self {
            MatchOutcome::Exact(_) => Some(MatchKind::Exact),
            MatchOutcome::Fuzzy(_) => Some(MatchKind::Fuzzy),
            MatchOutcome::FirstOfList(_) => Some(MatchKind::FirstOfList),
            MatchOutcome::NoMatch => None,
        }
    }

    /// The matched value, if any, regardless of tier
    pub fn into_match(self) -> Option<T> {
        match self {
            MatchOutcome::Exact(m) | MatchOutcome::Fuzzy(m) | MatchOutcome::FirstOfList(m) => {
                Some(m)
            }
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> MatchOutcome<U> {
        match self {
            MatchOutcome::Exact(m) => MatchOutcome::Exact(f(m)),
            MatchOutcome::Fuzzy(m) => MatchOutcome::Fuzzy(f(m)),
            MatchOutcome::FirstOfList(m) => MatchOutcome::FirstOfList(f(m)),
            MatchOutcome::NoMatch => MatchOutcome::NoMatch,
        }
    }

    /// Replace `NoMatch` with the first-of-list fallback, if one is available
    pub fn or_first(self, first: Option<T>) -> Self {
        match (self, first) {
            (MatchOutcome::NoMatch, Some(first)) => MatchOutcome::FirstOfList(first),
            (outcome, _) => outcome,
        }
    }
}

/// Decide whether `candidate` and `target` denote the same show or episode.
///
/// Matches on normalized equality, or when either normalized text contains
/// the other. Empty text is contained in every string, so it matches
/// anything.
pub fn matches(candidate: &str, target: &str) -> bool {
    contains_either_way(&normalize(candidate), &normalize(target))
}

fn contains_either_way(candidate: &str, target: &str) -> bool {
    candidate == target || candidate.contains(target) || target.contains(candidate)
}

/// Select the best candidate for `target` using exact-then-fuzzy precedence.
///
/// The first candidate whose text is normalized-equal to the target wins;
/// otherwise the first fuzzy match; otherwise `NoMatch`. Callers that want a
/// last-resort fallback apply [`MatchOutcome::or_first`].
pub fn find_match<'a, T, F>(candidates: &'a [T], target: &str, text_of: F) -> MatchOutcome<&'a T>
where
    F: Fn(&T) -> &str,
{
    let target = normalize(target);
    let normalized: Vec<String> = candidates.iter().map(|c| normalize(text_of(c))).collect();

    if let Some(i) = normalized.iter().position(|text| *text == target) {
        return MatchOutcome::Exact(&candidates[i]);
    }

    normalized
        .iter()
        .position(|text| contains_either_way(text, &target))
        .map(|i| MatchOutcome::Fuzzy(&candidates[i]))
        .unwrap_or(MatchOutcome::NoMatch)
}
