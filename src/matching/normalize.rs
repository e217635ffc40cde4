/// Canonicalize text for comparison.
///
/// Lowercases, trims, and collapses every run of whitespace into a single
/// space. The result is only ever used for comparing; callers keep the
/// original text for output.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases() {
        assert_eq!(normalize("The Daily"), "the daily");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize("  The Daily \n"), "the daily");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("The\t \tDaily   Show"), "the daily show");
    }

    #[test]
    fn empty_and_blank_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(normalize("ÉPISODE Über"), "épisode über");
    }

    #[test]
    fn is_idempotent() {
        for s in [
            "",
            "  The   Daily ",
            "MIXED case\tand\nnewlines",
            "ÄÖÜ  ß",
            "already normal",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {:?}", s);
        }
    }
}
