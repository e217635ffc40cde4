// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Base of every share link
pub const DEFAULT_LINK_BASE: &str = "https://pod.link";

/// Encode a feed-supplied episode identifier as a URL-safe token.
///
/// Standard base64 of the UTF-8 bytes with `+` mapped to `-`, `/` mapped to
/// `_` and trailing `=` padding removed.
pub fn encode_identifier(identifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(identifier.as_bytes())
}

/// Build the share link for an episode on the default link base
pub fn build_link(show_id: u64, encoded_identifier: &str) -> String {
    build_link_with_base(DEFAULT_LINK_BASE, show_id, encoded_identifier)
}

/// Build the share link for an episode on a custom link base
pub fn build_link_with_base(base: &str, show_id: u64, encoded_identifier: &str) -> String {
    format!(
        "{}/{}/episode/{}",
        base.trim_end_matches('/'),
        show_id,
        encoded_identifier
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;

    fn is_url_safe(token: &str) -> bool {
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    // === encode_identifier tests ===

    #[test]
    fn encodes_empty_identifier_to_empty_token() {
        assert_eq!(encode_identifier(""), "");
    }

    #[test]
    fn encodes_plain_guid() {
        assert_eq!(encode_identifier("guid-1"), "Z3VpZC0x");
    }

    #[test]
    fn strips_padding() {
        // "ab" is "YWI=" in standard base64
        assert_eq!(encode_identifier("ab"), "YWI");
        assert_eq!(encode_identifier("a"), "YQ");
    }

    #[test]
    fn substitutes_plus_and_slash() {
        // U+FBFF is EF AF BF in UTF-8, which is "76+/" in standard base64
        let identifier = "\u{fbff}";
        let standard = STANDARD.encode(identifier.as_bytes());
        assert_eq!(standard, "76+/");
        assert_eq!(encode_identifier(identifier), "76-_");

        let expected = standard
            .replace('+', "-")
            .replace('/', "_")
            .trim_end_matches('=')
            .to_string();
        assert_eq!(encode_identifier(identifier), expected);
    }

    #[test]
    fn matches_standard_encoding_with_substitutions() {
        for identifier in [
            "https://example.com/?p=123",
            "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
            "tag:soundcloud,2010:tracks/123456789",
            "Ünïcödé ~~~ ???",
        ] {
            let expected = STANDARD
                .encode(identifier.as_bytes())
                .replace('+', "-")
                .replace('/', "_")
                .trim_end_matches('=')
                .to_string();
            assert_eq!(encode_identifier(identifier), expected);
        }
    }

    #[test]
    fn output_is_url_safe() {
        for identifier in ["???>>>", "~~~~", "ÿÿÿ", "guid with spaces", "x/y+z="] {
            let token = encode_identifier(identifier);
            assert!(is_url_safe(&token), "{} -> {}", identifier, token);
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(encode_identifier("guid-1"), encode_identifier("guid-1"));
    }

    // === build_link tests ===

    #[test]
    fn builds_pod_link_url() {
        assert_eq!(
            build_link(1234567890, "Z3VpZC0x"),
            "https://pod.link/1234567890/episode/Z3VpZC0x"
        );
    }

    #[test]
    fn custom_base_ignores_trailing_slash() {
        assert_eq!(
            build_link_with_base("https://links.example.test/", 42, "YQ"),
            "https://links.example.test/42/episode/YQ"
        );
    }
}
