//! HTML escaping and entry identifier sanitization
//!
//! Two separate escaping paths exist:
//! - [`escape_html`] for text embedded in entry markup and attributes
//! - [`sanitize_id`] for the `id` attribute, which runs the HTML escaper first
//!   and then rewrites punctuation into word tokens
//!
//! Because the punctuation pass runs over already-escaped text, entity syntax
//! gets rewritten too: `&` becomes `&amp;` and then `_and_amp_semicolon_`.
//! Existing identifiers depend on that exact shape, so it must not change.

/// Punctuation substitutions, applied in order after escaping and lowercasing.
///
/// Later rules see the output of earlier ones. None of the replacement tokens
/// contain a character from this table, so no literal punctuation survives.
const ID_REPLACEMENTS: [(char, &str); 28] = [
    ('&', "_and_"),
    ('/', "_slash_"),
    ('\\', "_backslash_"),
    (':', "_colon_"),
    (';', "_semicolon_"),
    ('?', "_question_"),
    ('!', "_exclamation_"),
    ('@', "_at_"),
    ('#', "_hash_"),
    ('$', "_dollar_"),
    ('%', "_percent_"),
    ('^', "_caret_"),
    ('*', "_star_"),
    ('(', "_lparen_"),
    (')', "_rparen_"),
    ('+', "_plus_"),
    ('=', "_equals_"),
    ('[', "_lbracket_"),
    (']', "_rbracket_"),
    ('{', "_lbrace_"),
    ('}', "_rbrace_"),
    ('|', "_pipe_"),
    ('<', "_lt_"),
    ('>', "_gt_"),
    (',', "_comma_"),
    ('.', "_dot_"),
    ('\'', "_apos_"),
    ('"', "_quote_"),
];

/// Characters that never appear literally in a sanitized identifier
pub fn is_reserved(c: char) -> bool {
    ID_REPLACEMENTS.iter().any(|(reserved, _)| *reserved == c)
}

/// Escape HTML special characters
///
/// Quotes use numeric character references (`&#34;`, `&#39;`).
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&#34;")
        .replace('\'', "&#39;")
}

/// Derive the base identifier for a term
///
/// The result is deterministic and lowercase, and contains no reserved
/// punctuation. It is not unique on its own; see
/// [`IdRegistry`](super::builder::IdRegistry).
pub fn sanitize_id(term: &str) -> String {
    let lowered = escape_html(term).to_lowercase();
    let mut id: String = lowered
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();

    for (from, to) in ID_REPLACEMENTS {
        if id.contains(from) {
            id = id.replace(from, to);
        }
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html("say \"hi\""), "say &#34;hi&#34;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_html_does_not_double_escape_ampersand_output() {
        // '&' is handled first so entities produced later stay intact
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_sanitize_simple_terms() {
        assert_eq!(sanitize_id("Apple"), "apple");
        assert_eq!(sanitize_id("Go"), "go");
        assert_eq!(sanitize_id("hello world"), "hello_world");
    }

    #[test]
    fn test_sanitize_punctuation_tokens() {
        assert_eq!(sanitize_id("apple!"), "apple_exclamation_");
        assert_eq!(sanitize_id("C++"), "c_plus__plus_");
        assert_eq!(sanitize_id("a/b"), "a_slash_b");
        assert_eq!(sanitize_id("a\\b"), "a_backslash_b");
        assert_eq!(sanitize_id("U.S.A."), "u_dot_s_dot_a_dot_");
        assert_eq!(sanitize_id("f(x)=y"), "f_lparen_x_rparen__equals_y");
        assert_eq!(sanitize_id("50%"), "50_percent_");
        assert_eq!(sanitize_id("a|b,c"), "a_pipe_b_comma_c");
    }

    #[test]
    fn test_sanitize_ampersand_goes_through_entity() {
        // escape -> "A &amp; B", then '&' and ';' are substituted inside the entity
        assert_eq!(sanitize_id("A & B"), "a__and_amp_semicolon__b");
    }

    #[test]
    fn test_sanitize_angle_brackets_go_through_entities() {
        assert_eq!(sanitize_id("<b>"), "_and_lt_semicolon_b_and_gt_semicolon_");
    }

    #[test]
    fn test_sanitize_quotes_go_through_numeric_entities() {
        assert_eq!(sanitize_id("\""), "_and__hash_34_semicolon_");
        assert_eq!(sanitize_id("It's"), "it_and__hash_39_semicolon_s");
    }

    #[test]
    fn test_sanitize_whitespace_variants() {
        assert_eq!(sanitize_id("a\tb"), "a_b");
        assert_eq!(sanitize_id("a  b"), "a__b");
    }

    #[test]
    fn test_sanitize_output_has_no_reserved_or_uppercase() {
        let terms = [
            "Hello, World!",
            "A & B",
            "<script>alert('x')</script>",
            "key=value; path=/",
            "~!@#$%^&*()_+{}|:\"<>?`-=[]\\;',./",
            "Ärger über ÉCOLE",
            "MiXeD CaSe",
        ];
        for term in terms {
            let id = sanitize_id(term);
            assert!(!id.chars().any(is_reserved), "reserved char left in {id:?}");
            assert!(!id.chars().any(char::is_uppercase), "uppercase left in {id:?}");
            assert!(!id.chars().any(char::is_whitespace), "whitespace left in {id:?}");
        }
    }

    #[test]
    fn test_sanitize_is_deterministic() {
        assert_eq!(sanitize_id("Same Term?"), sanitize_id("Same Term?"));
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved('&'));
        assert!(is_reserved('"'));
        assert!(!is_reserved('_'));
        assert!(!is_reserved('a'));
        assert!(!is_reserved('-'));
    }
}
