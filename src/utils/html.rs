// src/utils/html.rs

/// Sanitizes user-supplied text before it is stored.
///
/// Uses ammonia's whitelist: harmless markup such as `<b>` survives, while
/// `<script>` (including its content) and event-handler attributes are removed.
/// Leading and trailing whitespace is trimmed from the result.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input.trim()).trim().to_string()
}

/// Brings a search term into the same escaped form as stored text, so that
/// `AT&T` matches the stored `AT&amp;T`. Whitespace is kept as typed.
pub fn clean_search_term(input: &str) -> String {
    ammonia::clean(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_terms_are_escaped_like_stored_text() {
        assert_eq!(clean_html("Which company is AT&T?"), "Which company is AT&amp;T?");
        assert_eq!(clean_search_term("AT&T"), "AT&amp;T");
        assert_eq!(clean_search_term("3 < 5"), "3 &lt; 5");
        assert_eq!(clean_search_term(" question "), " question ");
    }
}
