//! Small text utilities shared by extraction and enrichment.

/// Collapse whitespace, drop control characters, trim.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip HTML tags and decode the common entities, leaving plain text.
///
/// Good enough for JSON-LD descriptions and snippets; full documents go
/// through `scraper` instead.
pub fn strip_tags(html: &str) -> String {
    let script_pattern = regex::Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    let style_pattern = regex::Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    let br_pattern = regex::Regex::new(r"(?i)<br\s*/?>|</p>|</li>|</div>").unwrap();
    let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();

    let text = script_pattern.replace_all(html, " ");
    let text = style_pattern.replace_all(&text, " ");
    let text = br_pattern.replace_all(&text, "\n");
    let text = tag_pattern.replace_all(&text, " ");

    clean_text(&decode_entities(&text))
}

/// Decode the handful of HTML entities that matter for text matching.
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
}

/// Truncate to at most `max` characters on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}
