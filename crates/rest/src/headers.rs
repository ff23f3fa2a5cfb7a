//! Header-value utilities: content-type normalization and Accept parsing.

use std::cmp::Ordering;

use mime::Mime;

/// Strips any parameters (most commonly `;charset=...`) from a content-type
/// value, returning the lowercased `type/subtype` essence.
pub fn strip_charset(content_type: &str) -> String {
    match content_type.parse::<Mime>() {
        Ok(parsed) => parsed.essence_str().to_string(),
        // Not a well-formed media type; keep the pre-';' part as-is so an
        // unknown-but-explicit value still reaches the registry and fails
        // with the name the client sent.
        Err(_) => content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim()
            .to_ascii_lowercase(),
    }
}

/// Extracts the `charset` parameter from a content-type value, if present.
pub fn charset_of(content_type: &str) -> Option<String> {
    let parsed: Mime = content_type.parse().ok()?;
    parsed
        .get_param(mime::CHARSET)
        .map(|charset| charset.as_str().to_string())
}

/// Parses an Accept header into `(media_type, weight)` pairs, ordered by
/// descending preference weight with document order as the tie-break.
///
/// Handles the `type;q=value, type;q=value` grammar; entries without a `q`
/// parameter default to 1.0 and unparsable entries are skipped.
pub fn parse_accept(raw: &str) -> Vec<(String, f32)> {
    let mut accepts: Vec<(String, f32)> = raw
        .split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return None;
            }
            let parsed: Mime = entry.parse().ok()?;
            let weight = parsed
                .get_param("q")
                .and_then(|q| q.as_str().parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((parsed.essence_str().to_string(), weight))
        })
        .collect();

    // Stable sort keeps document order among equal weights.
    accepts.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    accepts
}
