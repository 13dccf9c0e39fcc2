// SPDX-License-Identifier: MPL-2.0
//! Restricted inline-link parsing for submission descriptions.
//!
//! Descriptions are plain text with exactly one recognized form:
//! `[label](url)` where the url starts with `http://` or `https://`.
//! Everything else, including every other markdown construct and every
//! other URL scheme, stays literal text. Rendering goes through text
//! widgets, so literal segments can never be interpreted as markup.

/// One piece of a parsed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, rendered as-is.
    Text(String),
    /// An activatable link with a visible label.
    Link { label: String, url: String },
}

/// Splits a description into literal text and recognized links.
///
/// Brackets that do not complete a `[label](url)` form with a web URL are
/// emitted as literal text, and scanning resumes at the next character.
#[must_use]
pub fn parse(description: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = description;

    while let Some(open) = rest.find('[') {
        let (before, candidate) = rest.split_at(open);
        literal.push_str(before);

        match scan_link(candidate) {
            Some((label, url, consumed)) => {
                if !literal.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Link {
                    label: label.to_string(),
                    url: url.to_string(),
                });
                rest = &candidate[consumed..];
            }
            None => {
                literal.push('[');
                rest = &candidate[1..];
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }
    segments
}

/// Returns true for URLs that may become activatable links.
#[must_use]
pub fn is_activatable(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Tries to read a complete `[label](url)` from the start of `input`,
/// which is known to begin with `[`. Returns the label, the url, and the
/// number of bytes consumed.
fn scan_link(input: &str) -> Option<(&str, &str, usize)> {
    let body = &input[1..];
    let label_end = body.find(']')?;
    let label = &body[..label_end];
    if label.is_empty() {
        return None;
    }

    let after_label = &body[label_end + 1..];
    if !after_label.starts_with('(') {
        return None;
    }

    let url_body = &after_label[1..];
    let url_end = url_body.find(')')?;
    let url = &url_body[..url_end];
    if !is_activatable(url) {
        return None;
    }

    // '[' + label + ']' + '(' + url + ')'
    let consumed = 1 + label_end + 1 + 1 + url_end + 1;
    Some((label, url, consumed))
}
