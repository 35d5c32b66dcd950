//! Javadoc tokenizer — split a raw comment into tagged segments.
//!
//! The comment body is cut on formatting noise (line-leading `*` / `/*`,
//! tabs and whitespace runs). Tokens that are exactly `@return`, `@param`,
//! `@see` or `@throws` open a new segment of that kind and lead its text;
//! every other token is text of the current segment. The implicit first
//! segment is `head`.

use crate::model::{DocSegment, DocTag, DocumentationBlock};
use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:(?:^|\n)\s*/?\*|\s)+").unwrap());

/// Tag introduced by a marker token, if the token is one.
pub fn classify(token: &str) -> Option<DocTag> {
    match token {
        "@return" => Some(DocTag::Return),
        "@param" => Some(DocTag::Param),
        "@see" => Some(DocTag::See),
        "@throws" => Some(DocTag::Throws),
        _ => None,
    }
}

/// Non-empty tokens of a raw comment, in order.
pub fn split_tokens(content: &str) -> Vec<&str> {
    RE_COMMENT_NOISE
        .split(content)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokenize a raw comment.
///
/// Returns `None` when nothing usable is left after stripping the comment
/// noise; the caller drops the whole method in that case.
pub fn tokenize(content: &str) -> Option<DocumentationBlock> {
    let tokens = split_tokens(content);
    let first = tokens.first()?;
    if first.is_empty() {
        return None;
    }

    let mut segments: Vec<DocSegment> = Vec::new();
    let mut current = DocSegment {
        tag: DocTag::Head,
        text: String::new(),
    };

    for (i, token) in tokens.iter().enumerate() {
        if let Some(tag) = classify(token) {
            if i == 0 {
                current.tag = tag;
            } else {
                let done = std::mem::replace(
                    &mut current,
                    DocSegment {
                        tag,
                        text: String::new(),
                    },
                );
                segments.push(done);
            }
        }
        current.text.push_str(token);
        current.text.push(' ');
    }
    segments.push(current);

    Some(DocumentationBlock { segments })
}
