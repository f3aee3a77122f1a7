//! Tool content blocks and the text-extraction policy.
//!
//! MCP tool calls return a list of typed content blocks. gitgud only ever
//! consumes text; everything else (images, resources, audio) is carried as
//! [`ContentBlock::Other`] and discarded at extraction time.

use serde::Deserialize;

/// One content block from a tool call response.
///
/// The wire shape is `{"type": "text", "text": "..."}` for text and
/// `{"type": <anything else>, ...}` for the rest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// First-text-wins extraction policy.
///
/// Returns the text of the first `text` block; all subsequent blocks and
/// every non-text block are discarded. Returns `None` when no text block
/// is present.
pub fn first_text(blocks: &[ContentBlock]) -> Option<&str> {
    blocks.iter().find_map(|block| match block {
        ContentBlock::Text { text } => Some(text.as_str()),
        ContentBlock::Other => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_text_block() {
        let block: ContentBlock =
            serde_json::from_value(json!({"type": "text", "text": "hello"})).unwrap();
        assert_eq!(
            block,
            ContentBlock::Text {
                text: "hello".into()
            }
        );
    }

    #[test]
    fn deserializes_unknown_kind_as_other() {
        let block: ContentBlock =
            serde_json::from_value(json!({"type": "image", "data": "...", "mimeType": "image/png"}))
                .unwrap();
        assert_eq!(block, ContentBlock::Other);
    }

    #[test]
    fn first_text_skips_non_text_blocks() {
        let blocks = vec![
            ContentBlock::Other,
            ContentBlock::Text {
                text: "first".into(),
            },
            ContentBlock::Text {
                text: "second".into(),
            },
        ];
        assert_eq!(first_text(&blocks), Some("first"));
    }

    #[test]
    fn first_text_none_without_text() {
        assert_eq!(first_text(&[ContentBlock::Other]), None);
        assert_eq!(first_text(&[]), None);
    }
}
