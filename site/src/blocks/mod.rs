//! Content blocks
//!
//! A page body is an ordered list of [`Block`] records. This module holds
//! the block model and the decoding rules for stored block collections;
//! rendering lives in [`renderer`], the editing session in [`builder`].

pub mod builder;
pub mod library;
pub mod renderer;

pub use builder::{
    BlockCard, BlockPersistence, BlockState, BuilderError, BuilderMode, ContentBuilder, Notice,
    NoticeKind, SaveTicket,
};
pub use library::BlockTemplate;
pub use renderer::{render_block, render_blocks, render_html, Fidelity, RenderedBlock};

use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// The fixed set of block kinds, plus a catch-all for tags this build
/// does not know.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
    Hero,
    /// Also stored as `paragraph` or `content`
    Text,
    /// Also stored as `call-to-action`
    Cta,
    Features,
    Cards,
    Faq,
    Testimonials,
    Steps,
    Video,
    Image,
    Heading,
    List,
    Quote,
    Divider,
    Spacer,
    Unknown(String),
}

impl BlockType {
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Text => "text",
            BlockType::Cta => "cta",
            BlockType::Features => "features",
            BlockType::Cards => "cards",
            BlockType::Faq => "faq",
            BlockType::Testimonials => "testimonials",
            BlockType::Steps => "steps",
            BlockType::Video => "video",
            BlockType::Image => "image",
            BlockType::Heading => "heading",
            BlockType::List => "list",
            BlockType::Quote => "quote",
            BlockType::Divider => "divider",
            BlockType::Spacer => "spacer",
            BlockType::Unknown(tag) => tag,
        }
    }

    /// Label used for editor cards and untitled blocks
    pub fn label(&self) -> String {
        match self {
            BlockType::Cta => "Call to Action".to_string(),
            BlockType::Faq => "FAQ".to_string(),
            other => {
                let tag = other.as_str();
                let mut chars = tag.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => "Block".to_string(),
                }
            }
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BlockType::Unknown(_))
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        match tag {
            "hero" => BlockType::Hero,
            "text" | "paragraph" | "content" => BlockType::Text,
            "cta" | "call-to-action" => BlockType::Cta,
            "features" => BlockType::Features,
            "cards" => BlockType::Cards,
            "faq" => BlockType::Faq,
            "testimonials" => BlockType::Testimonials,
            "steps" => BlockType::Steps,
            "video" => BlockType::Video,
            "image" => BlockType::Image,
            "heading" => BlockType::Heading,
            "list" => BlockType::List,
            "quote" => BlockType::Quote,
            "divider" => BlockType::Divider,
            "spacer" => BlockType::Spacer,
            other => BlockType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BlockType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(tag) => BlockType::from(tag.as_str()),
            other => BlockType::Unknown(other.to_string()),
        })
    }
}

/// Display directives applied to the block container regardless of type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    /// Any other directives the editor stored; kept so they round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlockSettings {
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.padding.is_none()
            && self.alignment.is_none()
            && self.extra.is_empty()
    }
}

/// One content unit on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type", default = "unknown_type")]
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Type-dependent payload, kept as JSON so unknown shapes survive edits
    #[serde(default)]
    pub content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<BlockSettings>,
    /// Zero-based position. Missing or garbled values read as 0.
    #[serde(default, deserialize_with = "lenient_order")]
    pub order: i64,
}

fn unknown_type() -> BlockType {
    BlockType::Unknown(String::new())
}

fn lenient_order<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

impl Block {
    pub fn new(id: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            id: id.into(),
            block_type,
            title: None,
            content: Value::Object(Map::new()),
            settings: None,
            order: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    pub fn with_settings(mut self, settings: BlockSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Title if set and non-blank, otherwise the type label
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.block_type.label(),
        }
    }
}

/// Stable sort by `order`; ties keep their incoming sequence.
pub fn sort_by_order(blocks: &mut [Block]) {
    blocks.sort_by_key(|block| block.order);
}

/// Rewrite every `order` to its index so positions read `0..N-1`.
pub fn renumber(blocks: &mut [Block]) {
    for (index, block) in blocks.iter_mut().enumerate() {
        block.order = index as i64;
    }
}

/// Decode a stored block collection.
///
/// Accepts a JSON array, an encoded string holding one (decoded once more),
/// or an object wrapping the array under `blocks`. Anything else yields an
/// empty list. Entries that are not block records are dropped.
pub fn decode_blocks(value: &Value) -> Vec<Block> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match serde_json::from_value::<Block>(item.clone()) {
                Ok(block) => Some(block),
                Err(e) => {
                    tracing::warn!("Dropping malformed content block: {}", e);
                    None
                }
            })
            .collect(),
        Value::String(encoded) => decode_blocks_str(encoded),
        Value::Object(map) => match map.get("blocks") {
            Some(inner @ Value::Array(_)) => decode_blocks(inner),
            _ => {
                tracing::warn!("Content blocks object has no block list");
                Vec::new()
            }
        },
        Value::Null => Vec::new(),
        other => {
            tracing::warn!("Unexpected content blocks value: {}", other);
            Vec::new()
        }
    }
}

/// Decode the text form stored in the `pages.content_blocks` column.
pub fn decode_blocks_str(encoded: &str) -> Vec<Block> {
    if encoded.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(encoded) {
        // A string inside the string: the collection was encoded twice.
        Ok(Value::String(inner)) => match serde_json::from_str::<Value>(&inner) {
            Ok(value @ (Value::Array(_) | Value::Object(_))) => decode_blocks(&value),
            Ok(_) | Err(_) => {
                tracing::warn!("Failed to parse content blocks");
                Vec::new()
            }
        },
        Ok(value) => decode_blocks(&value),
        Err(e) => {
            tracing::warn!("Failed to parse content blocks: {}", e);
            Vec::new()
        }
    }
}

/// Decode a block list posted by an operator.
///
/// Takes the same shapes as [`decode_blocks`], but nothing is dropped: an
/// element that is not a block record, a blank id or a repeated id rejects
/// the whole list.
pub fn decode_submitted_blocks(value: &Value) -> crate::error::Result<Vec<Block>> {
    let blocks = match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<Block>(item.clone()).map_err(|e| {
                    AppError::Validation(format!("Block {} is invalid: {}", index, e))
                })
            })
            .collect::<crate::error::Result<Vec<_>>>()?,
        Value::String(encoded) => {
            let inner: Value = serde_json::from_str(encoded).map_err(|e| {
                AppError::Validation(format!("Content blocks are not valid JSON: {}", e))
            })?;
            return decode_submitted_blocks(&inner);
        }
        Value::Object(map) => match map.get("blocks") {
            Some(inner) => return decode_submitted_blocks(inner),
            None => {
                return Err(AppError::Validation(
                    "Content blocks must be a list".to_string(),
                ))
            }
        },
        _ => {
            return Err(AppError::Validation(
                "Content blocks must be a list".to_string(),
            ))
        }
    };

    if let Some(index) = blocks.iter().position(|block| block.id.trim().is_empty()) {
        return Err(AppError::Validation(format!("Block {} has no id", index)));
    }
    ensure_unique_ids(&blocks)?;

    Ok(blocks)
}

/// Reject a collection in which two blocks share an id.
pub fn ensure_unique_ids(blocks: &[Block]) -> crate::error::Result<()> {
    let mut seen = HashSet::new();
    match blocks.iter().find(|block| !seen.insert(block.id.as_str())) {
        Some(block) => Err(AppError::Validation(format!(
            "Duplicate block id: {}",
            block.id
        ))),
        None => Ok(()),
    }
}

/// Encode a block collection for the `pages.content_blocks` column.
pub fn encode_blocks(blocks: &[Block]) -> crate::error::Result<String> {
    Ok(serde_json::to_string(blocks)?)
}
