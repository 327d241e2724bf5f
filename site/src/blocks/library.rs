//! Block library
//!
//! Predefined templates the editor offers when adding a block.

use super::{Block, BlockSettings, BlockType};
use serde::Serialize;
use serde_json::{json, Value};

/// A starting point for a new block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockTemplate {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub title: String,
    pub description: String,
    pub content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<BlockSettings>,
}

impl BlockTemplate {
    fn new(block_type: BlockType, title: &str, description: &str, content: Value) -> Self {
        Self {
            block_type,
            title: title.to_string(),
            description: description.to_string(),
            content,
            settings: None,
        }
    }

    fn aligned(mut self, alignment: &str) -> Self {
        self.settings = Some(BlockSettings {
            alignment: Some(alignment.to_string()),
            ..BlockSettings::default()
        });
        self
    }

    /// Every template, in the order the library lists them
    pub fn all() -> Vec<BlockTemplate> {
        vec![
            BlockTemplate::new(
                BlockType::Hero,
                "Hero Section",
                "Large headline with a call-to-action button",
                json!({
                    "headline": "Your Mortgage. Matched to Your Life.",
                    "subtitle": "Personalized mortgage offers from Canada's leading lenders",
                    "ctaText": "Get Qualified in Minutes",
                    "ctaLink": "/mortgage/approval/"
                }),
            ),
            BlockTemplate::new(
                BlockType::Text,
                "Text Content",
                "Heading and rich text body",
                json!({
                    "heading": "",
                    "body": "<p>Start writing your content here...</p>"
                }),
            ),
            BlockTemplate::new(
                BlockType::Cta,
                "Call to Action",
                "Prominent banner that drives a single action",
                json!({
                    "heading": "Ready to find your best mortgage match?",
                    "description": "Join thousands of Canadians who trusted us with their mortgage journey",
                    "buttonText": "Start Your Application",
                    "buttonLink": "/mortgage/approval/"
                }),
            )
            .aligned("center"),
            BlockTemplate::new(
                BlockType::Features,
                "Features Grid",
                "Three-column grid of icons and short descriptions",
                json!({
                    "heading": "Why Choose Us",
                    "features": [
                        { "icon": "⚡", "title": "Fast Approvals", "description": "Get matched with top lenders in minutes" },
                        { "icon": "🧠", "title": "Expert Guidance", "description": "Licensed brokers guide you through every step" },
                        { "icon": "🎁", "title": "Exclusive Offers", "description": "Partner perks with every mortgage" }
                    ]
                }),
            ),
            BlockTemplate::new(
                BlockType::Cards,
                "Cards",
                "Linked cards with optional images",
                json!({ "cards": [] }),
            ),
            BlockTemplate::new(
                BlockType::Faq,
                "FAQ",
                "Questions and answers",
                json!({ "faqs": [] }),
            ),
            BlockTemplate::new(
                BlockType::Testimonials,
                "Testimonials",
                "Client quotes with name and role",
                json!({ "testimonials": [] }),
            ),
            BlockTemplate::new(
                BlockType::Steps,
                "Process Steps",
                "Numbered steps explaining a process",
                json!({ "steps": [] }),
            ),
            BlockTemplate::new(
                BlockType::Video,
                "Video",
                "Embedded video with caption",
                json!({ "videoUrl": "", "caption": "" }),
            ),
            BlockTemplate::new(
                BlockType::Image,
                "Image Gallery",
                "Grid of images",
                json!({ "images": [] }),
            ),
        ]
    }

    pub fn for_type(block_type: &BlockType) -> Option<BlockTemplate> {
        Self::all()
            .into_iter()
            .find(|template| &template.block_type == block_type)
    }

    /// Build a block from this template. Order is assigned by the caller.
    pub fn instantiate(&self, id: String) -> Block {
        Block {
            id,
            block_type: self.block_type.clone(),
            title: Some(self.title.clone()),
            content: self.content.clone(),
            settings: self.settings.clone(),
            order: 0,
        }
    }
}
