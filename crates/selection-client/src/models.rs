//! Wire types for the JSON APIs
//!
//! Only the fields the pages read are modelled; everything else in a payload
//! is ignored.

use serde::{Deserialize, Serialize};

/// One record of the placeholder user list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub website: String,
}

/// `{ "data": { "paragraph": { "text": ... } } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ParagraphEnvelope {
    #[serde(default)]
    pub data: Option<ParagraphData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParagraphData {
    #[serde(default)]
    pub paragraph: Option<ParagraphText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParagraphText {
    pub text: String,
}

impl ParagraphEnvelope {
    /// The nested paragraph text, if the envelope carries one
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        self.data.and_then(|d| d.paragraph).map(|p| p.text)
    }
}

/// `{ "error": false, "message": ..., "data": { "number": { "typeTwo": ... } } }`
#[derive(Debug, Clone, Deserialize)]
pub struct DominoEnvelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    pub data: DominoData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DominoData {
    pub number: DominoNumber,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DominoNumber {
    #[serde(rename = "typeTwo")]
    pub type_two: String,
}
