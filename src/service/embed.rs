//! Message JSON documents for the `download`, `upload` and `copy` commands.
//!
//! A document holds the content and embeds of one message in Discord's embed JSON
//! format. Downloading strips the fields Discord fills in by itself so the file can
//! be edited and uploaded again.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serenity::all::{CreateEmbed, CreateMessage, Embed, Message};

use crate::error::AppError;

/// File name used when sending a document as an attachment.
pub const DOCUMENT_FILE_NAME: &str = "message_json.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageDocument {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub embeds: Option<Vec<Value>>,
}

/// One message to post when uploading a document.
#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    pub content: Option<String>,
    pub embed: Option<Embed>,
}

impl OutgoingMessage {
    pub fn to_builder(&self) -> CreateMessage {
        let mut builder = CreateMessage::new();
        if let Some(content) = &self.content {
            builder = builder.content(content);
        }
        if let Some(embed) = &self.embed {
            builder = builder.embed(CreateEmbed::from(embed.clone()));
        }
        builder
    }
}

impl MessageDocument {
    /// Builds a cleaned document from a posted message.
    pub fn from_message(message: &Message) -> Result<Self, AppError> {
        let embeds = message
            .embeds
            .iter()
            .map(|embed| Ok(clean_embed(serde_json::to_value(embed)?)))
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(Self {
            content: Some(message.content.clone()).filter(|content| !content.is_empty()),
            embeds: Some(embeds),
        })
    }

    /// Parses an uploaded document
    ///
    /// # Returns
    /// - `Ok(MessageDocument)` - The file holds content or at least one embed
    /// - `Err(AppError::BadRequest)` - Invalid JSON, or nothing to post
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        let document: Self = serde_json::from_slice(bytes)
            .map_err(|e| AppError::BadRequest(format!("Invalid message JSON: {}", e)))?;

        let has_content = document.content.as_deref().is_some_and(|c| !c.is_empty());
        let has_embeds = document.embeds.as_ref().is_some_and(|e| !e.is_empty());
        if !has_content && !has_embeds {
            return Err(AppError::BadRequest(
                "The message JSON has no content and no embeds".to_string(),
            ));
        }

        Ok(document)
    }

    /// Pretty printed JSON with four space indentation.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>, AppError> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        Ok(out)
    }

    /// Splits the document into the messages to post
    ///
    /// Every embed is posted as its own message in order; the content goes with the
    /// first one only.
    ///
    /// # Returns
    /// - `Ok(Vec<OutgoingMessage>)` - Messages in posting order
    /// - `Err(AppError::BadRequest)` - An embed does not match Discord's embed format
    pub fn messages(&self) -> Result<Vec<OutgoingMessage>, AppError> {
        let mut content = self.content.clone().filter(|c| !c.is_empty());
        let mut messages = Vec::new();

        for (index, value) in self.embeds.iter().flatten().enumerate() {
            let embed: Embed = serde_json::from_value(value.clone()).map_err(|e| {
                AppError::BadRequest(format!("Embed {} is invalid: {}", index + 1, e))
            })?;

            messages.push(OutgoingMessage {
                content: content.take(),
                embed: Some(embed),
            });
        }

        if let Some(content) = content {
            messages.push(OutgoingMessage {
                content: Some(content),
                embed: None,
            });
        }

        Ok(messages)
    }
}

/// Removes the parts of an embed Discord generates itself
///
/// Drops `type` and every null value, and reduces `thumbnail` to its URL.
pub fn clean_embed(value: Value) -> Value {
    let Value::Object(map) = value else {
        return value;
    };

    let mut cleaned = Map::new();
    for (key, value) in map {
        if value.is_null() || key == "type" {
            continue;
        }

        let value = if key == "thumbnail" {
            match value.get("url") {
                Some(url) => serde_json::json!({ "url": url }),
                None => continue,
            }
        } else {
            drop_nulls(value)
        };

        cleaned.insert(key, value);
    }

    Value::Object(cleaned)
}

fn drop_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, drop_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(drop_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests cleaning of a downloaded embed.
    ///
    /// Verifies that `type` and nulls are dropped, nested nulls included, and the
    /// thumbnail keeps only its URL.
    ///
    /// Expected: only user-editable fields remain
    #[test]
    fn cleans_generated_embed_fields() {
        let cleaned = clean_embed(json!({
            "type": "rich",
            "title": "Rules",
            "description": null,
            "thumbnail": { "url": "https://x/y.png", "proxy_url": "https://p", "width": 80 },
            "footer": { "text": "Footer", "icon_url": null }
        }));

        assert_eq!(
            cleaned,
            json!({
                "title": "Rules",
                "thumbnail": { "url": "https://x/y.png" },
                "footer": { "text": "Footer" }
            })
        );
    }

    /// Tests that uploads post one message per embed.
    ///
    /// Expected: content only on the first message
    #[test]
    fn content_goes_with_first_embed() {
        let document = MessageDocument::parse(
            br#"{ "content": "Hello", "embeds": [{ "title": "One" }, { "title": "Two" }] }"#,
        )
        .unwrap();

        let messages = document.messages().unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content.as_deref(), Some("Hello"));
        assert_eq!(messages[1].content, None);
        assert_eq!(
            messages[1].embed.as_ref().and_then(|e| e.title.clone()).as_deref(),
            Some("Two")
        );
    }

    /// Tests a document with content and no embeds.
    ///
    /// Expected: a single content-only message
    #[test]
    fn content_only_document() {
        let document = MessageDocument::parse(br#"{ "content": "Just text" }"#).unwrap();

        let messages = document.messages().unwrap();

        assert_eq!(messages.len(), 1);
        assert!(messages[0].embed.is_none());
    }

    /// Tests rejection of documents with nothing to post.
    ///
    /// Expected: BadRequest for empty content and no embeds, and for invalid JSON
    #[test]
    fn rejects_empty_documents() {
        assert!(matches!(
            MessageDocument::parse(br#"{ "content": "", "embeds": [] }"#),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            MessageDocument::parse(b"not json"),
            Err(AppError::BadRequest(_))
        ));
    }

    /// Tests the downloaded file format.
    ///
    /// Expected: four space indentation and explicit null content
    #[test]
    fn pretty_json_uses_four_spaces() {
        let document = MessageDocument {
            content: None,
            embeds: Some(vec![json!({ "title": "T" })]),
        };

        let text = String::from_utf8(document.to_pretty_json().unwrap()).unwrap();

        assert!(text.contains("\n    \"content\": null"));
        assert!(text.contains("\n            \"title\": \"T\""));
    }
}
