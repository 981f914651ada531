//! OpenAI wire types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: MessageContent,
}

/// Plain text for ordinary prompts, parts for multimodal prompts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub(crate) enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TranscriptionResponse {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice and the model that served it.
    pub fn into_reply(self) -> Option<(String, Option<String>)> {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)?;
        Some((text, self.model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_part_serializes_with_type_tag() {
        let part = ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: "data:image/jpeg;base64,AAAA".to_string(),
            },
        };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["type"], "image_url");
        assert_eq!(json["image_url"]["url"], "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn text_content_serializes_as_plain_string() {
        let msg = ChatMessage {
            role: "user",
            content: MessageContent::Text("hi".to_string()),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn missing_content_yields_none() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert!(resp.into_reply().is_none());
    }

    #[test]
    fn reply_carries_served_model() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"model":"gpt-4-1106-preview-0613","choices":[{"message":{"content":"ok"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            resp.into_reply(),
            Some(("ok".to_string(), Some("gpt-4-1106-preview-0613".to_string())))
        );
    }
}
