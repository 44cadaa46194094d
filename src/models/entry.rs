use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One decoded line of a session transcript.
///
/// Only the fields the reducer needs are typed; everything else on the line
/// is ignored so new fields written by Claude Code never break decoding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(rename = "type", default)]
    pub entry_type: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub parent_uuid: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_timestamp_text")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_tool_use_result")]
    pub tool_use_result: Option<ToolUseResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: MessageContent,
}

/// `message.content` is either a plain string or an ordered list of blocks.
/// Any other JSON shape decodes to `Other` and flattens to nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for MessageContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(text) => MessageContent::Text(text),
            Value::Array(items) => {
                MessageContent::Blocks(items.into_iter().map(ContentBlock::from_value).collect())
            }
            _ => MessageContent::Other,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: Option<String>,
    },
    ToolUse {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        input: Option<Value>,
    },
    ToolResult {
        #[serde(default)]
        tool_use_id: Option<String>,
        #[serde(
            default,
            deserialize_with = "crate::parsers::deserializers::deserialize_tool_result_content"
        )]
        content: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Decode a single block, mapping anything unrecognisable to `Unknown`.
    /// A bare string inside the array is treated as a text block.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => ContentBlock::Text { text: Some(text) },
            other => serde_json::from_value(other).unwrap_or(ContentBlock::Unknown),
        }
    }

    /// The `description` string carried in a tool invocation's input, if any.
    pub fn tool_description(&self) -> Option<&str> {
        match self {
            ContentBlock::ToolUse { input: Some(input), .. } => {
                input.get("description").and_then(Value::as_str)
            }
            _ => None,
        }
    }
}

/// Execution output attached to a user entry that answers a tool call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolUseResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub interrupted: bool,
}

impl ToolUseResult {
    pub fn from_value(value: &Value) -> Self {
        let text_field = |key: &str| {
            value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_string)
        };
        Self {
            stdout: text_field("stdout"),
            stderr: text_field("stderr"),
            interrupted: value.get("interrupted").and_then(Value::as_bool).unwrap_or(false),
        }
    }
}
