//! Messages shown in the login page's message region.

use core::fmt;

use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Whether a message reports success or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Returns the kind as a lowercase string (`success` or `error`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Text color the message region uses for this kind.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Error => "red",
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A message for the message region: its text and how to style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    kind: MessageKind,
    text: String,
}

impl Message {
    /// Create a success message.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    /// Create an error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text color for the message region.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.kind.color()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// Serialized with the derived color so API clients don't need the mapping.
impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Message", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("color", self.color())?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}
