use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub type UserId = String;
pub type ChannelId = String;

/// Where a message came from. A missing channel means a private conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelContext {
    pub user_id: UserId,
    pub channel_id: Option<ChannelId>,
}

impl ChannelContext {
    pub fn group(user_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            channel_id: Some(channel_id.into()),
        }
    }

    pub fn private(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            channel_id: None,
        }
    }

    pub fn is_private(&self) -> bool {
        self.channel_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub image: Option<PathBuf>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Option<PathBuf>) -> Self {
        self.image = image;
        self
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}
