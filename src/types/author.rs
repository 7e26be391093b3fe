//! Author profile.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub profile_photo: Option<ProfilePhoto>,
}

/// Base64-encoded profile picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePhoto {
    pub image: String,
    pub content_type: String,
}

impl ProfilePhoto {
    pub fn decode(&self) -> crate::Result<Vec<u8>> {
        super::decode_base64(&self.image, "profilePhoto.image")
    }
}
