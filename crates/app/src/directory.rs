//! Uploader summaries served from the account store

use std::sync::Arc;

use async_trait::async_trait;
use clipstream_common::Result;
use clipstream_users::UserRepository;
use clipstream_videos::{Uploader, UploaderDirectory};

/// Adapts the users domain's repository to the videos domain's lookup seam
pub struct UserDirectory {
    users: Arc<dyn UserRepository>,
}

impl UserDirectory {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UploaderDirectory for UserDirectory {
    async fn find_uploader(&self, user_id: &str) -> Result<Option<Uploader>> {
        Ok(self.users.get_by_id(user_id).await?.map(|user| Uploader {
            id: user.id,
            name: user.name,
            profile_image_url: user.profile_image_url,
        }))
    }
}
