//! Uploader lookup

use async_trait::async_trait;
use clipstream_common::Result;

use crate::domain::entities::Uploader;

/// Read-only view of accounts, used to attach channel summaries to videos.
///
/// Accounts live in the users domain; the composition root provides the
/// implementation.
#[async_trait]
pub trait UploaderDirectory: Send + Sync {
    async fn find_uploader(&self, user_id: &str) -> Result<Option<Uploader>>;
}
