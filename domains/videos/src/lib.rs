//! Videos domain: catalogue, studio uploads, ownership-gated edits, view analytics

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::{
    NewVideo, Uploader, Video, VideoFilter, VideoUpdate, ViewRecord, Viewer,
};
pub use repository::{InMemoryVideoRepository, UploaderDirectory, VideoRepository};

pub use api::routes;
pub use api::VideosState;
