//! Repository implementations for the videos domain

pub mod uploaders;
pub mod videos;

pub use uploaders::UploaderDirectory;
pub use videos::{InMemoryVideoRepository, VideoRepository};
