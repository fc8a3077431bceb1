//! Videos domain layer: entities and catalogue filters

pub mod entities;
