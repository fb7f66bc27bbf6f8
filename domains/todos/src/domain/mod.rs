//! Todos domain layer: entities

pub mod entities;
