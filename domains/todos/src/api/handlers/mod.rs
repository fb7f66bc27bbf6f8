//! HTTP handlers for the Todos domain

pub mod todos;
