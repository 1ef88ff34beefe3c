//! # Todo API Client SDK
//!
//! This crate provides the core client for the remote todo REST service:
//! typed CRUD operations over the `/todos` collection with a pluggable
//! HTTP transport.

mod api;

pub use api::{ApiClient, DefaultSender, Error, HttpSender, Task, TodoApi};
