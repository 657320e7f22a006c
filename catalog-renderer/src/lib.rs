//! Fetches the product catalog and renders it into a document container
//!
//! Two rendering strategies are provided: [`render::SequentialRenderer`] awaits each image
//! before inserting its card, while [`render::ConcurrentRenderer`] loads every image at once
//! and publishes all cards in a single container mutation.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod catalog_api;
pub mod config;
pub mod dom;
pub mod http_client;
pub mod image_loader;
pub mod orchestrator;
pub mod render;
