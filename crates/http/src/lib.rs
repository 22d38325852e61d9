//! HTTP transport for the fairchat widget

pub mod client;

pub use client::{RespondClient, RespondClientBuilder, error::ClientError};
