//! YouTube Data API adapter

pub mod client;

pub use client::YoutubeClient;
