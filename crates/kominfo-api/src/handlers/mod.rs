//! HTTP handlers

pub mod accessibility;
pub mod auth;
pub mod content;
pub mod health;
pub mod informasi;
pub mod menus;
pub mod pages;
pub mod public;
pub mod settings;
pub mod uploads;
pub mod visitor;
