//! Rapide - Local static-file HTTP server
//!
//! Core library for serving a directory over HTTP.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
