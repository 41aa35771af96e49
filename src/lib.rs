//! MCM Console
//!
//! Administrative console for the MCM medical-examination certification
//! workflow: agencies register candidates, hospitals examine them and file
//! fitness reports, administrators manage reference data and payments.
//!
//! This library provides:
//! - The Dioxus single-page application (`app`), compiled to WASM
//! - A thin Axum shell server that embeds the SPA bundle and reverse-proxies
//!   `/api/*` to the external MCM REST backend

pub mod app;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
