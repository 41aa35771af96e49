//! Shell server: embedded SPA assets plus the `/api` reverse proxy.

pub mod assets;
pub mod proxy;
