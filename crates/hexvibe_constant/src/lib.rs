//! Shared constants for HexVibe: app metadata in [app], chrome colors in [theme].

pub mod app;
pub mod theme;
