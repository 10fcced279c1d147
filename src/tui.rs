//! Terminal front end: app state, event loop and drawing.

pub mod app;
pub mod controller;
pub mod session;
pub mod ui;
