//! `katalog-app` — host surface for the catalog demo.
//!
//! The pure domain lives in `katalog-products`; this crate owns everything
//! that touches the host environment: the rendering surface, configuration,
//! the control-to-handler wiring, and the one-shot startup sequence.

pub mod app;
pub mod config;
pub mod controls;
pub mod surface;

pub use app::App;
pub use config::AppConfig;
pub use controls::Control;
pub use surface::{ConsoleSurface, Surface};
