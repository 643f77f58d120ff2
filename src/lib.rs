//! Procedural ASCII-art Christmas tree renderer.
//!
//! Layers:
//! - [`domain`] — tree geometry and glyph painting, no I/O.
//! - [`application`] — the render service writing rows to any sink.
//! - [`infrastructure`] — random engine construction and service wiring.
//! - [`config`] — layered settings.
//! - [`cli`] — argument parsing and command dispatch.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
