//! Console front end for `rogue-core`.
//!
//! The binary is the composition root: it reads [`config::ClientConfig`]
//! from the environment, installs logging, builds the demo dungeon from
//! [`scenario`], and hands the session to [`rogue_core::GameEngine::run`].
pub mod config;
pub mod logging;
pub mod scenario;

pub use config::ClientConfig;
