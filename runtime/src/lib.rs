//! Sepro runtime: orchestrates `sepro-core` to run a compiled [`Model`].
//!
//! The runner uses ONLY `sepro-core`'s public API -- [`sepro_core::Container`],
//! [`sepro_core::model`], `sepro_core::predicate`, `sepro_core::modifier`,
//! `sepro_core::resolve` -- the same "consume the public surface, don't
//! reimplement it" discipline the teacher's `harness` crate uses against
//! `sterling-kernel`.
//!
//! # Module map
//!
//! - [`config`] -- `EngineConfig` (RNG seed injection).
//! - [`error`] -- `EngineError`.
//! - [`delegate`] -- the observer-only `Delegate` trait.
//! - [`logger`] -- the observer-only `Logger` trait and `Value`.
//! - [`probe`] -- measure accumulation (`probe()`).
//! - [`dispatch`] -- actuator dispatch (unary and combined).
//! - [`instantiate`] -- world instantiation (`initialize`/`instantiate`).
//! - [`engine`] -- `Engine`: owns `Model` + `Container`, runs `step`/`run`.

pub mod config;
pub mod delegate;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod instantiate;
pub mod logger;
pub mod probe;

pub use config::EngineConfig;
pub use delegate::Delegate;
pub use engine::Engine;
pub use error::EngineError;
pub use logger::{Logger, Value};
