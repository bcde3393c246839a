//! Hydration core of the Reien cemetery-visit backend-for-frontend.
//!
//! This crate is the anti-corruption layer between untrusted wire payloads
//! and the strongly-invariant domain model. It has three layers, leaves
//! first:
//!
//! - [`domain`]: immutable, self-validating value objects and aggregates;
//!   constructors are the only way in and fail fast on the first violated
//!   invariant.
//! - [`hydration`]: declarative payload schemas with aggregate, field-path
//!   annotated validation, and per-type hydrators converting payloads to
//!   domain objects and back.
//! - [`upstream`]: per-aggregate translators mapping upstream service
//!   envelopes onto ordered sequences of domain entities.
//!
//! Everything is synchronous, pure, and free of shared mutable state; the
//! schema table and enum literals are built once and read-only afterwards,
//! so any number of callers may hydrate concurrently without coordination.
//! Transport, persistence, and process wiring live outside, behind the port
//! traits in [`domain::ports`].

pub mod domain;
pub mod hydration;
pub mod upstream;

pub use domain::{Pager, Range};
pub use hydration::{Hydrator, HydrationError, Schema, SchemaError};
pub use upstream::{TranslateError, Translators};
