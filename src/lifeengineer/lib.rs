//! # Life Engineer CMS Core
//!
//! This crate is the **UI-agnostic content core** of the Life Engineer site.
//! Public pages (biography, services, book, contact) and the single-operator
//! admin panel both read and write the same small set of collections:
//! text testimonials, video testimonials, gallery photos, and contact
//! submissions, plus one admin-session flag.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation layer (pages/components — NOT in this crate)  │
//! │  - Rendering, routing, styling, forms                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one entry point for every operation         │
//! │  - Returns structured Result types, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection Layer (collections.rs, session.rs, display.rs)  │
//! │  - CRUD accessors, seeding, the session gate, view policy   │
//! │  - Pure logic over typed records, no I/O assumptions        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Store Owns the Bytes
//!
//! Accessors never cache. Every read re-parses the stored JSON, every write
//! replaces the whole collection value. Last writer wins; there is no merge,
//! no optimistic concurrency, and no critical section held across calls.
//! That is the contract the original deployment lived with and the one the
//! tests pin down.
//!
//! ## Testing Strategy
//!
//! Everything above the storage layer is generic over [`store::KeyValueStore`],
//! so the bulk of the tests run against [`store::memory::InMemoryStore`]
//! without touching the filesystem. [`store::fs::FileStore`] gets its own
//! contract tests under `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The [`api::CmsApi`] facade — entry point for all operations
//! - [`collections`]: Generic per-collection accessors and seed data
//! - [`session`]: The admin login gate (explicitly not a security boundary)
//! - [`display`]: Read-path policy — active-only ordering, categories, counts
//! - [`model`]: The four record types and their status enums
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Operator configuration (credential override)
//! - [`error`]: Error types

pub mod api;
pub mod collections;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
