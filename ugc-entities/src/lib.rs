#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # ugc-entities
//!
//! Reusable, agnostic domain entities for the UGC scoring engine.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod cache;
pub mod comment;
pub mod id;
pub mod item;
pub mod rating;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
