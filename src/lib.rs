//! This crate provides composable, statically checked access paths.
//!
//! An access path describes how to reach one part of a composite value —
//! "the `c` field of the `b` field of an `A`" — as an ordinary value that can
//! be stored, passed around, composed, and applied to any number of owners.
//! Every step is checked at compile time; there are no runtime failures and no
//! `unsafe` code.
//!
//! **Access** and **AccessMut**
//!
//! [`Access`] is the contract every accessor satisfies: given a shared
//! reference to its [`Source`](Access::Source), it returns a shared reference
//! to its [`Target`](Access::Target) inside that same value. [`AccessMut`]
//! is the aligned mutable counterpart. An accessor that implements both can be
//! invoked through either a shared or a mutable owner binding, and the result
//! mutability follows the binding.
//!
//! **Field**
//!
//! [`Field`] is an accessor for a single structural member, built with the
//! [`field!`] macro. The macro generates the shared and mutable operations
//! together from one field path, so the two are aligned by construction.
//!
//! **Getter** and **Lens**
//!
//! [`Getter`] lifts a plain `Fn(&S) -> &D` closure or function into an
//! accessor; it supports shared invocation only. [`Lens`] additionally takes
//! the matching `Fn(&mut S) -> &mut D` operation and supports both.
//!
//! **Chain**
//!
//! [`Chain`] composes two accessors end to end, and the [`chain!`] macro
//! composes any number of them, left to right. The `|` operator is a binary
//! shorthand for the same composition: `a | b` is `chain!(a, b)`.
//!
//! # Examples
//!
//! ```
//! use vc_access::{Accessible, chain, field};
//!
//! #[derive(Default)]
//! struct Engine { cylinder: Cylinder }
//! #[derive(Default)]
//! struct Cylinder { bore_mm: u32 }
//!
//! let path = chain!(field!(Engine => cylinder), field!(Cylinder => bore_mm));
//!
//! let mut engine = Engine::default();
//! *engine.part_mut(&path) = 86;
//! assert_eq!(*engine.part(&path), 86);
//! assert_eq!(engine.cylinder.bore_mm, 86);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod access;
mod chain;
mod field;
mod getter;

// -----------------------------------------------------------------------------
// Top-level exports

pub use access::{Access, AccessMut, Accessible, Source, Target};
pub use chain::Chain;
pub use field::Field;
pub use getter::{Getter, Lens, getter, lens};
