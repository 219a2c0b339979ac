// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Schedule: a coalescing render scheduler for component runtimes.
//!
//! Components mark themselves dirty whenever a property changes, and many
//! properties can change within one logical tick. [`Scheduler`] coalesces
//! those marks so that each component renders at most once per batch, in the
//! order it was first marked, always with the most recent values.
//!
//! The scheduler is cooperative and single-threaded. It never calls back into
//! the host by itself; instead, [`Scheduler::mark`] and [`Scheduler::finish`]
//! return a [`FlushRequest`] telling the caller whether to ask the host
//! environment's task queue for one future flush callback. At most one flush
//! request is outstanding at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_schedule::{FlushRequest, Scheduler};
//!
//! let mut scheduler = Scheduler::<u32>::new();
//!
//! // The first mark in a batch asks for a flush; later marks do not.
//! assert_eq!(scheduler.mark(1), FlushRequest::Schedule);
//! assert_eq!(scheduler.mark(2), FlushRequest::None);
//! assert_eq!(scheduler.mark(1), FlushRequest::None); // idempotent
//!
//! // When the host runs the flush callback, drain the batch.
//! let batch = scheduler.begin();
//! assert_eq!(batch, vec![1, 2]); // first-marked order
//! for key in batch {
//!     // render(key);
//! }
//! assert_eq!(scheduler.finish(), FlushRequest::None);
//! ```
//!
//! ## Re-entrancy
//!
//! Marks made between [`Scheduler::begin`] and [`Scheduler::finish`] land in
//! the *next* batch, and `finish` reports whether that next batch needs a
//! flush request. A render pass can therefore never recurse into itself; the
//! host task queue is the only place where "later" is observable.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scheduler;

pub use scheduler::{FlushRequest, Scheduler};
