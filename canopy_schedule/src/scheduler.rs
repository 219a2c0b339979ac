// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch scheduler: pending keys, flush requests, re-entrancy deferral.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// Whether the caller must request a flush callback from the host task queue.
///
/// Returned by [`Scheduler::mark`] and [`Scheduler::finish`]. The scheduler
/// hands out [`FlushRequest::Schedule`] exactly once per batch, so forwarding
/// every `Schedule` to the host yields exactly one flush callback per batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use = "a Schedule request must be forwarded to the host task queue"]
pub enum FlushRequest {
    /// No action needed; a flush is already pending or in progress.
    None,
    /// Ask the host environment for one future flush callback.
    Schedule,
}

/// A coalescing, insertion-ordered batch scheduler.
///
/// Keys marked before the next flush accumulate into one batch. Marking is
/// idempotent: a key already in the batch is not enqueued again. The batch
/// preserves first-marked order, so flushing renders instances in the order
/// they first became dirty.
///
/// # Type Parameters
///
/// - `K`: The key type, typically an instance identifier. Must be
///   `Copy + Eq + Hash`.
///
/// # Example
///
/// ```rust
/// use canopy_schedule::{FlushRequest, Scheduler};
///
/// let mut scheduler = Scheduler::<u32>::new();
///
/// assert_eq!(scheduler.mark(7), FlushRequest::Schedule);
/// assert_eq!(scheduler.mark(3), FlushRequest::None);
///
/// // Marks made during a flush belong to the next batch.
/// let batch = scheduler.begin();
/// assert_eq!(batch, vec![7, 3]);
/// assert_eq!(scheduler.mark(7), FlushRequest::None); // deferred
/// assert_eq!(scheduler.finish(), FlushRequest::Schedule);
/// assert_eq!(scheduler.begin(), vec![7]);
/// assert_eq!(scheduler.finish(), FlushRequest::None);
/// ```
#[derive(Debug)]
pub struct Scheduler<K>
where
    K: Copy + Eq + Hash,
{
    /// Pending keys in first-marked order.
    queue: Vec<K>,
    /// Membership guard for `queue`.
    queued: HashSet<K>,
    /// True between `begin` and `finish`.
    flushing: bool,
    /// True while a flush callback has been requested but not yet begun.
    flush_requested: bool,
    /// Mutation counter, incremented on every state change.
    generation: u64,
}

impl<K> Default for Scheduler<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Scheduler<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates a new empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            queued: HashSet::new(),
            flushing: false,
            flush_requested: false,
            generation: 0,
        }
    }

    /// Returns the current generation.
    ///
    /// The generation is incremented on every mutation (mark, begin, finish,
    /// remove). It can be used to detect whether the scheduler has changed
    /// since a previous observation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if a flush is currently in progress.
    #[must_use]
    #[inline]
    pub fn is_flushing(&self) -> bool {
        self.flushing
    }

    /// Returns `true` if the key is in the pending batch.
    #[must_use]
    pub fn is_marked(&self, key: K) -> bool {
        self.queued.contains(&key)
    }

    /// Returns the number of pending keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if no keys are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Marks a key dirty, enqueueing it if it is not already pending.
    ///
    /// Idempotent: marking the same key again before the next flush is a
    /// no-op. During a flush the key is enqueued for the *next* batch and no
    /// flush is requested; [`Scheduler::finish`] reports the deferred request
    /// instead.
    pub fn mark(&mut self, key: K) -> FlushRequest {
        self.generation = self.generation.wrapping_add(1);
        if self.queued.insert(key) {
            self.queue.push(key);
        }
        if self.flushing || self.flush_requested {
            FlushRequest::None
        } else {
            self.flush_requested = true;
            FlushRequest::Schedule
        }
    }

    /// Removes a key from the pending batch.
    ///
    /// Returns `true` if the key was pending. Use this when an instance is
    /// destroyed so a stale render does not run for it.
    pub fn remove(&mut self, key: K) -> bool {
        if self.queued.remove(&key) {
            self.generation = self.generation.wrapping_add(1);
            self.queue.retain(|k| *k != key);
            true
        } else {
            false
        }
    }

    /// Begins a flush, taking the pending batch in first-marked order.
    ///
    /// The scheduler enters the flushing state: marks made before the matching
    /// [`Scheduler::finish`] call are deferred to the next batch.
    pub fn begin(&mut self) -> Vec<K> {
        self.generation = self.generation.wrapping_add(1);
        self.flushing = true;
        self.flush_requested = false;
        self.queued.clear();
        core::mem::take(&mut self.queue)
    }

    /// Finishes a flush.
    ///
    /// If re-entrant marks accumulated during the flush, returns
    /// [`FlushRequest::Schedule`] so the caller asks the host for the next
    /// batch's flush callback.
    pub fn finish(&mut self) -> FlushRequest {
        self.generation = self.generation.wrapping_add(1);
        self.flushing = false;
        if self.queue.is_empty() || self.flush_requested {
            FlushRequest::None
        } else {
            self.flush_requested = true;
            FlushRequest::Schedule
        }
    }
}
