// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for sheet presentation: handles, states, tickets, and events.
//!
//! These describe the controller protocol. They are produced by
//! [`SheetController`](crate::controller::SheetController) and consumed by
//! hosts through [`Sheets`](crate::sheets::Sheets).

use core::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use understory_detent::DetentId;

use crate::host::SheetObserver;

/// Opaque handle of a mounted sheet.
///
/// Handles come from a process-wide counter, so two [`Sheets`](crate::sheets::Sheets)
/// hosts never hand out the same one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SheetHandle(u32);

static NEXT_HANDLE: AtomicU32 = AtomicU32::new(1);

impl SheetHandle {
    /// Allocate a fresh handle.
    pub fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a handle received from the host (e.g., a native view tag).
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SheetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Presentation state of one sheet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PresentationState {
    /// Not on screen.
    #[default]
    Dismissed,
    /// A present or resize to the given index is in flight.
    Presenting(usize),
    /// Resting at the given index.
    Presented(usize),
    /// A dismissal is in flight.
    Dismissing,
}

impl PresentationState {
    /// True while the sheet is on screen or animating in.
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Presenting(_) | Self::Presented(_))
    }
}

/// Completion token for an asynchronous present or dismiss.
///
/// Only the newest ticket of a sheet can settle it; confirming an older one
/// is ignored, so the latest request always wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

/// Resolved height paired with its size-list index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeInfo {
    /// Index in the size list.
    pub index: usize,
    /// Resolved height in pixels.
    pub value: f64,
}

/// What the platform primitive needs to animate a sheet to a detent.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentRequest {
    /// Confirm with this ticket once the animation finished.
    pub ticket: Ticket,
    /// Target size index (already clamped).
    pub index: usize,
    /// Identifier of the target detent.
    pub id: DetentId,
    /// Target height.
    pub value: f64,
}

/// Measured heights of the sheet's body and footer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContentSize {
    /// Body content height.
    pub body: f64,
    /// Footer height.
    pub footer: f64,
}

impl ContentSize {
    /// Body and footer heights.
    pub const fn new(body: f64, footer: f64) -> Self {
        Self { body, footer }
    }

    /// Height an `auto` detent should fit.
    pub fn total(self) -> f64 {
        self.body + self.footer
    }
}

/// Notification emitted to the host application.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SheetEvent {
    /// The sheet finished presenting.
    Present(SizeInfo),
    /// The sheet is gone.
    Dismiss,
    /// The sheet settled on another detent (drag or resize).
    SizeChange(SizeInfo),
}

impl SheetEvent {
    /// Forward this event to the matching observer callback.
    pub fn deliver_to(self, observer: &mut dyn SheetObserver) {
        match self {
            Self::Present(info) => observer.on_present(info),
            Self::Dismiss => observer.on_dismiss(),
            Self::SizeChange(info) => observer.on_size_change(info),
        }
    }
}
