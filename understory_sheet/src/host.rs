// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces: content measurement, the platform presentation
//! primitive, and the notification sink.
//!
//! The controller never owns any of these. [`Sheets`](crate::sheets::Sheets)
//! borrows them per call, so the UI tree that owns the sheets also owns its
//! observers and no reference cycle can form.

use crate::options::SheetConfiguration;
use crate::types::{ContentSize, PresentRequest, SheetEvent, SheetHandle, SizeInfo, Ticket};

/// Measures the sheet content before each present.
pub trait ContentMeasure {
    /// Current body and footer heights.
    fn measure(&self) -> ContentSize;
}

impl ContentMeasure for ContentSize {
    fn measure(&self) -> ContentSize {
        *self
    }
}

impl<F: Fn() -> ContentSize> ContentMeasure for F {
    fn measure(&self) -> ContentSize {
        self()
    }
}

/// The native presentation primitive.
///
/// Completion is reported back asynchronously through
/// [`Sheets::confirm_presented`](crate::sheets::Sheets::confirm_presented) and
/// [`Sheets::confirm_dismissed`](crate::sheets::Sheets::confirm_dismissed) with
/// the ticket passed here. User drags and swipe dismissals are reported through
/// [`Sheets::identifier_changed`](crate::sheets::Sheets::identifier_changed) and
/// [`Sheets::did_dismiss`](crate::sheets::Sheets::did_dismiss).
pub trait PresentationHost {
    /// Install a new detent setup.
    fn configure(&mut self, handle: SheetHandle, config: &SheetConfiguration);

    /// Animate the sheet in, or to another detent if already visible.
    fn present_at(&mut self, handle: SheetHandle, request: &PresentRequest);

    /// Animate the sheet out.
    fn dismiss(&mut self, handle: SheetHandle, ticket: Ticket);
}

/// Receives lifecycle notifications. Every callback defaults to doing nothing.
pub trait SheetObserver {
    /// The sheet finished presenting at `info`.
    fn on_present(&mut self, info: SizeInfo) {
        let _ = info;
    }

    /// The sheet was dismissed.
    fn on_dismiss(&mut self) {}

    /// The sheet settled at another size.
    fn on_size_change(&mut self, info: SizeInfo) {
        let _ = info;
    }
}

/// Observer that records every event in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    /// Recorded events, oldest first.
    pub events: Vec<SheetEvent>,
}

impl EventLog {
    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<SheetEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SheetObserver for EventLog {
    fn on_present(&mut self, info: SizeInfo) {
        self.events.push(SheetEvent::Present(info));
    }

    fn on_dismiss(&mut self) {
        self.events.push(SheetEvent::Dismiss);
    }

    fn on_size_change(&mut self, info: SizeInfo) {
        self.events.push(SheetEvent::SizeChange(info));
    }
}
