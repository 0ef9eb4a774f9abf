// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet --heading-base-level=0

//! Understory Sheet: presentation control for bottom sheets.
//!
//! ## Overview
//!
//! A sheet is presented at one of its detents, resized between them by code or
//! by the user, and dismissed. Detent heights come from
//! [`understory_detent`]; this crate adds the per-sheet state machine, a
//! manager that addresses sheets by handle or name, and the notifications
//! a host application observes.
//!
//! ## Layering
//!
//! - [`SheetController`](crate::controller::SheetController) is a pure state
//!   machine. It takes layout and platform callbacks and returns requests and
//!   [`SheetEvent`](crate::types::SheetEvent)s. It does no I/O.
//! - [`Sheets`](crate::sheets::Sheets) owns the controllers and talks to the
//!   platform through [`PresentationHost`](crate::host::PresentationHost) and
//!   [`ContentMeasure`](crate::host::ContentMeasure), forwarding events to a
//!   [`SheetObserver`](crate::host::SheetObserver).
//! - [`names`](crate::names) maps sheet names to handles process-wide.
//!
//! ## Workflow
//!
//! 1) Mount each sheet with its [`SheetOptions`](crate::options::SheetOptions).
//! 2) Report the container size on layout and rotation. Sizes re-resolve and the
//!    host receives a fresh [`SheetConfiguration`](crate::options::SheetConfiguration)
//!    whenever they changed.
//! 3) Call `present`, `resize`, or `dismiss`. The host animates and confirms with
//!    the [`Ticket`](crate::types::Ticket) it was given. Only the newest ticket
//!    settles the sheet.
//! 4) Forward drags (`identifier_changed`) and swipe dismissals (`did_dismiss`).
//!
//! ## Diagnostics
//!
//! Misuse never panics. Unroutable calls log through `tracing` at `warn`, state
//! transitions that were ignored log at `debug` or `trace`, and the `try_*`
//! variants expose the [`SheetError`](crate::error::SheetError).
//!
//! ## Features
//!
//! - `serde`: deserialize [`SheetOptions`](crate::options::SheetOptions) from
//!   `camelCase` host props.

pub mod controller;
pub mod error;
pub mod host;
pub mod names;
pub mod options;
pub mod sheets;
pub mod types;

pub use controller::SheetController;
pub use error::SheetError;
pub use host::{ContentMeasure, EventLog, PresentationHost, SheetObserver};
pub use names::NameRegistry;
pub use options::{SheetConfiguration, SheetOptions};
pub use sheets::{SheetRef, Sheets};
pub use types::{
    ContentSize, PresentRequest, PresentationState, SheetEvent, SheetHandle, SizeInfo, Ticket,
};
