// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet manager: mounted sheets, addressed by handle or by name.
//!
//! [`Sheets`] owns one [`SheetController`] per mounted sheet and wires it to
//! the collaborators in [`host`](crate::host). Imperative calls that cannot be
//! routed (unknown name, unmounted handle, no layout yet) log a warning and do
//! nothing; the `try_*` variants return the [`SheetError`] instead.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_sheet::{
//!     ContentSize, EventLog, PresentRequest, PresentationHost, SheetConfiguration,
//!     SheetEvent, SheetHandle, SheetOptions, Sheets, SizeInfo, Ticket,
//! };
//!
//! #[derive(Default)]
//! struct Native(Vec<PresentRequest>);
//!
//! impl PresentationHost for Native {
//!     fn configure(&mut self, _: SheetHandle, _: &SheetConfiguration) {}
//!     fn present_at(&mut self, _: SheetHandle, request: &PresentRequest) {
//!         self.0.push(request.clone());
//!     }
//!     fn dismiss(&mut self, _: SheetHandle, _: Ticket) {}
//! }
//!
//! let mut sheets: Sheets = Sheets::default();
//! let mut native = Native::default();
//! let mut log = EventLog::default();
//!
//! let sheet = sheets.mount(SheetOptions::with_sizes(["medium", "large"]));
//! sheets.container_changed(sheet, Size::new(390.0, 800.0), &mut native);
//! sheets.present(sheet, 0, &ContentSize::default(), &mut native);
//!
//! let ticket = native.0[0].ticket;
//! sheets.confirm_presented(sheet, ticket, &mut log);
//! assert_eq!(
//!     log.drain(),
//!     [SheetEvent::Present(SizeInfo { index: 0, value: 400.0 })]
//! );
//! ```

use std::collections::BTreeMap;

use kurbo::Size;
use tracing::{debug, warn};
use understory_detent::{AnyPlatform, Damage, DetentPlatform};

use crate::controller::SheetController;
use crate::error::SheetError;
use crate::host::{ContentMeasure, PresentationHost, SheetObserver};
use crate::names;
use crate::options::SheetOptions;
use crate::types::{SheetEvent, SheetHandle, Ticket};

/// Address of a sheet for imperative calls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SheetRef<'a> {
    /// A handle returned by [`Sheets::mount`].
    Handle(SheetHandle),
    /// A name registered through [`SheetOptions::name`].
    Name(&'a str),
}

impl From<SheetHandle> for SheetRef<'_> {
    fn from(handle: SheetHandle) -> Self {
        Self::Handle(handle)
    }
}

impl<'a> From<&'a str> for SheetRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

/// Mounted sheets of one host.
#[derive(Debug, Default)]
pub struct Sheets<P: DetentPlatform + Clone = AnyPlatform> {
    platform: P,
    sheets: BTreeMap<SheetHandle, SheetController<P>>,
}

impl<P: DetentPlatform + Clone> Sheets<P> {
    /// Create an empty manager whose sheets resolve on `platform`.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            sheets: BTreeMap::new(),
        }
    }

    /// Mount a sheet under a fresh handle.
    pub fn mount(&mut self, options: SheetOptions) -> SheetHandle {
        let handle = SheetHandle::next();
        self.mount_as(handle, options);
        handle
    }

    /// Mount a sheet under a handle the host already owns (e.g., a view tag).
    ///
    /// A sheet already mounted under `handle` is replaced.
    pub fn mount_as(&mut self, handle: SheetHandle, options: SheetOptions) {
        register_name(&options, handle);
        let controller = SheetController::new(options, self.platform.clone());
        if self.sheets.insert(handle, controller).is_some() {
            debug!(%handle, "replaced mounted sheet");
        }
    }

    /// Replace the options of a mounted sheet.
    pub fn update(
        &mut self,
        handle: SheetHandle,
        options: SheetOptions,
        host: &mut dyn PresentationHost,
    ) {
        let Some(controller) = self.sheets.get_mut(&handle) else {
            warn!(%handle, "update ignored; sheet is not mounted");
            return;
        };
        register_name(&options, handle);
        let damage = controller.set_options(options);
        configure(handle, controller, damage, host);
    }

    /// Remove a sheet.
    ///
    /// Its name stays registered; see [`names`](crate::names).
    pub fn unmount(&mut self, handle: SheetHandle) -> Option<SheetController<P>> {
        self.sheets.remove(&handle)
    }

    /// Controller of a mounted sheet.
    pub fn get(&self, handle: SheetHandle) -> Option<&SheetController<P>> {
        self.sheets.get(&handle)
    }

    /// Number of mounted sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// True if no sheets are mounted.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Resolve `target` to the handle of a mounted sheet.
    pub fn lookup<'a>(&self, target: impl Into<SheetRef<'a>>) -> Result<SheetHandle, SheetError> {
        let handle = match target.into() {
            SheetRef::Handle(handle) => handle,
            SheetRef::Name(name) => names::resolve(name)?,
        };
        if self.sheets.contains_key(&handle) {
            Ok(handle)
        } else {
            Err(SheetError::UnknownHandle(handle))
        }
    }

    fn controller_mut(
        &mut self,
        handle: SheetHandle,
    ) -> Result<&mut SheetController<P>, SheetError> {
        self.sheets
            .get_mut(&handle)
            .ok_or(SheetError::UnknownHandle(handle))
    }

    /// Report the container size of a sheet (layout or rotation).
    pub fn container_changed(
        &mut self,
        handle: SheetHandle,
        size: Size,
        host: &mut dyn PresentationHost,
    ) {
        let Some(controller) = self.sheets.get_mut(&handle) else {
            warn!(%handle, "layout ignored; sheet is not mounted");
            return;
        };
        let damage = controller.container_changed(size);
        configure(handle, controller, damage, host);
    }

    /// Measure the content, re-resolve, and present `target` at `index`.
    pub fn try_present<'a>(
        &mut self,
        target: impl Into<SheetRef<'a>>,
        index: usize,
        measure: &dyn ContentMeasure,
        host: &mut dyn PresentationHost,
    ) -> Result<Ticket, SheetError> {
        let handle = self.lookup(target)?;
        let controller = self.controller_mut(handle)?;
        let damage = controller.content_measured(measure.measure());
        configure(handle, controller, damage, host);
        let request = controller.try_present(index)?;
        host.present_at(handle, &request);
        Ok(request.ticket)
    }

    /// Present `target` at `index`, logging when it cannot be routed.
    pub fn present<'a>(
        &mut self,
        target: impl Into<SheetRef<'a>>,
        index: usize,
        measure: &dyn ContentMeasure,
        host: &mut dyn PresentationHost,
    ) -> Option<Ticket> {
        self.try_present(target, index, measure, host)
            .inspect_err(|err| warn!(%err, "present ignored"))
            .ok()
    }

    /// Move a visible sheet to `index`. Same as [`present`](Self::present).
    pub fn resize<'a>(
        &mut self,
        target: impl Into<SheetRef<'a>>,
        index: usize,
        measure: &dyn ContentMeasure,
        host: &mut dyn PresentationHost,
    ) -> Option<Ticket> {
        self.present(target, index, measure, host)
    }

    /// Dismiss `target`. `Ok(None)` when it was not presented.
    pub fn try_dismiss<'a>(
        &mut self,
        target: impl Into<SheetRef<'a>>,
        host: &mut dyn PresentationHost,
    ) -> Result<Option<Ticket>, SheetError> {
        let handle = self.lookup(target)?;
        let ticket = self.controller_mut(handle)?.dismiss();
        if let Some(ticket) = ticket {
            host.dismiss(handle, ticket);
        }
        Ok(ticket)
    }

    /// Dismiss `target`, logging when it cannot be routed.
    pub fn dismiss<'a>(
        &mut self,
        target: impl Into<SheetRef<'a>>,
        host: &mut dyn PresentationHost,
    ) -> Option<Ticket> {
        self.try_dismiss(target, host)
            .inspect_err(|err| warn!(%err, "dismiss ignored"))
            .ok()
            .flatten()
    }

    fn notify(
        &mut self,
        handle: SheetHandle,
        observer: &mut dyn SheetObserver,
        f: impl FnOnce(&mut SheetController<P>) -> Option<SheetEvent>,
    ) -> Option<SheetEvent> {
        let Some(controller) = self.sheets.get_mut(&handle) else {
            debug!(%handle, "callback for an unmounted sheet");
            return None;
        };
        let event = f(controller)?;
        event.deliver_to(observer);
        Some(event)
    }

    /// The platform finished the present or resize identified by `ticket`.
    pub fn confirm_presented(
        &mut self,
        handle: SheetHandle,
        ticket: Ticket,
        observer: &mut dyn SheetObserver,
    ) -> Option<SheetEvent> {
        self.notify(handle, observer, |c| c.confirm_presented(ticket))
    }

    /// The platform finished the dismissal identified by `ticket`.
    pub fn confirm_dismissed(
        &mut self,
        handle: SheetHandle,
        ticket: Ticket,
        observer: &mut dyn SheetObserver,
    ) -> Option<SheetEvent> {
        self.notify(handle, observer, |c| c.confirm_dismissed(ticket))
    }

    /// A user drag settled on the detent `id`.
    pub fn identifier_changed(
        &mut self,
        handle: SheetHandle,
        id: &str,
        observer: &mut dyn SheetObserver,
    ) -> Option<SheetEvent> {
        self.notify(handle, observer, |c| c.identifier_changed(id))
    }

    /// The sheet disappeared on its own (swipe or system dismissal).
    pub fn did_dismiss(
        &mut self,
        handle: SheetHandle,
        observer: &mut dyn SheetObserver,
    ) -> Option<SheetEvent> {
        self.notify(handle, observer, |c| c.did_dismiss())
    }
}

fn register_name(options: &SheetOptions, handle: SheetHandle) {
    if let Some(name) = options.name.as_deref()
        && let Some(previous) = names::register(name, handle).filter(|&p| p != handle)
    {
        debug!(name, %previous, %handle, "sheet name now points at another sheet");
    }
}

fn configure<P: DetentPlatform>(
    handle: SheetHandle,
    controller: &SheetController<P>,
    damage: Option<Damage>,
    host: &mut dyn PresentationHost,
) {
    if damage.is_some_and(|d| !d.is_empty()) {
        host.configure(handle, &controller.configuration());
    }
}
