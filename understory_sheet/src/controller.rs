// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation controller: one state machine per sheet.
//!
//! ## States
//!
//! ```text
//! Dismissed ──present──▶ Presenting(i) ──confirm──▶ Presented(i)
//!     ▲                       ▲   │                     │
//!     │                       └───┼──────present(j)─────┘
//!     │                           ▼
//!     └──confirm / did_dismiss── Dismissing ◀──dismiss── (any visible state)
//! ```
//!
//! The controller does no I/O. Requests come back as values
//! ([`PresentRequest`], [`Ticket`]) for the platform to act on, and platform
//! callbacks return the [`SheetEvent`] to forward to observers, if any.
//!
//! ## Re-entrancy
//!
//! Every present or dismiss issues a new [`Ticket`] and supersedes the previous
//! one. Confirmations for superseded tickets are ignored, so rapid calls settle
//! on the most recent request. [`did_dismiss`](SheetController::did_dismiss)
//! is accepted in any state.

use kurbo::Size;
use tracing::{debug, trace, warn};
use understory_detent::{
    AnyPlatform, Damage, DetentPlatform, ResolveInputs, Resolver, SizeRegistry, rules,
};

use crate::error::SheetError;
use crate::options::{SheetConfiguration, SheetOptions};
use crate::types::{ContentSize, PresentRequest, PresentationState, SheetEvent, SizeInfo, Ticket};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pending {
    Present { index: usize, resize: bool },
    Dismiss,
}

/// State machine for a single sheet.
#[derive(Debug)]
pub struct SheetController<P: DetentPlatform = AnyPlatform> {
    options: SheetOptions,
    resolver: Resolver<P>,
    registry: SizeRegistry,
    state: PresentationState,
    pending: Option<(Ticket, Pending)>,
    container: Option<Size>,
    content: Option<ContentSize>,
    next_ticket: u64,
}

impl<P: DetentPlatform> SheetController<P> {
    /// Create a dismissed controller. Sizes resolve once a container size is reported.
    pub fn new(options: SheetOptions, platform: P) -> Self {
        let mut controller = Self {
            options: SheetOptions::default(),
            resolver: Resolver::new(platform),
            registry: SizeRegistry::new(),
            state: PresentationState::Dismissed,
            pending: None,
            container: None,
            content: None,
            next_ticket: 0,
        };
        let _ = controller.set_options(options);
        controller
    }

    /// Current options.
    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// Current presentation state.
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Sizes from the last resolution pass.
    pub fn registry(&self) -> &SizeRegistry {
        &self.registry
    }

    /// Last reported container size.
    pub fn container(&self) -> Option<Size> {
        self.container
    }

    /// Detent setup for the platform.
    pub fn configuration(&self) -> SheetConfiguration {
        SheetConfiguration::new(&self.options, &self.registry)
    }

    /// Size the sheet is resting at, if presented.
    pub fn current_size(&self) -> Option<SizeInfo> {
        match self.state {
            PresentationState::Presented(index) => self.size_info(index).ok(),
            _ => None,
        }
    }

    /// Resolved size at `index`.
    pub fn size_info(&self, index: usize) -> Result<SizeInfo, SheetError> {
        self.registry
            .by_index(index)
            .map(|s| SizeInfo {
                index: s.index,
                value: s.value,
            })
            .ok_or(SheetError::OutOfRangeIndex {
                requested: index,
                len: self.registry.len(),
            })
    }

    /// True while `ticket` is the outstanding request.
    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.pending.is_some_and(|(t, _)| t == ticket)
    }

    /// Replace the options and re-resolve.
    ///
    /// Returns the registry damage if a resolution pass ran.
    pub fn set_options(&mut self, options: SheetOptions) -> Option<Damage> {
        let set = rules(&options.sizes);
        if set.truncated > 0 {
            warn!(
                ignored = set.truncated,
                "sheets support at most 3 sizes (collapsed, half-expanded, expanded); check the sizes prop"
            );
        }
        if set.skipped > 0 {
            debug!(skipped = set.skipped, "dropped sizes of an unsupported type");
        }
        if set.fallbacks > 0 {
            debug!(
                count = set.fallbacks,
                "unrecognized sizes fall back to medium"
            );
        }
        self.resolver.set_rules(set);
        self.options = options;
        self.resolve()
    }

    /// Report the container size. Re-resolves only when it changed.
    pub fn container_changed(&mut self, size: Size) -> Option<Damage> {
        if self.container == Some(size) {
            return None;
        }
        self.container = Some(size);
        self.resolve()
    }

    /// Report fresh content measurements. Re-resolves only when they changed.
    pub fn content_measured(&mut self, content: ContentSize) -> Option<Damage> {
        if self.content == Some(content) {
            return None;
        }
        self.content = Some(content);
        self.resolve()
    }

    fn resolve(&mut self) -> Option<Damage> {
        let container = self.container?;
        let inputs = ResolveInputs::new(container.height)
            .with_content_height(self.content.map(ContentSize::total))
            .with_max_height(self.options.max_height);
        let damage = self.registry.register(self.resolver.resolve(&inputs));
        debug!(
            extent = container.height,
            sizes = self.registry.len(),
            changed = !damage.is_empty(),
            "resolved sheet sizes"
        );

        // The size list may have shrunk under a visible sheet.
        if let Some(last) = self.registry.last().map(|s| s.index) {
            match &mut self.state {
                PresentationState::Presenting(i) | PresentationState::Presented(i) if *i > last => {
                    *i = last;
                }
                _ => {}
            }
            if let Some((_, Pending::Present { index, .. })) = &mut self.pending {
                *index = (*index).min(last);
            }
        }
        Some(damage)
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Start presenting at `index`, clamped to the registered range.
    ///
    /// Fails only when no sizes are resolved yet.
    pub fn try_present(&mut self, index: usize) -> Result<PresentRequest, SheetError> {
        let clamped = self
            .registry
            .clamp_index(index)
            .ok_or(SheetError::NotLaidOut)?;
        if clamped != index {
            debug!(requested = index, clamped, "size index out of range; clamped");
        }
        let size = self.registry.by_index(clamped).ok_or(SheetError::NotLaidOut)?;
        let (id, value) = (size.id.clone(), size.value);

        let resize = match (self.state, self.pending) {
            (PresentationState::Presented(_), _) => true,
            (PresentationState::Presenting(_), Some((_, Pending::Present { resize, .. }))) => {
                resize
            }
            _ => false,
        };

        let ticket = self.issue_ticket();
        self.state = PresentationState::Presenting(clamped);
        self.pending = Some((
            ticket,
            Pending::Present {
                index: clamped,
                resize,
            },
        ));
        Ok(PresentRequest {
            ticket,
            index: clamped,
            id,
            value,
        })
    }

    /// Start presenting at `index`; logs and returns `None` if the sheet has no sizes yet.
    pub fn present(&mut self, index: usize) -> Option<PresentRequest> {
        self.try_present(index)
            .inspect_err(|err| warn!(%err, "present ignored"))
            .ok()
    }

    /// Alias for [`present`](Self::present).
    pub fn resize(&mut self, index: usize) -> Option<PresentRequest> {
        self.present(index)
    }

    /// Start dismissing. A no-op when already dismissed.
    pub fn dismiss(&mut self) -> Option<Ticket> {
        if self.state == PresentationState::Dismissed {
            debug!("dismiss ignored; sheet is not presented");
            return None;
        }
        let ticket = self.issue_ticket();
        self.state = PresentationState::Dismissing;
        self.pending = Some((ticket, Pending::Dismiss));
        Some(ticket)
    }

    /// The platform finished a present or resize.
    ///
    /// Emits [`SheetEvent::Present`] when the sheet came from a hidden state
    /// and [`SheetEvent::SizeChange`] when it resized a visible sheet.
    pub fn confirm_presented(&mut self, ticket: Ticket) -> Option<SheetEvent> {
        let Some((t, Pending::Present { index, resize })) = self.pending else {
            trace!(?ticket, "present confirmation without a pending present");
            return None;
        };
        if t != ticket {
            trace!(?ticket, latest = ?t, "superseded present confirmation");
            return None;
        }
        self.pending = None;
        self.state = PresentationState::Presented(index);
        let info = self.size_info(index).ok()?;
        Some(if resize {
            SheetEvent::SizeChange(info)
        } else {
            SheetEvent::Present(info)
        })
    }

    /// The platform finished a dismissal started by [`dismiss`](Self::dismiss).
    pub fn confirm_dismissed(&mut self, ticket: Ticket) -> Option<SheetEvent> {
        match self.pending {
            Some((t, Pending::Dismiss)) if t == ticket => self.settle_dismissed(),
            _ => {
                trace!(?ticket, "stale dismiss confirmation");
                None
            }
        }
    }

    /// The sheet went away outside of [`dismiss`](Self::dismiss) (e.g., a swipe).
    pub fn did_dismiss(&mut self) -> Option<SheetEvent> {
        self.settle_dismissed()
    }

    fn settle_dismissed(&mut self) -> Option<SheetEvent> {
        self.pending = None;
        if self.state == PresentationState::Dismissed {
            return None;
        }
        self.state = PresentationState::Dismissed;
        Some(SheetEvent::Dismiss)
    }

    /// A drag settled on the detent `id`.
    pub fn try_identifier_changed(&mut self, id: &str) -> Result<SheetEvent, SheetError> {
        let size = self
            .registry
            .lookup(id)
            .ok_or_else(|| SheetError::UnknownIdentifier(id.to_owned()))?;
        let info = SizeInfo {
            index: size.index,
            value: size.value,
        };
        if let PresentationState::Presented(current) = &mut self.state {
            *current = info.index;
        }
        Ok(SheetEvent::SizeChange(info))
    }

    /// A drag settled on the detent `id`. Unknown identifiers are dropped.
    pub fn identifier_changed(&mut self, id: &str) -> Option<SheetEvent> {
        self.try_identifier_changed(id)
            .inspect_err(|err| trace!(%err, "drag notification dropped"))
            .ok()
    }
}
