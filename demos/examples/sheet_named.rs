// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheets configured from JSON props and addressed by name.
//!
//! Run:
//! - `cargo run -p understory_demos --example sheet_named`

use kurbo::Size;
use tracing::Level;
use understory_sheet::{
    ContentSize, PresentRequest, PresentationHost, SheetConfiguration, SheetEvent, SheetHandle,
    SheetObserver, SheetOptions, Sheets, SizeInfo, Ticket,
};

#[derive(Default)]
struct QueueHost {
    pending: Vec<(SheetHandle, Ticket)>,
}

impl PresentationHost for QueueHost {
    fn configure(&mut self, _: SheetHandle, _: &SheetConfiguration) {}

    fn present_at(&mut self, handle: SheetHandle, request: &PresentRequest) {
        self.pending.push((handle, request.ticket));
    }

    fn dismiss(&mut self, handle: SheetHandle, ticket: Ticket) {
        self.pending.push((handle, ticket));
    }
}

struct Printer;

impl SheetObserver for Printer {
    fn on_present(&mut self, info: SizeInfo) {
        println!("onPresent    index={} value={:.1}", info.index, info.value);
    }

    fn on_dismiss(&mut self) {
        println!("onDismiss");
    }

    fn on_size_change(&mut self, info: SizeInfo) {
        println!("onSizeChange index={} value={:.1}", info.index, info.value);
    }
}

const PROPS: &[&str] = &[
    r#"{ "name": "filters", "sizes": ["auto", "large"], "maxHeight": 640 }"#,
    r#"{ "name": "share", "sizes": [320, "80%", "large", "medium"], "dismissible": false }"#,
];

fn main() -> Result<(), serde_json::Error> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .try_init();

    let mut sheets: Sheets = Sheets::default();
    let mut host = QueueHost::default();
    let mut observer = Printer;

    let mut handles = Vec::new();
    for props in PROPS {
        let options: SheetOptions = serde_json::from_str(props)?;
        let handle = sheets.mount(options);
        sheets.container_changed(handle, Size::new(430.0, 932.0), &mut host);
        handles.push(handle);
    }

    let content = ContentSize::new(380.0, 56.0);
    let _ = sheets.present("filters", 0, &content, &mut host);
    let _ = sheets.present("share", 5, &content, &mut host);
    // Logs a warning and does nothing.
    let _ = sheets.present("missing", 0, &content, &mut host);

    for (handle, ticket) in host.pending.drain(..) {
        if let Some(SheetEvent::Present(_)) = sheets.confirm_presented(handle, ticket, &mut observer) {
            println!("    ^ {handle}");
        }
    }

    let _ = sheets.dismiss("filters", &mut host);
    for (handle, ticket) in host.pending.drain(..) {
        sheets.confirm_dismissed(handle, ticket, &mut observer);
    }

    // The name outlives the sheet; addressing it now is reported, not fatal.
    if let Some(&filters) = handles.first() {
        let _ = sheets.unmount(filters);
    }
    if let Err(err) = sheets.try_present("filters", 0, &content, &mut host) {
        println!("after unmount: {err}");
    }
    Ok(())
}
