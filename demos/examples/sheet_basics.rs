// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Present, resize, rotate, and dismiss a single sheet.
//!
//! The host below stands in for the native sheet: it prints what it is asked
//! to do and confirms every animation immediately.
//!
//! Run:
//! - `cargo run -p understory_demos --example sheet_basics`

use kurbo::Size;
use tracing::Level;
use understory_sheet::{
    ContentSize, EventLog, PresentRequest, PresentationHost, SheetConfiguration, SheetHandle,
    SheetOptions, Sheets, Ticket,
};

#[derive(Default)]
struct PrintingHost {
    last: Option<Ticket>,
}

impl PresentationHost for PrintingHost {
    fn configure(&mut self, handle: SheetHandle, config: &SheetConfiguration) {
        println!("{handle} configure:");
        for (id, value) in &config.detents {
            println!("    {id:<12} {value:>7.1}");
        }
    }

    fn present_at(&mut self, handle: SheetHandle, request: &PresentRequest) {
        println!("{handle} animate to {} ({:.1})", request.id, request.value);
        self.last = Some(request.ticket);
    }

    fn dismiss(&mut self, handle: SheetHandle, ticket: Ticket) {
        println!("{handle} animate out");
        self.last = Some(ticket);
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .try_init();

    let mut sheets: Sheets = Sheets::default();
    let mut host = PrintingHost::default();
    let mut log = EventLog::default();

    let sheet = sheets.mount(
        SheetOptions::with_sizes(["auto", "60%", "large"])
            .max_height(720.0)
            .dimmed(true, Some(1)),
    );

    // Portrait layout.
    sheets.container_changed(sheet, Size::new(390.0, 844.0), &mut host);

    let content = ContentSize::new(212.0, 48.0);
    let _ = sheets.present(sheet, 0, &content, &mut host);
    if let Some(ticket) = host.last.take() {
        sheets.confirm_presented(sheet, ticket, &mut log);
    }

    let _ = sheets.resize(sheet, 2, &content, &mut host);
    if let Some(ticket) = host.last.take() {
        sheets.confirm_presented(sheet, ticket, &mut log);
    }

    // Rotation keeps identifiers and changes values.
    sheets.container_changed(sheet, Size::new(844.0, 390.0), &mut host);

    let _ = sheets.dismiss(sheet, &mut host);
    if let Some(ticket) = host.last.take() {
        sheets.confirm_dismissed(sheet, ticket, &mut log);
    }

    println!("events:");
    for event in log.drain() {
        println!("    {event:?}");
    }
}
