// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a controller directly: drags, superseded requests, swipe dismissal.
//!
//! No host is involved. The controller hands back requests and events, and
//! this example plays the platform's part by hand.
//!
//! Run:
//! - `cargo run -p understory_demos --example sheet_drag`

use kurbo::Size;
use tracing::Level;
use understory_detent::{AnyPlatform, Capabilities};
use understory_sheet::{SheetController, SheetOptions};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .try_init();

    for caps in [Capabilities::all(), Capabilities::empty()] {
        println!("platform capabilities: {caps:?}");
        let platform = AnyPlatform::from_capabilities(caps);
        let mut sheet = SheetController::new(
            SheetOptions::with_sizes(["25%", "medium", "large"]),
            platform,
        );
        let _ = sheet.container_changed(Size::new(390.0, 800.0));

        for size in sheet.registry().iter() {
            println!("    [{}] {:<10} {:>6.1}", size.index, size.id, size.value);
        }

        // Two presents in a row; only the second one can settle the sheet.
        let first = sheet.present(0);
        let second = sheet.present(1);
        if let (Some(first), Some(second)) = (first, second) {
            println!("stale confirm:  {:?}", sheet.confirm_presented(first.ticket));
            println!("latest confirm: {:?}", sheet.confirm_presented(second.ticket));
        }

        // The user drags to the top detent, then to one that does not exist.
        println!("drag to large:  {:?}", sheet.identifier_changed("large"));
        println!("drag to ???:    {:?}", sheet.identifier_changed("custom-999"));
        println!("state:          {:?}", sheet.state());

        // Swipe down.
        println!("swipe:          {:?}", sheet.did_dismiss());
        println!("swipe again:    {:?}", sheet.did_dismiss());
        println!();
    }
}
