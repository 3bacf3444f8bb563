//! Dropdown Select Walkthrough
//!
//! Drives the widget API the way a host toolkit would:
//! - Trigger projection (placeholder, selected value, open indicator)
//! - Opening the overlay and assembling the popover/list configs
//! - Activating rows (select, toggle off) with a change observer

use std::fs::File;

use log::LevelFilter;
use picklist::prelude::*;
use simplelog::{Config, WriteLogger};

fn main() -> Result<(), SelectError> {
    let _ = WriteLogger::init(
        LevelFilter::Trace,
        Config::default(),
        File::create("dropdown-demo.log").expect("failed to create log file"),
    );

    let catalog = Catalog::from_entries(&[
        ("low", "Low priority"),
        ("medium", "Medium priority"),
        ("high", "High priority"),
    ]);
    let select = Select::with_default(catalog, SelectOption::new("medium", "Medium priority"));
    select.set_on_change(|selected| {
        println!(
            "  observer: selection is now {:?}",
            selected.map(|opt| opt.value.as_str())
        );
    });

    let trigger = select.trigger("Select priority");
    let list = select.list().with_overlay(OverlayConfig {
        max_height: Some(8),
        ..OverlayConfig::default()
    });

    println!("trigger: {:?}", trigger.view(false)?);

    // The user taps the trigger; the popover primitive opens the overlay.
    trigger.activate()?;
    println!("trigger: {:?}", trigger.view(false)?);

    let screen = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(4, 2, 24, 1);
    let request = list.overlay_request(anchor)?;
    println!("overlay resolves to {:?}", request.resolve(screen));
    println!("list view config: {:?}", list.list_view()?);

    // The virtualization primitive renders the visible rows.
    for index in 0..list.row_count()? {
        if let Some(row) = list.row(index)? {
            let view = row.view(false)?;
            let marker = if view.checked { "✓" } else { " " };
            println!("  [{marker}] {}", view.label);
        }
    }

    // Activating a row selects it and dismisses the overlay.
    if let Some(row) = list.row(2)? {
        row.activate()?;
    }
    println!("open after activation: {}", select.is_open());
    println!("trigger: {}", trigger.display_text()?);

    // Activating the same row again toggles the selection off.
    trigger.activate()?;
    if let Some(row) = list.row(2)? {
        row.activate()?;
    }
    println!("trigger: {}", trigger.display_text()?);

    Ok(())
}
