use anyhow::{Context, bail};
use floorplan::store::AppState;
use floorplan::{AppContext, init_logging};
use std::path::PathBuf;

const USAGE: &str = "usage: floorplan <summary | export FILE | import FILE | set-image FILE | rename NAME | reset>";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut context = AppContext::startup().context("could not open floorplan storage")?;

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["summary"] => print_summary(&context.snapshot()),
        ["export", file] => {
            let path = PathBuf::from(*file);
            context
                .export_to(&path)
                .with_context(|| format!("failed to export to {}", path.display()))?;
            println!("exported to {}", path.display());
        }
        ["import", file] => {
            let path = PathBuf::from(*file);
            context
                .import_from(&path)
                .with_context(|| format!("failed to import {}", path.display()))?;
            print_summary(&context.snapshot());
        }
        ["set-image", file] => {
            let path = PathBuf::from(*file);
            context
                .set_plant_image(&path)
                .with_context(|| format!("failed to load image {}", path.display()))?;
            let state = context.snapshot();
            println!("floorplan image set ({}x{})", state.plant.width, state.plant.height);
        }
        ["rename", name] => {
            if !context.set_plant_name(name) {
                bail!("plant name unchanged");
            }
            println!("plant renamed to {}", name.trim());
        }
        ["reset"] => {
            context.reset().context("failed to clear saved state")?;
            println!("state reset");
        }
        _ => bail!(USAGE),
    }

    context.teardown();
    Ok(())
}

fn print_summary(state: &AppState) {
    let plant = &state.plant;
    println!("{} ({}) {}x{}", plant.name, plant.id, plant.width, plant.height);
    println!(
        "image: {}",
        if plant.image_url.is_some() { "set" } else { "none" }
    );
    println!(
        "viewport: offset ({}, {}) scale {:.2}",
        plant.position.x, plant.position.y, plant.scale
    );
    println!("areas: {}", state.areas.areas.len());
    for area in &state.areas.areas {
        let reserved = state.bookings.is_area_reserved(&area.id);
        println!(
            "  {} [{}] \"{}\" at ({}, {}) size {}x{} capacity {} fill {}{}",
            area.id,
            area.kind.label(),
            area.name,
            area.position.x,
            area.position.y,
            area.size.width,
            area.size.height,
            area.capacity,
            state.bookings.viewer_color(&area.id),
            if reserved { " (reserved)" } else { "" }
        );
    }
    println!("bookings: {}", state.bookings.bookings.len());
}
