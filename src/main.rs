use anyhow::{bail, Context, Result};

use seatkit::designer::{render_editor, Editor, Element, VenueLayout};
use seatkit::init_logging;
use seatkit_core::geometry::polygon_centroid;

const USAGE: &str = "\
seatkit - venue seating layout toolkit

Usage:
  seatkit inspect <layout.json>            summarize a layout file
  seatkit render <layout.json> <out.png>   rasterize a layout file
  seatkit migrate <layout.json> <out.json> normalize a legacy layout file
  seatkit --version";

fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--version") => {
            println!("seatkit {} (built {})", seatkit::VERSION, seatkit::BUILD_DATE);
            Ok(())
        }
        Some("inspect") if args.len() == 2 => inspect(&args[1]),
        Some("render") if args.len() == 3 => render(&args[1], &args[2]),
        Some("migrate") if args.len() == 3 => migrate(&args[1], &args[2]),
        _ => {
            eprintln!("{USAGE}");
            bail!("invalid arguments");
        }
    }
}

fn inspect(path: &str) -> Result<()> {
    let layout = VenueLayout::load_from_file(path)?;
    let canvas = layout.to_canvas();

    println!("categories: {}", canvas.categories().len());
    for category in canvas.categories().iter() {
        let used = canvas
            .elements()
            .iter()
            .filter(|e| e.category_id() == Some(category.id.as_str()))
            .count();
        println!(
            "  {:<16} {:<20} {}  ({} elements)",
            category.id, category.name, category.color, used
        );
    }

    println!("elements: {}", canvas.len());
    for element in canvas.elements() {
        match element {
            Element::Seat(seat) => {
                println!("  seat    #{:<6} at ({:.0}, {:.0})", seat.number, seat.x, seat.y)
            }
            Element::Section(section) => println!(
                "  section {:<12} at ({:.0}, {:.0}) capacity {}",
                section.label, section.x, section.y, section.capacity
            ),
            Element::Polygon(polygon) => {
                let anchor = polygon_centroid(&polygon.points);
                println!(
                    "  area    {:<12} {} points, label anchor ({:.0}, {:.0})",
                    polygon.label,
                    polygon.points.len(),
                    anchor.x,
                    anchor.y
                );
            }
            Element::Stage(stage) => println!(
                "  stage   {:<12} at ({:.0}, {:.0}) {}x{}",
                stage.label, stage.x, stage.y, stage.width, stage.height
            ),
        }
    }
    println!("grid: {}", if layout.show_grid { "on" } else { "off" });
    Ok(())
}

fn render(path: &str, out: &str) -> Result<()> {
    let layout = VenueLayout::load_from_file(path)?;
    let mut editor = Editor::with_canvas("render", layout.to_canvas());
    editor.set_show_grid(layout.show_grid);
    if let Some(bounds) = editor.canvas().content_bounds() {
        editor.viewport_mut().fit_to_bounds(&bounds, 1280.0, 800.0);
    }

    let image = render_editor(&editor, 1280, 800);
    image.save(out).context("Failed to write PNG")?;
    tracing::info!(out, "rendered layout");
    Ok(())
}

fn migrate(path: &str, out: &str) -> Result<()> {
    let layout = VenueLayout::load_from_file(path)?;
    layout.save_to_file(out)?;
    tracing::info!(out, elements = layout.elements.len(), "migrated layout");
    Ok(())
}
