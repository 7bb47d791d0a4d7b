use std::path::Path;

use console::Style;
use skymap_core::consts::{GRID_COLS, GRID_ROWS};
use skymap_core::mosaic::{Composite, CompositeReport};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    warn: Style,
    empty: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warn: Style::new().yellow(),
            empty: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_composite_summary(dir: &Path, composite: &Composite, report: &CompositeReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Sky Mosaic"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(10)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Tiles"), s.path.apply_to(dir.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", composite.width(), composite.height()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Cell"),
        s.value.apply_to(format!("{}x{}", composite.tile_width, composite.tile_height))
    );
    println!("  {:<14}{}", s.label.apply_to("Layout"), s.value.apply_to(composite.layout));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Placed"),
        s.value.apply_to(format!("{}/{}", report.placed(), report.listed))
    );
    if report.ignored_overflow > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Overflow"),
            s.warn.apply_to(format!("{} ignored", report.ignored_overflow))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Grid"));
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            match composite.cell(row, col) {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    println!("    ({row},{col})  {}", s.value.apply_to(name));
                }
                None => println!("    ({row},{col})  {}", s.empty.apply_to("empty")),
            }
        }
    }

    if !report.skipped.is_empty() {
        println!();
        println!("  {}", s.header.apply_to("Skipped"));
        for path in &report.skipped {
            println!("    {}", s.warn.apply_to(path.display()));
        }
    }
    println!();
}
