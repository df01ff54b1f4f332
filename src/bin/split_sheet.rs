use sprite_splitter::config::split::{self, SplitMode, SplitToolConfig};
use sprite_splitter::diagnostics::SplitReport;
use sprite_splitter::grid;
use sprite_splitter::image::io::{load_argb_image, to_json_pretty};
use sprite_splitter::{BoundingBox, SpriteSplitter};
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "split_sheet".to_string());
    let config = split::parse_cli(&program)?;

    let sheet = load_argb_image(&config.input)?;
    let (width, height) = (sheet.width(), sheet.height());

    match config.mode {
        SplitMode::Auto => {
            let splitter = SpriteSplitter::new(config.params);
            let report = splitter
                .process_with_diagnostics(sheet.as_view())
                .map_err(|e| format!("Failed to split {}: {e}", config.input.display()))?;
            if config.output.format.includes_text() {
                print_report(&config, &report);
            }
            if config.output.format.includes_json() {
                println!("{}", to_json_pretty(&report)?);
            }
        }
        SplitMode::Fixed(layout) => {
            let cells = grid::split_fixed(width, height, layout).map_err(|e| e.to_string())?;
            print_cells(&config, &cells)?;
        }
        SplitMode::Grid { rows, columns } => {
            let cells = grid::split_rows_columns(width, height, rows, columns)
                .map_err(|e| e.to_string())?;
            print_cells(&config, &cells)?;
        }
    }
    Ok(())
}

fn print_report(config: &SplitToolConfig, report: &SplitReport) {
    let res = &report.result;
    println!("Split summary for {}", config.input.display());
    println!("  image: {}x{}", report.input.width, report.input.height);
    println!("  sprites: {} in {} rows", res.len(), report.rows());
    println!(
        "  regions: {} (particles merged: {}, foreground pixels: {})",
        res.stats.regions, res.stats.particles_merged, res.stats.foreground_pixels
    );
    let stages = res
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  timings (ms): {stages} total={:.3}", res.latency_ms);
    print_sprites(&res.sprites);
}

fn print_cells(config: &SplitToolConfig, cells: &[BoundingBox]) -> Result<(), String> {
    if config.output.format.includes_text() {
        println!("Grid split for {}: {} cells", config.input.display(), cells.len());
        print_sprites(cells);
    }
    if config.output.format.includes_json() {
        println!("{}", to_json_pretty(&cells)?);
    }
    Ok(())
}

fn print_sprites(sprites: &[BoundingBox]) {
    for s in sprites {
        println!(
            "  #{:<4} row={} col={} x={} y={} {}x{}",
            s.id.0,
            format_opt(s.row),
            format_opt(s.column),
            s.x,
            s.y,
            s.width,
            s.height
        );
    }
}

fn format_opt(val: Option<usize>) -> String {
    val.map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}
