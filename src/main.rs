use sprite_splitter::image::PixelBuffer;
use sprite_splitter::{SplitParams, SpriteSplitter};

fn main() {
    // Paints a 3x2 sheet of opaque squares on a transparent background and
    // prints the sprites the splitter finds
    let (w, h) = (96usize, 64usize);
    let mut sheet = vec![0u32; w * h];
    for row in 0..2 {
        for col in 0..3 {
            let (x0, y0) = (col * 32 + 4, row * 32 + 4);
            for y in y0..y0 + 24 {
                sheet[y * w + x0..y * w + x0 + 24].fill(0xFF80_4020);
            }
        }
    }

    let view = match PixelBuffer::new(&sheet, w, h) {
        Ok(view) => view,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let splitter = SpriteSplitter::new(SplitParams::default());
    match splitter.process(view) {
        Ok(res) => {
            println!("sprites={} latency_ms={:.3}", res.len(), res.latency_ms);
            for s in &res.sprites {
                println!(
                    "  row={:?} col={:?} x={} y={} {}x{}",
                    s.row, s.column, s.x, s.y, s.width, s.height
                );
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
