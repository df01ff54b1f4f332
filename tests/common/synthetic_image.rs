/// Opaque sprite colour used by the generators.
pub const OPAQUE: u32 = 0xFF20_8040;

/// Tightly packed ARGB sheet on a fully transparent background.
pub struct Sheet {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Sheet {
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be positive");
        Self {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) -> &mut Self {
        assert!(x + w <= self.width && y + h <= self.height, "rect outside sheet");
        for row in y..y + h {
            let start = row * self.width + x;
            self.pixels[start..start + w].fill(color);
        }
        self
    }
}

/// Generates a `rows x columns` sheet of square cells, each holding one
/// centred opaque square of side `sprite`.
pub fn grid_sheet(rows: usize, columns: usize, cell: usize, sprite: usize) -> Sheet {
    assert!(sprite > 0 && sprite <= cell, "sprite must fit its cell");
    let mut sheet = Sheet::blank(columns * cell, rows * cell);
    let offset = (cell - sprite) / 2;
    for r in 0..rows {
        for c in 0..columns {
            sheet.fill_rect(c * cell + offset, r * cell + offset, sprite, sprite, OPAQUE);
        }
    }
    sheet
}
