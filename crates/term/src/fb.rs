//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Composite `over` on top of `self` with the given opacity.
    pub fn blend(self, over: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |under: u8, top: u8| -> u8 {
            (under as f32 * (1.0 - a) + top as f32 * a).round() as u8
        };
        Rgb {
            r: mix(self.r, over.r),
            g: mix(self.g, over.g),
            b: mix(self.b, over.b),
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Map signed surface coordinates into the buffer, if in range.
    #[inline(always)]
    fn clip(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((x as u16, y as u16))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Paint a colored rectangle, clipped to the buffer.
    ///
    /// Opaque fills replace the cell; translucent fills tint both the glyph and
    /// the background already there so content beneath stays readable.
    pub fn blend_rect(&mut self, x: i32, y: i32, w: u16, h: u16, color: Rgb, alpha: f32) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                let Some((cx, cy)) = self.clip(x + dx, y + dy) else {
                    continue;
                };
                let Some(i) = self.idx(cx, cy) else {
                    continue;
                };
                let cell = &mut self.cells[i];
                if alpha >= 1.0 {
                    cell.ch = ' ';
                    cell.style.bg = color;
                } else {
                    cell.style.bg = cell.style.bg.blend(color, alpha);
                    cell.style.fg = cell.style.fg.blend(color, alpha);
                }
            }
        }
    }

    /// Write a run of glyphs in `fg`, keeping each cell's background.
    pub fn print_over(&mut self, x: i32, y: i32, s: &str, fg: Rgb) {
        for (dx, ch) in s.chars().enumerate() {
            let Some((cx, cy)) = self.clip(x + dx as i32, y) else {
                continue;
            };
            if let Some(i) = self.idx(cx, cy) {
                let cell = &mut self.cells[i];
                cell.ch = ch;
                cell.style.fg = fg;
            }
        }
    }

    /// Copy `src` into this buffer with its top-left at (`x`, `y`), clipped.
    pub fn blit(&mut self, src: &FrameBuffer, x: i32, y: i32) {
        for sy in 0..src.height() {
            for sx in 0..src.width() {
                let Some((cx, cy)) = self.clip(x + sx as i32, y + sy as i32) else {
                    continue;
                };
                if let Some(cell) = src.get(sx, sy) {
                    self.set(cx, cy, cell);
                }
            }
        }
    }

    /// Text content of one row, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
