//! Pixel surface the grid is painted into.

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

    /// Parse `#RRGGBB`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// 2D buffer of RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl Surface {
    pub fn new(width: u16, height: u16, fill: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u16, y: u16, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Fill a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end {
            return;
        }
        for py in y..y_end {
            let row = (py as usize) * (self.width as usize);
            self.pixels[row + x as usize..row + x_end as usize].fill(color);
        }
    }

    pub fn hline(&mut self, y: u16, color: Rgb) {
        self.fill_rect(0, y, self.width, 1, color);
    }

    pub fn vline(&mut self, x: u16, color: Rgb) {
        self.fill_rect(x, 0, 1, self.height, color);
    }

    /// Copy `other` into `self`, reusing the allocation.
    pub fn copy_from(&mut self, other: &Surface) {
        self.width = other.width;
        self.height = other.height;
        self.pixels.clone_from(&other.pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgb::from_hex("#CCCCCC"), Some(Rgb::new(204, 204, 204)));
        assert_eq!(Rgb::from_hex("#00ff10"), Some(Rgb::new(0, 255, 16)));
        assert_eq!(Rgb::from_hex("CCCCCC"), None);
        assert_eq!(Rgb::from_hex("#CCC"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut s = Surface::new(4, 3, BLACK);
        s.fill_rect(2, 1, 10, 10, RED);
        assert_eq!(s.get(1, 1), Some(BLACK));
        assert_eq!(s.get(2, 1), Some(RED));
        assert_eq!(s.get(3, 2), Some(RED));
        assert_eq!(s.get(2, 0), Some(BLACK));
        s.fill_rect(9, 0, 2, 2, RED);
        assert_eq!(s.pixels().iter().filter(|&&p| p == RED).count(), 4);
    }

    #[test]
    fn lines_span_the_surface() {
        let mut s = Surface::new(3, 3, BLACK);
        s.hline(1, RED);
        s.vline(0, RED);
        assert_eq!(s.get(2, 1), Some(RED));
        assert_eq!(s.get(0, 2), Some(RED));
        assert_eq!(s.get(2, 2), Some(BLACK));
    }

    #[test]
    fn out_of_range_access_is_ignored() {
        let mut s = Surface::new(2, 2, BLACK);
        s.set(5, 5, RED);
        assert_eq!(s.get(5, 5), None);
        assert!(s.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn copy_from_matches_source() {
        let mut a = Surface::new(2, 2, BLACK);
        a.set(1, 1, RED);
        let mut b = Surface::new(1, 1, RED);
        b.copy_from(&a);
        assert_eq!(a, b);
    }
}
