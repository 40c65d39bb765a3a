//! TerminalRenderer: flushes a pixel surface to a real terminal.
//!
//! Two surface rows share one terminal row: each character is an upper half
//! block (`▀`) whose foreground is the top pixel and whose background is the
//! bottom pixel. After the first frame only changed runs are re-emitted.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Rgb, Surface};

const HALF_BLOCK: char = '▀';

/// Anything that can show a finished surface.
pub trait SurfaceSink {
    fn present(&mut self, surface: &Surface) -> Result<()>;

    /// Forget what is on screen; the next `present` redraws everything.
    fn invalidate(&mut self) {}
}

/// Raw mode and alternate screen. `exit` must be safe to call after a
/// failed or partial `enter`.
pub trait TerminalMode {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
}

/// The pixels behind one terminal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfBlock {
    pub top: Rgb,
    /// `None` on the last row of an odd-height surface.
    pub bottom: Option<Rgb>,
}

/// Terminal rows needed for a surface of `height` pixels.
pub fn term_rows(height: u16) -> u16 {
    height / 2 + height % 2
}

/// The half block at terminal column `x`, row `row`.
pub fn half_block(surface: &Surface, x: u16, row: u16) -> HalfBlock {
    let y = row * 2;
    HalfBlock {
        top: surface.get(x, y).unwrap_or_default(),
        bottom: surface.get(x, y + 1),
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Surface>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl TerminalMode for TerminalRenderer {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl SurfaceSink for TerminalRenderer {
    fn present(&mut self, surface: &Surface) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) if prev.width() == surface.width() && prev.height() == surface.height() => {
                encode_diff_into(prev, surface, &mut self.buf)?;
                prev.copy_from(surface);
            }
            Some(prev) => {
                debug!("surface size changed, full redraw");
                encode_full_into(surface, &mut self.buf)?;
                prev.copy_from(surface);
            }
            None => {
                debug!("full redraw {}x{}", surface.width(), surface.height());
                encode_full_into(surface, &mut self.buf)?;
                self.last = Some(surface.clone());
            }
        }
        self.flush_buf()
    }

    /// Useful on terminal resize events.
    fn invalidate(&mut self) {
        self.last = None;
    }
}

/// Restore the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut out = io::stdout();
        let _ = out.queue(ResetColor);
        let _ = out.queue(cursor::Show);
        let _ = out.queue(terminal::LeaveAlternateScreen);
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
        previous(info);
    }));
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(surface: &Surface, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let rows = term_rows(surface.height());
    let mut current: Option<HalfBlock> = None;
    for row in 0..rows {
        for x in 0..surface.width() {
            let block = half_block(surface, x, row);
            emit_block(out, block, &mut current)?;
        }
        if row + 1 < rows {
            out.queue(ResetColor)?;
            current = None;
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &Surface, next: &Surface, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<HalfBlock> = None;

    for_each_changed_run(prev, next, |x, row, len| {
        out.queue(cursor::MoveTo(x, row))?;
        for dx in 0..len {
            emit_block(out, half_block(next, x + dx, row), &mut current)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn emit_block(out: &mut Vec<u8>, block: HalfBlock, current: &mut Option<HalfBlock>) -> Result<()> {
    if *current != Some(block) {
        out.queue(SetForegroundColor(rgb_to_color(block.top)))?;
        out.queue(SetBackgroundColor(
            block.bottom.map(rgb_to_color).unwrap_or(Color::Reset),
        ))?;
        *current = Some(block);
    }
    out.queue(Print(HALF_BLOCK))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &Surface,
    next: &Surface,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let rows = term_rows(next.height());

    if prev.width() != w || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for row in 0..rows {
            f(0, row, w)?;
        }
        return Ok(());
    }

    for row in 0..rows {
        let mut x = 0;
        while x < w {
            if half_block(prev, x, row) == half_block(next, x, row) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && half_block(prev, x, row) != half_block(next, x, row) {
                x += 1;
            }
            f(start, row, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::new(255, 255, 255);
    const BLACK: Rgb = Rgb::new(0, 0, 0);

    fn runs(a: &Surface, b: &Surface) -> Vec<(u16, u16, u16)> {
        let mut runs = Vec::new();
        for_each_changed_run(a, b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        runs
    }

    #[test]
    fn odd_height_rounds_up_rows() {
        assert_eq!(term_rows(55), 28);
        assert_eq!(term_rows(54), 27);
        assert_eq!(term_rows(1), 1);
    }

    #[test]
    fn half_block_pairs_rows() {
        let mut s = Surface::new(2, 3, WHITE);
        s.set(1, 1, BLACK);
        assert_eq!(
            half_block(&s, 1, 0),
            HalfBlock {
                top: WHITE,
                bottom: Some(BLACK)
            }
        );
        assert_eq!(
            half_block(&s, 0, 1),
            HalfBlock {
                top: WHITE,
                bottom: None
            }
        );
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = Surface::new(5, 2, WHITE);
        let mut b = a.clone();
        for x in 1..=3 {
            b.set(x, 1, BLACK);
        }
        assert_eq!(runs(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn unchanged_surface_has_no_runs() {
        let a = Surface::new(4, 4, WHITE);
        assert!(runs(&a, &a.clone()).is_empty());

        let mut out = Vec::new();
        encode_diff_into(&a, &a, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(HALF_BLOCK));
    }

    #[test]
    fn resized_surface_is_fully_dirty() {
        let a = Surface::new(3, 2, WHITE);
        let b = Surface::new(3, 4, WHITE);
        assert_eq!(runs(&a, &b), vec![(0, 0, 3), (0, 1, 3)]);
    }

    #[test]
    fn full_encode_prints_every_block() {
        let s = Surface::new(3, 3, WHITE);
        let mut out = Vec::new();
        encode_full_into(&s, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(HALF_BLOCK).count(), 6);
    }

    #[test]
    fn rgb_conversion_keeps_channels() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
