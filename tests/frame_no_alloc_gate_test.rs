use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent};

use tui_board::core::CancelHandle;
use tui_board::engine::Board;
use tui_board::input::HostEvents;
use tui_board::term::{encode_diff_into, RenderConfig, Surface, SurfaceSink};
use tui_board::Session;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

struct Discard;

impl SurfaceSink for Discard {
    fn present(&mut self, _surface: &Surface) -> anyhow::Result<()> {
        Ok(())
    }
}

#[test]
fn steady_state_frames_do_not_allocate() {
    let board = Board::new_board(20, 10).unwrap();
    let mut session =
        Session::start(board, RenderConfig::default(), Discard, CancelHandle::new()).unwrap();
    let mut out = Vec::with_capacity(256 * 1024);
    let mut prev = session.surface().clone();

    // Warm up.
    assert!(session.paint());

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let ch = if i % 2 == 0 { 'd' } else { 's' };
            session.on_key(KeyEvent::from(KeyCode::Char(ch)));
            assert!(session.paint());
            out.clear();
            encode_diff_into(&prev, session.surface(), &mut out).unwrap();
            prev.copy_from(session.surface());
        }
    });

    assert_eq!(allocs, 0);
}
