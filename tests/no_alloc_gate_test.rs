use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use word_search::catalog::LevelCatalog;
use word_search::core::{cells_between_into, Line, SelectionTracker};
use word_search::engine::GameSession;
use word_search::types::{Coord, Language};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
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

#[test]
fn drag_and_clock_do_not_allocate() {
    // Setup (outside counting) so level generation doesn't trip the gate.
    let catalog = LevelCatalog::new();
    let mut session = GameSession::new();
    session.start(&catalog, 45, Language::En).unwrap();
    let size = session.grid().unwrap().size() as u8;
    let mut tracker = SelectionTracker::new(size as usize);
    let mut line = Line::new();

    let allocs = with_alloc_counting(|| {
        // Sweep every drag end for a handful of anchors.
        for anchor in [(0, 0), (3, 4), (size - 1, size - 1)] {
            tracker.begin(Coord::from(anchor));
            for row in 0..size + 1 {
                for col in 0..size + 1 {
                    let _ = tracker.update(Coord::new(row, col));
                    cells_between_into(Coord::from(anchor), Coord::new(row, col), &mut line);
                }
            }
            let _ = tracker.finish();
        }

        for _ in 0..120 {
            let _ = session.tick();
        }
        session.pause();
        let _ = session.tick();
        session.resume();
    });

    assert!(allocs == 0);
    assert_eq!(session.time_elapsed(), 120);
}
