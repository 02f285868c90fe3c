//! Allocation accounting
//!
//! A counting wrapper around the system allocator, used to compare the heap
//! cost of different range selections. Counters live in the allocator
//! instance; a binary opts in by installing one as its global allocator:
//!
//! ```no_run
//! use glyph_ranges::alloc::CountingAllocator;
//!
//! #[global_allocator]
//! static ALLOC: CountingAllocator = CountingAllocator::new();
//! # fn main() {}
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

/// Read access to allocation counters
pub trait AllocationStats {
    /// Bytes currently allocated
    fn allocated(&self) -> usize;
    /// Highest value `allocated` has reached
    fn peak(&self) -> usize;
    /// Number of allocations performed (reallocations count once)
    fn allocations(&self) -> usize;

    /// Capture the current values
    fn snapshot(&self) -> AllocationSnapshot {
        AllocationSnapshot {
            allocated: self.allocated(),
            peak: self.peak(),
            allocations: self.allocations(),
        }
    }
}

/// Point-in-time copy of allocation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AllocationSnapshot {
    pub allocated: usize,
    pub peak: usize,
    pub allocations: usize,
}

/// [`System`] allocator that counts live bytes by layout size
#[derive(Debug, Default)]
pub struct CountingAllocator {
    allocated: AtomicUsize,
    peak: AtomicUsize,
    allocations: AtomicUsize,
}

impl CountingAllocator {
    pub const fn new() -> Self {
        Self {
            allocated: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            allocations: AtomicUsize::new(0),
        }
    }

    fn record_alloc(&self, size: usize) {
        let now = self.allocated.fetch_add(size, Ordering::Relaxed) + size;
        self.peak.fetch_max(now, Ordering::Relaxed);
        self.allocations.fetch_add(1, Ordering::Relaxed);
    }

    fn record_dealloc(&self, size: usize) {
        self.allocated.fetch_sub(size, Ordering::Relaxed);
    }
}

impl AllocationStats for CountingAllocator {
    fn allocated(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }

    fn allocations(&self) -> usize {
        self.allocations.load(Ordering::Relaxed)
    }
}

// SAFETY: every call is forwarded unchanged to `System`; the counters are
// atomics and never touch the returned memory.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            self.record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        self.record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            self.record_dealloc(layout.size());
            self.record_alloc(new_size);
        }
        new_ptr
    }
}
