// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timing instrumentation.
//!
//! Enable with `WARD_TIMINGS=1`. Output goes to stderr as
//! `[timings] phase::name XXms`.

use std::time::Instant;

/// Print a timing result to stderr if timings are enabled.
#[inline]
pub fn print_timing(phase: &str, start: Instant) {
    if crate::env::ward_timings() {
        eprintln!("[timings] {} {}ms", phase, start.elapsed().as_millis());
    }
}

/// Time a block of code.
///
/// ```rust,ignore
/// let db = time_phase!("db::open", { Database::open(&path)? });
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}
