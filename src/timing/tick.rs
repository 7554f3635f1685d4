use std::time::Instant;

/// A free-running monotonic counter, e.g. a hardware timer's count register.
pub trait TickSource {
    fn now(&self) -> u64;

    fn ticks_per_second(&self) -> u64;

    // Counter width; wrapping subtraction is done modulo this
    fn counter_bits(&self) -> u32 {
        64
    }
}

/// Host clock counting microseconds since construction.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicClock {
    fn now(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }

    fn ticks_per_second(&self) -> u64 {
        1_000_000
    }
}

/// Ticks from `start` to `end`, tolerating one counter wrap.
pub fn elapsed_ticks(start: u64, end: u64, counter_bits: u32) -> u64 {
    let delta = end.wrapping_sub(start);
    if counter_bits >= 64 {
        delta
    } else {
        delta & ((1u64 << counter_bits) - 1)
    }
}

/// Reads the tick source immediately before and after `f`.
pub fn timed<S: TickSource + ?Sized, T>(source: &S, f: impl FnOnce() -> T) -> (T, u64) {
    let start = source.now();
    let value = f();
    let end = source.now();
    (value, elapsed_ticks(start, end, source.counter_bits()))
}

pub fn ticks_to_micros(ticks: u64, ticks_per_second: u64) -> f64 {
    if ticks_per_second == 0 {
        return 0.0;
    }
    ticks as f64 * 1_000_000.0 / ticks_per_second as f64
}
