//! Data-parallel helpers with feature-gated implementations
//!
//! Backed by rayon under the `native` feature, with sequential fallbacks.
//! The elimination kernels do not use these; they run their own workers.

/// Check if parallel processing is available
#[cfg(feature = "native")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "native"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Parallel map with index
#[cfg(feature = "native")]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

/// Sequential map with index (fallback)
#[cfg(not(feature = "native"))]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    F: Fn(usize) -> U,
{
    (0..count).map(f).collect()
}

/// Largest value of `f(i)` over `0..count`, `init` if `count == 0`
#[cfg(feature = "native")]
pub fn parallel_max_indexed<F>(count: usize, init: f64, f: F) -> f64
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).reduce(|| init, f64::max)
}

/// Largest value of `f(i)` over `0..count`, `init` if `count == 0` (fallback)
#[cfg(not(feature = "native"))]
pub fn parallel_max_indexed<F>(count: usize, init: f64, f: F) -> f64
where
    F: Fn(usize) -> f64,
{
    (0..count).map(f).fold(init, f64::max)
}
