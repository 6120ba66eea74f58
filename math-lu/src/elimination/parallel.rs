//! Barrier-synchronized parallel elimination
//!
//! Row agglomeration in one dimension: at pivot step `k`, worker `id` reduces
//! rows `k + id + 1`, `k + id + 1 + t`, `k + id + 1 + 2t`, … and then waits on
//! a barrier shared by all `t` workers. The assignment is recomputed every
//! step relative to `k`.

use super::shared::{SharedMatrix, StartGate};
use super::{LuConfig, check_pivot, eliminate_row};
use crate::error::{LuError, Result};
use crate::matrix::DenseMatrix;
use crate::traits::Scalar;
use std::panic;
use std::sync::Barrier;
use std::thread;

/// Factor `matrix` in place on `thread_count` workers with the default [`LuConfig`]
pub fn gaussian_parallel<T: Scalar>(
    matrix: &mut DenseMatrix<T>,
    thread_count: usize,
) -> Result<()> {
    gaussian_parallel_with_config(matrix, thread_count, &LuConfig::default())
}

/// Factor `matrix` in place on `thread_count` freshly spawned workers
///
/// The result is identical to [`gaussian_serial_with_config`], including the
/// partially reduced state left behind on `SingularPivot`. Blocks until every
/// worker has been joined. `thread_count` may exceed `n`; surplus workers
/// only take part in the barrier.
///
/// [`gaussian_serial_with_config`]: super::gaussian_serial_with_config
pub fn gaussian_parallel_with_config<T: Scalar>(
    matrix: &mut DenseMatrix<T>,
    thread_count: usize,
    config: &LuConfig<T>,
) -> Result<()> {
    if thread_count == 0 {
        return Err(LuError::InvalidThreadCount(thread_count));
    }

    let n = matrix.dimension();
    log::debug!("parallel elimination: n = {n}, threads = {thread_count}");

    let shared = SharedMatrix::new(matrix.as_array_mut());
    let barrier = Barrier::new(thread_count);
    let gate = StartGate::new();

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(thread_count);
        let mut outcome = Ok(());

        for id in 0..thread_count {
            let (shared, barrier, gate) = (&shared, &barrier, &gate);
            let spawned = thread::Builder::new()
                .name(format!("lu-worker-{id}"))
                .spawn_scoped(scope, move || {
                    if !gate.wait() {
                        return Ok(());
                    }
                    run_worker(shared, barrier, id, thread_count, config)
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    log::warn!("could not start worker {id}: {source}");
                    outcome = Err(LuError::ThreadSpawn { id, source });
                    break;
                }
            }
        }

        gate.open(outcome.is_ok());

        for handle in handles {
            match handle.join() {
                Ok(result) => {
                    if outcome.is_ok() {
                        outcome = result;
                    }
                }
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        outcome
    })
}

/// Rows reduced by the worker with 1-based `offset` at pivot step `k`
#[inline]
pub(crate) fn assigned_rows(
    k: usize,
    offset: usize,
    thread_count: usize,
    n: usize,
) -> impl Iterator<Item = usize> {
    (k + offset..n).step_by(thread_count)
}

fn run_worker<T: Scalar>(
    shared: &SharedMatrix<'_, T>,
    barrier: &Barrier,
    id: usize,
    thread_count: usize,
    config: &LuConfig<T>,
) -> Result<()> {
    let n = shared.dimension();
    let steps = n.saturating_sub(1);
    let offset = id + 1;

    for k in 0..steps {
        // SAFETY: row k was last written in step k - 1, before the barrier,
        // and no worker writes it during step k.
        let pivot_row = unsafe { shared.row(k) };

        // every worker reads the same pivot, so all of them leave here together
        if let Err(err) = check_pivot(pivot_row[k], k, config) {
            if id == 0 {
                log::warn!("parallel elimination stopped: {err}");
            }
            return Err(err);
        }

        for i in assigned_rows(k, offset, thread_count, n) {
            // SAFETY: i > k, and the cyclic assignment gives row i to this
            // worker alone for step k.
            let row = unsafe { shared.row_mut(i) };
            eliminate_row(row, pivot_row, k);
        }

        if id == 0 && config.reports_step(k) {
            log::info!("parallel elimination step {}/{}", k + 1, steps);
        }

        barrier.wait();
    }

    Ok(())
}
