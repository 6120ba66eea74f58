//! Lock-free shared access to the matrix buffer for the parallel workers

use ndarray::{ArrayView1, ArrayViewMut1, ArrayViewMut2, ShapeBuilder};
use std::marker::PhantomData;
use std::sync::{Condvar, Mutex, PoisonError};

/// Raw view of a matrix that every worker can hold at once
///
/// Workers hand out row views through it without locking. Soundness rests on
/// the elimination schedule:
/// - during step `k`, row `k` is only read and every row `i > k` is read and
///   written by exactly one worker;
/// - rows are never touched across a step boundary without an intervening
///   barrier wait, which orders all writes of step `k` before all reads of
///   step `k + 1`.
pub(crate) struct SharedMatrix<'a, T> {
    ptr: *mut T,
    n: usize,
    row_stride: isize,
    col_stride: isize,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: the view is only dereferenced under the schedule documented on the
// type, which gives each cell a single writer per step.
unsafe impl<T: Send> Send for SharedMatrix<'_, T> {}
unsafe impl<T: Send + Sync> Sync for SharedMatrix<'_, T> {}

impl<'a, T> SharedMatrix<'a, T> {
    pub(crate) fn new(mut view: ArrayViewMut2<'a, T>) -> Self {
        let n = view.nrows();
        let strides = view.strides();
        let (row_stride, col_stride) = (strides[0], strides[1]);
        Self {
            ptr: view.as_mut_ptr(),
            n,
            row_stride,
            col_stride,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn dimension(&self) -> usize {
        self.n
    }

    #[inline]
    fn row_ptr(&self, i: usize) -> *mut T {
        debug_assert!(i < self.n);
        self.ptr.wrapping_offset(i as isize * self.row_stride)
    }

    /// Read-only view of row `i`
    ///
    /// # Safety
    ///
    /// `i < n`, and no worker may write row `i` while the view is alive.
    #[inline]
    pub(crate) unsafe fn row(&self, i: usize) -> ArrayView1<'_, T> {
        unsafe {
            ArrayView1::from_shape_ptr(self.n.strides(self.col_stride as usize), self.row_ptr(i))
        }
    }

    /// Mutable view of row `i`
    ///
    /// # Safety
    ///
    /// `i < n`, and the caller must be the only worker accessing row `i`
    /// while the view is alive.
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn row_mut(&self, i: usize) -> ArrayViewMut1<'_, T> {
        unsafe {
            ArrayViewMut1::from_shape_ptr(self.n.strides(self.col_stride as usize), self.row_ptr(i))
        }
    }
}

/// One-shot gate that holds workers back until every one of them exists
///
/// A worker that enters the barrier before all parties were spawned would
/// wait forever if a later spawn failed; the gate lets the spawner release
/// the workers or send them home.
pub(crate) struct StartGate {
    state: Mutex<Option<bool>>,
    ready: Condvar,
}

impl StartGate {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(None),
            ready: Condvar::new(),
        }
    }

    /// Release every waiting worker; `go = false` tells them to exit
    pub(crate) fn open(&self, go: bool) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = Some(go);
        self.ready.notify_all();
    }

    /// Block until the gate is opened and return whether to proceed
    pub(crate) fn wait(&self) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state = self
            .ready
            .wait_while(state, |s| s.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        state.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::thread;

    #[test]
    fn test_shared_rows() {
        let mut a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let shared = SharedMatrix::new(a.view_mut());
        assert_eq!(shared.dimension(), 2);

        unsafe {
            let top = shared.row(0);
            let mut bottom = shared.row_mut(1);
            bottom[1] += top[1];
        }
        assert_eq!(a[[1, 1]], 6.0);
    }

    #[test]
    fn test_shared_rows_column_major() {
        let mut a = array![[1.0_f64, 2.0], [3.0, 4.0]].reversed_axes();
        let shared = SharedMatrix::new(a.view_mut());

        let row = unsafe { shared.row(0) };
        assert_eq!(row.to_vec(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_start_gate() {
        let gate = StartGate::new();
        let released = thread::scope(|scope| {
            let handles: Vec<_> = (0..3).map(|_| scope.spawn(|| gate.wait())).collect();
            gate.open(true);
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });
        assert_eq!(released, vec![true, true, true]);

        let closed = StartGate::new();
        closed.open(false);
        assert!(!closed.wait());
    }
}
