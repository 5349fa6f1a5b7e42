use alloc::vec::Vec;

/// A pool of reusable `Vec<usize>` buffers.
///
/// Every face of the hull under construction may own the list of points lying on its
/// positive side. Faces are created and retired by the thousands during the iteration
/// so their lists are recycled through this pool instead of being reallocated each time.
#[derive(Clone, Debug, Default)]
pub struct IndexVecPool {
    free: Vec<Vec<usize>>,
}

impl IndexVecPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of buffers currently available for reuse.
    pub fn len(&self) -> usize {
        self.free.len()
    }

    /// Is there no buffer available for reuse?
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Takes an empty buffer from the pool, or allocates a new one if the pool is empty.
    pub fn get(&mut self) -> Vec<usize> {
        match self.free.pop() {
            Some(mut buf) => {
                buf.clear();
                buf
            }
            None => Vec::new(),
        }
    }

    /// Gives a buffer back to the pool.
    ///
    /// Buffers with a capacity much larger than their length are dropped instead:
    /// the first iterations of the hull computation assign huge point lists to a few
    /// faces, while later iterations only need small ones.
    pub fn reclaim(&mut self, buf: Vec<usize>) {
        if (buf.len() + 1) * 128 < buf.capacity() {
            return;
        }

        self.free.push(buf);
    }

    /// Drops every buffer stored in this pool.
    pub fn clear(&mut self) {
        self.free.clear();
    }
}
