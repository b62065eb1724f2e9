//! 2D vectors and a scratch-vector pool
//!
//! `Vec2` is glam's `DVec2`: value add/sub/scale come from its operators,
//! in-place variants from the `*Assign` operators. [`VecExt`] fills in the
//! few mutating helpers glam doesn't have.
//!
//! [`VecPool`] hands out reusable scratch slots so hot loops don't allocate.
//! A [`PooledVec`] handle can't be copied, so each one is released at most
//! once, and the pool reports handles that were never given back.

pub type Vec2 = glam::DVec2;

/// Mutating helpers on top of glam
pub trait VecExt {
    /// Normalize in place; a zero-length vector stays zero
    fn normalize_in_place(&mut self) -> &mut Self;
    fn set(&mut self, x: f64, y: f64) -> &mut Self;
    fn copy_from(&mut self, other: Vec2) -> &mut Self;
}

impl VecExt for Vec2 {
    #[inline]
    fn normalize_in_place(&mut self) -> &mut Self {
        *self = self.normalize_or_zero();
        self
    }

    #[inline]
    fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    fn copy_from(&mut self, other: Vec2) -> &mut Self {
        *self = other;
        self
    }
}

/// Handle to a pooled scratch vector
#[derive(Debug)]
pub struct PooledVec {
    index: usize,
}

/// Free-list pool of scratch vectors
#[derive(Debug, Default)]
pub struct VecPool {
    slots: Vec<Vec2>,
    free: Vec<usize>,
}

impl VecPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a slot (reusing a released one if any) initialised to (x, y)
    pub fn acquire(&mut self, x: f64, y: f64) -> PooledVec {
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Vec2::new(x, y);
                index
            }
            None => {
                self.slots.push(Vec2::new(x, y));
                self.slots.len() - 1
            }
        };
        PooledVec { index }
    }

    /// Give a slot back; its value must not be used afterwards
    pub fn release(&mut self, handle: PooledVec) {
        self.free.push(handle.index);
    }

    #[inline]
    pub fn get(&self, handle: &PooledVec) -> Vec2 {
        self.slots[handle.index]
    }

    #[inline]
    pub fn get_mut(&mut self, handle: &PooledVec) -> &mut Vec2 {
        &mut self.slots[handle.index]
    }

    /// Handles acquired and not yet released
    pub fn outstanding(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}
