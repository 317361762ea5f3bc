use crate::{Lifecycle, OverflowPolicy, PoolConfig, PoolError};
use alloc::{
    fmt,
    rc::{Rc, Weak},
    vec::Vec,
};
use core::{
    cell::RefCell,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
    ops::{Deref, DerefMut},
    ptr,
};
use log::{debug, trace, warn};

/// The fate of an instance handed back to its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Released {
    /// The instance was pushed onto the free-list and will be reused.
    Pooled,
    /// The free-list was full (or the pool was gone) and the instance was
    /// destroyed.
    Destroyed,
}

/// A struct representing a single-threaded pool of instances derived from
/// one prototype.
///
/// Inactive instances are stored in a LIFO free-list: the most recently
/// released instance is the next one handed out. Every transition an
/// instance goes through is delegated to the pool's [`Lifecycle`].
#[derive(Debug)]
pub struct ObjectPool<L: Lifecycle<T>, T> {
    lifecycle: L,
    config: PoolConfig,
    storage: RefCell<Vec<T>>,
}

impl<L: Lifecycle<T>, T> ObjectPool<L, T> {
    /// Creates a capacity-enforcing pool and prefills it with `initial_size`
    /// inactive instances.
    ///
    /// The prefill is clamped to `max_size`.
    pub fn new(lifecycle: L, initial_size: usize, max_size: usize) -> Self {
        Self::with_config(lifecycle, PoolConfig::new(initial_size, max_size))
    }

    /// Creates a pool from a full [`PoolConfig`].
    ///
    /// Under [`OverflowPolicy::Destroy`] a prefill larger than the maximum is
    /// clamped and a warning is logged. Use [`Self::try_new`] to reject it
    /// instead.
    pub fn with_config(lifecycle: L, config: PoolConfig) -> Self {
        let initial = config.effective_initial_size();
        if initial < config.initial_size {
            warn!(
                "initial pool size {} clamped to maximum pool size {}",
                config.initial_size, config.max_size
            );
        }
        let mut storage = Vec::with_capacity(initial);
        for _ in 0..initial {
            let mut obj = lifecycle.instantiate();
            lifecycle.deactivate(&mut obj);
            storage.push(obj);
        }
        debug!(
            "object pool created: {} prefilled, max {}, {:?} on overflow",
            initial, config.max_size, config.overflow
        );
        ObjectPool {
            lifecycle,
            config,
            storage: RefCell::new(storage),
        }
    }

    /// Creates a pool from a [`PoolConfig`], failing if the config does not
    /// validate.
    pub fn try_new(lifecycle: L, config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::with_config(lifecycle, config))
    }

    /// Wraps the pool with a reference counter, enabling the use of
    /// [`Self::get_rc`] to obtain instances that hold a weak back-reference
    /// to their pool instead of a borrow.
    pub fn to_rc(self) -> Rc<Self> {
        Rc::new(self)
    }

    fn pop(&self) -> Option<T> {
        let mut obj = self.storage.borrow_mut().pop()?;
        self.lifecycle.activate(&mut obj);
        trace!("reused pooled instance, {} left", self.len());
        Some(obj)
    }

    fn acquire(&self) -> T {
        match self.pop() {
            Some(obj) => obj,
            None => {
                trace!("free-list empty, instantiating from prototype");
                self.lifecycle.instantiate()
            }
        }
    }

    /// Attempts to get an instance from the free-list.
    ///
    /// If the free-list is empty, None is returned.
    pub fn try_get(&self) -> Option<RefPooled<'_, L, T>> {
        self.pop().map(|obj| RefPooled::new(obj, self))
    }

    /// Activates and returns the most recently released instance, or creates
    /// a new one from the prototype if the free-list is empty.
    pub fn get(&self) -> RefPooled<'_, L, T> {
        RefPooled::new(self.acquire(), self)
    }

    /// Attempts to get an instance from the free-list that holds a weak
    /// reference to the owning pool.
    ///
    /// If the free-list is empty, None is returned.
    pub fn try_get_rc(self: &Rc<Self>) -> Option<RcPooled<L, T>> {
        self.pop().map(|obj| RcPooled::new(obj, self))
    }

    /// Gets an instance that holds a weak reference to the owning pool.
    /// Such instances are not limited by the pool's lifetime: if every `Rc`
    /// to the pool is dropped first, deactivating them simply drops them.
    ///
    /// If the free-list is empty, a new instance is created.
    pub fn get_rc(self: &Rc<Self>) -> RcPooled<L, T> {
        RcPooled::new(self.acquire(), self)
    }

    /// Returns an instance to the pool.
    ///
    /// The instance is deactivated, then pushed onto the free-list if there
    /// is room (always, under [`OverflowPolicy::Retain`]). Otherwise it is
    /// destroyed through [`Lifecycle::destroy`].
    pub fn release(&self, mut obj: T) -> Released {
        self.lifecycle.deactivate(&mut obj);
        let mut storage = self.storage.borrow_mut();
        if self.config.overflow == OverflowPolicy::Retain || storage.len() < self.config.max_size {
            storage.push(obj);
            trace!("instance returned to pool, {} pooled", storage.len());
            Released::Pooled
        } else {
            drop(storage);
            trace!("pool full, destroying released instance");
            self.lifecycle.destroy(obj);
            Released::Destroyed
        }
    }

    /// Destroys every instance currently held in the free-list.
    pub fn clear(&self) {
        let drained = mem::take(&mut *self.storage.borrow_mut());
        debug!("clearing object pool, destroying {} instances", drained.len());
        for obj in drained {
            self.lifecycle.destroy(obj);
        }
    }

    /// Gets the number of inactive instances ready to be reused.
    pub fn len(&self) -> usize {
        self.storage.borrow().len()
    }

    /// Checks if the free-list is empty.
    pub fn is_empty(&self) -> bool {
        self.storage.borrow().is_empty()
    }

    /// Gets the maximum number of instances the pool keeps for reuse. This
    /// does not limit how many instances can be handed out.
    pub fn max_size(&self) -> usize {
        self.config.max_size
    }

    /// Gets the policy applied when releasing into a full free-list.
    pub fn overflow(&self) -> OverflowPolicy {
        self.config.overflow
    }

    /// Gets the config the pool was built from.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Borrows the lifecycle, and with it the prototype.
    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }
}

impl<L: Lifecycle<T>, T> Drop for ObjectPool<L, T> {
    fn drop(&mut self) {
        for obj in self.storage.get_mut().drain(..) {
            self.lifecycle.destroy(obj);
        }
    }
}

/// An active instance borrowed from a pool.
///
/// Deactivating the guard, explicitly or by dropping it, returns the
/// instance to the pool.
pub struct RefPooled<'a, L: Lifecycle<T>, T> {
    obj: ManuallyDrop<T>,
    pool: &'a ObjectPool<L, T>,
}

impl<'a, L: Lifecycle<T>, T> RefPooled<'a, L, T> {
    fn new(obj: T, pool: &'a ObjectPool<L, T>) -> Self {
        RefPooled {
            obj: ManuallyDrop::new(obj),
            pool,
        }
    }

    /// Deactivates the instance and hands it back to its pool.
    pub fn deactivate(self) -> Released {
        let pool = self.pool;
        pool.release(self.into_inner())
    }

    /// Consumes the guard and returns the instance, without returning it to
    /// the pool.
    pub fn into_inner(self) -> T {
        let mut this = ManuallyDrop::new(self);
        // Safety: the guard is never dropped, so obj is taken exactly once.
        unsafe { ManuallyDrop::take(&mut this.obj) }
    }
}

impl<'a, L: Lifecycle<T>, T> Deref for RefPooled<'a, L, T> {
    type Target = T;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.obj
    }
}

impl<'a, L: Lifecycle<T>, T> DerefMut for RefPooled<'a, L, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.obj
    }
}

impl<'a, L: Lifecycle<T>, T> Drop for RefPooled<'a, L, T> {
    fn drop(&mut self) {
        // Safety: obj is not accessed again after drop.
        let obj = unsafe { ManuallyDrop::take(&mut self.obj) };
        self.pool.release(obj);
    }
}

impl<'a, L: Lifecycle<T>, T: Hash> Hash for RefPooled<'a, L, T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}
impl<'a, L: Lifecycle<T>, T: fmt::Display> fmt::Display for RefPooled<'a, L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}
impl<'a, L: Lifecycle<T>, T: fmt::Debug> fmt::Debug for RefPooled<'a, L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
impl<'a, L: Lifecycle<T>, T: PartialEq> PartialEq for RefPooled<'a, L, T> {
    #[inline]
    fn eq(&self, other: &RefPooled<'a, L, T>) -> bool {
        (**self).eq(&**other)
    }
}
impl<'a, L: Lifecycle<T>, T: Eq> Eq for RefPooled<'a, L, T> {}
impl<'a, L: Lifecycle<T>, T> core::borrow::Borrow<T> for RefPooled<'a, L, T> {
    #[inline(always)]
    fn borrow(&self) -> &T {
        self
    }
}
impl<'a, L: Lifecycle<T>, T> AsRef<T> for RefPooled<'a, L, T> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        self
    }
}

/// An active instance carrying a weak back-reference to its pool.
///
/// The guard never keeps the pool alive. Deactivating it returns the
/// instance if the pool still exists. Otherwise the instance is dropped
/// in place: the lifecycle went away with the pool, so neither
/// [`Lifecycle::deactivate`] nor [`Lifecycle::destroy`] runs for it.
pub struct RcPooled<L: Lifecycle<T>, T> {
    obj: ManuallyDrop<T>,
    pool: Weak<ObjectPool<L, T>>,
}

impl<L: Lifecycle<T>, T> RcPooled<L, T> {
    fn new(obj: T, pool: &Rc<ObjectPool<L, T>>) -> Self {
        RcPooled {
            obj: ManuallyDrop::new(obj),
            pool: Rc::downgrade(pool),
        }
    }

    fn take(self) -> (T, Weak<ObjectPool<L, T>>) {
        let mut this = ManuallyDrop::new(self);
        // Safety: the guard is never dropped, so both fields are moved out
        // exactly once.
        unsafe { (ManuallyDrop::take(&mut this.obj), ptr::read(&this.pool)) }
    }

    /// Checks whether the owning pool still exists.
    pub fn has_pool(&self) -> bool {
        self.pool.strong_count() > 0
    }

    /// Deactivates the instance and hands it back to its pool.
    pub fn deactivate(self) -> Released {
        let (obj, pool) = self.take();
        release_weak(&pool, obj)
    }

    /// Consumes the guard and returns the instance, without returning it to
    /// the pool.
    pub fn into_inner(self) -> T {
        self.take().0
    }
}

fn release_weak<L: Lifecycle<T>, T>(pool: &Weak<ObjectPool<L, T>>, obj: T) -> Released {
    match pool.upgrade() {
        Some(pool) => pool.release(obj),
        None => {
            trace!("owning pool dropped, discarding instance");
            drop(obj);
            Released::Destroyed
        }
    }
}

impl<L: Lifecycle<T>, T> Deref for RcPooled<L, T> {
    type Target = T;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.obj
    }
}

impl<L: Lifecycle<T>, T> DerefMut for RcPooled<L, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.obj
    }
}

impl<L: Lifecycle<T>, T> Drop for RcPooled<L, T> {
    fn drop(&mut self) {
        // Safety: obj is not accessed again after drop.
        let obj = unsafe { ManuallyDrop::take(&mut self.obj) };
        release_weak(&self.pool, obj);
    }
}

impl<L: Lifecycle<T>, T: Hash> Hash for RcPooled<L, T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}
impl<L: Lifecycle<T>, T: fmt::Display> fmt::Display for RcPooled<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}
impl<L: Lifecycle<T>, T: fmt::Debug> fmt::Debug for RcPooled<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
impl<L: Lifecycle<T>, T: PartialEq> PartialEq for RcPooled<L, T> {
    #[inline]
    fn eq(&self, other: &RcPooled<L, T>) -> bool {
        (**self).eq(&**other)
    }
}
impl<L: Lifecycle<T>, T: Eq> Eq for RcPooled<L, T> {}
impl<L: Lifecycle<T>, T> core::borrow::Borrow<T> for RcPooled<L, T> {
    #[inline(always)]
    fn borrow(&self) -> &T {
        self
    }
}
impl<L: Lifecycle<T>, T> AsRef<T> for RcPooled<L, T> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        self
    }
}
