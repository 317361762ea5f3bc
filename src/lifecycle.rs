/// A trait defining the host engine's object lifecycle for pooled instances.
///
/// The pool never creates, toggles or destroys an instance on its own; every
/// transition goes through this trait. Only [`Lifecycle::instantiate`] is
/// required, the other hooks default to plain drop or no-op.
pub trait Lifecycle<T> {
    /// Creates a new instance from the prototype.
    fn instantiate(&self) -> T;

    /// Permanently destroys an instance the pool will not keep.
    ///
    /// By default, the instance is simply dropped.
    #[inline(always)]
    fn destroy(&self, obj: T) {
        drop(obj);
    }

    /// Marks an instance as active right before it is handed out of the
    /// free-list.
    #[inline(always)]
    fn activate(&self, _obj: &mut T) {}

    /// Marks an instance as inactive before it is stored in the free-list.
    #[inline(always)]
    fn deactivate(&self, _obj: &mut T) {}
}

impl<T, F: Fn() -> T> Lifecycle<T> for F {
    #[inline(always)]
    fn instantiate(&self) -> T {
        self()
    }
}

/// A lifecycle that derives every instance by cloning an immutable template.
#[derive(Debug, Clone)]
pub struct Prefab<T> {
    template: T,
}

impl<T: Clone> Prefab<T> {
    /// Wraps `template` as the prototype of a pool.
    pub fn new(template: T) -> Self {
        Prefab { template }
    }

    /// Borrows the template instances are cloned from.
    pub fn template(&self) -> &T {
        &self.template
    }
}

impl<T: Clone> Lifecycle<T> for Prefab<T> {
    #[inline(always)]
    fn instantiate(&self) -> T {
        self.template.clone()
    }
}
