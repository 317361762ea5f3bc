use crate::Lifecycle;
use alloc::vec::Vec;
use log::{debug, trace};

/// A bare factory-plus-freelist over one prototype.
///
/// Unlike [`ObjectPool`](crate::ObjectPool), instances handed out are owned
/// by the caller outright: there is no return path, no activation toggling
/// and no destruction. The free-list only ever holds the stock created at
/// construction.
#[derive(Debug)]
pub struct PrototypeCache<L: Lifecycle<T>, T> {
    lifecycle: L,
    stock: Vec<T>,
}

impl<L: Lifecycle<T>, T> PrototypeCache<L, T> {
    /// Creates an empty cache.
    pub fn new(lifecycle: L) -> Self {
        PrototypeCache {
            lifecycle,
            stock: Vec::new(),
        }
    }

    /// Creates a cache holding `stock_size` instances made up front.
    pub fn with_stock(lifecycle: L, stock_size: usize) -> Self {
        let stock = (0..stock_size).map(|_| lifecycle.instantiate()).collect();
        debug!("prototype cache created with {} instances", stock_size);
        PrototypeCache { lifecycle, stock }
    }

    /// Takes the most recently stocked instance, or creates one.
    pub fn get(&mut self) -> T {
        match self.stock.pop() {
            Some(obj) => obj,
            None => {
                trace!("cache empty, instantiating from prototype");
                self.lifecycle.instantiate()
            }
        }
    }

    /// Gets the number of instances still in stock.
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    /// Checks if the stock is exhausted.
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Borrows the lifecycle, and with it the prototype.
    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }
}
