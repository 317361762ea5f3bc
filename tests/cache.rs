mod common;

use common::{init_logging, Recorder};
use prefab_pool::*;

#[test]
fn test_new_is_empty() {
    let rec = Recorder::default();
    let mut cache = PrototypeCache::new(&rec);
    assert!(cache.is_empty());
    assert_eq!(cache.get().id, 0);
    assert_eq!(cache.get().id, 1);
    assert_eq!(rec.created.get(), 2);
}

#[test]
fn test_with_stock_hands_out_stock_first() {
    init_logging();
    let rec = Recorder::default();
    let mut cache = PrototypeCache::with_stock(&rec, 3);
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.get().id, 2);
    assert_eq!(cache.get().id, 1);
    assert_eq!(cache.get().id, 0);
    assert!(cache.is_empty());
    assert_eq!(cache.get().id, 3);
    assert_eq!(rec.created.get(), 4);
}

#[test]
fn test_no_lifecycle_toggling() {
    let rec = Recorder::default();
    {
        let mut cache = PrototypeCache::with_stock(&rec, 2);
        let ship = cache.get();
        assert!(ship.active);
    }
    assert_eq!(rec.activated.get(), 0);
    assert_eq!(rec.deactivated.get(), 0);
    assert_eq!(rec.destroyed.get(), 0);
}

#[test]
fn test_prefab_cache() {
    let mut cache = PrototypeCache::with_stock(Prefab::new(vec![1u8, 2, 3]), 1);
    let mut first = cache.get();
    first.push(4);
    assert_eq!(cache.get(), vec![1, 2, 3]);
    assert_eq!(cache.lifecycle().template(), &vec![1, 2, 3]);
}
