use prefab_pool::*;

#[test]
fn test_defaults() {
    let config = PoolConfig::default();
    assert_eq!(config.initial_size, 0);
    assert_eq!(config.max_size, DEFAULT_MAX_POOL_SIZE);
    assert_eq!(config.overflow, OverflowPolicy::Destroy);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = PoolConfig::default()
        .with_initial_size(3)
        .with_max_size(8)
        .with_overflow(OverflowPolicy::Retain);
    assert_eq!(
        config,
        PoolConfig {
            initial_size: 3,
            max_size: 8,
            overflow: OverflowPolicy::Retain,
        }
    );
}

#[test]
fn test_validate() {
    assert_eq!(
        PoolConfig::new(4, 3).validate(),
        Err(PoolError::InitialExceedsMax { initial: 4, max: 3 })
    );
    assert!(PoolConfig::new(3, 3).validate().is_ok());
    assert!(PoolConfig::new(4, 3)
        .with_overflow(OverflowPolicy::Retain)
        .validate()
        .is_ok());
}

#[test]
fn test_pool_keeps_config() {
    let config = PoolConfig::new(2, 5);
    let pool = ObjectPool::with_config(|| 0u8, config);
    assert_eq!(*pool.config(), config);
}

#[cfg(feature = "serde")]
#[test]
fn test_deserialize_partial_config() {
    let config: PoolConfig =
        serde_json::from_str(r#"{ "max_size": 32, "overflow": "retain" }"#).unwrap();
    assert_eq!(config.initial_size, 0);
    assert_eq!(config.max_size, 32);
    assert_eq!(config.overflow, OverflowPolicy::Retain);

    let json = serde_json::to_string(&PoolConfig::default()).unwrap();
    assert_eq!(
        json,
        r#"{"initial_size":0,"max_size":10,"overflow":"destroy"}"#
    );
}
