#![allow(dead_code)]
use prefab_pool::Lifecycle;
use std::cell::Cell;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    pub id: usize,
    pub active: bool,
}

/// Stands in for the host engine: numbers every instance and counts the
/// lifecycle calls it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub created: Cell<usize>,
    pub destroyed: Cell<usize>,
    pub activated: Cell<usize>,
    pub deactivated: Cell<usize>,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl Lifecycle<Ship> for &Recorder {
    fn instantiate(&self) -> Ship {
        let id = self.created.get();
        bump(&self.created);
        Ship { id, active: true }
    }

    fn destroy(&self, _obj: Ship) {
        bump(&self.destroyed);
    }

    fn activate(&self, obj: &mut Ship) {
        bump(&self.activated);
        obj.active = true;
    }

    fn deactivate(&self, obj: &mut Ship) {
        bump(&self.deactivated);
        obj.active = false;
    }
}
