//! The process-wide planner registrar (§6.1, §9 "Global registrar").
//!
//! Write-once, read-many: built-in strategies self-register the first time
//! anything touches the registrar (there is no portable equivalent of a
//! C++ static-initializer constructor run at module load, so registration
//! is instead driven lazily off the first access, guarded by `OnceLock` so
//! it still only happens once). External modules discovered from
//! `-algo_path` (§6.4) register by calling [`register`] directly — this
//! crate has no `dlopen` equivalent; loading native code is out of scope
//! (§1), so "discovery" here means reading planner descriptor files and
//! registering the matching in-process factory by name (see `vc-cli`).

use std::sync::{Mutex, OnceLock};

use crate::planner::{DfsPlanner, GreedyPlanner, Planner};

pub type PlannerFactory = fn() -> Box<dyn Planner>;

/// `(name, factory)` — the unit the registrar stores.
pub struct PlannerRegistration {
    pub name: String,
    pub factory: PlannerFactory,
}

struct Registrar {
    entries: Mutex<Vec<PlannerRegistration>>,
}

static REGISTRAR: OnceLock<Registrar> = OnceLock::new();

fn registrar() -> &'static Registrar {
    REGISTRAR.get_or_init(|| {
        let registrar = Registrar { entries: Mutex::new(Vec::new()) };
        register_builtin(&registrar, "Greedy", || Box::new(GreedyPlanner::new()));
        register_builtin(&registrar, "Dfs", || Box::new(DfsPlanner::new()));
        registrar
    })
}

fn register_builtin(registrar: &Registrar, name: &str, factory: PlannerFactory) {
    registrar
        .entries
        .lock()
        .expect("registrar mutex poisoned")
        .push(PlannerRegistration { name: name.to_string(), factory });
}

/// Register a planner factory under `name`. Safe to call any number of
/// times; a later registration under a name already in use simply adds
/// another entry (matching the original's append-only registrar — the
/// loader, not the registrar, is responsible for rejecting duplicates it
/// cares about).
pub fn register(name: impl Into<String>, factory: PlannerFactory) {
    registrar().entries.lock().expect("registrar mutex poisoned").push(PlannerRegistration {
        name: name.into(),
        factory,
    });
}

/// Number of registered factories (built-ins plus anything registered
/// since). Lets a loader detect a module that failed to register itself.
pub fn count() -> usize {
    registrar().entries.lock().expect("registrar mutex poisoned").len()
}

/// Construct a planner by its registered name, using the first matching
/// entry. `None` if no planner is registered under `name`.
pub fn create(name: &str) -> Option<Box<dyn Planner>> {
    let entries = registrar().entries.lock().expect("registrar mutex poisoned");
    entries.iter().find(|entry| entry.name == name).map(|entry| (entry.factory)())
}

/// Names of every registered planner, in registration order.
pub fn names() -> Vec<String> {
    registrar().entries.lock().expect("registrar mutex poisoned").iter().map(|entry| entry.name.clone()).collect()
}
