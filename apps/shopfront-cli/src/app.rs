//! # App Handle
//!
//! Type-keyed state registry handed to every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  startup                                 commands                       │
//! │  ───────                                 ────────                       │
//! │  app.manage(CartState::new(..))          app.state::<CartState>()?      │
//! │  app.manage(CatalogState::new(..))       app.state::<CatalogState>()?   │
//! │  app.manage(BannerState::new(..))        ...                            │
//! │  app.manage(ConfigState::default())                                     │
//! │                                                                         │
//! │  state::<T>() on a T that was never managed ──► STATE_NOT_MANAGED       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each state type is registered at most once. The handle is built during
//! startup and then only read, so lookups need no locking.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::ApiError;

type StateSlot = Arc<dyn Any + Send + Sync>;

/// Registry of shared application state.
#[derive(Default)]
pub struct AppHandle {
    states: HashMap<TypeId, StateSlot>,
}

impl AppHandle {
    /// Creates an empty handle with no state managed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state`. Returns `false` and keeps the existing value if a
    /// state of the same type was already managed.
    pub fn manage<T>(&mut self, state: T) -> bool
    where
        T: Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        if self.states.contains_key(&key) {
            warn!(state = type_name::<T>(), "State already managed, ignoring");
            return false;
        }

        debug!(state = type_name::<T>(), "State managed");
        self.states.insert(key, Arc::new(state));
        true
    }

    /// Fetches a managed state by type.
    pub fn state<T>(&self) -> Result<Arc<T>, ApiError>
    where
        T: Send + Sync + 'static,
    {
        self.states
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|slot| slot.downcast::<T>().ok())
            .ok_or_else(|| ApiError::state_not_managed(short_type_name::<T>()))
    }
}

impl std::fmt::Debug for AppHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppHandle")
            .field("managed", &self.states.len())
            .finish()
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
