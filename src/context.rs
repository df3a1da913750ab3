//! Context for gear set calculation.
//!
//! The `CalcContext` bundles everything a calculation reads but never
//! writes: the game data provider, the consumable catalog (once it has
//! loaded) and the engine configuration. It is passed to every phase so
//! that nothing reaches for global state.

use crate::config::EngineConfig;
use crate::consumable::{ConsumableCatalog, SharedCatalog};
use crate::data::GameData;

/// Read-only inputs shared by every calculation phase.
///
/// Cheap to copy; holds only references. Many gear sets can be
/// recalculated against the same context at once.
///
/// # Examples
///
/// ```rust
/// use gearset_calc::{CalcContext, EngineConfig, GameTables};
///
/// let tables = GameTables::new();
/// let config = EngineConfig::default();
///
/// let ctx = CalcContext::new(&tables, &config);
/// assert!(ctx.catalog.is_none());
/// ```
#[derive(Clone, Copy)]
pub struct CalcContext<'a> {
    pub data: &'a dyn GameData,

    /// `None` until the catalog has loaded. Ranking is skipped without it.
    pub catalog: Option<&'a ConsumableCatalog>,

    pub config: &'a EngineConfig,
}

impl<'a> CalcContext<'a> {
    /// Create a context without a consumable catalog.
    pub fn new(data: &'a dyn GameData, config: &'a EngineConfig) -> Self {
        Self {
            data,
            catalog: None,
            config,
        }
    }

    /// Attach a loaded catalog.
    pub fn with_catalog(mut self, catalog: &'a ConsumableCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Attach a shared catalog if it has finished loading.
    pub fn with_shared_catalog(mut self, shared: &'a SharedCatalog) -> Self {
        self.catalog = shared.get();
        self
    }
}

impl std::fmt::Debug for CalcContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalcContext")
            .field("data_ready", &self.data.is_ready())
            .field("catalog_loaded", &self.catalog.is_some())
            .field("config", &self.config)
            .finish()
    }
}
