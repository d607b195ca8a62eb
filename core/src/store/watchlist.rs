//! Watchlist membership.

use super::DeskStore;
use crate::model::WatchlistItem;

impl DeskStore {
    /// Add an entity to the watchlist. The external trigger (detection
    /// process or auditor action) constructs the item.
    pub fn add_to_watchlist(&mut self, item: WatchlistItem) {
        log::info!(
            "watchlist: add {} ({} {})",
            item.id,
            item.entity_kind.name(),
            item.entity_id
        );
        self.watchlist.push(item);
    }

    /// Remove by id. Idempotent: removing an absent id is a benign
    /// no-op, not a fault. Returns whether anything was removed.
    pub fn remove_from_watchlist(&mut self, id: &str) -> bool {
        let before = self.watchlist.len();
        self.watchlist.retain(|w| w.id != id);
        let removed = self.watchlist.len() != before;
        if removed {
            log::info!("watchlist: removed {id}");
        } else {
            log::debug!("watchlist: remove {id} was a no-op");
        }
        removed
    }
}
