use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::kv::KvStore;

/// Storage key for the persisted id array.
pub const FAVORITES_KEY: &str = "favorites";

/// Read the persisted favorite ids. A missing or corrupt payload is
/// treated as an empty set, never surfaced as an error.
pub fn favorite_ids(store: &dyn KvStore) -> Result<Vec<String>, ServerError> {
    let raw = store.get(FAVORITES_KEY)?;
    Ok(raw
        .and_then(|json| serde_json::from_str::<Vec<String>>(&json).ok())
        .unwrap_or_default())
}

fn save_ids(store: &dyn KvStore, ids: &[String]) -> Result<(), ServerError> {
    let json = serde_json::to_string(ids).map_err(|_| ServerError::InternalError)?;
    store.set(FAVORITES_KEY, &json)
}

pub fn is_favorite(store: &dyn KvStore, id: &str) -> Result<bool, ServerError> {
    Ok(favorite_ids(store)?.iter().any(|fav| fav == id))
}

/// Flip membership for `id` and persist immediately.
/// Returns the resulting membership state.
pub fn toggle(store: &dyn KvStore, id: &str) -> Result<bool, ServerError> {
    let mut ids = favorite_ids(store)?;

    let now_member = if let Some(pos) = ids.iter().position(|fav| fav == id) {
        ids.remove(pos);
        false
    } else {
        ids.push(id.to_string());
        true
    };

    save_ids(store, &ids)?;
    Ok(now_member)
}

pub fn remove(store: &dyn KvStore, id: &str) -> Result<(), ServerError> {
    let mut ids = favorite_ids(store)?;
    ids.retain(|fav| fav != id);
    save_ids(store, &ids)
}

/// Empty the set and persist immediately.
pub fn clear(store: &dyn KvStore) -> Result<(), ServerError> {
    save_ids(store, &[])
}

/// Subset of `all` whose id is a favorite, preserving the order of `all`.
pub fn list<'a>(
    store: &dyn KvStore,
    all: &'a [Listing],
) -> Result<Vec<&'a Listing>, ServerError> {
    let ids = favorite_ids(store)?;
    Ok(all
        .iter()
        .filter(|listing| ids.iter().any(|fav| *fav == listing.id))
        .collect())
}
