//! Visit Counter

use crate::error::Result;
use crate::medium::StorageMedium;
use crate::store::{keys, Store};

/// Count this page load and return the new total.
pub fn record_visit<M: StorageMedium>(store: &Store<M>) -> Result<u64> {
    let visits = store.get::<u64>(keys::VISITS, 0)?.saturating_add(1);
    store.set(keys::VISITS, &visits)?;
    Ok(visits)
}
