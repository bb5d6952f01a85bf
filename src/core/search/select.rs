//! Picking a suggestion.

use crate::core::catalog::Catalog;
use crate::core::error::Result;
use crate::core::types::Selection;

/// Select an item by id.
///
/// The item's title becomes the new query text and the caller navigates
/// to the item's route.
pub fn select(catalog: &Catalog, id: &str) -> Result<Selection> {
    let item = catalog.require(id)?;
    Ok(Selection {
        id: item.id.clone(),
        query: item.title.clone(),
        route: item.route(),
    })
}
