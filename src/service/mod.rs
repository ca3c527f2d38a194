//! FavoritesService: list, add and remove favorites for a user.

mod favorites;
pub use favorites::{AddOutcome, FavoritesService};
