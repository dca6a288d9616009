//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod validation;

pub use item::{
    CreateItemRequest, Item, ItemName, ItemNumber, NewItem, UpdateNumberRequest,
    MAX_ITEM_NAME_LEN,
};
pub use validation::ValidationError;
