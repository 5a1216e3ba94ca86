//! Business domain entities. Pure data structures with no actor-specific
//! concerns.

mod food;
mod order;
mod principal;
mod review;

pub use food::{Food, FoodCreate, FoodPatch};
pub use order::{Order, OrderCreate, OrderDraft, OrderItem, OrderPatch, INITIAL_ORDER_STATUS};
pub use principal::Principal;
pub use review::{Review, ReviewCreate, ReviewDraft, ReviewEdit, ReviewPatch};
