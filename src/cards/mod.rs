//! Card-side contracts and helpers.
//!
//! ## Key Types
//!
//! - `Card`: anything with a label that the deck can circulate
//! - `Recipient`: anything that can be dealt cards
//! - `Hand`: a generic `Recipient` backed by a `Vec`
//! - `render_many`: space-separated label rendering

pub mod hand;
pub mod render;
pub mod traits;

pub use hand::Hand;
pub use render::render_many;
pub use traits::{Card, Recipient};
