pub mod card;
pub mod category;
pub mod filter_bar;
pub mod view_toggle;

pub use card::{favorite_toggle, listing_card, listing_row};
pub use category::category_grid;
pub use filter_bar::filter_bar;
pub use view_toggle::view_toggle;
