pub mod about;
pub mod apartment_detail;
pub mod contact;
pub mod favorites;
pub mod floor_plans;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;

pub use about::about_page;
pub use apartment_detail::apartment_detail_page;
pub use contact::{contact_page, contact_sent_page};
pub use favorites::favorites_page;
pub use floor_plans::floor_plans_page;
pub use home::home_page;
pub use login::login_page;
pub use not_found::apartment_not_found_page;
pub use profile::profile_page;
