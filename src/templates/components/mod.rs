pub mod card;
pub mod email_cta;
pub mod error;
pub mod filter_bar;
pub mod footer;
pub mod navbar;
pub mod pagination;
pub mod skeleton;

pub use card::property_card;
pub use email_cta::{newsletter_section, newsletter_thanks};
pub use error::error_page;
pub use filter_bar::filter_bar;
pub use footer::footer;
pub use navbar::navbar;
pub use pagination::pagination;
pub use skeleton::property_skeleton;
