pub mod filter;
pub mod images;
pub mod latency;
pub mod newsletter;
pub mod pagination;
pub mod property;
pub mod view_state;
