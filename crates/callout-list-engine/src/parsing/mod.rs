pub mod callouts;

pub use callouts::parse_callouts;
