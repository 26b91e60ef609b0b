pub mod status_handler;

pub use status_handler::{__path_store_status, store_status};
