pub mod location_handler;

pub use location_handler::{__path_list_locations, list_locations};
