pub mod booking_handler;

pub use booking_handler::{__path_create_booking, __path_list_bookings, create_booking, list_bookings};
