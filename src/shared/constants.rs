/// Collection holding booking documents
pub const BOOKING_COLLECTION: &str = "booking";

/// Default number of bookings returned by the listing endpoint
pub const DEFAULT_BOOKINGS_LIMIT: i64 = 100;
