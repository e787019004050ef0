pub mod period;
pub mod quality;
pub mod summary;
pub mod trip;
pub mod trip_log;
pub mod vehicle;
