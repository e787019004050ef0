pub mod add;
pub mod aggregate;
pub mod backup;
pub mod builder;
pub mod chat;
pub mod log;
pub mod session;
pub mod summary;
pub mod validate;
