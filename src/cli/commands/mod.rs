pub mod add;
pub mod backup;
pub mod chat;
pub mod clear;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;
pub mod vehicles;
