pub mod config;
pub mod logging;

pub mod batch;
pub mod checksum;
pub mod manifest;
pub mod slug;
