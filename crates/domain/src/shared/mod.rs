pub mod checksum;
pub mod entity;
