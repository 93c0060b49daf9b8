pub mod config;
pub mod logging;

pub mod capture;
pub mod checksum;
pub mod demo;
pub mod frame;
