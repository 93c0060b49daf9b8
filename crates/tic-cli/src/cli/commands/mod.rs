//! CLI command handlers, one per file.

mod checksum;
mod decode;
mod demo;
mod encode;

pub use checksum::run_checksum;
pub use decode::run_decode;
pub use demo::run_demo;
pub use encode::run_encode;
