pub mod digits;
pub mod filename;
