pub mod docx_reader;

pub use docx_reader::*;
