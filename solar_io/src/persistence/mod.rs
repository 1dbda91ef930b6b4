pub mod record;
pub mod parser;
pub mod diagnostics;
pub mod loader;
pub mod writer;
pub mod statistics;
