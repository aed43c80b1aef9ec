pub mod analyze;
pub mod clean;
pub mod export;
pub mod extract;
pub mod generate;
pub mod resolve;
pub mod rewrite;
