pub mod cli;
pub mod printer;
pub mod traversal;
pub mod types;
