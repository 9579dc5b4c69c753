/// Presentation layer: command line parsing and report rendering
pub mod cli;
