// Presentation layer - command line interface and output formats
pub mod cli;
pub mod output;
