pub mod manifest_parser;
