pub mod manifest_store;
