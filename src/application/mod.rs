/// Application layer: use cases that orchestrate loading, indexing and diffing
pub mod use_cases;
