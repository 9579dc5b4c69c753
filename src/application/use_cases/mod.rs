pub mod diff_manifests;

pub use diff_manifests::{DiffManifestsConfig, DiffManifestsUseCase};
