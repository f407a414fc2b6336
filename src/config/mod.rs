mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader};
pub use model::{
    CONFIG_VERSION, Config, DEFAULT_CSV_PATH, DEFAULT_MANIFEST_PATH, DEFAULT_SUMMARY_PATH,
    ManifestConfig, OutputConfig, ScanConfig,
};
