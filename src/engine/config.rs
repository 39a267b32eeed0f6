use std::path::PathBuf;

/// Options for opening a workbench database.
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// Directory the database file lives in; created on open if absent.
    pub data_dir: PathBuf,
    /// Name of the persistent store; each name is its own database.
    pub database_name: String,
}

impl ConnectionOptions {
    /// Options for a database stored under `data_dir` with the default name.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_name: "workbench".to_string(),
        }
    }

    /// Use a different database name.
    #[must_use]
    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    /// Full path of the database file these options resolve to.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.db", self.database_name))
    }
}
