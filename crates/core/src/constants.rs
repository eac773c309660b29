/// File name of the primary SQLite database inside the app data directory
pub const DEFAULT_DB_FILE_NAME: &str = "activities.db";

/// File name of the key-value namespace backing the fallback store
pub const DEFAULT_KV_FILE_NAME: &str = "kv-store.json";

/// Key under which the fallback activity blob is stored
pub const ACTIVITIES_STORAGE_KEY: &str = "activities";
