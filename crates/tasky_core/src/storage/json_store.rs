use crate::error::AppError;
use crate::model::Task;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = ".tasky.json";
pub const STORE_PATH_ENV_VAR: &str = "TASKY_STORE_PATH";

/// Resolves the task file. `TASKY_STORE_PATH` wins over a configured path,
/// which wins over `~/.tasky.json`.
pub fn store_path(configured: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(STORE_PATH_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }

    Ok(home_dir()?.join(STORE_FILE_NAME))
}

fn home_dir() -> Result<PathBuf, AppError> {
    if cfg!(windows) {
        let profile = std::env::var("USERPROFILE")
            .map_err(|_| AppError::invalid_data("USERPROFILE is not set"))?;
        Ok(PathBuf::from(profile))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home))
    }
}

pub fn load_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(AppError::io(format!("{}: {}", path.display(), err))),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_data(format!("invalid task file {}: {}", path.display(), err))
    })
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content =
        serde_json::to_string_pretty(tasks).map_err(|err| AppError::serialization(err.to_string()))?;
    let io_err = |err: std::io::Error| AppError::io(format!("{}: {}", path.display(), err));

    let mut file = open_private(path).map_err(io_err)?;
    // A file created by an older build may still be world-readable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(io_err)?;
    }
    file.write_all(content.as_bytes()).map_err(io_err)?;

    Ok(())
}

/// Opens the task file for overwrite; a new file is created owner-only.
fn open_private(path: &Path) -> std::io::Result<std::fs::File> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
