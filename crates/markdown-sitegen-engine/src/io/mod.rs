use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
    #[error("Path is not relative to the content root: {0}")]
    InvalidPath(PathBuf),
}

/// Read a file relative to `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Markdown files under the content directory as paths relative to it
pub fn relative_markdown_paths(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    scan_markdown_files(content_root)?
        .into_iter()
        .map(|path| {
            let relative = path
                .strip_prefix(content_root)
                .map_err(|_| IoError::InvalidPath(path.clone()))?;
            RelativePathBuf::from_path(relative).map_err(|_| IoError::InvalidPath(path.clone()))
        })
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Remove `path` if present and recreate it empty
pub fn reset_dir(path: &Path) -> Result<(), IoError> {
    if path.exists() {
        log::debug!("Removing {}", path.display());
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Copy every file under `src` into `dst`, preserving the directory layout.
///
/// Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, IoError> {
    validate_dir(src)?;
    fs::create_dir_all(dst)?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }

    Ok(copied)
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}
