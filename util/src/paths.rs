use crate::config;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Ensure the parent directory of a *file path* exists (no-op if none).
pub fn ensure_parent_dir<P: AsRef<Path>>(file_path: P) -> io::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Global storage root (absolute), from `config::storage_root()`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    let root = config::storage_root();
    let p = PathBuf::from(root);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// A single course folder: {STORAGE_ROOT}/{course}
pub fn course_dir(course: &str) -> PathBuf {
    storage_root().join(course)
}

/// A lesson folder inside a course: {STORAGE_ROOT}/{course}/{lesson}
pub fn lesson_dir(course: &str, lesson: &str) -> PathBuf {
    course_dir(course).join(lesson)
}

/// Authored assignment set for a lesson.
pub fn assignment_set_path(course: &str, lesson: &str) -> PathBuf {
    lesson_dir(course, lesson).join("assignments.json")
}

/// Optional per-lesson checker configuration.
pub fn lesson_config_path(course: &str, lesson: &str) -> PathBuf {
    lesson_dir(course, lesson).join("config.json")
}
