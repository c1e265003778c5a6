//! Path validation, normalization, and joining.
//!
//! All capability strategies speak absolute, `/`-separated paths. These
//! helpers keep the rules in one place so the strategies never disagree on
//! what a path means.

use crate::error::FsError;

/// Normalize a path to canonical form.
///
/// Collapses repeated separators, resolves `.` and `..` components, and
/// strips any trailing separator. Rejects relative paths and paths that
/// escape the root.
pub fn normalize_path(path: &str) -> Result<String, FsError> {
    if path.is_empty() {
        return Err(FsError::invalid_path("empty path"));
    }
    if !path.starts_with('/') {
        return Err(FsError::invalid_path(format!("not absolute: {}", path)));
    }

    let mut parts: Vec<&str> = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                if parts.pop().is_none() {
                    return Err(FsError::invalid_path(format!("escapes root: {}", path)));
                }
            }
            c => parts.push(c),
        }
    }

    if parts.is_empty() {
        Ok(String::from("/"))
    } else {
        Ok(format!("/{}", parts.join("/")))
    }
}

/// Join a child name onto a base path.
///
/// The base is assumed normalized; the result is not re-validated.
pub fn join_path(base: &str, name: &str) -> String {
    if base == "/" || base.is_empty() {
        format!("/{}", name)
    } else {
        format!("{}/{}", base, name)
    }
}

/// Parent of a normalized path. The parent of the root is the root.
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => String::from("/"),
        Some(idx) => String::from(&path[..idx]),
    }
}

/// Final component of a normalized path. Empty for the root.
pub fn filename(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_path("/").unwrap(), "/");
        assert_eq!(normalize_path("/home/user").unwrap(), "/home/user");
        assert_eq!(normalize_path("/home//user/").unwrap(), "/home/user");
        assert_eq!(normalize_path("/home/./user").unwrap(), "/home/user");
        assert_eq!(normalize_path("/home/tmp/../user").unwrap(), "/home/user");
    }

    #[test]
    fn test_normalize_rejects_bad_paths() {
        assert!(normalize_path("").is_err());
        assert!(normalize_path("relative/path").is_err());
        assert!(normalize_path("/..").is_err());
        assert!(normalize_path("/home/../../etc").is_err());
    }

    #[test]
    fn test_join() {
        assert_eq!(join_path("/", "home"), "/home");
        assert_eq!(join_path("/home", "user"), "/home/user");
        assert_eq!(join_path("", "home"), "/home");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent_path("/"), "/");
        assert_eq!(parent_path("/home"), "/");
        assert_eq!(parent_path("/home/user"), "/home");
    }

    #[test]
    fn test_filename() {
        assert_eq!(filename("/"), "");
        assert_eq!(filename("/home"), "home");
        assert_eq!(filename("/home/photo.png"), "photo.png");
    }
}
