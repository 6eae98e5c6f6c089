//! Lexical path cleaning for the `path` argument.

use std::path::{Component, Path, PathBuf};

/// Clean a raw path argument.
///
/// Surrounding whitespace is trimmed and the path is normalized lexically
/// (`.` dropped, `..` folded into its parent, repeated and trailing
/// separators removed). With `absolute` set, a relative path is first joined
/// onto the current directory. Blank input yields an empty path.
pub fn clean_path(raw: &str, absolute: bool) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PathBuf::new();
    }

    let path = Path::new(trimmed);
    if absolute && path.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            return normalize(&cwd.join(path));
        }
    }
    normalize(path)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    // Count of normal components pushed, so `..` never climbs past a root.
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                out.push(component.as_os_str());
                depth = 0;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => {
                out.push(name);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
