// This file contains helper functions shared by the generators: file output, path handling
// and JavaScript literal formatting.

use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use serde_json::Value;

/// Creates a directory if it doesn't exist
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes content to a file, creating parent directories if needed
pub fn write_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        ensure_directory_exists(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(content.as_ref())?;
    Ok(())
}

/// Gets a relative path between two paths, resolving relative inputs against the working directory
pub fn get_relative_path<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> PathBuf {
    let path = absolutize(path.as_ref());
    let base = absolutize(base.as_ref());

    pathdiff::diff_paths(&path, &base).unwrap_or(path)
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Builds a CommonJS `require` specifier for `module` inside `target_dir`, as seen from `from_dir`
pub fn module_specifier(
    from_dir: impl AsRef<Path>,
    target_dir: impl AsRef<Path>,
    module: &str,
) -> String {
    let relative = get_relative_path(target_dir, from_dir);
    if relative.is_absolute() {
        return format!("{}/{}", relative.display(), module);
    }

    let mut parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::CurDir => None,
            Component::ParentDir => Some("..".to_string()),
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect();
    parts.push(module.to_string());

    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}

/// Converts space separated words to PascalCase, upper-casing only the first letter of each word
pub fn to_pascal_case(words: &str) -> String {
    let mut pascal = String::new();

    for word in words.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
        }
    }

    pascal
}

/// Double-quoted JavaScript string literal (JSON string syntax)
pub fn js_string_literal(text: &str) -> String {
    Value::from(text).to_string()
}

/// Single-quoted JavaScript string literal
pub fn js_single_quoted(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}
