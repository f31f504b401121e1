#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Lay out `layout` under `root`. Entries ending in `/` are directories;
/// anything else is a file whose content is its own relative path.
pub fn build_tree(root: &Path, layout: &[&str]) {
    for item in layout {
        let p = root.join(item.trim_end_matches('/'));
        if item.ends_with('/') {
            fs::create_dir_all(&p).expect("create fixture dir");
        } else {
            if let Some(parent) = p.parent() {
                fs::create_dir_all(parent).expect("create fixture parent");
            }
            fs::write(&p, item.as_bytes()).expect("write fixture file");
        }
    }
}

/// Paths relative to `root`, one per line, using `/` separators.
pub fn render(root: &Path, list: &[PathBuf]) -> String {
    list.iter()
        .map(|p| {
            let rel = p.strip_prefix(root).unwrap_or(p);
            if rel.as_os_str().is_empty() {
                ".".to_string()
            } else {
                rel.to_string_lossy().replace('\\', "/")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
