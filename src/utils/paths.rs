use std::path::PathBuf;

/// Resolves the directory to search for installed files.
///
/// Meson exports the configured install prefix, but when a package manager
/// stages the install under `DESTDIR` the files actually land at
/// `<destdir>/<prefix-without-root>`. This mirrors that convention: the
/// prefix is stripped of any `C:` style drive component and of leading
/// path separators before being joined onto the staging root.
pub fn effective_install_root(prefix: &str, destdir: Option<&str>) -> PathBuf {
    match destdir {
        Some(dest) if !dest.is_empty() => {
            let relative = strip_drive(prefix).trim_start_matches(['/', '\\']);
            PathBuf::from(dest).join(relative)
        }
        _ => PathBuf::from(prefix),
    }
}

/// Drops a leading `X:` drive designator, if present.
fn strip_drive(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        &path[2..]
    } else {
        path
    }
}
