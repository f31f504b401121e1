use std::fs::Metadata;
use std::io;
use std::path::Path;

/// Outcome of probing a path with `stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// `stat` succeeded.
    Present,
    /// `stat` reported the path missing.
    Absent,
    /// `stat` failed for another reason (for example permission denied),
    /// so existence could not be decided.
    Indeterminate(io::ErrorKind),
}

impl Presence {
    /// Classify the result of a `stat` call.
    pub fn from_stat(res: io::Result<Metadata>) -> Self {
        match res {
            Ok(_) => Presence::Present,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Presence::Absent,
            Err(e) => Presence::Indeterminate(e.kind()),
        }
    }

    /// Collapse to a bool, treating an undecided probe as existing.
    pub fn is_conservatively_present(self) -> bool {
        !matches!(self, Presence::Absent)
    }
}

/// Probe `path` without collapsing errors.
pub fn probe<P: AsRef<Path>>(path: P) -> Presence {
    Presence::from_stat(std::fs::metadata(path.as_ref()))
}

/// Return `true` unless `path` is confirmed absent.
///
/// Any `stat` error other than not-found (permission denied, I/O errors)
/// still reports `true`.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    probe(path).is_conservatively_present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_path_is_absent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("no_such_file_hopefully");
        assert_eq!(probe(&p), Presence::Absent);
        assert!(!exists(&p));
    }

    #[test]
    fn file_and_dir_are_present() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        assert_eq!(probe(&file), Presence::Present);
        assert!(exists(&file));
        assert!(exists(tmp.path()));
    }

    #[test]
    fn permission_error_counts_as_existing() {
        let p = Presence::from_stat(Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        assert_eq!(p, Presence::Indeterminate(io::ErrorKind::PermissionDenied));
        assert!(p.is_conservatively_present());
    }

    #[cfg(unix)]
    #[test]
    fn unsearchable_parent_is_not_reported_absent() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempdir().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("inside.txt"), b"x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let target = locked.join("inside.txt");
        let presence = probe(&target);
        let seen = exists(&target);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // privileged users bypass the permission check and see the file
        assert!(matches!(
            presence,
            Presence::Present | Presence::Indeterminate(io::ErrorKind::PermissionDenied)
        ));
        assert!(seen);
    }

    #[test]
    fn not_found_error_is_absent() {
        let p = Presence::from_stat(Err(io::Error::from(io::ErrorKind::NotFound)));
        assert!(!p.is_conservatively_present());
    }
}
