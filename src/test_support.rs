use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
#[cfg(unix)]
use std::time::{Duration, Instant};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Puts a test in a scratch directory, standing in for the caller's
/// directory the launcher is started from. Restores the original working
/// directory on drop, since the launcher itself changes it.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Launches call set_current_dir, so every test touching the cwd
        // holds this lock, #[serial] or not.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Write a fake interpreter that records its cwd and arguments to `marker`.
#[cfg(unix)]
pub(crate) fn fake_interpreter(dir: &Path, name: &str, marker: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = format!(
        "#!/bin/sh\n{{ pwd; for arg in \"$@\"; do echo \"$arg\"; done; }} > '{}.tmp'\nmv '{}.tmp' '{}'\n",
        marker.display(),
        marker.display(),
        marker.display()
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Create a non-executable file, which the search-path probe must skip.
#[cfg(unix)]
pub(crate) fn plain_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "not a program\n").unwrap();
    path
}

/// Poll for `path` to appear and return its lines.
#[cfg(unix)]
pub(crate) fn wait_for_lines(path: &Path, timeout: Duration) -> Option<Vec<String>> {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if let Ok(content) = std::fs::read_to_string(path) {
            return Some(content.lines().map(str::to_string).collect());
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    None
}

/// Copy a stock Windows console program under `name` so it can stand in for
/// an interpreter. It ignores the entry-point argument and exits once its
/// null stdin is exhausted.
#[cfg(windows)]
pub(crate) fn system_program_copy(dir: &Path, name: &str) -> PathBuf {
    let system_root = std::env::var_os("SystemRoot").unwrap_or_else(|| "C:\\Windows".into());
    let source = PathBuf::from(system_root).join("System32").join("cmd.exe");
    let path = dir.join(name);
    std::fs::copy(&source, &path).unwrap();
    path
}
