use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

//

/// scratch directory under the system temp dir, removed on drop
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);

        let id = NEXT.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "shader-build-test-{}-{id}",
            std::process::id()
        ));
        fs::create_dir_all(&path).unwrap();

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn touch(&self, name: &str) {
        fs::write(self.path.join(name), "#version 450\nvoid main() {}\n").unwrap();
    }

    pub fn mkdir(&self, name: &str) {
        fs::create_dir_all(self.path.join(name)).unwrap();
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        _ = fs::remove_dir_all(&self.path);
    }
}
