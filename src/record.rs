use std::path::{Path, PathBuf};

//

/// graphics pipeline stage, one per recognized source extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
    Geometry,
    TessControl,
    TessEvaluation,
}

impl ShaderStage {
    /// discovery order
    pub const ALL: [Self; 6] = [
        Self::Vertex,
        Self::Fragment,
        Self::Compute,
        Self::Geometry,
        Self::TessControl,
        Self::TessEvaluation,
    ];

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
            Self::Compute => "comp",
            Self::Geometry => "geom",
            Self::TessControl => "tesc",
            Self::TessEvaluation => "tese",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?;
        Self::ALL.into_iter().find(|stage| ext == stage.extension())
    }
}

//

/// one discovered shader source and, once its compiler run
/// has terminated, whether that run succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationRecord {
    source_path: PathBuf,
    succeeded: Option<bool>,
}

impl CompilationRecord {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            succeeded: None,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn stage(&self) -> Option<ShaderStage> {
        ShaderStage::from_path(&self.source_path)
    }

    /// `None` while the compiler has not run yet
    pub fn succeeded(&self) -> Option<bool> {
        self.succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.succeeded() == Some(false)
    }

    #[track_caller]
    pub fn finish(&mut self, succeeded: bool) {
        assert!(
            self.succeeded.is_none(),
            "{} finished twice",
            self.source_path.display()
        );
        self.succeeded = Some(succeeded);
    }
}

//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_from_extension() {
        assert_eq!(
            ShaderStage::from_path(Path::new("a.vert")),
            Some(ShaderStage::Vertex)
        );
        assert_eq!(
            ShaderStage::from_path(Path::new("lighting.tese")),
            Some(ShaderStage::TessEvaluation)
        );
        assert_eq!(ShaderStage::from_path(Path::new("common.glsl")), None);
        assert_eq!(ShaderStage::from_path(Path::new("vert")), None);
    }

    #[test]
    fn record_starts_pending() {
        let record = CompilationRecord::new("b.frag");
        assert_eq!(record.succeeded(), None);
        assert!(!record.is_failed());
        assert_eq!(record.stage(), Some(ShaderStage::Fragment));
    }

    #[test]
    fn record_finishes_once() {
        let mut record = CompilationRecord::new("b.frag");
        record.finish(false);
        assert_eq!(record.succeeded(), Some(false));
        assert!(record.is_failed());
    }

    #[test]
    #[should_panic(expected = "finished twice")]
    fn record_cannot_finish_twice() {
        let mut record = CompilationRecord::new("a.comp");
        record.finish(true);
        record.finish(true);
    }
}
