use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::LoadError;
use crate::ports::ArtifactSource;

/// FsArtifactSource はローカルファイルから artifact を読む
#[derive(Debug, Clone)]
pub struct FsArtifactSource {
    path: PathBuf,
}

impl FsArtifactSource {
    /// 旧アプリと同じく `model/` 配下に置く
    pub const DEFAULT_PATH: &'static str = "model/best_logistic_regression_model.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FsArtifactSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

#[async_trait]
impl ArtifactSource for FsArtifactSource {
    async fn read(&self) -> Result<Vec<u8>, LoadError> {
        tracing::debug!(path = %self.path.display(), "reading model artifact");
        tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: self.location(),
            },
            _ => LoadError::Unreadable {
                path: self.location(),
                message: e.to_string(),
            },
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
