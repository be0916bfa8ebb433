//! ClassifierLoader - artifact を 1 回だけ読み込んでキャッシュする
//!
//! # 学習ポイント
//! - `tokio::sync::OnceCell` による lazy singleton
//! - グローバル変数ではなく `Arc<ClassifierLoader>` を明示的に渡す
//!
//! # キャッシュの規則
//! - 最初の `load()` だけが ArtifactSource を読む
//! - 同時に複数の `load()` が来ても読み込みは 1 回（OnceCell が初期化を直列化）
//! - 失敗も結果としてキャッシュする（リトライしない。復旧はプロセス再起動）
//! - 初期化後の読み出しはロック不要

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::LoadError;
use crate::impls::decode_classifier;
use crate::ports::{ArtifactSource, Classifier};

type LoadResult = Result<Arc<dyn Classifier>, LoadError>;

pub struct ClassifierLoader {
    source: Option<Arc<dyn ArtifactSource>>,
    cell: OnceCell<LoadResult>,
}

impl ClassifierLoader {
    pub fn new(source: impl ArtifactSource + 'static) -> Self {
        Self::from_source(Arc::new(source))
    }

    pub fn from_source(source: Arc<dyn ArtifactSource>) -> Self {
        Self {
            source: Some(source),
            cell: OnceCell::new(),
        }
    }

    /// すでに手元にある classifier で初期化済みの loader を作る
    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            source: None,
            cell: OnceCell::new_with(Some(Ok(classifier))),
        }
    }

    /// classifier を返す（初回のみ artifact を読む）
    pub async fn load(&self) -> Result<Arc<dyn Classifier>, LoadError> {
        self.cell.get_or_init(|| self.load_uncached()).await.clone()
    }

    /// 初期化が終わっているか（成功・失敗は問わない）
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    pub fn location(&self) -> String {
        self.source
            .as_ref()
            .map(|s| s.location())
            .unwrap_or_else(|| "<in-memory>".to_string())
    }

    async fn load_uncached(&self) -> LoadResult {
        let Some(source) = &self.source else {
            return Err(LoadError::NotFound {
                path: self.location(),
            });
        };
        let location = source.location();
        tracing::info!(%location, "loading model artifact");

        let result = source
            .read()
            .await
            .and_then(|bytes| decode_classifier(&bytes, &location));
        match &result {
            Ok(classifier) => {
                tracing::info!(%location, classifier = classifier.name(), "model loaded")
            }
            Err(e) => tracing::error!(%location, error = %e, "failed to load model"),
        }
        result
    }
}
