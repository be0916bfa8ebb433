//! ArtifactSource port - シリアライズ済みモデルの読み出し
//!
//! ArtifactSource は bytes を返すだけで、デコードは ClassifierLoader が行う。
//!
//! # 実装
//! - **FsArtifactSource**: ローカルファイル（`model/` 配下）

use async_trait::async_trait;

use crate::domain::LoadError;

/// ArtifactSource は artifact の bytes を取得する
///
/// # 設計原則
/// - 読み取りのみ（書き込み・削除はしない）
/// - `location()` はエラーメッセージとログに使う
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn read(&self) -> Result<Vec<u8>, LoadError>;

    fn location(&self) -> String;
}
