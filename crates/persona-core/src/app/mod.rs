//! App - アプリケーション層
//!
//! ports を組み合わせて「送信 → 予測」の流れを実装する。
//!
//! # 主要コンポーネント
//! - **ClassifierLoader**: artifact の遅延ロードとキャッシュ
//! - **Predictor**: encode → predict → Prediction

pub mod loader;
pub mod predictor;

pub use self::loader::ClassifierLoader;
pub use self::predictor::Predictor;
