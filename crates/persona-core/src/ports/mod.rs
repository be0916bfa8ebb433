//! Ports - 抽象化レイヤー
//!
//! 外部の collaborator（学習済みモデル、artifact の保存先、時刻、ID 生成）を
//! trait で隠蔽する。app 層はここにある trait だけに依存する。

pub mod artifact_source;
pub mod classifier;
pub mod clock;
pub mod id_generator;

pub use self::artifact_source::ArtifactSource;
pub use self::classifier::{Classifier, predict};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
