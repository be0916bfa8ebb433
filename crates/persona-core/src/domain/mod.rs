//! Domain model (answers, features, labels, ids, prediction records, errors).

pub mod answer;
pub mod errors;
pub mod features;
pub mod ids;
pub mod label;
pub mod prediction;

pub use self::answer::{Answer, AnswerPolicy, Answers};
pub use self::errors::{InputError, LoadError, PersonaError, PredictionError};
pub use self::features::{FEATURE_NAMES, FeatureVector, encode};
pub use self::ids::{Id, IdMarker, RequestId};
pub use self::label::Label;
pub use self::prediction::Prediction;
