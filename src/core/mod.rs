pub mod client;
pub mod cycle;

pub use crate::domain::model::{Tag, TagRecommendation, UpstreamReply};
pub use crate::domain::ports::TagRecommender;
pub use crate::utils::error::Result;
