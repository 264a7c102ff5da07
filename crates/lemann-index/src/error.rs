use thiserror::Error;

use lemann_core::organ::Organ;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("segment '{segment}' is not a valid {} segment", .organ.as_str())]
    InvalidSegment { organ: Organ, segment: String },
}
