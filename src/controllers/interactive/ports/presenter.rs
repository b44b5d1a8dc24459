use crate::core::data::frame_buffer::FrameBuffer;
use std::sync::Arc;

/// Receives each newly completed frame. The frame is shared with the
/// renderer's cache and must be treated as read-only.
pub trait FramePresenterPort {
    fn present(&mut self, frame: Arc<FrameBuffer>);
}
