use crate::foundation::error::RevealResult;
use crate::timeline::engine::Timeline;
use crate::timeline::frame::PropertyFrame;

/// Consumer of computed frames (a renderer, a DOM bridge, a recorder).
///
/// Called once per progress update, in the order updates arrive. Implementations should be
/// cheap and idempotent: applying the same frame twice must leave the same visual state.
pub trait PropertySink {
    /// Push one frame to the output.
    fn apply(&mut self, frame: &PropertyFrame) -> RevealResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub(crate) frames: Vec<PropertyFrame>,
}

impl RecordingSink {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured frames in arrival order.
    pub fn frames(&self) -> &[PropertyFrame] {
        &self.frames
    }

    /// Most recent frame, if any.
    pub fn last(&self) -> Option<&PropertyFrame> {
        self.frames.last()
    }

    /// Take ownership of everything recorded.
    pub fn into_frames(self) -> Vec<PropertyFrame> {
        self.frames
    }
}

impl PropertySink for RecordingSink {
    fn apply(&mut self, frame: &PropertyFrame) -> RevealResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Evaluate every sample from a progress source and hand the frames to `sink`, in order.
///
/// Samples need not be monotonic or bounded. Stops at the first sink error. Returns the number
/// of frames applied.
pub fn drive<I, S>(timeline: &Timeline, progress: I, sink: &mut S) -> RevealResult<usize>
where
    I: IntoIterator<Item = f64>,
    S: PropertySink + ?Sized,
{
    let mut applied = 0usize;
    for p in progress {
        let frame = timeline.evaluate(p);
        sink.apply(&frame)?;
        applied += 1;
    }
    tracing::debug!(applied, "progress source drained");
    Ok(applied)
}

/// `steps + 1` evenly spaced samples covering `[0, 1]`.
pub fn uniform_samples(steps: u32) -> impl Iterator<Item = f64> {
    let steps = steps.max(1);
    (0..=steps).map(move |i| f64::from(i) / f64::from(steps))
}

#[cfg(test)]
#[path = "../tests/unit/sink/sink.rs"]
mod tests;
