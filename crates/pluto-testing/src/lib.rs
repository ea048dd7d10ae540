//! Test harness and recording fakes for Pluto sliders.
//!
//! [`SliderTestRule`] assembles a [`PlutoView`](pluto_foundation::PlutoView)
//! over a [`RecordingList`] and a virtual clock so tests can drive cycling
//! frame by frame and assert on what the slider asked its collaborators to do.

mod fakes;
mod rule;

pub use fakes::{
    PresetIndicators, RecordingIndicator, RecordingList, RecordingListener, ScrollRequest,
    VecItemSource,
};
pub use rule::SliderTestRule;
