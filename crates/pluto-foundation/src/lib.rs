//! Host-facing layer of Pluto sliders.
//!
//! [`PlutoView`] wires the cycle controller and position model from
//! `pluto-core` to the collaborators a host provides through [`ports`]: the
//! scrollable list, indicators, the item source and an optional listener.

pub mod attributes;
mod indicator;
pub mod input;
pub mod ports;
pub mod view;

pub use attributes::{IndicatorPosition, SliderAttributes};
pub use input::PointerEventKind;
pub use pluto_core::{CycleState, SliderError};
pub use ports::{
    IndicatorProvider, ItemSource, OnSlideChangeListener, SlideIndicator, SliderList,
    SnapObserver,
};
pub use view::PlutoView;

pub mod prelude {
    pub use crate::attributes::{IndicatorPosition, SliderAttributes};
    pub use crate::input::PointerEventKind;
    pub use crate::ports::{
        IndicatorProvider, ItemSource, OnSlideChangeListener, SlideIndicator, SliderList,
    };
    pub use crate::view::PlutoView;
    pub use pluto_core::prelude::*;
}
