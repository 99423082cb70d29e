// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

/// One of the two independent axes of a [`TorusMapping`]. Used to name the offending
/// axis in [`MappingError::OutOfRegion`].
///
/// [`TorusMapping`]: crate::TorusMapping
/// [`MappingError::OutOfRegion`]: crate::MappingError::OutOfRegion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Axis {
    #[strum(to_string = "x")]
    X,
    #[strum(to_string = "y")]
    Y,
}
