use core::fmt;
use core::str::FromStr;

/// Layout direction of a list. Fixed for the lifetime of a controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    ForwardHorizontal,
    ReverseHorizontal,
    #[default]
    ForwardVertical,
    ReverseVertical,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Self::ForwardHorizontal,
        Self::ReverseHorizontal,
        Self::ForwardVertical,
        Self::ReverseVertical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ForwardHorizontal => "forward-horizontal",
            Self::ReverseHorizontal => "reverse-horizontal",
            Self::ForwardVertical => "forward-vertical",
            Self::ReverseVertical => "reverse-vertical",
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Self::ReverseHorizontal | Self::ReverseVertical)
    }

    /// Resolves the orientation into the data consumed by the correction step.
    pub fn resolve(self) -> Direction {
        let axis = match self {
            Self::ForwardHorizontal | Self::ReverseHorizontal => Axis::Horizontal,
            Self::ForwardVertical | Self::ReverseVertical => Axis::Vertical,
        };
        let leading = if self.is_reversed() {
            Edge::Tail
        } else {
            Edge::Head
        };
        Direction { axis, leading }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or(ParseOrientationError(()))
    }
}

/// Returned when an orientation name is not one of the four recognized values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOrientationError(());

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "unrecognized orientation (expected forward-horizontal, reverse-horizontal, \
             forward-vertical or reverse-vertical)",
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseOrientationError {}

/// Physical scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// An end of the ordered item sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Edge {
    Head,
    Tail,
}

impl Edge {
    pub const BOTH: [Edge; 2] = [Self::Head, Self::Tail];

    pub fn opposite(self) -> Self {
        match self {
            Self::Head => Self::Tail,
            Self::Tail => Self::Head,
        }
    }

    /// Stable slot for per-edge arrays (`Head` = 0).
    pub fn index(self) -> usize {
        match self {
            Self::Head => 0,
            Self::Tail => 1,
        }
    }
}

/// An orientation resolved into data.
///
/// - `axis` is the main axis (the one the list scrolls along).
/// - `leading` is the edge laid out at scroll offset 0. Content growing at the leading edge
///   pushes everything already rendered away from the viewport, so the offset must follow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub axis: Axis,
    pub leading: Edge,
}

impl Direction {
    /// The edge laid out at the far end of the scroll range.
    pub fn trailing(&self) -> Edge {
        self.leading.opposite()
    }

    /// Offset correction for content that grew (or shrank) by `delta` at `edge`.
    pub fn correction(&self, edge: Edge, delta: i64) -> i64 {
        if edge == self.leading { delta } else { 0 }
    }
}

impl From<Orientation> for Direction {
    fn from(orientation: Orientation) -> Self {
        orientation.resolve()
    }
}
