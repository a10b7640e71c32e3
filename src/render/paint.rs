use crate::foundation::core::Point;
use crate::paint::color::Color;

/// One colour stop of a gradient. `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient.
    pub offset: f64,
    /// Colour at that position.
    pub color: Color,
}

impl ColorStop {
    /// Shorthand constructor.
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient between two points in the user space active at fill time.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Where offset 0 sits.
    pub start: Point,
    /// Where offset 1 sits.
    pub end: Point,
    /// Stops in increasing offset order.
    pub stops: Vec<ColorStop>,
}

/// Two-circle radial gradient sharing one centre.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    /// Centre of both circles.
    pub center: Point,
    /// Radius at offset 0.
    pub inner_radius: f64,
    /// Radius at offset 1.
    pub outer_radius: f64,
    /// Stops in increasing offset order.
    pub stops: Vec<ColorStop>,
}

/// What a fill or stroke is painted with.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Flat colour.
    Solid(Color),
    /// Linear gradient.
    Linear(LinearGradient),
    /// Radial gradient.
    Radial(RadialGradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

/// Line end decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Square end flush with the path end.
    #[default]
    Butt,
    /// Half-disc end.
    Round,
}

/// Stroke geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in user units.
    pub width: f64,
    /// End caps.
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Butt-capped stroke of the given width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
        }
    }

    /// Replace the cap style.
    pub fn with_cap(self, cap: LineCap) -> Self {
        Self { cap, ..self }
    }
}

/// How new content combines with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Draw on top (the default).
    #[default]
    SourceOver,
    /// Draw beneath existing pixels.
    DestinationOver,
    /// Add colour values.
    Lighter,
}
