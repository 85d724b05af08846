//! Dimensions, host measurements and the cosmetic alignment math around the
//! track.

use inkslider_core::{Color, Density, Dp, IconId, Orientation, Rect, Size, Vec2};

use crate::controller::StepButton;
use crate::positioner::{BadgeExtents, PositionerMetrics};

/// Widget dimensions in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderDimens {
    /// Length of one color segment along the axis.
    pub row_length: Dp,
    /// Track thickness across the axis.
    pub row_thickness: Dp,
    /// How far side badges overlap the +/- button container.
    pub indicator_negative_margin: Dp,
    pub button_width: Dp,
    pub button_height: Dp,
    pub badge_text_size: Dp,
}

impl Default for SliderDimens {
    fn default() -> Self {
        Self {
            row_length: Dp(48.0),
            row_thickness: Dp(36.0),
            indicator_negative_margin: Dp(8.0),
            button_width: Dp(48.0),
            button_height: Dp(48.0),
            badge_text_size: Dp(14.0),
        }
    }
}

/// `SliderDimens` resolved to px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PxDimens {
    pub row_length: f32,
    pub row_thickness: f32,
    pub indicator_negative_margin: f32,
    pub button: Size,
    pub badge_text_size: f32,
}

impl SliderDimens {
    pub fn resolve(&self, density: Density) -> PxDimens {
        PxDimens {
            row_length: self.row_length.to_px(density),
            row_thickness: self.row_thickness.to_px(density),
            indicator_negative_margin: self.indicator_negative_margin.to_px(density),
            button: Size {
                width: self.button_width.to_px(density),
                height: self.button_height.to_px(density),
            },
            badge_text_size: self.badge_text_size.to_px(density),
        }
    }
}

/// Colors and icons used where an item's `Display` leaves a field unset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderTheme {
    pub badge_text: Color,
    /// Text drawn on top of the filled center badge.
    pub special_text: Color,
    /// Pointer drawn behind the side badges.
    pub arrow_icon: IconId,
    pub plus_icon: IconId,
    pub minus_icon: IconId,
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self {
            badge_text: Color::BLACK,
            special_text: Color::WHITE,
            arrow_icon: IconId(1),
            plus_icon: IconId(2),
            minus_icon: IconId(3),
        }
    }
}

/// What the host measured after its layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackMetrics {
    /// Track's top-left corner in parent coordinates.
    pub origin: Vec2,
    pub top_left: Size,
    pub bottom_right: Size,
    pub center: Size,
}

impl TrackMetrics {
    pub fn positioner(&self, orientation: Orientation) -> PositionerMetrics {
        PositionerMetrics {
            spacing: orientation.along(self.origin),
            extents: BadgeExtents {
                top_left: orientation.length_of(self.top_left),
                bottom_right: orientation.length_of(self.bottom_right),
                center: orientation.length_of(self.center),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadgeSlot {
    TopLeft,
    BottomRight,
    Center,
}

/// Rect of a badge whose start edge sits at `offset` along the axis.
pub fn badge_rect(
    slot: BadgeSlot,
    orientation: Orientation,
    offset: f32,
    origin: Vec2,
    thickness: f32,
    size: Size,
) -> Rect {
    let cross_origin = match orientation {
        Orientation::Vertical => origin.x,
        Orientation::Horizontal => origin.y,
    };
    let cross_size = orientation.thickness_of(size);
    let across = match slot {
        BadgeSlot::TopLeft => cross_origin - cross_size,
        BadgeSlot::BottomRight => cross_origin + thickness,
        BadgeSlot::Center => cross_origin + (thickness - cross_size) / 2.0,
    };
    orientation.rect(
        offset,
        across,
        orientation.length_of(size),
        cross_size,
    )
}

/// Cross-axis extent of the +/- button container: the track thickness minus
/// the overlap of each visible side badge, nudged when the track and the
/// button differ in thickness.
pub fn button_container_extent(
    orientation: Orientation,
    dimens: &PxDimens,
    top_left_visible: bool,
    bottom_right_visible: bool,
) -> f32 {
    let thickness = dimens.row_thickness as i32;
    let margin = dimens.indicator_negative_margin as i32;
    let button = match orientation {
        Orientation::Horizontal => dimens.button.height as i32,
        Orientation::Vertical => dimens.button.width as i32,
    };

    let mut extent = thickness
        - if top_left_visible { margin } else { 0 }
        - if bottom_right_visible { margin } else { 0 };
    let only_bottom_right = bottom_right_visible && !top_left_visible;
    let only_top_left = top_left_visible && !bottom_right_visible;

    if thickness < button {
        let correction = (button - thickness) / 2;
        if only_bottom_right {
            if orientation == Orientation::Horizontal {
                extent += correction;
            }
        } else if only_top_left {
            extent -= correction / 2;
        }
    } else {
        let correction = (thickness - button) / 2;
        if only_top_left {
            extent -= correction / 2;
        }
    }
    extent as f32
}

/// Rect of a +/- button. Plus sits before the track's start edge, minus
/// after its end; both are centered across the track.
pub fn button_rect(
    button: StepButton,
    orientation: Orientation,
    origin: Vec2,
    axis_length: f32,
    dimens: &PxDimens,
    container_extent: f32,
) -> Rect {
    let along0 = orientation.along(origin);
    let cross_origin = match orientation {
        Orientation::Vertical => origin.x,
        Orientation::Horizontal => origin.y,
    };
    let length = orientation.length_of(dimens.button);
    let along = match button {
        StepButton::Plus => along0 - length,
        StepButton::Minus => along0 + axis_length,
    };
    let across = cross_origin + (dimens.row_thickness - container_extent) / 2.0;
    orientation.rect(along, across, length, container_extent)
}
