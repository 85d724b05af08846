use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("slider needs at least one value")]
    EmptyValues,
    #[error("slider needs at least one color")]
    EmptyColors,
    #[error("none of the {0} values is selectable")]
    NoSelectableItem(usize),
    #[error("current item is not one of the slider values")]
    CurrentItemNotFound,
    #[error("item is not one of the slider values")]
    UnknownItem,
    #[error("index {index} out of range for {len} values")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("corner radius must be finite and non-negative, got {0}")]
    InvalidCornerRadius(f32),
}

pub type Result<T, E = SliderError> = std::result::Result<T, E>;
