//! Post-service rating dialog.

use thiserror::Error;
use tracing::info;

use crate::domain::{Order, RatingValueError, StarRating};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("no order is being rated")]
    NotOpen,
    #[error("choose a rating before submitting")]
    RatingRequired,
    #[error(transparent)]
    InvalidRating(#[from] RatingValueError),
    #[error("rating is open for order {expected}, not {actual}")]
    OrderMismatch { expected: String, actual: String },
}

/// Rating dialog state: the order being rated, the stars and a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingFlow {
    order_id: Option<String>,
    stars: Option<StarRating>,
    comment: String,
}

impl RatingFlow {
    /// Starts rating `order_id` with a blank form.
    pub fn open(&mut self, order_id: impl Into<String>) {
        *self = Self {
            order_id: Some(order_id.into()),
            ..Self::default()
        };
    }

    /// Abandons the dialog, discarding its values.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// The order being rated, while the dialog is open.
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.order_id.is_some()
    }

    /// Chooses a star count.
    ///
    /// # Errors
    ///
    /// Fails unless `stars` is between one and five.
    pub fn set_stars(&mut self, stars: u8) -> Result<StarRating, RatingError> {
        let rating = StarRating::new(stars)?;
        self.stars = Some(rating);
        Ok(rating)
    }

    pub fn stars(&self) -> Option<StarRating> {
        self.stars
    }

    /// Label of the chosen rating, such as `Very Good`.
    pub fn label(&self) -> Option<&'static str> {
        self.stars.map(StarRating::label)
    }

    /// Replaces the optional comment.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn comment(&self) -> &str {
        self.comment.as_str()
    }

    /// Submit stays disabled until a star count is chosen.
    pub fn can_submit(&self) -> bool {
        self.is_open() && self.stars.is_some()
    }

    /// Applies the rating to `order` and closes the dialog.
    pub fn submit(&mut self, order: &Order) -> Result<Order, RatingError> {
        let expected = self.order_id.as_deref().ok_or(RatingError::NotOpen)?;
        if expected != order.id() {
            return Err(RatingError::OrderMismatch {
                expected: expected.to_owned(),
                actual: order.id().to_owned(),
            });
        }
        let stars = self.stars.ok_or(RatingError::RatingRequired)?;
        info!(
            order_id = %order.id(),
            stars = stars.value(),
            has_comment = !self.comment.trim().is_empty(),
            "service rating submitted"
        );
        let rated = order.with_rating(stars);
        self.close();
        Ok(rated)
    }
}
