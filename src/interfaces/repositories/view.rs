use std::sync::Arc;

use crate::errors::AppError;

/// Tells the presentation side that a cached view is stale.
pub trait ViewInvalidator: Send + Sync {
    /// Marks `view` for re-fetch before its next render.
    fn invalidate(&self, view: &str) -> Result<(), AppError>;
}

impl<T: ViewInvalidator + ?Sized> ViewInvalidator for Arc<T> {
    fn invalidate(&self, view: &str) -> Result<(), AppError> {
        (**self).invalidate(view)
    }
}
