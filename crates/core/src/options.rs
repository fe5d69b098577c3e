//! Construction options for [`DragSelector`](crate::DragSelector).

use crate::candidates::Traversal;
use crate::feedback;
use crate::surface::Surface;

/// Consumer callback, invoked as `callback(surface, selected, candidates)`.
///
/// The surface is passed mutably so the callback can restyle or restructure
/// the tree. Such changes only affect later hit tests.
pub type Callback<S> =
    Box<dyn FnMut(&mut S, &[<S as Surface>::Element], &[<S as Surface>::Element])>;

/// Options supplied to `bind`. Unset fields take their defaults.
///
/// # Example
///
/// ```ignore
/// let options = Options::default()
///     .with_deep(true)
///     .with_callback(|scene: &mut Scene, selected, _all| {
///         println!("{:?}", scene.labels(selected));
///     });
/// ```
pub struct Options<S: Surface> {
    pub callback: Option<Callback<S>>,
    pub deep: Option<bool>,
}

impl<S: Surface> Default for Options<S> {
    fn default() -> Self {
        Self {
            callback: None,
            deep: None,
        }
    }
}

impl<S: Surface + 'static> Options<S> {
    pub fn with_callback(
        mut self,
        callback: impl FnMut(&mut S, &[S::Element], &[S::Element]) + 'static,
    ) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl<S: Surface> Options<S> {
    pub fn with_deep(mut self, deep: bool) -> Self {
        self.deep = Some(deep);
        self
    }

    /// Fills unset fields with the defaults: [`feedback::highlight`] and
    /// shallow traversal.
    pub(crate) fn resolve(self) -> (Callback<S>, Traversal)
    where
        S: 'static,
    {
        let callback = self
            .callback
            .unwrap_or_else(|| Box::new(feedback::highlight::<S>));
        (callback, Traversal::from(self.deep.unwrap_or(false)))
    }
}
