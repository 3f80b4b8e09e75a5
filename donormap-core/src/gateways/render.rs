use crate::{reconcile::RenderedFeatureSet, viewport::Extent};

/// Outbound interface to the map rendering runtime.
///
/// Extent changes and map clicks flow back into the application as an
/// inbound event stream owned by the embedding; the engine itself only
/// ever reads the current viewport and swaps the rendered marker set.
pub trait RenderSurface {
    /// Atomically replaces the whole rendered feature set. Consumers never
    /// observe a partially applied set.
    fn replace_features(&mut self, features: RenderedFeatureSet);

    /// The rectangular area currently visible, in projected degrees.
    fn current_extent(&self) -> Extent;
}
