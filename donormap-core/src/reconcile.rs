use donormap_entities::{donor::DonorPosting, geo::MapPoint};

use crate::gateways::render::RenderSurface;

/// A single renderable point marker.
///
/// `object_id` is the posting's position within the current batch. It is
/// local to the render surface and never stable across batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointFeature {
    pub object_id: usize,
    pub geometry: MapPoint,
}

/// The complete set of markers currently handed to the render surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFeatureSet {
    features: Vec<PointFeature>,
}

impl RenderedFeatureSet {
    pub fn features(&self) -> &[PointFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Projects a batch of postings into point features, one per posting, in
/// input order. An empty batch yields an empty set.
pub fn project_features(postings: &[DonorPosting]) -> RenderedFeatureSet {
    let features = postings
        .iter()
        .enumerate()
        .map(|(object_id, posting)| PointFeature {
            object_id,
            geometry: posting.pos,
        })
        .collect();
    RenderedFeatureSet { features }
}

/// Swaps fresh query results into the render surface.
///
/// Every apply supersedes the previous marker set wholesale through a
/// single `replace_features` call. Re-applying an identical batch leaves
/// the surface untouched, so repeated applications of the same result are
/// observably idempotent.
#[derive(Debug)]
pub struct FeatureReconciler<S> {
    surface: S,
    rendered: RenderedFeatureSet,
}

impl<S: RenderSurface> FeatureReconciler<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            rendered: RenderedFeatureSet::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn rendered(&self) -> &RenderedFeatureSet {
        &self.rendered
    }

    pub fn apply(&mut self, postings: &[DonorPosting]) -> &RenderedFeatureSet {
        let next = project_features(postings);
        if next == self.rendered {
            log::debug!("Feature set of {} markers is unchanged", next.len());
        } else {
            self.surface.replace_features(next.clone());
            self.rendered = next;
        }
        &self.rendered
    }
}
