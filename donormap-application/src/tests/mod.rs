pub mod prelude {
    pub use std::sync::Arc;

    pub use donormap_core::{
        entities::{
            BloodGroup, DonorPosting, DonorPostingUpdate, Id, MapBbox, MapPoint, NewDonorPosting,
            PostingDraft,
        },
        gateways::{
            donors::{self, DonorGateway},
            render::RenderSurface,
        },
        reconcile::RenderedFeatureSet,
        viewport::Extent,
        workflow::{DraftState, PostingDraftWorkflow},
    };

    pub use super::{init_logger, valid_draft, MockDonorGateway, SharedSurface};
}

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use self::prelude::*;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn valid_draft() -> PostingDraft {
    PostingDraft {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: "jane.doe@example.org".into(),
        contact_number: "+12024044567".into(),
        blood_group: "O-".into(),
        address: "1 Example Street".into(),
    }
}

type ScriptedSearch = (std::time::Duration, donors::Result<Vec<DonorPosting>>);

/// In-memory stand-in for the donor service.
///
/// Unscripted searches filter the stored postings by bounding box, the way
/// the real service does; scripted ones override delay and result of the
/// next search call.
#[derive(Default)]
pub struct MockDonorGateway {
    postings: Mutex<Vec<DonorPosting>>,
    script: Mutex<VecDeque<ScriptedSearch>>,
    searched: Mutex<Vec<MapBbox>>,
    reject_create: Mutex<Option<String>>,
}

impl MockDonorGateway {
    pub fn add_postings(&self, mut postings: Vec<DonorPosting>) {
        self.postings.lock().unwrap().append(&mut postings);
    }

    pub fn script_search(
        &self,
        delay: std::time::Duration,
        result: donors::Result<Vec<DonorPosting>>,
    ) {
        self.script.lock().unwrap().push_back((delay, result));
    }

    pub fn reject_next_create(&self, message: &str) {
        *self.reject_create.lock().unwrap() = Some(message.into());
    }

    pub fn searched(&self) -> Vec<MapBbox> {
        self.searched.lock().unwrap().clone()
    }

    pub fn posting_count(&self) -> usize {
        self.postings.lock().unwrap().len()
    }
}

#[async_trait]
impl DonorGateway for MockDonorGateway {
    async fn search(&self, bbox: &MapBbox) -> donors::Result<Vec<DonorPosting>> {
        self.searched.lock().unwrap().push(*bbox);
        let scripted = self.script.lock().unwrap().pop_front();
        if let Some((delay, result)) = scripted {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            return result;
        }
        let postings = self.postings.lock().unwrap();
        Ok(postings
            .iter()
            .filter(|posting| bbox.contains_point(posting.pos))
            .cloned()
            .collect())
    }

    async fn create(&self, posting: &NewDonorPosting) -> donors::Result<DonorPosting> {
        if let Some(message) = self.reject_create.lock().unwrap().take() {
            return Err(donors::Error::Rejected(message));
        }
        let created = DonorPosting {
            id: Id::new(),
            pos: posting.pos,
            first_name: posting.first_name.clone(),
            last_name: posting.last_name.clone(),
            email: posting.email.clone(),
            contact_number: posting.contact_number.clone(),
            blood_group: posting.blood_group,
            address: posting.address.clone(),
            ip: "203.0.113.7".into(),
        };
        self.postings.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &Id, update: &DonorPostingUpdate) -> donors::Result<DonorPosting> {
        let mut postings = self.postings.lock().unwrap();
        let posting = postings
            .iter_mut()
            .find(|posting| &posting.id == id)
            .ok_or(donors::Error::NotFound)?;
        // id, ip, and position stay untouched, like the real service.
        posting.first_name = update.first_name.clone();
        posting.last_name = update.last_name.clone();
        posting.email = update.email.clone();
        posting.contact_number = update.contact_number.clone();
        posting.blood_group = update.blood_group;
        posting.address = update.address.clone();
        Ok(posting.clone())
    }

    async fn get(&self, id: &Id) -> donors::Result<DonorPosting> {
        let postings = self.postings.lock().unwrap();
        postings
            .iter()
            .find(|posting| &posting.id == id)
            .cloned()
            .ok_or(donors::Error::NotFound)
    }

    async fn delete(&self, id: &Id) -> donors::Result<()> {
        let mut postings = self.postings.lock().unwrap();
        let count = postings.len();
        postings.retain(|posting| &posting.id != id);
        if postings.len() == count {
            return Err(donors::Error::NotFound);
        }
        Ok(())
    }
}

/// Render surface whose state stays observable after the session takes
/// ownership of its handle.
#[derive(Debug, Clone)]
pub struct SharedSurface(Arc<Mutex<SurfaceState>>);

#[derive(Debug)]
struct SurfaceState {
    extent: Extent,
    replaced: Vec<RenderedFeatureSet>,
}

impl SharedSurface {
    pub fn new(extent: Extent) -> Self {
        Self(Arc::new(Mutex::new(SurfaceState {
            extent,
            replaced: Vec::new(),
        })))
    }

    pub fn set_extent(&self, extent: Extent) {
        self.0.lock().unwrap().extent = extent;
    }

    pub fn replaced(&self) -> Vec<RenderedFeatureSet> {
        self.0.lock().unwrap().replaced.clone()
    }
}

impl RenderSurface for SharedSurface {
    fn replace_features(&mut self, features: RenderedFeatureSet) {
        self.0.lock().unwrap().replaced.push(features);
    }

    fn current_extent(&self) -> Extent {
        self.0.lock().unwrap().extent
    }
}
