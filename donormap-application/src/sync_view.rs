use std::sync::Arc;

use thiserror::Error;
use time::Duration;
use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};

use donormap_core::{
    gateways::{
        donors::{DonorGateway, Error as GatewayError},
        render::RenderSurface,
    },
    live::{ChannelEvent, LiveUpdateBridge},
    reconcile::FeatureReconciler,
    scheduler::{Freshness, RequestSeq, SearchJob, SearchThrottle},
    viewport::{bbox_from_extent, Extent, InvalidExtent},
};
use donormap_entities::{donor::DonorPosting, time::TimestampMs};

/// Inbound events of one map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// The map finished loading; postings in the initial viewport are due.
    InitialLoad(Extent),
    /// The user panned or zoomed.
    ViewportChanged(Extent),
    /// An external request to refresh the current viewport.
    PushNotified,
}

/// Failures surfaced to the embedding UI.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to load donors in view")]
    SearchFailed(#[source] GatewayError),
    #[error(transparent)]
    Viewport(#[from] InvalidExtent),
}

type SearchDone = (RequestSeq, donormap_core::gateways::donors::Result<Vec<DonorPosting>>);
type SearchDoneTx = mpsc::Sender<SearchDone>;

const SEARCH_BACKLOG: usize = 8;

/// Live synchronization of one map view.
///
/// Multiplexes viewport events, push-channel events, search completions,
/// and the throttle's deadline timer on a single task. Searches run on
/// spawned tasks so event intake never blocks; completions come back
/// tagged with their request sequence number and stale ones are dropped
/// instead of cancelled.
///
/// The session ends (and its throttle state with it) when the view event
/// channel closes.
pub struct ViewSync<G, S> {
    gateway: Arc<G>,
    reconciler: FeatureReconciler<S>,
    throttle: SearchThrottle,
    bridge: LiveUpdateBridge,
    errors: mpsc::Sender<SyncError>,
    epoch: TimestampMs,
    epoch_instant: Instant,
}

impl<G, S> ViewSync<G, S>
where
    G: DonorGateway + 'static,
    S: RenderSurface,
{
    pub fn new(
        gateway: Arc<G>,
        surface: S,
        cooldown: Duration,
        errors: mpsc::Sender<SyncError>,
    ) -> Self {
        Self {
            gateway,
            reconciler: FeatureReconciler::new(surface),
            throttle: SearchThrottle::new(cooldown),
            bridge: LiveUpdateBridge::new(),
            errors,
            epoch: TimestampMs::now(),
            epoch_instant: Instant::now(),
        }
    }

    pub async fn run(
        mut self,
        mut views: mpsc::Receiver<ViewEvent>,
        mut channel: mpsc::Receiver<ChannelEvent>,
    ) {
        let (done_tx, mut done_rx) = mpsc::channel(SEARCH_BACKLOG);
        let mut channel_open = true;
        loop {
            let deadline = self.throttle.next_deadline().map(|at| self.instant_at(at));
            tokio::select! {
                view_event = views.recv() => match view_event {
                    Some(event) => self.on_view_event(event, &done_tx),
                    // The view is gone; tear down.
                    None => break,
                },
                channel_event = channel.recv(), if channel_open => match channel_event {
                    Some(event) => self.on_channel_event(event, &done_tx),
                    None => {
                        // A dead transport looks like a disconnect;
                        // viewport triggers keep working.
                        self.bridge.handle(ChannelEvent::Disconnected);
                        channel_open = false;
                    }
                },
                Some((seq, result)) = done_rx.recv() => {
                    self.on_search_done(seq, result, &done_tx);
                }
                _ = async { sleep_until(deadline.unwrap()).await }, if deadline.is_some() => {
                    let job = self.throttle.poll(self.now());
                    self.spawn_search(job, &done_tx);
                }
            }
        }
    }

    fn on_view_event(&mut self, event: ViewEvent, done_tx: &SearchDoneTx) {
        let extent = match event {
            ViewEvent::InitialLoad(extent) | ViewEvent::ViewportChanged(extent) => extent,
            ViewEvent::PushNotified => self.reconciler.surface().current_extent(),
        };
        self.trigger_search(extent, done_tx);
    }

    fn on_channel_event(&mut self, event: ChannelEvent, done_tx: &SearchDoneTx) {
        if self.bridge.handle(event) {
            let extent = self.reconciler.surface().current_extent();
            self.trigger_search(extent, done_tx);
            self.bridge.acknowledge();
        }
    }

    fn trigger_search(&mut self, extent: Extent, done_tx: &SearchDoneTx) {
        let bbox = match bbox_from_extent(&extent) {
            Ok(bbox) => bbox,
            Err(err) => {
                warn!("Ignoring trigger for malformed viewport: {err}");
                self.report(SyncError::Viewport(err));
                return;
            }
        };
        let job = self.throttle.trigger(bbox, self.now());
        self.spawn_search(job, done_tx);
    }

    fn on_search_done(
        &mut self,
        seq: RequestSeq,
        result: donormap_core::gateways::donors::Result<Vec<DonorPosting>>,
        done_tx: &SearchDoneTx,
    ) {
        match (self.throttle.complete(seq), result) {
            (Freshness::Fresh, Ok(postings)) => {
                self.reconciler.apply(&postings);
            }
            (Freshness::Fresh, Err(err)) => {
                warn!("Search #{seq} failed: {err}");
                self.report(SyncError::SearchFailed(err));
            }
            (Freshness::Stale, Ok(_)) => {
                debug!("Dropping result of superseded search #{seq}");
            }
            (Freshness::Stale, Err(err)) => {
                debug!("Superseded search #{seq} failed: {err}");
            }
        }
        let job = self.throttle.poll(self.now());
        self.spawn_search(job, done_tx);
    }

    fn spawn_search(&self, job: Option<SearchJob>, done_tx: &SearchDoneTx) {
        let Some(job) = job else {
            return;
        };
        let gateway = Arc::clone(&self.gateway);
        let done_tx = done_tx.clone();
        tokio::spawn(async move {
            let result = gateway.search(&job.bbox).await;
            // The receiver only disappears when the view is torn down.
            let _ = done_tx.send((job.seq, result)).await;
        });
    }

    fn report(&self, err: SyncError) {
        if let Err(err) = self.errors.try_send(err) {
            warn!("Dropping unobserved sync error: {err}");
        }
    }

    fn now(&self) -> TimestampMs {
        let elapsed = self.epoch_instant.elapsed();
        self.epoch + Duration::milliseconds(elapsed.as_millis() as i64)
    }

    fn instant_at(&self, at: TimestampMs) -> Instant {
        let offset = at.saturating_duration_since(self.epoch);
        self.epoch_instant + std::time::Duration::from_millis(offset.whole_milliseconds() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::prelude::*;

    use donormap_entities::builders::*;

    fn extent(idx: u32) -> Extent {
        let offset = f64::from(idx);
        Extent {
            x_min: offset,
            y_min: offset,
            x_max: offset + 1.0,
            y_max: offset + 1.0,
        }
    }

    struct ViewFixture {
        gateway: Arc<MockDonorGateway>,
        surface: SharedSurface,
        views: mpsc::Sender<ViewEvent>,
        channel: mpsc::Sender<ChannelEvent>,
        errors: mpsc::Receiver<SyncError>,
    }

    impl ViewFixture {
        fn start() -> Self {
            init_logger();
            let gateway = Arc::new(MockDonorGateway::default());
            let surface = SharedSurface::new(extent(0));
            let (views_tx, views_rx) = mpsc::channel(16);
            let (channel_tx, channel_rx) = mpsc::channel(16);
            let (errors_tx, errors_rx) = mpsc::channel(16);
            let session = ViewSync::new(
                Arc::clone(&gateway),
                surface.clone(),
                Duration::milliseconds(1000),
                errors_tx,
            );
            tokio::spawn(session.run(views_rx, channel_rx));
            Self {
                gateway,
                surface,
                views: views_tx,
                channel: channel_tx,
                errors: errors_rx,
            }
        }
    }

    async fn settle() {
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
    }

    async fn pass_cooldown() {
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn initial_load_renders_markers() {
        let fixture = ViewFixture::start();
        let inside = DonorPosting::build()
            .pos(MapPoint::from_lat_lng_deg(0.5, 0.5))
            .finish();
        let outside = DonorPosting::build()
            .pos(MapPoint::from_lat_lng_deg(30.0, 30.0))
            .finish();
        fixture.gateway.add_postings(vec![inside, outside]);

        fixture
            .views
            .send(ViewEvent::InitialLoad(extent(0)))
            .await
            .unwrap();
        settle().await;

        let replaced = fixture.surface.replaced();
        assert_eq!(1, replaced.len());
        assert_eq!(1, replaced[0].len());
    }

    #[tokio::test(start_paused = true)]
    async fn viewport_burst_collapses_to_last_box() {
        let fixture = ViewFixture::start();
        fixture
            .views
            .send(ViewEvent::InitialLoad(extent(0)))
            .await
            .unwrap();
        settle().await;

        for idx in 1..=3 {
            fixture
                .views
                .send(ViewEvent::ViewportChanged(extent(idx)))
                .await
                .unwrap();
            settle().await;
        }
        pass_cooldown().await;

        let searched = fixture.gateway.searched();
        assert_eq!(2, searched.len());
        assert_eq!(bbox_from_extent(&extent(0)).unwrap(), searched[0]);
        assert_eq!(bbox_from_extent(&extent(3)).unwrap(), searched[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn push_notification_refreshes_current_viewport() {
        let fixture = ViewFixture::start();
        fixture
            .views
            .send(ViewEvent::InitialLoad(extent(0)))
            .await
            .unwrap();
        settle().await;

        fixture.surface.set_extent(extent(5));
        fixture.channel.send(ChannelEvent::Connected).await.unwrap();
        fixture
            .channel
            .send(ChannelEvent::PostingsChanged)
            .await
            .unwrap();
        pass_cooldown().await;

        let searched = fixture.gateway.searched();
        assert_eq!(2, searched.len());
        assert_eq!(bbox_from_extent(&extent(5)).unwrap(), searched[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn notifications_while_disconnected_are_ignored() {
        let fixture = ViewFixture::start();
        fixture
            .views
            .send(ViewEvent::InitialLoad(extent(0)))
            .await
            .unwrap();
        settle().await;

        // Never connected; the notification must not trigger anything.
        fixture
            .channel
            .send(ChannelEvent::PostingsChanged)
            .await
            .unwrap();
        pass_cooldown().await;

        assert_eq!(1, fixture.gateway.searched().len());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_is_never_applied() {
        let fixture = ViewFixture::start();
        let slow_posting = DonorPosting::build()
            .pos(MapPoint::from_lat_lng_deg(0.5, 0.5))
            .finish();
        let fast_posting = DonorPosting::build()
            .pos(MapPoint::from_lat_lng_deg(1.5, 1.5))
            .finish();
        // The first search outlives the cooldown window.
        fixture.gateway.script_search(
            std::time::Duration::from_millis(1500),
            Ok(vec![slow_posting]),
        );
        fixture
            .gateway
            .script_search(std::time::Duration::ZERO, Ok(vec![fast_posting.clone()]));

        fixture
            .views
            .send(ViewEvent::InitialLoad(extent(0)))
            .await
            .unwrap();
        settle().await;
        pass_cooldown().await;
        fixture
            .views
            .send(ViewEvent::ViewportChanged(extent(1)))
            .await
            .unwrap();
        // Let both responses arrive.
        tokio::time::sleep(std::time::Duration::from_millis(2000)).await;

        let replaced = fixture.surface.replaced();
        assert_eq!(1, replaced.len());
        assert_eq!(fast_posting.pos, replaced[0].features()[0].geometry);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_search_is_reported_and_not_fatal() {
        let mut fixture = ViewFixture::start();
        fixture.gateway.script_search(
            std::time::Duration::ZERO,
            Err(donormap_core::gateways::donors::Error::Rejected(
                "overloaded".into(),
            )),
        );

        fixture
            .views
            .send(ViewEvent::InitialLoad(extent(0)))
            .await
            .unwrap();
        settle().await;

        assert!(matches!(
            fixture.errors.try_recv(),
            Ok(SyncError::SearchFailed(_))
        ));
        assert!(fixture.surface.replaced().is_empty());

        // The next trigger recovers without any reset.
        pass_cooldown().await;
        fixture
            .views
            .send(ViewEvent::ViewportChanged(extent(0)))
            .await
            .unwrap();
        settle().await;
        assert_eq!(2, fixture.gateway.searched().len());
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_extent_is_surfaced() {
        let mut fixture = ViewFixture::start();
        let broken = Extent {
            x_min: f64::NAN,
            y_min: 0.0,
            x_max: 1.0,
            y_max: 1.0,
        };
        fixture
            .views
            .send(ViewEvent::InitialLoad(broken))
            .await
            .unwrap();
        settle().await;

        assert!(matches!(
            fixture.errors.try_recv(),
            Ok(SyncError::Viewport(_))
        ));
        assert!(fixture.gateway.searched().is_empty());
    }
}
