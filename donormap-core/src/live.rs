/// Connection lifecycle and notifications of the external push channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
    Connected,
    Disconnected,
    /// Some posting inside a server-chosen region changed. Deliberately
    /// unparameterized; the current viewport is simply re-queried.
    PostingsChanged,
}

/// Forwards push-channel notifications into the search scheduler.
///
/// The bridge does no geospatial work. It suppresses notifications while
/// the channel is down and coalesces notifications that have been emitted
/// but not yet consumed, so a chatty channel cannot flood the scheduler
/// with duplicate refresh requests.
#[derive(Debug, Default)]
pub struct LiveUpdateBridge {
    connected: bool,
    pending: bool,
}

impl LiveUpdateBridge {
    /// Starts disconnected; the transport reports `Connected` once the
    /// channel is up.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Returns `true` when the event warrants a refresh of the current
    /// viewport.
    pub fn handle(&mut self, event: ChannelEvent) -> bool {
        match event {
            ChannelEvent::Connected => {
                self.connected = true;
                false
            }
            ChannelEvent::Disconnected => {
                self.connected = false;
                false
            }
            ChannelEvent::PostingsChanged => {
                if self.connected && !self.pending {
                    self.pending = true;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Call once the emitted notification has been fed to the scheduler;
    /// subsequent notifications may then be emitted again.
    pub fn acknowledge(&mut self) {
        self.pending = false;
    }
}
