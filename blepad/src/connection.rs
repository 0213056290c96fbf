/// Transition of the transport's connection state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionChange {
    Connected,
    Disconnected,
}

/// Remembers the previous connection sample to detect edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectionTracker {
    was_connected: bool,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.was_connected
    }

    /// Feed the current connection state, returns the edge if the state changed.
    pub fn observe(&mut self, connected: bool) -> Option<ConnectionChange> {
        let change = match (self.was_connected, connected) {
            (false, true) => Some(ConnectionChange::Connected),
            (true, false) => Some(ConnectionChange::Disconnected),
            _ => None,
        };
        self.was_connected = connected;
        change
    }
}
