use crate::state::Shared;

/// Flips the stop latch on every qualifying button edge.
///
/// Edges are not debounced: a bouncing contact toggles the latch more than
/// once.
pub struct StopToggle {
    edges: u32,
}

impl StopToggle {
    pub fn new() -> Self {
        StopToggle { edges: 0 }
    }

    pub fn on_edge(&mut self, shared: &Shared) {
        self.edges = self.edges.wrapping_add(1);
        let _stopped = shared.stop.toggle();
        #[cfg(feature = "defmt")]
        defmt::debug!("stop edge #{=u32}, stopped = {=bool}", self.edges, _stopped);
    }

    pub fn edges(&self) -> u32 {
        self.edges
    }
}

impl Default for StopToggle {
    fn default() -> Self {
        StopToggle::new()
    }
}
