//! The selection engine
//!
//! Owns the playlist and the spin state machine:
//!
//! ```text
//! Idle --spin()--> Spinning --spin_duration--> Revealing --reveal_delay--> Settled
//!                     ^                                                      |
//!                     +----------------------- spin() ----------------------+
//! ```
//!
//! Timers go through a [`Scheduler`] and the pick goes through a
//! [`RandomSource`], so a test can run a full spin with a simulated clock
//! and a known outcome.

use super::config::EngineConfig;
use super::error::EngineError;
use super::notice::LoadOutcome;
use crate::model::{Playlist, SpinState};
use crate::random::RandomSource;
use crate::resolver::{extract_video_id, is_valid_youtube_url, VideoId};
use crate::scheduler::{Scheduler, TimerEvent};
use crate::view::{playlist_rows, CylinderView, PlayerView, PlaylistRow, SessionSnapshot};
use std::time::Duration;

/// Playlist owner and spin sequencer
pub struct SelectionEngine<S: Scheduler, R: RandomSource> {
    config: EngineConfig,
    playlist: Playlist,
    state: SpinState,
    scheduler: S,
    random: R,
    /// Number of spins started, used to tag timer events
    spins: u64,
}

impl<S: Scheduler, R: RandomSource> SelectionEngine<S, R> {
    /// Create an engine with an empty playlist
    pub fn new(config: EngineConfig, scheduler: S, random: R) -> Self {
        Self {
            config,
            playlist: Playlist::new(),
            state: SpinState::Idle,
            scheduler,
            random,
            spins: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Whether the spin animation is running
    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Index picked by the current spin, once picked
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    /// Revealed video of the last settled spin
    pub fn selected_video_id(&self) -> Option<&VideoId> {
        self.state.video_id()
    }

    /// Replace the whole playlist
    ///
    /// Never rejects. A playlist smaller than the configured minimum is kept
    /// and reported as [`LoadOutcome::TooFew`].
    pub fn load_playlist(&mut self, urls: Vec<String>) -> LoadOutcome {
        self.playlist = Playlist::from_entries(urls);
        let count = self.playlist.len();

        if count < self.config.min_entries {
            log::warn!(
                "Loaded {} videos, at least {} are needed to spin",
                count,
                self.config.min_entries
            );
            LoadOutcome::TooFew {
                count,
                minimum: self.config.min_entries,
            }
        } else {
            log::info!("Playlist loaded with {} videos", count);
            LoadOutcome::Loaded { count }
        }
    }

    /// Append a single URL
    ///
    /// URLs holding control characters are rejected even when they resolve,
    /// since a line break would split them apart on export.
    pub fn add_url(&mut self, url: &str) -> Result<(), EngineError> {
        if url.chars().any(char::is_control) || !is_valid_youtube_url(url) {
            return Err(EngineError::InvalidUrl(url.to_string()));
        }
        if self.playlist.contains(url) {
            return Err(EngineError::DuplicateUrl(url.to_string()));
        }

        self.playlist.push(url.to_string());
        log::debug!("Added {} ({} entries)", url, self.playlist.len());
        Ok(())
    }

    /// Remove the entry at `index` and return it
    pub fn remove_url(&mut self, index: usize) -> Result<String, EngineError> {
        let len = self.playlist.len();
        let removed = self
            .playlist
            .remove(index)
            .ok_or(EngineError::IndexOutOfRange { index, len })?;

        log::debug!("Removed {} ({} entries left)", removed, self.playlist.len());
        Ok(removed)
    }

    /// Start a spin
    ///
    /// Accepted only from `Idle` or `Settled` with at least `min_entries`
    /// entries; anything else is `InsufficientEntries`, including a spin that
    /// has not settled yet. The previous selection is cleared immediately; the
    /// pick happens when the spin timer fires.
    pub fn spin(&mut self) -> Result<(), EngineError> {
        let available = self.playlist.len();
        let required = self.config.min_entries;
        if available < required {
            return Err(EngineError::InsufficientEntries { available, required });
        }
        if self.state.is_in_progress() {
            log::debug!("Spin #{} still running, rejecting spin()", self.spins);
            return Err(EngineError::InsufficientEntries { available, required });
        }

        self.spins += 1;
        self.state = SpinState::Spinning;
        self.scheduler.schedule(
            self.config.spin_duration,
            TimerEvent::SpinElapsed { spin: self.spins },
        );

        log::info!("Spin #{} started over {} videos", self.spins, available);
        Ok(())
    }

    /// Apply every timer event that is due
    ///
    /// Returns the states entered, in order.
    pub fn poll(&mut self) -> Vec<SpinState> {
        let mut entered = Vec::new();

        while let Some(event) = self.scheduler.pop_due() {
            if let Some(state) = self.handle(event) {
                entered.push(state);
            }
        }

        entered
    }

    /// Let `duration` pass on the scheduler, then poll
    pub fn wait(&mut self, duration: Duration) -> Vec<SpinState> {
        self.scheduler.sleep(duration);
        self.poll()
    }

    /// Wait out the pending timers until the current spin settles
    ///
    /// Returns every state entered on the way, in order.
    pub fn run_until_settled(&mut self) -> Vec<SpinState> {
        let mut entered = Vec::new();

        while self.state.is_in_progress() {
            let Some(delay) = self.scheduler.next_due_in() else {
                log::warn!("Spin in progress with no pending timer, giving up");
                break;
            };
            entered.extend(self.wait(delay));
        }

        entered
    }

    fn handle(&mut self, event: TimerEvent) -> Option<SpinState> {
        let next = match event {
            TimerEvent::SpinElapsed { spin } if spin == self.spins && self.state.is_spinning() => {
                self.pick()
            }
            TimerEvent::RevealElapsed { spin, index }
                if spin == self.spins && self.state == (SpinState::Revealing { index }) =>
            {
                self.reveal(index)
            }
            _ => {
                log::debug!("Ignoring {:?} in state {:?}", event, self.state);
                return None;
            }
        };

        self.state = next.clone();
        Some(next)
    }

    /// Spin timer fired: choose against the playlist as it is now
    fn pick(&mut self) -> SpinState {
        let len = self.playlist.len();
        if len == 0 {
            log::warn!("Playlist emptied during spin #{}, nothing to pick", self.spins);
            return SpinState::Idle;
        }

        let index = self.random.pick_index(len);
        debug_assert!(index < len);
        log::debug!("Spin #{} picked entry {} of {}", self.spins, index + 1, len);

        self.scheduler.schedule(
            self.config.reveal_delay,
            TimerEvent::RevealElapsed {
                spin: self.spins,
                index,
            },
        );
        SpinState::Revealing { index }
    }

    /// Reveal timer fired: resolve the chosen entry again
    fn reveal(&mut self, index: usize) -> SpinState {
        let video_id = match self.playlist.get(index) {
            Some(url) => {
                let id = extract_video_id(url);
                if id.is_none() {
                    log::warn!("Chosen entry {} does not resolve to a video: {}", index + 1, url);
                }
                id
            }
            None => {
                log::warn!(
                    "Chosen entry {} no longer exists ({} entries)",
                    index + 1,
                    self.playlist.len()
                );
                None
            }
        };

        match &video_id {
            Some(id) => log::info!("Spin #{} settled on entry {}: {}", self.spins, index + 1, id),
            None => log::info!("Spin #{} settled on entry {} with no video", self.spins, index + 1),
        }

        SpinState::Settled { index, video_id }
    }

    /// Data for the spinning cylinder
    ///
    /// An empty playlist still shows `min_entries` slots.
    pub fn cylinder_view(&self) -> CylinderView {
        let song_count = if self.playlist.is_empty() {
            self.config.min_entries
        } else {
            self.playlist.len()
        };
        CylinderView::new(self.is_spinning(), self.selected_index(), song_count)
    }

    /// Data for the player
    pub fn player_view(&self) -> PlayerView {
        PlayerView::new(self.selected_video_id())
    }

    /// Data for the playlist listing
    pub fn playlist_rows(&self) -> Vec<PlaylistRow> {
        playlist_rows(&self.playlist)
    }

    /// All of the above plus the raw state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            playlist: self.playlist_rows(),
            state: self.state.clone(),
            cylinder: self.cylinder_view(),
            player: self.player_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::scheduler::ManualScheduler;

    const A: &str = "https://youtu.be/aaaaaaaaaaa";
    const B: &str = "https://www.youtube.com/watch?v=bbbbbbbbbbb";
    const C: &str = "https://www.youtube.com/embed/ccccccccccc";

    fn engine(picks: &[usize]) -> SelectionEngine<ManualScheduler, ScriptedRandom> {
        SelectionEngine::new(
            EngineConfig::default(),
            ManualScheduler::new(),
            ScriptedRandom::new(picks.iter().copied()),
        )
    }

    fn loaded(picks: &[usize]) -> SelectionEngine<ManualScheduler, ScriptedRandom> {
        let mut engine = engine(picks);
        engine.load_playlist(vec![A.to_string(), B.to_string(), C.to_string()]);
        engine
    }

    #[test]
    fn test_load_reports_too_few() {
        let mut engine = engine(&[]);

        let outcome = engine.load_playlist(vec!["url1".to_string()]);
        assert_eq!(outcome, LoadOutcome::TooFew { count: 1, minimum: 2 });
        assert_eq!(engine.playlist().len(), 1);

        assert_eq!(
            engine.spin(),
            Err(EngineError::InsufficientEntries {
                available: 1,
                required: 2
            })
        );
        assert_eq!(engine.state(), &SpinState::Idle);
    }

    #[test]
    fn test_load_replaces_playlist() {
        let mut engine = loaded(&[]);
        let outcome = engine.load_playlist(vec![A.to_string(), B.to_string()]);

        assert_eq!(outcome, LoadOutcome::Loaded { count: 2 });
        assert_eq!(engine.playlist().entries(), &[A.to_string(), B.to_string()]);
    }

    #[test]
    fn test_add_url_rules() {
        let mut engine = engine(&[]);

        assert_eq!(engine.add_url(A), Ok(()));
        assert_eq!(engine.add_url(A), Err(EngineError::DuplicateUrl(A.to_string())));
        assert_eq!(
            engine.add_url("not a url"),
            Err(EngineError::InvalidUrl("not a url".to_string()))
        );
        assert_eq!(engine.playlist().len(), 1);

        // Same video, different string: not a duplicate
        assert_eq!(engine.add_url("https://www.youtube.com/watch?v=aaaaaaaaaaa"), Ok(()));
        assert_eq!(engine.playlist().len(), 2);
    }

    #[test]
    fn test_add_url_rejects_line_breaks() {
        let mut engine = engine(&[]);
        let split = "https://youtu.be/bbbbb\ncccc1";

        // Resolves as a whole, but would not survive one-URL-per-line export
        assert!(is_valid_youtube_url(split));
        assert_eq!(engine.add_url(split), Err(EngineError::InvalidUrl(split.to_string())));
        assert_eq!(
            engine.add_url("https://youtu.be/aaaaaaaaaaa#\t"),
            Err(EngineError::InvalidUrl("https://youtu.be/aaaaaaaaaaa#\t".to_string()))
        );
        assert!(engine.playlist().is_empty());
    }

    #[test]
    fn test_remove_url() {
        let mut engine = loaded(&[]);

        assert_eq!(engine.remove_url(0), Ok(A.to_string()));
        assert_eq!(engine.remove_url(5), Err(EngineError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(engine.playlist().entries(), &[B.to_string(), C.to_string()]);
    }

    #[test]
    fn test_full_spin_cycle() {
        let mut engine = loaded(&[1]);

        engine.spin().unwrap();
        assert_eq!(engine.state(), &SpinState::Spinning);
        assert!(engine.is_spinning());
        assert_eq!(engine.selected_index(), None);

        assert!(engine.wait(Duration::from_millis(4999)).is_empty());
        assert_eq!(engine.wait(Duration::from_millis(1)), vec![SpinState::Revealing { index: 1 }]);
        assert!(!engine.is_spinning());
        assert_eq!(engine.selected_index(), Some(1));
        assert!(engine.selected_video_id().is_none());

        assert!(engine.wait(Duration::from_millis(999)).is_empty());
        let entered = engine.wait(Duration::from_millis(1));
        assert_eq!(entered.len(), 1);
        assert!(matches!(entered[0], SpinState::Settled { index: 1, .. }));
        assert_eq!(engine.selected_index(), Some(1));
        assert_eq!(engine.selected_video_id().map(VideoId::as_str), Some("bbbbbbbbbbb"));
    }

    #[test]
    fn test_spin_rejected_while_in_progress() {
        let mut engine = loaded(&[0, 2]);

        let busy = EngineError::InsufficientEntries {
            available: 3,
            required: 2,
        };

        engine.spin().unwrap();
        assert_eq!(engine.spin(), Err(busy.clone()));

        engine.wait(Duration::from_secs(5));
        assert!(matches!(engine.state(), SpinState::Revealing { .. }));
        assert_eq!(engine.spin(), Err(busy));

        engine.wait(Duration::from_secs(1));
        assert!(matches!(engine.state(), SpinState::Settled { index: 0, .. }));

        // Settled accepts a new spin and clears the selection
        engine.spin().unwrap();
        assert_eq!(engine.selected_index(), None);
        assert!(engine.selected_video_id().is_none());
        engine.run_until_settled();
        assert_eq!(engine.selected_index(), Some(2));
    }

    #[test]
    fn test_pick_uses_playlist_at_fire_time() {
        let mut engine = loaded(&[3]);

        engine.spin().unwrap();
        engine.add_url("https://youtu.be/ddddddddddd").unwrap();
        engine.run_until_settled();

        assert_eq!(engine.selected_index(), Some(3));
        assert_eq!(engine.selected_video_id().map(VideoId::as_str), Some("ddddddddddd"));
    }

    #[test]
    fn test_settles_with_none_when_entry_removed() {
        let mut engine = loaded(&[2]);

        engine.spin().unwrap();
        engine.wait(Duration::from_secs(5));
        assert_eq!(engine.selected_index(), Some(2));

        engine.remove_url(2).unwrap();
        engine.wait(Duration::from_secs(1));

        assert_eq!(engine.state(), &SpinState::Settled { index: 2, video_id: None });
        assert_eq!(engine.player_view(), PlayerView::Empty);
    }

    #[test]
    fn test_settles_with_none_for_unresolvable_entry() {
        let mut engine = engine(&[1]);
        engine.load_playlist(vec![A.to_string(), "not a video".to_string()]);

        engine.spin().unwrap();
        engine.run_until_settled();
        assert_eq!(engine.state(), &SpinState::Settled { index: 1, video_id: None });
    }

    #[test]
    fn test_run_until_settled_reports_each_state() {
        let mut engine = loaded(&[2]);

        engine.spin().unwrap();
        let entered = engine.run_until_settled();

        assert_eq!(entered.len(), 2);
        assert_eq!(entered[0], SpinState::Revealing { index: 2 });
        assert_eq!(entered[1], *engine.state());
        assert!(engine.run_until_settled().is_empty());
    }

    #[test]
    fn test_emptied_playlist_returns_to_idle() {
        let mut engine = loaded(&[]);

        engine.spin().unwrap();
        engine.load_playlist(Vec::new());
        assert_eq!(engine.run_until_settled(), vec![SpinState::Idle]);
        assert_eq!(engine.scheduler().pending(), 0);
    }

    #[test]
    fn test_zero_delays_settle_in_one_poll() {
        let config = EngineConfig::new()
            .with_spin_duration(Duration::ZERO)
            .with_reveal_delay(Duration::ZERO);
        let mut engine = SelectionEngine::new(config, ManualScheduler::new(), ScriptedRandom::new([0]));
        engine.load_playlist(vec![A.to_string(), B.to_string()]);

        engine.spin().unwrap();
        let entered = engine.poll();
        assert_eq!(engine.scheduler().pending(), 0);
        assert_eq!(entered.len(), 2);
        assert!(matches!(entered[1], SpinState::Settled { index: 0, .. }));
    }

    #[test]
    fn test_views_follow_state() {
        let mut engine = loaded(&[0]);

        engine.spin().unwrap();
        let view = engine.cylinder_view();
        assert!(view.is_spinning);
        assert!(view.slots.iter().all(|slot| !slot.highlighted));

        engine.wait(Duration::from_secs(5));
        let view = engine.cylinder_view();
        assert_eq!(view.selected_index, Some(0));
        assert!(view.slots[0].highlighted);
        assert_eq!(engine.player_view(), PlayerView::Empty);

        engine.wait(Duration::from_secs(1));
        assert_eq!(
            engine.player_view().src(),
            Some("https://www.youtube.com/embed/aaaaaaaaaaa?autoplay=1")
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = loaded(&[2]);
        engine.spin().unwrap();
        engine.run_until_settled();

        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["state"]["state"], "settled");
        assert_eq!(json["state"]["index"], 2);
        assert_eq!(json["state"]["video_id"], "ccccccccccc");
        assert_eq!(json["player"]["kind"], "embed");
        assert_eq!(json["playlist"][2]["number"], 3);
        assert_eq!(json["cylinder"]["slots"][2]["highlighted"], true);
    }

    #[test]
    fn test_empty_playlist_cylinder_uses_minimum() {
        let engine = engine(&[]);
        assert_eq!(engine.cylinder_view().song_count, 2);
        assert_eq!(engine.cylinder_view().slots.len(), 2);
    }
}
