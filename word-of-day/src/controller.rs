use chrono::NaiveDate;

use crate::resolver::{Resolution, WordOrigin, WordResolver, WordSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Normal,
    Flashcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Fetching,
    Ready(WordOrigin),
}

/// Handed out by `begin_request`; completions carrying anything but the
/// latest token are stale and get discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Owns the single current-word cell the renderer reads. One writer (the
/// completion path), one reader (the render path), no ambient globals.
pub struct DailyWordController<S> {
    resolver: WordResolver<S>,
    current: Option<Resolution>,
    view_mode: ViewMode,
    phase: FetchPhase,
    latest_token: u64,
}

impl<S: WordSource> DailyWordController<S> {
    pub fn new(resolver: WordResolver<S>) -> Self {
        Self {
            resolver,
            current: None,
            view_mode: ViewMode::Normal,
            phase: FetchPhase::Idle,
            latest_token: 0,
        }
    }

    pub fn begin_request(&mut self) -> RequestToken {
        self.latest_token += 1;
        self.phase = FetchPhase::Fetching;
        RequestToken(self.latest_token)
    }

    /// Applies a resolution completion. Returns whether it was applied;
    /// a completion whose token is no longer the latest one is dropped so
    /// an overlapping older request can never overwrite a newer word.
    pub fn apply(&mut self, token: RequestToken, resolution: Resolution) -> bool {
        if token.0 != self.latest_token {
            return false;
        }
        self.phase = FetchPhase::Ready(resolution.origin);
        self.current = Some(resolution);
        true
    }

    pub async fn show_daily(&mut self, today: NaiveDate) {
        let token = self.begin_request();
        let resolution = self.resolver.resolve_daily(today).await;
        self.apply(token, resolution);
    }

    pub async fn show_random(&mut self, today: NaiveDate) {
        let token = self.begin_request();
        let resolution = self.resolver.resolve_random(today).await;
        self.apply(token, resolution);
    }

    /// Switches between the normal and flashcard presentation of the word
    /// already held; no fetch is involved.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.view_mode = match self.view_mode {
            ViewMode::Normal => ViewMode::Flashcard,
            ViewMode::Flashcard => ViewMode::Normal,
        };
        self.view_mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn current(&self) -> Option<&Resolution> {
        self.current.as_ref()
    }
}
