//! Named layout states and the rules for picking one.

/// Window posture, the desktop analogue of a tablet's view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    FullScreenLandscape,
    Filled,
    FullScreenPortrait,
    Snapped,
}

/// Windows narrower than this are treated as snapped.
pub const SNAPPED_MAX_WIDTH: i32 = 500;

/// Default width at which the filled/landscape layout becomes "wide".
pub const WIDE_LAYOUT_THRESHOLD: i32 = 1366;

impl ViewState {
    pub fn from_window(width: i32, height: i32, fullscreen: bool) -> Self {
        if width < SNAPPED_MAX_WIDTH {
            ViewState::Snapped
        } else if height > width {
            ViewState::FullScreenPortrait
        } else if fullscreen {
            ViewState::FullScreenLandscape
        } else {
            ViewState::Filled
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    FullScreenLandscapeOrWide,
    FilledOrNarrow,
    FullScreenPortrait,
    Snapped,
    SnappedPreview,
    DistractionFree,
}

impl VisualState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullScreenLandscapeOrWide => "FullScreenLandscapeOrWide",
            Self::FilledOrNarrow => "FilledOrNarrow",
            Self::FullScreenPortrait => "FullScreenPortrait",
            Self::Snapped => "Snapped",
            Self::SnappedPreview => "Snapped_Preview",
            Self::DistractionFree => "DistractionFree",
        }
    }

    /// Whether the editor pane is visible in this state.
    pub fn shows_editor(&self) -> bool {
        !matches!(self, Self::SnappedPreview)
    }

    /// Whether the preview pane is visible in this state.
    pub fn shows_preview(&self) -> bool {
        !matches!(self, Self::Snapped | Self::DistractionFree)
    }
}

/// Pick the visual state for a view state and current window width.
pub fn determine_visual_state(view_state: ViewState, window_width: i32, wide_threshold: i32) -> VisualState {
    match view_state {
        ViewState::Filled | ViewState::FullScreenLandscape => {
            if window_width >= wide_threshold {
                VisualState::FullScreenLandscapeOrWide
            } else {
                VisualState::FilledOrNarrow
            }
        }
        ViewState::FullScreenPortrait => VisualState::FullScreenPortrait,
        ViewState::Snapped => VisualState::Snapped,
    }
}

/// State shown for a given distraction-free flag.
pub fn distraction_state(distraction_free: bool) -> VisualState {
    if distraction_free {
        VisualState::DistractionFree
    } else {
        VisualState::FullScreenLandscapeOrWide
    }
}
