use egui::Color32;

/// Severity of the footer message; drives the badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
}

impl StatusTone {
    /// Badge text and color for this tone.
    pub fn badge(self) -> (&'static str, Color32) {
        match self {
            StatusTone::Idle => ("Idle", Color32::from_rgb(42, 42, 42)),
            StatusTone::Info => ("Info", Color32::from_rgb(64, 140, 112)),
            StatusTone::Warning => ("Warning", Color32::from_rgb(192, 138, 43)),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Current tone.
    pub tone: StatusTone,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Status shown before anything has happened.
    pub fn idle() -> Self {
        let mut status = Self {
            text: String::new(),
            tone: StatusTone::Idle,
            badge_label: String::new(),
            badge_color: Color32::TRANSPARENT,
        };
        status.set("Click the canvas to place a query point", StatusTone::Idle);
        status
    }

    /// Replace the message and badge.
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = tone.badge();
        self.text = text.into();
        self.tone = tone;
        self.badge_label = label.to_string();
        self.badge_color = color;
    }
}
