//! Per-session view mode and display date navigation.

use chrono::{Days, Local, Months, NaiveDate};
use std::str::FromStr;

/// Which calendar projection a session is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleView {
    /// Weekly grid of days and periods
    #[default]
    Week,
    /// 42-cell month calendar
    Month,
}

impl FromStr for ScheduleView {
    type Err = String;

    /// Parse a view mode from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("week", "month")
    ///
    /// # Returns
    /// * `Ok(ScheduleView)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(format!("Unknown schedule view: {}", s)),
        }
    }
}

impl std::fmt::Display for ScheduleView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}

/// Navigation state for one viewing session.
///
/// Holds the active view mode and the date the views are anchored on.
/// Stepping moves by one week or one calendar month depending on the mode;
/// every transition lands on a valid date, month steps clamping the
/// day-of-month when the target month is shorter.
#[derive(Debug, Clone)]
pub struct NavigationController {
    view: ScheduleView,
    display_date: NaiveDate,
}

impl NavigationController {
    pub fn new(view: ScheduleView, display_date: NaiveDate) -> Self {
        Self { view, display_date }
    }

    /// Start a session on the current local date.
    pub fn with_today(view: ScheduleView) -> Self {
        Self::new(view, Local::now().date_naive())
    }

    pub fn view(&self) -> ScheduleView {
        self.view
    }

    pub fn display_date(&self) -> NaiveDate {
        self.display_date
    }

    /// Switch the view mode. Absent or unrecognized input leaves the
    /// current mode untouched.
    pub fn set_view(&mut self, raw: Option<&str>) {
        if let Some(view) = raw.and_then(|s| s.parse().ok()) {
            self.view = view;
        }
    }

    /// Jump to an arbitrary date.
    pub fn navigate(&mut self, date: NaiveDate) {
        self.display_date = date;
    }

    /// Step backwards by one week or one month, per the active view.
    pub fn prev(&mut self) {
        self.display_date = match self.view {
            ScheduleView::Week => self.display_date.checked_sub_days(Days::new(7)),
            ScheduleView::Month => self.display_date.checked_sub_months(Months::new(1)),
        }
        .unwrap_or(self.display_date);
    }

    /// Step forwards by one week or one month, per the active view.
    pub fn next(&mut self) {
        self.display_date = match self.view {
            ScheduleView::Week => self.display_date.checked_add_days(Days::new(7)),
            ScheduleView::Month => self.display_date.checked_add_months(Months::new(1)),
        }
        .unwrap_or(self.display_date);
    }

    /// Snap back to the current local date.
    pub fn today(&mut self) {
        self.display_date = Local::now().date_naive();
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::with_today(ScheduleView::default())
    }
}
