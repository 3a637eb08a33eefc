use crate::api::TimetableId;
use serde::{Deserialize, Serialize};

/// Timetable information for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableInfo {
    pub timetable_id: TimetableId,
    pub timetable_name: String,
}

pub const LIST_TIMETABLES: &str = "list_timetables";
pub const POST_TIMETABLE: &str = "store_timetable";
