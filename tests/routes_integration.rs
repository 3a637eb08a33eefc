use timetable_rust::api::{TimetableId, TimetableStructure};
use timetable_rust::models::SequenceCache;
use timetable_rust::routes;
use timetable_rust::store::{services, LocalRepository};

fn create_minimal_structure(id: i64, name: &str) -> TimetableStructure {
    TimetableStructure::new(TimetableId::new(id), name.to_string(), vec![], vec![])
}

#[tokio::test]
async fn test_landing_list_timetables() {
    let repo = LocalRepository::new();
    let sequences = SequenceCache::new();
    services::store_structure(&repo, &sequences, create_minimal_structure(1, "test1"))
        .await
        .unwrap();

    let timetables = services::list_timetables(&repo).await.unwrap();
    assert!(!timetables.is_empty());
}

#[test]
fn test_routes_module_exists() {
    // Ensure routes module compiles and exports expected constants
    assert_eq!(routes::grid::GET_WEEK_GRID, "get_week_grid");
    assert_eq!(routes::month::GET_MONTH_VIEW, "get_month_view");
    assert_eq!(routes::validation::VALIDATE_CLASS_FORM, "validate_class_form");
    assert_eq!(routes::landing::LIST_TIMETABLES, "list_timetables");
    assert_eq!(routes::landing::POST_TIMETABLE, "store_timetable");
}

#[test]
fn test_timetable_info_creation() {
    let info = routes::landing::TimetableInfo {
        timetable_id: TimetableId::new(1),
        timetable_name: "test".to_string(),
    };
    assert_eq!(info.timetable_id.value(), 1);
    assert_eq!(info.timetable_name, "test");
}

#[test]
fn test_grid_cell_key_is_typed() {
    use timetable_rust::api::{DayId, PeriodId};

    let key = routes::grid::GridCellKey::new(DayId::new(2), PeriodId::new(3));
    assert_eq!(key.day_id.value(), 2);
    assert_eq!(key.start_period_id.value(), 3);
}

#[test]
fn test_field_error_kind_messages() {
    use routes::validation::FieldErrorKind;

    assert!(!FieldErrorKind::Required.message().is_empty());
    assert!(FieldErrorKind::ExceedsAvailablePeriods { available: 4 }
        .message()
        .contains('4'));
}

#[test]
fn test_route_constants_are_strings() {
    // Verify all route constants are strings (prevents typos)
    let _: &str = routes::grid::GET_WEEK_GRID;
    let _: &str = routes::month::GET_MONTH_VIEW;
    let _: &str = routes::validation::VALIDATE_CLASS_FORM;
    let _: &str = routes::landing::LIST_TIMETABLES;
    let _: &str = routes::landing::POST_TIMETABLE;
}
