//! In-memory repository for unit testing and local development.
//!
//! All state lives in one locked map set; ids are assigned from monotonic
//! counters starting at 1. Listings iterate in id order, which for classes,
//! courses and teachers is creation order.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::api::{
    Class, ClassId, Course, CourseId, CreateClassRequest, Occurrence, OccurrenceId, Teacher,
    TeacherId, TimetableId, TimetableInfo, TimetableStructure,
};
use crate::store::repository::{
    CatalogRepository, ClassRepository, RepositoryError, RepositoryResult, TimetableRepository,
};

struct LocalData {
    structures: BTreeMap<TimetableId, TimetableStructure>,
    classes: BTreeMap<ClassId, Class>,
    courses: BTreeMap<CourseId, Course>,
    teachers: BTreeMap<TeacherId, Teacher>,
    next_class_id: i64,
    next_occurrence_id: i64,
    next_course_id: i64,
    next_teacher_id: i64,
}

/// In-memory repository.
pub struct LocalRepository {
    data: RwLock<LocalData>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(LocalData {
                structures: BTreeMap::new(),
                classes: BTreeMap::new(),
                courses: BTreeMap::new(),
                teachers: BTreeMap::new(),
                next_class_id: 1,
                next_occurrence_id: 1,
                next_course_id: 1,
                next_teacher_id: 1,
            }),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimetableRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn store_structure(
        &self,
        structure: TimetableStructure,
    ) -> RepositoryResult<TimetableId> {
        let mut data = self.data.write();
        let id = structure.id;
        data.structures.insert(id, structure);
        Ok(id)
    }

    async fn get_structure(&self, id: TimetableId) -> RepositoryResult<TimetableStructure> {
        self.data
            .read()
            .structures
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Timetable {} does not exist", id)))
    }

    async fn list_timetables(&self) -> RepositoryResult<Vec<TimetableInfo>> {
        Ok(self
            .data
            .read()
            .structures
            .values()
            .map(|structure| TimetableInfo {
                timetable_id: structure.id,
                timetable_name: structure.name.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl ClassRepository for LocalRepository {
    async fn create_class(&self, request: CreateClassRequest) -> RepositoryResult<Class> {
        let mut data = self.data.write();

        if !data.structures.contains_key(&request.timetable_id) {
            return Err(RepositoryError::not_found(format!(
                "Timetable {} does not exist",
                request.timetable_id
            )));
        }
        let course = data
            .courses
            .get(&request.course_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Course {} does not exist", request.course_id))
            })?;
        let teacher = match request.teacher_id {
            Some(id) => Some(data.teachers.get(&id).cloned().ok_or_else(|| {
                RepositoryError::not_found(format!("Teacher {} does not exist", id))
            })?),
            None => None,
        };

        let class_id = ClassId::new(data.next_class_id);
        data.next_class_id += 1;

        let mut occurrences = Vec::with_capacity(request.occurrences.len());
        for occurrence in &request.occurrences {
            let id = OccurrenceId::new(data.next_occurrence_id);
            data.next_occurrence_id += 1;
            occurrences.push(Occurrence {
                id: Some(id),
                day_id: occurrence.day_id,
                start_period_id: occurrence.start_period_id,
                length: occurrence.length,
            });
        }

        let class = Class {
            id: class_id,
            timetable_id: request.timetable_id,
            course,
            teacher,
            occurrences,
        };
        data.classes.insert(class_id, class.clone());
        Ok(class)
    }

    async fn get_class(&self, id: ClassId) -> RepositoryResult<Class> {
        self.data
            .read()
            .classes
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Class {} does not exist", id)))
    }

    async fn list_classes(&self, timetable_id: TimetableId) -> RepositoryResult<Vec<Class>> {
        let data = self.data.read();
        if !data.structures.contains_key(&timetable_id) {
            return Err(RepositoryError::not_found(format!(
                "Timetable {} does not exist",
                timetable_id
            )));
        }
        Ok(data
            .classes
            .values()
            .filter(|class| class.timetable_id == timetable_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn list_courses(&self) -> RepositoryResult<Vec<Course>> {
        Ok(self.data.read().courses.values().cloned().collect())
    }

    async fn get_course(&self, id: CourseId) -> RepositoryResult<Course> {
        self.data
            .read()
            .courses
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Course {} does not exist", id)))
    }

    async fn add_course(&self, name: String, code: String) -> RepositoryResult<Course> {
        let mut data = self.data.write();
        let id = CourseId::new(data.next_course_id);
        data.next_course_id += 1;
        let course = Course { id, name, code };
        data.courses.insert(id, course.clone());
        Ok(course)
    }

    async fn list_teachers(&self) -> RepositoryResult<Vec<Teacher>> {
        Ok(self.data.read().teachers.values().cloned().collect())
    }

    async fn get_teacher(&self, id: TeacherId) -> RepositoryResult<Teacher> {
        self.data
            .read()
            .teachers
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Teacher {} does not exist", id)))
    }

    async fn add_teacher(&self, name: String, kind: String) -> RepositoryResult<Teacher> {
        let mut data = self.data.write();
        let id = TeacherId::new(data.next_teacher_id);
        data.next_teacher_id += 1;
        let teacher = Teacher { id, name, kind };
        data.teachers.insert(id, teacher.clone());
        Ok(teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Day, DayId, Period, PeriodId, TimeOfDay};

    fn period(id: i64, start: (u32, u32), end: (u32, u32)) -> Period {
        Period::new(
            PeriodId::new(id),
            TimeOfDay::from_hm(start.0, start.1).unwrap(),
            TimeOfDay::from_hm(end.0, end.1).unwrap(),
        )
        .unwrap()
    }

    fn demo_structure(id: i64, name: &str) -> TimetableStructure {
        TimetableStructure::new(
            TimetableId::new(id),
            name.to_string(),
            vec![Day::new(DayId::new(1), "Monday")],
            vec![period(1, (8, 0), (9, 30)), period(2, (9, 45), (11, 15))],
        )
    }

    async fn seeded() -> (LocalRepository, Course, Teacher) {
        let repo = LocalRepository::new();
        repo.store_structure(demo_structure(1, "Demo")).await.unwrap();
        let course = repo
            .add_course("Mathematics".to_string(), "MATH".to_string())
            .await
            .unwrap();
        let teacher = repo
            .add_teacher("Ada".to_string(), "titular".to_string())
            .await
            .unwrap();
        (repo, course, teacher)
    }

    fn request(course: CourseId, teacher: Option<TeacherId>) -> CreateClassRequest {
        CreateClassRequest {
            timetable_id: TimetableId::new(1),
            course_id: course,
            teacher_id: teacher,
            occurrences: vec![crate::api::NewOccurrence {
                day_id: DayId::new(1),
                start_period_id: PeriodId::new(1),
                length: 2,
            }],
        }
    }

    #[tokio::test]
    async fn test_store_and_fetch_structure() {
        let repo = LocalRepository::new();
        let id = repo.store_structure(demo_structure(7, "Main")).await.unwrap();
        assert_eq!(id, TimetableId::new(7));

        let fetched = repo.get_structure(id).await.unwrap();
        assert_eq!(fetched.name, "Main");
        assert_eq!(fetched.periods.len(), 2);
    }

    #[tokio::test]
    async fn test_storing_same_id_replaces() {
        let repo = LocalRepository::new();
        repo.store_structure(demo_structure(1, "Old")).await.unwrap();
        repo.store_structure(demo_structure(1, "New")).await.unwrap();

        let listed = repo.list_timetables().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].timetable_name, "New");
    }

    #[tokio::test]
    async fn test_missing_structure_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo.get_structure(TimetableId::new(9)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_class_assigns_ids() {
        let (repo, course, teacher) = seeded().await;

        let class = repo
            .create_class(request(course.id, Some(teacher.id)))
            .await
            .unwrap();
        assert_eq!(class.id, ClassId::new(1));
        assert_eq!(class.occurrences[0].id, Some(OccurrenceId::new(1)));
        assert_eq!(class.course.name, "Mathematics");
        assert_eq!(class.teacher.as_ref().map(|t| t.name.as_str()), Some("Ada"));

        let second = repo.create_class(request(course.id, None)).await.unwrap();
        assert_eq!(second.id, ClassId::new(2));
        assert_eq!(second.occurrences[0].id, Some(OccurrenceId::new(2)));
        assert!(second.teacher.is_none());
    }

    #[tokio::test]
    async fn test_create_class_checks_references() {
        let (repo, course, _teacher) = seeded().await;

        let mut bad_timetable = request(course.id, None);
        bad_timetable.timetable_id = TimetableId::new(99);
        assert!(repo.create_class(bad_timetable).await.unwrap_err().is_not_found());

        let bad_course = request(CourseId::new(99), None);
        assert!(repo.create_class(bad_course).await.unwrap_err().is_not_found());

        let bad_teacher = request(course.id, Some(TeacherId::new(99)));
        assert!(repo.create_class(bad_teacher).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_classes_filters_by_timetable() {
        let (repo, course, _) = seeded().await;
        repo.store_structure(demo_structure(2, "Other")).await.unwrap();
        repo.create_class(request(course.id, None)).await.unwrap();

        let ours = repo.list_classes(TimetableId::new(1)).await.unwrap();
        assert_eq!(ours.len(), 1);

        let theirs = repo.list_classes(TimetableId::new(2)).await.unwrap();
        assert!(theirs.is_empty());

        let missing = repo.list_classes(TimetableId::new(42)).await.unwrap_err();
        assert!(missing.is_not_found());
    }

    #[tokio::test]
    async fn test_catalog_round_trip() {
        let repo = LocalRepository::new();
        let course = repo
            .add_course("History".to_string(), "HIST".to_string())
            .await
            .unwrap();
        assert_eq!(course.id, CourseId::new(1));

        let fetched = repo.get_course(course.id).await.unwrap();
        assert_eq!(fetched.code, "HIST");

        let teacher = repo
            .add_teacher("Joan".to_string(), "substitute".to_string())
            .await
            .unwrap();
        assert_eq!(repo.get_teacher(teacher.id).await.unwrap().kind, "substitute");
        assert_eq!(repo.list_courses().await.unwrap().len(), 1);
        assert_eq!(repo.list_teachers().await.unwrap().len(), 1);
    }
}
