use crate::core::{Course, CourseStore, StoreKind};

/// Courses kept in load order; lookups scan front to back.
#[derive(Debug, Default)]
pub struct LinearStore {
    courses: Vec<Course>,
}

impl LinearStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Courses in the order they were inserted.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

impl CourseStore for LinearStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Linear
    }

    fn insert(&mut self, course: Course) {
        self.courses.push(course);
    }

    fn find(&self, course_number: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|course| course.course_number == course_number)
    }

    fn sorted_courses(&self) -> Vec<&Course> {
        // 排序副本，不改動原本的載入順序
        let mut sorted: Vec<&Course> = self.courses.iter().collect();
        sorted.sort_by(|a, b| a.course_number.cmp(&b.course_number));
        sorted
    }

    fn len(&self) -> usize {
        self.courses.len()
    }

    fn clear(&mut self) {
        self.courses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> LinearStore {
        let mut store = LinearStore::new();
        store.insert(Course::new("MA101", "Calculus", vec![]));
        store.insert(Course::new("CS201", "Data Structures", vec!["CS101".to_string()]));
        store.insert(Course::new("CS101", "Intro to CS", vec![]));
        store
    }

    #[test]
    fn test_find_exact_match() {
        let store = sample_store();
        assert_eq!(store.find("CS201").unwrap().title, "Data Structures");
        assert!(store.find("cs201").is_none());
        assert!(store.find("CS999").is_none());
    }

    #[test]
    fn test_sorted_courses_keeps_load_order() {
        let store = sample_store();
        let numbers: Vec<&str> = store
            .sorted_courses()
            .iter()
            .map(|c| c.course_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["CS101", "CS201", "MA101"]);

        let original: Vec<&str> = store.courses().iter().map(|c| c.course_number.as_str()).collect();
        assert_eq!(original, vec!["MA101", "CS201", "CS101"]);
    }

    #[test]
    fn test_duplicates_are_appended() {
        let mut store = LinearStore::new();
        store.insert(Course::new("CS101", "First", vec![]));
        store.insert(Course::new("CS101", "Second", vec![]));

        assert_eq!(store.len(), 2);
        assert_eq!(store.find("CS101").unwrap().title, "First");

        // 穩定排序：相同編號保持插入順序
        let titles: Vec<&str> = store.sorted_courses().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_replace_all_discards_previous() {
        let mut store = sample_store();
        store.replace_all(vec![Course::new("PH101", "Physics", vec![])]);

        assert_eq!(store.len(), 1);
        assert!(store.find("CS101").is_none());
        assert!(store.find("PH101").is_some());
    }
}
