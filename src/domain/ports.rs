use crate::domain::model::{Course, StoreKind};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn bucket_count(&self) -> usize;
}

/// In-memory container for a loaded catalog.
///
/// Implementations differ only in how they find and enumerate courses;
/// every store hands back exact, case-sensitive matches and lists courses
/// in ascending course-number order.
pub trait CourseStore {
    fn kind(&self) -> StoreKind;

    fn insert(&mut self, course: Course);

    fn find(&self, course_number: &str) -> Option<&Course>;

    fn sorted_courses(&self) -> Vec<&Course>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Drops the current contents and inserts `courses` in order.
    fn replace_all(&mut self, courses: Vec<Course>) {
        self.clear();
        for course in courses {
            self.insert(course);
        }
    }
}
