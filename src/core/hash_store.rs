use crate::core::{Course, CourseStore, StoreKind};

pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// Chained hash table keyed by course number.
///
/// The hash is the sum of the key's character codes modulo the bucket count,
/// so anagrams such as `"AB"` and `"BA"` always share a bucket. Each bucket
/// keeps its entries in insertion order and duplicate keys are not detected:
/// a lookup returns the first entry, later ones remain listed but unreachable.
#[derive(Debug)]
pub struct HashStore {
    buckets: Vec<Vec<Course>>,
    len: usize,
}

impl HashStore {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// A zero bucket count is raised to one.
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count.max(1)],
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket_index(&self, key: &str) -> usize {
        let sum = key
            .chars()
            .fold(0usize, |acc, c| acc.wrapping_add(c as usize));
        sum % self.buckets.len()
    }

    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, Vec::len)
    }
}

impl Default for HashStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseStore for HashStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Hash
    }

    fn insert(&mut self, course: Course) {
        let index = self.bucket_index(&course.course_number);
        self.buckets[index].push(course);
        self.len += 1;
    }

    fn find(&self, course_number: &str) -> Option<&Course> {
        self.buckets[self.bucket_index(course_number)]
            .iter()
            .find(|course| course.course_number == course_number)
    }

    fn sorted_courses(&self) -> Vec<&Course> {
        // 依 bucket 順序串接後再排序
        let mut all: Vec<&Course> = self.buckets.iter().flatten().collect();
        all.sort_by(|a, b| a.course_number.cmp(&b.course_number));
        all
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }
}
