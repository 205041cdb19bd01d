use crate::core::parser::parse_record;
use crate::core::{Course, Storage};
use csv::{ByteRecord, ReaderBuilder, Terminator, Trim};

/// Reads every course in `path` through `storage`.
///
/// A missing or unreadable file is not an error for the caller: it simply
/// produces an empty catalog. Blank lines are skipped.
pub fn load_courses<S: Storage + ?Sized>(storage: &S, path: &str) -> Vec<Course> {
    let data = match storage.read_file(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("Course file '{}' unavailable, using empty catalog: {}", path, e);
            return Vec::new();
        }
    };

    let courses = parse_courses(&data);
    tracing::debug!("Parsed {} courses from '{}' ({} bytes)", courses.len(), path, data.len());
    courses
}

/// Parses raw file contents, one course per non-empty line.
///
/// Only `\n` ends a line; a `\r` before it is dropped by [`parse_record`],
/// a `\r` anywhere else is field content. A leading UTF-8 BOM is removed.
pub fn parse_courses(data: &[u8]) -> Vec<Course> {
    // 無標題列、欄位數不固定、不處理引號
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(data);

    let mut courses = Vec::new();
    let mut record = ByteRecord::new();

    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) if is_blank(&record) => continue,
            Ok(true) => courses.push(parse_record(&record)),
            Ok(false) => break,
            Err(e) if e.is_io_error() => {
                tracing::warn!("Stopped reading course data: {}", e);
                break;
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable course row: {}", e);
            }
        }
    }

    courses
}

/// An empty line, or one holding only the `\r` of a CRLF ending.
fn is_blank(record: &ByteRecord) -> bool {
    record.len() == 1 && (record[0].is_empty() || &record[0] == b"\r")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{PlannerError, Result};
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                PlannerError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} not found", path),
                ))
            })
        }
    }

    #[test]
    fn test_load_courses_in_file_order() {
        let storage = MockStorage::with_file(
            "data.csv",
            "CS101,Intro to CS\nCS201,Data Structures,CS101\nMA101,Calculus\n",
        );

        let courses = load_courses(&storage, "data.csv");

        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0], Course::new("CS101", "Intro to CS", vec![]));
        assert_eq!(
            courses[1],
            Course::new("CS201", "Data Structures", vec!["CS101".to_string()])
        );
        assert_eq!(courses[2].course_number, "MA101");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let storage = MockStorage::with_file("data.csv", "CS101,Intro");
        assert!(load_courses(&storage, "other.csv").is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let courses = parse_courses(b"\nCS101,Intro\n\n\nCS102,Next\n\n");
        let numbers: Vec<&str> = courses.iter().map(|c| c.course_number.as_str()).collect();
        assert_eq!(numbers, vec!["CS101", "CS102"]);
    }

    #[test]
    fn test_blank_crlf_lines_are_skipped() {
        let courses = parse_courses(b"\r\nCS101,Intro\r\n\r\n\r\nCS102,Next\r\n");
        let numbers: Vec<&str> = courses.iter().map(|c| c.course_number.as_str()).collect();
        assert_eq!(numbers, vec!["CS101", "CS102"]);
    }

    #[test]
    fn test_lone_carriage_return_stays_in_line() {
        let courses = parse_courses(b"CS101,Intro\rPart,CS100\nMA101,Calculus\n");

        assert_eq!(courses.len(), 2);
        assert_eq!(
            courses[0],
            Course::new("CS101", "Intro\rPart", vec!["CS100".to_string()])
        );
        assert_eq!(courses[1].course_number, "MA101");
        assert!(!courses.iter().any(|c| c.course_number == "Part"));
    }

    #[test]
    fn test_leading_bom_is_removed() {
        let courses = parse_courses("\u{feff}CS101,Intro\nCS102,Next".as_bytes());
        assert_eq!(courses[0].course_number, "CS101");
        assert_eq!(courses[1].course_number, "CS102");
    }

    #[test]
    fn test_crlf_line_endings() {
        let courses = parse_courses(b"CS101,Intro\r\nCS201,Data Structures,CS101\r\n");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].title, "Intro");
        assert_eq!(courses[1].prerequisites, vec!["CS101"]);
    }

    #[test]
    fn test_rows_match_line_parser() {
        let lines = [
            "CSCI300,Introduction to Algorithms,CSCI200,MATH201",
            "CS101",
            " CS102 , spaced ,",
            "CS103,\"quoted, title\"",
            "CS104,Intro\rPart,CS100",
            "CS105,Windows,CS101\r",
            "CS106,Trailing,\r",
        ];
        let courses = parse_courses(lines.join("\n").as_bytes());

        assert_eq!(courses.len(), lines.len());
        for (course, line) in courses.iter().zip(lines) {
            assert_eq!(course, &crate::core::parser::parse_line(line));
        }
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let courses = parse_courses(b"CS101,Intro \xff\n");
        assert_eq!(courses.len(), 1);
        assert!(courses[0].title.starts_with("Intro "));
    }
}
