use crate::domain::model::Course;
use csv::ByteRecord;

pub const FIELD_DELIMITER: char = ',';

/// Splits one line of course data into a [`Course`].
///
/// Field 0 is the course number, field 1 the title and every further field a
/// prerequisite. Whitespace is kept as is and quotes have no special meaning.
/// Parsing never fails; absent fields come back as empty strings. One
/// trailing `\r` left over from a CRLF ending is dropped.
pub fn parse_line(line: &str) -> Course {
    let line = line.strip_suffix('\r').unwrap_or(line);
    Course::from_fields(line.split(FIELD_DELIMITER))
}

/// Builds a course from one row the loader's csv reader split out of a file.
/// Gives the same result as [`parse_line`] on the text of that line.
pub fn parse_record(record: &ByteRecord) -> Course {
    let last = record.len().saturating_sub(1);
    Course::from_fields(record.iter().enumerate().map(|(index, field)| {
        let field = if index == last {
            field.strip_suffix(b"\r").unwrap_or(field)
        } else {
            field
        };
        String::from_utf8_lossy(field).into_owned()
    }))
}
