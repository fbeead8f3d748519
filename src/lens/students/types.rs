//! Student lens types
//!
//! Display rows and the fixed demo data set.

use tabled::Tabled;

use crate::database::Student;
use crate::lens::utils::{display_text, format_marks, truncate_name, DEFAULT_NAME_MAX_LEN};

/// Records loaded by the demo run, as `(roll_no, name, course, marks)`
pub const SEED_STUDENTS: &[(i64, &str, &str, f64)] = &[
    (101, "Amit Kumar", "BCA", 88.5),
    (102, "Lucky Bhardwaj", "BCA", 75.0),
    (103, "Sneha Sharma", "BBA", 91.0),
    (104, "Ravi Verma", "MCA", 65.0),
    (105, "Simran Kaur", "BCA", 82.0),
    (106, "Mohit Rana", "BBA", 79.5),
    (107, "Anjali Mehta", "BCA", 85.0),
    (108, "Raj Patel", "MCA", 68.0),
    (109, "Nikita Joshi", "BBA", 92.0),
    (110, "Karan Singh", "BCA", 73.5),
];

/// Roll number and new marks applied by the demo run
pub const DEMO_UPDATE: (i64, f64) = (102, 78.5);

/// Roll number removed by the demo run
pub const DEMO_DELETE: i64 = 103;

/// Width of the dashed rules around a plain listing
pub const PLAIN_RULE_WIDTH: usize = 55;

/// Student row for bordered table output
#[derive(Debug, Clone, Tabled)]
pub struct StudentRow {
    #[tabled(rename = "Roll No")]
    pub roll_no: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Course")]
    pub course: String,
    #[tabled(rename = "Marks")]
    pub marks: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        StudentRow {
            roll_no: student.roll_no,
            name: truncate_name(display_text(student.name.as_deref()), DEFAULT_NAME_MAX_LEN),
            course: display_text(student.course.as_deref()).to_string(),
            marks: format_marks(student.marks),
        }
    }
}
