//! Student lens
//!
//! Record operations with their console side: every mutation writes a
//! confirmation line, and listings are rendered in the selected
//! [`OutputFormat`]. Output goes to any `std::io::Write`, so the CLI passes
//! stdout and tests pass a buffer.
//!
//! # Example
//!
//! ```rust,ignore
//! use rollbook::database::StudentStore;
//! use rollbook::lens::students::{StudentAddArgs, StudentLens};
//! use rollbook::lens::utils::OutputFormat;
//!
//! let store = StudentStore::new("students.db");
//! let lens = StudentLens::new(&store);
//! let mut out = std::io::stdout();
//!
//! lens.initialize(&mut out)?;
//! lens.add(&StudentAddArgs::new(101, "Amit Kumar", "BCA", 88.5), &mut out)?;
//! lens.list(OutputFormat::Plain, &mut out)?;
//! ```

mod args;
mod types;

pub use args::{StudentAddArgs, StudentRollArgs, StudentUpdateArgs};
pub use types::{StudentRow, DEMO_DELETE, DEMO_UPDATE, PLAIN_RULE_WIDTH, SEED_STUDENTS};

use std::io::Write;

use anyhow::{anyhow, Result};
use tabled::settings::Style;
use tabled::Table;
use tracing::info;

use crate::database::{Student, StudentStore, STUDENTS_TABLE};
use crate::lens::utils::{display_text, format_marks, OutputFormat};

/// Notice printed instead of an empty listing
pub const NO_STUDENTS_NOTICE: &str = "No students found.";

/// Student lens
///
/// Wraps a [`StudentStore`] and adds confirmation output and rendering.
pub struct StudentLens<'a> {
    store: &'a StudentStore,
}

impl<'a> StudentLens<'a> {
    /// Create a new student lens
    pub fn new(store: &'a StudentStore) -> Self {
        Self { store }
    }

    /// Ensure the table exists and confirm it
    pub fn initialize<W: Write>(&self, out: &mut W) -> Result<()> {
        self.store.initialize()?;
        emit(out, &format!("[✓] Table '{}' is ready.", STUDENTS_TABLE))
    }

    /// Insert or replace a record and confirm the stored values
    pub fn add<W: Write>(&self, args: &StudentAddArgs, out: &mut W) -> Result<Student> {
        let student = self
            .store
            .upsert(args.roll_no, &args.name, &args.course, args.marks)?;
        emit(
            out,
            &format!(
                "[+] Student added: {}, {}, {}, {}",
                student.roll_no,
                display_text(student.name.as_deref()),
                display_text(student.course.as_deref()),
                format_marks(student.marks)
            ),
        )?;
        Ok(student)
    }

    /// List every record in roll order
    ///
    /// Returns the records that were rendered.
    pub fn list<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<Vec<Student>> {
        let students = self.store.list_all()?;
        if students.is_empty() && !format.is_json() {
            emit(out, NO_STUDENTS_NOTICE)?;
        } else {
            let rendered = format_listing(&students, format)?;
            // json-line output of nothing is nothing
            if !rendered.is_empty() {
                emit(out, &rendered)?;
            }
        }
        Ok(students)
    }

    /// Show a single record
    pub fn get<W: Write>(
        &self,
        args: &StudentRollArgs,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<Option<Student>> {
        let student = self.store.get(args.roll_no)?;
        match &student {
            Some(s) => emit(out, &format_listing(std::slice::from_ref(s), format)?)?,
            None => emit(out, &format!("No student with roll {}.", args.roll_no))?,
        }
        Ok(student)
    }

    /// Change marks for a record
    ///
    /// The confirmation is written whether or not a record matched.
    pub fn update_marks<W: Write>(&self, args: &StudentUpdateArgs, out: &mut W) -> Result<usize> {
        let changed = self.store.update_marks(args.roll_no, args.marks)?;
        emit(
            out,
            &format!(
                "[~] Marks updated for roll {} to {}.",
                args.roll_no,
                format_marks(Some(args.marks))
            ),
        )?;
        Ok(changed)
    }

    /// Remove a record
    ///
    /// The confirmation is written whether or not a record matched.
    pub fn delete<W: Write>(&self, args: &StudentRollArgs, out: &mut W) -> Result<usize> {
        let changed = self.store.delete(args.roll_no)?;
        emit(
            out,
            &format!("[✘] Student with roll {} deleted.", args.roll_no),
        )?;
        Ok(changed)
    }

    /// Scripted walkthrough: seed, list, update, delete, list again
    pub fn run_demo<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        info!("running demo against {}", self.store.path());
        self.initialize(out)?;

        for (roll_no, name, course, marks) in SEED_STUDENTS {
            self.add(&StudentAddArgs::new(*roll_no, *name, *course, *marks), out)?;
        }
        self.list(format, out)?;

        let (roll_no, marks) = DEMO_UPDATE;
        self.update_marks(&StudentUpdateArgs { roll_no, marks }, out)?;
        self.delete(&StudentRollArgs { roll_no: DEMO_DELETE }, out)?;
        self.list(format, out)?;

        info!("demo finished");
        Ok(())
    }
}

/// Render records in the given format
///
/// The plain format starts with a blank line and frames the rows with dashed
/// rules; the caller decides what to print for an empty slice.
pub fn format_listing(students: &[Student], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Plain => {
            let rule = "-".repeat(PLAIN_RULE_WIDTH);
            let mut lines = vec![
                String::new(),
                format!("{:<10} {:<20} {:<15} {:<5}", "Roll No", "Name", "Course", "Marks"),
                rule.clone(),
            ];
            for s in students {
                lines.push(format!(
                    "{:<10} {:<20} {:<15} {:<5}",
                    s.roll_no,
                    display_text(s.name.as_deref()),
                    display_text(s.course.as_deref()),
                    format_marks(s.marks)
                ));
            }
            lines.push(rule);
            lines.join("\n")
        }
        OutputFormat::Table => {
            let rows: Vec<StudentRow> = students.iter().map(StudentRow::from).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Markdown => {
            let rows: Vec<StudentRow> = students.iter().map(StudentRow::from).collect();
            Table::new(rows).with(Style::markdown()).to_string()
        }
        OutputFormat::Json => serde_json::to_string(students)
            .map_err(|e| anyhow!("Failed to serialize to JSON: {}", e))?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(students)
            .map_err(|e| anyhow!("Failed to serialize to JSON: {}", e))?,
        OutputFormat::JsonLine => students
            .iter()
            .map(|s| {
                serde_json::to_string(s).map_err(|e| anyhow!("Failed to serialize to JSON: {}", e))
            })
            .collect::<Result<Vec<_>>>()?
            .join("\n"),
        OutputFormat::Psv => {
            let mut lines = vec!["roll_no|name|course|marks".to_string()];
            for s in students {
                lines.push(format!(
                    "{}|{}|{}|{}",
                    s.roll_no,
                    display_text(s.name.as_deref()),
                    display_text(s.course.as_deref()),
                    format_marks(s.marks)
                ));
            }
            lines.join("\n")
        }
    };
    Ok(rendered)
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line).map_err(|e| anyhow!("Failed to write output: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseConn;
    use tempfile::TempDir;

    fn setup() -> (TempDir, StudentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = StudentStore::new(dir.path().join("students.db").to_str().unwrap());
        (dir, store)
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_initialize_message() {
        let (_dir, store) = setup();
        let lens = StudentLens::new(&store);
        let mut buf = Vec::new();

        lens.initialize(&mut buf).unwrap();
        lens.initialize(&mut buf).unwrap();

        assert_eq!(
            output(buf),
            "[✓] Table 'students' is ready.\n[✓] Table 'students' is ready.\n"
        );
    }

    #[test]
    fn test_add_message() {
        let (_dir, store) = setup();
        let lens = StudentLens::new(&store);
        let mut buf = Vec::new();
        lens.initialize(&mut std::io::sink()).unwrap();

        lens.add(&StudentAddArgs::new(102, "Lucky Bhardwaj", "BCA", 75.0), &mut buf)
            .unwrap();

        assert_eq!(output(buf), "[+] Student added: 102, Lucky Bhardwaj, BCA, 75.0\n");
    }

    #[test]
    fn test_list_empty_prints_notice() {
        let (_dir, store) = setup();
        let lens = StudentLens::new(&store);
        lens.initialize(&mut std::io::sink()).unwrap();

        let mut buf = Vec::new();
        let students = lens.list(OutputFormat::Plain, &mut buf).unwrap();
        assert!(students.is_empty());
        assert_eq!(output(buf), "No students found.\n");

        let mut buf = Vec::new();
        lens.list(OutputFormat::Json, &mut buf).unwrap();
        assert_eq!(output(buf), "[]\n");
    }

    #[test]
    fn test_plain_listing_layout() {
        let students = vec![
            Student::new(101, "Amit Kumar", "BCA", 88.5),
            Student::new(102, "Lucky Bhardwaj", "BCA", 75.0),
        ];

        let rendered = format_listing(&students, OutputFormat::Plain).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");
        assert_eq!(
            lines[1],
            "Roll No    Name                 Course          Marks"
        );
        assert_eq!(lines[2], "-".repeat(55));
        assert_eq!(
            lines[3],
            "101        Amit Kumar           BCA             88.5 "
        );
        assert_eq!(
            lines[4],
            "102        Lucky Bhardwaj       BCA             75.0 "
        );
        assert_eq!(lines[5], "-".repeat(55));
    }

    #[test]
    fn test_other_formats() {
        let students = vec![Student::new(105, "Simran Kaur", "BCA", 82.0)];

        let psv = format_listing(&students, OutputFormat::Psv).unwrap();
        assert_eq!(psv, "roll_no|name|course|marks\n105|Simran Kaur|BCA|82.0");

        let json = format_listing(&students, OutputFormat::Json).unwrap();
        let parsed: Vec<Student> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, students);

        let jsonl = format_listing(&students, OutputFormat::JsonLine).unwrap();
        assert_eq!(jsonl.lines().count(), 1);

        let table = format_listing(&students, OutputFormat::Table).unwrap();
        assert!(table.contains("Roll No"));
        assert!(table.contains("Simran Kaur"));

        let markdown = format_listing(&students, OutputFormat::Markdown).unwrap();
        assert!(markdown.contains("| Roll No"));
        assert!(markdown.contains("82.0"));
    }

    #[test]
    fn test_null_columns_render_as_none() {
        let (dir, store) = setup();
        let lens = StudentLens::new(&store);
        lens.initialize(&mut std::io::sink()).unwrap();

        let db = DatabaseConn::open(dir.path().join("students.db").to_str().unwrap()).unwrap();
        db.conn
            .execute(
                "INSERT INTO students (roll_no, name, course, marks) VALUES (102, 'Lucky', 'BCA', NULL), (200, NULL, 'X', NULL)",
                [],
            )
            .unwrap();
        drop(db);

        let mut buf = Vec::new();
        let students = lens.list(OutputFormat::Plain, &mut buf).unwrap();
        assert_eq!(students.len(), 2);
        let text = output(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[3],
            "102        Lucky                BCA             None "
        );
        assert_eq!(
            lines[4],
            "200        None                 X               None "
        );

        let psv = format_listing(&students, OutputFormat::Psv).unwrap();
        assert_eq!(psv, "roll_no|name|course|marks\n102|Lucky|BCA|None\n200|None|X|None");

        let json = format_listing(&students, OutputFormat::Json).unwrap();
        assert!(json.contains(r#""name":null"#));
        assert!(json.contains(r#""marks":null"#));

        let table = format_listing(&students, OutputFormat::Table).unwrap();
        assert!(table.contains("None"));
    }

    #[test]
    fn test_update_and_delete_confirm_even_without_match() {
        let (_dir, store) = setup();
        let lens = StudentLens::new(&store);
        lens.initialize(&mut std::io::sink()).unwrap();
        let mut buf = Vec::new();

        let updated = lens
            .update_marks(&StudentUpdateArgs { roll_no: 999, marks: 50.0 }, &mut buf)
            .unwrap();
        let deleted = lens.delete(&StudentRollArgs { roll_no: 999 }, &mut buf).unwrap();

        assert_eq!(updated, 0);
        assert_eq!(deleted, 0);
        assert_eq!(
            output(buf),
            "[~] Marks updated for roll 999 to 50.0.\n[✘] Student with roll 999 deleted.\n"
        );
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_get() {
        let (_dir, store) = setup();
        let lens = StudentLens::new(&store);
        lens.initialize(&mut std::io::sink()).unwrap();
        lens.add(&StudentAddArgs::new(108, "Raj Patel", "MCA", 68.0), &mut std::io::sink())
            .unwrap();

        let mut buf = Vec::new();
        let found = lens
            .get(&StudentRollArgs { roll_no: 108 }, OutputFormat::Psv, &mut buf)
            .unwrap();
        assert_eq!(found, Some(Student::new(108, "Raj Patel", "MCA", 68.0)));
        assert_eq!(output(buf), "roll_no|name|course|marks\n108|Raj Patel|MCA|68.0\n");

        let mut buf = Vec::new();
        let missing = lens
            .get(&StudentRollArgs { roll_no: 1 }, OutputFormat::Psv, &mut buf)
            .unwrap();
        assert_eq!(missing, None);
        assert_eq!(output(buf), "No student with roll 1.\n");
    }

    #[test]
    fn test_demo_end_to_end() {
        let (_dir, store) = setup();
        let lens = StudentLens::new(&store);
        let mut buf = Vec::new();

        lens.run_demo(OutputFormat::Plain, &mut buf).unwrap();

        let students = store.list_all().unwrap();
        assert_eq!(students.len(), 9);
        let rolls: Vec<i64> = students.iter().map(|s| s.roll_no).collect();
        assert_eq!(rolls, vec![101, 102, 104, 105, 106, 107, 108, 109, 110]);
        assert_eq!(store.get(103).unwrap(), None);
        assert_eq!(store.get(102).unwrap().unwrap().marks, Some(78.5));

        // untouched records keep their seed values
        for (roll_no, name, course, marks) in SEED_STUDENTS {
            if *roll_no == 102 || *roll_no == 103 {
                continue;
            }
            assert_eq!(
                store.get(*roll_no).unwrap(),
                Some(Student::new(*roll_no, *name, *course, *marks))
            );
        }

        let text = output(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[✓] Table 'students' is ready.");
        assert_eq!(lines[1], "[+] Student added: 101, Amit Kumar, BCA, 88.5");
        assert_eq!(lines[10], "[+] Student added: 110, Karan Singh, BCA, 73.5");

        // first listing: blank, header, rule, 10 rows, rule
        assert_eq!(lines[11], "");
        assert!(lines[15].starts_with("102        Lucky Bhardwaj       BCA             75.0"));
        assert_eq!(lines[24], "-".repeat(55));

        assert_eq!(lines[25], "[~] Marks updated for roll 102 to 78.5.");
        assert_eq!(lines[26], "[✘] Student with roll 103 deleted.");

        // second listing: 9 rows, 103 gone
        let second = &lines[27..];
        assert_eq!(second.len(), 13);
        assert!(second[4].starts_with("102        Lucky Bhardwaj       BCA             78.5"));
        assert!(second[5].starts_with("104 "));
        assert!(!second.iter().any(|l| l.starts_with("103 ")));
    }

    #[test]
    fn test_demo_twice_is_stable() {
        let (_dir, store) = setup();
        let lens = StudentLens::new(&store);

        lens.run_demo(OutputFormat::Plain, &mut std::io::sink()).unwrap();
        let first = store.list_all().unwrap();
        lens.run_demo(OutputFormat::Plain, &mut std::io::sink()).unwrap();

        assert_eq!(store.list_all().unwrap(), first);
    }
}
