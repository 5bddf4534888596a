use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::Console;
use crate::gradebook::{Gradebook, MarkMatrix};
use crate::verbose_eprintln;

/// Collect the class interactively: counts, names, then marks row by row.
pub fn collect_gradebook<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Gradebook> {
    let num_students: usize = console.prompt_parse("Enter number of students: ")?;
    let num_subjects: usize = console.prompt_parse("Enter number of subjects: ")?;

    let students = (0..num_students)
        .map(|i| console.prompt(&format!("Student {} name: ", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    let subjects = (0..num_subjects)
        .map(|i| console.prompt(&format!("Subject {} name: ", i + 1)))
        .collect::<Result<Vec<_>>>()?;

    console.say("\nEnter marks for each student:")?;
    let mut rows = Vec::with_capacity(num_students);
    for student in &students {
        console.say(&format!("--- {}'s marks ---", student))?;
        let row = subjects
            .iter()
            .map(|subject| console.prompt_parse::<i64>(&format!("Marks in {}: ", subject)))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    verbose_eprintln!(
        "Collected {} students x {} subjects",
        students.len(),
        subjects.len()
    );

    let marks = MarkMatrix::from_rows(rows, subjects.len()).context("Invalid mark matrix")?;
    Gradebook::new(students, subjects, marks).context("Invalid class data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collect_gradebook() {
        let input = "2\n2\nAnn\nBen\nMath\nEnglish\n80\n90\n70\n60\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let gb = collect_gradebook(&mut console).unwrap();

        assert_eq!(gb.students(), &["Ann", "Ben"]);
        assert_eq!(gb.subjects(), &["Math", "English"]);
        assert_eq!(gb.marks().row(0), &[80, 90]);
        assert_eq!(gb.marks().row(1), &[70, 60]);

        let out = String::from_utf8(console.into_writer()).unwrap();
        assert!(out.contains("--- Ben's marks ---"));
        assert!(out.contains("Marks in English: "));
    }

    #[test]
    fn test_non_integer_mark_is_fatal() {
        let input = "1\n1\nAnn\nMath\nninety\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let err = collect_gradebook(&mut console).unwrap_err();
        assert!(err.to_string().contains("ninety"));
    }

    #[test]
    fn test_non_integer_count_is_fatal() {
        let mut console = Console::new(Cursor::new("two\n"), Vec::new());
        assert!(collect_gradebook(&mut console).is_err());
    }

    #[test]
    fn test_zero_students() {
        let input = "0\n1\nMath\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let gb = collect_gradebook(&mut console).unwrap();
        assert!(gb.students().is_empty());
        assert_eq!(gb.subjects(), &["Math"]);
    }
}
