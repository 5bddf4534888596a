use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::gradebook::{Gradebook, MarkMatrix};

/// A class stored as YAML, used instead of the interactive prompts.
///
/// ```yaml
/// students: [Asha, Ben]
/// subjects: [Math, English]
/// marks:
///   - [80, 90]
///   - [70, 60]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassFile {
    pub students: Vec<String>,
    pub subjects: Vec<String>,
    /// One row per student, one entry per subject
    #[serde(default)]
    pub marks: Vec<Vec<i64>>,
}

impl ClassFile {
    pub fn into_gradebook(self) -> Result<Gradebook> {
        if self.marks.len() != self.students.len() {
            anyhow::bail!(
                "Class file lists {} students but {} rows of marks",
                self.students.len(),
                self.marks.len()
            );
        }
        for (name, row) in self.students.iter().zip(&self.marks) {
            if row.len() != self.subjects.len() {
                anyhow::bail!(
                    "{} has {} marks but there are {} subjects",
                    name,
                    row.len(),
                    self.subjects.len()
                );
            }
        }

        let marks = MarkMatrix::from_rows(self.marks, self.subjects.len())?;
        Ok(Gradebook::new(self.students, self.subjects, marks)?)
    }
}

/// Load a class from a YAML file.
pub fn load_class(path: &Path) -> Result<Gradebook> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read class file at {}", path.display()))?;
    parse_class(&content).with_context(|| format!("Invalid class file {}", path.display()))
}

pub fn parse_class(yaml: &str) -> Result<Gradebook> {
    let class: ClassFile = serde_saphyr::from_str(yaml).context("Failed to parse class YAML")?;
    class.into_gradebook()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class() {
        let yaml = r#"
students: [Asha, Ben]
subjects: [Math, English]
marks:
  - [80, 90]
  - [70, 60]
"#;
        let gb = parse_class(yaml).unwrap();
        assert_eq!(gb.students(), &["Asha", "Ben"]);
        assert_eq!(gb.marks().row(1), &[70, 60]);
    }

    #[test]
    fn test_row_count_mismatch() {
        let yaml = r#"
students: [Asha, Ben]
subjects: [Math]
marks:
  - [80]
"#;
        let err = parse_class(yaml).unwrap_err();
        assert!(err.to_string().contains("2 students but 1 rows"));
    }

    #[test]
    fn test_ragged_row() {
        let yaml = r#"
students: [Asha]
subjects: [Math, English]
marks:
  - [80]
"#;
        let err = parse_class(yaml).unwrap_err();
        assert!(err.to_string().contains("Asha has 1 marks"));
    }

    #[test]
    fn test_non_integer_mark() {
        let yaml = r#"
students: [Asha]
subjects: [Math]
marks:
  - [eighty]
"#;
        assert!(parse_class(yaml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("gradebook-test-no-such-class.yaml");
        assert!(load_class(&path).is_err());
    }
}
