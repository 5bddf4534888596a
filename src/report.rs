use anyhow::Result;

use crate::analysis::{self, SubjectFilter};
use crate::config::Config;
use crate::gradebook::Gradebook;
use crate::output;
use crate::verbose_eprintln;

/// Renders each analysis as display text for one class.
///
/// Shared by the interactive menu and the non-interactive `report` command.
pub struct Report<'a> {
    gradebook: &'a Gradebook,
    config: &'a Config,
    use_colors: bool,
    width: Option<usize>,
}

impl<'a> Report<'a> {
    pub fn new(gradebook: &'a Gradebook, config: &'a Config, use_colors: bool, width: Option<usize>) -> Self {
        Self {
            gradebook,
            config,
            use_colors,
            width,
        }
    }

    pub fn gradebook(&self) -> &Gradebook {
        self.gradebook
    }

    pub fn basic_analytics(&self) -> String {
        let stats = analysis::describe(self.gradebook.marks());
        verbose_eprintln!("Computed statistics for {} students", stats.students.len());
        output::format_basic_analytics(self.gradebook, &stats, self.config.decimals, self.use_colors)
    }

    pub fn ranking(&self) -> String {
        let ranked = analysis::rank_students(self.gradebook);
        output::format_ranking(&ranked, self.width, self.use_colors)
    }

    pub fn ranking_tsv(&self) -> String {
        output::format_ranking_tsv(&analysis::rank_students(self.gradebook))
    }

    pub fn subject_analysis(&self) -> String {
        let breakdowns = analysis::analyze_subjects(self.gradebook);
        output::format_subject_analysis(&breakdowns, self.use_colors)
    }

    pub fn matrix_operations(&self) -> Result<String> {
        let views = analysis::matrix_views(self.gradebook.marks())?;
        Ok(output::format_matrix_views(&views, self.use_colors))
    }

    pub fn weighted_scores(&self, weights: &[f64]) -> Result<String> {
        let report = analysis::weighted_scores(self.gradebook, weights)?;
        verbose_eprintln!("Normalized weights: {:?}", report.normalized);
        Ok(output::format_weighted(&report, self.config.decimals, self.use_colors))
    }

    /// Distinction pair and below-pass-mark queries; needs no input.
    pub fn fixed_queries(&self) -> String {
        let distinction = &self.config.distinction;
        let pair = match distinction.subjects.as_slice() {
            [first, second] => {
                analysis::distinction_pair(self.gradebook, first, second, distinction.mark)
            }
            _ => None,
        };
        if pair.is_none() {
            verbose_eprintln!(
                "Skipping distinction query: subjects {:?} not all present",
                distinction.subjects
            );
        }

        let below = analysis::below_in_any(self.gradebook, self.config.pass_mark);

        let mut text = output::format_pair_distinction(pair.as_ref(), self.use_colors);
        text.push_str(&output::format_below_in_any(
            self.config.pass_mark,
            &below,
            self.use_colors,
        ));
        text
    }

    pub fn subject_filter(&self, subject: &str, threshold: i64) -> String {
        let result = analysis::filter_by_subject(self.gradebook, subject, threshold);
        output::format_subject_filter(subject, threshold, &result, self.use_colors)
    }

    pub fn subject_not_found(&self, subject: &str) -> String {
        output::format_subject_filter(subject, 0, &SubjectFilter::NotFound, self.use_colors)
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.gradebook.subject_index(subject).is_some()
    }

    /// Operations 1-4 and the fixed queries, plus weighted scores when weights are known.
    pub fn full(&self, weights: Option<&[f64]>) -> Result<String> {
        let mut sections = vec![
            self.basic_analytics(),
            self.ranking(),
            self.subject_analysis(),
            self.matrix_operations()?,
        ];
        if let Some(weights) = weights {
            sections.push(self.weighted_scores(weights)?);
        }
        sections.push(self.fixed_queries());
        Ok(sections.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradebook::sample_gradebook;

    fn class() -> Gradebook {
        sample_gradebook(
            &["Ann", "Ben", "Cara"],
            &["Math", "English"],
            vec![vec![95, 92], vec![70, 45], vec![91, 88]],
        )
    }

    #[test]
    fn test_fixed_queries_default_config() {
        let gb = class();
        let config = Config::default();
        let report = Report::new(&gb, &config, false, None);
        let text = report.fixed_queries();
        assert!(text.contains("90+ in Math: Ann, Cara"));
        assert!(text.contains("90+ in Math & English: Ann"));
        assert!(text.contains("<50 in any subject: Ben"));
    }

    #[test]
    fn test_fixed_queries_without_pair_subjects() {
        let gb = sample_gradebook(&["Ann"], &["Art"], vec![vec![99]]);
        let config = Config::default();
        let text = Report::new(&gb, &config, false, None).fixed_queries();
        assert!(!text.contains("90+"));
        assert_eq!(text, "\n<50 in any subject: None");
    }

    #[test]
    fn test_fixed_queries_use_configured_thresholds() {
        let gb = class();
        let config = Config {
            pass_mark: 75,
            ..Config::default()
        };
        let text = Report::new(&gb, &config, false, None).fixed_queries();
        assert!(text.contains("<75 in any subject: Ben"));
    }

    #[test]
    fn test_full_report() {
        let gb = class();
        let config = Config::default();
        let report = Report::new(&gb, &config, false, None);
        let text = report.full(Some(&[50.0, 50.0])).unwrap();
        assert!(text.contains("Total Marks:"));
        assert!(text.contains("Rank 1: Ann - 187 marks"));
        assert!(text.contains("Topper in Each Subject:"));
        assert!(text.contains("Matrix Transformations:"));
        assert!(text.contains("Weighted Scores:\nAnn: 93.50"));
        assert!(text.contains("<50 in any subject: Ben"));
    }

    #[test]
    fn test_weighted_scores_wrong_count() {
        let gb = class();
        let config = Config::default();
        let report = Report::new(&gb, &config, false, None);
        assert!(report.weighted_scores(&[100.0]).is_err());
    }

    #[test]
    fn test_subject_filter_messages() {
        let gb = class();
        let config = Config::default();
        let report = Report::new(&gb, &config, false, None);
        assert_eq!(report.subject_filter("English", 88), ">= 88 in English: Ann, Cara");
        assert_eq!(report.subject_not_found("History"), "Subject not found!");
    }
}
