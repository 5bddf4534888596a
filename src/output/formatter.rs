use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::analysis::{
    Descriptives, MatrixViews, PairDistinction, RankedStudent, SubjectBreakdown, SubjectFilter,
    WeightedReport,
};
use crate::config::ColorMode;
use crate::gradebook::Gradebook;

/// Shown in place of an empty list of names.
pub const NONE_SENTINEL: &str = "None";

pub const MENU: &str = "
========= MENU =========
1. Basic Analytics
2. Student Ranking
3. Subject-Wise Analysis
4. Matrix Operations
5. Weighted Scores
6. Advanced Queries
7. Exit
========================";

/// Resolve the configured color mode against stdout
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
pub fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Comma-joined names, or the `None` sentinel when the list is empty
pub fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        NONE_SENTINEL.to_string()
    } else {
        names.join(", ")
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        format!("\n{}", text.bold())
    } else {
        format!("\n{}", text)
    }
}

fn names(list: &[String], use_colors: bool) -> String {
    let joined = format_names(list);
    if use_colors && list.is_empty() {
        joined.dimmed().to_string()
    } else {
        joined
    }
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Per-student and per-subject statistics, one section per measure.
pub fn format_basic_analytics(
    gradebook: &Gradebook,
    stats: &Descriptives,
    decimals: usize,
    use_colors: bool,
) -> String {
    if stats.students.is_empty() {
        return "\nNo marks to analyze.".to_string();
    }

    let mut sections = Vec::new();
    let students = gradebook.students();
    let subjects = gradebook.subjects();

    let mut student_section = |title: &str, value: &dyn Fn(usize) -> String| {
        let mut lines = vec![heading(title, use_colors)];
        lines.extend(students.iter().enumerate().map(|(i, name)| format!("{}: {}", name, value(i))));
        sections.push(lines.join("\n"));
    };
    student_section("Total Marks:", &|i| stats.students[i].total.to_string());
    student_section("Average Marks:", &|i| format!("{:.*}", decimals, stats.students[i].mean));
    student_section("Maximum Marks:", &|i| stats.students[i].max.to_string());
    student_section("Minimum Marks:", &|i| stats.students[i].min.to_string());

    let mut subject_section = |title: &str, value: &dyn Fn(usize) -> String| {
        let mut lines = vec![heading(title, use_colors)];
        lines.extend(subjects.iter().enumerate().map(|(i, name)| format!("{}: {}", name, value(i))));
        sections.push(lines.join("\n"));
    };
    subject_section("Class Average per Subject:", &|i| {
        format!("{:.*}", decimals, stats.subjects[i].mean)
    });
    subject_section("Standard Deviation:", &|i| {
        format!("{:.*}", decimals, stats.subjects[i].std_dev)
    });
    subject_section("Maximum per Subject:", &|i| stats.subjects[i].max.to_string());
    subject_section("Minimum per Subject:", &|i| stats.subjects[i].min.to_string());

    sections.join("\n")
}

/// Ranking lines: "Rank N: name - total marks".
/// Names are truncated only when a terminal width is known.
pub fn format_ranking(ranked: &[RankedStudent], width: Option<usize>, use_colors: bool) -> String {
    let mut lines = vec![heading("Student Rankings:", use_colors)];
    if ranked.is_empty() {
        lines.push("No students to rank.".to_string());
        return lines.join("\n");
    }

    for student in ranked {
        let rank_str = format!("Rank {}:", student.rank);
        let total_str = format!(" - {} marks", student.total);
        let fixed_width = rank_str.len() + 1 + total_str.len();

        let name = match width {
            Some(w) if w > fixed_width + 10 => truncate_name(&student.name, w - fixed_width),
            Some(_) => truncate_name(&student.name, 20),
            None => student.name.clone(),
        };

        if use_colors {
            lines.push(format!("{} {}{}", rank_str.dimmed(), name.bold(), total_str));
        } else {
            lines.push(format!("{} {}{}", rank_str, name, total_str));
        }
    }
    lines.join("\n")
}

/// Ranking as tab-separated values for scripting
/// Columns: rank, name, total (no headers, no colors)
pub fn format_ranking_tsv(ranked: &[RankedStudent]) -> String {
    ranked
        .iter()
        .map(|r| format!("{}\t{}\t{}", r.rank, r.name, r.total))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_subject_analysis(breakdowns: &[SubjectBreakdown], use_colors: bool) -> String {
    let mut lines = vec![heading("Topper in Each Subject:", use_colors)];
    for b in breakdowns {
        lines.push(format!(
            "{}: {} with {} marks",
            b.subject,
            format_names(&b.toppers),
            b.top_mark
        ));
    }

    lines.push(heading("Students Below Average in Each Subject:", use_colors));
    for b in breakdowns {
        lines.push(format!("{}: {}", b.subject, names(&b.below_average, use_colors)));
    }
    lines.join("\n")
}

pub fn format_matrix_views(views: &MatrixViews, use_colors: bool) -> String {
    let entries = [
        ("Transposed:", &views.transposed),
        ("Flattened:", &views.flattened),
        ("Raveled:", &views.raveled),
        ("Reshaped:", &views.reshaped),
        ("Resized:", &views.resized),
        ("Swapped Axes:", &views.swapped),
        ("Flattened and Reshaped:", &views.round_trip),
    ];

    let mut lines = vec![heading("Matrix Transformations:", use_colors)];
    for (label, array) in entries {
        lines.push(label.to_string());
        lines.push(array.to_string());
    }
    lines.join("\n")
}

pub fn format_weighted(report: &WeightedReport, decimals: usize, use_colors: bool) -> String {
    let mut lines = Vec::new();
    if report.normalization_notice {
        let notice = "Normalizing weights...";
        if use_colors {
            lines.push(notice.yellow().to_string());
        } else {
            lines.push(notice.to_string());
        }
    }

    lines.push(heading("Weighted Scores:", use_colors));
    for s in &report.scores {
        lines.push(format!("{}: {:.*}", s.name, decimals, s.score));
    }
    lines.join("\n")
}

/// Two lines for the distinction query. Empty when either subject is absent.
pub fn format_pair_distinction(result: Option<&PairDistinction>, use_colors: bool) -> String {
    match result {
        Some(d) => format!(
            "\n{}+ in {}: {}\n{}+ in {} & {}: {}",
            d.threshold,
            d.first_subject,
            names(&d.first_only, use_colors),
            d.threshold,
            d.first_subject,
            d.second_subject,
            names(&d.both, use_colors)
        ),
        None => String::new(),
    }
}

pub fn format_below_in_any(threshold: i64, students: &[String], use_colors: bool) -> String {
    format!("\n<{} in any subject: {}", threshold, names(students, use_colors))
}

pub fn format_subject_filter(
    subject: &str,
    threshold: i64,
    result: &SubjectFilter,
    use_colors: bool,
) -> String {
    match result {
        SubjectFilter::Matches(students) => {
            format!(">= {} in {}: {}", threshold, subject, names(students, use_colors))
        }
        SubjectFilter::NotFound => {
            let msg = "Subject not found!";
            if use_colors {
                msg.red().to_string()
            } else {
                msg.to_string()
            }
        }
    }
}
