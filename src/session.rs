use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::input::Console;
use crate::output::MENU;
use crate::report::Report;
use crate::verbose_eprintln;

const CHOICE_PROMPT: &str = "Enter your choice (1-7): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BasicAnalytics,
    StudentRanking,
    SubjectAnalysis,
    MatrixOperations,
    WeightedScores,
    AdvancedQueries,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; anything other than 1-7 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::BasicAnalytics),
            "2" => Some(Self::StudentRanking),
            "3" => Some(Self::SubjectAnalysis),
            "4" => Some(Self::MatrixOperations),
            "5" => Some(Self::WeightedScores),
            "6" => Some(Self::AdvancedQueries),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Show the menu until the user exits or input ends.
///
/// Unknown choices and unknown subjects are reported and the loop continues;
/// malformed numbers end the session with an error.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    report: &Report<'_>,
    config: &Config,
) -> Result<()> {
    loop {
        console.say(MENU)?;
        let Some(input) = console.read_line(CHOICE_PROMPT)? else {
            verbose_eprintln!("End of input, leaving menu");
            console.say("\nExiting...")?;
            return Ok(());
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Exit) => {
                console.say("Exiting...")?;
                return Ok(());
            }
            Some(choice) => {
                verbose_eprintln!("Menu choice: {:?}", choice);
                run_choice(console, report, config, choice)?;
            }
            None => console.say("Invalid choice. Please select 1-7.")?,
        }
    }
}

fn run_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    report: &Report<'_>,
    config: &Config,
    choice: MenuChoice,
) -> Result<()> {
    let text = match choice {
        MenuChoice::BasicAnalytics => report.basic_analytics(),
        MenuChoice::StudentRanking => report.ranking(),
        MenuChoice::SubjectAnalysis => report.subject_analysis(),
        MenuChoice::MatrixOperations => report.matrix_operations()?,
        MenuChoice::WeightedScores => {
            let weights = prompt_weights(console, report, config)?;
            report.weighted_scores(&weights)?
        }
        MenuChoice::AdvancedQueries => {
            console.say(&report.fixed_queries())?;
            custom_filter(console, report)?
        }
        MenuChoice::Exit => return Ok(()),
    };
    console.say(&text)
}

/// One weight per subject. Configured weights are offered as defaults when
/// there is one per subject.
fn prompt_weights<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    report: &Report<'_>,
    config: &Config,
) -> Result<Vec<f64>> {
    let subjects = report.gradebook().subjects();
    let defaults = config
        .weights
        .as_ref()
        .filter(|w| w.len() == subjects.len());

    let mut weights = Vec::with_capacity(subjects.len());
    for (i, subject) in subjects.iter().enumerate() {
        let weight = match defaults {
            Some(defaults) => {
                let input = console.prompt_with_default(
                    &format!("Enter weight for {} (%)", subject),
                    &defaults[i].to_string(),
                )?;
                input
                    .parse::<f64>()
                    .with_context(|| format!("Invalid weight '{}' for {}", input, subject))?
            }
            None => console.prompt_parse::<f64>(&format!("Enter weight for {} (%): ", subject))?,
        };
        weights.push(weight);
    }
    Ok(weights)
}

fn custom_filter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    report: &Report<'_>,
) -> Result<String> {
    let subject = console.prompt("\nEnter subject for custom filter: ")?;
    if !report.has_subject(&subject) {
        return Ok(report.subject_not_found(&subject));
    }
    let threshold: i64 = console.prompt_parse(&format!("Threshold for {}: ", subject))?;
    Ok(report.subject_filter(&subject, threshold))
}
