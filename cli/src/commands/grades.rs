use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print};
use archivr_core::grades::{self, Assignment, Category, Summary};

pub fn grades(out: PathBuf, quiet: u8) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let assignments = collect_assignments(&mut lines)?;

    if assignments.is_empty() {
        println!("No assignments were entered. Exiting.");
        return Ok(());
    }

    print_summary(&assignments, quiet);

    grades::write_csv(&assignments, &out)
        .with_context(|| format!("cannot write {}", out.display()))?;
    print::status(format!("Saved CSV to {}", out.display()));
    Ok(())
}

/// Prompt loop; a closed stdin ends entry with whatever was collected.
fn collect_assignments<I>(lines: &mut I) -> anyhow::Result<Vec<Assignment>>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut assignments = Vec::new();
    print::status("Enter assignments. When finished, answer 'n' when asked to add another.");

    loop {
        let Some(name) = prompt_non_empty(lines, "Assignment name:")? else {
            break;
        };
        let Some(category) = prompt_category(lines)? else {
            break;
        };
        let Some(grade) = prompt_float(lines, "Grade (0-100):", 0.0, false, Some(100.0))? else {
            break;
        };
        let Some(weight) = prompt_float(lines, "Weight (positive number):", 0.0, true, None)?
        else {
            break;
        };

        assignments.push(Assignment {
            name,
            category,
            grade,
            weight,
        });

        let Some(again) = prompt(lines, "Add another assignment? (y/n):")? else {
            break;
        };
        if !matches!(again.to_lowercase().as_str(), "y" | "yes" | "") {
            break;
        }
    }

    Ok(assignments)
}

fn prompt<I>(lines: &mut I, text: &str) -> anyhow::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{} ", text.color(colors::PRIMARY));
    io::stdout().flush().context("cannot flush stdout")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("cannot read from stdin")?.trim().to_string())),
        None => Ok(None),
    }
}

fn prompt_non_empty<I>(lines: &mut I, text: &str) -> anyhow::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        let Some(value) = prompt(lines, text)? else {
            return Ok(None);
        };
        if !value.is_empty() {
            return Ok(Some(value));
        }
        print::status("Value cannot be empty. Please try again.");
    }
}

fn prompt_category<I>(lines: &mut I) -> anyhow::Result<Option<Category>>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        let Some(raw) = prompt(lines, "Category (\"FA\" or \"SA\"):")? else {
            return Ok(None);
        };
        if let Some(category) = Category::parse(&raw) {
            return Ok(Some(category));
        }
        print::status("Invalid category. Please enter \"FA\" or \"SA\".");
    }
}

fn prompt_float<I>(
    lines: &mut I,
    text: &str,
    min: f64,
    strict_greater: bool,
    max: Option<f64>,
) -> anyhow::Result<Option<f64>>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        let Some(raw) = prompt(lines, text)? else {
            return Ok(None);
        };
        let value = match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                print::status("Please enter a numeric value.");
                continue;
            }
        };

        if strict_greater && value <= min {
            print::status(format!("Value must be greater than {min}."));
            continue;
        }
        if !strict_greater && value < min {
            print::status(format!("Value must be at least {min}."));
            continue;
        }
        if let Some(max) = max {
            if value > max {
                print::status(format!("Value must be at most {max}."));
                continue;
            }
        }
        return Ok(Some(value));
    }
}

fn print_summary(assignments: &[Assignment], quiet: u8) {
    let summary = Summary::of(assignments);

    print::header("grade summary", quiet);
    for (idx, a) in assignments.iter().enumerate() {
        print::numbered(
            idx + 1,
            &format!(
                "{} [{}] Grade: {:.2} | Weight: {:.2} | Weighted: {:.2}",
                a.name,
                a.category,
                a.grade,
                a.weight,
                a.weighted_score()
            ),
        );
    }

    print::set_key_width("GPA (5-point scale)".len());
    print::aligned_line(
        "FA total",
        format!("{:.2} / {:.2}", summary.fa_total, summary.fa_weight),
    );
    print::aligned_line(
        "SA total",
        format!("{:.2} / {:.2}", summary.sa_total, summary.sa_weight),
    );
    print::aligned_line("Final grade", format!("{:.2}", summary.final_grade()));
    print::aligned_line("GPA (5-point scale)", format!("{:.2}", summary.gpa()));

    let status = if summary.passed() {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    };
    print::aligned_line("Pass status", status);
}
