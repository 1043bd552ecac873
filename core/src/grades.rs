//! Assignment model and summary math for the companion grade generator,
//! which produces the `grades.csv` files the archiver later picks up.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Assignment category: formative or summative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Fa,
    Sa,
}

impl Category {
    /// Accepts `fa`/`FA`/`sa`/`SA` with surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "FA" => Some(Category::Fa),
            "SA" => Some(Category::Sa),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Fa => "FA",
            Category::Sa => "SA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub category: Category,
    /// 0 to 100.
    pub grade: f64,
    /// Strictly positive.
    pub weight: f64,
}

impl Assignment {
    pub fn weighted_score(&self) -> f64 {
        self.grade / 100.0 * self.weight
    }
}

/// Aggregated totals over one set of assignments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub fa_weight: f64,
    pub sa_weight: f64,
    pub fa_total: f64,
    pub sa_total: f64,
}

impl Summary {
    pub fn of(assignments: &[Assignment]) -> Self {
        let mut summary = Summary::default();
        for a in assignments {
            match a.category {
                Category::Fa => {
                    summary.fa_weight += a.weight;
                    summary.fa_total += a.weighted_score();
                }
                Category::Sa => {
                    summary.sa_weight += a.weight;
                    summary.sa_total += a.weighted_score();
                }
            }
        }
        summary
    }

    pub fn final_grade(&self) -> f64 {
        self.fa_total + self.sa_total
    }

    /// Final grade projected onto a 5-point scale.
    pub fn gpa(&self) -> f64 {
        self.final_grade() / 100.0 * 5.0
    }

    /// Each category with any weight must reach half of it.
    pub fn passed(&self) -> bool {
        let fa_pass = self.fa_weight == 0.0 || self.fa_total >= 0.5 * self.fa_weight;
        let sa_pass = self.sa_weight == 0.0 || self.sa_total >= 0.5 * self.sa_weight;
        fa_pass && sa_pass
    }
}

pub const CSV_HEADER: &str = "Assignment,Category,Grade,Weight";

/// Renders the assignment table as CSV, two decimals on the numeric columns.
pub fn to_csv(assignments: &[Assignment]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for a in assignments {
        out.push_str(&quote_field(&a.name));
        out.push(',');
        out.push_str(a.category.label());
        out.push_str(&format!(",{:.2},{:.2}\n", a.grade, a.weight));
    }
    out
}

pub fn write_csv(assignments: &[Assignment], path: &Path) -> io::Result<()> {
    fs::write(path, to_csv(assignments))
}

/// Double-quotes a field holding a comma, quote, or newline, doubling any
/// embedded quotes.
fn quote_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
