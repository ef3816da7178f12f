/// Report formatters for code churn.
///
/// Churn counts are synthetic change events (an added file counts one,
/// a modification two), not line counts.
use super::analyzer::{ChurnImpact, FileChurn};
use crate::metrics::{FileImpact, by_risk};
use crate::report_helpers::{self, pad};

pub fn print_report(files: &[FileChurn], total: usize) {
    if files.is_empty() {
        println!("No file changes found.");
        return;
    }

    let max_churn = files.iter().map(|f| f.churn).max().unwrap_or(0);
    let name_width = report_helpers::max_name_width(files.iter().map(|f| f.filename.as_str()), 4);
    // 1 + 5 + 2 + name + 2 + 6 + 2 + 20
    let separator = report_helpers::separator((name_width + 38).max(78));

    println!("Code Churn (additions + deletions per file)");
    println!("{separator}");
    println!(
        " {:>5}  {}  {:>6}  Relative",
        "Rank",
        pad("File", name_width),
        "Churn"
    );
    println!("{separator}");

    for (i, f) in files.iter().enumerate() {
        let fraction = if max_churn > 0 {
            f.churn as f64 / max_churn as f64
        } else {
            0.0
        };
        println!(
            " {:>5}  {}  {:>6}  {}",
            format!("#{}", i + 1),
            pad(&f.filename, name_width),
            f.churn,
            report_helpers::bar(fraction, 20)
        );
    }

    println!("{separator}");
    if total > files.len() {
        println!("{total} files changed ({shown} shown).", shown = files.len());
    }
}

pub fn print_impact(impact: &[FileImpact<ChurnImpact>]) {
    if impact.is_empty() {
        println!("No code churn impact data to display.");
        return;
    }

    let name_width =
        report_helpers::max_name_width(impact.iter().map(|f| f.filename.as_str()), 4);
    let separator = report_helpers::separator((name_width + 50).max(78));

    println!("Code Churn Impact");
    println!("{separator}");
    println!(
        " {}  {:>10}  {:>8}  {:>10}  {:>10}",
        pad("File", name_width),
        "Historical",
        "Current",
        "Percentile",
        "Risk"
    );
    println!("{separator}");

    for f in by_risk(impact, |m| m.risk) {
        match &f.metrics {
            None => println!(
                " {}  {:>10}  {:>8}  {:>10}  {:>10}",
                pad(&f.filename, name_width),
                "-",
                "-",
                "-",
                "NEW FILE"
            ),
            Some(m) => println!(
                " {}  {:>10}  {:>8}  {:>9.1}%  {:>10}",
                pad(&f.filename, name_width),
                m.historical_churn,
                m.current_churn,
                m.churn_percentile * 100.0,
                m.risk.label()
            ),
        }
    }
    println!("{separator}");
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
