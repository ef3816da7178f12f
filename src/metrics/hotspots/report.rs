use super::analyzer::{FileHotspot, HotspotImpact};
use crate::metrics::{FileImpact, by_risk};
use crate::report_helpers::{self, pad};

pub fn print_report(files: &[FileHotspot], total: usize) {
    if files.is_empty() {
        println!("No hotspots found.");
        return;
    }

    let max_score = files.iter().map(|f| f.score).fold(0.0, f64::max);
    let name_width = report_helpers::max_name_width(files.iter().map(|f| f.filename.as_str()), 4);
    // 1 + name + 2 + 8 + 2 + 7 + 2 + 8 + 2 + 16
    let separator = report_helpers::separator((name_width + 48).max(78));

    println!("Hotspots (Changes × Average Change Size)");
    println!("{separator}");
    println!(
        " {}  {:>8}  {:>7}  {:>8}  Level",
        pad("File", name_width),
        "Score",
        "Changes",
        "Avg Size"
    );
    println!("{separator}");

    for f in files {
        let fraction = if max_score > 0.0 { f.score / max_score } else { 0.0 };
        println!(
            " {}  {:>8.1}  {:>7}  {:>8.1}  {}",
            pad(&f.filename, name_width),
            f.score,
            f.changes,
            f.avg_churn,
            report_helpers::bar(fraction, 16)
        );
    }

    println!("{separator}");
    if total > files.len() {
        println!("{total} files changed ({shown} shown).", shown = files.len());
    }
    println!();
    println!("High-score files change often and in large amounts; review changes to them carefully.");
}

pub fn print_impact(impact: &[FileImpact<HotspotImpact>]) {
    if impact.is_empty() {
        println!("No hotspot impact data to display.");
        return;
    }

    let name_width =
        report_helpers::max_name_width(impact.iter().map(|f| f.filename.as_str()), 4);
    let separator = report_helpers::separator((name_width + 56).max(78));

    println!("Hotspot Impact");
    println!("{separator}");
    println!(
        " {}  {:>8}  {:>10}  {:>8}  {:>8}  {:>9}",
        pad("File", name_width),
        "Score",
        "Percentile",
        "Avg Size",
        "Current",
        "Risk"
    );
    println!("{separator}");

    for f in by_risk(impact, |m| m.risk) {
        match &f.metrics {
            None => println!(
                " {}  {:>8}  {:>10}  {:>8}  {:>8}  {:>9}",
                pad(&f.filename, name_width),
                "-",
                "-",
                "-",
                "-",
                "NEW FILE"
            ),
            Some(m) => println!(
                " {}  {:>8.1}  {:>9.1}%  {:>8.1}  {:>8}  {:>9}",
                pad(&f.filename, name_width),
                m.hotspot_score,
                m.score_percentile * 100.0,
                m.avg_change_size,
                m.current_change_size,
                m.risk.label()
            ),
        }
    }
    println!("{separator}");
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
