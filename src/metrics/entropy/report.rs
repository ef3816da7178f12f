use super::analyzer::{EntropyImpact, FileEntropy};
use crate::metrics::FileImpact;
use crate::report_helpers::{self, pad};

pub fn print_report(files: &[FileEntropy], total: usize) {
    if files.is_empty() {
        println!("No file changes found.");
        return;
    }

    let name_width = report_helpers::max_name_width(files.iter().map(|f| f.filename.as_str()), 4);
    let separator = report_helpers::separator((name_width + 40).max(78));

    println!("Change Entropy (spread of changes across authors)");
    println!("{separator}");
    println!(
        " {}  {:>7}  {:>7}  {:>12}",
        pad("File", name_width),
        "Entropy",
        "Changes",
        "Contributors"
    );
    println!("{separator}");

    for f in files {
        println!(
            " {}  {:>7.2}  {:>7}  {:>12}",
            pad(&f.filename, name_width),
            f.entropy,
            f.total_changes,
            f.contributors
        );
    }

    println!("{separator}");
    if total > files.len() {
        println!("{total} files changed ({shown} shown).", shown = files.len());
    }
    println!();
    println!("Entropy is normalized to 0..1; 1 means every author changed the file equally.");
}

pub fn print_impact(impact: &[FileImpact<EntropyImpact>]) {
    if impact.is_empty() {
        println!("No change entropy impact data to display.");
        return;
    }

    let name_width =
        report_helpers::max_name_width(impact.iter().map(|f| f.filename.as_str()), 4);
    let separator = report_helpers::separator((name_width + 36).max(78));

    println!("Change Entropy Impact");
    println!("{separator}");
    println!(
        " {}  {:>7}  {:>12}  {:>10}",
        pad("File", name_width),
        "Entropy",
        "Contributors",
        "Signal"
    );
    println!("{separator}");

    for f in impact {
        match &f.metrics {
            None => println!(
                " {}  {:>7}  {:>12}  {:>10}",
                pad(&f.filename, name_width),
                "-",
                "-",
                "NEW FILE"
            ),
            Some(m) => println!(
                " {}  {:>7.2}  {:>12}  {:>10}",
                pad(&f.filename, name_width),
                m.entropy,
                m.contributors,
                m.signal.label()
            ),
        }
    }
    println!("{separator}");
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
