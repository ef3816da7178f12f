/// Report formatters for change coupling.
///
/// Shows file pairs that change in the same commits, ranked by Jaccard
/// strength, and for each modified file the coupled files a change is
/// likely to need.
use super::analyzer::{CoupledFile, CouplingImpact, CouplingPair};
use crate::metrics::{FileImpact, by_risk};
use crate::report_helpers::{self, pad};

pub fn print_report(pairs: &[CouplingPair], total: usize) {
    if pairs.is_empty() {
        println!("No coupled file pairs found.");
        return;
    }

    let aw = report_helpers::max_name_width(pairs.iter().map(|p| p.file1.as_str()), 6);
    let bw = report_helpers::max_name_width(pairs.iter().map(|p| p.file2.as_str()), 6);
    let separator = report_helpers::separator((aw + bw + 40).max(78));

    println!("Change Coupling (files that change together)");
    println!("{separator}");
    println!(
        " {}  {}  {:>8}  {:>10}  Strength",
        pad("File A", aw),
        pad("File B", bw),
        "Jaccard",
        "Co-Changes"
    );
    println!("{separator}");

    for p in pairs {
        println!(
            " {}  {}  {:>8.2}  {:>10}  {}",
            pad(&p.file1, aw),
            pad(&p.file2, bw),
            p.jaccard,
            p.count,
            report_helpers::bar(p.jaccard, 12)
        );
    }

    println!("{separator}");
    if total > pairs.len() {
        println!("{total} coupled pairs found ({shown} shown).", shown = pairs.len());
    }
}

fn print_coupled(title: &str, files: &[CoupledFile]) {
    if files.is_empty() {
        return;
    }
    println!("   {title}:");
    for c in files.iter().take(5) {
        println!("     {:.2}  {:>4}x  {}", c.strength, c.count, c.file);
    }
}

pub fn print_impact(impact: &[FileImpact<CouplingImpact>]) {
    if impact.is_empty() {
        println!("No change coupling impact data to display.");
        return;
    }

    let separator = report_helpers::separator(78);
    println!("Change Coupling Impact");
    println!("{separator}");

    for f in by_risk(impact, |m| m.risk) {
        let Some(m) = &f.metrics else {
            println!(" {}  NEW FILE", f.filename);
            continue;
        };
        println!(
            " {}  max {:.2}  avg {:.2}  coupled {}  {}",
            f.filename,
            m.max_coupling,
            m.avg_coupling,
            m.total_coupled_files,
            m.risk.label()
        );
        print_coupled("Modified coupled files", &m.coupled_modified);
        print_coupled("Unmodified coupled files", &m.coupled_unmodified);
    }
    println!("{separator}");
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
