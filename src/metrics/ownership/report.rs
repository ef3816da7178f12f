use super::analyzer::{FileOwnership, OwnershipImpact};
use crate::metrics::FileImpact;
use crate::report_helpers::{self, pad};

pub fn print_report(files: &[FileOwnership], total: usize) {
    if files.is_empty() {
        println!("No file changes found.");
        return;
    }

    let name_width = report_helpers::max_name_width(files.iter().map(|f| f.filename.as_str()), 4);
    let owner_width =
        report_helpers::max_name_width(files.iter().map(|f| f.dominant_author.as_str()), 5);
    let separator = report_helpers::separator((name_width + owner_width + 40).max(78));

    println!("Developer Ownership");
    println!("{separator}");
    println!(
        " {}  {}  {:>9}  {:>12}  {:>10}",
        pad("File", name_width),
        pad("Owner", owner_width),
        "Ownership",
        "Contributors",
        "Category"
    );
    println!("{separator}");

    for f in files {
        println!(
            " {}  {}  {:>8.1}%  {:>12}  {:>10}",
            pad(&f.filename, name_width),
            pad(&f.dominant_author, owner_width),
            f.ownership_ratio * 100.0,
            f.contributor_count,
            f.category().label()
        );
    }

    println!("{separator}");
    if total > files.len() {
        println!("{total} files changed ({shown} shown).", shown = files.len());
    }
}

pub fn print_impact(impact: &[FileImpact<OwnershipImpact>]) {
    if impact.is_empty() {
        println!("No developer ownership impact data to display.");
        return;
    }

    let separator = report_helpers::separator(78);
    println!("Developer Ownership Impact");
    println!("{separator}");
    for f in impact {
        let Some(m) = &f.metrics else {
            println!(" {}  NEW FILE", f.filename);
            continue;
        };
        println!(
            " {}  owner {} ({:.1}%)  {} contributors  {}",
            f.filename,
            m.dominant_author,
            m.ownership_ratio * 100.0,
            m.contributor_count,
            m.category.label()
        );
        let top: Vec<String> = m
            .top_contributors
            .iter()
            .map(|(author, n)| format!("{author} ({n})"))
            .collect();
        println!("   Top contributors: {}", top.join(", "));
    }
    println!("{separator}");
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
