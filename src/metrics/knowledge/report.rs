use super::analyzer::{KnowledgeImpact, KnowledgeResult};
use crate::metrics::by_risk;
use crate::report_helpers::{self, pad};

pub fn print_report(result: &KnowledgeResult, limit: usize) {
    if result.author_count == 0 {
        println!("No authors found.");
        return;
    }

    let separator = report_helpers::separator(78);
    println!("Knowledge Distribution");
    println!("{separator}");
    println!(" Bus factor:           {}", result.bus_factor);
    println!(" Knowledge redundancy: {:.2} authors per file", result.knowledge_redundancy);
    println!(" Files / authors:      {} / {}", result.file_count, result.author_count);
    println!(" Team risk:            {}", result.team_risk().label());
    println!("{separator}");

    let shown = &result.authors[..limit.min(result.authors.len())];
    let name_width = report_helpers::max_name_width(shown.iter().map(|a| a.author.as_str()), 6);
    let separator = report_helpers::separator((name_width + 46).max(78));

    println!(
        " {}  {:>8}  {:>6}  {:>5}  {:>7}  {:>7}",
        pad("Author", name_width),
        "Coverage",
        "Depth",
        "Owned",
        "Files",
        "Commits"
    );
    println!("{separator}");
    for a in shown {
        println!(
            " {}  {:>7.1}%  {:>6.2}  {:>5}  {:>7}  {:>7}",
            pad(&a.author, name_width),
            a.coverage * 100.0,
            a.depth,
            a.owned_files,
            a.files_changed,
            a.commit_count
        );
    }
    println!("{separator}");
    if result.authors.len() > shown.len() {
        println!(
            "{total} authors found ({shown} shown).",
            total = result.authors.len(),
            shown = shown.len()
        );
    }
}

pub fn print_impact(impact: &KnowledgeImpact) {
    let team = &impact.team;
    let separator = report_helpers::separator(78);
    println!("Knowledge Impact");
    println!("{separator}");
    println!(
        " Team: bus factor {}, redundancy {:.2}, risk {}",
        team.bus_factor,
        team.knowledge_redundancy,
        team.risk.label()
    );

    if impact.files.is_empty() {
        println!("{separator}");
        return;
    }

    let name_width =
        report_helpers::max_name_width(impact.files.iter().map(|f| f.filename.as_str()), 4);
    println!("{separator}");
    for f in by_risk(&impact.files, |m| m.knowledge_risk) {
        let Some(m) = &f.metrics else {
            println!(" {}  NEW FILE", pad(&f.filename, name_width));
            continue;
        };
        println!(
            " {}  owner {} ({:.1}%, depth {:.2})  {} contributors  {}",
            pad(&f.filename, name_width),
            m.dominant_author,
            m.ownership_ratio * 100.0,
            m.author_knowledge_depth,
            m.contributor_count,
            m.knowledge_risk.label()
        );
    }
    println!("{separator}");
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
