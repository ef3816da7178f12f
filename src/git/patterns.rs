//! Filename filter applied to both history and working-tree changes.
//!
//! A pattern matches when it equals the filename, when it has the form
//! `*.ext` and the filename ends in `.ext`, or, for any other pattern
//! containing `*`, when the translated regex (`.` escaped, `*` as `.*`)
//! matches at the start of the filename. The regex is anchored only at
//! the start, so `src/*.py` also matches `src/a.pyc`.

use regex::Regex;
use tracing::warn;

enum Rule {
    Exact(String),
    Suffix(String),
    Prefix(Regex),
}

#[derive(Default)]
pub struct FilePatterns {
    rules: Vec<Rule>,
    filtering: bool,
}

impl FilePatterns {
    pub fn new(patterns: &[String]) -> Self {
        let rules = patterns
            .iter()
            .filter_map(|p| {
                if let Some(ext) = p.strip_prefix('*')
                    && ext.starts_with('.')
                    && !ext.contains('*')
                {
                    Some(Rule::Suffix(ext.to_string()))
                } else if p.contains('*') {
                    let translated = p.replace('.', "\\.").replace('*', ".*");
                    match Regex::new(&format!("^(?:{translated})")) {
                        Ok(re) => Some(Rule::Prefix(re)),
                        Err(e) => {
                            warn!("ignoring file pattern {p:?}: {e}");
                            None
                        }
                    }
                } else {
                    Some(Rule::Exact(p.clone()))
                }
            })
            .collect();
        Self {
            rules,
            filtering: !patterns.is_empty(),
        }
    }

    /// True when no patterns were given: every file passes.
    pub fn is_empty(&self) -> bool {
        !self.filtering
    }

    pub fn matches(&self, filename: &str) -> bool {
        if !self.filtering {
            return true;
        }
        self.rules.iter().any(|rule| match rule {
            Rule::Exact(p) => filename == p,
            Rule::Suffix(ext) => filename.ends_with(ext.as_str()),
            Rule::Prefix(re) => re.is_match(filename),
        })
    }
}

#[cfg(test)]
#[path = "patterns_test.rs"]
mod tests;
