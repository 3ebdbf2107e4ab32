//! Redaction rules
//!
//! A [`Rule`] is one `(matcher, accept, rewrite)` step of the pipeline. Each
//! rule scans its input once, left to right, and rewrites the accepted,
//! non-overlapping matches. Rejected matches are copied through untouched and
//! scanning resumes after them.

use super::models::{RedactionCategory, RedactionLog};
use super::protected::ProtectedTermSet;
use crate::domain::{RedactError, Result};
use std::fmt;
use std::ops::Range;

/// Compiled pattern behind a rule
pub enum Matcher {
    /// Linear-time engine, used by every rule that needs no look-around
    Linear(regex::Regex),
    /// Backtracking engine for look-around patterns
    Backtracking(fancy_regex::Regex),
}

impl Matcher {
    /// Compile a pattern with the linear-time engine
    pub fn linear(rule: &'static str, pattern: &str) -> Result<Self> {
        regex::Regex::new(pattern)
            .map(Self::Linear)
            .map_err(|e| RedactError::Pattern {
                rule,
                message: e.to_string(),
            })
    }

    /// Compile a pattern with the backtracking engine
    pub fn backtracking(rule: &'static str, pattern: &str) -> Result<Self> {
        fancy_regex::Regex::new(pattern)
            .map(Self::Backtracking)
            .map_err(|e| RedactError::Pattern {
                rule,
                message: e.to_string(),
            })
    }

    /// Source pattern
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linear(re) => re.as_str(),
            Self::Backtracking(re) => re.as_str(),
        }
    }

    /// Collect every non-overlapping match in `haystack`
    fn candidates<'t>(&self, rule: &'static str, haystack: &'t str) -> Result<Vec<Candidate<'t>>> {
        match self {
            Self::Linear(re) => Ok(re
                .captures_iter(haystack)
                .map(|caps| {
                    let groups = (0..caps.len())
                        .map(|i| caps.get(i).map(|m| m.range()))
                        .collect();
                    Candidate::new(haystack, groups)
                })
                .collect()),
            Self::Backtracking(re) => {
                let mut found = Vec::new();
                for caps in re.captures_iter(haystack) {
                    let caps = caps.map_err(|e| RedactError::Matching {
                        rule,
                        message: e.to_string(),
                    })?;
                    let groups = (0..caps.len())
                        .map(|i| caps.get(i).map(|m| m.start()..m.end()))
                        .collect();
                    found.push(Candidate::new(haystack, groups));
                }
                Ok(found)
            }
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear(re) => f.debug_tuple("Linear").field(&re.as_str()).finish(),
            Self::Backtracking(re) => f.debug_tuple("Backtracking").field(&re.as_str()).finish(),
        }
    }
}

/// One match found by a [`Matcher`], with access to its surrounding text
#[derive(Debug, Clone)]
pub struct Candidate<'t> {
    haystack: &'t str,
    groups: Vec<Option<Range<usize>>>,
}

impl<'t> Candidate<'t> {
    fn new(haystack: &'t str, groups: Vec<Option<Range<usize>>>) -> Self {
        Self { haystack, groups }
    }

    /// Byte range of the whole match
    pub fn range(&self) -> Range<usize> {
        self.group_range(0).unwrap_or(0..0)
    }

    /// Whole matched text
    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.range()]
    }

    /// Byte range of capture group `index` (0 is the whole match)
    pub fn group_range(&self, index: usize) -> Option<Range<usize>> {
        self.groups.get(index).cloned().flatten()
    }

    /// Text of capture group `index` (0 is the whole match)
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.group_range(index).map(|r| &self.haystack[r])
    }

    /// Character immediately before the match
    pub fn char_before(&self) -> Option<char> {
        self.haystack[..self.range().start].chars().next_back()
    }

    /// Character immediately after the match
    pub fn char_after(&self) -> Option<char> {
        self.haystack[self.range().end..].chars().next()
    }

    /// Full line(s) containing the match, without the line terminators
    pub fn line(&self) -> &'t str {
        let range = self.range();
        let start = self.haystack[..range.start]
            .rfind('\n')
            .map_or(0, |i| i + 1);
        let end = self.haystack[range.end..]
            .find('\n')
            .map_or(self.haystack.len(), |i| range.end + i);
        &self.haystack[start..end]
    }
}

/// Decides whether a candidate is masked
pub type AcceptFn = fn(&Candidate<'_>, &ProtectedTermSet) -> bool;

/// Accept every candidate
pub fn accept_all(_candidate: &Candidate<'_>, _protected: &ProtectedTermSet) -> bool {
    true
}

/// How an accepted match is rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace the whole match with the category placeholder
    Whole,
    /// Replace only capture group `n`, keeping the rest of the match
    Group(usize),
    /// Replace the whole match with fixed text
    Fixed(&'static str),
}

/// A single redaction rule
#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    category: RedactionCategory,
    matcher: Matcher,
    accept: AcceptFn,
    rewrite: Rewrite,
    value_group: usize,
    enabled: bool,
}

impl Rule {
    /// Create an enabled rule that masks every whole match
    pub fn new(name: &'static str, category: RedactionCategory, matcher: Matcher) -> Self {
        Self {
            name,
            category,
            matcher,
            accept: accept_all,
            rewrite: Rewrite::Whole,
            value_group: 0,
            enabled: true,
        }
    }

    /// Set the acceptance predicate
    pub fn with_accept(mut self, accept: AcceptFn) -> Self {
        self.accept = accept;
        self
    }

    /// Set the rewrite mode
    pub fn with_rewrite(mut self, rewrite: Rewrite) -> Self {
        self.rewrite = rewrite;
        self
    }

    /// Set which capture group is recorded in the log
    pub fn with_value_group(mut self, group: usize) -> Self {
        self.value_group = group;
        self
    }

    /// Enable or disable the rule
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Rule name, `<pass>.<variant>`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Category logged for accepted matches
    pub fn category(&self) -> RedactionCategory {
        self.category
    }

    /// Underlying matcher
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Whether the rule runs
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Apply the rule to `text`, recording every accepted match in `log`
    pub fn apply(
        &self,
        text: &str,
        protected: &ProtectedTermSet,
        log: &mut RedactionLog,
    ) -> Result<String> {
        if !self.enabled {
            return Ok(text.to_string());
        }

        let candidates = self.matcher.candidates(self.name, text)?;
        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut accepted = 0usize;

        for candidate in &candidates {
            if !(self.accept)(candidate, protected) {
                continue;
            }
            let (Some(value), Some(replacement)) = (
                candidate.group(self.value_group),
                self.replacement(candidate, text),
            ) else {
                continue;
            };

            let range = candidate.range();
            output.push_str(&text[cursor..range.start]);
            output.push_str(&replacement);
            cursor = range.end;

            log.record(self.category, value.trim());
            accepted += 1;
        }
        output.push_str(&text[cursor..]);

        tracing::trace!(
            rule = self.name,
            candidates = candidates.len(),
            accepted,
            "Rule applied"
        );

        Ok(output)
    }

    fn replacement(&self, candidate: &Candidate<'_>, text: &str) -> Option<String> {
        let placeholder = self.category.placeholder();
        match self.rewrite {
            Rewrite::Whole => Some(placeholder.to_string()),
            Rewrite::Fixed(fixed) => Some(fixed.to_string()),
            Rewrite::Group(index) => {
                let whole = candidate.range();
                let group = candidate.group_range(index)?;
                Some(format!(
                    "{}{}{}",
                    &text[whole.start..group.start],
                    placeholder,
                    &text[group.end..whole.end]
                ))
            }
        }
    }
}
