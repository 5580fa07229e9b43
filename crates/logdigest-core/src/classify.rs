//! Severity classification by ordered keyword rules

use crate::types::Severity;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

struct SeverityRule {
    severity: Severity,
    pattern: &'static str,
}

// Evaluation order is error, warning, critical. A line mentioning both
// "fail" and "critical" is an error.
const SEVERITY_RULES: &[SeverityRule] = &[
    SeverityRule {
        severity: Severity::Error,
        pattern: r"(?i)(error|fail|fatal|panic|exception|traceback|crashed|abort|segfault|enomem|not enough memory|oom[_-]|kill process|out of memory)",
    },
    SeverityRule {
        severity: Severity::Warning,
        pattern: r"(?i)(warn|deprecated|timeout|retry|refused|denied|unreachable|degraded|slow|latency|overload|backoff)",
    },
    SeverityRule {
        severity: Severity::Critical,
        pattern: r"(?i)(critical|emergency|alert|kernel.*bug|hardware error|data loss|corruption|unrecoverable)",
    },
];

static COMPILED_RULES: OnceLock<Vec<(Severity, Regex)>> = OnceLock::new();

fn rules() -> &'static [(Severity, Regex)] {
    COMPILED_RULES.get_or_init(|| {
        SEVERITY_RULES
            .iter()
            .map(|rule| {
                let re = Regex::new(rule.pattern).expect("severity patterns are valid");
                (rule.severity, re)
            })
            .collect()
    })
}

/// Classify a single line; lines matching no rule are `Info`
pub fn classify(line: &str) -> Severity {
    rules()
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(severity, _)| *severity)
        .unwrap_or(Severity::Info)
}

/// Lines partitioned by severity, original relative order kept per bucket
#[derive(Debug, Clone, Default)]
pub struct ClassifiedBuckets<'a> {
    buckets: BTreeMap<Severity, Vec<&'a str>>,
}

impl<'a> ClassifiedBuckets<'a> {
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut buckets: BTreeMap<Severity, Vec<&'a str>> = BTreeMap::new();
        for line in lines {
            buckets.entry(classify(line)).or_default().push(line);
        }
        Self { buckets }
    }

    pub fn get(&self, severity: Severity) -> &[&'a str] {
        self.buckets
            .get(&severity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.get(severity).len()
    }

    /// Sum of all bucket lengths
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn counts(&self) -> BTreeMap<Severity, usize> {
        Severity::ALL
            .iter()
            .map(|&severity| (severity, self.count(severity)))
            .collect()
    }
}
