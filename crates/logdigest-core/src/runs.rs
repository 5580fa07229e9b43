//! Compression of repetitive consecutive lines

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static TIMESTAMP_RE: OnceLock<Regex> = OnceLock::new();
static HEX_RE: OnceLock<Regex> = OnceLock::new();

/// Shortest threshold that still shortens a run (first, marker, last)
const MIN_RUN_THRESHOLD: usize = 3;

/// Reduce a line to the form used for similarity comparison.
///
/// Hexadecimal-looking tokens of six or more digits become `<HEX>` first,
/// then a leading bracketed numeric timestamp such as `[123.456] ` is
/// stripped. A timestamp with a six-digit component is masked before it can
/// be stripped, so `[10.000000]` and `[11.000013]` stay distinct.
pub fn normalize(line: &str) -> Cow<'_, str> {
    let ts = TIMESTAMP_RE.get_or_init(|| Regex::new(r"^\[\s*\d+(?:\.\d+)?\]\s*").unwrap());
    let hex = HEX_RE.get_or_init(|| Regex::new(r"\b(?:0[xX])?[0-9a-fA-F]{6,}\b").unwrap());

    match hex.replace_all(line, "<HEX>") {
        Cow::Borrowed(masked) => match ts.find(masked) {
            Some(m) => Cow::Borrowed(&masked[m.end()..]),
            None => Cow::Borrowed(masked),
        },
        Cow::Owned(masked) => match ts.find(&masked) {
            Some(m) => Cow::Owned(masked[m.end()..].to_string()),
            None => Cow::Owned(masked),
        },
    }
}

/// A collapsed run of similar lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedRun<'a> {
    pub first: &'a str,
    pub last: &'a str,
    pub omitted: usize,
}

impl CompressedRun<'_> {
    pub fn marker(&self) -> String {
        format!("... [{} similar lines omitted] ...", self.omitted)
    }

    /// Number of input lines the run stands for
    pub fn run_length(&self) -> usize {
        self.omitted + 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunItem<'a> {
    Line(&'a str),
    Run(CompressedRun<'a>),
}

/// Collapse runs of at least `threshold` similar consecutive lines.
///
/// Shorter runs pass through verbatim. Thresholds below 3 are raised to 3.
pub fn compress<'a, S: AsRef<str>>(lines: &'a [S], threshold: usize) -> Vec<RunItem<'a>> {
    let threshold = threshold.max(MIN_RUN_THRESHOLD);
    let mut items = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let head = lines[i].as_ref();
        let key = normalize(head);
        let mut end = i + 1;
        while end < lines.len() && normalize(lines[end].as_ref()) == key {
            end += 1;
        }

        let run_len = end - i;
        if run_len >= threshold {
            items.push(RunItem::Run(CompressedRun {
                first: head,
                last: lines[end - 1].as_ref(),
                omitted: run_len - 2,
            }));
        } else {
            items.extend(lines[i..end].iter().map(|l| RunItem::Line(l.as_ref())));
        }
        i = end;
    }

    items
}

/// Compress and render back to text lines
pub fn compress_lines<S: AsRef<str>>(lines: &[S], threshold: usize) -> Vec<String> {
    let mut out = Vec::new();
    for item in compress(lines, threshold) {
        match item {
            RunItem::Line(line) => out.push(line.to_string()),
            RunItem::Run(run) => {
                out.push(run.first.to_string());
                out.push(run.marker());
                out.push(run.last.to_string());
            }
        }
    }
    out
}
