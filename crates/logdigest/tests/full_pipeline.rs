mod common;

use logdigest_analyze::{Analyzer, OfflineSummarizer, ProgressEvent};
use logdigest_core::{
    assemble, chunk, classify, compress_lines, segments, split_lines, ChunkConfig, ClassifiedBuckets,
    Config, LogStats, Severity,
};

#[test]
fn test_sample_log_end_to_end() {
    let processed = assemble(common::SAMPLE_LOG);
    assert_eq!(
        processed.summary_stats,
        LogStats {
            total: 7,
            critical: 0,
            errors: 1,
            warnings: 0,
            info: 6,
        }
    );
    assert!(processed.processed_text.contains("compressed from 6 to 3"));

    let segs = segments(&processed.processed_text, &ChunkConfig::default());
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].index, 1);
    assert_eq!(segs[0].total, 1);
    assert_eq!(segs[0].text, processed.processed_text);
}

#[test]
fn test_classification_partitions_kernel_log() {
    let log = common::kernel_log(30);
    let lines = split_lines(&log);
    let buckets = ClassifiedBuckets::from_lines(lines.iter().copied());
    assert_eq!(buckets.total(), lines.len());

    // error keywords win over critical ones on the same line
    assert_eq!(
        classify("[  900.200000] EXT4-fs error: data loss suspected on sda1"),
        Severity::Error
    );
    assert_eq!(buckets.count(Severity::Critical), 1);
    assert_eq!(buckets.count(Severity::Error), 2);
    assert_eq!(buckets.count(Severity::Warning), 1);
}

#[test]
fn test_kernel_heartbeats_collapse_despite_timestamps_and_ids() {
    let processed = assemble(&common::kernel_log(30));
    let text = &processed.processed_text;

    // Linux version line + 30 heartbeats -> version, first, marker, last
    assert!(text.contains("=== INFO (31 lines, compressed from 31 to 4) ==="));
    assert!(text.contains("... [28 similar lines omitted] ..."));
    assert!(text.contains("0xdead0000"));
    assert!(text.contains("0xdead001d"));
}

#[test]
fn test_info_section_recompression_is_stable() {
    let processed = assemble(&common::kernel_log(12));
    let info_section: Vec<&str> = processed
        .processed_text
        .split("=== INFO")
        .nth(1)
        .unwrap()
        .lines()
        .skip(1)
        .collect();
    assert_eq!(compress_lines(&info_section, 5), info_section);
}

#[test]
fn test_large_log_bounded_segments_with_overlap() {
    let log = common::large_app_log(2_000_000);
    let processed = assemble(&log);
    assert!(processed.processed_text.len() > 500_000);

    let config = ChunkConfig::default();
    let chunks = chunk(&processed.processed_text, &config);
    assert!(chunks.len() <= config.max_segments);

    for pair in chunks.windows(2) {
        let prev = &pair[0];
        assert!(pair[1].starts_with(&prev[prev.len() - config.overlap..]));
    }
}

#[test]
fn test_five_hundred_thousand_chars_default_chunking() {
    let text: String = common::large_app_log(500_000).chars().take(500_000).collect();
    let chunks = chunk(&text, &ChunkConfig::default());
    assert!(chunks.len() <= 8);
    for pair in chunks.windows(2) {
        let tail = &pair[0][pair[0].len() - 500..];
        assert!(pair[1].starts_with(tail));
    }
}

#[test]
fn test_empty_input_chunks_to_nothing() {
    assert!(chunk("", &ChunkConfig::default()).is_empty());
}

#[tokio::test]
async fn test_offline_analysis_of_kernel_log() {
    let analyzer = Analyzer::new(OfflineSummarizer::default(), Config::default());
    let mut stages = Vec::new();
    let report = analyzer
        .run(&common::kernel_log(20), |event| stages.push(event.stage()))
        .await
        .unwrap();

    assert_eq!(stages.first(), Some(&"preprocessing"));
    assert_eq!(stages.last(), Some(&"complete"));
    assert_eq!(report.stats.critical, 1);
    assert!(report.synthesis.contains("kernel BUG at mm/slub.c:379!"));
    assert!(report.synthesis.contains("Out of memory: Kill process 4242"));
    assert!(!report.synthesis.contains("heartbeat"));
}

#[tokio::test]
async fn test_offline_analysis_multi_chunk_progress() {
    let mut config = Config::default();
    config.chunk = ChunkConfig {
        target_size: 5_000,
        overlap: 200,
        max_segments: 4,
        enforce_cap: true,
    };
    let analyzer = Analyzer::new(OfflineSummarizer::default(), config);
    let mut events = Vec::new();
    let report = analyzer
        .run(&common::large_app_log(200_000), |event| events.push(event))
        .await
        .unwrap();

    assert_eq!(report.total_chunks, 4);
    let analyzing: Vec<(usize, usize)> = events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::Analyzing {
                chunk_index,
                total_chunks,
                ..
            } => Some((*chunk_index, *total_chunks)),
            _ => None,
        })
        .collect();
    assert_eq!(analyzing, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
}
