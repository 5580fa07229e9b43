//! Preprocess, chunk, analyze each chunk, synthesize

use crate::error::AnalyzeError;
use crate::events::ProgressEvent;
use crate::prompts;
use crate::summarizer::Summarizer;
use chrono::{DateTime, Utc};
use logdigest_core::{assemble_with, segments, Config, LogStats};
use serde::{Deserialize, Serialize};

/// Result of a completed analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub summarizer: String,
    pub original_line_count: usize,
    pub total_chunks: usize,
    pub stats: LogStats,
    pub chunk_analyses: Vec<String>,
    pub synthesis: String,
}

impl AnalysisReport {
    pub fn to_markdown(&self) -> String {
        format!(
            "# Log Analysis Report\n\n\
             Generated {} by {} from {} lines in {} chunks.\n\n\
             | total | critical | errors | warnings | info |\n\
             |---|---|---|---|---|\n\
             | {} | {} | {} | {} | {} |\n\n\
             {}\n",
            self.generated_at.to_rfc3339(),
            self.summarizer,
            self.original_line_count,
            self.total_chunks,
            self.stats.total,
            self.stats.critical,
            self.stats.errors,
            self.stats.warnings,
            self.stats.info,
            self.synthesis.trim_end(),
        )
    }
}

/// Drives the staged analysis of one log
pub struct Analyzer<S> {
    summarizer: S,
    config: Config,
}

impl<S: Summarizer> Analyzer<S> {
    pub fn new(summarizer: S, config: Config) -> Self {
        Self { summarizer, config }
    }

    pub fn summarizer(&self) -> &S {
        &self.summarizer
    }

    /// Run every stage, reporting progress through `on_event`.
    ///
    /// Chunks are analyzed strictly one after another. The first summarizer
    /// failure emits an `error` event and stops the run.
    pub async fn run<F>(&self, raw: &str, mut on_event: F) -> Result<AnalysisReport, AnalyzeError>
    where
        F: FnMut(ProgressEvent) + Send,
    {
        on_event(ProgressEvent::Preprocessing {
            message: "Preprocessing log file...".to_string(),
        });
        let processed = assemble_with(raw, &self.config.digest);
        let stats = processed.summary_stats;
        on_event(ProgressEvent::Preprocessed {
            stats,
            message: format!("Preprocessed {} lines", processed.original_line_count),
        });

        let chunks = segments(&processed.processed_text, &self.config.chunk);
        let total_chunks = chunks.len();
        tracing::info!(
            lines = processed.original_line_count,
            chunks = total_chunks,
            summarizer = self.summarizer.name(),
            "starting analysis"
        );
        on_event(ProgressEvent::Chunking {
            total_chunks,
            message: format!("Split into {} chunks for analysis", total_chunks),
        });

        let mut chunk_analyses = Vec::with_capacity(total_chunks);
        for chunk in &chunks {
            on_event(ProgressEvent::Analyzing {
                chunk_index: chunk.index,
                total_chunks,
                message: format!("Analyzing chunk {}/{}...", chunk.index, total_chunks),
            });
            let prompt = prompts::chunk_prompt(chunk.index, total_chunks, &chunk.text);
            let analysis = match self.summarizer.summarize(&prompt).await {
                Ok(analysis) => analysis,
                Err(err) => return Err(fail(&mut on_event, err)),
            };
            tracing::debug!(chunk = chunk.index, chars = analysis.len(), "chunk analyzed");
            on_event(ProgressEvent::ChunkDone {
                chunk_index: chunk.index,
                total_chunks,
                result: analysis.clone(),
            });
            chunk_analyses.push(analysis);
        }

        on_event(ProgressEvent::Synthesizing {
            message: "Synthesizing final report...".to_string(),
        });
        let combined = prompts::combine_analyses(&chunk_analyses);
        let prompt = prompts::synthesis_prompt(
            processed.original_line_count,
            total_chunks,
            &combined,
            &stats,
        );
        let synthesis = match self.summarizer.summarize(&prompt).await {
            Ok(result) => result,
            Err(err) => return Err(fail(&mut on_event, err)),
        };
        on_event(ProgressEvent::Complete {
            result: synthesis.clone(),
            stats,
        });
        tracing::info!(chunks = total_chunks, "analysis complete");

        Ok(AnalysisReport {
            generated_at: Utc::now(),
            summarizer: self.summarizer.name().to_string(),
            original_line_count: processed.original_line_count,
            total_chunks,
            stats,
            chunk_analyses,
            synthesis,
        })
    }

    /// One summarizer call over the raw text, skipping preprocessing
    pub async fn analyze_direct(&self, raw: &str) -> Result<String, AnalyzeError> {
        self.summarizer.summarize(&prompts::direct_prompt(raw)).await
    }
}

fn fail<F: FnMut(ProgressEvent)>(on_event: &mut F, err: AnalyzeError) -> AnalyzeError {
    tracing::warn!(error = %err, "summarizer call failed; aborting analysis");
    on_event(ProgressEvent::Error {
        message: err.user_message(),
    });
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RATE_LIMIT_MESSAGE;
    use async_trait::async_trait;
    use logdigest_core::ChunkConfig;
    use std::sync::Mutex;

    /// Answers every prompt with its call number, failing on request
    struct Scripted {
        calls: Mutex<Vec<String>>,
        fail_on_call: Option<(usize, fn() -> AnalyzeError)>,
    }

    impl Scripted {
        fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on_call: None,
            }
        }

        fn failing_on(call: usize, err: fn() -> AnalyzeError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on_call: Some((call, err)),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Summarizer for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn summarize(&self, prompt: &str) -> Result<String, AnalyzeError> {
            let mut calls = self.calls.lock().unwrap();
            calls.push(prompt.to_string());
            let n = calls.len();
            match self.fail_on_call {
                Some((call, err)) if call == n => Err(err()),
                _ => Ok(format!("analysis {}", n)),
            }
        }
    }

    fn small_chunks() -> Config {
        Config {
            chunk: ChunkConfig {
                target_size: 200,
                overlap: 20,
                max_segments: 8,
                enforce_cap: true,
            },
            ..Config::default()
        }
    }

    fn noisy_log() -> String {
        (0..40)
            .map(|i| format!("ERROR request {} failed with status 500\n", i))
            .collect()
    }

    #[tokio::test]
    async fn test_single_chunk_stage_order() {
        let analyzer = Analyzer::new(Scripted::ok(), Config::default());
        let mut events = Vec::new();
        let raw = "ERROR disk full\nINFO ok\nINFO ok\nINFO ok\nINFO ok\nINFO ok\nINFO ok\n";
        let report = analyzer.run(raw, |e| events.push(e)).await.unwrap();

        let stages: Vec<&str> = events.iter().map(ProgressEvent::stage).collect();
        assert_eq!(
            stages,
            vec![
                "preprocessing",
                "preprocessed",
                "chunking",
                "analyzing",
                "chunk_done",
                "synthesizing",
                "complete"
            ]
        );
        assert_eq!(report.total_chunks, 1);
        assert_eq!(report.stats.errors, 1);
        assert_eq!(report.stats.info, 6);
        assert_eq!(report.chunk_analyses, vec!["analysis 1".to_string()]);
        assert_eq!(report.synthesis, "analysis 2");
        assert_eq!(
            events[1],
            ProgressEvent::Preprocessed {
                stats: report.stats,
                message: "Preprocessed 7 lines".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_chunks_analyzed_in_order() {
        let analyzer = Analyzer::new(Scripted::ok(), small_chunks());
        let mut events = Vec::new();
        let report = analyzer.run(&noisy_log(), |e| events.push(e)).await.unwrap();

        assert!(report.total_chunks > 1);
        let done: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::ChunkDone { chunk_index, .. } => Some(*chunk_index),
                _ => None,
            })
            .collect();
        assert_eq!(done, (1..=report.total_chunks).collect::<Vec<_>>());

        let calls = analyzer.summarizer().calls.lock().unwrap();
        assert_eq!(calls.len(), report.total_chunks + 1);
        let synthesis_prompt = calls.last().unwrap();
        assert!(synthesis_prompt.contains("### Chunk 1 Analysis\nanalysis 1"));
        assert!(synthesis_prompt.contains("\n\n---\n\n### Chunk 2 Analysis\nanalysis 2"));
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_chunks() {
        let summarizer = Scripted::failing_on(2, || AnalyzeError::Other("boom".to_string()));
        let analyzer = Analyzer::new(summarizer, small_chunks());
        let mut events = Vec::new();
        let err = analyzer
            .run(&noisy_log(), |e| events.push(e))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeError::Other(_)));
        assert_eq!(analyzer.summarizer().call_count(), 2);
        assert_eq!(
            events.last(),
            Some(&ProgressEvent::Error {
                message: "AI analysis failed: boom".to_string()
            })
        );
        assert!(!events.iter().any(|e| e.stage() == "synthesizing"));
    }

    #[tokio::test]
    async fn test_rate_limit_during_synthesis() {
        let summarizer =
            Scripted::failing_on(2, || AnalyzeError::RateLimited("quota".to_string()));
        let analyzer = Analyzer::new(summarizer, Config::default());
        let mut events = Vec::new();
        let result = analyzer.run("ERROR x\n", |e| events.push(e)).await;

        assert!(result.is_err());
        assert_eq!(events[events.len() - 2].stage(), "synthesizing");
        assert_eq!(
            events.last(),
            Some(&ProgressEvent::Error {
                message: RATE_LIMIT_MESSAGE.to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_analyze_direct_skips_preprocessing() {
        let analyzer = Analyzer::new(Scripted::ok(), Config::default());
        let result = analyzer.analyze_direct("INFO ok\nINFO ok\n").await.unwrap();
        assert_eq!(result, "analysis 1");
        let calls = analyzer.summarizer().calls.lock().unwrap();
        assert!(calls[0].contains("INFO ok\nINFO ok"));
        assert!(!calls[0].contains("=== LOG DIGEST"));
    }

    #[test]
    fn test_report_markdown() {
        let report = AnalysisReport {
            generated_at: Utc::now(),
            summarizer: "offline".to_string(),
            original_line_count: 7,
            total_chunks: 1,
            stats: LogStats {
                total: 7,
                critical: 0,
                errors: 1,
                warnings: 0,
                info: 6,
            },
            chunk_analyses: vec!["a".to_string()],
            synthesis: "## Summary\nDisk full.\n".to_string(),
        };
        let md = report.to_markdown();
        assert!(md.starts_with("# Log Analysis Report"));
        assert!(md.contains("| 7 | 0 | 1 | 0 | 6 |"));
        assert!(md.ends_with("## Summary\nDisk full.\n"));
    }
}
