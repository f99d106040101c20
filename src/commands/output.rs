//! Report rendering for human and JSON output

use std::fmt;

use serde_json::json;

use chatsum_core::keywords::KeywordScore;
use chatsum_core::summary::SummaryReport;
use chatsum_core::transcript::Transcript;

/// A summarized file together with its parsed turns
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: String,
    pub transcript: Transcript,
    pub report: SummaryReport,
}

/// Render the human-readable report block for one file
pub fn render_human(file_report: &FileReport, show_messages: bool) -> String {
    HumanReport {
        file_report,
        show_messages,
    }
    .to_string()
}

/// Human-readable layout of one [`FileReport`]
struct HumanReport<'a> {
    file_report: &'a FileReport,
    show_messages: bool,
}

impl fmt::Display for HumanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FileReport {
            file,
            transcript,
            report,
        } = self.file_report;

        writeln!(f, "📄 File: {}", file)?;

        if self.show_messages {
            writeln!(f, "👤 User Messages:")?;
            for msg in &transcript.user_turns {
                writeln!(f, "  - {}", msg)?;
            }
            writeln!(f, "🤖 AI Messages:")?;
            for msg in &transcript.ai_turns {
                writeln!(f, "  - {}", msg)?;
            }
        }

        let counts = report.message_counts;
        writeln!(f, "🔁 Number of Exchanges: {}", report.exchange_count)?;
        writeln!(
            f,
            "💬 Messages: {} from User, {} from AI, {} total",
            counts.user, counts.ai, counts.total
        )?;
        writeln!(
            f,
            "🔑 Top Keywords (frequency): {}",
            keyword_list(&report.frequency_keywords, |count| count.to_string())
        )?;
        writeln!(
            f,
            "📊 Top Keywords (TF-IDF): {}",
            keyword_list(&report.tfidf_keywords, |score| format!("{:.3}", score))
        )?;
        writeln!(f, "📝 Summary: {}", report.summary)
    }
}

fn keyword_list<S>(
    keywords: &[KeywordScore<S>],
    score: impl Fn(&S) -> String,
) -> String {
    if keywords.is_empty() {
        return "none".to_string();
    }
    keywords
        .iter()
        .map(|k| format!("{} ({})", k.term, score(&k.score)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the JSON object for one file
pub fn report_json(file_report: &FileReport, show_messages: bool) -> serde_json::Value {
    let report = &file_report.report;
    let mut obj = json!({
        "file": file_report.file,
        "exchange_count": report.exchange_count,
        "message_counts": report.message_counts,
        "frequency_keywords": report.frequency_keywords,
        "tfidf_keywords": report.tfidf_keywords,
        "summary": report.summary,
    });

    if show_messages {
        if let Some(map) = obj.as_object_mut() {
            map.insert(
                "messages".to_string(),
                json!({
                    "user": file_report.transcript.user_turns,
                    "ai": file_report.transcript.ai_turns,
                }),
            );
        }
    }

    obj
}
