//! CSV serialization of analysis reports.
//!
//! Produces the export blob embedded in the JSON response: the frequency
//! table in rank order, a blank separator row, then a statistics section.

use crate::analysis::AnalysisReport;
use csv::WriterBuilder;

/// Errors produced while serializing a report to CSV.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The underlying CSV writer failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    /// The serialized buffer was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes `report` as a CSV blob.
///
/// Layout: a `Word,Frequency` header and one row per top-N entry in rank
/// order, a blank separator row, then a `Statistics` section with the
/// totals, the average word length, the detected language (uppercased), and
/// the number of stop words removed.
pub fn to_csv(report: &AnalysisReport) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer.write_record(["Word", "Frequency"])?;
    for (word, count) in report.word_frequency.entries() {
        let count = count.to_string();
        writer.write_record([word.as_str(), count.as_str()])?;
    }

    // An empty record writes a bare line, separating the two sections.
    writer.write_record(std::iter::empty::<&str>())?;
    writer.write_record(["Statistics", ""])?;

    let total = report.statistics.total_words.to_string();
    writer.write_record(["Total Words", total.as_str()])?;
    let unique = report.statistics.unique_words.to_string();
    writer.write_record(["Unique Words", unique.as_str()])?;
    let avg = report.statistics.avg_word_length.to_string();
    writer.write_record(["Average Word Length", avg.as_str()])?;
    let language = report.language.to_uppercase();
    writer.write_record(["Language", language.as_str()])?;
    let stopwords = report.stopwords_used.to_string();
    writer.write_record(["Stopwords Used", stopwords.as_str()])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
