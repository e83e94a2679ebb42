//! Report assembly.

use crate::models::signal::SignalEvaluation;

pub const REPORT_HEADER: &str = "📊 *Daily Stock Update*\n\n";
pub const NO_DATA_MESSAGE: &str = "❌ No stock data received.";

/// One ticker block of the report.
pub fn format_line(evaluation: &SignalEvaluation) -> String {
    format!(
        "{}\nPrice: ${:.2}\nRSI: {:.2}\nSignal: {}\n",
        evaluation.symbol,
        evaluation.price,
        evaluation.rsi.rounded(),
        evaluation.signal.label()
    )
}

/// Collects ticker blocks in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, evaluation: &SignalEvaluation) {
        self.lines.push(format_line(evaluation));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The full report, or [`NO_DATA_MESSAGE`] if nothing was pushed.
    pub fn build(&self) -> String {
        if self.lines.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }
        format!("{}{}", REPORT_HEADER, self.lines.join("\n"))
    }
}

impl<'a> FromIterator<&'a SignalEvaluation> for ReportBuilder {
    fn from_iter<I: IntoIterator<Item = &'a SignalEvaluation>>(iter: I) -> Self {
        let mut builder = Self::new();
        for evaluation in iter {
            builder.push(evaluation);
        }
        builder
    }
}
