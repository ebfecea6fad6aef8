//! Table formatting for list output
//!
//! Human formats go through `tabled`; TSV and CSV stay single-line per row
//! so they can be piped.

use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::escape_csv;
use crate::cli::OutputFormat;

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Render for a tabular format; JSON and YAML callers serialize their
    /// own data instead
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Tsv => self.delimited("\t", |s| s.replace(['\t', '\n'], " ")),
            OutputFormat::Csv => self.delimited(",", escape_csv),
            OutputFormat::Md => self.build(true),
            _ => self.build(false),
        }
    }

    fn build(&self, markdown: bool) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers.iter().cloned());
        for row in &self.rows {
            builder.push_record(row.iter().cloned());
        }
        let mut table = builder.build();
        if markdown {
            table.with(Style::markdown());
        } else {
            table.with(Style::rounded());
        }
        table.to_string()
    }

    fn delimited(&self, sep: &str, escape: impl Fn(&str) -> String) -> String {
        let mut out = String::new();
        for line in std::iter::once(&self.headers).chain(self.rows.iter()) {
            let cells: Vec<String> = line.iter().map(|c| escape(c)).collect();
            out.push_str(&cells.join(sep));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["Ingredient", "Qty"]);
        table.push(["Egg", "4"]);
        table.push(["Olive Oil, extra", "500"]);
        table
    }

    #[test]
    fn test_tsv() {
        assert_eq!(
            sample().render(OutputFormat::Tsv),
            "Ingredient\tQty\nEgg\t4\nOlive Oil, extra\t500\n"
        );
    }

    #[test]
    fn test_csv_escapes() {
        let out = sample().render(OutputFormat::Csv);
        assert!(out.contains("\"Olive Oil, extra\",500"));
    }

    #[test]
    fn test_markdown_has_header_rule() {
        let out = sample().render(OutputFormat::Md);
        assert!(out.contains("| Ingredient"));
        assert!(out.contains("|---"));
    }
}
