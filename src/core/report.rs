use crate::domain::model::BonusEntry;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde::Serialize;

pub const REPORT_TITLE: &str = "Relatório de Bônus Mensal";
pub const REPORT_SEPARATOR: &str = "-------------------------";

/// Bonus report in display order. Built by [`crate::core::RecordService::bonus_report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusReport {
    entries: Vec<BonusEntry>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    generated_at: String,
    entries: &'a [BonusEntry],
}

impl BonusReport {
    pub(crate) fn new(entries: Vec<BonusEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[BonusEntry] {
        &self.entries
    }

    pub fn header() -> [String; 2] {
        [REPORT_TITLE.to_string(), REPORT_SEPARATOR.to_string()]
    }

    /// Plain data line. Always two fraction digits and `.` as separator.
    pub fn format_line(entry: &BonusEntry) -> String {
        format!(
            "Nome: {}; Dependentes: {}; Bonus: {:.2}",
            entry.name, entry.dependents, entry.bonus
        )
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.extend(Self::header());
        lines.extend(self.entries.iter().map(Self::format_line));
        lines
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["code", "name", "dependents", "bonus"])?;
        for entry in &self.entries {
            writer.write_record([
                entry.code.to_string(),
                entry.name.clone(),
                entry.dependents.to_string(),
                format!("{:.2}", entry.bonus),
            ])?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    pub fn to_json(&self) -> Result<String> {
        let doc = JsonReport {
            title: REPORT_TITLE,
            generated_at: chrono::Utc::now().to_rfc3339(),
            entries: &self.entries,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

/// Writes one line per entry, each followed by `\n`, replacing any existing content.
pub async fn write_lines<S: Storage>(storage: &S, path: &str, lines: &[String]) -> Result<()> {
    let mut buffer = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        buffer.push_str(line);
        buffer.push('\n');
    }
    storage.write_file(path, buffer.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: i32, name: &str, dependents: usize, bonus: f64) -> BonusEntry {
        BonusEntry {
            code,
            name: name.to_string(),
            dependents,
            bonus,
        }
    }

    #[test]
    fn test_format_line_rounds_to_two_digits() {
        assert_eq!(
            BonusReport::format_line(&entry(1, "Ana", 3, 123.456)),
            "Nome: Ana; Dependentes: 3; Bonus: 123.46"
        );
        assert_eq!(
            BonusReport::format_line(&entry(1, "Ana", 1, -20.0)),
            "Nome: Ana; Dependentes: 1; Bonus: -20.00"
        );
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let report = BonusReport::new(vec![]);
        assert_eq!(report.lines(), vec![REPORT_TITLE, REPORT_SEPARATOR]);
    }

    #[test]
    fn test_to_csv() {
        let report = BonusReport::new(vec![entry(2, "Ana", 0, 0.0), entry(1, "Silva, Bruno", 2, 40.0)]);
        let csv = report.to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "code,name,dependents,bonus");
        assert_eq!(lines[1], "2,Ana,0,0.00");
        assert_eq!(lines[2], "1,\"Silva, Bruno\",2,40.00");
    }

    #[test]
    fn test_to_json() {
        let report = BonusReport::new(vec![entry(1, "bruno", 2, 40.0)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["title"], REPORT_TITLE);
        assert!(value["generated_at"].is_string());
        assert_eq!(value["entries"][0]["name"], "bruno");
        assert_eq!(value["entries"][0]["dependents"], 2);
        assert_eq!(value["entries"][0]["bonus"], 40.0);
    }
}
