use crate::core::BonusReport;
use crate::domain::model::Worker;

/// pt-BR currency, e.g. `R$ 1.234,56` and `-R$ 20,00`.
pub fn format_brl(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit as char);
    }

    let negative = value < 0.0 && fixed != "0.00";
    format!("{}R$ {},{}", if negative { "-" } else { "" }, grouped, frac_part)
}

/// Report lines for people: same shape as the data lines, bonus in pt-BR currency.
pub fn display_lines(report: &BonusReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.entries().len() + 2);
    lines.extend(BonusReport::header());
    lines.extend(report.entries().iter().map(|entry| {
        format!(
            "Nome: {}; Dependentes: {}; Bonus: {}",
            entry.name,
            entry.dependents,
            format_brl(entry.bonus)
        )
    }));
    lines
}

pub fn worker_line(worker: &Worker, dependents: usize) -> String {
    format!(
        "{} - {} ({}) salário {} dependentes {}",
        worker.code(),
        worker.name,
        worker.role,
        format_brl(worker.salary),
        dependents
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RecordService, Worker};

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(40.0), "R$ 40,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(-20.0), "-R$ 20,00");
        assert_eq!(format_brl(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_display_lines_use_structured_entries() {
        let mut service = RecordService::new();
        service
            .register(Worker::new(1, "bruno", "Dev", 100000.0), ["X"])
            .unwrap();

        let lines = display_lines(&service.bonus_report());
        assert_eq!(lines[0], "Relatório de Bônus Mensal");
        assert_eq!(lines[2], "Nome: bruno; Dependentes: 1; Bonus: R$ 2.000,00");
    }

    #[test]
    fn test_worker_line() {
        let worker = Worker::new(7, "Ana", "Gerente", 3500.0);
        assert_eq!(
            worker_line(&worker, 2),
            "7 - Ana (Gerente) salário R$ 3.500,00 dependentes 2"
        );
    }
}
