// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Console output formatters for simulation results.

use anyhow::Result;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, presets::UTF8_FULL};
use fluxion_occupancy::{DailyTotal, SimulationSummary};

/// Formatter for the savings report
#[derive(Debug)]
pub struct ConsoleFormatter;

/// Formatter for pretty ASCII tables
#[derive(Debug)]
pub struct TableFormatter;

impl ConsoleFormatter {
    /// Human-readable savings report, two decimals for every quantity
    pub fn format_summary(summary: &SimulationSummary, output_dir: &str) -> String {
        let mut output = String::new();

        output.push_str("\n=== RESULTADOS DA SIMULAÇÃO IoT ===\n\n");
        output.push_str(&format!(
            "Consumo antes: {:.2} kWh/mês\n",
            summary.total_before_kwh
        ));
        output.push_str(&format!(
            "Consumo depois: {:.2} kWh/mês\n",
            summary.total_after_kwh
        ));
        output.push_str(&format!("Economia: {:.2} kWh/mês\n", summary.savings_kwh));
        output.push_str(&format!(
            "Redução de CO2: {:.2} kg/mês\n",
            summary.savings_co2_kg
        ));
        output.push_str(&format!(
            "Economia financeira: R$ {:.2}/mês\n",
            summary.savings_currency
        ));
        output.push_str(&format!("\nArquivos gerados em: {output_dir}/\n"));

        output
    }

    /// Summary as pretty-printed JSON
    pub fn format_json(summary: &SimulationSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}

impl TableFormatter {
    /// Daily before/after totals as a table, best saving day highlighted
    pub fn format_daily(totals: &[DailyTotal]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Dia").add_attribute(Attribute::Bold),
            Cell::new("Antes\n(kWh)").add_attribute(Attribute::Bold),
            Cell::new("Depois\n(kWh)").add_attribute(Attribute::Bold),
            Cell::new("Economia\n(kWh)").add_attribute(Attribute::Bold),
        ]);

        let best = totals
            .iter()
            .max_by(|a, b| a.savings_kwh().total_cmp(&b.savings_kwh()))
            .map(|day| day.date);

        for day in totals {
            let date_cell = if Some(day.date) == best {
                Cell::new(day.date.format("%Y-%m-%d"))
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new(day.date.format("%Y-%m-%d"))
            };

            table.add_row(vec![
                date_cell,
                Cell::new(format!("{:.2}", day.before_kwh)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", day.after_kwh)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", day.savings_kwh())).set_alignment(CellAlignment::Right),
            ]);
        }

        let mut output = table.to_string();
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summary() -> SimulationSummary {
        SimulationSummary {
            region: "Sudeste".to_owned(),
            class_label: "Comercial".to_owned(),
            month_label: "2024-09".to_owned(),
            total_before_kwh: 800.0,
            total_after_kwh: 512.3451,
            savings_kwh: 287.6551,
            savings_co2_kg: 28.76551,
            savings_currency: 230.12408,
        }
    }

    #[test]
    fn test_report_uses_two_decimals_and_currency_prefix() {
        let report = ConsoleFormatter::format_summary(&summary(), "resultados_iot");

        assert!(report.contains("=== RESULTADOS DA SIMULAÇÃO IoT ==="));
        assert!(report.contains("Consumo antes: 800.00 kWh/mês"));
        assert!(report.contains("Consumo depois: 512.35 kWh/mês"));
        assert!(report.contains("Economia: 287.66 kWh/mês"));
        assert!(report.contains("Redução de CO2: 28.77 kg/mês"));
        assert!(report.contains("Economia financeira: R$ 230.12/mês"));
        assert!(report.contains("Arquivos gerados em: resultados_iot/"));
    }

    #[test]
    fn test_json_summary_fields() {
        let json = ConsoleFormatter::format_json(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["region"], "Sudeste");
        assert_eq!(value["month_label"], "2024-09");
        assert!((value["total_before_kwh"].as_f64().unwrap() - 800.0).abs() < 1e-9);
        assert!((value["savings_currency"].as_f64().unwrap() - 230.12408).abs() < 1e-9);
    }

    #[test]
    fn test_daily_table_lists_every_day() {
        let totals = vec![
            DailyTotal {
                date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                before_kwh: 13.3,
                after_kwh: 11.0,
            },
            DailyTotal {
                date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
                before_kwh: 32.4,
                after_kwh: 20.1,
            },
        ];

        let table = TableFormatter::format_daily(&totals);

        assert!(table.contains("2024-09-01"));
        assert!(table.contains("2024-09-02"));
        assert!(table.contains("12.30"));
    }
}
