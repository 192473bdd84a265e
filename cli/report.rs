use sdstats::Stats;

// ============================================================================
// TABLE
// ============================================================================

pub fn render_table(stats: &Stats, precision: usize) -> String {
    let mut rows: Vec<(String, String)> = vec![
        ("Count".to_string(), stats.count.to_string()),
        ("Mean".to_string(), format!("{:.*}", precision, stats.mean)),
        ("Std (population)".to_string(), format!("{:.*}", precision, stats.std)),
        ("CV %".to_string(), format!("{:.*}", precision, stats.cv)),
    ];
    for (label, value) in stats.sd_ranges.iter() {
        rows.push((format!("Mean {label} SD"), format!("{:.*}", precision, value)));
    }

    let name_width = rows.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{mid}{}{right}\n",
            "─".repeat(name_width + 2),
            "─".repeat(value_width + 2)
        )
    };

    let mut out = String::new();
    out.push_str(&rule("┌", "┬", "┐"));
    for (i, (name, value)) in rows.iter().enumerate() {
        // Separate the summary rows from the band rows.
        if i == 4 {
            out.push_str(&rule("├", "┼", "┤"));
        }
        out.push_str(&format!(
            "│ {:<name_width$} │ {:>value_width$} │\n",
            name, value
        ));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

// ============================================================================
// CSV / JSON
// ============================================================================

pub const CSV_HEADER: &str = "count,mean,std,cv,+1,-1,+2,-2,+3,-3";

pub fn render_csv(stats: &Stats, precision: usize) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    csv.push_str(&stats.count.to_string());
    for value in [stats.mean, stats.std, stats.cv] {
        csv.push_str(&format!(",{:.*}", precision, value));
    }
    for (_, value) in stats.sd_ranges.iter() {
        csv.push_str(&format!(",{:.*}", precision, value));
    }
    csv.push('\n');
    csv
}

pub fn render_json(stats: &Stats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdstats::calculate_stats;

    fn reference() -> Stats {
        calculate_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let csv = render_csv(&reference(), 2);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "8,5.00,2.00,40.00,7.00,3.00,9.00,1.00,11.00,-1.00");
    }

    #[test]
    fn test_json_keys_bands_by_label() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&reference()).unwrap()).unwrap();
        assert_eq!(json["mean"], 5.0);
        assert_eq!(json["std"], 2.0);
        assert_eq!(json["cv"], 40.0);
        assert_eq!(json["count"], 8);
        assert_eq!(json["sd_ranges"]["+1"], 7.0);
        assert_eq!(json["sd_ranges"]["-3"], -1.0);
    }

    #[test]
    fn test_json_keeps_non_finite_values_apart() {
        let stats = calculate_stats(&[1.0, f64::INFINITY]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&stats).unwrap()).unwrap();
        assert_eq!(json["mean"], "inf");
        assert_eq!(json["std"], "NaN");
        assert_eq!(json["cv"], "NaN");
        assert_eq!(json["sd_ranges"]["+1"], "NaN");

        let stats = calculate_stats(&[f64::NEG_INFINITY, 1.0]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&stats).unwrap()).unwrap();
        assert_eq!(json["mean"], "-inf");
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_json_infinite_bands() {
        // Finite mean with an infinite spread pushes the bands out to ±inf.
        let stats = calculate_stats(&[-1e308, 1e308, -1e308, 1e308]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert!(stats.std.is_infinite());
        let json: serde_json::Value = serde_json::from_str(&render_json(&stats).unwrap()).unwrap();
        assert_eq!(json["mean"], 0.0);
        assert_eq!(json["std"], "inf");
        assert_eq!(json["sd_ranges"]["+1"], "inf");
        assert_eq!(json["sd_ranges"]["-1"], "-inf");
        assert_eq!(json["cv"], 0.0);
    }

    #[test]
    fn test_table_lists_every_band() {
        let table = render_table(&reference(), 1);
        for label in ["+1", "-1", "+2", "-2", "+3", "-3"] {
            assert!(table.contains(&format!("Mean {label} SD")), "missing band {label}");
        }
        assert!(table.contains("40.0"));
        let widths: Vec<usize> = table.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged table:\n{table}");
    }
}
