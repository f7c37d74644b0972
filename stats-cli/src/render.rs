use std::fmt::Write;

const BAR_WIDTH: usize = 40;

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Left-aligned plain text table with a header underline.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(width(cell));
        }
    }

    let mut out = String::new();
    write_line(&mut out, &widths, headers.iter().copied());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(&mut out, &widths, rule.iter().map(|v| v.as_str()));
    for row in rows {
        write_line(&mut out, &widths, row.iter().map(|v| v.as_str()));
    }

    out
}

fn write_line<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let parts: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w - width(cell))))
        .collect();
    let _ = writeln!(out, "{}", parts.join("  ").trim_end());
}

/// Horizontal bar chart scaled so the largest value spans the full width.
pub fn bar_chart(title: &str, bars: &[(String, f64)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);

    let label_width = bars.iter().map(|(label, _)| width(label)).max().unwrap_or(0);
    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    for (label, value) in bars {
        let len = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{}{} | {} {:.2}",
            label,
            " ".repeat(label_width - width(label)),
            "█".repeat(len),
            value
        );
    }

    out
}

/// Averages print with two decimals; groups without matches have none.
pub fn average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}
