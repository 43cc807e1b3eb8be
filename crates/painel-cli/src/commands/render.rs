//! Terminal rendering helpers

use painel_core::{ContrastDecision, HexColor, LineChart};

/// Column width per month in the text chart
const COLUMN_WIDTH: usize = 5;

/// A block of the color's background with its hex code in readable text
pub fn swatch(color: &HexColor, contrast: &ContrastDecision, width: usize) -> String {
    let rgb = contrast.rgb;
    let (fr, fg, fb) = if contrast.use_light_text {
        (255, 255, 255)
    } else {
        (0, 0, 0)
    };
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {:^width$} \x1b[0m",
        rgb.r,
        rgb.g,
        rgb.b,
        fr,
        fg,
        fb,
        color.as_str(),
        width = width
    )
}

/// Render the chart as text rows, top row first
///
/// Each dataset is plotted with the first letter of its label; points that
/// coincide are drawn as `*`. The last two rows hold the axis and the month
/// labels, followed by a legend.
pub fn render_line_chart(chart: &LineChart, height: usize) -> Vec<String> {
    let height = height.max(1);
    let max = chart.max_value();
    let level = |v: f64| -> usize {
        if max <= 0.0 {
            0
        } else {
            ((v / max) * (height - 1) as f64).round() as usize
        }
    };

    let mut lines = Vec::with_capacity(height + 3);
    for row in (0..height).rev() {
        let mut line = String::new();
        for i in 0..chart.labels.len() {
            let marks: Vec<char> = chart
                .datasets
                .iter()
                .filter(|d| d.data.get(i).map(|v| level(*v)) == Some(row))
                .filter_map(|d| d.label.chars().next())
                .collect();
            let mark = match marks.as_slice() {
                [] => ' ',
                [one] => *one,
                _ => '*',
            };
            line.push_str(&format!("{:^w$}", mark, w = COLUMN_WIDTH));
        }
        lines.push(format!("│{}", line.trim_end()));
    }

    lines.push(format!(
        "└{}",
        "─".repeat(chart.labels.len() * COLUMN_WIDTH)
    ));
    let labels: String = chart
        .labels
        .iter()
        .map(|l| format!("{:^w$}", l, w = COLUMN_WIDTH))
        .collect();
    lines.push(format!(" {}", labels.trim_end()));

    let legend: Vec<String> = chart
        .datasets
        .iter()
        .map(|d| format!("{} = {}", d.label.chars().next().unwrap_or('?'), d.label))
        .collect();
    lines.push(format!(" {}", legend.join("   ")));

    lines
}
