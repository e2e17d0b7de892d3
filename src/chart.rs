//! Turns a [`Histogram`] into something a person can look at.
//!
//! Both renderers skip the sums that never came up, so the bars of the
//! impossible sums below the minimum don't waste space.

use std::fmt::Write;

use crate::histogram::Histogram;

/// Trials represented by a single `*` in [`star_chart`] unless configured otherwise.
pub const DEFAULT_STAR_UNIT: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ChartStyle {
    /// One row per sum with a bar of `*`.
    #[default]
    Stars,
    /// Vertical bars scaled to the most frequent sum.
    Columns,
}

/// A bar of a scaled bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub sum: u32,
    pub count: u32,
    /// Position of the bar once the empty sums are left out.
    pub column: usize,
    pub height: f64,
}

/// Renders one line per sum that came up: `sum: count\t***`.
///
/// Every star stands for `unit` trials, the remainder is dropped.
pub fn star_chart(histogram: &Histogram, unit: u32) -> String {
    let unit = unit.max(1);
    let sum_width = digits(histogram.len() as u32);
    let count_width = digits(histogram.max_count());

    let mut output = String::new();
    for (sum, count) in histogram.occupied() {
        let stars = "*".repeat((count / unit) as usize);
        // Writing into a String can't fail.
        let _ = writeln!(output, "{sum:>sum_width$}: {count:>count_width$}\t{stars}");
    }
    output
}

/// Scales every sum that came up to a bar, the most frequent one being `height` tall.
pub fn bars(histogram: &Histogram, height: f64) -> Vec<Bar> {
    let max = histogram.max_count();
    if max == 0 {
        return Vec::new();
    }

    histogram
        .occupied()
        .enumerate()
        .map(|(column, (sum, count))| Bar {
            sum,
            count,
            column,
            height: height * count as f64 / max as f64,
        })
        .collect()
}

/// Labels for `ticks + 1` evenly spaced marks on the y axis, starting at 0.
pub fn axis_ticks(histogram: &Histogram, ticks: usize) -> Vec<u32> {
    let ticks = ticks.max(1) as u128;
    let max = histogram.max_count() as u128;
    (0..=ticks).map(|i| (i * max / ticks) as u32).collect()
}

/// Renders vertical bars `rows` lines tall with the sums written underneath.
pub fn column_chart(histogram: &Histogram, rows: usize) -> String {
    let rows = rows.max(1);
    let bars = bars(histogram, rows as f64);
    if bars.is_empty() {
        return String::new();
    }

    let labels = axis_ticks(histogram, rows);
    let label_width = digits(histogram.max_count());
    let column_width = digits(histogram.len() as u32) + 1;

    let mut output = String::new();
    for row in (1..=rows).rev() {
        let _ = write!(output, "{:>label_width$} |", labels[row]);
        for bar in &bars {
            let filled = bar.height.round() as usize >= row;
            let cell = if filled { "#" } else { " " };
            let _ = write!(output, "{cell:>column_width$}");
        }
        output.truncate(output.trim_end().len());
        output.push('\n');
    }

    let _ = writeln!(
        output,
        "{:>label_width$} +{}",
        0,
        "-".repeat(column_width * bars.len())
    );
    let _ = write!(output, "{:>label_width$}  ", "");
    for bar in &bars {
        let _ = write!(output, "{:>column_width$}", bar.sum);
    }
    output.push('\n');
    output
}

fn digits(n: u32) -> usize {
    n.to_string().len()
}
