// src/export/chart.rs

use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::models::summary::PeriodBucket;
use crate::utils::formatting::money;
use std::path::Path;
use svg::Document;
use svg::node::Text as TextNode;
use svg::node::element::{Group, Line, Rectangle, Text};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGIN: f64 = 60.0;
const GROSS_COLOR: &str = "lightblue";
const NET_COLOR: &str = "darkblue";

/// Grouped bar chart (gross next to net) of a bucket sequence.
///
/// Net values below zero are drawn under the baseline. The y axis carries no
/// tick labels; each bar has its value printed on it instead.
pub fn render_chart(buckets: &[PeriodBucket], period: Period, currency: &str) -> Document {
    let plot_w = WIDTH - 2.0 * MARGIN;
    let plot_h = HEIGHT - 2.0 * MARGIN;

    let max = buckets
        .iter()
        .flat_map(|b| [b.total_gross, b.net_pay])
        .fold(0.0_f64, f64::max);
    let min = buckets
        .iter()
        .map(|b| b.net_pay)
        .fold(0.0_f64, f64::min);
    let span = if max - min > 0.0 { max - min } else { 1.0 };

    let to_y = |v: f64| MARGIN + (max - v) / span * plot_h;
    let baseline = to_y(0.0);

    let mut doc = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .add(
            Rectangle::new()
                .set("width", WIDTH)
                .set("height", HEIGHT)
                .set("fill", "white"),
        )
        .add(label(
            WIDTH / 2.0,
            MARGIN / 2.0,
            &format!("Earnings by {}", period),
            18,
        ));

    let slot = if buckets.is_empty() {
        plot_w
    } else {
        plot_w / buckets.len() as f64
    };
    let bar_w = slot * 0.35;

    for (i, b) in buckets.iter().enumerate() {
        let x0 = MARGIN + i as f64 * slot + slot * 0.15;

        for (j, (value, color)) in [(b.total_gross, GROSS_COLOR), (b.net_pay, NET_COLOR)]
            .into_iter()
            .enumerate()
        {
            let x = x0 + j as f64 * bar_w;
            let top = to_y(value.max(0.0));
            let bottom = to_y(value.min(0.0));

            doc = doc
                .add(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", top)
                        .set("width", bar_w)
                        .set("height", (bottom - top).max(0.5))
                        .set("fill", color),
                )
                .add(label(x + bar_w / 2.0, top - 4.0, &money(value, currency), 11));
        }

        doc = doc.add(label(x0 + bar_w, HEIGHT - MARGIN / 2.0, &b.label(), 12));
    }

    doc.add(
        Line::new()
            .set("x1", MARGIN)
            .set("x2", WIDTH - MARGIN)
            .set("y1", baseline)
            .set("y2", baseline)
            .set("stroke", "black")
            .set("stroke-width", 1.5),
    )
    .add(legend(WIDTH - MARGIN - 170.0, MARGIN))
}

pub fn write_chart(
    buckets: &[PeriodBucket],
    period: Period,
    currency: &str,
    path: &Path,
) -> AppResult<()> {
    let doc = render_chart(buckets, period, currency);
    svg::save(path, &doc).map_err(|e| AppError::Export(format!("SVG: {e}")))
}

fn label(x: f64, y: f64, s: &str, size: u32) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("font-family", "Helvetica, Arial, sans-serif")
        .set("font-size", size)
        .set("text-anchor", "middle")
        .add(TextNode::new(s))
}

fn legend(x: f64, y: f64) -> Group {
    let mut g = Group::new();
    for (i, (name, color)) in [("Gross Earnings", GROSS_COLOR), ("Net Earnings", NET_COLOR)]
        .into_iter()
        .enumerate()
    {
        let row_y = y + i as f64 * 18.0;
        g = g
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", row_y - 10.0)
                    .set("width", 12)
                    .set("height", 12)
                    .set("fill", color),
            )
            .add(
                Text::new()
                    .set("x", x + 18.0)
                    .set("y", row_y)
                    .set("font-family", "Helvetica, Arial, sans-serif")
                    .set("font-size", 12)
                    .add(TextNode::new(name)),
            );
    }
    g
}
