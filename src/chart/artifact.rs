//! Renders charts into standalone HTML artifacts.
//!
//! Each artifact embeds the serialized ECharts options of its chart into a
//! self-contained page. Artifacts land in the plot directory under fixed
//! names containing their chart type, which is how the latest-plot endpoint
//! finds them again.

use std::{fs, path::Path};

use charming::Chart;

use crate::{
    Error,
    chart::{
        bar_chart::bar_chart,
        heatmap_chart::heatmap_chart,
        line_chart::line_chart,
        pie_chart::{PieVariant, pie_chart_variants},
        pivot::pivot_by_date_and_category,
    },
    transaction::Transaction,
};

/// The file name of the stacked bar chart artifact.
pub const BAR_PLOT_FILE: &str = "stacked_bar.html";
/// The file name of the pie chart artifact.
pub const PIE_PLOT_FILE: &str = "pie_chart.html";
/// The file name of the line chart artifact.
pub const LINE_PLOT_FILE: &str = "line_chart.html";
/// The file name of the heatmap artifact.
pub const HEATMAP_PLOT_FILE: &str = "heatmap.html";

const ECHARTS_SCRIPT: &str =
    r#"<script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js"></script>"#;

/// Render all four chart artifacts from `transactions` into `plot_dir`.
///
/// Each artifact is written independently: a failed write is logged as a
/// warning and the remaining artifacts are still written. There is no
/// rollback of artifacts that were already written.
pub fn regenerate_plots(transactions: &[Transaction], plot_dir: &Path) {
    let pivot = pivot_by_date_and_category(transactions);

    let pages = [
        (BAR_PLOT_FILE, chart_page("Spending Categories Over Time", &bar_chart(&pivot))),
        (LINE_PLOT_FILE, chart_page("Spending Trends Over Time", &line_chart(&pivot))),
        (HEATMAP_PLOT_FILE, chart_page("Spending Heatmap Over Time", &heatmap_chart(&pivot))),
        (PIE_PLOT_FILE, pie_page("Spending Breakdown by Category", &pie_chart_variants(transactions))),
    ];

    for (file_name, page) in pages {
        if let Err(error) = write_artifact(plot_dir, file_name, &page) {
            tracing::warn!("Could not write chart artifact {file_name}: {error}");
        }
    }
}

/// Wrap a chart's ECharts options in a standalone HTML page.
fn chart_page(title: &str, chart: &Chart) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
{ECHARTS_SCRIPT}
</head>
<body>
<div id="chart" style="width:100%;height:600px;"></div>
<script>
    const chart = echarts.init(document.getElementById("chart"));
    chart.setOption({options});
    window.addEventListener("resize", chart.resize);
</script>
</body>
</html>
"#,
        options = chart.to_string(),
    )
}

/// Wrap the precomputed pie chart variants in a standalone HTML page with a
/// period dropdown.
///
/// Every variant's options are embedded up front; selecting a period only
/// swaps which options are applied to the chart instance.
fn pie_page(title: &str, variants: &[PieVariant]) -> String {
    let options_array = variants
        .iter()
        .map(|variant| variant.chart.to_string())
        .collect::<Vec<_>>()
        .join(",\n");

    let select_options = variants
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            format!(
                r#"<option value="{index}">{label}</option>"#,
                label = variant.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
{ECHARTS_SCRIPT}
</head>
<body>
<select id="period">
{select_options}
</select>
<div id="chart" style="width:100%;height:600px;"></div>
<script>
    const variants = [{options_array}];
    const chart = echarts.init(document.getElementById("chart"));
    const show = (index) => {{
        chart.clear();
        chart.setOption(variants[index]);
    }};
    document.getElementById("period").addEventListener("change", (event) => show(event.target.value));
    window.addEventListener("resize", chart.resize);
    show(0);
</script>
</body>
</html>
"#,
    )
}

/// Write `contents` into the plot directory, creating the directory if needed.
fn write_artifact(plot_dir: &Path, file_name: &str, contents: &str) -> Result<(), Error> {
    fs::create_dir_all(plot_dir).map_err(|error| Error::ArtifactIo(error.to_string()))?;
    fs::write(plot_dir.join(file_name), contents)
        .map_err(|error| Error::ArtifactIo(error.to_string()))
}
