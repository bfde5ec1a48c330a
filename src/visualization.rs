//! HTML report generation for the algorithm comparison.
//!
//! Generate a self-contained HTML file with embedded
//! [Plotly.js](https://plotly.com/javascript/) charts for offline viewing
//! of a comparison run.
//!
//! # Charts included
//!
//! | Chart | Description |
//! |---|---|
//! | **GA sweep (fitness threshold)** | Fitness history per tuple, line width keyed to population |
//! | **GA sweep (max generations)** | Same, for the max-generations sweep |
//! | **Simulated annealing** | Fitness history, linear vs logarithmic cooling |
//! | **Tabu search** | Fitness history, bounded vs unlimited tabu list |
//! | **Algorithm comparison** | Fitness history of the best run per algorithm |
//! | **Execution times** | Bar chart of wall-clock time per algorithm |
//!
//! The output is a single HTML file that can be opened in any browser. An
//! internet connection is needed on first load to fetch `Plotly.js` from a
//! CDN.

use core::fmt::Write as _;
use std::path::Path;

use crate::error::{Error, Result};
use crate::report::{group_by_line_weight, ComparisonSet};
use crate::sweep::AnnotatedResult;

/// Everything the report renders, already shaped by the aggregation step.
///
/// Assembled once by the driver after all runs complete; read-only here.
#[derive(Clone, Debug, Default)]
pub struct ReportInputs {
    /// GA sweep results under fitness-threshold termination, in sweep order.
    pub ga_fitness_threshold: Vec<AnnotatedResult>,
    /// GA sweep results under max-generations termination, in sweep order.
    pub ga_max_generations: Vec<AnnotatedResult>,
    /// Named simulated-annealing runs (one per cooling schedule).
    pub annealing: ComparisonSet,
    /// Named tabu-search runs (bounded and unlimited list).
    pub tabu: ComparisonSet,
    /// Best run per algorithm, for the cross-algorithm chart.
    pub comparison: ComparisonSet,
    /// Display name and wall-clock milliseconds per algorithm, in order.
    pub execution_times: Vec<(String, f64)>,
}

/// Generate the comparison report with interactive Plotly.js charts.
///
/// Chart sections whose inputs are empty are omitted.
///
/// # Errors
///
/// Returns [`Error::Report`] if the file cannot be written.
pub fn generate_html_report(inputs: &ReportInputs, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let html = build_html(inputs);
    std::fs::write(path, html).map_err(|source| Error::Report {
        path: path.to_path_buf(),
        source,
    })
}

fn build_html(inputs: &ReportInputs) -> String {
    let mut html = String::with_capacity(8192);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Subset-Sum Algorithm Comparison</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #f5f6fa; color: #2c3e50; padding: 24px; }}
  h1 {{ text-align: center; margin-bottom: 8px; font-size: 1.8em; }}
  .subtitle {{ text-align: center; color: #7f8c8d; margin-bottom: 24px; }}
  .chart {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            margin-bottom: 24px; padding: 16px; }}
  .chart-title {{ font-size: 1.1em; font-weight: 600; margin-bottom: 8px; }}
</style>
</head>
<body>
<h1>Subset-Sum Algorithm Comparison</h1>
<p class="subtitle">{n} algorithms compared</p>
"#,
        n = inputs.comparison.len(),
    );

    if !inputs.ga_fitness_threshold.is_empty() {
        html.push_str("<div class=\"chart\"><div class=\"chart-title\">Genetic Algorithm Fitness History (Fitness Threshold)</div><div id=\"ga-threshold\"></div></div>\n");
        write_sweep_chart(&mut html, "ga-threshold", &inputs.ga_fitness_threshold);
    }

    if !inputs.ga_max_generations.is_empty() {
        html.push_str("<div class=\"chart\"><div class=\"chart-title\">Genetic Algorithm Fitness History (Max Generations)</div><div id=\"ga-generations\"></div></div>\n");
        write_sweep_chart(&mut html, "ga-generations", &inputs.ga_max_generations);
    }

    if !inputs.annealing.is_empty() {
        html.push_str("<div class=\"chart\"><div class=\"chart-title\">Simulated Annealing Fitness History</div><div id=\"annealing\"></div></div>\n");
        write_history_chart(&mut html, "annealing", &inputs.annealing);
    }

    if !inputs.tabu.is_empty() {
        html.push_str("<div class=\"chart\"><div class=\"chart-title\">Tabu Search Fitness History</div><div id=\"tabu\"></div></div>\n");
        write_history_chart(&mut html, "tabu", &inputs.tabu);
    }

    if !inputs.comparison.is_empty() {
        html.push_str("<div class=\"chart\"><div class=\"chart-title\">Comparison of Algorithms Fitness History</div><div id=\"comparison\"></div></div>\n");
        write_history_chart(&mut html, "comparison", &inputs.comparison);
    }

    if !inputs.execution_times.is_empty() {
        html.push_str("<div class=\"chart\"><div class=\"chart-title\">Execution Times of Algorithms</div><div id=\"timings\"></div></div>\n");
        write_timing_chart(&mut html, &inputs.execution_times);
    }

    html.push_str("</body>\n</html>\n");
    html
}

// ---------------------------------------------------------------------------
// Chart generators
// ---------------------------------------------------------------------------

/// One fitness-history line per sweep tuple, width keyed to population.
///
/// Traces are emitted weight group by weight group (sweep order within a
/// group), so lines of equal thickness sit together in the legend.
fn write_sweep_chart(html: &mut String, div_id: &str, results: &[AnnotatedResult]) {
    let mut traces = String::new();
    for (weight, members) in group_by_line_weight(results) {
        let width = weight.width_px();
        for annotated in members {
            let Some(history) = annotated.result.fitness_history.as_deref() else {
                continue;
            };
            let _ = write!(
                traces,
                r#"{{ y: {history:?}, mode: "lines", type: "scatter", name: "{label}",
               line: {{ width: {width} }} }},"#,
                label = escape_js(&annotated.params.to_string()),
            );
        }
    }
    if traces.is_empty() {
        return;
    }

    write_line_plot(html, div_id, &traces);
}

/// One fitness-history line per named result. Entries without a history
/// (one-shot solvers) are skipped.
fn write_history_chart(html: &mut String, div_id: &str, set: &ComparisonSet) {
    let mut traces = String::new();
    for (name, result) in set.entries() {
        let Some(history) = result.fitness_history.as_deref() else {
            tracing::debug!(%name, "no fitness history, omitted from chart");
            continue;
        };
        let _ = write!(
            traces,
            r#"{{ y: {history:?}, mode: "lines", type: "scatter", name: "{label}" }},"#,
            label = escape_js(name),
        );
    }
    if traces.is_empty() {
        return;
    }

    write_line_plot(html, div_id, &traces);
}

fn write_line_plot(html: &mut String, div_id: &str, traces: &str) {
    let _ = write!(
        html,
        r#"<script>
Plotly.newPlot("{div_id}", [{traces}],
  {{ xaxis: {{ title: "Iteration" }}, yaxis: {{ title: "Fitness" }},
     margin: {{ t: 10 }}, showlegend: true }},
  {{ responsive: true }});
</script>
"#,
    );
}

fn write_timing_chart(html: &mut String, times: &[(String, f64)]) {
    let names: Vec<String> = times
        .iter()
        .map(|(n, _)| format!("\"{}\"", escape_js(n)))
        .collect();
    let values: Vec<f64> = times.iter().map(|(_, t)| *t).collect();

    let _ = write!(
        html,
        r##"<script>
Plotly.newPlot("timings", [{{
  x: [{names}], y: {values:?}, type: "bar",
  marker: {{ color: "#3498db" }}
}}], {{ xaxis: {{ title: "Algorithm", tickangle: -45 }}, yaxis: {{ title: "Time (ms)" }},
       margin: {{ t: 10, b: 120 }} }},
   {{ responsive: true }});
</script>
"##,
        names = names.join(","),
    );
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
