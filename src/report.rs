//! Formatted terminal summary of a demo run.
//!
//! We keep formatting code in one place so:
//! - the math code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::PanelSet;
use crate::domain::ScatterKind;

/// Format the run summary (dataset stats + fit parameters per panel).
pub fn format_summary(panels: &PanelSet) -> String {
    let config = &panels.config;
    let mut out = String::new();

    out.push_str("=== distviz - Distribution Panels ===\n");

    let scatter_label = match config.scatter {
        ScatterKind::LinearTrend => "linear trend + uniform noise",
        ScatterKind::Parabola => "noisy parabola",
    };
    out.push_str(&format!(
        "Scatter: {} | n={} | seed={}\n",
        scatter_label,
        panels.scatter.x.len(),
        config.scatter_seed,
    ));
    out.push_str(&format!(
        "Best fit: slope={:.4} intercept={:.4}\n",
        panels.scatter.fit.slope, panels.scatter.fit.intercept,
    ));

    out.push_str(&format!(
        "PDF: standard normal over [{:.1}, {:.1}) step {:.2} ({} points)\n",
        config.curve_min,
        config.curve_max,
        config.curve_step,
        panels.pdf.len(),
    ));

    out.push_str(&format!(
        "Histogram: gamma(shape={:.1}, scale={:.1}) | n={} | bins={} | width={:.2}\n",
        config.gamma_shape,
        config.gamma_scale,
        config.gamma_count,
        panels.histogram.bins.len(),
        panels.histogram.bin_width,
    ));

    out.push_str(&format!(
        "CDF: {} ({} points)\n",
        config.cdf.display_name(),
        panels.cdf.len(),
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_panels;
    use crate::domain::DemoConfig;

    #[test]
    fn summary_names_every_panel() {
        let panels = build_panels(&DemoConfig::classic()).unwrap();
        let out = format_summary(&panels);
        assert!(out.contains("linear trend"));
        assert!(out.contains("Best fit: slope="));
        assert!(out.contains("standard normal over [-3.0, 3.0)"));
        assert!(out.contains("gamma(shape=2.0, scale=250.0)"));
        assert!(out.contains("Standard Normal CDF"));
    }

    #[test]
    fn summary_tracks_variant() {
        let panels = build_panels(&DemoConfig::parabola()).unwrap();
        let out = format_summary(&panels);
        assert!(out.contains("noisy parabola"));
        assert!(out.contains("Logistic CDF"));
    }
}
