use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::domain::package::{PackageTier, Packages};
use crate::services::currency_format::format_currency;
use crate::services::pricing_types::CalculatedResults;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("variable costs and profit margin leave no revenue to cover fixed costs")]
    InvalidConfiguration,
    #[error("failed to render pricing snapshot: {0}")]
    Render(String),
}

struct Bar {
    label: String,
    value: f64,
    color: RGBColor,
}

const IDEAL_COLOR: RGBColor = RGBColor(30, 122, 204);
const SIMULATED_COLOR: RGBColor = RGBColor(20, 184, 166);
const PYRAMID_COLOR: RGBColor = RGBColor(234, 179, 8);

/// Writes a static PNG snapshot of the current pricing: ideal and simulated
/// packages next to the financial pyramid.
pub fn write_pricing_snapshot_png(
    output_path: &str,
    results: &CalculatedResults,
    simulated: &Packages,
) -> Result<(), SnapshotError> {
    if !results.is_valid {
        return Err(SnapshotError::InvalidConfiguration);
    }
    render_snapshot_png(output_path, results, &snapshot_bars(results, simulated))?;
    info!(output_path, "pricing snapshot written");
    Ok(())
}

fn snapshot_bars(results: &CalculatedResults, simulated: &Packages) -> Vec<Bar> {
    let mut bars = Vec::new();
    for tier in PackageTier::ALL {
        bars.push(Bar {
            label: format!("{} ideal", tier.key()),
            value: results.packages.get(tier),
            color: IDEAL_COLOR,
        });
        bars.push(Bar {
            label: format!("{} simulated", tier.key()),
            value: simulated.get(tier),
            color: SIMULATED_COLOR,
        });
    }

    let plan = &results.financial_planning;
    for (label, value) in [
        ("Payroll", plan.payroll),
        ("Operational", plan.operational),
        ("Reserve", plan.reserve),
        ("Working capital", plan.working_capital),
    ] {
        bars.push(Bar {
            label: label.to_string(),
            value,
            color: PYRAMID_COLOR,
        });
    }
    bars
}

fn render_snapshot_png(
    output_path: &str,
    results: &CalculatedResults,
    bars: &[Bar],
) -> Result<(), SnapshotError> {
    let max_value = bars
        .iter()
        .map(|bar| bar.value)
        .fold(0.0_f64, f64::max);
    let max_y = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
    let max_x = bars.len() as i32;

    let root = BitMapBackend::new(output_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| SnapshotError::Render(e.to_string()))?;

    let caption = format!(
        "Price per session: {}",
        format_currency(results.price_per_session)
    );
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(70)
        .y_label_area_size(110)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| SnapshotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|index| {
            bars.get(*index as usize)
                .map(|bar| bar.label.clone())
                .unwrap_or_default()
        })
        .y_label_formatter(&|value| format_currency(*value))
        .y_desc("Monthly amount")
        .label_style(("sans-serif", 15))
        .axis_desc_style(("sans-serif", 20))
        .draw()
        .map_err(|e| SnapshotError::Render(e.to_string()))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(index, bar)| {
            let x = index as i32;
            Rectangle::new([(x, 0.0), (x + 1, bar.value.max(0.0))], bar.color.filled())
        }))
        .map_err(|e| SnapshotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| SnapshotError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pricing_engine::compute_pricing;
    use crate::test_support::default_inputs;

    #[test]
    fn refuses_to_render_invalid_results() {
        let temp = std::env::temp_dir().join("never-written-snapshot.png");
        let err = write_pricing_snapshot_png(
            temp.to_str().unwrap(),
            &CalculatedResults::invalid(),
            &Packages::zero(),
        )
        .unwrap_err();

        assert!(matches!(err, SnapshotError::InvalidConfiguration));
        assert!(!temp.exists());
    }

    #[test]
    fn bars_pair_ideal_and_simulated_tiers_then_pyramid() {
        let results = compute_pricing(&default_inputs());
        let mut simulated = results.packages;
        simulated.one_x = 180.0;

        let bars = snapshot_bars(&results, &simulated);
        let labels: Vec<&str> = bars.iter().map(|bar| bar.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "1x ideal",
                "1x simulated",
                "2x ideal",
                "2x simulated",
                "3x ideal",
                "3x simulated",
                "Payroll",
                "Operational",
                "Reserve",
                "Working capital",
            ]
        );
        assert_eq!(bars[1].value, 180.0);
        assert_eq!(bars[6].value, results.financial_planning.payroll);
    }
}
