use std::fmt::{Display, Formatter};

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Corner, Legend, Line, Plot, PlotPoint, Points};

use crate::app::money;
use crate::app::projection::ProjectionResult;

const FOREST_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
const ORANGE: Color32 = Color32::from_rgb(255, 165, 0);
const NAVY: Color32 = Color32::from_rgb(0, 0, 128);

#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Growth,
    Totals,
    YearlySplit,
    Breakdown,
}

impl ResultView {
    pub const ALL: [ResultView; 4] = [
        ResultView::Growth,
        ResultView::Totals,
        ResultView::YearlySplit,
        ResultView::Breakdown,
    ];
}

impl Display for ResultView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultView::Growth => write!(f, "Wealth over time"),
            ResultView::Totals => write!(f, "Invested vs. earned"),
            ResultView::YearlySplit => write!(f, "Per-year split"),
            ResultView::Breakdown => write!(f, "Breakdown"),
        }
    }
}

/// Line chart of the compounded balance against the contributions-only
/// balance, one point per year.
pub fn wealth_over_time(ui: &mut Ui, result: &ProjectionResult) {
    let with = series_points(result.with_interest());
    let without = series_points(result.without_interest());

    Plot::new("wealth_over_time")
        .x_axis_label("Years")
        .y_axis_label("Wealth (€)")
        .legend(Legend::default().position(Corner::LeftTop))
        .label_formatter(amount_label)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(with.clone())
                    .color(FOREST_GREEN)
                    .name("Wealth with interest"),
            );
            plot_ui.line(
                Line::new(without.clone())
                    .color(ORANGE)
                    .name("Wealth without interest"),
            );
            plot_ui.points(Points::new(with).color(FOREST_GREEN).radius(2.5));
            plot_ui.points(Points::new(without).color(ORANGE).radius(2.5));
        });
}

/// Bar chart of the end-of-horizon totals: what was paid in, what the
/// interest earned, and their sum.
pub fn invested_vs_earned(ui: &mut Ui, result: &ProjectionResult) {
    let invested = result.total_contributed();
    let earned = result.total_interest_earned();
    let bars = vec![
        Bar::new(0.0, invested).name("Invested capital").fill(ORANGE),
        Bar::new(1.0, earned).name("Earned interest").fill(FOREST_GREEN),
        Bar::new(2.0, invested + earned).name("Total sum").fill(NAVY),
    ];

    Plot::new("invested_vs_earned")
        .y_axis_label("Sum (€)")
        .show_axes([false, true])
        .allow_zoom(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.7));
        });
}

/// Stacked bars per year: the principal with that year's earned interest on
/// top, together adding up to the compounded balance.
pub fn yearly_split(ui: &mut Ui, result: &ProjectionResult) {
    let principal: Vec<Bar> = result
        .principal_component()
        .iter()
        .enumerate()
        .map(|(t, v)| Bar::new(t as f64, *v))
        .collect();
    let interest: Vec<Bar> = result
        .interest_component()
        .iter()
        .enumerate()
        .map(|(t, v)| Bar::new(t as f64, *v))
        .collect();

    let principal = BarChart::new(principal)
        .width(0.7)
        .color(FOREST_GREEN)
        .name("Invested capital");
    let interest = BarChart::new(interest)
        .width(0.7)
        .color(ORANGE)
        .name("Earned interest")
        .stack_on(&[&principal]);

    Plot::new("yearly_split")
        .x_axis_label("Years")
        .y_axis_label("Sum (€)")
        .legend(Legend::default().position(Corner::LeftTop))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(principal);
            plot_ui.bar_chart(interest);
        });
}

fn series_points(series: &[f64]) -> Vec<[f64; 2]> {
    series
        .iter()
        .enumerate()
        .map(|(t, v)| [t as f64, *v])
        .collect()
}

fn amount_label(name: &str, point: &PlotPoint) -> String {
    let amount = money::format_amount(point.y);
    if name.is_empty() {
        format!("year {:.0}\n{amount} €", point.x)
    } else {
        format!("{name}\nyear {:.0}\n{amount} €", point.x)
    }
}
