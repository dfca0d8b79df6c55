use anyhow::Result;
use eframe::egui::{self, Color32, RichText, TextEdit, Widget};
use eframe::Frame;
use egui_extras::{Column, TableBuilder};

use charts::ResultView;
use config::InputForm;
use projection::{project, ProjectionError, ProjectionInput, ProjectionResult};

mod charts;
mod config;
mod money;
mod projection;

const FIELD_WIDTH: f32 = 130.0;

pub struct App {
    form: InputForm,
    view: ResultView,
    result: Option<ProjectionResult>,
    warn: Result<()>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: InputForm::default(),
            view: ResultView::default(),
            result: None,
            warn: Ok(()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("inputs")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| self.form_panel(ui));

        egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
            egui::widgets::global_dark_light_mode_switch(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| self.result_panel(ui));

        self.error_modal(ctx);
    }
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn form_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading("Investment");
        ui.add_space(8.0);

        egui::Grid::new("input_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Initial capital (€):");
                currency_field(ui, &mut self.form.initial_capital);
                ui.end_row();

                ui.label("Monthly savings (€):");
                currency_field(ui, &mut self.form.monthly_contribution);
                ui.end_row();

                ui.label("Period of investing (years):");
                TextEdit::singleline(&mut self.form.years)
                    .desired_width(FIELD_WIDTH)
                    .ui(ui);
                ui.end_row();

                ui.label("Interest rate per year (%):");
                currency_field(ui, &mut self.form.annual_rate);
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.button("Calculate").clicked() {
            self.recalculate();
        }

        if let Some(result) = &self.result {
            ui.separator();
            ui.heading(format!(
                "Final sum: {} €",
                money::format_amount(result.final_balance())
            ));
            ui.label(format!(
                "Invested capital: {} €",
                money::format_amount(result.total_contributed())
            ));
            ui.label(format!(
                "Earned interest: {} €",
                money::format_amount(result.total_interest_earned())
            ));
        }
    }

    fn result_panel(&mut self, ui: &mut egui::Ui) {
        let Self { result, view, .. } = self;
        let Some(result) = result else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::from("Enter the investment details and press Calculate.").weak());
            });
            return;
        };

        ui.horizontal(|ui| {
            for v in ResultView::ALL {
                ui.selectable_value(view, v, v.to_string());
            }
        });
        ui.separator();

        match view {
            ResultView::Growth => charts::wealth_over_time(ui, result),
            ResultView::Totals => charts::invested_vs_earned(ui, result),
            ResultView::YearlySplit => charts::yearly_split(ui, result),
            ResultView::Breakdown => breakdown_table(ui, result),
        }
    }

    fn error_modal(&mut self, ctx: &egui::Context) {
        let Err(e) = &self.warn else {
            return;
        };
        let message = format!("{e:#}");

        let mut dismissed = false;
        egui::Window::new("Input error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::from(message).color(Color32::RED));
                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.warn = Ok(());
        }
    }

    fn recalculate(&mut self) {
        let outcome = self.read_form().and_then(|input| {
            log::debug!("projection inputs: {input:?}");
            project(&input)
        });
        match outcome {
            Ok(result) => {
                log::info!(
                    "projected {} years, final balance {:.2}",
                    result.years(),
                    result.final_balance()
                );
                self.result = Some(result);
                self.warn = Ok(());
            }
            Err(e) => {
                log::warn!("calculation rejected: {e}");
                // No partial results: whatever was on screen is stale now.
                self.result = None;
                self.warn = Err(e.into());
            }
        }
    }

    fn read_form(&self) -> Result<ProjectionInput, ProjectionError> {
        let initial_capital = money::parse_amount(&self.form.initial_capital).ok_or_else(|| {
            ProjectionError::invalid("initial capital", self.form.initial_capital.clone())
        })?;
        let monthly_contribution =
            money::parse_amount(&self.form.monthly_contribution).ok_or_else(|| {
                ProjectionError::invalid("monthly savings", self.form.monthly_contribution.clone())
            })?;
        let years = self.form.years.trim().parse::<u32>().map_err(|_| {
            ProjectionError::invalid("period of investing", self.form.years.clone())
        })?;
        let annual_rate_percent = money::parse_amount(&self.form.annual_rate)
            .ok_or_else(|| ProjectionError::invalid("interest rate", self.form.annual_rate.clone()))?;

        Ok(ProjectionInput {
            initial_capital,
            monthly_contribution,
            years,
            annual_rate_percent,
        })
    }
}

/// A currency text field: grouped display while unfocused, plain digits while
/// focused, separators stripped before any parsing.
fn currency_field(ui: &mut egui::Ui, text: &mut String) {
    let response = TextEdit::singleline(text).desired_width(FIELD_WIDTH).ui(ui);
    if response.gained_focus() {
        *text = money::strip_grouping(text);
    }
    if response.lost_focus() {
        if let Some(value) = money::parse_amount(text) {
            *text = money::format_amount(value);
        }
    }
}

fn breakdown_table(ui: &mut egui::Ui, result: &ProjectionResult) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 2.0;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .header(text_height, |mut header| {
            header.col(|ui| {
                ui.heading("Year");
            });
            header.col(|ui| {
                ui.heading("Invested capital");
            });
            header.col(|ui| {
                ui.heading("Earned interest");
            });
            header.col(|ui| {
                ui.heading("Balance");
            });
        })
        .body(|body| {
            body.rows(text_height, result.with_interest().len(), |mut row| {
                let t = row.index();
                row.col(|ui| {
                    ui.label(t.to_string());
                });
                row.col(|ui| {
                    ui.label(format!(
                        "{} €",
                        money::format_amount(result.without_interest()[t])
                    ));
                });
                row.col(|ui| {
                    ui.label(format!(
                        "{} €",
                        money::format_amount(result.interest_component()[t])
                    ));
                });
                row.col(|ui| {
                    ui.label(format!(
                        "{} €",
                        money::format_amount(result.with_interest()[t])
                    ));
                });
            });
        });
}
