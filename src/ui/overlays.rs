//! Schwebende Overlays der modalen Layer: Trend, Echtzeit, Vorhersage.

use crate::app::{AppIntent, AppState};
use crate::core::{
    CurrentMetric, ForecastMetric, LayerKey, Season, TrendPoint, TrendVariable, UnitSystem,
    WeatherForm, WeatherQuery, WeatherQueryMode, FORECAST_MAX_DAYS,
};
use egui_extras::{Column, TableBuilder};

const SEASON_COLORS: [egui::Color32; 4] = [
    egui::Color32::from_rgb(239, 68, 68),
    egui::Color32::from_rgb(245, 158, 11),
    egui::Color32::from_rgb(59, 130, 246),
    egui::Color32::from_rgb(34, 197, 94),
];

/// Rendert alle aktiven Overlays.
///
/// Schließen eines Fensters schaltet den zugehörigen Layer aus.
pub fn render_overlays(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if state.layers.is_active(&LayerKey::TrendGraph) {
        let mut open = true;
        egui::Window::new("Seasonal trend")
            .open(&mut open)
            .default_width(460.0)
            .show(ctx, |ui| render_trend(ui, state, &mut events));
        if !open {
            events.push(AppIntent::LayerToggled {
                key: LayerKey::TrendGraph,
            });
        }
    }

    for key in [LayerKey::Realtime, LayerKey::Forecast] {
        if !state.layers.is_active(&key) {
            continue;
        }
        let mut open = true;
        egui::Window::new(key.label())
            .open(&mut open)
            .default_width(if key == LayerKey::Realtime { 300.0 } else { 480.0 })
            .show(ctx, |ui| {
                if key == LayerKey::Realtime {
                    render_realtime(ui, state, &mut events);
                } else {
                    render_forecast(ui, state, &mut events);
                }
            });
        if !open {
            events.push(AppIntent::LayerToggled { key });
        }
    }

    events
}

// ── Trend ───────────────────────────────────────────────────────────

fn render_trend(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        ui.label("Suburb");
        ui.add(
            egui::TextEdit::singleline(&mut state.ui.trend_suburb_input)
                .hint_text(state.trend.suburb.as_deref().unwrap_or("nearest"))
                .desired_width(160.0),
        );
        if ui.button("Load").clicked() {
            let name = state.ui.trend_suburb_input.trim();
            events.push(AppIntent::TrendSuburbRequested {
                suburb: (!name.is_empty()).then(|| name.to_string()),
            });
        }
    });

    ui.horizontal(|ui| {
        for variable in TrendVariable::ALL {
            if ui
                .selectable_label(state.trend.variable == variable, variable.label())
                .clicked()
                && state.trend.variable != variable
            {
                events.push(AppIntent::TrendVariableChanged { variable });
            }
        }
        ui.separator();
        for years in [5usize, 10] {
            if ui
                .selectable_label(state.trend.years == years, format!("{years} y"))
                .clicked()
                && state.trend.years != years
            {
                events.push(AppIntent::TrendYearsChanged { years });
            }
        }
    });

    if let Some(suburb) = &state.trend.suburb {
        ui.label(egui::RichText::new(suburb).strong());
    }

    let series = state.trend.series();
    if series.is_empty() {
        ui.weak("No seasonal data loaded");
        return;
    }

    paint_trend_chart(ui, &series);
    ui.separator();

    let unit = state.trend.variable.unit();
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .columns(Column::remainder(), Season::ALL.len())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            for season in Season::ALL {
                header.col(|ui| {
                    ui.strong(season.label());
                });
            }
        })
        .body(|mut body| {
            for point in &series {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(point.year.to_string());
                    });
                    for season in Season::ALL {
                        row.col(|ui| {
                            match point.value(season) {
                                Some(v) => ui.label(format!("{v:.1} {unit}")),
                                None => ui.weak("-"),
                            };
                        });
                    }
                });
            }
        });
}

/// Liniendiagramm je Jahreszeit über die Jahre.
fn paint_trend_chart(ui: &mut egui::Ui, series: &[TrendPoint]) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 160.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::GRAY),
        egui::StrokeKind::Inside,
    );

    let values: Vec<f64> = series
        .iter()
        .flat_map(|p| Season::ALL.into_iter().filter_map(|s| p.value(s)))
        .collect();
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return;
    };
    let span = (max - min).max(1e-6);
    let steps = (series.len().max(2) - 1) as f32;

    let to_pos = |index: usize, value: f64| {
        let x = rect.left() + rect.width() * index as f32 / steps;
        let y = rect.bottom() - rect.height() * ((value - min) / span) as f32;
        egui::pos2(x, y)
    };

    for (season, color) in Season::ALL.into_iter().zip(SEASON_COLORS) {
        let points: Vec<egui::Pos2> = series
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.value(season).map(|v| to_pos(i, v)))
            .collect();
        if points.len() >= 2 {
            painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, color)));
        }
    }

    ui.horizontal(|ui| {
        for (season, color) in Season::ALL.into_iter().zip(SEASON_COLORS) {
            ui.colored_label(color, season.label());
        }
        ui.weak(format!("{min:.1} – {max:.1}"));
    });
}

// ── Echtzeit & Vorhersage ───────────────────────────────────────────

/// Ortsangabe; liefert die Abfrage, wenn der Knopf gedrückt wurde.
fn render_query_form(
    ui: &mut egui::Ui,
    form: &mut WeatherForm,
    button: &str,
) -> Option<WeatherQuery> {
    ui.horizontal(|ui| {
        for mode in WeatherQueryMode::ALL {
            ui.radio_value(&mut form.mode, mode, mode.label());
        }
    });

    let submitted = ui
        .horizontal(|ui| {
            match form.mode {
                WeatherQueryMode::City => {
                    ui.add(egui::TextEdit::singleline(&mut form.city).desired_width(160.0));
                }
                WeatherQueryMode::Coords => {
                    ui.add(
                        egui::TextEdit::singleline(&mut form.lat)
                            .hint_text("Latitude")
                            .desired_width(80.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.lon)
                            .hint_text("Longitude")
                            .desired_width(80.0),
                    );
                }
                WeatherQueryMode::Suburb => {
                    ui.add(egui::TextEdit::singleline(&mut form.suburb).desired_width(160.0));
                }
            }
            ui.button(button).clicked()
        })
        .inner;

    let query = form.query();
    if let Err(e) = &query {
        ui.colored_label(egui::Color32::from_rgb(220, 38, 38), e.to_string());
    }
    submitted.then_some(query.ok()).flatten()
}

fn render_units(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        for units in [UnitSystem::Metric, UnitSystem::Imperial] {
            if ui
                .selectable_label(state.weather.units == units, units.label())
                .clicked()
                && state.weather.units != units
            {
                events.push(AppIntent::WeatherUnitsChanged { units });
            }
        }
    });
}

fn render_realtime(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    if let Some(query) = render_query_form(ui, &mut state.ui.weather_form, "Get Weather") {
        events.push(AppIntent::CurrentWeatherRequested { query });
    }
    render_units(ui, state, events);
    ui.separator();

    let Some(weather) = &state.weather.current else {
        ui.weak("No weather data loaded");
        return;
    };
    let units = state.weather.units;

    ui.label(egui::RichText::new(&weather.location.name).strong());
    ui.weak(weather.observed_at.format("%Y-%m-%d %H:%M").to_string());
    egui::Grid::new("realtime_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for metric in CurrentMetric::for_role(state.session.role) {
                ui.label(metric.label());
                ui.label(metric.format(weather, units));
                ui.end_row();
            }
            ui.label("Sunrise");
            ui.label(weather.sunrise.format("%H:%M").to_string());
            ui.end_row();
            ui.label("Sunset");
            ui.label(weather.sunset.format("%H:%M").to_string());
            ui.end_row();
        });
}

fn render_forecast(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    let form = &mut state.ui.weather_form;
    let requested = render_query_form(ui, form, "Get Forecast");
    ui.horizontal(|ui| {
        ui.label("Days");
        ui.add(egui::DragValue::new(&mut form.days).range(1..=FORECAST_MAX_DAYS));
    });
    if let Some(query) = requested {
        events.push(AppIntent::ForecastRequested {
            query,
            days: form.days,
        });
    }

    render_units(ui, state, events);
    ui.horizontal(|ui| {
        for metric in ForecastMetric::ALL {
            if ui
                .selectable_label(state.weather.metric == metric, metric.label())
                .clicked()
                && state.weather.metric != metric
            {
                events.push(AppIntent::ForecastMetricChanged { metric });
            }
        }
    });
    ui.separator();

    let Some(forecast) = &state.weather.forecast else {
        ui.weak("No forecast loaded");
        return;
    };
    let (units, metric) = (state.weather.units, state.weather.metric);

    ui.label(egui::RichText::new(&forecast.location.name).strong());
    let values: Vec<f64> = forecast
        .days
        .iter()
        .flat_map(|day| day.hours.iter())
        .map(|hour| metric.value(hour, units))
        .collect();
    paint_hourly_chart(ui, &values, metric.unit(units));
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .columns(Column::remainder(), 3)
        .header(20.0, |mut header| {
            for title in ["Date", "Min / Max", "Precip", "Humidity"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for day in &forecast.days {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(day.date.format("%a %d.%m.").to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!(
                            "{:.0} / {:.0} {}",
                            units.temperature(day.min_temp_c),
                            units.temperature(day.max_temp_c),
                            units.temperature_unit()
                        ));
                    });
                    row.col(|ui| {
                        ui.label(format!(
                            "{:.1} {}",
                            units.length(day.total_precip_mm),
                            units.length_unit()
                        ));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0} %", day.avg_humidity));
                    });
                });
            }
        });
}

/// Stundenverlauf über alle Vorhersagetage.
fn paint_hourly_chart(ui: &mut egui::Ui, values: &[f64], unit: &str) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 140.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::GRAY),
        egui::StrokeKind::Inside,
    );

    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return;
    };
    let span = (max - min).max(1e-6);
    let steps = (values.len().max(2) - 1) as f32;

    let points: Vec<egui::Pos2> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            egui::pos2(
                rect.left() + rect.width() * i as f32 / steps,
                rect.bottom() - rect.height() * ((v - min) / span) as f32,
            )
        })
        .collect();
    painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, SEASON_COLORS[2])));
    ui.weak(format!("{min:.1} – {max:.1} {unit}"));
}
