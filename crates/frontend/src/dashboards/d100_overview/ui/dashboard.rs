use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::charts::{BarChart, DonutChart, LineChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use chrono::Local;
use contracts::dashboards::d100_overview::dto::{overview_data, ChartSeries};
use leptos::prelude::*;
use thaw::*;

/// Доля значения от максимума ряда в процентах, для полос "Revenue by Location"
fn share_of_max(value: f64, series: &ChartSeries) -> f64 {
    let max = series.max_value();
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let data = overview_data();
    let today = Local::now().format("%b %-d, %Y").to_string();
    log::debug!("overview dashboard: {} KPI cards", data.kpis.len());

    let kpi_count = data.kpis.len();
    let current_week_total = data.revenue_current_week.total();
    let previous_week_total = data.revenue_previous_week.total();
    let locations = data.revenue_by_location.clone();

    view! {
        <PageFrame page_id="d100_overview--dashboard" category=PageCategory::Dashboard>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"eCommerce"</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__subtitle">{icon("calendar")} " " {today}</span>
                </div>
            </div>

            <div class="page__content dashboard-grid">
                <div class="dashboard-grid__kpis">
                    {data.kpis.into_iter().enumerate().map(|(i, kpi)| view! {
                        <CardAnimated delay_ms=stagger_delay(i) class="kpi-card">
                            <StatCard indicator=kpi />
                        </CardAnimated>
                    }).collect_view()}
                </div>

                <CardAnimated delay_ms=stagger_delay(kpi_count) class="dashboard-grid__projections">
                    <h2 class="card__title">"Projections vs Actuals"</h2>
                    <BarChart series=vec![data.actuals, data.projections] />
                </CardAnimated>

                <CardAnimated delay_ms=stagger_delay(kpi_count + 1) class="dashboard-grid__revenue">
                    <div class="card__title-row">
                        <h2 class="card__title">"Revenue"</h2>
                        <span class="card__meta">
                            {format!("Current Week {}", format_money(current_week_total * 1000.0, "$"))}
                        </span>
                        <span class="card__meta card__meta--muted">
                            {format!("Previous Week {}", format_money(previous_week_total * 1000.0, "$"))}
                        </span>
                    </div>
                    <LineChart
                        series=vec![data.revenue_current_week, data.revenue_previous_week]
                        unit="$"
                    />
                </CardAnimated>

                <CardAnimated delay_ms=stagger_delay(kpi_count + 2) class="dashboard-grid__locations">
                    <h2 class="card__title">"Revenue by Location"</h2>
                    <ul class="location-list">
                        {locations.points.iter().map(|point| {
                            let width = format!("width: {:.0}%;", share_of_max(point.value, &locations));
                            view! {
                                <li class="location-list__item">
                                    <div class="location-list__row">
                                        <span>{point.name.clone()}</span>
                                        <span>{format!("{}K", point.value)}</span>
                                    </div>
                                    <div class="location-list__bar">
                                        <div class="location-list__fill" style=width></div>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </CardAnimated>

                <CardAnimated delay_ms=stagger_delay(kpi_count + 3) class="dashboard-grid__products">
                    <h2 class="card__title">"Top Selling Products"</h2>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Amount"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {data.top_products.into_iter().map(|p| view! {
                                <TableRow>
                                    <TableCell>{p.name}</TableCell>
                                    <TableCell>{format_money(p.price, "$")}</TableCell>
                                    <TableCell>{format_number_int(p.quantity as f64)}</TableCell>
                                    <TableCell>{format_money(p.amount, "$")}</TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </CardAnimated>

                <CardAnimated delay_ms=stagger_delay(kpi_count + 4) class="dashboard-grid__sales">
                    <h2 class="card__title">"Total Sales"</h2>
                    <DonutChart series=data.total_sales currency="$" />
                </CardAnimated>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_overview::dto::ChartPoint;

    #[test]
    fn test_share_of_max() {
        let series = ChartSeries {
            name: "loc".into(),
            points: vec![ChartPoint::new("a", 72.0), ChartPoint::new("b", 36.0)],
        };
        assert_eq!(share_of_max(72.0, &series), 100.0);
        assert_eq!(share_of_max(36.0, &series), 50.0);

        let empty = ChartSeries { name: "e".into(), points: vec![] };
        assert_eq!(share_of_max(10.0, &empty), 0.0);
    }
}
