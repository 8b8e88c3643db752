//! Dashboard overview.
//!
//! Landing page: aggregate stat cards, the 7-day risk trend chart, and
//! the embedded risk simulator. Stats and trends are independent fetches;
//! either can fail without taking the other down.

use leptos::*;

use super::chart::TrendChart;
use super::icons::{AlertIcon, ChartIcon, GaugeIcon, UsersIcon};
use super::primitives::{EmptyState, ErrorState, LoadingSpinner, StatCard, TableCard};
use super::simulator::RiskSimulator;
use crate::api::{ApiClient, DashboardStats};
use crate::format::{format_count, format_score};
use crate::remote::{use_remote, Remote};
use crate::session::use_session;

/// Pull one stat out of a possibly-unready stats fetch for a card.
fn stat_value<F>(state: Remote<DashboardStats>, pick: F) -> String
where
    F: Fn(&DashboardStats) -> String,
{
    match state.ready() {
        Some(stats) => pick(stats),
        None => "—".to_string(),
    }
}

/// Main dashboard view.
#[component]
pub fn DashboardView() -> impl IntoView {
    let session = use_session();

    let stats = use_remote("dashboard stats", move || {
        let api = ApiClient::for_session(&session);
        async move { api.dashboard_stats().await }
    });
    let trends = use_remote("risk trends", move || {
        let api = ApiClient::for_session(&session);
        async move { api.risk_trends().await }
    });

    let stats_state = stats.state;
    let trends_for_view = trends.clone();

    view! {
        <div class="view" role="main" aria-label="Dashboard">
            <div class="stats-grid" role="region" aria-label="Key metrics">
                <StatCard
                    label="Total Users"
                    value=Signal::derive(move || {
                        stat_value(stats_state.get(), |s| format_count(s.total_users))
                    })
                    color="blue"
                    icon=view! { <UsersIcon/> }
                />
                <StatCard
                    label="High Risk Users"
                    value=Signal::derive(move || {
                        stat_value(stats_state.get(), |s| format_count(s.high_risk_users))
                    })
                    color="red"
                    icon=view! { <AlertIcon/> }
                />
                <StatCard
                    label="Recent Alerts (24h)"
                    value=Signal::derive(move || {
                        stat_value(stats_state.get(), |s| format_count(s.recent_alerts))
                    })
                    color="orange"
                    icon=view! { <ChartIcon/> }
                />
                <StatCard
                    label="Average Risk Score"
                    value=Signal::derive(move || {
                        stat_value(stats_state.get(), |s| format_score(s.average_risk_score))
                    })
                    color="green"
                    icon=view! { <GaugeIcon/> }
                />
            </div>

            <TableCard title="Risk Trend (7 days)">
                {move || match trends_for_view.state.get() {
                    Remote::Loading => view! { <LoadingSpinner message="Loading trends..."/> }.into_view(),
                    Remote::Error(err) => {
                        let retry = trends_for_view.clone();
                        view! {
                            <ErrorState message=err retry=Callback::new(move |_| retry.reload())/>
                        }
                        .into_view()
                    }
                    Remote::Ready(points) if points.is_empty() => view! {
                        <EmptyState
                            title="No trend data yet"
                            description="Daily averages appear once events are scored"
                        />
                    }
                    .into_view(),
                    Remote::Ready(points) => view! {
                        <div class="card-body">
                            <TrendChart trends=points/>
                        </div>
                    }
                    .into_view(),
                }}
            </TableCard>

            <RiskSimulator/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_risk_card_value_ignores_other_fields() {
        let stats = DashboardStats {
            total_users: 100,
            high_risk_users: 12,
            recent_alerts: 9_999,
            average_risk_score: 48.7,
        };
        let value = stat_value(Remote::Ready(stats), |s| format_count(s.high_risk_users));
        assert_eq!(value, "12");
    }

    #[test]
    fn unready_stats_render_placeholder() {
        assert_eq!(
            stat_value(Remote::Loading, |s: &DashboardStats| format_count(s.total_users)),
            "—"
        );
        assert_eq!(
            stat_value(Remote::Error("net".to_string()), |s: &DashboardStats| {
                format_count(s.total_users)
            }),
            "—"
        );
    }
}
