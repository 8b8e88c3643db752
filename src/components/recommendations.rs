//! Recommendations view.
//!
//! Cards for every high-risk user with their suggested actions. The only
//! page with an explicit refresh action: recommendations go stale as the
//! backend rescores users.

use leptos::*;

use super::icons::RefreshIcon;
use super::primitives::{
    Badge, BadgeVariant, EmptyState, ErrorState, LoadingSpinner, SeverityBadge, TableCard,
};
use crate::api::ApiClient;
use crate::format::{format_score, format_timestamp};
use crate::remote::{use_remote, Remote};
use crate::session::use_session;
use crate::severity::Severity;

/// Security recommendations for high-risk users.
#[component]
pub fn RecommendationsView() -> impl IntoView {
    let session = use_session();
    let data = use_remote("recommendations", move || {
        let api = ApiClient::for_session(&session);
        async move { api.recommendations().await }
    });

    let data_for_view = data.clone();
    let data_for_refresh = data.clone();
    let state = data.state;

    view! {
        <div class="view" role="main" aria-label="Recommendations">
            <TableCard
                title="Security Recommendations"
                badge=view! {
                    <Badge
                        text=Signal::derive(move || {
                            match state.get().ready() {
                                Some(d) => format!("{} high-risk users", d.total_high_risk_users),
                                None => String::new(),
                            }
                        })
                        variant=BadgeVariant::Default
                    />
                }.into_view()
                action=view! {
                    <button
                        class="btn"
                        on:click=move |_| data_for_refresh.reload()
                        disabled=move || state.get().is_loading()
                        aria-label="Refresh recommendations"
                    >
                        <RefreshIcon/>
                        "Refresh"
                    </button>
                }.into_view()
            >
                {move || match data_for_view.state.get() {
                    Remote::Loading => view! { <LoadingSpinner message="Loading recommendations..."/> }.into_view(),
                    Remote::Error(err) => {
                        let retry = data_for_view.clone();
                        view! {
                            <ErrorState message=err retry=Callback::new(move |_| retry.reload())/>
                        }
                        .into_view()
                    }
                    Remote::Ready(data) if data.recommendations.is_empty() => view! {
                        <EmptyState
                            title="No high-risk users right now"
                            description="Recommendations appear when users cross the high-risk threshold"
                        />
                    }
                    .into_view(),
                    Remote::Ready(data) => view! {
                        <div class="card-body">
                            <p class="explanation">
                                {format!("Generated {}", format_timestamp(&data.generated_at))}
                            </p>
                            <For
                                each=move || data.recommendations.clone()
                                key=|r| r.user_id
                                children=move |rec| {
                                    let severity = Severity::from_score(rec.risk_score);
                                    view! {
                                        <div class="table-card" style="margin-bottom: 0.75rem;">
                                            <div class="table-header">
                                                <div class="table-title-group">
                                                    <div class="table-title">{rec.user_name}</div>
                                                    <span class="mono header-user">{rec.user_email}</span>
                                                </div>
                                                <div class="table-title-group">
                                                    <span class=format!("mono {}", severity.class())>
                                                        {format_score(rec.risk_score)}
                                                    </span>
                                                    <SeverityBadge severity=severity/>
                                                </div>
                                            </div>
                                            <div class="card-body">
                                                <ul class="recommendation-list">
                                                    {rec.recommendations
                                                        .into_iter()
                                                        .map(|r| view! { <li>{r}</li> })
                                                        .collect_view()}
                                                </ul>
                                                <p class="explanation">
                                                    {format!(
                                                        "{} events in the last 24h; last updated {}",
                                                        rec.recent_activity_count,
                                                        format_timestamp(&rec.last_updated),
                                                    )}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_view(),
                }}
            </TableCard>
        </div>
    }
}
