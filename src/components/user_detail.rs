//! User detail view.
//!
//! Route `/users/:id`: risk summary for one user plus their recent
//! activity timeline (read-only, newest first as returned by the backend).

use leptos::*;
use leptos_router::use_params_map;

use super::primitives::{
    Badge, BadgeVariant, EmptyState, ErrorState, InfoRow, LoadingSpinner, SeverityBadge, TableCard,
};
use crate::api::ApiClient;
use crate::format::{format_score, format_timestamp};
use crate::remote::{use_remote, Remote};
use crate::session::use_session;
use crate::severity::Severity;

/// Risk summary and activity history for one user.
#[component]
pub fn UserDetailView() -> impl IntoView {
    let params = use_params_map();
    let user_id = params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<u32>().ok()));

    let Some(user_id) = user_id else {
        return view! {
            <div class="view" role="main" aria-label="User detail">
                <EmptyState title="Unknown user" description="The requested user id is not valid"/>
            </div>
        }
        .into_view();
    };

    let session = use_session();
    let summary = use_remote("user risk summary", move || {
        let api = ApiClient::for_session(&session);
        async move { api.user_risk(user_id).await }
    });
    let activity = use_remote("user activity", move || {
        let api = ApiClient::for_session(&session);
        async move { api.user_activity(user_id).await }
    });

    let summary_for_view = summary.clone();
    let activity_for_view = activity.clone();

    view! {
        <div class="view" role="main" aria-label="User detail">
            <TableCard title="Risk Summary">
                {move || match summary_for_view.state.get() {
                    Remote::Loading => view! { <LoadingSpinner message="Loading summary..."/> }.into_view(),
                    Remote::Error(err) => {
                        let retry = summary_for_view.clone();
                        view! {
                            <ErrorState message=err retry=Callback::new(move |_| retry.reload())/>
                        }
                        .into_view()
                    }
                    Remote::Ready(record) => {
                        let severity = Severity::from_score(record.current_score);
                        view! {
                            <div class="card-body">
                                <InfoRow label="Name">{record.name.clone()}</InfoRow>
                                <InfoRow label="Email">
                                    <span class="mono">{record.email.clone()}</span>
                                </InfoRow>
                                <InfoRow label="Current Score">
                                    <span class=format!("mono {}", severity.class())>
                                        {format_score(record.current_score)}
                                    </span>
                                </InfoRow>
                                <InfoRow label="Risk Level">
                                    <SeverityBadge severity=severity/>
                                </InfoRow>
                                <InfoRow label="Last Updated">
                                    <span class="mono">{format_timestamp(&record.last_updated)}</span>
                                </InfoRow>
                            </div>
                        }
                        .into_view()
                    }
                }}
            </TableCard>

            <TableCard title="Activity Timeline">
                {move || match activity_for_view.state.get() {
                    Remote::Loading => view! { <LoadingSpinner message="Loading activity..."/> }.into_view(),
                    Remote::Error(err) => {
                        let retry = activity_for_view.clone();
                        view! {
                            <ErrorState message=err retry=Callback::new(move |_| retry.reload())/>
                        }
                        .into_view()
                    }
                    Remote::Ready(events) if events.is_empty() => view! {
                        <EmptyState
                            title="No recorded activity"
                            description="Events appear here as the backend ingests logs"
                        />
                    }
                    .into_view(),
                    Remote::Ready(events) => view! {
                        <table role="table" aria-label="Activity events">
                            <thead>
                                <tr>
                                    <th scope="col">"Time"</th>
                                    <th scope="col">"Action"</th>
                                    <th scope="col">"Resource"</th>
                                    <th scope="col">"Location"</th>
                                    <th scope="col">"Outcome"</th>
                                    <th scope="col">"Score"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || events.clone()
                                    key=|e| e.id
                                    children=move |event| {
                                        let severity = Severity::from_score(event.risk_score);
                                        let outcome = if event.success {
                                            view! { <Badge text="Success" variant=BadgeVariant::Success/> }
                                        } else {
                                            view! { <Badge text="Failed" variant=BadgeVariant::Error/> }
                                        };
                                        view! {
                                            <tr>
                                                <td class="mono">{format_timestamp(&event.timestamp)}</td>
                                                <td>{event.action}</td>
                                                <td class="mono">{event.resource.unwrap_or_default()}</td>
                                                <td class="mono">{event.location.unwrap_or_default()}</td>
                                                <td>{outcome}</td>
                                                <td class=format!("mono {}", severity.class())>
                                                    {format_score(event.risk_score)}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                    .into_view(),
                }}
            </TableCard>
        </div>
    }
    .into_view()
}
