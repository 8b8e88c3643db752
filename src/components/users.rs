//! Users view.
//!
//! Searchable, level-filterable table of per-user risk records, sorted
//! descending by score. Filtering is recomputed synchronously on every
//! input change; record counts are dashboard-scale, so no memoization.

use leptos::*;
use leptos_router::A;

use super::primitives::{
    Badge, BadgeVariant, EmptyState, ErrorState, LoadingSpinner, SearchInput, SeverityBadge,
    TableCard,
};
use crate::api::{ApiClient, RiskRecord};
use crate::format::{format_score, format_timestamp};
use crate::remote::{use_remote, Remote};
use crate::session::use_session;
use crate::severity::Severity;

/// Filter and sort risk records for display.
///
/// A whitespace-only search matches everything. The level filter matches
/// the backend's `risk_level` case-insensitively; `None` means all levels.
pub fn filter_records(
    records: &[RiskRecord],
    search: &str,
    level: Option<Severity>,
) -> Vec<RiskRecord> {
    let needle = search.trim().to_lowercase();
    let mut filtered: Vec<RiskRecord> = records
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.email.to_lowercase().contains(&needle)
        })
        .filter(|r| match level {
            Some(level) => Severity::parse(&r.risk_level) == Some(level),
            None => true,
        })
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.current_score.total_cmp(&a.current_score));
    filtered
}

/// User risk-score table with search and level filter.
#[component]
pub fn UsersView() -> impl IntoView {
    let session = use_session();
    let records = use_remote("user risk scores", move || {
        let api = ApiClient::for_session(&session);
        async move { api.risk_scores().await }
    });

    let search = create_rw_signal(String::new());
    let level = create_rw_signal::<Option<Severity>>(None);

    let visible = {
        let records = records.clone();
        move || {
            records
                .state
                .with(|state| match state.ready() {
                    Some(data) => filter_records(data, &search.get(), level.get()),
                    None => Vec::new(),
                })
        }
    };

    let records_for_view = records.clone();
    let visible_for_badge = visible.clone();
    let visible_for_empty = visible.clone();

    view! {
        <div class="view" role="main" aria-label="Users">
            <div class="filter-row">
                <SearchInput value=search placeholder="Search by name or email..."/>
                <select
                    aria-label="Filter by risk level"
                    on:change=move |ev| {
                        level.set(Severity::parse(&event_target_value(&ev)));
                    }
                >
                    <option value="all" selected=move || level.get().is_none()>"All levels"</option>
                    {Severity::ALL
                        .iter()
                        .map(|sev| {
                            let sev = *sev;
                            view! {
                                <option
                                    value=sev.label()
                                    selected=move || level.get() == Some(sev)
                                >
                                    {sev.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <TableCard
                title="User Risk Scores"
                badge=view! {
                    <Badge
                        text=Signal::derive(move || format!("{} users", visible_for_badge().len()))
                        variant=BadgeVariant::Default
                    />
                }.into_view()
            >
                {move || match records_for_view.state.get() {
                    Remote::Loading => view! { <LoadingSpinner message="Loading users..."/> }.into_view(),
                    Remote::Error(err) => {
                        let retry = records_for_view.clone();
                        view! {
                            <ErrorState
                                message=err
                                retry=Callback::new(move |_| retry.reload())
                            />
                        }
                        .into_view()
                    }
                    Remote::Ready(_) => view! {
                        <Show
                            when={
                                let visible = visible_for_empty.clone();
                                move || !visible().is_empty()
                            }
                            fallback=|| view! {
                                <EmptyState
                                    title="No matching users"
                                    description="Try a different search or level filter"
                                />
                            }
                        >
                            <table role="table" aria-label="User risk scores">
                                <thead>
                                    <tr>
                                        <th scope="col">"Name"</th>
                                        <th scope="col">"Email"</th>
                                        <th scope="col">"Score"</th>
                                        <th scope="col">"Level"</th>
                                        <th scope="col">"Last Updated"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each={
                                            let visible = visible.clone();
                                            move || visible()
                                        }
                                        key=|r| r.user_id
                                        children=move |record| {
                                            let severity = Severity::from_score(record.current_score);
                                            view! {
                                                <tr>
                                                    <td>
                                                        <A
                                                            href=format!("/users/{}", record.user_id)
                                                            class="row-link"
                                                        >
                                                            {record.name}
                                                        </A>
                                                    </td>
                                                    <td class="mono">{record.email}</td>
                                                    <td class=format!("mono {}", severity.class())>
                                                        {format_score(record.current_score)}
                                                    </td>
                                                    <td><SeverityBadge severity=severity/></td>
                                                    <td class="mono">{format_timestamp(&record.last_updated)}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </Show>
                    }
                    .into_view(),
                }}
            </TableCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str, email: &str, score: f64, level: &str) -> RiskRecord {
        RiskRecord {
            user_id: id,
            name: name.to_string(),
            email: email.to_string(),
            current_score: score,
            risk_level: level.to_string(),
            last_updated: "2026-08-29T10:00:00".to_string(),
        }
    }

    fn sample() -> Vec<RiskRecord> {
        vec![
            record(1, "Alice Chen", "alice@corp.example", 12.0, "Low"),
            record(2, "Bob Ortiz", "bob@corp.example", 44.5, "Critical"),
            record(3, "Carol Singh", "carol@corp.example", 31.2, "High"),
            record(4, "Dan Alvarez", "dan@corp.example", 22.8, "Medium"),
        ]
    }

    #[test]
    fn whitespace_search_returns_everything() {
        let records = sample();
        let out = filter_records(&records, "   \t ", None);
        assert_eq!(out.len(), records.len());
    }

    #[test]
    fn search_matches_name_and_email_case_insensitively() {
        let records = sample();
        assert_eq!(filter_records(&records, "ALICE", None).len(), 1);
        assert_eq!(filter_records(&records, "corp.example", None).len(), 4);
        assert_eq!(filter_records(&records, "nobody", None).len(), 0);
    }

    #[test]
    fn level_filter_is_case_insensitive() {
        let mut records = sample();
        // Backend casing should not matter.
        records[2].risk_level = "HIGH".to_string();
        let out = filter_records(&records, "", Some(Severity::High));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].user_id, 3);
    }

    #[test]
    fn sorted_descending_by_score() {
        let out = filter_records(&sample(), "", None);
        let scores: Vec<f64> = out.iter().map(|r| r.current_score).collect();
        assert_eq!(scores, vec![44.5, 31.2, 22.8, 12.0]);
    }

    #[test]
    fn search_and_level_compose() {
        let records = sample();
        let out = filter_records(&records, "corp", Some(Severity::Critical));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Bob Ortiz");
    }
}
