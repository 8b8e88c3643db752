//! Settings view.
//!
//! Profile readout, runtime configuration, and batch log upload. Uploads
//! accept a JSON array of log entries and report the processed count the
//! backend returns.

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::primitives::{ErrorState, InfoRow, LoadingSpinner, TableCard};
use crate::api::{ApiClient, LogUploadEntry};
use crate::config::DashboardConfig;
use crate::notify::use_toasts;
use crate::remote::{use_remote, Remote};
use crate::session::use_session;

/// Settings page: profile, configuration, log upload.
#[component]
pub fn SettingsView() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let profile = use_remote("profile", move || {
        let api = ApiClient::for_session(&session);
        async move { api.me().await }
    });
    let profile_for_view = profile.clone();

    let config = DashboardConfig::load();
    let api_url = config.api_url().to_string();
    let version = config.version.unwrap_or_else(|| "unknown".to_string());

    let upload_text = create_rw_signal(String::new());
    let uploading = create_rw_signal(false);

    let upload = move |_| {
        if uploading.get_untracked() {
            return;
        }
        let raw = upload_text.get_untracked();
        let logs: Vec<LogUploadEntry> = match serde_json::from_str(&raw) {
            Ok(logs) => logs,
            Err(err) => {
                toasts.error(format!("Invalid log JSON: {}", err));
                return;
            }
        };
        if logs.is_empty() {
            toasts.info("Nothing to upload");
            return;
        }

        uploading.set(true);
        let api = ApiClient::for_session(&session);
        spawn_local(async move {
            match api.upload_logs(&logs).await {
                Ok(summary) => {
                    toasts.success(format!(
                        "Processed {} of {} log entries",
                        summary.processed_count, summary.total_logs
                    ));
                    let _ = upload_text.try_set(String::new());
                }
                Err(err) => toasts.error(format!("Log upload failed: {}", err)),
            }
            let _ = uploading.try_set(false);
        });
    };

    view! {
        <div class="view" role="main" aria-label="Settings">
            <TableCard title="Profile">
                {move || match profile_for_view.state.get() {
                    Remote::Loading => view! { <LoadingSpinner message="Loading profile..."/> }.into_view(),
                    Remote::Error(err) => {
                        let retry = profile_for_view.clone();
                        view! {
                            <ErrorState message=err retry=Callback::new(move |_| retry.reload())/>
                        }
                        .into_view()
                    }
                    Remote::Ready(user) => view! {
                        <div class="card-body">
                            <InfoRow label="Name">{user.name.clone()}</InfoRow>
                            <InfoRow label="Email">
                                <span class="mono">{user.email.clone()}</span>
                            </InfoRow>
                            <InfoRow label="Role">{user.role.clone()}</InfoRow>
                            <InfoRow label="User ID">
                                <span class="mono">{user.id}</span>
                            </InfoRow>
                        </div>
                    }
                    .into_view(),
                }}
            </TableCard>

            <TableCard title="Runtime Configuration">
                <div class="card-body">
                    <InfoRow label="API Base URL">
                        <span class="mono">{api_url}</span>
                    </InfoRow>
                    <InfoRow label="Dashboard Version">
                        <span class="mono">{version}</span>
                    </InfoRow>
                </div>
            </TableCard>

            <TableCard title="Batch Log Upload">
                <div class="card-body">
                    <p class="explanation">
                        "Paste a JSON array of log entries, e.g. "
                        <code class="mono">
                            {r#"[{"user_id": 3, "action": "login", "success": false}]"#}
                        </code>
                    </p>
                    <textarea
                        rows="6"
                        style="width: 100%;"
                        aria-label="Log entries JSON"
                        prop:value=move || upload_text.get()
                        on:input=move |ev| upload_text.set(event_target_value(&ev))
                    ></textarea>
                    <div style="margin-top: 0.6rem;">
                        <button
                            class="btn btn-primary"
                            on:click=upload
                            disabled=move || uploading.get()
                        >
                            {move || if uploading.get() { "Uploading..." } else { "Upload Logs" }}
                        </button>
                    </div>
                </div>
            </TableCard>
        </div>
    }
}
