//! Risk simulator.
//!
//! A what-if form embedded in the dashboard: collects a synthetic event,
//! posts it to the prediction endpoint, and shows the returned score,
//! explanation, and recommendations. One submission in flight at a time;
//! the submit control is disabled while a request is pending, and a
//! failure leaves the previous result visible.

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::primitives::{SeverityBadge, TableCard};
use crate::api::{ActionKind, ApiClient, PredictionRequest, PredictionResult};
use crate::format::{format_score, format_timestamp};
use crate::notify::use_toasts;
use crate::session::use_session;
use crate::severity::Severity;

/// A preset scenario. Only the fields a preset names are applied; the
/// rest of the draft keeps its prior values.
pub struct Preset {
    pub name: &'static str,
    pub action: Option<ActionKind>,
    pub resource: Option<&'static str>,
    pub location: Option<&'static str>,
    pub success: Option<bool>,
    pub login_frequency: Option<u32>,
    pub failed_attempts: Option<u32>,
    pub file_size: Option<u64>,
    pub session_duration: Option<u32>,
}

impl Preset {
    const fn blank(name: &'static str) -> Self {
        Self {
            name,
            action: None,
            resource: None,
            location: None,
            success: None,
            login_frequency: None,
            failed_attempts: None,
            file_size: None,
            session_duration: None,
        }
    }

    /// Shallow-merge this preset into the draft.
    pub fn apply(&self, draft: &mut PredictionRequest) {
        if let Some(action) = self.action {
            draft.action = action;
        }
        if let Some(resource) = self.resource {
            draft.resource = resource.to_string();
        }
        if let Some(location) = self.location {
            draft.location = location.to_string();
        }
        if let Some(success) = self.success {
            draft.success = success;
        }
        if let Some(login_frequency) = self.login_frequency {
            draft.login_frequency = login_frequency;
        }
        if let Some(failed_attempts) = self.failed_attempts {
            draft.failed_attempts = failed_attempts;
        }
        if let Some(file_size) = self.file_size {
            draft.file_size = file_size;
        }
        if let Some(session_duration) = self.session_duration {
            draft.session_duration = session_duration;
        }
    }
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        action: Some(ActionKind::Login),
        success: Some(true),
        failed_attempts: Some(0),
        login_frequency: Some(3),
        session_duration: Some(240),
        ..Preset::blank("Normal Login")
    },
    Preset {
        action: Some(ActionKind::Login),
        success: Some(false),
        failed_attempts: Some(5),
        session_duration: Some(5),
        ..Preset::blank("Failed Login Attempts")
    },
    Preset {
        action: Some(ActionKind::Download),
        resource: Some("/database/backup"),
        file_size: Some(2500),
        success: Some(true),
        ..Preset::blank("Large Data Transfer")
    },
    Preset {
        action: Some(ActionKind::SystemAccess),
        resource: Some("/admin/config"),
        location: Some("203.0.113.50"),
        success: Some(true),
        ..Preset::blank("Off-network Admin Access")
    },
];

/// The simulator form with preset scenarios and a result panel.
#[component]
pub fn RiskSimulator() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let draft = create_rw_signal(PredictionRequest::default());
    let submitting = create_rw_signal(false);
    let result = create_rw_signal::<Option<PredictionResult>>(None);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let request = draft.get_untracked();
        let api = ApiClient::for_session(&session);
        spawn_local(async move {
            match api.predict(&request).await {
                Ok(prediction) => {
                    let _ = result.try_set(Some(prediction));
                }
                // Keep the previous result visible so the user can retry.
                Err(err) => toasts.error(format!("Prediction failed: {}", err)),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <TableCard title="Risk Simulator">
            <div class="card-body">
                <div class="preset-row" role="group" aria-label="Preset scenarios">
                    {PRESETS
                        .iter()
                        .map(|preset| {
                            let name = preset.name;
                            view! {
                                <button
                                    type="button"
                                    class="btn"
                                    on:click=move |_| {
                                        if let Some(p) = PRESETS.iter().find(|p| p.name == name) {
                                            draft.update(|d| p.apply(d));
                                        }
                                    }
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <form class="form-grid" on:submit=submit>
                    <label class="form-field">
                        "User ID"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || draft.with(|d| d.user_id.to_string())
                            on:input=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse() {
                                    draft.update(|d| d.user_id = id);
                                }
                            }
                        />
                    </label>
                    <label class="form-field">
                        "Action"
                        <select on:change=move |ev| {
                            if let Some(action) = ActionKind::parse(&event_target_value(&ev)) {
                                draft.update(|d| d.action = action);
                            }
                        }>
                            {ActionKind::ALL
                                .iter()
                                .map(|action| {
                                    let action = *action;
                                    view! {
                                        <option
                                            value=action.as_str()
                                            selected=move || draft.with(|d| d.action == action)
                                        >
                                            {action.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form-field">
                        "Resource"
                        <input
                            placeholder="/path/to/resource"
                            prop:value=move || draft.with(|d| d.resource.clone())
                            on:input=move |ev| draft.update(|d| d.resource = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Location"
                        <input
                            placeholder="IP or region"
                            prop:value=move || draft.with(|d| d.location.clone())
                            on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Login Frequency"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.login_frequency.to_string())
                            on:input=move |ev| {
                                if let Ok(n) = event_target_value(&ev).parse() {
                                    draft.update(|d| d.login_frequency = n);
                                }
                            }
                        />
                    </label>
                    <label class="form-field">
                        "Failed Attempts"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.failed_attempts.to_string())
                            on:input=move |ev| {
                                if let Ok(n) = event_target_value(&ev).parse() {
                                    draft.update(|d| d.failed_attempts = n);
                                }
                            }
                        />
                    </label>
                    <label class="form-field">
                        "File Size (MB)"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.file_size.to_string())
                            on:input=move |ev| {
                                if let Ok(n) = event_target_value(&ev).parse() {
                                    draft.update(|d| d.file_size = n);
                                }
                            }
                        />
                    </label>
                    <label class="form-field">
                        "Session Duration (min)"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.session_duration.to_string())
                            on:input=move |ev| {
                                if let Ok(n) = event_target_value(&ev).parse() {
                                    draft.update(|d| d.session_duration = n);
                                }
                            }
                        />
                    </label>
                    <label class="form-field checkbox-field">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.success)
                            on:change=move |ev| draft.update(|d| d.success = event_target_checked(&ev))
                        />
                        "Successful"
                    </label>
                    <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Scoring..." } else { "Run Prediction" }}
                    </button>
                </form>

                {move || {
                    result.get().map(|prediction| {
                        let severity = Severity::from_score(prediction.risk_score);
                        view! {
                            <div class="result-panel" role="region" aria-label="Prediction result">
                                <div class="score-panel">
                                    <span class=format!("score-value {}", severity.class())>
                                        {format_score(prediction.risk_score)}
                                    </span>
                                    <SeverityBadge severity=severity/>
                                    <span class="header-user">
                                        {format_timestamp(&prediction.timestamp)}
                                    </span>
                                </div>
                                <p class="explanation">{prediction.explanation}</p>
                                <ul class="recommendation-list">
                                    {prediction
                                        .recommendations
                                        .into_iter()
                                        .map(|r| view! { <li>{r}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                }}
            </div>
        </TableCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(name: &str) -> &'static Preset {
        PRESETS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn failed_login_preset_overwrites_only_named_fields() {
        let mut draft = PredictionRequest {
            file_size: 123,
            resource: "/finance/reports".to_string(),
            location: "192.168.1.4".to_string(),
            login_frequency: 9,
            ..PredictionRequest::default()
        };
        preset("Failed Login Attempts").apply(&mut draft);

        assert_eq!(draft.action, ActionKind::Login);
        assert!(!draft.success);
        assert_eq!(draft.failed_attempts, 5);
        assert_eq!(draft.session_duration, 5);
        // Untouched fields retain prior values, including stale ones.
        assert_eq!(draft.file_size, 123);
        assert_eq!(draft.resource, "/finance/reports");
        assert_eq!(draft.location, "192.168.1.4");
        assert_eq!(draft.login_frequency, 9);
    }

    #[test]
    fn presets_compose_by_shallow_merge() {
        let mut draft = PredictionRequest::default();
        preset("Large Data Transfer").apply(&mut draft);
        assert_eq!(draft.file_size, 2500);

        preset("Failed Login Attempts").apply(&mut draft);
        // The second preset does not name file_size or resource, so the
        // first preset's values survive.
        assert_eq!(draft.file_size, 2500);
        assert_eq!(draft.resource, "/database/backup");
        assert_eq!(draft.failed_attempts, 5);
    }

    #[test]
    fn every_preset_has_a_unique_name() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in PRESETS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
