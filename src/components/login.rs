//! Login and registration screens.

use leptos::*;
use leptos_router::{use_navigate, A};
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, LoginRequest, RegisterRequest};
use crate::notify::use_toasts;
use crate::session::use_session;

/// Sign-in form. On success the session is stored and the user lands on
/// the dashboard.
#[component]
pub fn LoginView() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let credentials = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match ApiClient::anonymous().login(&credentials).await {
                Ok(auth) => {
                    session.login(auth);
                    navigate("/", Default::default());
                }
                Err(err) => toasts.error(format!("Sign-in failed: {}", err)),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="auth-card" on:submit=submit>
                <h1 class="auth-title">"CyberGuard"</h1>
                <label class="form-field">
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-alt">
                    "No account? " <A href="/register">"Register"</A>
                </p>
            </form>
        </div>
    }
}

/// Registration form. The backend signs the new user in immediately.
#[component]
pub fn RegisterView() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal("analyst".to_string());
    let submitting = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let request = RegisterRequest {
            email: email.get_untracked(),
            name: name.get_untracked(),
            password: password.get_untracked(),
            role: Some(role.get_untracked()),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match ApiClient::anonymous().register(&request).await {
                Ok(auth) => {
                    session.login(auth);
                    navigate("/", Default::default());
                }
                Err(err) => toasts.error(format!("Registration failed: {}", err)),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="auth-card" on:submit=submit>
                <h1 class="auth-title">"Create account"</h1>
                <label class="form-field">
                    "Name"
                    <input
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Role"
                    <select on:change=move |ev| role.set(event_target_value(&ev))>
                        <option value="analyst" selected=move || role.get() == "analyst">"Analyst"</option>
                        <option value="admin" selected=move || role.get() == "admin">"Admin"</option>
                    </select>
                </label>
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Register" }}
                </button>
                <p class="auth-alt">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
