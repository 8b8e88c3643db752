//! CyberGuard Dashboard - Leptos-based WebAssembly UI
//!
//! Browser-facing dashboard for the CyberGuard risk monitoring platform.
//! Renders user risk scores, activity timelines, recommendations, and a
//! manual risk simulator. All scoring, authentication issuance, and
//! persistence live in the backend; this crate only fetches and renders.
//!
//! ## Configuration
//!
//! The serving backend can inject runtime configuration:
//!
//! ```html
//! <meta name="cyberguard:api-url" content="http://localhost:8000">
//! <meta name="cyberguard:version" content="0.1.0">
//! ```
//!
//! or via JavaScript:
//!
//! ```javascript
//! window.__CYBERGUARD_CONFIG__ = { api_url: "http://localhost:8000" };
//! ```
//!
//! ## Architecture
//!
//! ```text
//! route -> page component -> use_remote (gloo-net fetch)
//!       -> Remote<T> signal (Loading | Ready | Error)
//!       -> derived view model -> render
//! ```
//!
//! The session context gates every route except login/registration and
//! supplies the bearer token for outbound requests.

pub mod api;
pub mod components;
pub mod config;
pub mod format;
pub mod notify;
pub mod remote;
pub mod session;
pub mod severity;

use leptos::*;
use leptos_router::*;

use components::dashboard::DashboardView;
use components::login::{LoginView, RegisterView};
use components::recommendations::RecommendationsView;
use components::settings::SettingsView;
use components::user_detail::UserDetailView;
use components::users::UsersView;
use components::{Header, Sidebar};
use notify::{ToastStack, Toasts};
use session::{use_session, Session};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    console_error_panic_hook::set_once();

    provide_context(Session::restore());
    provide_context(Toasts::new());

    view! {
        <Router>
            <ToastStack/>
            <Routes>
                <Route path="/login" view=LoginView/>
                <Route path="/register" view=RegisterView/>
                <Route path="" view=Shell>
                    <Route path="/" view=DashboardView/>
                    <Route path="/users" view=UsersView/>
                    <Route path="/users/:id" view=UserDetailView/>
                    <Route path="/recommendations" view=RecommendationsView/>
                    <Route path="/settings" view=SettingsView/>
                </Route>
            </Routes>
        </Router>
    }
}

/// Authenticated shell: sidebar, header, and the routed page. Navigating
/// here without a session redirects to the login screen.
#[component]
fn Shell() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <div class="app">
                <Sidebar/>
                <main class="main">
                    <Header/>
                    <div class="content">
                        <Outlet/>
                    </div>
                </main>
            </div>
        </Show>
    }
}

/// Mount the application to the DOM.
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    mount_to_body(|| view! { <App/> });
}
