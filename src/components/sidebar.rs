//! Sidebar navigation component.

use leptos::*;
use leptos_router::*;

use super::icons::{BulbIcon, GearIcon, HomeIcon, ShieldIcon, UsersIcon};
use crate::config::DashboardConfig;
use crate::session::use_session;

/// Sidebar navigation with branding and a session footer.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let version = DashboardConfig::load().version;

    view! {
        <aside class="sidebar" role="navigation" aria-label="Main navigation">
            <div class="logo" aria-label="CyberGuard Dashboard">
                <div class="logo-icon" aria-hidden="true"><ShieldIcon/></div>
                <span class="logo-text">"CyberGuard"</span>
                {version.map(|v| view! { <span class="logo-version">{v}</span> })}
            </div>

            <nav class="nav" aria-label="Primary">
                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Overview"</div>
                    <A href="/" class="nav-link" active_class="active" exact=true>
                        <HomeIcon/>
                        <span>"Dashboard"</span>
                    </A>
                </div>

                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Monitoring"</div>
                    <A href="/users" class="nav-link" active_class="active">
                        <UsersIcon/>
                        <span>"Users"</span>
                    </A>
                    <A href="/recommendations" class="nav-link" active_class="active">
                        <BulbIcon/>
                        <span>"Recommendations"</span>
                    </A>
                </div>

                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Account"</div>
                    <A href="/settings" class="nav-link" active_class="active">
                        <GearIcon/>
                        <span>"Settings"</span>
                    </A>
                </div>
            </nav>

            <div class="sidebar-footer" role="status" aria-label="Session">
                <div class="sidebar-stat">
                    <span class="sidebar-stat-label">"Signed in"</span>
                    <span class="sidebar-stat-value">
                        {move || session.user().map(|u| u.email).unwrap_or_default()}
                    </span>
                </div>
            </div>
        </aside>
    }
}
