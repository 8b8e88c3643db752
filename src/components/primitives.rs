//! Reusable UI primitive components.
//!
//! Foundational building blocks shared by every view: loading and error
//! states, badges, stat cards, table containers, and the search input.

use leptos::*;

use super::icons::SearchIcon;
use crate::severity::Severity;

// ============================================================================
// Loading & error states
// ============================================================================

/// Loading spinner with optional message.
#[component]
pub fn LoadingSpinner(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <svg class="spinner" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                <circle class="spinner-track" cx="12" cy="12" r="10" fill="none" stroke-width="3"/>
                <circle class="spinner-head" cx="12" cy="12" r="10" fill="none" stroke-width="3"
                        stroke-dasharray="31.4 31.4" stroke-linecap="round"/>
            </svg>
            {message.map(|msg| view! { <span class="loading-message">{msg}</span> })}
        </div>
    }
}

/// Error state with an optional retry action.
#[component]
pub fn ErrorState(
    message: String,
    #[prop(optional)] retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-state" role="alert">
            <div class="error-icon">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M12 9v3.75m-9.303 3.376c-.866 1.5.217 3.374 1.948 3.374h14.71c1.73 0 2.813-1.874 1.948-3.374L13.949 3.378c-.866-1.5-3.032-1.5-3.898 0L2.697 16.126ZM12 15.75h.007v.008H12v-.008Z"/>
                </svg>
            </div>
            <h3 class="error-title">"Something went wrong"</h3>
            <p class="error-message">{message}</p>
            {retry.map(|on_retry| view! {
                <button class="btn btn-primary" on:click=move |_| on_retry.call(())>
                    "Try Again"
                </button>
            })}
        </div>
    }
}

/// Generic empty state.
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <div class="empty-icon">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M20.25 7.5l-.625 10.632a2.25 2.25 0 0 1-2.247 2.118H6.622a2.25 2.25 0 0 1-2.247-2.118L3.75 7.5m16.5 0H3.75m16.5 0-1.5-3h-13.5l-1.5 3"/>
                </svg>
            </div>
            <div class="empty-text">{title}</div>
            {description.map(|desc| view! { <p class="empty-description">{desc}</p> })}
        </div>
    }
}

// ============================================================================
// Badges
// ============================================================================

/// Badge variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Orange,
    Error,
    Info,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Orange => "badge badge-orange",
            BadgeVariant::Error => "badge badge-error",
            BadgeVariant::Info => "badge badge-info",
        }
    }
}

impl From<Severity> for BadgeVariant {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Minimal | Severity::Low => BadgeVariant::Success,
            Severity::Medium => BadgeVariant::Warning,
            Severity::High => BadgeVariant::Orange,
            Severity::Critical => BadgeVariant::Error,
        }
    }
}

/// Badge component with text.
#[component]
pub fn Badge<T: IntoView + 'static>(
    text: T,
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, default = false)] with_dot: bool,
) -> impl IntoView {
    view! {
        <span class=variant.class()>
            {with_dot.then(|| view! { <span class="badge-dot"></span> })}
            {text}
        </span>
    }
}

/// Severity badge colored by the shared banding.
#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    view! {
        <Badge text=severity.label() variant=BadgeVariant::from(severity) with_dot=true/>
    }
}

// ============================================================================
// Cards & containers
// ============================================================================

/// Stat card for overview metrics.
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] color: Option<&'static str>,
    #[prop(optional)] icon: Option<View>,
) -> impl IntoView {
    let class = format!("stat-card {}", color.unwrap_or(""));

    view! {
        <div class=class>
            <div class="stat-header">
                {icon.map(|i| view! { <div class="stat-icon">{i}</div> })}
                <span class="stat-label">{label}</span>
            </div>
            <div class="stat-value" aria-label=format!("{}: ", label)>
                {move || value.get()}
            </div>
        </div>
    }
}

/// Table card container with title, optional badge, optional action.
#[component]
pub fn TableCard(
    title: &'static str,
    children: Children,
    #[prop(optional)] action: Option<View>,
    #[prop(optional)] badge: Option<View>,
) -> impl IntoView {
    view! {
        <div class="table-card">
            <div class="table-header">
                <div class="table-title-group">
                    <div class="table-title">{title}</div>
                    {badge}
                </div>
                {action}
            </div>
            {children()}
        </div>
    }
}

/// Key-value info row.
#[component]
pub fn InfoRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{children()}</span>
        </div>
    }
}

// ============================================================================
// Search
// ============================================================================

/// Search input bound to a string signal.
#[component]
pub fn SearchInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <div class="search-icon" aria-hidden="true">
                <SearchIcon/>
            </div>
            <input
                type="search"
                placeholder=placeholder
                class="search-input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                aria-label=placeholder
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_badge_variant() {
        assert_eq!(BadgeVariant::from(Severity::Minimal), BadgeVariant::Success);
        assert_eq!(BadgeVariant::from(Severity::Low), BadgeVariant::Success);
        assert_eq!(BadgeVariant::from(Severity::Medium), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::from(Severity::High), BadgeVariant::Orange);
        assert_eq!(BadgeVariant::from(Severity::Critical), BadgeVariant::Error);
    }
}
