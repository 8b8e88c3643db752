//! Header component.
//!
//! Top bar showing the current page title, the signed-in user, and the
//! logout action.

use leptos::*;
use leptos_router::{use_location, use_navigate};

use super::icons::LogoutIcon;
use crate::session::use_session;

/// Derive a page title from the route path.
pub fn page_title(path: &str) -> &'static str {
    match path {
        "/" => "Dashboard",
        "/users" => "Users",
        "/recommendations" => "Recommendations",
        "/settings" => "Settings",
        p if p.starts_with("/users/") => "User Detail",
        _ => "Dashboard",
    }
}

/// Page header with user identity and logout.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let title = move || page_title(&location.pathname.get());

    let logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <header class="header" role="banner">
            <div class="header-left">
                <h1 class="header-title" aria-live="polite">{title}</h1>
            </div>
            <div class="header-right">
                <span class="header-user">
                    {move || {
                        session
                            .user()
                            .map(|u| format!("{} ({})", u.name, u.role))
                            .unwrap_or_default()
                    }}
                </span>
                <button class="btn" on:click=logout aria-label="Sign out">
                    <LogoutIcon/>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_per_route() {
        assert_eq!(page_title("/"), "Dashboard");
        assert_eq!(page_title("/users"), "Users");
        assert_eq!(page_title("/users/42"), "User Detail");
        assert_eq!(page_title("/recommendations"), "Recommendations");
        assert_eq!(page_title("/settings"), "Settings");
        assert_eq!(page_title("/nope"), "Dashboard");
    }
}
