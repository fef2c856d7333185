//! Application shell: fixed sidebar, header and content region.

use catalyst_app::routes::{NAV_ITEMS, NavIcon, NavItem};
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

fn nav_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Dashboard => "\u{25A6}",
        NavIcon::Users => "\u{263A}",
        NavIcon::Settings => "\u{2699}",
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let location = use_location();
    let class = move || {
        if location.pathname.with(|path| item.is_active(path)) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <li>
            <a href=item.href class=class>
                <span class="nav-icon">{nav_glyph(item.icon)}</span>
                {item.label}
            </a>
        </li>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="brand">
                <h1>"CATALYST"</h1>
                <p>"Proactive Risk Management"</p>
            </div>
            <nav>
                <ul>
                    {NAV_ITEMS.into_iter().map(|item| view! { <NavLink item=item/> }).collect_view()}
                </ul>
            </nav>
            // No session exists to end.
            <button class="logout" type="button">"Logout"</button>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="topbar">
            <h2>"Overview"</h2>
            <div class="topbar-user">
                <span class="bell" title="Notifications">"\u{1F514}"</span>
                <span class="avatar">"JD"</span>
                <div class="user-meta">
                    <span class="user-name">"John Doe"</span>
                    <span class="user-role">"Risk Manager"</span>
                </div>
            </div>
        </header>
    }
}

/// Sidebar and header around arbitrary content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar/>
            <div class="shell-main">
                <Header/>
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}

/// Shell around the matched nested route.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <Shell>
            <Outlet/>
        </Shell>
    }
}
