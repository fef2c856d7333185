//! # catalyst-dashboard-leptos
//!
//! Browser client for the catalyst risk dashboard, rendered client-side with
//! Leptos.
//!
//! ## Responsibilities
//! - Route between the login page, the dashboard and customer detail pages
//! - Implement the client ports: [`api::HttpRiskApi`] (risk API over
//!   `gloo-net`) and [`timer::GlooDelay`] (timers over `gloo-timers`)
//! - Render view state produced by `catalyst-app` services
//!
//! Every page except `/login` renders inside the sidebar/header shell. No
//! route requires a session.

use leptos::prelude::*;
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    path,
};

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod timer;

use components::{Layout, Shell};
use pages::{CustomerDetail, Dashboard, Login, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(config::load());

    view! {
        <Router>
            <Routes fallback=|| view! { <Shell><NotFound/></Shell> }>
                <Route path=path!("/login") view=Login/>
                <ParentRoute path=path!("") view=Layout>
                    <Route path=path!("") view=Dashboard/>
                    <Route path=path!("customers") view=Dashboard/>
                    <Route path=path!("customer/:id") view=CustomerDetail/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
