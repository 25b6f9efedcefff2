use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

mod components;
mod pages;
mod timer;

use pages::Dashboard;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"No dashboard at this address."</p> }>
                <Route path=path!("/") view=Dashboard/>
            </Routes>
        </Router>
    }
}
