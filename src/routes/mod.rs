mod home;
mod not_found;
mod sign_in;

pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use sign_in::SignInPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route path constants shared by navigation and redirects.
pub(crate) mod paths {
    pub(crate) const HOME: &str = "/";
    pub(crate) const SIGN_IN: &str = "/signin";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/signin") view=SignInPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
