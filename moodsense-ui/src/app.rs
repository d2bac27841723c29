//! App Root Component
//!
//! Owns the active view and renders the sidebar next to it.

use leptos::*;

use crate::components::Sidebar;
use crate::pages::{HrDashboard, VibeCheck};
use crate::state::View;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let (active, set_active) = create_signal(View::default());

    view! {
        <div class="min-h-screen bg-slate-100 flex">
            <Sidebar current=active on_select=Callback::new(move |next: View| set_active.set(next)) />

            <main class="flex-1 ml-64 min-h-screen">
                {move || match active.get() {
                    View::Employee => view! { <VibeCheck /> }.into_view(),
                    View::Hr => view! { <HrDashboard /> }.into_view(),
                }}
            </main>
        </div>
    }
}
