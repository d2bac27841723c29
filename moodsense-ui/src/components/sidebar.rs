//! Sidebar Component
//!
//! Fixed navigation column with brand block, view links and profile footer.

use leptos::*;

use crate::state::{View, NAV_ITEMS};

const PROFILE_NAME: &str = "Manu Sharma";

/// Up to two initials from a display name
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Navigation sidebar. Renders only from `current` and reports clicks via `on_select`.
#[component]
pub fn Sidebar(#[prop(into)] current: Signal<View>, on_select: Callback<View>) -> impl IntoView {
    view! {
        <aside class="w-64 h-screen bg-slate-900 text-white flex flex-col shadow-2xl fixed left-0 top-0 z-50 border-r border-slate-800">
            // Brand
            <div class="p-6 flex items-center gap-3 border-b border-slate-800">
                <div class="bg-gradient-to-tr from-blue-500 to-purple-500 w-10 h-10 rounded-lg flex items-center justify-center text-xl">
                    "🧠"
                </div>
                <div>
                    <h1 class="text-lg font-bold tracking-tight">"MoodSense"</h1>
                    <p class="text-xs text-slate-400 font-medium">"Enterprise AI"</p>
                </div>
            </div>

            <nav class="flex-1 p-4 space-y-2 mt-4">
                <p class="px-4 text-xs font-bold text-slate-500 uppercase tracking-wider mb-2">"Menu"</p>
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let target = item.view;
                        let is_active = move || current.get() == target;
                        view! {
                            <button
                                data-view=target.id()
                                on:click=move |_| on_select.call(target)
                                class=move || {
                                    let base = "w-full flex items-center gap-3 px-4 py-3 rounded-xl text-sm font-medium transition-all";
                                    if is_active() {
                                        format!("{} bg-blue-600 text-white shadow-lg", base)
                                    } else {
                                        format!("{} text-slate-400 hover:bg-slate-800 hover:text-white", base)
                                    }
                                }
                            >
                                <span class="text-lg">{item.icon}</span>
                                {item.label}
                                <Show when=is_active>
                                    <span class="ml-auto w-2 h-2 bg-white rounded-full" />
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            // Profile
            <div class="p-4 border-t border-slate-800">
                <div class="flex items-center gap-3 p-3 rounded-xl hover:bg-slate-800 transition-colors">
                    <div class="w-9 h-9 rounded-full bg-gradient-to-r from-emerald-400 to-cyan-400 flex items-center justify-center text-xs font-bold text-slate-900">
                        {initials(PROFILE_NAME)}
                    </div>
                    <div class="flex-1">
                        <p class="text-sm font-bold text-white">{PROFILE_NAME}</p>
                        <p class="text-xs text-slate-400">"View Profile"</p>
                    </div>
                </div>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Manu Sharma"), "MS");
        assert_eq!(initials("Gurveer"), "G");
        assert_eq!(initials("ishika agarwal extra"), "IA");
        assert_eq!(initials(""), "");
    }
}
