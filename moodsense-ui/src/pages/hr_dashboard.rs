//! HR Dashboard Page
//!
//! Roster with risk badges, department energy and a per-employee detail panel.

use leptos::*;

use crate::api;
use crate::components::{blocking_alert, DepartmentChart, TrendChart};
use crate::state::{roster_battery_class, Employee, HrAction, HrState, RefreshOutcome};

#[component]
pub fn HrDashboard() -> impl IntoView {
    let hr = create_rw_signal(HrState::default());
    let selected = create_memo(move |_| hr.with(|s| s.selected.clone()));
    let departments = create_memo(move |_| hr.with(|s| s.departments.clone()));

    let refresh = move || {
        let Some(epoch) = hr.try_update(HrState::begin_refresh) else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_dashboard().await;
            match hr.try_update(|s| s.apply_refresh(epoch, result)) {
                Some(RefreshOutcome::Failed(e)) => {
                    web_sys::console::error_1(&format!("Failed to fetch HR dashboard: {}", e).into());
                }
                Some(RefreshOutcome::Stale) => {
                    web_sys::console::log_1(&format!("Dropped stale dashboard response #{}", epoch).into());
                }
                Some(RefreshOutcome::Applied) | None => {}
            }
        });
    };

    // Fetch on mount
    create_effect(move |_| refresh());

    view! {
        <div class="p-6 max-w-7xl mx-auto space-y-8">
            <header class="flex flex-col md:flex-row justify-between items-center bg-white p-6 rounded-2xl shadow-sm border border-slate-100">
                <div>
                    <h1 class="text-3xl font-extrabold text-slate-800 tracking-tight">"🧠 MoodSense AI"</h1>
                    <p class="text-slate-500 font-medium">"Workforce Intelligence Platform"</p>
                </div>
                <button
                    aria-busy=move || hr.with(|s| s.loading).to_string()
                    on:click=move |_| refresh()
                    class="bg-slate-900 hover:bg-slate-700 text-white px-5 py-2 rounded-xl shadow-lg transition-all"
                >
                    "Refresh Data"
                </button>
            </header>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <RosterTable hr=hr />

                <div class="space-y-6">
                    <div class="bg-white p-6 rounded-3xl shadow-lg border border-slate-100">
                        <h3 class="text-sm font-bold text-slate-400 uppercase mb-4">"Department Energy"</h3>
                        <DepartmentChart departments=departments />
                    </div>

                    {move || match selected.get() {
                        Some(employee) => view! { <EmployeeDetail employee=employee /> }.into_view(),
                        None => view! {
                            <div class="bg-slate-50 p-6 rounded-3xl border border-dashed border-slate-300 text-center text-slate-400 flex flex-col items-center justify-center h-64">
                                <span class="text-3xl mb-2">"👈"</span>
                                "Select an employee to view AI insights"
                            </div>
                        }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RosterTable(hr: RwSignal<HrState>) -> impl IntoView {
    let employees = create_memo(move |_| hr.with(|s| s.employees.clone()));

    view! {
        <div class="lg:col-span-2 bg-white rounded-3xl shadow-xl border border-slate-100 overflow-hidden">
            <div class="p-6 border-b border-slate-100 flex justify-between items-center">
                <h3 class="text-xl font-bold text-slate-800">"👥 Employee Roster"</h3>
                <span class="bg-slate-100 text-slate-600 px-3 py-1 rounded-full text-xs font-bold">
                    {move || format!("{} Active", employees.with(Vec::len))}
                </span>
            </div>

            <table class="w-full text-left">
                <thead class="bg-slate-50">
                    <tr>
                        <th class="p-4 text-xs font-bold text-slate-400 uppercase">"Name"</th>
                        <th class="p-4 text-xs font-bold text-slate-400 uppercase">"Risk Level"</th>
                        <th class="p-4 text-xs font-bold text-slate-400 uppercase">"Battery"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-100">
                    {move || {
                        employees
                            .get()
                            .into_iter()
                            .map(|emp| {
                                let id = emp.id;
                                view! {
                                    <tr
                                        on:click=move |_| {
                                            hr.update(|s| {
                                                s.select(id);
                                            })
                                        }
                                        class=move || {
                                            let base = "cursor-pointer transition-colors hover:bg-blue-50/50";
                                            if hr.with(|s| s.is_selected(id)) {
                                                format!("{} bg-blue-50 border-l-4 border-blue-500", base)
                                            } else {
                                                base.to_string()
                                            }
                                        }
                                    >
                                        <td class="p-4">
                                            <div class="font-bold text-slate-700">{emp.name.clone()}</div>
                                            <div class="text-xs text-slate-500">{emp.role.clone()}</div>
                                        </td>
                                        <td class="p-4">
                                            <span class=format!("px-3 py-1 rounded-full text-xs font-bold {}", emp.risk_status.badge_class())>
                                                {emp.risk_status.label()}
                                            </span>
                                        </td>
                                        <td class="p-4">
                                            <div class="w-24 bg-slate-200 rounded-full h-2.5">
                                                <div
                                                    class=format!("h-2.5 rounded-full {}", roster_battery_class(emp.avg_battery))
                                                    style=format!("width: {}%", emp.avg_battery.min(100))
                                                />
                                            </div>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn EmployeeDetail(employee: Employee) -> impl IntoView {
    let history = employee.history.clone();
    let kudos_for = employee.clone();
    let meeting_for = employee.clone();

    view! {
        <div class="bg-gradient-to-br from-slate-800 to-slate-900 text-white p-6 rounded-3xl shadow-2xl">
            <div class="flex justify-between items-start mb-6">
                <div>
                    <h2 class="text-2xl font-bold">{employee.name.clone()}</h2>
                    <p class="text-slate-400 text-sm">{format!("{} • {}", employee.role, employee.dept)}</p>
                </div>
                <div class="text-3xl">{employee.forecast_icon()}</div>
            </div>

            <div class="mb-6">
                <h4 class="text-xs font-bold text-slate-400 uppercase mb-2">"7-Day Energy Trend"</h4>
                <TrendChart points=Signal::derive(move || history.clone()) />
            </div>

            <div class="bg-white/10 p-4 rounded-xl mb-6 border border-white/10">
                <h4 class="text-xs font-bold text-blue-300 uppercase mb-2">"AI Detected Drivers"</h4>
                <div class="flex flex-wrap gap-2">
                    {if employee.drivers.is_empty() {
                        view! {
                            <span class="text-slate-400 text-xs italic">"No negative triggers detected."</span>
                        }.into_view()
                    } else {
                        employee
                            .drivers
                            .iter()
                            .map(|driver| view! {
                                <span class="px-2 py-1 bg-red-500/20 text-red-200 border border-red-500/30 rounded text-xs font-bold">
                                    {driver.clone()}
                                </span>
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="grid grid-cols-2 gap-3">
                <button
                    on:click=move |_| blocking_alert(&HrAction::Kudos.acknowledgment(&kudos_for))
                    class="bg-white/10 hover:bg-white/20 py-2 rounded-lg text-sm font-semibold transition-colors"
                >
                    "👏 Send Kudos"
                </button>
                <button
                    on:click=move |_| blocking_alert(&HrAction::Meeting.acknowledgment(&meeting_for))
                    class="bg-blue-600 hover:bg-blue-500 py-2 rounded-lg text-sm font-semibold transition-colors"
                >
                    "📅 Schedule 1:1"
                </button>
            </div>
        </div>
    }
}
