use yew::prelude::*;
use yew_router::prelude::*;

use super::feedback::{Alert, AlertKind, Spinner};
use super::routes::AdminRoute;
use crate::hooks::use_admin_stats;
use crate::viewmodels::StatsState;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let stats = use_admin_stats();

    let stats = match &*stats {
        StatsState::Loading => return html! { <Spinner /> },
        StatsState::Failed(message) => {
            return html! { <Alert kind={AlertKind::Error} message={message.clone()} /> };
        }
        StatsState::Loaded(stats) => stats.clone(),
    };

    html! {
        <div class="admin-dashboard">
            <h1>{"Admin Dashboard"}</h1>
            <p>{"Welcome to the EcoWaste admin dashboard. Manage companies, regions, and view statistics."}</p>

            <div class="quick-links">
                <Link<AdminRoute> to={AdminRoute::Companies} classes="quick-link">
                    <span class="stat-value">{stats.total_companies.to_string()}</span>
                    <span class="stat-label">{"Total Companies"}</span>
                </Link<AdminRoute>>
                <Link<AdminRoute> to={AdminRoute::Regions} classes="quick-link">
                    <span class="stat-value">{stats.total_regions.to_string()}</span>
                    <span class="stat-label">{"Service Regions"}</span>
                </Link<AdminRoute>>
            </div>

            <section class="panel">
                <h3>{"Companies per Region"}</h3>
                if stats.companies_per_region.is_empty() {
                    <p class="muted">{"No regions yet."}</p>
                }
                { for stats.companies_per_region.iter().map(|entry| {
                    let share = stats.share_of(entry);
                    html! {
                        <div class="region-stat" key={entry.region_name.clone()}>
                            <div class="region-stat-label">
                                <span>{entry.region_name.clone()}</span>
                                <span>{format!("{} companies", entry.count)}</span>
                            </div>
                            <div class="bar">
                                <div class="bar-fill" style={format!("width: {}%", share)}></div>
                            </div>
                        </div>
                    }
                }) }
            </section>
        </div>
    }
}
