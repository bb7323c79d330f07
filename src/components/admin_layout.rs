use yew::prelude::*;
use yew_router::prelude::*;

use super::admin_companies::AdminCompaniesPage;
use super::admin_dashboard::AdminDashboard;
use super::admin_regions::AdminRegionsPage;
use super::routes::AdminRoute;

fn switch_admin(route: AdminRoute) -> Html {
    match route {
        AdminRoute::Dashboard | AdminRoute::Overview => html! { <AdminDashboard /> },
        AdminRoute::Companies => html! { <AdminCompaniesPage /> },
        AdminRoute::Regions => html! { <AdminRegionsPage /> },
        AdminRoute::NotFound => html! { <Redirect<AdminRoute> to={AdminRoute::Dashboard} /> },
    }
}

/// Navegación lateral + vistas anidadas de admin
#[function_component(AdminLayout)]
pub fn admin_layout() -> Html {
    let route = use_route::<AdminRoute>();
    let link = |to: AdminRoute, label: &'static str| {
        let active = match (&route, &to) {
            (Some(AdminRoute::Dashboard | AdminRoute::Overview), AdminRoute::Dashboard) => true,
            (Some(current), _) => *current == to,
            _ => false,
        };
        html! {
            <Link<AdminRoute> to={to} classes={classes!("admin-nav-link", active.then_some("active"))}>
                {label}
            </Link<AdminRoute>>
        }
    };

    html! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <h2>{"Admin Panel"}</h2>
                <nav>
                    {link(AdminRoute::Dashboard, "Dashboard")}
                    {link(AdminRoute::Companies, "Companies")}
                    {link(AdminRoute::Regions, "Regions")}
                </nav>
            </aside>
            <main class="admin-content">
                <Switch<AdminRoute> render={switch_admin} />
            </main>
        </div>
    }
}
