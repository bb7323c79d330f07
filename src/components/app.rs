// ============================================================================
// APP ROOT - router, proveedor de sesión y tabla de rutas principal
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::admin_layout::AdminLayout;
use super::companies_page::CompaniesPage;
use super::dashboard_page::DashboardPage;
use super::guards::{RequireAdmin, RequireAuth};
use super::home_page::HomePage;
use super::login_page::LoginPage;
use super::navbar::Navbar;
use super::register_page::RegisterPage;
use super::routes::Route;
use crate::hooks::SessionProvider;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Companies => html! { <CompaniesPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <DashboardPage />
            </RequireAuth>
        },
        Route::AdminRoot | Route::Admin => html! {
            <RequireAdmin>
                <AdminLayout />
            </RequireAdmin>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to Home"}</Link<Route>>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Navbar />
                <main class="app-main">
                    <Switch<Route> render={switch} />
                </main>
                <footer class="app-footer">
                    <p>{"© EcoWaste. Connecting communities with waste collection services."}</p>
                </footer>
            </SessionProvider>
        </BrowserRouter>
    }
}
