use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::feedback::{Alert, AlertKind, Spinner};
use super::routes::Route;
use crate::hooks::use_session;
use crate::models::{LoginRequest, Role};

/// Destino de cada rol tras iniciar sesión
pub fn home_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminRoot,
        Role::Company => Route::Dashboard,
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    // Mensaje viejo de un intento anterior
    {
        let clear_error = session.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let login = session.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value().trim().to_string();
                let password = password_input.value();
                if email.is_empty() || password.is_empty() {
                    return;
                }
                login.emit(LoginRequest { email, password });
            }
        })
    };

    let state = &session.state;
    if state.initializing {
        return html! { <Spinner /> };
    }
    if let Some(role) = state.role() {
        return html! { <Redirect<Route> to={home_for(role)} /> };
    }

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{"Sign in to your account"}</h1>

                if let Some(error) = &state.error {
                    <Alert
                        kind={AlertKind::Error}
                        message={error.clone()}
                        on_dismiss={session.clear_error.clone()}
                    />
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email address"}</label>
                        <input type="email" id="email" name="email" ref={email_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" name="password" ref={password_ref} required=true />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={state.pending}>
                        {if state.pending { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register}>{"Register your company"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_land_on_their_home() {
        assert_eq!(home_for(Role::Admin), Route::AdminRoot);
        assert_eq!(home_for(Role::Company), Route::Dashboard);
    }
}
