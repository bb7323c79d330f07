// ============================================================================
// REGISTER PAGE - alta de empresas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::feedback::{Alert, AlertKind, Spinner};
use super::form_field::FormField;
use super::region_picker::RegionPicker;
use super::routes::Route;
use crate::hooks::{use_regions, use_session};
use crate::models::RegionId;
use crate::utils::FieldErrors;
use crate::viewmodels::profile_viewmodel::toggle_region;
use crate::viewmodels::RegistrationForm;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let regions = use_regions();
    let form = use_state(RegistrationForm::default);
    let errors = use_state(FieldErrors::default);
    let submitted = use_state(|| false);

    {
        let clear_error = session.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    // Un setter por campo de texto
    let field = |apply: fn(&mut RegistrationForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_toggle = {
        let form = form.clone();
        Callback::from(move |id: RegionId| {
            let mut next = (*form).clone();
            toggle_region(&mut next.regions, id);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        let register = session.register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(request) => {
                    errors.set(FieldErrors::default());
                    submitted.set(true);
                    register.emit(request);
                }
                Err(field_errors) => {
                    log::warn!("⚠️ Formulario de registro con {} campo(s) inválido(s)", field_errors.len());
                    errors.set(field_errors);
                }
            }
        })
    };

    let state = &session.state;
    if state.initializing {
        return html! { <Spinner /> };
    }
    if *submitted && state.is_company() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let error_for = |name: &str| errors.get(name).map(|m| AttrValue::from(m.to_string()));
    let region_options = match &*regions {
        Ok(list) => list.clone(),
        Err(_) => Vec::new(),
    };

    html! {
        <div class="auth-page">
            <div class="auth-card wide">
                <h1>{"Register Your Company"}</h1>

                if let Some(error) = &state.error {
                    <Alert kind={AlertKind::Error} message={error.clone()} on_dismiss={session.clear_error.clone()} />
                }
                if let Err(error) = &*regions {
                    <Alert kind={AlertKind::Error} message={error.clone()} />
                }

                <form class="auth-form" onsubmit={on_submit} novalidate=true>
                    <FormField id="company_name" label="Company Name" value={form.company_name.clone()}
                        on_change={field(|f, v| f.company_name = v)} error={error_for("company_name")} />
                    <FormField id="email" label="Email Address" input_type="email" value={form.email.clone()}
                        on_change={field(|f, v| f.email = v)} error={error_for("email")} />
                    <FormField id="password" label="Password" input_type="password" value={form.password.clone()}
                        on_change={field(|f, v| f.password = v)} error={error_for("password")} />
                    <FormField id="phone" label="Phone Number" input_type="tel" value={form.phone.clone()}
                        on_change={field(|f, v| f.phone = v)} error={error_for("phone")} />
                    <RegionPicker regions={region_options} selected={form.regions.clone()} {on_toggle}
                        error={error_for("regions")} />
                    <FormField id="description" label="Company Description" multiline={true}
                        value={form.description.clone()}
                        placeholder="Describe your services, schedules and specialties"
                        on_change={field(|f, v| f.description = v)} error={error_for("description")} />

                    <button type="submit" class="btn btn-primary" disabled={state.pending}>
                        {if state.pending { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-switch">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
