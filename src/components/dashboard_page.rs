use yew::prelude::*;

use super::feedback::{Alert, AlertKind, Spinner};
use super::form_field::FormField;
use super::region_picker::RegionPicker;
use crate::hooks::use_company_profile;
use crate::viewmodels::ProfileField;

/// Editor del perfil de la propia empresa
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let profile = use_company_profile();
    let state = &profile.state;

    if state.loading {
        return html! { <Spinner /> };
    }

    let on_change = |field: ProfileField| profile.edit.reform(move |value: String| (field, value));
    let error_for = |name: &str| state.field_errors.get(name).map(|m| AttrValue::from(m.to_string()));
    let on_submit = profile.submit.reform(|e: SubmitEvent| e.prevent_default());
    let form = &state.form;

    html! {
        <div class="dashboard-page">
            <div class="panel">
                <div class="panel-header">
                    <h1>{"🏢 Company Dashboard"}</h1>
                </div>
                <div class="panel-body">
                    if let Some(error) = &state.error {
                        <Alert kind={AlertKind::Error} message={error.clone()} />
                    }
                    if let Some(success) = state.success {
                        <Alert kind={AlertKind::Success} message={success} />
                    }

                    <form onsubmit={on_submit} novalidate=true>
                        <div class="form-grid">
                            <FormField id="name" label="Company Name" value={form.name.clone()}
                                on_change={on_change(ProfileField::Name)} error={error_for("name")} />
                            <FormField id="email" label="Email Address" input_type="email" value={form.email.clone()}
                                on_change={on_change(ProfileField::Email)} error={error_for("email")} />
                            <FormField id="phone" label="Phone Number" input_type="tel" value={form.phone.clone()}
                                on_change={on_change(ProfileField::Phone)} error={error_for("phone")} />
                        </div>
                        <RegionPicker
                            regions={state.regions.clone()}
                            selected={form.region_ids.clone()}
                            on_toggle={profile.toggle_region.clone()}
                            error={error_for("regions")}
                        />
                        <FormField id="description" label="Company Description" multiline={true}
                            value={form.description.clone()}
                            on_change={on_change(ProfileField::Description)} error={error_for("description")} />

                        <div class="form-actions">
                            <button type="submit" class="btn btn-primary" disabled={state.saving}>
                                {if state.saving { "Saving..." } else { "💾 Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
