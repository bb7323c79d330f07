use yew::prelude::*;

use crate::models::{Region, RegionId};

/// Lista de checkboxes para los formularios de registro y perfil
#[derive(Properties, PartialEq)]
pub struct RegionPickerProps {
    pub regions: Vec<Region>,
    pub selected: Vec<RegionId>,
    pub on_toggle: Callback<RegionId>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(RegionPicker)]
pub fn region_picker(props: &RegionPickerProps) -> Html {
    html! {
        <div class="form-group">
            <label>{"Service Regions"}</label>
            <div class={classes!("region-picker", props.error.is_some().then_some("invalid"))}>
                { for props.regions.iter().map(|region| {
                    let id = region.id;
                    let onchange = props.on_toggle.reform(move |_: Event| id);
                    html! {
                        <label key={id.to_string()} class="region-option">
                            <input
                                type="checkbox"
                                value={id.to_string()}
                                checked={props.selected.contains(&id)}
                                {onchange}
                            />
                            {region.name.clone()}
                        </label>
                    }
                }) }
            </div>
            if let Some(error) = &props.error {
                <p class="field-error">{error.clone()}</p>
            }
        </div>
    }
}
