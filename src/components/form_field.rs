use yew::prelude::*;

use crate::utils::event_value;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Renderiza un textarea en lugar de un input
    #[prop_or(false)]
    pub multiline: bool,
}

/// Input con etiqueta y su mensaje de validación debajo
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| event_value(&e));
    let class = classes!("form-input", props.error.is_some().then_some("invalid"));

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            if props.multiline {
                <textarea
                    id={props.id.clone()}
                    {class}
                    rows="4"
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
            } else {
                <input
                    id={props.id.clone()}
                    {class}
                    type={props.input_type.clone()}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
            }
            if let Some(error) = &props.error {
                <p class="field-error">{error.clone()}</p>
            }
        </div>
    }
}
