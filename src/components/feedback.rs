use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner-container">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AlertKind {
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub message: AttrValue,
    /// Muestra un botón "Dismiss" si está presente
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let class = match props.kind {
        AlertKind::Error => "alert alert-error",
        AlertKind::Success => "alert alert-success",
    };

    html! {
        <div {class} role="alert">
            <p>{props.message.clone()}</p>
            if let Some(on_dismiss) = props.on_dismiss.clone() {
                <button type="button" class="alert-dismiss" onclick={on_dismiss.reform(|_: MouseEvent| ())}>
                    {"Dismiss"}
                </button>
            }
        </div>
    }
}
