use yew::prelude::*;

use crate::utils::LifetimeToken;

/// Token vivo mientras el componente que lo llama siga montado
#[hook]
pub fn use_lifetime() -> LifetimeToken {
    let token = use_memo((), |_| LifetimeToken::new());

    {
        let token = (*token).clone();
        use_effect_with((), move |_| move || token.cancel());
    }

    (*token).clone()
}
