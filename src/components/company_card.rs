use yew::prelude::*;

use crate::models::Company;

#[derive(Properties, PartialEq, Clone)]
pub struct CompanyCardProps {
    pub company: Company,
}

#[function_component(CompanyCard)]
pub fn company_card(props: &CompanyCardProps) -> Html {
    let c = &props.company;

    html! {
        <div class="company-card">
            <div class="company-card-body">
                <h3 class="company-name">{c.name.clone()}</h3>
                <div class="company-contact">
                    <div class="company-phone">{"📞 "}{c.phone.clone()}</div>
                    <div class="company-email">{"✉️ "}{c.email.clone()}</div>
                    <div class="company-regions">{"📍 "}{c.region_names()}</div>
                </div>
                <p class="company-description">{c.description.clone()}</p>
                <div class="region-chips">
                    { for c.regions.iter().map(|region| html! {
                        <span key={region.id.to_string()} class="region-chip">{region.name.clone()}</span>
                    }) }
                </div>
            </div>
            <div class="company-card-footer">
                <a class="btn-contact" href={format!("mailto:{}", c.email)}>{"Contact Now"}</a>
            </div>
        </div>
    }
}
