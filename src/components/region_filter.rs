use yew::prelude::*;

use crate::models::{Region, RegionId};

#[derive(Properties, PartialEq)]
pub struct RegionFilterProps {
    pub regions: Vec<Region>,
    pub selected: Option<RegionId>,
    /// `None` = "All Regions"
    pub on_select: Callback<Option<RegionId>>,
}

#[function_component(RegionFilter)]
pub fn region_filter(props: &RegionFilterProps) -> Html {
    let chip = |label: &str, value: Option<RegionId>| {
        let onclick = props.on_select.reform(move |_: MouseEvent| value);
        let class = classes!("filter-chip", (props.selected == value).then_some("selected"));
        html! {
            <button type="button" {class} {onclick}>{label.to_string()}</button>
        }
    };

    html! {
        <div class="region-filter">
            <h3>{"Filter by Region"}</h3>
            <div class="filter-chips">
                {chip("All Regions", None)}
                { for props.regions.iter().map(|region| chip(&region.name, Some(region.id))) }
            </div>
        </div>
    }
}
