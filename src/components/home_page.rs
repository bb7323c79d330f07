use yew::prelude::*;
use yew_router::prelude::*;

use super::routes::Route;

const FEATURES: [(&str, &str, &str); 3] = [
    ("🔍", "Find Local Services", "Search for waste collection companies that serve your specific region."),
    ("🤝", "Connect Directly", "Easily get in touch with companies that match your waste management needs."),
    ("♻️", "Manage Waste", "Effectively handle your waste with reliable, professional service providers."),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Find Reliable Waste Collection Services In Your Area"}</h1>
                <p>{"Connect with trusted garbage collection companies that serve your region and meet your specific needs."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Companies} classes="btn btn-primary">{"Find Companies"}</Link<Route>>
                    <Link<Route> to={Route::Register} classes="btn btn-secondary">{"Register Your Company"}</Link<Route>>
                </div>
            </section>

            <section class="features">
                <h2>{"How EcoWaste Works"}</h2>
                <p>{"EcoWaste makes finding the right waste management service simple and efficient"}</p>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature" key={*title}>
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
