use yew::prelude::*;
use yew_router::prelude::*;

use super::routes::Route;
use crate::hooks::use_session;

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    to: Route,
    active: bool,
    children: Children,
    #[prop_or_default]
    onclick: Option<Callback<()>>,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let classes = classes!("nav-link", props.active.then_some("active"));
    let onclick = props.onclick.clone().map(|cb| cb.reform(|_: MouseEvent| ()));

    html! {
        <span class={classes} {onclick}>
            <Link<Route> to={props.to.clone()}>{props.children.clone()}</Link<Route>>
        </span>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let menu_open = use_state(|| false);

    let is = |r: Route| route.as_ref() == Some(&r);
    let in_admin = matches!(route, Some(Route::AdminRoot) | Some(Route::Admin));

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let on_logout = {
        let logout = session.logout.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            close_menu.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let state = &session.state;
    let links = html! {
        <>
            <NavLink to={Route::Home} active={is(Route::Home)} onclick={close_menu.clone()}>{"Home"}</NavLink>
            <NavLink to={Route::Companies} active={is(Route::Companies)} onclick={close_menu.clone()}>{"Find Companies"}</NavLink>
            if state.is_authenticated() {
                if state.is_company() {
                    <NavLink to={Route::Dashboard} active={is(Route::Dashboard)} onclick={close_menu.clone()}>{"Dashboard"}</NavLink>
                }
                if state.is_admin() {
                    <NavLink to={Route::AdminRoot} active={in_admin} onclick={close_menu.clone()}>{"Admin Panel"}</NavLink>
                }
                <button type="button" class="nav-logout" onclick={on_logout}>{"Logout"}</button>
            } else {
                <NavLink to={Route::Login} active={is(Route::Login)} onclick={close_menu.clone()}>{"Login"}</NavLink>
                <NavLink to={Route::Register} active={is(Route::Register)} onclick={close_menu}>{"Register Company"}</NavLink>
            }
        </>
    };

    html! {
        <header class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-brand">{"♻️ EcoWaste"}</Link<Route>>
                <button type="button" class="navbar-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
                <nav class={classes!("navbar-links", menu_open.then_some("open"))}>
                    {links}
                </nav>
            </div>
        </header>
    }
}
