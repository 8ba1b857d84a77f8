use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::notification_dropdown::NotificationDropdown;
use crate::hooks::use_auth;
use crate::models::Role;

/// Cabecera de las vistas protegidas: navegación según rol, campana de
/// notificaciones y menú de usuario con logout.
#[function_component(AppHeader)]
pub fn app_header() -> Html {
    let auth = use_auth();
    let menu_open = use_state(|| false);

    let session = match auth.session() {
        Some(session) => session,
        None => return html! {},
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let role = session.role;
    let nav_links = {
        let mut links: Vec<(Route, &str)> = vec![(Route::Home, "Dashboard")];
        match role {
            Role::Administrador => {
                links.push((Route::Reportes, "Reportes"));
                links.push((Route::Usuarios, "Usuarios"));
                links.push((Route::Entidades, "Entidades"));
                links.push((Route::Supervision, "Supervisión"));
                links.push((Route::MisReportes, "Mis Reportes"));
                links.push((Route::Historico, "Histórico"));
            }
            Role::Supervisor => {
                links.push((Route::Supervision, "Supervisión"));
                links.push((Route::Historico, "Histórico"));
            }
            Role::Responsable => {
                links.push((Route::MisReportes, "Mis Reportes"));
            }
            Role::Auditor => {}
        }
        links
    };

    html! {
        <header class="app-header">
            <div class="header-brand">
                <h1>{"RepoTrack"}</h1>
                <span class="header-subtitle">{"Seguimiento de Reportes Regulatorios"}</span>
            </div>

            <nav class="header-nav">
                {
                    nav_links.into_iter().map(|(route, label)| html! {
                        <Link<Route> to={route} classes="nav-link">{label}</Link<Route>>
                    }).collect::<Html>()
                }
            </nav>

            <div class="header-actions">
                <NotificationDropdown />

                <div class="user-dropdown">
                    <button class="user-button" onclick={toggle_menu}>
                        <span class="user-name">{&session.display_name}</span>
                        <span class="user-role">{role.display_name()}</span>
                    </button>
                    if *menu_open {
                        <div class="user-menu">
                            <p class="user-email">{&session.email}</p>
                            <button class="logout-button" onclick={on_logout}>
                                {"Cerrar sesión"}
                            </button>
                        </div>
                    }
                </div>
            </div>
        </header>
    }
}
