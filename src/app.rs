use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AppHeader, PublicRoute, RequireAuth, RoleRoute};
use crate::hooks::{use_auth, AuthContextProvider};
use crate::models::Role;
use crate::views::{
    AlertasView, EntidadesView, HistoricoView, HomeView, MisReportesView, ReportesView,
    SignInView, SignUpView, SupervisionView, UsuariosView,
};

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[at("/reportes")]
    Reportes,
    #[at("/usuarios")]
    Usuarios,
    #[at("/entidades")]
    Entidades,
    #[at("/supervision")]
    Supervision,
    #[at("/mis-reportes")]
    MisReportes,
    #[at("/historico")]
    Historico,
    #[at("/alertas")]
    Alertas,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    pub children: Children,
}

/// Marco común de las vistas protegidas.
#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    html! {
        <div class="app-layout">
            <AppHeader />
            <main class="app-main">
                {props.children.clone()}
            </main>
        </div>
    }
}

/// Guardia de navegación hacia atrás: tras un logout, un popstate que
/// caiga fuera de signin/signup empuja de vuelta a signin.
#[function_component(BackNavGuard)]
fn back_nav_guard() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("BackNavGuard requiere un Router");

    let authenticated = auth.is_authenticated();
    let restoring = auth.state.restoring;

    use_effect_with((authenticated, restoring), move |(authenticated, restoring)| {
        let authenticated = *authenticated;
        let restoring = *restoring;

        let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event: web_sys::Event| {
            if restoring || authenticated {
                return;
            }
            if let Some(win) = window() {
                let path = win.location().pathname().unwrap_or_default();
                if path != "/signin" && path != "/signup" {
                    navigator.push(&Route::SignIn);
                }
            }
        }));

        if let Some(win) = window() {
            let _ = win
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        move || {
            if let Some(win) = window() {
                let _ = win.remove_event_listener_with_callback(
                    "popstate",
                    closure.as_ref().unchecked_ref(),
                );
            }
            drop(closure);
        }
    });

    html! {}
}

#[function_component(NotFoundView)]
fn not_found_view() -> Html {
    html! {
        <div class="centered-message">
            <h2>{"404"}</h2>
            <p>{"La página solicitada no existe."}</p>
            <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
        </div>
    }
}

fn protegida(allowed: Option<Vec<Role>>, inner: Html) -> Html {
    let contenido = html! { <AppLayout>{inner}</AppLayout> };
    match allowed {
        None => html! { <RequireAuth>{contenido}</RequireAuth> },
        Some(roles) => html! { <RoleRoute allowed={roles}>{contenido}</RoleRoute> },
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::SignIn => html! { <PublicRoute><SignInView /></PublicRoute> },
        Route::SignUp => html! { <PublicRoute><SignUpView /></PublicRoute> },

        // Dashboard y alertas: cualquier rol autenticado
        Route::Home => protegida(None, html! { <HomeView /> }),
        Route::Alertas => protegida(None, html! { <AlertasView /> }),

        // Rutas de administrador
        Route::Reportes => protegida(
            Some(vec![Role::Administrador]),
            html! { <ReportesView /> },
        ),
        Route::Usuarios => protegida(
            Some(vec![Role::Administrador]),
            html! { <UsuariosView /> },
        ),
        Route::Entidades => protegida(
            Some(vec![Role::Administrador]),
            html! { <EntidadesView /> },
        ),

        // Supervisión: supervisor y administrador
        Route::Supervision => protegida(
            Some(vec![Role::Supervisor, Role::Administrador]),
            html! { <SupervisionView /> },
        ),

        // Envío de reportes: responsable y administrador
        Route::MisReportes => protegida(
            Some(vec![Role::Responsable, Role::Administrador]),
            html! { <MisReportesView /> },
        ),

        // Histórico: administrador y supervisor
        Route::Historico => protegida(
            Some(vec![Role::Administrador, Role::Supervisor]),
            html! { <HistoricoView /> },
        ),

        Route::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthContextProvider>
                <BackNavGuard />
                <Switch<Route> render={switch} />
            </AuthContextProvider>
        </BrowserRouter>
    }
}
