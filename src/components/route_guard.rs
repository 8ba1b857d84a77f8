// ============================================================================
// ROUTE GUARD - autorización de rutas por sesión y rol
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_auth;
use crate::models::Role;
use crate::utils::constants::STORAGE_KEY_REDIRECT;
use crate::utils::storage::save_raw;

/// Resultado de evaluar una ruta contra la sesión actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Restauración de sesión en curso: placeholder, nunca redirigir.
    Loading,
    Render,
    RedirectSignIn,
    RedirectHome,
}

/// Decisión para rutas protegidas. `allowed` en `None` significa
/// "cualquier rol autenticado".
pub fn decide_protected(
    restoring: bool,
    role: Option<Role>,
    allowed: Option<&[Role]>,
) -> GuardDecision {
    if restoring {
        return GuardDecision::Loading;
    }
    match role {
        None => GuardDecision::RedirectSignIn,
        Some(role) => match allowed {
            Some(set) if !set.contains(&role) => GuardDecision::RedirectHome,
            _ => GuardDecision::Render,
        },
    }
}

/// Regla inversa para signin/signup: autenticado → al dashboard.
pub fn decide_public(restoring: bool, authenticated: bool) -> GuardDecision {
    if restoring {
        GuardDecision::Loading
    } else if authenticated {
        GuardDecision::RedirectHome
    } else {
        GuardDecision::Render
    }
}

fn loading_placeholder() -> Html {
    html! {
        <div class="guard-loading">
            <div class="spinner"></div>
            <p>{"Cargando..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Protege una vista: requiere sesión de cualquier rol. Al redirigir a
/// signin guarda la ruta solicitada para volver tras el login.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();
    let location = use_location();

    match decide_protected(auth.state.restoring, auth.role(), None) {
        GuardDecision::Loading => loading_placeholder(),
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        GuardDecision::RedirectSignIn => {
            if let Some(location) = location {
                let _ = save_raw(STORAGE_KEY_REDIRECT, location.path());
            }
            html! { <Redirect<Route> to={Route::SignIn} /> }
        }
        GuardDecision::RedirectHome => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct RoleRouteProps {
    pub allowed: Vec<Role>,
    pub children: Children,
}

/// Protege una vista por rol: sin sesión → signin, rol no permitido →
/// dashboard (no una página de error).
#[function_component(RoleRoute)]
pub fn role_route(props: &RoleRouteProps) -> Html {
    let auth = use_auth();
    let location = use_location();

    match decide_protected(auth.state.restoring, auth.role(), Some(&props.allowed)) {
        GuardDecision::Loading => loading_placeholder(),
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        GuardDecision::RedirectSignIn => {
            if let Some(location) = location {
                let _ = save_raw(STORAGE_KEY_REDIRECT, location.path());
            }
            html! { <Redirect<Route> to={Route::SignIn} /> }
        }
        GuardDecision::RedirectHome => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct PublicRouteProps {
    pub children: Children,
}

#[function_component(PublicRoute)]
pub fn public_route(props: &PublicRouteProps) -> Html {
    let auth = use_auth();

    match decide_public(auth.state.restoring, auth.is_authenticated()) {
        GuardDecision::Loading => loading_placeholder(),
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        _ => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN_ONLY: &[Role] = &[Role::Administrador];
    const SUPERVISION: &[Role] = &[Role::Supervisor, Role::Administrador];

    #[test]
    fn restaurando_nunca_redirige() {
        assert_eq!(
            decide_protected(true, None, Some(ADMIN_ONLY)),
            GuardDecision::Loading
        );
        assert_eq!(decide_public(true, false), GuardDecision::Loading);
    }

    #[test]
    fn sin_sesion_redirige_a_signin() {
        assert_eq!(decide_protected(false, None, None), GuardDecision::RedirectSignIn);
        assert_eq!(
            decide_protected(false, None, Some(ADMIN_ONLY)),
            GuardDecision::RedirectSignIn
        );
    }

    #[test]
    fn rol_no_permitido_redirige_al_dashboard() {
        assert_eq!(
            decide_protected(false, Some(Role::Auditor), Some(ADMIN_ONLY)),
            GuardDecision::RedirectHome
        );
        assert_eq!(
            decide_protected(false, Some(Role::Responsable), Some(SUPERVISION)),
            GuardDecision::RedirectHome
        );
    }

    #[test]
    fn rol_permitido_renderiza() {
        assert_eq!(
            decide_protected(false, Some(Role::Administrador), Some(ADMIN_ONLY)),
            GuardDecision::Render
        );
        assert_eq!(
            decide_protected(false, Some(Role::Supervisor), Some(SUPERVISION)),
            GuardDecision::Render
        );
        // Sin restricción de rol, cualquier sesión pasa
        assert_eq!(
            decide_protected(false, Some(Role::Auditor), None),
            GuardDecision::Render
        );
    }

    #[test]
    fn autenticado_no_ve_signin() {
        assert_eq!(decide_public(false, true), GuardDecision::RedirectHome);
        assert_eq!(decide_public(false, false), GuardDecision::Render);
    }
}
