// ============================================================================
// USE AUTH HOOK - manejo de sesión sin singletons ambientales
// ============================================================================
// El estado de sesión se crea una sola vez en el provider y se comparte
// por Context; las vistas lo reciben como dependencia explícita.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::{Role, Session, StoredUser};
use crate::services::{auth_service, ApiClient};
use crate::stores::SessionStore;
use crate::utils::constants::{STORAGE_KEY_REDIRECT, STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use crate::utils::storage::{
    clear_session_storage, load_from_storage, load_raw, remove_from_storage, save_raw,
    save_to_storage,
};

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<SessionStore>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

impl UseAuthHandle {
    pub fn session(&self) -> Option<Session> {
        self.state.session.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Cliente API ligado al token de esta sesión.
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.state.token.clone())
    }
}

/// Crea el estado de sesión. Solo lo llama el provider; el resto de la
/// app usa [`use_auth`].
#[hook]
pub fn use_auth_state() -> UseAuthHandle {
    let state = use_state(SessionStore::default);
    let navigator = use_navigator().expect("use_auth_state requiere un Router");

    // Restaurar sesión guardada al arrancar. Si falta o no parsea
    // cualquiera de las dos claves, se limpian ambas y se arranca
    // sin autenticar.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let token = load_raw(STORAGE_KEY_TOKEN);
            let user = load_from_storage::<StoredUser>(STORAGE_KEY_USER);

            match (token, user) {
                (Some(token), Some(user)) => {
                    log::info!("✅ Sesión restaurada: {}", user.email);
                    let mut new_state = (*state).clone();
                    new_state.session = Some(user.into_session());
                    new_state.token = Some(token);
                    new_state.restoring = false;
                    state.set(new_state);
                }
                _ => {
                    clear_session_storage();
                    let mut new_state = (*state).clone();
                    new_state.restoring = false;
                    state.set(new_state);
                }
            }
            || ()
        });
    }

    // Login
    let login = {
        let state = state.clone();
        let navigator = navigator.clone();
        Callback::from(move |(correo, contrasena): (String, String)| {
            let state = state.clone();
            let navigator = navigator.clone();

            let mut loading_state = (*state).clone();
            loading_state.loading = true;
            loading_state.error = None;
            state.set(loading_state);

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&correo, &contrasena).await {
                    Ok(response) => {
                        let stored = StoredUser {
                            id: response.id,
                            email: correo.clone(),
                            nombre: response.nombre.clone(),
                            rol: response.rol.clone(),
                        };

                        // Las dos claves se escriben juntas
                        let _ = save_raw(STORAGE_KEY_TOKEN, &response.token);
                        let _ = save_to_storage(STORAGE_KEY_USER, &stored);

                        log::info!("✅ Login exitoso: {} ({})", correo, response.rol);

                        let mut new_state = (*state).clone();
                        new_state.session = Some(stored.into_session());
                        new_state.token = Some(response.token);
                        new_state.loading = false;
                        new_state.error = None;
                        state.set(new_state);

                        // Volver a la ruta que pedía antes del login, si la hay
                        let destino = load_raw(STORAGE_KEY_REDIRECT)
                            .and_then(|path| Route::recognize(&path))
                            .unwrap_or(Route::Home);
                        let _ = remove_from_storage(STORAGE_KEY_REDIRECT);
                        navigator.push(&destino);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.loading = false;
                        new_state.error = Some(auth_service::classify_login_error(&e));
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // Logout: limpia las dos claves, resetea el estado y reescribe la
    // entrada de historial para que "atrás" no muestre una vista protegida.
    let logout = {
        let state = state.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            clear_session_storage();
            log::info!("👋 Logout");

            state.set(SessionStore {
                restoring: false,
                ..SessionStore::default()
            });
            navigator.replace(&Route::SignIn);
        })
    };

    let clear_error = {
        let state = state.clone();
        Callback::from(move |_| {
            if state.error.is_some() {
                let mut new_state = (*state).clone();
                new_state.error = None;
                state.set(new_state);
            }
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
        clear_error,
    }
}

/// Acceso a la sesión desde cualquier vista bajo el provider.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("use_auth debe usarse dentro de AuthContextProvider")
}

/// Provider que envuelve la app y comparte el estado de sesión.
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let handle = use_auth_state();

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}
