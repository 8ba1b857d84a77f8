use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;

/// Formulario de inicio de sesión. El error clasificado viene del hook
/// de autenticación y se limpia cuando el usuario modifica los campos.
#[function_component(SignInView)]
pub fn sign_in_view() -> Html {
    let auth = use_auth();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);

    // Limpiar el error al editar cualquiera de los campos
    {
        let clear_error = auth.clear_error.clone();
        use_effect_with(((*email).clone(), (*password).clone()), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let loading = auth.state.loading;
    let on_submit = {
        let login = auth.login.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.is_empty() || password.is_empty() {
                return;
            }
            login.emit(((*email).clone(), (*password).clone()));
        })
    };

    html! {
        <div class="signin-screen">
            <div class="signin-container">
                <div class="signin-header">
                    <h1>{"Iniciar Sesión"}</h1>
                    <p>{"Ingrese su correo y contraseña para acceder al sistema"}</p>
                </div>

                if let Some(error) = &auth.state.error {
                    <div class="signin-error">
                        <span>{"⚠"}</span>
                        <span>{error.clone()}</span>
                    </div>
                }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="correo">{"Correo electrónico "}<span class="required">{"*"}</span></label>
                        <input
                            type="email"
                            id="correo"
                            placeholder="correo@empresa.com"
                            value={(*email).clone()}
                            oninput={on_email}
                            disabled={loading}
                        />
                    </div>

                    <div class="form-group">
                        <label for="contrasena">{"Contraseña "}<span class="required">{"*"}</span></label>
                        <div class="password-field">
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                id="contrasena"
                                placeholder="Ingrese su contraseña"
                                value={(*password).clone()}
                                oninput={on_password}
                                disabled={loading}
                            />
                            <button type="button" class="toggle-password" onclick={toggle_password}>
                                {if *show_password { "🙈" } else { "👁" }}
                            </button>
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="btn-signin"
                        disabled={loading || email.is_empty() || password.is_empty()}
                    >
                        {if loading { "Ingresando..." } else { "Iniciar sesión" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
