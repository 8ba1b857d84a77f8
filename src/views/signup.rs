use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Página pública de registro. Las cuentas las crea un administrador
/// desde la gestión de usuarios, así que aquí solo se orienta al
/// visitante.
#[function_component(SignUpView)]
pub fn sign_up_view() -> Html {
    html! {
        <div class="signin-screen">
            <div class="signin-container">
                <div class="signin-header">
                    <h1>{"Solicitar acceso"}</h1>
                    <p>
                        {"Las cuentas de RepoTrack las crea el administrador del sistema. \
                          Solicite su acceso al área de cumplimiento de su organización."}
                    </p>
                </div>
                <Link<Route> to={Route::SignIn} classes="btn-signin">
                    {"Volver a iniciar sesión"}
                </Link<Route>>
            </div>
        </div>
    }
}
