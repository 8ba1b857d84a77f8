use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::Role;
use crate::views::dashboard_admin::DashboardAdmin;
use crate::views::dashboard_auditor::DashboardAuditor;
use crate::views::dashboard_responsable::DashboardResponsable;
use crate::views::dashboard_supervisor::DashboardSupervisor;

/// Dashboard de entrada: cada rol ve su propia vista.
#[function_component(HomeView)]
pub fn home_view() -> Html {
    let auth = use_auth();

    let session = match auth.session() {
        Some(session) => session,
        None => {
            return html! {
                <div class="centered-message">
                    {"No autorizado. Inicie sesión nuevamente."}
                </div>
            }
        }
    };

    match session.role {
        Role::Administrador => html! { <DashboardAdmin /> },
        Role::Supervisor => html! { <DashboardSupervisor /> },
        Role::Responsable => html! { <DashboardResponsable /> },
        Role::Auditor => html! { <DashboardAuditor /> },
    }
}
