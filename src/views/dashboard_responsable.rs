use futures::join;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::CONFIG;
use crate::hooks::use_auth;
use crate::models::{Estadisticas, ReporteProximo};
use crate::services::estadisticas_service;
use crate::utils::date::format_fecha;

/// Dashboard del responsable. El alcance lo aplica el backend con los
/// endpoints por responsable (con fallback al general).
#[function_component(DashboardResponsable)]
pub fn dashboard_responsable() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("DashboardResponsable requiere un Router");

    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let estadisticas = use_state(|| None::<Estadisticas>);
    let proximos = use_state(Vec::<ReporteProximo>::new);
    let reload = use_state(|| 0u32);

    let responsable_id = auth.session().map(|s| s.user_id).unwrap_or_default();

    {
        let loading = loading.clone();
        let error = error.clone();
        let estadisticas = estadisticas.clone();
        let proximos = proximos.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let (stats, proximos_result) = join!(
                    estadisticas_service::obtener_dashboard_responsable(&client, responsable_id),
                    estadisticas_service::obtener_proximos_vencer_responsable(
                        &client,
                        responsable_id,
                        CONFIG.proximos_vencer_dias
                    ),
                );

                match (stats, proximos_result) {
                    (Ok(stats), Ok(proximos_data)) => {
                        estadisticas.set(Some(stats));
                        proximos.set(proximos_data.reportes);
                    }
                    (stats, proximos_result) => {
                        let e = stats.err().or(proximos_result.err());
                        log::error!("❌ Error cargando dashboard de responsable: {:?}", e);
                        error.set(Some(
                            "Error al cargar el dashboard. Verifique que el backend esté ejecutándose."
                                .to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_refresh = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };

    if *loading {
        return html! {
            <div class="dashboard-loading">
                <div class="spinner"></div>
                <span>{"Cargando dashboard..."}</span>
            </div>
        };
    }

    if let Some(mensaje) = &*error {
        return html! {
            <div class="dashboard-error">
                <p>{mensaje.clone()}</p>
                <button onclick={on_refresh}>{"Reintentar"}</button>
            </div>
        };
    }

    let ir_mis_reportes = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::MisReportes))
    };

    html! {
        <div class="dashboard dashboard-responsable">
            <div class="dashboard-toolbar">
                <h2>{"Mis Reportes Asignados"}</h2>
                <div>
                    <button class="btn-refresh" onclick={on_refresh.clone()}>{"⟳ Actualizar"}</button>
                    <button class="btn-primary" onclick={ir_mis_reportes}>{"Enviar reportes"}</button>
                </div>
            </div>

            if let Some(stats) = &*estadisticas {
                <div class="metric-grid">
                    <div class="metric-card">
                        <p class="metric-label">{"Mis Obligaciones"}</p>
                        <p class="metric-value">{stats.total_obligaciones}</p>
                    </div>
                    <div class="metric-card metric-green">
                        <p class="metric-label">{"Enviados a Tiempo"}</p>
                        <p class="metric-value">{stats.total_enviados_a_tiempo}</p>
                    </div>
                    <div class="metric-card metric-yellow">
                        <p class="metric-label">{"Pendientes"}</p>
                        <p class="metric-value">{stats.total_pendientes}</p>
                    </div>
                    <div class="metric-card metric-red">
                        <p class="metric-label">{"Vencidos"}</p>
                        <p class="metric-value">{stats.total_vencidos}</p>
                    </div>
                    <div class="metric-card metric-blue">
                        <p class="metric-label">{"% Cumplimiento"}</p>
                        <p class="metric-value">{format!("{:.0}%", stats.porcentaje_cumplimiento_a_tiempo)}</p>
                    </div>
                </div>
            }

            <div class="panel">
                <div class="panel-header">
                    <h3>{format!("Próximos a Vencer ({} días)", CONFIG.proximos_vencer_dias)}</h3>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Reporte"}</th>
                            <th>{"Entidad"}</th>
                            <th>{"Periodo"}</th>
                            <th>{"Vencimiento"}</th>
                            <th>{"Días restantes"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if proximos.is_empty() {
                            <tr><td colspan="5" class="empty-row">{"Sin vencimientos en la ventana"}</td></tr>
                        } else {
                            {
                                proximos.iter().map(|r| html! {
                                    <tr key={r.id.to_string()}>
                                        <td>{&r.reporte_nombre}</td>
                                        <td>{&r.entidad_nombre}</td>
                                        <td>{&r.periodo_reportado}</td>
                                        <td>{format_fecha(&r.fecha_vencimiento)}</td>
                                        <td>
                                            <span class={if r.dias_restantes <= 1 { "badge badge-red" } else { "badge badge-yellow" }}>
                                                {format!("{} días", r.dias_restantes)}
                                            </span>
                                        </td>
                                    </tr>
                                }).collect::<Html>()
                            }
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
