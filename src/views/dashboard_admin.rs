use futures::join;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::CONFIG;
use crate::hooks::use_auth;
use crate::models::{Estadisticas, ReporteProximo, ReporteVencido};
use crate::services::estadisticas_service;
use crate::utils::date::{dias_restantes, dias_vencido, format_fecha, hoy_local, parse_date_only};

/// Dashboard global del administrador: agregados del backend más las
/// listas de próximos a vencer y vencidos, traídos en paralelo al montar.
#[function_component(DashboardAdmin)]
pub fn dashboard_admin() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("DashboardAdmin requiere un Router");

    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let estadisticas = use_state(|| None::<Estadisticas>);
    let proximos = use_state(Vec::<ReporteProximo>::new);
    let vencidos = use_state(Vec::<ReporteVencido>::new);
    let reload = use_state(|| 0u32);

    {
        let loading = loading.clone();
        let error = error.clone();
        let estadisticas = estadisticas.clone();
        let proximos = proximos.clone();
        let vencidos = vencidos.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let (stats, proximos_result, vencidos_result) = join!(
                    estadisticas_service::obtener_dashboard(&client),
                    estadisticas_service::obtener_proximos_vencer(
                        &client,
                        CONFIG.proximos_vencer_dias
                    ),
                    estadisticas_service::obtener_vencidos(&client),
                );

                match (stats, proximos_result, vencidos_result) {
                    (Ok(stats), Ok(proximos_data), Ok(vencidos_data)) => {
                        let hoy = hoy_local();

                        // Recalcular los días con solo la parte de fecha
                        // para evitar errores de un día por zona horaria.
                        let normalizados_proximos: Vec<ReporteProximo> = proximos_data
                            .reportes
                            .into_iter()
                            .map(|mut r| {
                                if let Some(fecha) = parse_date_only(&r.fecha_vencimiento) {
                                    r.dias_restantes = dias_restantes(fecha, hoy);
                                }
                                r
                            })
                            .collect();
                        let normalizados_vencidos: Vec<ReporteVencido> = vencidos_data
                            .reportes
                            .into_iter()
                            .map(|mut r| {
                                if let Some(fecha) = parse_date_only(&r.fecha_vencimiento) {
                                    r.dias_vencido = dias_vencido(fecha, hoy);
                                }
                                r
                            })
                            .collect();

                        estadisticas.set(Some(stats));
                        proximos.set(normalizados_proximos);
                        vencidos.set(normalizados_vencidos);
                    }
                    (stats, proximos_result, vencidos_result) => {
                        let e = stats
                            .err()
                            .or(proximos_result.err())
                            .or(vencidos_result.err());
                        log::error!("❌ Error cargando dashboard: {:?}", e);
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

    let stats = match &*estadisticas {
        Some(stats) => stats.clone(),
        None => return html! {},
    };

    let ver_calendario = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Historico))
    };
    let ver_reportes = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Reportes))
    };

    html! {
        <div class="dashboard dashboard-admin">
            <div class="dashboard-toolbar">
                <h2>{"Dashboard Global"}</h2>
                <button class="btn-refresh" onclick={on_refresh.clone()}>{"⟳ Actualizar"}</button>
            </div>

            <div class="metric-grid">
                <div class="metric-card">
                    <p class="metric-label">{"Total Obligaciones"}</p>
                    <p class="metric-value">{stats.total_obligaciones}</p>
                </div>
                <div class="metric-card metric-green">
                    <p class="metric-label">{"Enviados a Tiempo"}</p>
                    <p class="metric-value">{stats.total_enviados_a_tiempo}</p>
                </div>
                <div class="metric-card metric-red">
                    <p class="metric-label">{"Vencidos"}</p>
                    <p class="metric-value">{stats.total_vencidos}</p>
                    <p class="metric-hint">{"En riesgo de multa"}</p>
                </div>
                <div class="metric-card metric-yellow">
                    <p class="metric-label">{"Pendientes"}</p>
                    <p class="metric-value">{stats.total_pendientes}</p>
                </div>
                <div class="metric-card metric-blue">
                    <p class="metric-label">{"% Cumplimiento"}</p>
                    <p class="metric-value">{format!("{:.0}%", stats.porcentaje_cumplimiento_a_tiempo)}</p>
                    <p class="metric-hint">{format!("Próximos 7 días: {}", stats.reportes_proximos_vencer7_dias)}</p>
                </div>
            </div>

            <div class="dashboard-columns">
                <div class="panel cumplimiento-panel">
                    <h3>{"Cumplimiento"}</h3>
                    <div class="gauge">
                        <span class="gauge-value">{format!("{:.0}%", stats.porcentaje_cumplimiento_a_tiempo)}</span>
                        <span class="gauge-label">{"Enviados a tiempo / Total"}</span>
                    </div>
                    if let Some(entidad) = &stats.entidad_mayor_incumplimiento {
                        <p class="callout callout-red">
                            {format!(
                                "Entidad con mayor incumplimiento: {} ({})",
                                entidad,
                                stats.incumplimientos_entidad_problema.unwrap_or(0)
                            )}
                        </p>
                    }
                    if let Some(responsable) = &stats.responsable_mayor_incumplimiento {
                        <p class="callout callout-yellow">
                            {format!(
                                "Responsable con mayor incumplimiento: {} ({})",
                                responsable,
                                stats.incumplimientos_responsable_problema.unwrap_or(0)
                            )}
                        </p>
                    }
                </div>

                <div class="panel">
                    <div class="panel-header">
                        <h3>{format!("Próximos a Vencer ({} días)", CONFIG.proximos_vencer_dias)}</h3>
                        <button class="link-button" onclick={ver_calendario}>{"Ver todos"}</button>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Reporte"}</th>
                                <th>{"Entidad"}</th>
                                <th>{"Vencimiento"}</th>
                                <th>{"Días"}</th>
                                <th>{"Responsable"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if proximos.is_empty() {
                                <tr><td colspan="5" class="empty-row">{"Sin reportes próximos a vencer"}</td></tr>
                            } else {
                                {
                                    proximos.iter().map(|r| html! {
                                        <tr key={r.id.to_string()}>
                                            <td>{&r.reporte_nombre}</td>
                                            <td>{&r.entidad_nombre}</td>
                                            <td>{format_fecha(&r.fecha_vencimiento)}</td>
                                            <td>
                                                <span class={if r.dias_restantes <= 1 { "badge badge-red" } else { "badge badge-yellow" }}>
                                                    {format!("{} días", r.dias_restantes)}
                                                </span>
                                            </td>
                                            <td>{&r.responsable}</td>
                                        </tr>
                                    }).collect::<Html>()
                                }
                            }
                        </tbody>
                    </table>
                </div>
            </div>

            if !vencidos.is_empty() {
                <div class="panel panel-vencidos">
                    <div class="panel-header">
                        <h3>{"Reportes Vencidos"}</h3>
                        <button class="link-button" onclick={ver_reportes}>{"Ver todos"}</button>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Reporte"}</th>
                                <th>{"Entidad"}</th>
                                <th>{"Vencimiento"}</th>
                                <th>{"Días vencido"}</th>
                                <th>{"Responsable"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                vencidos.iter().map(|r| html! {
                                    <tr key={r.id.to_string()}>
                                        <td>{&r.reporte_nombre}</td>
                                        <td>{&r.entidad_nombre}</td>
                                        <td>{format_fecha(&r.fecha_vencimiento)}</td>
                                        <td><span class="badge badge-red">{format!("{} días", r.dias_vencido)}</span></td>
                                        <td>{&r.responsable}</td>
                                    </tr>
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
