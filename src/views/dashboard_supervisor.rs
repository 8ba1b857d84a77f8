use futures::join;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::CONFIG;
use crate::hooks::use_auth;
use crate::models::{Estadisticas, InstanciaReporte};
use crate::services::{estadisticas_service, instancia_service};
use crate::utils::date::format_fecha;
use crate::viewmodels::dashboard_viewmodel as vm;

/// Dashboard del supervisor: estadísticas con alcance de equipo (con
/// fallback al endpoint general) y las instancias de sus supervisados,
/// filtradas en el cliente por identidad del supervisor.
#[function_component(DashboardSupervisor)]
pub fn dashboard_supervisor() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("DashboardSupervisor requiere un Router");

    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let estadisticas = use_state(|| None::<Estadisticas>);
    let equipo = use_state(Vec::<InstanciaReporte>::new);
    let reload = use_state(|| 0u32);

    let supervisor_id = auth.session().map(|s| s.user_id).unwrap_or_default();

    {
        let loading = loading.clone();
        let error = error.clone();
        let estadisticas = estadisticas.clone();
        let equipo = equipo.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let (stats, pendientes, historico) = join!(
                    estadisticas_service::obtener_dashboard_supervisor(&client, supervisor_id),
                    instancia_service::listar_pendientes(&client),
                    instancia_service::listar_historico(&client, Default::default()),
                );

                match (stats, pendientes, historico) {
                    (Ok(stats), Ok(pendientes), Ok(historico)) => {
                        let mut instancias = pendientes;
                        instancias.extend(historico);
                        // Solo las instancias que este supervisor revisa
                        let del_equipo: Vec<InstanciaReporte> = instancias
                            .into_iter()
                            .filter(|i| i.responsable_supervision_id == Some(supervisor_id))
                            .collect();

                        estadisticas.set(Some(stats));
                        equipo.set(del_equipo);
                    }
                    (stats, pendientes, historico) => {
                        let e = stats.err().or(pendientes.err()).or(historico.err());
                        log::error!("❌ Error cargando dashboard de supervisor: {:?}", e);
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

    let pendientes_equipo = equipo.iter().filter(|i| !i.enviado && !i.vencido).count();
    let resumen = vm::resumen_general(&equipo, pendientes_equipo);

    let ir_supervision = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Supervision))
    };

    html! {
        <div class="dashboard dashboard-supervisor">
            <div class="dashboard-toolbar">
                <h2>{"Dashboard de Supervisión"}</h2>
                <button class="btn-refresh" onclick={on_refresh.clone()}>{"⟳ Actualizar"}</button>
            </div>

            if let Some(stats) = &*estadisticas {
                <div class="metric-grid">
                    <div class="metric-card metric-blue">
                        <p class="metric-label">{"% Cumplimiento"}</p>
                        <p class="metric-value">{format!("{:.0}%", stats.porcentaje_cumplimiento_a_tiempo)}</p>
                    </div>
                    <div class="metric-card">
                        <p class="metric-label">{"Reportes del equipo"}</p>
                        <p class="metric-value">{resumen.total_reportes}</p>
                    </div>
                    <div class="metric-card metric-green">
                        <p class="metric-label">{"A Tiempo"}</p>
                        <p class="metric-value">{resumen.enviados_a_tiempo}</p>
                    </div>
                    <div class="metric-card metric-yellow">
                        <p class="metric-label">{"Tarde"}</p>
                        <p class="metric-value">{resumen.enviados_tarde}</p>
                    </div>
                    <div class="metric-card metric-red">
                        <p class="metric-label">{"Vencidos"}</p>
                        <p class="metric-value">{resumen.reportes_vencidos}</p>
                        <p class="metric-hint">{format!("Próximos {} días: {}", CONFIG.proximos_vencer_dias, stats.reportes_proximos_vencer7_dias)}</p>
                    </div>
                </div>
            }

            <div class="panel">
                <div class="panel-header">
                    <h3>{"Reportes de mi equipo"}</h3>
                    <button class="link-button" onclick={ir_supervision}>{"Ir a supervisión"}</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Reporte"}</th>
                            <th>{"Entidad"}</th>
                            <th>{"Periodo"}</th>
                            <th>{"Responsable"}</th>
                            <th>{"Vencimiento"}</th>
                            <th>{"Estado"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if equipo.is_empty() {
                            <tr><td colspan="6" class="empty-row">{"No hay reportes asignados a su supervisión"}</td></tr>
                        } else {
                            {
                                equipo.iter().take(10).map(|i| html! {
                                    <tr key={i.id.to_string()}>
                                        <td>{&i.reporte_nombre}</td>
                                        <td>{&i.entidad_nombre}</td>
                                        <td>{&i.periodo_reportado}</td>
                                        <td>{&i.responsable_elaboracion}</td>
                                        <td>{format_fecha(&i.fecha_vencimiento_calculada)}</td>
                                        <td>{estado_badge(i)}</td>
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

pub fn estado_badge(instancia: &InstanciaReporte) -> Html {
    if instancia.enviado {
        if vm::es_enviado_tarde(instancia) {
            html! { <span class="badge badge-yellow">{"Enviado Tarde"}</span> }
        } else {
            html! { <span class="badge badge-green">{"A Tiempo"}</span> }
        }
    } else if instancia.vencido {
        html! { <span class="badge badge-red">{"Vencido"}</span> }
    } else if instancia.dias_hasta_vencimiento <= 3 {
        html! { <span class="badge badge-orange">{"Urgente"}</span> }
    } else {
        html! { <span class="badge badge-gray">{"Pendiente"}</span> }
    }
}
