use futures::join;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::Pagination;
use crate::hooks::{use_auth, use_pagination};
use crate::models::InstanciaReporte;
use crate::services::instancia_service;
use crate::utils::date::{format_fecha, hoy_local};
use crate::viewmodels::dashboard_viewmodel as vm;
use crate::views::dashboard_supervisor::estado_badge;

const MESES_TENDENCIA: u32 = 6;

/// Dashboard de auditoría: solo lectura, métricas de cumplimiento
/// derivadas en memoria sobre las instancias pendientes e históricas.
#[function_component(DashboardAuditor)]
pub fn dashboard_auditor() -> Html {
    let auth = use_auth();

    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let instancias = use_state(Vec::<InstanciaReporte>::new);
    let pendientes_count = use_state(|| 0usize);
    let reload = use_state(|| 0u32);

    let filtro_entidad = use_state(|| "todas".to_string());
    let filtro_responsable = use_state(|| "todos".to_string());
    let busqueda = use_state(String::new);

    {
        let loading = loading.clone();
        let error = error.clone();
        let instancias = instancias.clone();
        let pendientes_count = pendientes_count.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let (pendientes, vencidos, historico) = join!(
                    instancia_service::listar_pendientes(&client),
                    instancia_service::listar_vencidos(&client),
                    instancia_service::listar_historico(&client, Default::default()),
                );

                match (pendientes, vencidos, historico) {
                    (Ok(pendientes), Ok(_vencidos), Ok(historico)) => {
                        pendientes_count.set(pendientes.len());
                        let mut todas = pendientes;
                        todas.extend(historico);
                        instancias.set(todas);
                    }
                    (pendientes, vencidos, historico) => {
                        let e = pendientes.err().or(vencidos.err()).or(historico.err());
                        log::error!("❌ Error cargando datos de auditoría: {:?}", e);
                        error.set(Some(
                            "Error al cargar las métricas. Verifique que el backend esté ejecutándose."
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

    // Derivados en memoria
    let todas = (*instancias).clone();
    let resumen = vm::resumen_general(&todas, *pendientes_count);
    let por_entidad = vm::cumplimiento_por_entidad(&todas);
    let por_responsable = vm::cumplimiento_por_responsable(&todas);
    let tendencia = vm::tendencia_mensual(&todas, hoy_local(), MESES_TENDENCIA);
    let distribucion = vm::distribucion_estado(&resumen);

    // Listas únicas para los filtros (en orden de aparición)
    let mut entidades: Vec<String> = Vec::new();
    let mut responsables: Vec<String> = Vec::new();
    for i in &todas {
        if !i.entidad_nombre.is_empty() && !entidades.contains(&i.entidad_nombre) {
            entidades.push(i.entidad_nombre.clone());
        }
        if !i.responsable_elaboracion.is_empty()
            && !responsables.contains(&i.responsable_elaboracion)
        {
            responsables.push(i.responsable_elaboracion.clone());
        }
    }

    // Filtros de la tabla de detalle
    let filtradas: Vec<InstanciaReporte> = todas
        .iter()
        .filter(|i| {
            if *filtro_entidad != "todas" && i.entidad_nombre != *filtro_entidad {
                return false;
            }
            if *filtro_responsable != "todos" && i.responsable_elaboracion != *filtro_responsable {
                return false;
            }
            if !busqueda.is_empty() {
                let term = busqueda.to_lowercase();
                return i.reporte_nombre.to_lowercase().contains(&term)
                    || i.entidad_nombre.to_lowercase().contains(&term)
                    || i.periodo_reportado.to_lowercase().contains(&term);
            }
            true
        })
        .cloned()
        .collect();

    let paginacion = use_pagination(filtradas, 10);

    let on_busqueda = {
        let busqueda = busqueda.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                busqueda.set(input.value());
            }
        })
    };
    let on_filtro_entidad = {
        let filtro_entidad = filtro_entidad.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                filtro_entidad.set(select.value());
            }
        })
    };
    let on_filtro_responsable = {
        let filtro_responsable = filtro_responsable.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                filtro_responsable.set(select.value());
            }
        })
    };

    if *loading {
        return html! {
            <div class="dashboard-loading">
                <div class="spinner"></div>
                <span>{"Cargando métricas..."}</span>
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

    html! {
        <div class="dashboard dashboard-auditor">
            <div class="dashboard-toolbar">
                <div>
                    <h2>{"Dashboard de Auditoría"}</h2>
                    <p class="muted">{"Vista de solo lectura • Métricas de cumplimiento de reportes"}</p>
                </div>
                <span class="auditor-mode">{"👁 Modo Auditor (Solo Lectura)"}</span>
            </div>

            <div class="metric-grid">
                <div class="metric-card metric-blue">
                    <p class="metric-label">{"% Cumplimiento"}</p>
                    <p class="metric-value">{format!("{}%", resumen.porcentaje_cumplimiento)}</p>
                    <p class="metric-hint">{"Enviados a tiempo / Total"}</p>
                </div>
                <div class="metric-card">
                    <p class="metric-label">{"Total Reportes"}</p>
                    <p class="metric-value">{resumen.total_reportes}</p>
                </div>
                <div class="metric-card metric-red">
                    <p class="metric-label">{"Vencidos"}</p>
                    <p class="metric-value">{resumen.reportes_vencidos}</p>
                    <p class="metric-hint">{"En riesgo de multa"}</p>
                </div>
                <div class="metric-card metric-green">
                    <p class="metric-label">{"A Tiempo"}</p>
                    <p class="metric-value">{resumen.enviados_a_tiempo}</p>
                </div>
                <div class="metric-card metric-yellow">
                    <p class="metric-label">{"Fuera de Tiempo"}</p>
                    <p class="metric-value">{resumen.enviados_tarde}</p>
                </div>
            </div>

            <div class="chart-grid">
                <div class="panel">
                    <h3>{"Distribución de Estado"}</h3>
                    <div class="distribution-legend">
                        {
                            distribucion.iter().map(|s| html! {
                                <div key={s.nombre} class="legend-item">
                                    <span class="legend-dot" style={format!("background-color: {}", s.color)}></span>
                                    <span>{format!("{}: {}", s.nombre, s.valor)}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="distribution-bar">
                        {
                            distribucion.iter().map(|s| {
                                let pct = if resumen.total_reportes > 0 {
                                    s.valor as f64 * 100.0 / resumen.total_reportes as f64
                                } else {
                                    0.0
                                };
                                html! {
                                    <div
                                        key={s.nombre}
                                        class="distribution-slice"
                                        style={format!("width: {:.1}%; background-color: {}", pct, s.color)}
                                        title={format!("{}: {}", s.nombre, s.valor)}
                                    ></div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="panel">
                    <h3>{"Tendencia Histórica de Cumplimiento"}</h3>
                    <div class="trend-chart">
                        {
                            tendencia.iter().map(|mes| html! {
                                <div key={mes.mes.clone()} class="trend-column">
                                    <div class="trend-bar-track">
                                        <div
                                            class="trend-bar"
                                            style={format!("height: {}%", mes.cumplimiento)}
                                            title={format!("{}% ({} enviados, {} vencidos)", mes.cumplimiento, mes.enviados, mes.vencidos)}
                                        ></div>
                                    </div>
                                    <span class="trend-value">{format!("{}%", mes.cumplimiento)}</span>
                                    <span class="trend-label">{mes.mes.clone()}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="panel">
                    <h3>{"Cumplimiento por Entidad"}</h3>
                    <div class="hbar-chart">
                        {
                            por_entidad.iter().take(8).map(|g| html! {
                                <div key={g.nombre.clone()} class="hbar-row">
                                    <span class="hbar-label" title={g.nombre.clone()}>{vm::truncar(&g.nombre, 20)}</span>
                                    <div class="hbar-track">
                                        <div class="hbar-fill hbar-green" style={format!("width: {}%", g.porcentaje)}></div>
                                    </div>
                                    <span class="hbar-value">{format!("{}% ({}/{})", g.porcentaje, g.a_tiempo, g.total)}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="panel">
                    <h3>{"Cumplimiento por Responsable"}</h3>
                    <div class="hbar-chart">
                        {
                            por_responsable.iter().take(8).map(|g| html! {
                                <div key={g.nombre.clone()} class="hbar-row">
                                    <span class="hbar-label" title={g.nombre.clone()}>{vm::truncar(&g.nombre, 15)}</span>
                                    <div class="hbar-track">
                                        <div class="hbar-fill hbar-blue" style={format!("width: {}%", g.porcentaje)}></div>
                                    </div>
                                    <span class="hbar-value">{format!("{}% ({} vencidos)", g.porcentaje, g.vencidos)}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <div class="panel">
                <div class="panel-header">
                    <h3>{"Detalle de Reportes"}</h3>
                    <div class="table-filters">
                        <input
                            type="text"
                            placeholder="Buscar reporte, entidad, periodo..."
                            value={(*busqueda).clone()}
                            oninput={on_busqueda}
                        />
                        <select onchange={on_filtro_entidad}>
                            <option value="todas" selected={*filtro_entidad == "todas"}>{"Todas las entidades"}</option>
                            {
                                entidades.iter().map(|e| html! {
                                    <option key={e.clone()} value={e.clone()} selected={*filtro_entidad == *e}>{e.clone()}</option>
                                }).collect::<Html>()
                            }
                        </select>
                        <select onchange={on_filtro_responsable}>
                            <option value="todos" selected={*filtro_responsable == "todos"}>{"Todos los responsables"}</option>
                            {
                                responsables.iter().map(|r| html! {
                                    <option key={r.clone()} value={r.clone()} selected={*filtro_responsable == *r}>{r.clone()}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
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
                        if paginacion.page_items.is_empty() {
                            <tr>
                                <td colspan="6" class="empty-row">
                                    {"No se encontraron reportes con los filtros aplicados"}
                                </td>
                            </tr>
                        } else {
                            {
                                paginacion.page_items.iter().map(|i| html! {
                                    <tr key={i.id.to_string()}>
                                        <td>
                                            <p class="cell-title">{&i.reporte_nombre}</p>
                                            <p class="cell-subtitle">{&i.reporte_id}</p>
                                        </td>
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

                <Pagination
                    current_page={paginacion.current_page}
                    total_pages={paginacion.total_pages}
                    total_items={paginacion.total_items}
                    items_per_page={paginacion.items_per_page}
                    on_page_change={paginacion.set_page.clone()}
                    on_items_per_page_change={paginacion.set_items_per_page.clone()}
                />
            </div>
        </div>
    }
}
