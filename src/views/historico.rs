use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::instancia_detalle::InstanciaDetalle;
use crate::components::Pagination;
use crate::hooks::{use_auth, use_pagination};
use crate::models::{Entidad, FiltrosHistorico, InstanciaReporte};
use crate::services::{entidad_service, instancia_service};
use crate::utils::date::{format_fecha, format_fecha_opt, hoy_local};
use chrono::Datelike;

const MESES: [(u32, &str); 12] = [
    (1, "Enero"),
    (2, "Febrero"),
    (3, "Marzo"),
    (4, "Abril"),
    (5, "Mayo"),
    (6, "Junio"),
    (7, "Julio"),
    (8, "Agosto"),
    (9, "Septiembre"),
    (10, "Octubre"),
    (11, "Noviembre"),
    (12, "Diciembre"),
];

fn desviacion_badge(dias: Option<i64>) -> Html {
    match dias {
        None => html! {},
        Some(d) if d < 0 => html! {
            <span class="badge badge-green">{format!("{} días antes ✓", d.abs())}</span>
        },
        Some(0) => html! { <span class="badge badge-blue">{"A tiempo ✓"}</span> },
        Some(d) => html! { <span class="badge badge-red">{format!("{} días tarde ⚠", d)}</span> },
    }
}

/// Histórico de reportes enviados, filtrable por entidad, año y mes
/// (filtros aplicados por el backend vía query).
#[function_component(HistoricoView)]
pub fn historico_view() -> Html {
    let auth = use_auth();

    let historico = use_state(Vec::<InstanciaReporte>::new);
    let entidades = use_state(Vec::<Entidad>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let filter_entidad = use_state(|| None::<i64>);
    let filter_year = use_state(|| None::<i32>);
    let filter_mes = use_state(|| None::<u32>);
    let busqueda = use_state(String::new);
    let reload = use_state(|| 0u32);

    let seleccionada = use_state(|| None::<InstanciaReporte>);

    // Entidades activas para el selector, una sola vez al montar
    {
        let entidades = entidades.clone();
        let auth = auth.clone();
        use_effect_with((), move |_| {
            let client = auth.api();
            wasm_bindgen_futures::spawn_local(async move {
                match entidad_service::listar(&client).await {
                    Ok(data) => entidades.set(data.into_iter().filter(|e| e.activo).collect()),
                    Err(e) => log::error!("❌ Error cargando entidades: {}", e),
                }
            });
            || ()
        });
    }

    // Histórico cada vez que cambian los filtros de servidor
    {
        let historico = historico.clone();
        let loading = loading.clone();
        let error = error.clone();
        let auth = auth.clone();
        use_effect_with(
            (*filter_entidad, *filter_year, *filter_mes, *reload),
            move |(entidad_id, year, mes, _)| {
                let client = auth.api();
                let filtros = FiltrosHistorico {
                    entidad_id: *entidad_id,
                    year: *year,
                    mes: *mes,
                };
                loading.set(true);
                error.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match instancia_service::listar_historico(&client, filtros).await {
                        Ok(data) => historico.set(data),
                        Err(e) => {
                            log::error!("❌ Error cargando histórico: {}", e);
                            error.set(Some("Error al cargar el histórico".to_string()));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
        );
    }

    let on_reload = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };

    let limpiar_filtros = {
        let filter_entidad = filter_entidad.clone();
        let filter_year = filter_year.clone();
        let filter_mes = filter_mes.clone();
        let busqueda = busqueda.clone();
        Callback::from(move |_: MouseEvent| {
            filter_entidad.set(None);
            filter_year.set(None);
            filter_mes.set(None);
            busqueda.set(String::new());
        })
    };

    let cerrar_modal = {
        let seleccionada = seleccionada.clone();
        Callback::from(move |_: MouseEvent| seleccionada.set(None))
    };

    let year_actual = hoy_local().year();
    let years: Vec<i32> = (0..5).map(|i| year_actual - i).collect();

    let filtrado: Vec<InstanciaReporte> = historico
        .iter()
        .filter(|h| {
            if busqueda.is_empty() {
                return true;
            }
            let term = busqueda.to_lowercase();
            h.reporte_nombre.to_lowercase().contains(&term)
                || h.reporte_id.to_lowercase().contains(&term)
                || h.entidad_nombre.to_lowercase().contains(&term)
                || h.periodo_reportado.to_lowercase().contains(&term)
                || h.enviado_por_nombre
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&term)
        })
        .cloned()
        .collect();

    let paginacion = use_pagination(filtrado, 10);

    html! {
        <div class="historico-view">
            <div class="panel">
                <div class="panel-header">
                    <h3>{"Histórico de Reportes"}</h3>
                    <div class="table-filters">
                        <input
                            type="text"
                            placeholder="Buscar reporte, entidad, periodo..."
                            value={(*busqueda).clone()}
                            oninput={{
                                let busqueda = busqueda.clone();
                                Callback::from(move |e: InputEvent| {
                                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                        busqueda.set(input.value());
                                    }
                                })
                            }}
                        />
                        <select onchange={{
                            let filter_entidad = filter_entidad.clone();
                            Callback::from(move |e: Event| {
                                if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                    filter_entidad.set(select.value().parse::<i64>().ok());
                                }
                            })
                        }}>
                            <option value="" selected={filter_entidad.is_none()}>{"Todas las entidades"}</option>
                            {
                                entidades.iter().map(|e| {
                                    let id = e.id.unwrap_or(0);
                                    html! {
                                        <option key={id.to_string()} value={id.to_string()} selected={*filter_entidad == Some(id)}>
                                            {e.razon_social.clone()}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                        <select onchange={{
                            let filter_year = filter_year.clone();
                            Callback::from(move |e: Event| {
                                if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                    filter_year.set(select.value().parse::<i32>().ok());
                                }
                            })
                        }}>
                            <option value="" selected={filter_year.is_none()}>{"Todos los años"}</option>
                            {
                                years.iter().map(|y| html! {
                                    <option key={y.to_string()} value={y.to_string()} selected={*filter_year == Some(*y)}>
                                        {y.to_string()}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <select onchange={{
                            let filter_mes = filter_mes.clone();
                            Callback::from(move |e: Event| {
                                if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                    filter_mes.set(select.value().parse::<u32>().ok());
                                }
                            })
                        }}>
                            <option value="" selected={filter_mes.is_none()}>{"Todos los meses"}</option>
                            {
                                MESES.iter().map(|(num, nombre)| html! {
                                    <option key={num.to_string()} value={num.to_string()} selected={*filter_mes == Some(*num)}>
                                        {*nombre}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <button onclick={limpiar_filtros}>{"Limpiar"}</button>
                        <button onclick={on_reload.clone()} title="Recargar">{"⟳"}</button>
                    </div>
                </div>

                if *loading {
                    <div class="dashboard-loading">
                        <div class="spinner"></div>
                        <span>{"Cargando histórico..."}</span>
                    </div>
                } else if let Some(mensaje) = &*error {
                    <div class="panel-error">
                        <p>{mensaje.clone()}</p>
                        <button onclick={on_reload.clone()}>{"Reintentar"}</button>
                    </div>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Reporte"}</th>
                                <th>{"Entidad"}</th>
                                <th>{"Periodo"}</th>
                                <th>{"Vencimiento"}</th>
                                <th>{"Enviado"}</th>
                                <th>{"Desviación"}</th>
                                <th class="text-right">{"Detalle"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if paginacion.page_items.is_empty() {
                                <tr><td colspan="7" class="empty-row">{"No hay reportes en el histórico"}</td></tr>
                            } else {
                                {
                                    paginacion.page_items.iter().map(|h| {
                                        let ver = {
                                            let seleccionada = seleccionada.clone();
                                            let instancia = h.clone();
                                            Callback::from(move |_: MouseEvent| seleccionada.set(Some(instancia.clone())))
                                        };
                                        html! {
                                            <tr key={h.id.to_string()}>
                                                <td>
                                                    <p class="cell-title">{&h.reporte_nombre}</p>
                                                    <p class="cell-subtitle">{&h.reporte_id}</p>
                                                </td>
                                                <td>{&h.entidad_nombre}</td>
                                                <td>{&h.periodo_reportado}</td>
                                                <td>{format_fecha(&h.fecha_vencimiento_calculada)}</td>
                                                <td>{format_fecha_opt(&h.fecha_envio_real)}</td>
                                                <td>{desviacion_badge(h.dias_desviacion)}</td>
                                                <td class="text-right">
                                                    <button onclick={ver}>{"Ver"}</button>
                                                </td>
                                            </tr>
                                        }
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
                }
            </div>

            if let Some(instancia) = &*seleccionada {
                <div class="modal-backdrop" onclick={cerrar_modal.clone()}></div>
                <div class="modal modal-wide">
                    <button class="modal-close" onclick={cerrar_modal.clone()}>{"✕"}</button>
                    <h4>{"Detalle del Reporte"}</h4>
                    <InstanciaDetalle instancia={instancia.clone()} />
                </div>
            }
        </div>
    }
}
