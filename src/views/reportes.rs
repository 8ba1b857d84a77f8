use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::instancia_detalle::InstanciaDetalle;
use crate::components::Pagination;
use crate::hooks::{use_auth, use_pagination};
use crate::models::InstanciaReporte;
use crate::services::instancia_service;
use crate::utils::date::format_fecha;
use crate::views::dashboard_supervisor::estado_badge;

/// Gestión de reportes del administrador: todas las instancias del
/// sistema con filtros por estado y detalle.
#[function_component(ReportesView)]
pub fn reportes_view() -> Html {
    let auth = use_auth();

    let instancias = use_state(Vec::<InstanciaReporte>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    let filtro_estado = use_state(|| "todos".to_string());
    let busqueda = use_state(String::new);
    let seleccionada = use_state(|| None::<InstanciaReporte>);

    {
        let instancias = instancias.clone();
        let loading = loading.clone();
        let error = error.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match instancia_service::listar(&client).await {
                    Ok(data) => instancias.set(data),
                    Err(e) => {
                        log::error!("❌ Error cargando instancias: {}", e);
                        error.set(Some(
                            "Error al cargar los reportes. Verifique que el backend esté ejecutándose."
                                .to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_reload = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };

    let cerrar_modal = {
        let seleccionada = seleccionada.clone();
        Callback::from(move |_: MouseEvent| seleccionada.set(None))
    };

    let filtradas: Vec<InstanciaReporte> = instancias
        .iter()
        .filter(|i| {
            let match_estado = match filtro_estado.as_str() {
                "pendientes" => !i.enviado && !i.vencido,
                "enviados" => i.enviado,
                "vencidos" => i.vencido && !i.enviado,
                _ => true,
            };
            let term = busqueda.to_lowercase();
            let match_busqueda = term.is_empty()
                || i.reporte_nombre.to_lowercase().contains(&term)
                || i.reporte_id.to_lowercase().contains(&term)
                || i.entidad_nombre.to_lowercase().contains(&term)
                || i.responsable_elaboracion.to_lowercase().contains(&term);
            match_estado && match_busqueda
        })
        .cloned()
        .collect();

    let paginacion = use_pagination(filtradas, 10);

    if *loading {
        return html! {
            <div class="panel">
                <div class="dashboard-loading">
                    <div class="spinner"></div>
                    <span>{"Cargando reportes..."}</span>
                </div>
            </div>
        };
    }

    if let Some(mensaje) = &*error {
        return html! {
            <div class="panel panel-error">
                <p>{mensaje.clone()}</p>
                <button onclick={on_reload}>{"Reintentar"}</button>
            </div>
        };
    }

    html! {
        <div class="panel crud-panel">
            <div class="panel-header">
                <h3>{"Gestión de Reportes"}</h3>
                <div class="table-filters">
                    <input
                        type="text"
                        placeholder="Buscar reporte, entidad, responsable..."
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
                        let filtro_estado = filtro_estado.clone();
                        Callback::from(move |e: Event| {
                            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                filtro_estado.set(select.value());
                            }
                        })
                    }}>
                        <option value="todos" selected={*filtro_estado == "todos"}>{"Todos"}</option>
                        <option value="pendientes" selected={*filtro_estado == "pendientes"}>{"Pendientes"}</option>
                        <option value="enviados" selected={*filtro_estado == "enviados"}>{"Enviados"}</option>
                        <option value="vencidos" selected={*filtro_estado == "vencidos"}>{"Vencidos"}</option>
                    </select>
                    <button onclick={on_reload.clone()} title="Recargar">{"⟳"}</button>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Reporte"}</th>
                        <th>{"Entidad"}</th>
                        <th>{"Periodo"}</th>
                        <th>{"Responsable"}</th>
                        <th>{"Supervisor"}</th>
                        <th>{"Vencimiento"}</th>
                        <th>{"Estado"}</th>
                        <th class="text-right">{"Detalle"}</th>
                    </tr>
                </thead>
                <tbody>
                    if paginacion.page_items.is_empty() {
                        <tr><td colspan="8" class="empty-row">{"No se encontraron reportes"}</td></tr>
                    } else {
                        {
                            paginacion.page_items.iter().map(|i| {
                                let ver = {
                                    let seleccionada = seleccionada.clone();
                                    let instancia = i.clone();
                                    Callback::from(move |_: MouseEvent| seleccionada.set(Some(instancia.clone())))
                                };
                                html! {
                                    <tr key={i.id.to_string()}>
                                        <td>
                                            <p class="cell-title">{&i.reporte_nombre}</p>
                                            <p class="cell-subtitle">{&i.reporte_id}</p>
                                        </td>
                                        <td>{&i.entidad_nombre}</td>
                                        <td>{&i.periodo_reportado}</td>
                                        <td>{&i.responsable_elaboracion}</td>
                                        <td>{&i.responsable_supervision}</td>
                                        <td>{format_fecha(&i.fecha_vencimiento_calculada)}</td>
                                        <td>{estado_badge(i)}</td>
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
