use futures::join;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::instancia_detalle::InstanciaDetalle;
use crate::components::Pagination;
use crate::hooks::{use_auth, use_pagination};
use crate::models::{InstanciaReporte, Role};
use crate::services::instancia_service;
use crate::views::dashboard_supervisor::estado_badge;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FiltroEstado {
    Todos,
    Pendientes,
    Enviados,
    Vencidos,
}

#[derive(Clone, PartialEq)]
struct Mensaje {
    exito: bool,
    texto: String,
}

/// Revisión de reportes del equipo: el supervisor aprueba o devuelve
/// para corrección los reportes enviados.
#[function_component(SupervisionView)]
pub fn supervision_view() -> Html {
    let auth = use_auth();

    let instancias = use_state(Vec::<InstanciaReporte>::new);
    let loading = use_state(|| true);
    let filtro = use_state(|| FiltroEstado::Pendientes);
    let busqueda = use_state(String::new);
    let reload = use_state(|| 0u32);

    let seleccionada = use_state(|| None::<InstanciaReporte>);
    let observacion = use_state(String::new);
    let procesando = use_state(|| false);
    let mensaje = use_state(|| None::<Mensaje>);

    let session = auth.session();
    let es_supervisor = session.as_ref().map(|s| s.role) == Some(Role::Supervisor);
    let supervisor_id = session.map(|s| s.user_id).unwrap_or_default();

    {
        let instancias = instancias.clone();
        let loading = loading.clone();
        let auth = auth.clone();
        use_effect_with((*filtro, *reload), move |(filtro, _)| {
            let client = auth.api();
            let filtro = *filtro;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let resultado = match filtro {
                    FiltroEstado::Pendientes => instancia_service::listar_pendientes(&client).await,
                    FiltroEstado::Vencidos => instancia_service::listar_vencidos(&client).await,
                    FiltroEstado::Enviados => {
                        instancia_service::listar_historico(&client, Default::default()).await
                    }
                    FiltroEstado::Todos => {
                        let (pendientes, historico) = join!(
                            instancia_service::listar_pendientes(&client),
                            instancia_service::listar_historico(&client, Default::default()),
                        );
                        pendientes.and_then(|mut p| {
                            historico.map(|h| {
                                p.extend(h);
                                p
                            })
                        })
                    }
                };

                match resultado {
                    Ok(mut data) => {
                        // El supervisor solo ve su equipo; el admin ve todo
                        if es_supervisor {
                            data.retain(|i| i.responsable_supervision_id == Some(supervisor_id));
                        }
                        instancias.set(data);
                    }
                    Err(e) => log::error!("❌ Error cargando instancias: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let mostrar_mensaje = {
        let mensaje = mensaje.clone();
        Callback::from(move |nuevo: Mensaje| {
            mensaje.set(Some(nuevo));
            let mensaje = mensaje.clone();
            Timeout::new(4000, move || mensaje.set(None)).forget();
        })
    };

    let abrir_modal = {
        let seleccionada = seleccionada.clone();
        let observacion = observacion.clone();
        Callback::from(move |instancia: InstanciaReporte| {
            seleccionada.set(Some(instancia));
            observacion.set(String::new());
        })
    };

    let cerrar_modal = {
        let seleccionada = seleccionada.clone();
        let observacion = observacion.clone();
        Callback::from(move |_: MouseEvent| {
            seleccionada.set(None);
            observacion.set(String::new());
        })
    };

    let aprobar = {
        let seleccionada = seleccionada.clone();
        let observacion = observacion.clone();
        let procesando = procesando.clone();
        let reload = reload.clone();
        let mostrar_mensaje = mostrar_mensaje.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            let instancia = match &*seleccionada {
                Some(instancia) => instancia.clone(),
                None => return,
            };
            let seleccionada = seleccionada.clone();
            let obs = (*observacion).clone();
            let procesando = procesando.clone();
            let reload = reload.clone();
            let mostrar_mensaje = mostrar_mensaje.clone();
            let client = auth.api();

            procesando.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match instancia_service::aprobar(&client, instancia.id, &obs).await {
                    Ok(_) => {
                        mostrar_mensaje.emit(Mensaje {
                            exito: true,
                            texto: "Reporte aprobado exitosamente".to_string(),
                        });
                        seleccionada.set(None);
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        log::error!("❌ Error aprobando reporte: {}", e);
                        mostrar_mensaje.emit(Mensaje {
                            exito: false,
                            texto: "Error al aprobar el reporte".to_string(),
                        });
                    }
                }
                procesando.set(false);
            });
        })
    };

    let rechazar = {
        let seleccionada = seleccionada.clone();
        let observacion = observacion.clone();
        let procesando = procesando.clone();
        let reload = reload.clone();
        let mostrar_mensaje = mostrar_mensaje.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            let instancia = match &*seleccionada {
                Some(instancia) => instancia.clone(),
                None => return,
            };
            let obs = (*observacion).clone();
            if obs.trim().is_empty() {
                mostrar_mensaje.emit(Mensaje {
                    exito: false,
                    texto: "Debe ingresar un motivo de rechazo".to_string(),
                });
                return;
            }

            let seleccionada = seleccionada.clone();
            let procesando = procesando.clone();
            let reload = reload.clone();
            let mostrar_mensaje = mostrar_mensaje.clone();
            let client = auth.api();

            procesando.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match instancia_service::rechazar(&client, instancia.id, &obs).await {
                    Ok(_) => {
                        mostrar_mensaje.emit(Mensaje {
                            exito: true,
                            texto: "Reporte devuelto para corrección".to_string(),
                        });
                        seleccionada.set(None);
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        log::error!("❌ Error rechazando reporte: {}", e);
                        mostrar_mensaje.emit(Mensaje {
                            exito: false,
                            texto: "Error al rechazar el reporte".to_string(),
                        });
                    }
                }
                procesando.set(false);
            });
        })
    };

    let filtradas: Vec<InstanciaReporte> = instancias
        .iter()
        .filter(|i| {
            if busqueda.is_empty() {
                return true;
            }
            let term = busqueda.to_lowercase();
            i.reporte_nombre.to_lowercase().contains(&term)
                || i.entidad_nombre.to_lowercase().contains(&term)
                || i.periodo_reportado.to_lowercase().contains(&term)
                || i.responsable_elaboracion.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    let paginacion = use_pagination(filtradas, 10);

    let total = instancias.len();
    let pendientes = instancias.iter().filter(|i| !i.enviado && !i.vencido).count();
    let enviados = instancias.iter().filter(|i| i.enviado).count();
    let vencidos = instancias.iter().filter(|i| i.vencido).count();

    let tab = |actual: FiltroEstado, etiqueta: &str, destino: FiltroEstado| {
        let filtro = filtro.clone();
        let clase = if actual == destino { "tab active" } else { "tab" };
        let onclick = Callback::from(move |_: MouseEvent| filtro.set(destino));
        html! { <button class={clase} {onclick}>{etiqueta}</button> }
    };

    html! {
        <div class="supervision-view">
            if let Some(m) = &*mensaje {
                <div class={if m.exito { "banner banner-success" } else { "banner banner-error" }}>
                    {m.texto.clone()}
                </div>
            }

            <div class="metric-grid">
                <div class="metric-card">
                    <p class="metric-label">{"Total"}</p>
                    <p class="metric-value">{total}</p>
                </div>
                <div class="metric-card metric-yellow">
                    <p class="metric-label">{"Pendientes"}</p>
                    <p class="metric-value">{pendientes}</p>
                </div>
                <div class="metric-card metric-green">
                    <p class="metric-label">{"Enviados"}</p>
                    <p class="metric-value">{enviados}</p>
                </div>
                <div class="metric-card metric-red">
                    <p class="metric-label">{"Vencidos"}</p>
                    <p class="metric-value">{vencidos}</p>
                </div>
            </div>

            <div class="panel">
                <div class="panel-header">
                    <h3>{"Supervisión de Reportes"}</h3>
                    <div class="tabs">
                        {tab(*filtro, "Pendientes", FiltroEstado::Pendientes)}
                        {tab(*filtro, "Enviados", FiltroEstado::Enviados)}
                        {tab(*filtro, "Vencidos", FiltroEstado::Vencidos)}
                        {tab(*filtro, "Todos", FiltroEstado::Todos)}
                    </div>
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
                </div>

                if *loading {
                    <div class="dashboard-loading">
                        <div class="spinner"></div>
                        <span>{"Cargando reportes..."}</span>
                    </div>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Reporte"}</th>
                                <th>{"Entidad"}</th>
                                <th>{"Periodo"}</th>
                                <th>{"Responsable"}</th>
                                <th>{"Estado"}</th>
                                <th class="text-right">{"Acciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if paginacion.page_items.is_empty() {
                                <tr><td colspan="6" class="empty-row">{"No hay reportes para revisar"}</td></tr>
                            } else {
                                {
                                    paginacion.page_items.iter().map(|i| {
                                        let abrir = {
                                            let abrir_modal = abrir_modal.clone();
                                            let instancia = i.clone();
                                            Callback::from(move |_: MouseEvent| abrir_modal.emit(instancia.clone()))
                                        };
                                        html! {
                                            <tr key={i.id.to_string()}>
                                                <td>{&i.reporte_nombre}</td>
                                                <td>{&i.entidad_nombre}</td>
                                                <td>{&i.periodo_reportado}</td>
                                                <td>{&i.responsable_elaboracion}</td>
                                                <td>{estado_badge(i)}</td>
                                                <td class="text-right">
                                                    <button onclick={abrir}>{"Revisar"}</button>
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
                    <h4>{"Revisión de Reporte"}</h4>

                    <InstanciaDetalle instancia={instancia.clone()} />

                    if instancia.enviado {
                        <div class="form-group">
                            <label>{"Observación del supervisor"}</label>
                            <textarea
                                rows="3"
                                placeholder="Opcional al aprobar; obligatoria al devolver"
                                value={(*observacion).clone()}
                                oninput={{
                                    let observacion = observacion.clone();
                                    Callback::from(move |e: InputEvent| {
                                        if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                                            observacion.set(area.value());
                                        }
                                    })
                                }}
                            ></textarea>
                        </div>

                        <div class="modal-actions">
                            <button class="btn-danger" onclick={rechazar} disabled={*procesando}>
                                {"Devolver para corrección"}
                            </button>
                            <button class="btn-primary" onclick={aprobar} disabled={*procesando}>
                                {if *procesando { "Procesando..." } else { "Aprobar" }}
                            </button>
                        </div>
                    } else {
                        <p class="muted">{"El reporte aún no ha sido enviado."}</p>
                    }
                </div>
            }
        </div>
    }
}
