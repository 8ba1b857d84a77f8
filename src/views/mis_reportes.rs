use futures::join;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::instancia_detalle::InstanciaDetalle;
use crate::components::Pagination;
use crate::hooks::{use_auth, use_pagination};
use crate::models::InstanciaReporte;
use crate::services::instancia_service;
use crate::views::dashboard_supervisor::estado_badge;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ModoEnvio {
    Archivo,
    Link,
}

#[derive(Clone, PartialEq)]
struct Mensaje {
    exito: bool,
    texto: String,
}

/// Vista del responsable: sus reportes pendientes y vencidos (alcance
/// aplicado por el backend) con el flujo de envío por archivo o link.
#[function_component(MisReportesView)]
pub fn mis_reportes_view() -> Html {
    let auth = use_auth();

    let instancias = use_state(Vec::<InstanciaReporte>::new);
    let loading = use_state(|| true);
    let busqueda = use_state(String::new);
    let reload = use_state(|| 0u32);

    let seleccionada = use_state(|| None::<InstanciaReporte>);
    let modo = use_state(|| ModoEnvio::Archivo);
    let link_reporte = use_state(String::new);
    let observaciones = use_state(String::new);
    let link_evidencia = use_state(String::new);
    let archivo_ref = use_node_ref();
    let enviando = use_state(|| false);
    let mensaje = use_state(|| None::<Mensaje>);

    {
        let instancias = instancias.clone();
        let loading = loading.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let (pendientes, vencidos) = join!(
                    instancia_service::listar_pendientes(&client),
                    instancia_service::listar_vencidos(&client),
                );
                match (pendientes, vencidos) {
                    (Ok(mut pendientes), Ok(vencidos)) => {
                        for v in vencidos {
                            if !pendientes.iter().any(|p| p.id == v.id) {
                                pendientes.push(v);
                            }
                        }
                        instancias.set(pendientes);
                    }
                    (pendientes, vencidos) => {
                        let e = pendientes.err().or(vencidos.err());
                        log::error!("❌ Error cargando mis reportes: {:?}", e);
                    }
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

    let abrir_envio = {
        let seleccionada = seleccionada.clone();
        let modo = modo.clone();
        let link_reporte = link_reporte.clone();
        let observaciones = observaciones.clone();
        let link_evidencia = link_evidencia.clone();
        Callback::from(move |instancia: InstanciaReporte| {
            seleccionada.set(Some(instancia));
            modo.set(ModoEnvio::Archivo);
            link_reporte.set(String::new());
            observaciones.set(String::new());
            link_evidencia.set(String::new());
        })
    };

    let cerrar_modal = {
        let seleccionada = seleccionada.clone();
        Callback::from(move |_: MouseEvent| seleccionada.set(None))
    };

    let enviar = {
        let seleccionada = seleccionada.clone();
        let modo = modo.clone();
        let link_reporte = link_reporte.clone();
        let observaciones = observaciones.clone();
        let link_evidencia = link_evidencia.clone();
        let archivo_ref = archivo_ref.clone();
        let enviando = enviando.clone();
        let instancias = instancias.clone();
        let mostrar_mensaje = mostrar_mensaje.clone();
        let auth = auth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let instancia = match &*seleccionada {
                Some(instancia) => instancia.clone(),
                None => return,
            };

            let obs = (*observaciones).clone();
            let obs = (!obs.trim().is_empty()).then_some(obs);
            let evidencia = (*link_evidencia).clone();
            let evidencia = (!evidencia.trim().is_empty()).then_some(evidencia);

            let client = auth.api();
            let seleccionada = seleccionada.clone();
            let enviando = enviando.clone();
            let instancias = instancias.clone();
            let mostrar_mensaje = mostrar_mensaje.clone();

            match *modo {
                ModoEnvio::Archivo => {
                    let archivo = archivo_ref
                        .cast::<HtmlInputElement>()
                        .and_then(|input| input.files())
                        .and_then(|files| files.get(0));
                    let archivo = match archivo {
                        Some(archivo) => archivo,
                        None => {
                            mostrar_mensaje.emit(Mensaje {
                                exito: false,
                                texto: "Seleccione el archivo del reporte".to_string(),
                            });
                            return;
                        }
                    };

                    enviando.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        match instancia_service::enviar_reporte(
                            &client,
                            instancia.id,
                            archivo,
                            obs.as_deref(),
                            evidencia.as_deref(),
                        )
                        .await
                        {
                            Ok(actualizada) => {
                                log::info!("✅ Reporte {} enviado", actualizada.reporte_id);
                                // Reemplazar por id en la lista local
                                let lista: Vec<InstanciaReporte> = (*instancias)
                                    .iter()
                                    .map(|i| if i.id == actualizada.id { actualizada.clone() } else { i.clone() })
                                    .collect();
                                instancias.set(lista);
                                seleccionada.set(None);
                                mostrar_mensaje.emit(Mensaje {
                                    exito: true,
                                    texto: "Reporte enviado exitosamente".to_string(),
                                });
                            }
                            Err(e) => {
                                log::error!("❌ Error enviando reporte: {}", e);
                                mostrar_mensaje.emit(Mensaje {
                                    exito: false,
                                    texto: e.user_message(),
                                });
                            }
                        }
                        enviando.set(false);
                    });
                }
                ModoEnvio::Link => {
                    let link = (*link_reporte).clone();
                    if link.trim().is_empty() {
                        mostrar_mensaje.emit(Mensaje {
                            exito: false,
                            texto: "Ingrese el link del reporte".to_string(),
                        });
                        return;
                    }

                    enviando.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        match instancia_service::enviar_reporte_con_link(
                            &client,
                            instancia.id,
                            &link,
                            obs.as_deref(),
                            evidencia.as_deref(),
                        )
                        .await
                        {
                            Ok(actualizada) => {
                                log::info!("✅ Reporte {} enviado por link", actualizada.reporte_id);
                                let lista: Vec<InstanciaReporte> = (*instancias)
                                    .iter()
                                    .map(|i| if i.id == actualizada.id { actualizada.clone() } else { i.clone() })
                                    .collect();
                                instancias.set(lista);
                                seleccionada.set(None);
                                mostrar_mensaje.emit(Mensaje {
                                    exito: true,
                                    texto: "Reporte enviado exitosamente".to_string(),
                                });
                            }
                            Err(e) => {
                                log::error!("❌ Error enviando reporte: {}", e);
                                mostrar_mensaje.emit(Mensaje {
                                    exito: false,
                                    texto: e.user_message(),
                                });
                            }
                        }
                        enviando.set(false);
                    });
                }
            }
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
        })
        .cloned()
        .collect();

    let paginacion = use_pagination(filtradas, 10);

    html! {
        <div class="mis-reportes-view">
            if let Some(m) = &*mensaje {
                <div class={if m.exito { "banner banner-success" } else { "banner banner-error" }}>
                    {m.texto.clone()}
                </div>
            }

            <div class="panel">
                <div class="panel-header">
                    <h3>{"Mis Reportes"}</h3>
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
                                <th>{"Vencimiento"}</th>
                                <th>{"Estado"}</th>
                                <th class="text-right">{"Acciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if paginacion.page_items.is_empty() {
                                <tr><td colspan="6" class="empty-row">{"No tiene reportes pendientes"}</td></tr>
                            } else {
                                {
                                    paginacion.page_items.iter().map(|i| {
                                        let abrir = {
                                            let abrir_envio = abrir_envio.clone();
                                            let instancia = i.clone();
                                            Callback::from(move |_: MouseEvent| abrir_envio.emit(instancia.clone()))
                                        };
                                        html! {
                                            <tr key={i.id.to_string()}>
                                                <td>
                                                    <p class="cell-title">{&i.reporte_nombre}</p>
                                                    <p class="cell-subtitle">{&i.reporte_id}</p>
                                                </td>
                                                <td>{&i.entidad_nombre}</td>
                                                <td>{&i.periodo_reportado}</td>
                                                <td>{crate::utils::date::format_fecha(&i.fecha_vencimiento_calculada)}</td>
                                                <td>{estado_badge(i)}</td>
                                                <td class="text-right">
                                                    if !i.enviado {
                                                        <button class="btn-primary" onclick={abrir}>{"Enviar"}</button>
                                                    }
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
                    <h4>{"Enviar Reporte"}</h4>

                    <InstanciaDetalle instancia={instancia.clone()} />

                    <form onsubmit={enviar}>
                        <div class="tabs">
                            <button
                                type="button"
                                class={if *modo == ModoEnvio::Archivo { "tab active" } else { "tab" }}
                                onclick={{
                                    let modo = modo.clone();
                                    Callback::from(move |_: MouseEvent| modo.set(ModoEnvio::Archivo))
                                }}
                            >{"Adjuntar archivo"}</button>
                            <button
                                type="button"
                                class={if *modo == ModoEnvio::Link { "tab active" } else { "tab" }}
                                onclick={{
                                    let modo = modo.clone();
                                    Callback::from(move |_: MouseEvent| modo.set(ModoEnvio::Link))
                                }}
                            >{"Enviar link"}</button>
                        </div>

                        if *modo == ModoEnvio::Archivo {
                            <div class="form-group">
                                <label>{"Archivo del reporte "}<span class="required">{"*"}</span></label>
                                <input type="file" ref={archivo_ref.clone()} />
                            </div>
                        } else {
                            <div class="form-group">
                                <label>{"Link del reporte "}<span class="required">{"*"}</span></label>
                                <input
                                    type="url"
                                    placeholder="https://..."
                                    value={(*link_reporte).clone()}
                                    oninput={{
                                        let link_reporte = link_reporte.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                link_reporte.set(input.value());
                                            }
                                        })
                                    }}
                                />
                            </div>
                        }

                        <div class="form-group">
                            <label>{"Link de evidencia de envío"}</label>
                            <input
                                type="url"
                                placeholder="https://..."
                                value={(*link_evidencia).clone()}
                                oninput={{
                                    let link_evidencia = link_evidencia.clone();
                                    Callback::from(move |e: InputEvent| {
                                        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                            link_evidencia.set(input.value());
                                        }
                                    })
                                }}
                            />
                        </div>

                        <div class="form-group">
                            <label>{"Observaciones"}</label>
                            <textarea
                                rows="3"
                                value={(*observaciones).clone()}
                                oninput={{
                                    let observaciones = observaciones.clone();
                                    Callback::from(move |e: InputEvent| {
                                        if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                                            observaciones.set(area.value());
                                        }
                                    })
                                }}
                            ></textarea>
                        </div>

                        <div class="modal-actions">
                            <button type="button" onclick={cerrar_modal.clone()} disabled={*enviando}>
                                {"Cancelar"}
                            </button>
                            <button type="submit" class="btn-primary" disabled={*enviando}>
                                {if *enviando { "Enviando..." } else { "Enviar Reporte" }}
                            </button>
                        </div>
                    </form>
                </div>
            }
        </div>
    }
}
