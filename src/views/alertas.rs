use chrono::Utc;
use yew::prelude::*;

use crate::components::Pagination;
use crate::hooks::{use_auth, use_pagination};
use crate::models::Alerta;
use crate::services::alerta_service;
use crate::utils::date::tiempo_relativo;

/// Bandeja completa de notificaciones del usuario, con marcado de
/// leídas individual y masivo reconciliado en la lista local.
#[function_component(AlertasView)]
pub fn alertas_view() -> Html {
    let auth = use_auth();

    let alertas = use_state(Vec::<Alerta>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let solo_no_leidas = use_state(|| false);
    let reload = use_state(|| 0u32);

    {
        let alertas = alertas.clone();
        let loading = loading.clone();
        let error = error.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match alerta_service::listar_mis_alertas(&client).await {
                    Ok(data) => alertas.set(data),
                    Err(e) => {
                        log::error!("❌ Error cargando alertas: {}", e);
                        error.set(Some(
                            "Error al cargar las notificaciones. Verifique que el backend esté ejecutándose."
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

    let marcar_leida = {
        let alertas = alertas.clone();
        let auth = auth.clone();
        Callback::from(move |id: i64| {
            let alertas = alertas.clone();
            let client = auth.api();
            wasm_bindgen_futures::spawn_local(async move {
                match alerta_service::marcar_como_leida(&client, id).await {
                    Ok(actualizada) => {
                        let lista: Vec<Alerta> = (*alertas)
                            .iter()
                            .map(|a| if a.id == id { actualizada.clone() } else { a.clone() })
                            .collect();
                        alertas.set(lista);
                    }
                    Err(e) => log::error!("❌ Error marcando alerta como leída: {}", e),
                }
            });
        })
    };

    let marcar_todas = {
        let alertas = alertas.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            let alertas = alertas.clone();
            let client = auth.api();
            wasm_bindgen_futures::spawn_local(async move {
                match alerta_service::marcar_todas_como_leidas(&client).await {
                    Ok(r) => {
                        log::info!("✅ {} alertas marcadas como leídas", r.cantidad);
                        let lista: Vec<Alerta> = (*alertas)
                            .iter()
                            .map(|a| Alerta { leida: true, ..a.clone() })
                            .collect();
                        alertas.set(lista);
                    }
                    Err(e) => log::error!("❌ Error marcando todas como leídas: {}", e),
                }
            });
        })
    };

    let visibles: Vec<Alerta> = alertas
        .iter()
        .filter(|a| !*solo_no_leidas || !a.leida)
        .cloned()
        .collect();

    let paginacion = use_pagination(visibles, 20);
    let no_leidas = alertas.iter().filter(|a| !a.leida).count();

    if *loading {
        return html! {
            <div class="panel">
                <div class="dashboard-loading">
                    <div class="spinner"></div>
                    <span>{"Cargando notificaciones..."}</span>
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
        <div class="panel alertas-view">
            <div class="panel-header">
                <h3>{"Mis Notificaciones"}</h3>
                <div class="panel-actions">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            checked={*solo_no_leidas}
                            onchange={{
                                let solo_no_leidas = solo_no_leidas.clone();
                                Callback::from(move |_: Event| solo_no_leidas.set(!*solo_no_leidas))
                            }}
                        />
                        {"Solo no leídas"}
                    </label>
                    if no_leidas > 0 {
                        <button onclick={marcar_todas}>{format!("Marcar todas ({})", no_leidas)}</button>
                    }
                    <button onclick={on_reload.clone()} title="Recargar">{"⟳"}</button>
                </div>
            </div>

            if paginacion.page_items.is_empty() {
                <div class="notification-empty">
                    <p>{"No tienes notificaciones"}</p>
                    <p class="muted">{"¡Todo está al día! 🎉"}</p>
                </div>
            } else {
                <ul class="alertas-lista">
                    {
                        paginacion.page_items.iter().map(|alerta| {
                            let id = alerta.id;
                            let leida = alerta.leida;
                            let onclick = {
                                let marcar_leida = marcar_leida.clone();
                                Callback::from(move |_: MouseEvent| {
                                    if !leida {
                                        marcar_leida.emit(id);
                                    }
                                })
                            };
                            html! {
                                <li key={id.to_string()} class={if leida { "alerta-row leida" } else { "alerta-row" }} {onclick}>
                                    <div class="alerta-body">
                                        <div class="alerta-top">
                                            <p class="alerta-tipo">
                                                {alerta.tipo_alerta_nombre.clone().unwrap_or_else(|| "Alerta".to_string())}
                                            </p>
                                            <span class="alerta-tiempo">
                                                {tiempo_relativo(&alerta.fecha_programada, Utc::now())}
                                            </span>
                                        </div>
                                        <p class="alerta-reporte">
                                            {alerta.reporte_nombre.clone().unwrap_or_default()}
                                            if let Some(periodo) = &alerta.periodo_reportado {
                                                <span class="muted">{format!(" • {}", periodo)}</span>
                                            }
                                        </p>
                                        if let Some(mensaje) = &alerta.mensaje {
                                            <p class="alerta-mensaje">{mensaje.clone()}</p>
                                        }
                                        if let Some(destino) = &alerta.usuario_destino_nombre {
                                            <p class="muted">{format!("Para: {}", destino)}</p>
                                        }
                                    </div>
                                    if !leida {
                                        <span class="alerta-no-leida"></span>
                                    }
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>

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
    }
}
