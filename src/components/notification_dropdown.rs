use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::CONFIG;
use crate::hooks::use_auth;
use crate::models::Alerta;
use crate::services::alerta_service;
use crate::utils::date::tiempo_relativo;

/// Color e icono según el tipo de alerta.
fn estilo_alerta(alerta: &Alerta) -> (&'static str, &'static str) {
    let tipo = alerta
        .tipo_alerta_nombre
        .as_deref()
        .unwrap_or("")
        .to_uppercase();

    if tipo.contains("VENCID") || tipo.contains("CRÍTICA") || tipo.contains("CRITICA") {
        ("alerta-critica", "🔴")
    } else if tipo.contains("URGENTE") || tipo.contains("RIESGO") || tipo.contains("1 DÍA") {
        ("alerta-urgente", "🟠")
    } else if tipo.contains("INTERMEDIA") || tipo.contains("SEGUIMIENTO") || tipo.contains("5 DÍAS") {
        ("alerta-seguimiento", "🟡")
    } else {
        ("alerta-info", "🟢")
    }
}

/// Campana de notificaciones de la cabecera. El contador de no leídas
/// se refresca en un intervalo fijo mientras el componente viva; los
/// fallos del sondeo solo se loguean.
#[function_component(NotificationDropdown)]
pub fn notification_dropdown() -> Html {
    let auth = use_auth();
    let is_open = use_state(|| false);
    let alertas = use_state(Vec::<Alerta>::new);
    let loading = use_state(|| false);
    let count = use_state(|| 0u32);

    // Contador al montar y cada intervalo configurado. El Interval se
    // cancela al desmontar (drop en el destructor del efecto).
    {
        let count = count.clone();
        let auth = auth.clone();
        use_effect_with((), move |_| {
            let fetch_count = {
                let count = count.clone();
                let auth = auth.clone();
                move || {
                    let count = count.clone();
                    let client = auth.api();
                    wasm_bindgen_futures::spawn_local(async move {
                        match alerta_service::contar_no_leidas(&client).await {
                            Ok(n) => count.set(n),
                            Err(e) => log::error!("❌ Error cargando contador de alertas: {}", e),
                        }
                    });
                }
            };

            fetch_count();
            let interval = Interval::new(CONFIG.alert_poll_seconds * 1000, fetch_count);
            move || drop(interval)
        });
    }

    // Cargar las no leídas al abrir el panel
    {
        let alertas = alertas.clone();
        let loading = loading.clone();
        let count = count.clone();
        let auth = auth.clone();
        use_effect_with(*is_open, move |open| {
            if *open {
                let client = auth.api();
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match alerta_service::listar_mis_alertas_no_leidas(&client).await {
                        Ok(data) => {
                            count.set(data.len() as u32);
                            // Máximo 10 en el panel
                            alertas.set(data.into_iter().take(10).collect());
                        }
                        Err(e) => log::error!("❌ Error cargando alertas: {}", e),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let on_marcar_leida = {
        let alertas = alertas.clone();
        let count = count.clone();
        let auth = auth.clone();
        Callback::from(move |id: i64| {
            let alertas = alertas.clone();
            let count = count.clone();
            let client = auth.api();
            wasm_bindgen_futures::spawn_local(async move {
                match alerta_service::marcar_como_leida(&client, id).await {
                    Ok(_) => {
                        let restantes: Vec<Alerta> =
                            (*alertas).iter().filter(|a| a.id != id).cloned().collect();
                        alertas.set(restantes);
                        count.set((*count).saturating_sub(1));
                    }
                    Err(e) => log::error!("❌ Error marcando alerta como leída: {}", e),
                }
            });
        })
    };

    let on_marcar_todas = {
        let alertas = alertas.clone();
        let count = count.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            let alertas = alertas.clone();
            let count = count.clone();
            let client = auth.api();
            wasm_bindgen_futures::spawn_local(async move {
                match alerta_service::marcar_todas_como_leidas(&client).await {
                    Ok(r) => {
                        log::info!("✅ {} alertas marcadas como leídas", r.cantidad);
                        alertas.set(Vec::new());
                        count.set(0);
                    }
                    Err(e) => log::error!("❌ Error marcando todas como leídas: {}", e),
                }
            });
        })
    };

    let badge = if *count > 9 {
        "9+".to_string()
    } else {
        count.to_string()
    };

    html! {
        <div class="notification-dropdown">
            <button class="notification-bell" onclick={toggle}>
                {"🔔"}
                if *count > 0 {
                    <span class="notification-badge">{badge}</span>
                }
            </button>

            if *is_open {
                <div class="notification-overlay" onclick={close.clone()}></div>
                <div class="notification-panel">
                    <div class="notification-header">
                        <h5>{"Notificaciones"}</h5>
                        if *count > 0 {
                            <span class="notification-count">{*count}</span>
                            <button class="link-button" onclick={on_marcar_todas}>
                                {"Marcar todas"}
                            </button>
                        }
                        <button class="close-button" onclick={close.clone()}>{"✕"}</button>
                    </div>

                    <div class="notification-list">
                        if *loading {
                            <div class="spinner"></div>
                        } else if alertas.is_empty() {
                            <div class="notification-empty">
                                <p>{"No tienes notificaciones pendientes"}</p>
                                <p class="muted">{"¡Todo está al día! 🎉"}</p>
                            </div>
                        } else {
                            <ul>
                                {
                                    alertas.iter().map(|alerta| {
                                        let (clase, emoji) = estilo_alerta(alerta);
                                        let id = alerta.id;
                                        let onclick = {
                                            let on_marcar_leida = on_marcar_leida.clone();
                                            Callback::from(move |_: MouseEvent| on_marcar_leida.emit(id))
                                        };
                                        html! {
                                            <li key={alerta.id.to_string()} class={classes!("notification-item", clase)} {onclick}>
                                                <span class="alerta-emoji">{emoji}</span>
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
                                                </div>
                                                if !alerta.leida {
                                                    <span class="alerta-no-leida"></span>
                                                }
                                            </li>
                                        }
                                    }).collect::<Html>()
                                }
                            </ul>
                        }
                    </div>

                    <div class="notification-footer">
                        <Link<Route> to={Route::Alertas}>
                            {"Ver todas las notificaciones"}
                        </Link<Route>>
                    </div>
                </div>
            }
        </div>
    }
}
