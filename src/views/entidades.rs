use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::Entidad;
use crate::services::entidad_service;

#[derive(Clone, PartialEq)]
struct EntidadForm {
    id: i64,
    nit: String,
    razon_social: String,
    sigla: String,
    tipo_entidad: String,
    direccion: String,
    telefono: String,
    email: String,
    activo: bool,
}

impl Default for EntidadForm {
    fn default() -> Self {
        Self {
            id: 0,
            nit: String::new(),
            razon_social: String::new(),
            sigla: String::new(),
            tipo_entidad: String::new(),
            direccion: String::new(),
            telefono: String::new(),
            email: String::new(),
            activo: true,
        }
    }
}

impl EntidadForm {
    fn from_entidad(entidad: &Entidad) -> Self {
        Self {
            id: entidad.id.unwrap_or(0),
            nit: entidad.nit.clone(),
            razon_social: entidad.razon_social.clone(),
            sigla: entidad.sigla.clone().unwrap_or_default(),
            tipo_entidad: entidad.tipo_entidad.clone(),
            direccion: entidad.direccion.clone().unwrap_or_default(),
            telefono: entidad.telefono.clone().unwrap_or_default(),
            email: entidad.email.clone().unwrap_or_default(),
            activo: entidad.activo,
        }
    }

    fn to_entidad(&self) -> Entidad {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        Entidad {
            id: if self.id == 0 { None } else { Some(self.id) },
            nit: self.nit.clone(),
            razon_social: self.razon_social.clone(),
            sigla: opt(&self.sigla),
            tipo_entidad: self.tipo_entidad.clone(),
            direccion: opt(&self.direccion),
            telefono: opt(&self.telefono),
            email: opt(&self.email),
            activo: self.activo,
        }
    }
}

fn alert(mensaje: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(mensaje);
    }
}

/// Gestión de entidades reguladas (solo administrador).
#[function_component(EntidadesView)]
pub fn entidades_view() -> Html {
    let auth = use_auth();

    let entidades = use_state(Vec::<Entidad>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    let modal_open = use_state(|| false);
    let is_new = use_state(|| false);
    let saving = use_state(|| false);
    let form = use_state(EntidadForm::default);
    let search_term = use_state(String::new);

    {
        let entidades = entidades.clone();
        let loading = loading.clone();
        let error = error.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match entidad_service::listar(&client).await {
                    Ok(data) => entidades.set(data),
                    Err(e) => {
                        log::error!("❌ Error cargando entidades: {}", e);
                        error.set(Some(
                            "Error al cargar las entidades. Verifique que el backend esté ejecutándose."
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

    let abrir_nuevo = {
        let form = form.clone();
        let is_new = is_new.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(EntidadForm::default());
            is_new.set(true);
            modal_open.set(true);
        })
    };

    let cerrar_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(false))
    };

    let eliminar = {
        let entidades = entidades.clone();
        let auth = auth.clone();
        Callback::from(move |id: i64| {
            let confirmado = window()
                .and_then(|win| win.confirm_with_message("¿Seguro que deseas eliminar esta entidad?").ok())
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let entidades = entidades.clone();
            let client = auth.api();
            wasm_bindgen_futures::spawn_local(async move {
                match entidad_service::eliminar(&client, id).await {
                    Ok(()) => {
                        let restantes: Vec<Entidad> = (*entidades)
                            .iter()
                            .filter(|e| e.id != Some(id))
                            .cloned()
                            .collect();
                        entidades.set(restantes);
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando entidad: {}", e);
                        alert(&e.user_message());
                    }
                }
            });
        })
    };

    let guardar = {
        let form = form.clone();
        let is_new = is_new.clone();
        let saving = saving.clone();
        let entidades = entidades.clone();
        let modal_open = modal_open.clone();
        let auth = auth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let datos = (*form).clone();
            let cuerpo = datos.to_entidad();
            let es_nuevo = *is_new;

            let saving = saving.clone();
            let entidades = entidades.clone();
            let modal_open = modal_open.clone();
            let client = auth.api();

            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let resultado = if es_nuevo {
                    entidad_service::crear(&client, &cuerpo).await
                } else {
                    entidad_service::actualizar(&client, datos.id, &cuerpo).await
                };

                match resultado {
                    Ok(guardada) => {
                        let mut lista = (*entidades).clone();
                        if es_nuevo {
                            lista.push(guardada);
                        } else if let Some(pos) = lista.iter().position(|e| e.id == Some(datos.id)) {
                            lista[pos] = guardada;
                        }
                        entidades.set(lista);
                        modal_open.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando entidad: {}", e);
                        alert(&e.user_message());
                    }
                }
                saving.set(false);
            });
        })
    };

    let filtradas: Vec<Entidad> = entidades
        .iter()
        .filter(|e| {
            let term = search_term.to_lowercase();
            term.is_empty()
                || e.razon_social.to_lowercase().contains(&term)
                || e.nit.to_lowercase().contains(&term)
                || e.sigla.as_deref().unwrap_or("").to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    if *loading {
        return html! {
            <div class="panel">
                <div class="dashboard-loading">
                    <div class="spinner"></div>
                    <span>{"Cargando entidades..."}</span>
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

    let datos = (*form).clone();

    html! {
        <div class="panel crud-panel">
            <div class="panel-header">
                <h3>{"Gestión de Entidades"}</h3>
                <div class="panel-actions">
                    <input
                        type="text"
                        placeholder="Buscar por razón social, NIT o sigla..."
                        value={(*search_term).clone()}
                        oninput={{
                            let search_term = search_term.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    search_term.set(input.value());
                                }
                            })
                        }}
                    />
                    <button onclick={on_reload.clone()} title="Recargar">{"⟳"}</button>
                    <button class="btn-primary" onclick={abrir_nuevo}>{"+ Nueva Entidad"}</button>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"NIT"}</th>
                        <th>{"Razón Social"}</th>
                        <th>{"Sigla"}</th>
                        <th>{"Tipo"}</th>
                        <th>{"Email"}</th>
                        <th>{"Estado"}</th>
                        <th class="text-right">{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    if filtradas.is_empty() {
                        <tr><td colspan="7" class="empty-row">{"No se encontraron entidades"}</td></tr>
                    } else {
                        {
                            filtradas.iter().map(|entidad| {
                                let id = entidad.id.unwrap_or(0);
                                let editar = {
                                    let form = form.clone();
                                    let is_new = is_new.clone();
                                    let modal_open = modal_open.clone();
                                    let entidad = entidad.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        form.set(EntidadForm::from_entidad(&entidad));
                                        is_new.set(false);
                                        modal_open.set(true);
                                    })
                                };
                                let borrar = {
                                    let eliminar = eliminar.clone();
                                    Callback::from(move |_: MouseEvent| eliminar.emit(id))
                                };
                                html! {
                                    <tr key={id.to_string()}>
                                        <td>{&entidad.nit}</td>
                                        <td>{&entidad.razon_social}</td>
                                        <td>{entidad.sigla.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td>{&entidad.tipo_entidad}</td>
                                        <td>{entidad.email.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td>
                                            <span class={if entidad.activo { "badge badge-green" } else { "badge badge-red" }}>
                                                {if entidad.activo { "Activo" } else { "Inactivo" }}
                                            </span>
                                        </td>
                                        <td class="text-right actions-cell">
                                            <button onclick={editar}>{"Editar"}</button>
                                            <button class="danger" onclick={borrar}>{"Eliminar"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    }
                </tbody>
            </table>

            if *modal_open {
                <div class="modal-backdrop" onclick={cerrar_modal.clone()}></div>
                <div class="modal">
                    <button class="modal-close" onclick={cerrar_modal.clone()}>{"✕"}</button>
                    <form onsubmit={guardar}>
                        <h4>{if *is_new { "Crear nueva entidad" } else { "Editar entidad" }}</h4>

                        <div class="form-grid">
                            <div class="form-group">
                                <label>{"NIT "}<span class="required">{"*"}</span></label>
                                <input
                                    type="text"
                                    value={datos.nit.clone()}
                                    required=true
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(EntidadForm { nit: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Razón Social "}<span class="required">{"*"}</span></label>
                                <input
                                    type="text"
                                    value={datos.razon_social.clone()}
                                    required=true
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(EntidadForm { razon_social: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Sigla"}</label>
                                <input
                                    type="text"
                                    value={datos.sigla.clone()}
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(EntidadForm { sigla: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Tipo de Entidad "}<span class="required">{"*"}</span></label>
                                <input
                                    type="text"
                                    value={datos.tipo_entidad.clone()}
                                    placeholder="Ej: Superintendencia"
                                    required=true
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(EntidadForm { tipo_entidad: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>
                            <div class="form-group form-wide">
                                <label>{"Dirección"}</label>
                                <input
                                    type="text"
                                    value={datos.direccion.clone()}
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(EntidadForm { direccion: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Teléfono"}</label>
                                <input
                                    type="text"
                                    value={datos.telefono.clone()}
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(EntidadForm { telefono: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Email"}</label>
                                <input
                                    type="email"
                                    value={datos.email.clone()}
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(EntidadForm { email: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Estado"}</label>
                                <div class="radio-row">
                                    <label>
                                        <input
                                            type="radio"
                                            name="estado-entidad"
                                            checked={datos.activo}
                                            onchange={{
                                                let form = form.clone();
                                                Callback::from(move |_: Event| {
                                                    form.set(EntidadForm { activo: true, ..(*form).clone() });
                                                })
                                            }}
                                        />
                                        {"Activo"}
                                    </label>
                                    <label>
                                        <input
                                            type="radio"
                                            name="estado-entidad"
                                            checked={!datos.activo}
                                            onchange={{
                                                let form = form.clone();
                                                Callback::from(move |_: Event| {
                                                    form.set(EntidadForm { activo: false, ..(*form).clone() });
                                                })
                                            }}
                                        />
                                        {"Inactivo"}
                                    </label>
                                </div>
                            </div>
                        </div>

                        <div class="modal-actions">
                            <button type="button" onclick={cerrar_modal.clone()} disabled={*saving}>
                                {"Cancelar"}
                            </button>
                            <button type="submit" class="btn-primary" disabled={*saving}>
                                {
                                    if *saving {
                                        "Guardando..."
                                    } else if *is_new {
                                        "Crear Entidad"
                                    } else {
                                        "Guardar Cambios"
                                    }
                                }
                            </button>
                        </div>
                    </form>
                </div>
            }
        </div>
    }
}
