use futures::join;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::{Rol, RolRef, Usuario, UsuarioRequest};
use crate::services::{rol_service, usuario_service};

#[derive(Clone, PartialEq, Default)]
struct UsuarioForm {
    id: i64,
    cedula: String,
    nombre_completo: String,
    correo: String,
    contrasena: String,
    proceso: String,
    cargo: String,
    telefono: String,
    rol_id: i64,
    activo: bool,
}

impl UsuarioForm {
    fn from_usuario(usuario: &Usuario) -> Self {
        Self {
            id: usuario.id.unwrap_or(0),
            cedula: usuario.cedula.clone(),
            nombre_completo: usuario.nombre_completo.clone(),
            correo: usuario.correo.clone(),
            // La contraseña actual nunca se muestra
            contrasena: String::new(),
            proceso: usuario.proceso.clone(),
            cargo: usuario.cargo.clone(),
            telefono: usuario.telefono.clone().unwrap_or_default(),
            rol_id: usuario.rol.id,
            activo: usuario.activo,
        }
    }

    fn to_request(&self) -> UsuarioRequest {
        UsuarioRequest {
            cedula: self.cedula.clone(),
            nombre_completo: self.nombre_completo.clone(),
            correo: self.correo.clone(),
            contrasena: if self.contrasena.is_empty() {
                None
            } else {
                Some(self.contrasena.clone())
            },
            proceso: self.proceso.clone(),
            cargo: self.cargo.clone(),
            telefono: if self.telefono.is_empty() {
                None
            } else {
                Some(self.telefono.clone())
            },
            rol: RolRef { id: self.rol_id },
            activo: self.activo,
        }
    }
}

fn alert(mensaje: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(mensaje);
    }
}

fn confirm(mensaje: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(mensaje).ok())
        .unwrap_or(false)
}

/// Gestión de usuarios y roles (solo administrador). La lista y los
/// roles de referencia se cargan en paralelo; crear/editar/eliminar
/// reconcilian la lista local sin refetch.
#[function_component(UsuariosView)]
pub fn usuarios_view() -> Html {
    let auth = use_auth();

    let usuarios = use_state(Vec::<Usuario>::new);
    let roles = use_state(Vec::<Rol>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    let modal_open = use_state(|| false);
    let is_new = use_state(|| false);
    let saving = use_state(|| false);
    let form = use_state(UsuarioForm::default);

    let search_term = use_state(String::new);
    let filter_rol = use_state(|| "Todos".to_string());
    let filter_estado = use_state(|| "Todos".to_string());
    let show_filters = use_state(|| false);
    let open_dropdown = use_state(|| None::<i64>);

    {
        let usuarios = usuarios.clone();
        let roles = roles.clone();
        let loading = loading.clone();
        let error = error.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            let client = auth.api();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let (usuarios_result, roles_result) = join!(
                    usuario_service::listar(&client),
                    rol_service::listar(&client),
                );
                match (usuarios_result, roles_result) {
                    (Ok(usuarios_data), Ok(roles_data)) => {
                        usuarios.set(usuarios_data);
                        roles.set(roles_data);
                    }
                    (usuarios_result, roles_result) => {
                        let e = usuarios_result.err().or(roles_result.err());
                        log::error!("❌ Error cargando usuarios: {:?}", e);
                        error.set(Some(
                            "Error al cargar los datos. Verifique que el backend esté ejecutándose."
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
        let roles = roles.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(UsuarioForm {
                rol_id: roles.first().map(|r| r.id).unwrap_or(0),
                activo: true,
                ..UsuarioForm::default()
            });
            is_new.set(true);
            modal_open.set(true);
        })
    };

    let abrir_edicion = {
        let form = form.clone();
        let is_new = is_new.clone();
        let modal_open = modal_open.clone();
        let open_dropdown = open_dropdown.clone();
        Callback::from(move |usuario: Usuario| {
            form.set(UsuarioForm::from_usuario(&usuario));
            is_new.set(false);
            modal_open.set(true);
            open_dropdown.set(None);
        })
    };

    let cerrar_modal = {
        let modal_open = modal_open.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            modal_open.set(false);
            form.set(UsuarioForm::default());
        })
    };

    let eliminar = {
        let usuarios = usuarios.clone();
        let open_dropdown = open_dropdown.clone();
        let auth = auth.clone();
        Callback::from(move |id: i64| {
            open_dropdown.set(None);
            if !confirm("¿Seguro que deseas eliminar este usuario?") {
                return;
            }
            let usuarios = usuarios.clone();
            let client = auth.api();
            wasm_bindgen_futures::spawn_local(async move {
                match usuario_service::eliminar(&client, id).await {
                    Ok(()) => {
                        // Remover por id sin refetch
                        let restantes: Vec<Usuario> = (*usuarios)
                            .iter()
                            .filter(|u| u.id != Some(id))
                            .cloned()
                            .collect();
                        usuarios.set(restantes);
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando usuario: {}", e);
                        alert("Error al eliminar el usuario");
                    }
                }
            });
        })
    };

    let guardar = {
        let form = form.clone();
        let is_new = is_new.clone();
        let saving = saving.clone();
        let usuarios = usuarios.clone();
        let modal_open = modal_open.clone();
        let auth = auth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let datos = (*form).clone();

            if *is_new && datos.contrasena.is_empty() {
                alert("La contraseña es obligatoria para nuevos usuarios");
                return;
            }
            if datos.rol_id == 0 {
                alert("Seleccione un rol");
                return;
            }

            let request = datos.to_request();
            let es_nuevo = *is_new;
            let saving = saving.clone();
            let usuarios = usuarios.clone();
            let modal_open = modal_open.clone();
            let form = form.clone();
            let client = auth.api();

            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let resultado = if es_nuevo {
                    usuario_service::crear(&client, &request).await
                } else {
                    usuario_service::actualizar(&client, datos.id, &request).await
                };

                match resultado {
                    Ok(guardado) => {
                        let mut lista = (*usuarios).clone();
                        if es_nuevo {
                            lista.push(guardado);
                        } else if let Some(pos) = lista.iter().position(|u| u.id == Some(datos.id)) {
                            lista[pos] = guardado;
                        }
                        usuarios.set(lista);
                        modal_open.set(false);
                        form.set(UsuarioForm::default());
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando usuario: {}", e);
                        alert(&e.user_message());
                    }
                }
                saving.set(false);
            });
        })
    };

    let limpiar_filtros = {
        let search_term = search_term.clone();
        let filter_rol = filter_rol.clone();
        let filter_estado = filter_estado.clone();
        Callback::from(move |_: MouseEvent| {
            search_term.set(String::new());
            filter_rol.set("Todos".to_string());
            filter_estado.set("Todos".to_string());
        })
    };

    let filtrados: Vec<Usuario> = usuarios
        .iter()
        .filter(|u| {
            let term = search_term.to_lowercase();
            let match_search = term.is_empty()
                || u.nombre_completo.to_lowercase().contains(&term)
                || u.correo.to_lowercase().contains(&term)
                || u.cedula.to_lowercase().contains(&term);
            let match_rol = *filter_rol == "Todos" || u.rol.nombre == *filter_rol;
            let match_estado = *filter_estado == "Todos"
                || (*filter_estado == "Activo" && u.activo)
                || (*filter_estado == "Inactivo" && !u.activo);
            match_search && match_rol && match_estado
        })
        .cloned()
        .collect();

    if *loading {
        return html! {
            <div class="panel">
                <div class="dashboard-loading">
                    <div class="spinner"></div>
                    <span>{"Cargando usuarios..."}</span>
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
                <h3>{"Gestión de Usuarios y Roles"}</h3>
                <div class="panel-actions">
                    <button onclick={{
                        let show_filters = show_filters.clone();
                        Callback::from(move |_: MouseEvent| show_filters.set(!*show_filters))
                    }}>{"Filtros"}</button>
                    <button onclick={on_reload.clone()} title="Recargar">{"⟳"}</button>
                    <button class="btn-primary" onclick={abrir_nuevo}>{"+ Nuevo Usuario"}</button>
                </div>
            </div>

            if *show_filters {
                <div class="filter-panel">
                    <input
                        type="text"
                        placeholder="Buscar por nombre, correo o cédula..."
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
                    <div class="filter-row">
                        <label>{"Rol"}
                            <select onchange={{
                                let filter_rol = filter_rol.clone();
                                Callback::from(move |e: Event| {
                                    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                        filter_rol.set(select.value());
                                    }
                                })
                            }}>
                                <option value="Todos" selected={*filter_rol == "Todos"}>{"Todos los roles"}</option>
                                {
                                    roles.iter().map(|rol| html! {
                                        <option key={rol.id.to_string()} value={rol.nombre.clone()} selected={*filter_rol == rol.nombre}>
                                            {rol.nombre.clone()}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </label>
                        <label>{"Estado"}
                            <select onchange={{
                                let filter_estado = filter_estado.clone();
                                Callback::from(move |e: Event| {
                                    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                        filter_estado.set(select.value());
                                    }
                                })
                            }}>
                                <option value="Todos" selected={*filter_estado == "Todos"}>{"Todos"}</option>
                                <option value="Activo" selected={*filter_estado == "Activo"}>{"Activo"}</option>
                                <option value="Inactivo" selected={*filter_estado == "Inactivo"}>{"Inactivo"}</option>
                            </select>
                        </label>
                        <button onclick={limpiar_filtros}>{"Limpiar"}</button>
                    </div>
                </div>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Cédula"}</th>
                        <th>{"Nombre"}</th>
                        <th>{"Correo"}</th>
                        <th>{"Cargo"}</th>
                        <th>{"Rol"}</th>
                        <th>{"Estado"}</th>
                        <th class="text-right">{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    if filtrados.is_empty() {
                        <tr><td colspan="7" class="empty-row">{"No se encontraron usuarios"}</td></tr>
                    } else {
                        {
                            filtrados.iter().map(|usuario| {
                                let id = usuario.id.unwrap_or(0);
                                let usuario_edit = usuario.clone();
                                let abrir_edicion = abrir_edicion.clone();
                                let eliminar = eliminar.clone();
                                let dropdown_abierto = *open_dropdown == Some(id);
                                let toggle_dropdown = {
                                    let open_dropdown = open_dropdown.clone();
                                    Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        open_dropdown.set(if dropdown_abierto { None } else { Some(id) });
                                    })
                                };
                                html! {
                                    <tr key={id.to_string()}>
                                        <td>{&usuario.cedula}</td>
                                        <td>{&usuario.nombre_completo}</td>
                                        <td>{&usuario.correo}</td>
                                        <td>{&usuario.cargo}</td>
                                        <td><span class="badge badge-blue">{&usuario.rol.nombre}</span></td>
                                        <td>
                                            <span class={if usuario.activo { "badge badge-green" } else { "badge badge-red" }}>
                                                {if usuario.activo { "Activo" } else { "Inactivo" }}
                                            </span>
                                        </td>
                                        <td class="text-right actions-cell">
                                            <button class="dots-button" onclick={toggle_dropdown}>{"⋯"}</button>
                                            if dropdown_abierto {
                                                <div class="actions-dropdown">
                                                    <button onclick={Callback::from(move |_: MouseEvent| abrir_edicion.emit(usuario_edit.clone()))}>
                                                        {"Editar"}
                                                    </button>
                                                    <button class="danger" onclick={Callback::from(move |_: MouseEvent| eliminar.emit(id))}>
                                                        {"Eliminar"}
                                                    </button>
                                                </div>
                                            }
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
                        <h4>{if *is_new { "Crear nuevo usuario" } else { "Editar usuario" }}</h4>

                        <div class="form-grid">
                            <div class="form-group">
                                <label>
                                    {"Cédula "}<span class="required">{"*"}</span>
                                    if !*is_new { <span class="muted">{" (no editable)"}</span> }
                                </label>
                                <input
                                    type="text"
                                    value={datos.cedula.clone()}
                                    required=true
                                    disabled={!*is_new}
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(UsuarioForm { cedula: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>

                            <div class="form-group">
                                <label>{"Nombre Completo "}<span class="required">{"*"}</span></label>
                                <input
                                    type="text"
                                    value={datos.nombre_completo.clone()}
                                    required=true
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(UsuarioForm { nombre_completo: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>

                            <div class="form-group form-wide">
                                <label>{"Correo Electrónico "}<span class="required">{"*"}</span></label>
                                <input
                                    type="email"
                                    value={datos.correo.clone()}
                                    required=true
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(UsuarioForm { correo: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>

                            <div class="form-group form-wide">
                                <label>
                                    {"Contraseña "}
                                    if *is_new {
                                        <span class="required">{"*"}</span>
                                    } else {
                                        <span class="muted">{" (dejar vacío para mantener actual)"}</span>
                                    }
                                </label>
                                <input
                                    type="password"
                                    value={datos.contrasena.clone()}
                                    required={*is_new}
                                    placeholder={if *is_new { "Mínimo 6 caracteres" } else { "••••••••" }}
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(UsuarioForm { contrasena: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>

                            <div class="form-group">
                                <label>{"Proceso "}<span class="required">{"*"}</span></label>
                                <input
                                    type="text"
                                    value={datos.proceso.clone()}
                                    placeholder="Ej: Gestión Administrativa"
                                    required=true
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(UsuarioForm { proceso: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>

                            <div class="form-group">
                                <label>{"Cargo "}<span class="required">{"*"}</span></label>
                                <input
                                    type="text"
                                    value={datos.cargo.clone()}
                                    placeholder="Ej: Coordinador"
                                    required=true
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(UsuarioForm { cargo: input.value(), ..(*form).clone() });
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
                                    placeholder="3001234567"
                                    oninput={{
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                form.set(UsuarioForm { telefono: input.value(), ..(*form).clone() });
                                            }
                                        })
                                    }}
                                />
                            </div>

                            <div class="form-group">
                                <label>{"Rol "}<span class="required">{"*"}</span></label>
                                <select onchange={{
                                    let form = form.clone();
                                    Callback::from(move |e: Event| {
                                        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                            if let Ok(id) = select.value().parse::<i64>() {
                                                form.set(UsuarioForm { rol_id: id, ..(*form).clone() });
                                            }
                                        }
                                    })
                                }}>
                                    <option value="0" disabled=true selected={datos.rol_id == 0}>{"Seleccione un rol"}</option>
                                    {
                                        roles.iter().map(|rol| html! {
                                            <option key={rol.id.to_string()} value={rol.id.to_string()} selected={datos.rol_id == rol.id}>
                                                {rol.nombre.clone()}
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </div>

                            <div class="form-group form-wide">
                                <label>{"Estado"}</label>
                                <div class="radio-row">
                                    <label>
                                        <input
                                            type="radio"
                                            name="estado"
                                            checked={datos.activo}
                                            onchange={{
                                                let form = form.clone();
                                                Callback::from(move |_: Event| {
                                                    form.set(UsuarioForm { activo: true, ..(*form).clone() });
                                                })
                                            }}
                                        />
                                        {"Activo"}
                                    </label>
                                    <label>
                                        <input
                                            type="radio"
                                            name="estado"
                                            checked={!datos.activo}
                                            onchange={{
                                                let form = form.clone();
                                                Callback::from(move |_: Event| {
                                                    form.set(UsuarioForm { activo: false, ..(*form).clone() });
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
                                        "Crear Usuario"
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
